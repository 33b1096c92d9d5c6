//! Character-grid renderer
//!
//! Samples the playfield at the center of each cell: `@` for the avatar,
//! `#` for barriers, blank for open sky. Score and game over text follow the
//! grid.

use glam::Vec2;

use super::{FrameView, Renderer};

const AVATAR_CHAR: char = '@';
const BARRIER_CHAR: char = '#';
const SKY_CHAR: char = ' ';

#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Game units per character cell
    pub cell_size: f32,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { cell_size: 20.0 }
    }
}

impl TextRenderer {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(1.0),
        }
    }

    fn cell_char(&self, view: &FrameView<'_>, point: Vec2) -> char {
        if view.avatar.hitbox().contains_point(point) {
            return AVATAR_CHAR;
        }
        let height = view.playfield.height_f32();
        let blocked = view.obstacles.iter().any(|o| {
            o.top_rect().contains_point(point) || o.bottom_rect(height).contains_point(point)
        });
        if blocked { BARRIER_CHAR } else { SKY_CHAR }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, view: &FrameView<'_>) -> String {
        let cols = (view.playfield.width_f32() / self.cell_size).ceil() as usize;
        let rows = (view.playfield.height_f32() / self.cell_size).ceil() as usize;

        let mut out = String::with_capacity((cols + 3) * (rows + 4));
        let border: String = std::iter::repeat_n('-', cols).collect();
        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");
        for row in 0..rows {
            out.push('|');
            for col in 0..cols {
                let point = Vec2::new(
                    (col as f32 + 0.5) * self.cell_size,
                    (row as f32 + 0.5) * self.cell_size,
                );
                out.push(self.cell_char(view, point));
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");

        out.push_str(&view.score_text());
        out.push('\n');
        if let Some((title, hint)) = view.game_over_text() {
            out.push_str(title);
            out.push('\n');
            out.push_str(hint);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::{GamePhase, GameState, Obstacle};

    fn grid(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter(|l| l.starts_with('|'))
            .map(|l| &l[1..l.len() - 1])
            .collect()
    }

    #[test]
    fn test_render_empty_session() {
        let state = GameState::new(&Settings::default()).unwrap();
        let out = TextRenderer::new(10.0).render(&FrameView::new(&state));
        let rows = grid(&out);
        assert_eq!(rows.len(), 70);
        assert!(rows.iter().all(|r| r.chars().count() == 40));

        // Avatar covers x 100..130, y 300..330 -> cols 10..13, rows 30..33
        assert_eq!(&rows[30][10..13], "@@@");
        assert_eq!(&rows[29][10..13], "   ");
        assert!(!out.contains('#'));
        assert!(out.contains("Score: 0"));
        assert!(!out.contains("Game Over!"));
    }

    #[test]
    fn test_render_obstacle_and_game_over() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        state.obstacles.insert(Obstacle {
            id: 0,
            x: 200.0,
            width: OBSTACLE_WIDTH,
            gap_y: 300.0,
            gap_height: GAP_HEIGHT,
            passed: false,
        });
        state.phase = GamePhase::GameOver;

        let out = TextRenderer::new(10.0).render(&FrameView::new(&state));
        let rows = grid(&out);
        // Barrier columns 20..28, gap rows 30..45
        assert_eq!(&rows[0][20..28], "########");
        assert_eq!(&rows[29][20..28], "########");
        assert_eq!(&rows[30][20..28], "        ");
        assert_eq!(&rows[44][20..28], "        ");
        assert_eq!(&rows[45][20..28], "########");
        assert_eq!(&rows[69][20..28], "########");
        assert!(out.contains("Game Over!\nPress SPACE to restart\n"));
    }
}
