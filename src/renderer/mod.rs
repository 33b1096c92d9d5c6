//! Rendering collaborator
//!
//! The core never draws. Hosts implement [`Renderer`] and receive a
//! read-only [`FrameView`] of the session each frame.

pub mod text;

pub use text::TextRenderer;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::settings::Playfield;
use crate::sim::{Avatar, GameState, Obstacle};

pub const SCORE_PREFIX: &str = "Score: ";
pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const GAME_OVER_HINT: &str = "Press SPACE to restart";

/// Everything a renderer may read about the current frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub playfield: Playfield,
    pub avatar: Avatar,
    /// Wing animation frame (0..3)
    pub wing_frame: u64,
    pub obstacles: &'a [Obstacle],
    pub score: u32,
    pub game_over: bool,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            playfield: state.playfield,
            avatar: state.avatar,
            wing_frame: state.wing_frame(),
            obstacles: state.obstacles.as_slice(),
            score: state.score,
            game_over: state.is_game_over(),
        }
    }

    pub fn score_text(&self) -> String {
        format!("{}{}", SCORE_PREFIX, self.score)
    }

    /// Title and hint lines shown once the session has ended
    pub fn game_over_text(&self) -> Option<(&'static str, &'static str)> {
        self.game_over.then_some((GAME_OVER_TITLE, GAME_OVER_HINT))
    }

    /// Serialize for hosts that draw out of process
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Export)
    }
}

/// Draws one frame from a view
pub trait Renderer {
    type Output;

    fn render(&mut self, view: &FrameView<'_>) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GamePhase;

    #[test]
    fn test_view_texts() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        state.score = 4;
        let view = FrameView::new(&state);
        assert_eq!(view.score_text(), "Score: 4");
        assert_eq!(view.game_over_text(), None);

        state.phase = GamePhase::GameOver;
        let view = FrameView::new(&state);
        assert_eq!(
            view.game_over_text(),
            Some(("Game Over!", "Press SPACE to restart"))
        );
    }

    #[test]
    fn test_view_json() {
        let state = GameState::new(&Settings::default()).unwrap();
        let json = FrameView::new(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["game_over"], false);
        assert_eq!(value["playfield"]["height"], 700);
        assert_eq!(value["avatar"]["size"], 30.0);
        assert!(value["obstacles"].as_array().unwrap().is_empty());
    }
}
