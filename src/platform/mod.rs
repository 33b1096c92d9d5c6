//! Host-facing driver
//!
//! Hosts deliver input whenever it arrives and call [`Driver::update`] once
//! per frame with the real elapsed time. The driver buffers the input and
//! runs whole fixed steps, so the session only ever sees one writer.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::Result;
use crate::renderer::{FrameView, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, TickInput, tick};

/// Owns a session and steps it at a fixed rate
#[derive(Debug, Clone)]
pub struct Driver {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    ticks: u64,
}

impl Driver {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            state: GameState::new(settings)?,
            input: TickInput::default(),
            accumulator: 0.0,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Total fixed steps run so far (across restarts)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffer an input until the next step
    pub fn push_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run exactly one step, consuming buffered input
    pub fn step(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.input);
        self.input.clear();
        self.ticks += 1;
        events
    }

    /// Run as many fixed steps as `dt` seconds cover
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        // NaN and negative frame times count as zero
        let dt = dt.max(0.0).min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if self.accumulator >= SIM_DT {
            log::warn!("Hit substep cap, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }
        events
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView::new(&self.state)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.view())
    }
}
