//! The fixed-rate game loop.
//!
//! Each tick runs strictly in order: drain input, advance the simulation,
//! forward its draw calls to the display, print the HUD, then sleep.  Input
//! arriving during the sleep waits for the next tick, so a key press takes
//! effect within one tick interval.

use std::time::Duration;

use rand::Rng;

use crate::compute::{init_state, initial_frame, tick};
use crate::config::GameConfig;
use crate::constants::TIME_STEP;
use crate::display::{self, Display, HUD_ROW};
use crate::entities::{GameStatus, WorldState};
use crate::error::GameError;
use crate::input::{self, Input};

pub struct Game<D: Display, I: Input, R: Rng> {
    state: WorldState,
    display: D,
    input: I,
    rng: R,
    /// Simulated seconds: `TIME_STEP` per tick, never read from a clock.
    elapsed: f64,
    tick_interval: Duration,
}

impl<D: Display, I: Input, R: Rng> Game<D, I, R> {
    pub fn new(config: &GameConfig, display: D, input: I, rng: R) -> Self {
        Game {
            state: init_state(config.width, config.height),
            display,
            input,
            rng,
            elapsed: 0.0,
            tick_interval: config.tick_interval(),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Hand the display back, e.g. to restore the terminal.
    pub fn into_display(self) -> D {
        self.display
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Size the display and draw the opening frame.
    pub fn start(&mut self) -> Result<(), GameError> {
        let (width, height) = (self.state.width, self.state.height);
        self.display.set_dimensions(width, height)?;
        display::apply(&mut self.display, width, height, &initial_frame(&self.state))?;
        self.display.present()?;
        tracing::info!(
            width,
            height,
            enemies = self.state.enemies.len(),
            "game started"
        );
        Ok(())
    }

    /// Run exactly one tick, without sleeping.
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        let keys = input::drain(&mut self.input)?;
        let result = tick(&self.state, &keys, &mut self.rng);
        self.state = result.state;

        let (width, height) = (self.state.width, self.state.height);
        display::apply(&mut self.display, width, height, &result.commands)?;
        self.draw_hud()?;
        self.display.present()?;

        self.elapsed += TIME_STEP;
        Ok(self.state.status)
    }

    /// Tick until game over, sleeping a fixed interval between ticks.
    /// Returns the final score.
    pub fn run(&mut self) -> Result<u32, GameError> {
        self.start()?;
        while self.step()? == GameStatus::Playing {
            std::thread::sleep(self.tick_interval);
        }
        tracing::info!(score = self.state.score, elapsed = self.elapsed, "game over");
        Ok(self.state.score)
    }

    fn draw_hud(&mut self) -> Result<(), GameError> {
        let player = &self.state.player;
        let line = display::hud_line(self.state.score, player.exp, player.level(), self.elapsed);
        self.display.draw_text(0, HUD_ROW, &line)?;
        Ok(())
    }
}
