//! Frame driver
//!
//! Owns the persistent background and the current session, and runs the
//! title → playing → game over loop. One call to [`Game::frame`] is one
//! rendered frame: a fixed number of substeps at a fixed timestep.

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::error::ConfigError;
use crate::platform::input::InputState;
use crate::settings::GameConfig;
use crate::sim::background::ParticleField;
use crate::sim::state::{RngStream, stream_rng};
use crate::sim::tick::{Session, tick};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No session yet; welcome overlay up
    Title,
    /// Player alive
    Playing,
    /// Player dead; the session keeps animating under the welcome overlay
    GameOver,
}

/// Top-level game state
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    /// Seed every session and the background derive from
    pub seed: u64,
    pub background: ParticleField,
    pub session: Option<Session>,
    /// Rendered frames so far
    pub frames: u64,
    /// Sessions started so far
    pub sessions_started: u32,
    seeder: Pcg32,
    prev_button: bool,
}

impl Game {
    /// Validate the config and build the title screen
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(time_seed);
        log::info!(
            "Game created ({}x{}, seed {})",
            config.play_width,
            config.play_height,
            seed
        );

        Ok(Self {
            background: ParticleField::new(&config, seed),
            config,
            seed,
            session: None,
            frames: 0,
            sessions_started: 0,
            seeder: stream_rng(seed, RngStream::Sessions),
            prev_button: false,
        })
    }

    pub fn screen(&self) -> Screen {
        match &self.session {
            None => Screen::Title,
            Some(session) if session.is_dead() => Screen::GameOver,
            Some(_) => Screen::Playing,
        }
    }

    /// Run one rendered frame
    pub fn frame(&mut self, input: &InputState) {
        let pressed = input.button_pressed && !self.prev_button;
        self.prev_button = input.button_pressed;

        if pressed && self.screen() != Screen::Playing {
            self.start_session();
        }

        let dt = self.config.sim_dt;
        for _ in 0..self.config.substeps_per_frame {
            self.background.advance(dt);
            if let Some(session) = &mut self.session {
                tick(session, input, dt);
            }
        }
        self.frames += 1;
    }

    /// Throw away any current session and start a fresh one
    pub fn start_session(&mut self) {
        let seed = self.seeder.next_u64();
        if let Some(old) = &self.session {
            log::info!(
                "Restarting after {:.1} time units (session {})",
                old.play_time,
                self.sessions_started
            );
        }
        self.session = Some(Session::new(&self.config, seed));
        self.sessions_started += 1;
    }
}

/// Fallback seed when the config doesn't pin one
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
