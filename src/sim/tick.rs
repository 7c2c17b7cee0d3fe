//! Fixed timestep simulation tick
//!
//! A [`Session`] is one life: a player, its obstacles and the blood from its
//! death. Sessions are never reset in place; the game driver throws a dead
//! one away and builds a new one.

use rand_pcg::Pcg32;

use super::obstacles::ObstacleField;
use super::player::spawn_blood;
use super::state::{BloodParticle, PlayArea, Player, RngStream, stream_rng};
use crate::platform::input::InputState;
use crate::settings::GameConfig;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Player alive and steering
    Active,
    /// Player gone; obstacles and blood keep animating until restart
    Dead,
}

/// One run from spawn to death
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed this session's RNG streams derive from
    pub seed: u64,
    pub area: PlayArea,
    pub player: Player,
    pub obstacles: ObstacleField,
    pub blood: Vec<BloodParticle>,
    /// Simulated time survived (only advances while alive)
    pub play_time: f64,
    /// Ticks applied, alive or dead
    pub time_ticks: u64,
    blood_count: usize,
    rng: Pcg32,
}

impl Session {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let area = PlayArea::from_config(config);
        log::info!("Session started with seed {}", seed);
        Self {
            seed,
            area,
            player: Player::new(&area),
            obstacles: ObstacleField::new(area, seed),
            blood: Vec::new(),
            play_time: 0.0,
            time_ticks: 0,
            blood_count: config.blood_count,
            rng: stream_rng(seed, RngStream::Player),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.player.dead {
            SessionPhase::Dead
        } else {
            SessionPhase::Active
        }
    }

    pub fn is_dead(&self) -> bool {
        self.player.dead
    }
}

/// Advance a session by one fixed timestep
pub fn tick(session: &mut Session, input: &InputState, dt: f32) {
    session.time_ticks += 1;

    let floor = session.area.height;
    for drop in &mut session.blood {
        drop.advance(dt, floor);
    }

    let target = (!session.player.dead).then_some(&session.player);
    session.obstacles.advance(dt, session.play_time, target);

    if session.player.dead {
        return;
    }

    session.play_time += f64::from(dt);

    let died = session.player.advance(
        dt,
        input.axis,
        &session.obstacles.obstacles,
        &session.area,
    );
    if died {
        let y = session.player.center().y;
        session.blood = spawn_blood(&mut session.rng, y, session.blood_count);
        log::info!(
            "Player died after {:.1} time units ({} obstacles dodged)",
            session.play_time,
            session.obstacles.spawned
        );
    }
}
