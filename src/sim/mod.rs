//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, one PCG stream per component
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod obstacles;
pub mod player;
pub mod state;
pub mod tick;

pub use background::ParticleField;
pub use collision::{CollisionResult, circle_collision, player_obstacle_collision};
pub use obstacles::{ObstacleField, spawn_interval_bound};
pub use player::spawn_blood;
pub use state::{
    BloodParticle, Obstacle, ObstacleKind, Particle, ParticleKind, PlayArea, Player, Rgb,
    RngStream, stream_rng,
};
pub use tick::{Session, SessionPhase, tick};
