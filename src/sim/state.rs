//! Simulation entity types
//!
//! Plain data only; the per-tick behavior lives in `background`, `obstacles`
//! and `player`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::GameConfig;

/// The logical rectangle everything is positioned in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.play_width, config.play_height)
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(PLAY_WIDTH, PLAY_HEIGHT)
    }
}

/// 8-bit color used to tint sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA with full alpha
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Background particle class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Small bright spinning star
    Star,
    /// Huge dim fog cloud
    Fog,
}

/// A decorative background particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f32,
    /// Whole-pixel row (particles only move horizontally)
    pub y: i32,
    pub size: i32,
    pub color: Rgb,
    /// Degrees, kept in [0, 360)
    pub angle: f32,
    /// Degrees per time unit
    pub rotation_speed: f32,
    /// Leftward drift per time unit
    pub speed: f32,
}

impl Particle {
    /// Right edge has passed the left boundary
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x < -(self.size as f32)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Plain drifting rock
    Asteroid,
    /// Homing saucer that tracks the player vertically
    Ufo,
}

impl ObstacleKind {
    #[inline]
    pub fn homing(self) -> bool {
        matches!(self, ObstacleKind::Ufo)
    }
}

/// An obstacle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: i32,
    pub color: Rgb,
    /// Degrees, kept in [0, 360)
    pub angle: f32,
    pub rotation_speed: f32,
    pub speed: f32,
}

impl Obstacle {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size as f32 * 0.5)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32 * 0.5
    }

    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -(self.size as f32)
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub vel: Vec2,
    /// Animation phase in [0, 2)
    pub anim: f32,
    pub dead: bool,
}

impl Player {
    pub const SIZE: Vec2 = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);

    /// Spawn at the center of the play area
    pub fn new(area: &PlayArea) -> Self {
        Self {
            pos: Vec2::new(
                (area.width - PLAYER_WIDTH) * 0.5,
                (area.height - PLAYER_HEIGHT) * 0.5,
            ),
            vel: Vec2::ZERO,
            anim: 0.0,
            dead: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Self::SIZE * 0.5
    }

    /// Collision radius: the mean of the half extents
    #[inline]
    pub fn radius() -> f32 {
        (PLAYER_WIDTH + PLAYER_HEIGHT) * 0.25
    }

    /// Sprite frame (0..4) for the current animation phase
    pub fn anim_frame(&self) -> usize {
        if self.anim > 1.5 {
            3
        } else if self.anim > 1.0 {
            2
        } else if self.anim > 0.5 {
            1
        } else {
            0
        }
    }
}

/// A blood droplet from the death effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodParticle {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Independent RNG streams derived from one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngStream {
    Background = 1,
    Obstacles = 2,
    Player = 3,
    Sessions = 4,
}

/// Seed a PCG generator for one stream of a run
pub fn stream_rng(seed: u64, stream: RngStream) -> Pcg32 {
    let mut rng = Pcg32::seed_from_u64(seed);
    let state = rand::RngCore::next_u64(&mut rng);
    Pcg32::new(state, stream as u64)
}
