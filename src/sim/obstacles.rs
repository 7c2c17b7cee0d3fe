//! Obstacle spawning, drift and expiry
//!
//! Obstacles enter at the right edge on a randomized countdown whose upper
//! bound shrinks logarithmically with play time, drift left, and are dropped
//! once fully past the left edge. UFOs additionally home in on the player's
//! vertical center.

use rand::Rng;
use rand_pcg::Pcg32;

use super::background::random_color;
use super::state::{Obstacle, ObstacleKind, PlayArea, Player, RngStream, stream_rng};
use crate::consts::{HOMING_RATE, UFO_ODDS};
use crate::wrap_degrees;

/// Upper bound of the spawn countdown after `play_time` units of play
#[inline]
pub fn spawn_interval_bound(play_time: f64) -> f32 {
    (1000.0 / (3.0 + play_time).ln()) as f32
}

impl ObstacleKind {
    /// Roll a fresh obstacle of this kind at the right edge
    pub fn spawn(self, rng: &mut Pcg32, area: &PlayArea) -> Obstacle {
        let (size, color, angle, speed, rotation_speed) = match self {
            ObstacleKind::Asteroid => {
                let size = rng.random_range(32..=320i32);
                let color = random_color(rng, 127, 255);
                let angle = rng.random_range(0.0..360.0);
                let speed = rng.random_range(5.0..25.0);
                (size, color, angle, speed, rng.random_range(-0.5..0.5))
            }
            ObstacleKind::Ufo => {
                let size = rng.random_range(32..=128i32);
                let color = random_color(rng, 200, 255);
                let speed = rng.random_range(10.0..25.0);
                (size, color, 0.0, speed, 0.0)
            }
        };
        let y = rng.random_range(0..=area.height as i32) - size / 2;

        Obstacle {
            kind: self,
            pos: glam::Vec2::new(area.width, y as f32),
            size,
            color,
            angle,
            rotation_speed,
            speed,
        }
    }

    /// Size range obstacles of this kind are rolled from
    pub fn size_range(self) -> std::ops::RangeInclusive<i32> {
        match self {
            ObstacleKind::Asteroid => 32..=320,
            ObstacleKind::Ufo => 32..=128,
        }
    }
}

/// The set of live obstacles plus the spawn countdown
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub area: PlayArea,
    pub obstacles: Vec<Obstacle>,
    /// Time until the next spawn; the first tick always spawns
    pub spawn_delay: f32,
    /// Total obstacles spawned this session
    pub spawned: u64,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(area: PlayArea, seed: u64) -> Self {
        Self {
            area,
            obstacles: Vec::new(),
            spawn_delay: 0.0,
            spawned: 0,
            rng: stream_rng(seed, RngStream::Obstacles),
        }
    }

    /// Advance one timestep
    ///
    /// `player` is `None` once the player is dead; UFOs then stop homing.
    pub fn advance(&mut self, dt: f32, play_time: f64, player: Option<&Player>) {
        for obstacle in &mut self.obstacles {
            obstacle.angle = wrap_degrees(obstacle.angle + obstacle.rotation_speed * dt);
            obstacle.pos.x -= obstacle.speed * dt;
        }
        self.obstacles.retain(|o| !o.is_offscreen());

        self.spawn_delay -= dt;
        if self.spawn_delay <= 0.0 {
            let bound = spawn_interval_bound(play_time);
            self.spawn_delay += if bound > 1.0 {
                self.rng.random_range(1.0..bound)
            } else {
                1.0
            };
            self.spawn();
        }

        if let Some(player) = player {
            let target_y = player.center().y;
            for obstacle in self.obstacles.iter_mut().filter(|o| o.kind.homing()) {
                let max_step = obstacle.speed * dt * HOMING_RATE;
                let d = (target_y - obstacle.center().y).clamp(-max_step, max_step);
                obstacle.pos.y += d;
            }
        }
    }

    /// Spawn one obstacle; one in `UFO_ODDS` is a homing UFO
    fn spawn(&mut self) {
        let kind = if self.rng.random_range(0..UFO_ODDS) == 0 {
            ObstacleKind::Ufo
        } else {
            ObstacleKind::Asteroid
        };
        let obstacle = kind.spawn(&mut self.rng, &self.area);
        log::trace!(
            "Spawned {:?} size {} at y={} (next in {:.1})",
            kind,
            obstacle.size,
            obstacle.pos.y,
            self.spawn_delay
        );
        self.obstacles.push(obstacle);
        self.spawned += 1;
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
