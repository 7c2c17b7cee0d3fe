//! Player movement, knockback and death
//!
//! The runner accelerates with the stick, coasts to a stop, gets shoved by
//! obstacles and is clamped to every edge except the left one. Drifting fully
//! off the left edge kills it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{player_obstacle_collision, resolve_player_hit};
use super::state::{BloodParticle, Obstacle, PlayArea, Player};
use crate::consts::*;
use crate::decelerate;

impl Player {
    /// Advance one timestep. Returns true on the tick the player dies.
    ///
    /// A dead player is frozen; calling this again is a no-op.
    pub fn advance(
        &mut self,
        dt: f32,
        axis: Vec2,
        obstacles: &[Obstacle],
        area: &PlayArea,
    ) -> bool {
        if self.dead {
            return false;
        }

        self.anim += dt * PLAYER_ANIM_RATE;
        while self.anim >= 2.0 {
            self.anim -= 2.0;
        }

        self.pos += self.vel * dt;
        self.vel += axis * PLAYER_ACCEL * dt;
        let braking = PLAYER_DECEL * dt;
        self.vel = Vec2::new(decelerate(self.vel.x, braking), decelerate(self.vel.y, braking));

        for obstacle in obstacles {
            let hit = player_obstacle_collision(self, obstacle);
            resolve_player_hit(self, obstacle, &hit);
        }

        self.clamp_to(area);

        if self.pos.x < -PLAYER_WIDTH {
            self.dead = true;
            return true;
        }
        false
    }

    /// Clamp against the right, top and bottom edges, killing outward velocity.
    /// The left edge is open.
    pub fn clamp_to(&mut self, area: &PlayArea) {
        let max_x = area.width - PLAYER_WIDTH;
        let max_y = area.height - PLAYER_HEIGHT;

        if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = self.vel.x.min(0.0);
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.max(0.0);
        }
        if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = self.vel.y.min(0.0);
        }
    }
}

/// Burst of blood from the left edge at the given height
pub fn spawn_blood(rng: &mut Pcg32, y: f32, count: usize) -> Vec<BloodParticle> {
    (0..count)
        .map(|_| BloodParticle {
            pos: Vec2::new(0.0, y),
            vel: Vec2::new(rng.random_range(1.0..10.0), rng.random_range(-20.0..20.0)),
        })
        .collect()
}

impl BloodParticle {
    /// Projectile motion until the droplet reaches the floor
    pub fn advance(&mut self, dt: f32, floor: f32) {
        if self.pos.y < floor {
            self.pos += self.vel * dt;
            self.vel.y += dt;
        }
    }
}
