//! Collision detection and response between the player and obstacles
//!
//! Both the player sprite and obstacles are treated as circles. Contacts push
//! the player out along the center-to-center normal and kick it with the
//! obstacle's drift speed; obstacles never react.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Result of a collision check
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Unit normal pointing from the obstacle toward the player.
    /// Zero when the centers coincide and no direction exists.
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between two circles
///
/// Touching circles (distance exactly equal to the radius sum) do not collide.
pub fn circle_collision(
    center: Vec2,
    radius: f32,
    other_center: Vec2,
    other_radius: f32,
) -> CollisionResult {
    let delta = center - other_center;
    let min_dist = radius + other_radius;
    let dist_sq = delta.length_squared();

    if dist_sq >= min_dist * min_dist {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    CollisionResult {
        hit: true,
        normal: delta.normalize_or_zero(),
        penetration: min_dist - dist,
    }
}

/// Check the player against one obstacle
#[inline]
pub fn player_obstacle_collision(player: &Player, obstacle: &Obstacle) -> CollisionResult {
    circle_collision(
        player.center(),
        Player::radius(),
        obstacle.center(),
        obstacle.radius(),
    )
}

/// Push the player out of an obstacle and apply the knockback impulse
///
/// With coincident centers the normal is zero, so the contact resolves to no
/// displacement and no impulse.
pub fn resolve_player_hit(player: &mut Player, obstacle: &Obstacle, hit: &CollisionResult) {
    if !hit.hit {
        return;
    }
    player.pos += hit.normal * hit.penetration;
    player.vel += hit.normal * obstacle.speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, PlayArea, Rgb};

    fn rock(center: Vec2, size: i32, speed: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Asteroid,
            pos: center - Vec2::splat(size as f32 * 0.5),
            size,
            color: Rgb::WHITE,
            angle: 0.0,
            rotation_speed: 0.0,
            speed,
        }
    }

    #[test]
    fn test_circle_miss_and_touch() {
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(30.0, 0.0), 10.0);
        assert!(!result.hit);

        // Exactly touching is not a hit
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_circle_overlap() {
        let result = circle_collision(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 10.0);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert!((result.penetration - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_player_pushed_out_and_kicked() {
        let mut player = Player::new(&PlayArea::default());
        let center = player.center();
        // Rock sits 40 px to the right: radii 37.5 + 32 = 69.5, overlap 29.5
        let obstacle = rock(center + Vec2::new(40.0, 0.0), 64, 12.0);

        let hit = player_obstacle_collision(&player, &obstacle);
        assert!(hit.hit);
        resolve_player_hit(&mut player, &obstacle, &hit);

        assert!((player.center().x - (center.x - 29.5)).abs() < 1e-3);
        assert!((player.center().y - center.y).abs() < 1e-5);
        assert!((player.vel.x + 12.0).abs() < 1e-5);
        assert_eq!(player.vel.y, 0.0);

        // Now exactly touching: no further contact
        let again = player_obstacle_collision(&player, &obstacle);
        assert!(!again.hit || again.penetration < 1e-3);
    }

    #[test]
    fn test_coincident_centers_do_nothing() {
        let mut player = Player::new(&PlayArea::default());
        let before = player.clone();
        let obstacle = rock(player.center(), 100, 20.0);

        let hit = player_obstacle_collision(&player, &obstacle);
        assert!(hit.hit);
        assert_eq!(hit.normal, Vec2::ZERO);

        resolve_player_hit(&mut player, &obstacle, &hit);
        assert_eq!(player, before);
        assert!(player.pos.is_finite() && player.vel.is_finite());
    }
}
