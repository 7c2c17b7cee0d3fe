//! Chuvak Is Running Out Of Space - a side-scrolling asteroid dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (background, obstacles, player, sessions)
//! - `game`: Frame driver with the title/restart loop
//! - `platform`: Controller/keyboard input normalization
//! - `renderer`: Backend-agnostic sprite draw list
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::{Game, Screen};
pub use platform::input::InputState;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Logical play area, independent of the window size
    pub const PLAY_WIDTH: f32 = 1024.0;
    pub const PLAY_HEIGHT: f32 = 768.0;

    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 0.02;
    /// Substeps run per rendered frame (one frame = 1.0 simulated time unit)
    pub const SUBSTEPS_PER_FRAME: u32 = 50;

    /// Background particle counts
    pub const STAR_COUNT: usize = 100;
    pub const FOG_COUNT: usize = 25;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Velocity gained per unit of stick deflection per time unit
    pub const PLAYER_ACCEL: f32 = 0.4;
    /// Velocity lost per time unit on each axis
    pub const PLAYER_DECEL: f32 = 0.025;
    /// Animation phase advance per time unit (phase cycles through [0, 2))
    pub const PLAYER_ANIM_RATE: f32 = 0.3;

    /// Blood burst on death
    pub const BLOOD_COUNT: usize = 150;
    pub const BLOOD_SIZE: f32 = 5.0;

    /// Homing obstacles close this fraction of their drift speed vertically
    pub const HOMING_RATE: f32 = 0.1;
    /// One spawn in this many is a homing UFO
    pub const UFO_ODDS: u32 = 16;

    /// Width of the border gradient drawn over both screen edges
    pub const BORDER_WIDTH: f32 = 128.0;
}

/// Wrap a sprite angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // Tiny negatives round up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Move `value` toward zero by `amount` without crossing it
#[inline]
pub fn decelerate(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else if value < 0.0 {
        (value + amount).min(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(-1e-8), 0.0);
    }

    #[test]
    fn test_wrap_degrees_huge_and_infinite() {
        assert!((0.0..360.0).contains(&wrap_degrees(1e10)));
        assert!((0.0..360.0).contains(&wrap_degrees(-3.4e38)));
        assert!(wrap_degrees(f32::INFINITY).is_nan());
    }

    #[test]
    fn test_decelerate_stops_at_zero() {
        assert_eq!(decelerate(0.01, 0.5), 0.0);
        assert_eq!(decelerate(-0.01, 0.5), 0.0);
        assert_eq!(decelerate(0.0, 0.5), 0.0);
        assert!((decelerate(2.0, 0.5) - 1.5).abs() < 1e-6);
        assert!((decelerate(-2.0, 0.5) + 1.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn wrapped_angle_in_range(angle in -10_000.0f32..10_000.0) {
            let wrapped = wrap_degrees(angle);
            prop_assert!((0.0..360.0).contains(&wrapped), "{angle} wrapped to {wrapped}");
        }

        #[test]
        fn deceleration_never_flips_sign(value in -100.0f32..100.0, amount in 0.0f32..10.0) {
            let next = decelerate(value, amount);
            prop_assert!(next.abs() <= value.abs());
            prop_assert!(next == 0.0 || next.signum() == value.signum());
        }
    }
}
