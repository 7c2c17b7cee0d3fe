//! Input normalization
//!
//! The simulation only sees [`InputState`]: a stick vector in [-1, 1] on each
//! axis plus one "any button" flag. Backends fill a raw snapshot
//! ([`ControllerSnapshot`] or [`KeyboardSnapshot`]) from whatever they poll
//! and convert it here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stick deflection below this is treated as zero
pub const DEADZONE: f32 = 0.1;

/// Normalized input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Movement intent, each component in [-1, 1] (+y is down)
    pub axis: Vec2,
    /// Any confirm/face button held
    pub button_pressed: bool,
}

impl InputState {
    pub fn new(x: f32, y: f32, button_pressed: bool) -> Self {
        Self {
            axis: Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE),
            button_pressed,
        }
    }

    /// Merge two sources: larger deflection wins per axis, buttons are OR-ed
    pub fn combine(self, other: InputState) -> InputState {
        InputState {
            axis: Vec2::new(
                stronger(self.axis.x, other.axis.x),
                stronger(self.axis.y, other.axis.y),
            ),
            button_pressed: self.button_pressed || other.button_pressed,
        }
    }
}

#[inline]
fn stronger(a: f32, b: f32) -> f32 {
    if b.abs() > a.abs() { b } else { a }
}

/// Raw gamepad state as reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    /// Face, shoulder and menu buttons (A, B, X, Y, back, guide, start)
    pub buttons: [bool; 7],
}

/// Convert a raw stick value to [-1, 1], using the full range on both sides
#[inline]
pub fn axis_to_f32(raw: i16) -> f32 {
    if raw > 0 {
        raw as f32 / i16::MAX as f32
    } else if raw < 0 {
        -(raw as f32 / i16::MIN as f32)
    } else {
        0.0
    }
}

/// Zero out deflection inside the deadzone
#[inline]
pub fn apply_deadzone(value: f32) -> f32 {
    if value.abs() < DEADZONE { 0.0 } else { value }
}

impl ControllerSnapshot {
    /// Either stick steers (whichever is pushed further), the d-pad overrides
    pub fn to_input(&self) -> InputState {
        let mut x = stronger(axis_to_f32(self.left_x), axis_to_f32(self.right_x));
        let mut y = stronger(axis_to_f32(self.left_y), axis_to_f32(self.right_y));

        if self.dpad_left {
            x = -1.0;
        }
        if self.dpad_right {
            x = 1.0;
        }
        if self.dpad_up {
            y = -1.0;
        }
        if self.dpad_down {
            y = 1.0;
        }

        InputState {
            axis: Vec2::new(apply_deadzone(x), apply_deadzone(y)),
            button_pressed: self.buttons.iter().any(|&b| b),
        }
    }
}

/// Raw keyboard state (arrows/WASD folded together by the backend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Space/Enter
    pub confirm: bool,
}

impl KeyboardSnapshot {
    /// Opposite keys cancel out
    pub fn to_input(&self) -> InputState {
        let x = self.right as i8 - self.left as i8;
        let y = self.down as i8 - self.up as i8;
        InputState {
            axis: Vec2::new(x as f32, y as f32),
            button_pressed: self.confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_axis_extremes() {
        assert_eq!(axis_to_f32(i16::MAX), 1.0);
        assert_eq!(axis_to_f32(i16::MIN), -1.0);
        assert_eq!(axis_to_f32(0), 0.0);
        assert!((axis_to_f32(16384) - 0.5).abs() < 1e-3);
        assert!((axis_to_f32(-16384) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stronger_stick_wins() {
        let pad = ControllerSnapshot {
            left_x: 8000,
            right_x: -20000,
            left_y: 30000,
            right_y: 1000,
            ..Default::default()
        };
        let input = pad.to_input();
        assert!(input.axis.x < -0.6);
        assert!(input.axis.y > 0.9);
        assert!(!input.button_pressed);
    }

    #[test]
    fn test_dpad_overrides_sticks() {
        let pad = ControllerSnapshot {
            left_x: 30000,
            left_y: 30000,
            dpad_left: true,
            dpad_up: true,
            ..Default::default()
        };
        assert_eq!(pad.to_input().axis, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_deadzone() {
        let pad = ControllerSnapshot {
            left_x: 3000,  // ~0.09
            left_y: -4000, // ~-0.12
            ..Default::default()
        };
        let input = pad.to_input();
        assert_eq!(input.axis.x, 0.0);
        assert!(input.axis.y < -0.1);
    }

    #[test]
    fn test_any_button() {
        let mut pad = ControllerSnapshot::default();
        assert!(!pad.to_input().button_pressed);
        pad.buttons[6] = true;
        assert!(pad.to_input().button_pressed);
    }

    #[test]
    fn test_keyboard_mapping() {
        let keys = KeyboardSnapshot {
            up: true,
            right: true,
            confirm: true,
            ..Default::default()
        };
        let input = keys.to_input();
        assert_eq!(input.axis, Vec2::new(1.0, -1.0));
        assert!(input.button_pressed);

        let both = KeyboardSnapshot {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(both.to_input().axis, Vec2::ZERO);
    }

    #[test]
    fn test_combine_sources() {
        let pad = InputState::new(0.3, -0.8, false);
        let keys = InputState::new(-1.0, 0.0, true);
        let merged = pad.combine(keys);
        assert_eq!(merged.axis, Vec2::new(-1.0, -0.8));
        assert!(merged.button_pressed);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(InputState::new(3.0, -7.0, false).axis, Vec2::new(1.0, -1.0));
    }

    proptest! {
        #[test]
        fn controller_axes_normalized(lx: i16, ly: i16, rx: i16, ry: i16) {
            let pad = ControllerSnapshot {
                left_x: lx,
                left_y: ly,
                right_x: rx,
                right_y: ry,
                ..Default::default()
            };
            let axis = pad.to_input().axis;
            for v in [axis.x, axis.y] {
                prop_assert!((-1.0..=1.0).contains(&v));
                prop_assert!(v == 0.0 || v.abs() >= DEADZONE);
            }
        }
    }
}
