//! Platform abstraction layer
//!
//! Backend-facing adapters. Window, renderer and device polling live outside
//! this crate; they hand raw snapshots in through these types.

pub mod input;

pub use input::{ControllerSnapshot, InputState, KeyboardSnapshot};
