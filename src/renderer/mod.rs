//! Backend-agnostic rendering
//!
//! The crate stops at a flat list of [`SpriteInstance`]s in paint order; a
//! backend uploads it as an instance buffer and draws it over a black clear.

pub mod draw_list;
pub mod vertex;

pub use draw_list::build_draw_list;
pub use vertex::{BlendMode, SpriteInstance, Texture, colors};
