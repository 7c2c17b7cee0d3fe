//! Sprite instance type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textures the backend is expected to load
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Texture {
    Star = 0,
    Fog = 1,
    Border = 2,
    Player0 = 3,
    Player1 = 4,
    Player2 = 5,
    Player3 = 6,
    Asteroid = 7,
    Ufo = 8,
    Welcome = 9,
    /// Untextured quad filled with the instance color
    Solid = 10,
}

impl Texture {
    /// Runner frame for an animation index (0..4)
    pub fn player_frame(frame: usize) -> Texture {
        match frame {
            0 => Texture::Player0,
            1 => Texture::Player1,
            2 => Texture::Player2,
            _ => Texture::Player3,
        }
    }
}

/// How a sprite combines with what is already drawn
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Alpha = 0,
    Additive = 1,
    /// Multiply the destination by the sprite
    Modulate = 2,
}

/// One textured quad, laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner in play-area pixels
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Clockwise degrees about the quad center
    pub rotation: f32,
    pub texture: u32,
    pub blend: u32,
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub fn new(
        texture: Texture,
        blend: BlendMode,
        position: [f32; 2],
        size: [f32; 2],
        color: [f32; 4],
    ) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
            texture: texture as u32,
            blend: blend as u32,
            color,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn texture(&self) -> Option<Texture> {
        use Texture::*;
        [
            Star, Fog, Border, Player0, Player1, Player2, Player3, Asteroid, Ufo, Welcome, Solid,
        ]
        .into_iter()
        .find(|t| *t as u32 == self.texture)
    }
}

/// Colors for untinted sprites
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLOOD: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
