//! Draw list construction
//!
//! Paint order, back to front: background particles, obstacles, the runner,
//! blood, the edge borders and finally the welcome overlay on the title and
//! game over screens.

use crate::consts::{BLOOD_SIZE, BORDER_WIDTH};
use crate::game::{Game, Screen};
use crate::sim::state::{ObstacleKind, ParticleKind, Player};

use super::vertex::{BlendMode, SpriteInstance, Texture, colors};

/// Flatten the current frame into sprites
pub fn build_draw_list(game: &Game) -> Vec<SpriteInstance> {
    let background = &game.background;
    let area = background.area;
    let mut sprites = Vec::with_capacity(background.len() + 4);

    for p in &background.particles {
        let texture = match p.kind {
            ParticleKind::Star => Texture::Star,
            ParticleKind::Fog => Texture::Fog,
        };
        let size = p.size as f32;
        sprites.push(
            SpriteInstance::new(
                texture,
                BlendMode::Additive,
                [p.x, p.y as f32],
                [size, size],
                p.color.to_rgba(),
            )
            .rotated(p.angle),
        );
    }

    if let Some(session) = &game.session {
        for o in &session.obstacles.obstacles {
            let texture = match o.kind {
                ObstacleKind::Asteroid => Texture::Asteroid,
                ObstacleKind::Ufo => Texture::Ufo,
            };
            let size = o.size as f32;
            sprites.push(
                SpriteInstance::new(
                    texture,
                    BlendMode::Alpha,
                    o.pos.to_array(),
                    [size, size],
                    o.color.to_rgba(),
                )
                .rotated(o.angle),
            );
        }

        let player = &session.player;
        if !player.dead {
            sprites.push(SpriteInstance::new(
                Texture::player_frame(player.anim_frame()),
                BlendMode::Alpha,
                player.pos.to_array(),
                Player::SIZE.to_array(),
                colors::WHITE,
            ));
        }

        sprites.extend(session.blood.iter().map(|drop| {
            SpriteInstance::new(
                Texture::Solid,
                BlendMode::Alpha,
                drop.pos.to_array(),
                [BLOOD_SIZE; 2],
                colors::BLOOD,
            )
        }));
    }

    // Right edge glows, left edge darkens
    sprites.push(SpriteInstance::new(
        Texture::Border,
        BlendMode::Additive,
        [area.width - BORDER_WIDTH, 0.0],
        [BORDER_WIDTH, area.height],
        colors::WHITE,
    ));
    sprites.push(SpriteInstance::new(
        Texture::Border,
        BlendMode::Modulate,
        [0.0, 0.0],
        [BORDER_WIDTH, area.height],
        colors::WHITE,
    ));

    if game.screen() != Screen::Playing {
        sprites.push(SpriteInstance::new(
            Texture::Welcome,
            BlendMode::Alpha,
            [0.0, 0.0],
            [area.width, area.height],
            colors::WHITE,
        ));
    }

    sprites
}
