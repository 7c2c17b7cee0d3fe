//! Out of Space entry point
//!
//! Headless attract mode: a simple autopilot plays for a bounded number of
//! frames, restarting after every death. A windowed backend drives the same
//! `Game` and hands `build_draw_list` output to its renderer.

use out_of_space::renderer::build_draw_list;
use out_of_space::sim::Session;
use out_of_space::{Game, GameConfig, InputState, Screen};

/// Frames to run before exiting (at one frame per 1.0 time units)
const ATTRACT_FRAMES: u64 = 3_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Out of Space (native, headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut best = 0.0f64;
    let mut sprites = 0usize;
    for _ in 0..ATTRACT_FRAMES {
        let input = autopilot(&game);
        let was_playing = game.screen() == Screen::Playing;
        game.frame(&input);

        if was_playing && game.screen() == Screen::GameOver {
            if let Some(session) = &game.session {
                best = best.max(session.play_time);
            }
        }
        sprites = sprites.max(build_draw_list(&game).len());
    }

    if let Some(session) = &game.session {
        best = best.max(session.play_time);
    }
    log::info!(
        "Ran {} frames over {} sessions (seed {}), best survival {:.1}, peak draw list {} sprites",
        game.frames,
        game.sessions_started,
        game.seed,
        best,
        sprites
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds embed the library in their own host page
}

/// Dodge vertically away from the closest obstacle ahead, drift toward the
/// right side, and tap the button on menus (pressed on even frames only so
/// every tap is a fresh edge).
fn autopilot(game: &Game) -> InputState {
    let tap = game.frames % 2 == 0;
    let Some(session) = game.session.as_ref().filter(|s| !s.is_dead()) else {
        return InputState::new(0.0, 0.0, tap);
    };

    let dodge = nearest_threat(session)
        .map(|dy| if dy >= 0.0 { -1.0 } else { 1.0 })
        .unwrap_or(0.0);
    let player_x = session.player.center().x;
    let steer_x = if player_x < session.area.width * 0.6 { 0.5 } else { 0.0 };
    InputState::new(steer_x, dodge, false)
}

/// Vertical offset (obstacle minus player) of the closest overlapping obstacle
fn nearest_threat(session: &Session) -> Option<f32> {
    let player = session.player.center();
    session
        .obstacles
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size as f32 > player.x - 50.0)
        .map(|o| (o.center() - player, o.radius()))
        .filter(|(d, r)| d.y.abs() < r + 60.0)
        .min_by(|(a, _), (b, _)| a.x.abs().total_cmp(&b.x.abs()))
        .map(|(d, _)| d.y)
}
