//! Maze Adventure binary: window setup, the intro, then the game loop.

use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use macroquad::prelude::*;

use maze_adventure::config::{GameConfig, CONFIG_PATH};
use maze_adventure::error::GameError;
use maze_adventure::game::{end_message, report_events, step, GameController, GameState, MacroquadCanvas};
use maze_adventure::input::InputState;
use maze_adventure::intro::{self, IntroOutcome};
use maze_adventure::pacing::FpsLimit;
use maze_adventure::{logging, VERSION};

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Adventure".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init();
    log::info!("=== Maze Adventure v{} ===", VERSION);

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;

    // Window close goes through InputState::quit_requested instead of exiting
    prevent_quit();

    let font = match &config.font_path {
        Some(path) => {
            let font = load_ttf_font(path)
                .await
                .map_err(|e| GameError::asset(path, e))?;
            log::info!("Loaded font {}", path);
            Some(font)
        }
        None => None,
    };
    let mut canvas = MacroquadCanvas::new(font);
    let mut input = InputState::new();
    if input.has_gamepad() {
        log::info!("Gamepad connected");
    }

    if !config.skip_intro {
        let logo = load_texture(&config.logo_path)
            .await
            .map_err(|e| GameError::asset(&config.logo_path, e))?;
        logo.set_filter(FilterMode::Linear);

        canvas.set_logo(logo);

        if intro::run(&mut canvas, &mut input).await == IntroOutcome::Quit {
            log::info!("Quit from intro screen");
            return Ok(());
        }
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Starting round (seed {})", seed);
    let mut game = GameController::new(StdRng::seed_from_u64(seed), get_time());

    loop {
        let frame_start = get_time();
        input.poll();

        let state = step(&mut game, get_time(), &input.controls(), &mut canvas);
        report_events(&mut game.events);

        if let GameState::Ended(reason) = state {
            if let Some(message) = end_message(reason) {
                // Player-facing, so it goes to stdout regardless of log level
                println!("{}", message);
            }
            let session = game.session();
            log::info!(
                "Round over ({:?}): score {}, level {}",
                reason,
                session.score,
                session.level
            );
            return Ok(());
        }

        next_frame().await;
        FpsLimit::Fps60.wait(frame_start);
    }
}

/// Seed for rounds without a configured one
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}
