//! A 2D platformer prototype with an in-game collectible editor.
//!
//! Play mode runs the simulation: run and jump across the ledges, grab
//! collectibles. Edit mode pauses the world and turns the pointer into a
//! placement and drag tool; the layout is saved to a plain text level file.

mod app;
mod editor;
mod game;
mod input;
mod level;
mod render;
mod scene;
mod tuning;

use macroquad::prelude::*;

use app::App;
use editor::EditorAction;
use input::FrameInput;
use render::Assets;
use scene::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tuning::Tuning;

fn window_conf() -> Conf {
    Conf {
        window_title: "Monkey Lad".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let tuning = match Tuning::load_or_init(tuning::TUNING_FILE) {
        Ok(tuning) => tuning,
        Err(e) => {
            error!("failed to load {}: {} - using defaults", tuning::TUNING_FILE, e);
            Tuning::default()
        }
    };

    let points = match level::load_or_init(level::LEVEL_FILE) {
        Ok(points) => points,
        Err(e) => {
            error!("failed to load {}: {} - using default layout", level::LEVEL_FILE, e);
            level::DEFAULT_POINTS.to_vec()
        }
    };

    let assets = Assets::load().await;
    let mut app = App::new(tuning, &points);
    info!("level loaded with {} collectibles", app.scene.collectibles.len());

    while app.running {
        let input = FrameInput::poll();

        match app.update(&input) {
            EditorAction::SaveLevel => {
                let points = app.scene.collectible_points();
                match level::save_points(level::LEVEL_FILE, &points) {
                    Ok(()) => info!("saved {} collectibles to {}", points.len(), level::LEVEL_FILE),
                    Err(e) => error!("failed to save {}: {}", level::LEVEL_FILE, e),
                }
            }
            EditorAction::None => {}
        }

        render::draw(&app, &assets);
        next_frame().await;
    }
}
