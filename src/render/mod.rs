//! Rendering collaborator: sprite sheet mapping and the per-frame draw pass.
//!
//! Reads the world model, never mutates it. Missing textures are logged and
//! drawn as flat-color rectangles instead, so the prototype runs without
//! the asset pack.

use macroquad::prelude::*;

use crate::app::{App, Mode};
use crate::editor::{Button, ButtonKind};
use crate::scene::{Collectible, Player, SCREEN_WIDTH};

const SHEET_PATH: &str = "assets/monkeylad_further.png";
const ICONS_PATH: &str = "assets/icons.png";

/// Source cell for a player animation frame (16x24 cells in one sheet row)
fn player_src(frame: usize) -> Rect {
    Rect::new(448.0 + 16.0 * frame as f32, 208.0, 16.0, 24.0)
}

fn platform_src() -> Rect {
    Rect::new(448.0, 33.0, 47.0, 8.0)
}

fn collectible_src() -> Rect {
    Rect::new(592.0, 352.0, 16.0, 16.0)
}

fn save_icon_src() -> Rect {
    Rect::new(1194.0, 1095.0, 60.0, 65.0)
}

pub struct Assets {
    pub sheet: Option<Texture2D>,
    pub icons: Option<Texture2D>,
}

impl Assets {
    pub async fn load() -> Self {
        Self {
            sheet: load_or_warn(SHEET_PATH).await,
            icons: load_or_warn(ICONS_PATH).await,
        }
    }
}

async fn load_or_warn(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(e) => {
            warn!("failed to load {}: {} - drawing rectangles instead", path, e);
            None
        }
    }
}

fn draw_sprite(texture: &Option<Texture2D>, src: Rect, dest: Rect, flip_x: bool, fallback: Color) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: Some(src),
                flip_x,
                ..Default::default()
            },
        ),
        None => draw_rectangle(dest.x, dest.y, dest.w, dest.h, fallback),
    }
}

pub fn draw(app: &App, assets: &Assets) {
    clear_background(SKYBLUE);

    // The ground is a plain rect; the ledges use the sheet
    let ground = &app.scene.platforms[0];
    let g = ground.bounds();
    draw_rectangle(g.x, g.y, g.w, g.h, LIME);
    draw_origin_at(app, ground.pos);

    for platform in &app.scene.platforms[1..] {
        draw_sprite(&assets.sheet, platform_src(), platform.bounds(), false, BROWN);
        draw_origin_at(app, platform.pos);
    }

    for c in &app.scene.collectibles {
        draw_collectible(app, assets, c);
    }

    draw_player(app, assets, &app.scene.player);

    match app.mode {
        Mode::Play => draw_play_hud(&app.scene.player),
        Mode::Edit => draw_edit_hud(app, assets),
    }
}

fn draw_collectible(app: &App, assets: &Assets, c: &Collectible) {
    if c.collected {
        return;
    }
    let b = c.bounds();
    draw_sprite(&assets.sheet, collectible_src(), b, false, GOLD);
    if app.mode == Mode::Edit {
        draw_rectangle_lines(b.x, b.y, b.w, b.h, 1.0, BLACK);
    }
    draw_origin_at(app, c.pos);
}

fn draw_player(app: &App, assets: &Assets, player: &Player) {
    draw_sprite(
        &assets.sheet,
        player_src(player.frame),
        player.bounds(),
        player.facing.flipped(),
        RED,
    );
    draw_origin_at(app, player.pos);
}

fn draw_play_hud(player: &Player) {
    let help = [
        "Arrow keys to move",
        "Space to jump",
        "'r' to restart",
        "'e' to enter edit mode",
        "'o' to view origins",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, 30.0, 50.0 + 30.0 * i as f32, 30.0, YELLOW);
    }
    draw_text(
        &format!("Score: {}", player.score),
        SCREEN_WIDTH - 200.0,
        50.0,
        30.0,
        YELLOW,
    );
}

fn draw_edit_hud(app: &App, assets: &Assets) {
    draw_text("Edit mode (press 'e' to exit)", 30.0, 50.0, 30.0, BLACK);
    for button in &app.editor.buttons {
        draw_button(assets, button);
    }
}

fn draw_button(assets: &Assets, button: &Button) {
    let r = button.hit_rect();
    let fill = if button.selected { RED } else { PINK };
    draw_rectangle(r.x, r.y, r.w, r.h, fill);

    let (texture, src) = match button.kind {
        ButtonKind::PlaceCollectible => (&assets.sheet, collectible_src()),
        ButtonKind::SaveLevel => (&assets.icons, save_icon_src()),
    };
    if texture.is_some() {
        draw_sprite(texture, src, r, false, fill);
    }
}

/// Debug overlay: a small marker on an entity's anchor point
fn draw_origin_at(app: &App, pos: Vec2) {
    if !app.show_origins {
        return;
    }
    draw_rectangle(pos.x - 5.0, pos.y - 5.0, 10.0, 10.0, RED);
}
