//! Application state and the per-tick mode router.
//!
//! One tick belongs to exactly one half of the app: play mode runs the
//! simulation, edit mode runs the editor protocol. Switching modes is a
//! single unconditional edge and takes effect the same tick, so a fall in
//! progress simply freezes while editing and resumes on return.

use crate::editor::{self, Editor, EditorAction};
use crate::game;
use crate::input::FrameInput;
use crate::scene::Scene;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Play,
    Edit,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Play => Mode::Edit,
            Mode::Edit => Mode::Play,
        }
    }
}

pub struct App {
    pub scene: Scene,
    pub editor: Editor,
    pub mode: Mode,
    pub tuning: Tuning,
    /// Draw anchor markers on every entity
    pub show_origins: bool,
    pub running: bool,
}

impl App {
    pub fn new(tuning: Tuning, points: &[(i32, i32)]) -> Self {
        Self {
            scene: Scene::new(points),
            editor: Editor::new(),
            mode: Mode::Play,
            tuning,
            show_origins: false,
            running: true,
        }
    }

    /// Route one tick of input to the current mode's handler.
    pub fn update(&mut self, input: &FrameInput) -> EditorAction {
        if input.quit {
            self.running = false;
            return EditorAction::None;
        }

        if input.toggle_mode {
            self.mode = self.mode.toggled();
        }

        match self.mode {
            Mode::Play => {
                if input.toggle_origins {
                    self.show_origins = !self.show_origins;
                }
                game::tick(&mut self.scene, input, &self.tuning);
                EditorAction::None
            }
            Mode::Edit => editor::update(&mut self.editor, &mut self.scene, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Tuning::default(), &[(440, 670)])
    }

    #[test]
    fn test_mode_toggle_is_symmetric() {
        let mut app = app();
        let input = FrameInput {
            toggle_mode: true,
            ..Default::default()
        };

        app.update(&input);
        assert_eq!(app.mode, Mode::Edit);
        app.update(&input);
        assert_eq!(app.mode, Mode::Play);
    }

    #[test]
    fn test_edit_mode_pauses_physics() {
        let mut app = app();
        app.mode = Mode::Edit;
        app.scene.player.speed = 250.0;
        let y = app.scene.player.pos.y;

        let input = FrameInput {
            dt: 1.0 / 60.0,
            ..Default::default()
        };
        for _ in 0..30 {
            app.update(&input);
        }

        // The fall in progress is frozen, not merely input-gated
        assert_eq!(app.scene.player.pos.y, y);
        assert_eq!(app.scene.player.speed, 250.0);
    }

    #[test]
    fn test_toggle_takes_effect_same_tick() {
        let mut app = app();
        app.scene.player.speed = 100.0;
        let y = app.scene.player.pos.y;

        let input = FrameInput {
            toggle_mode: true,
            dt: 1.0 / 60.0,
            ..Default::default()
        };
        app.update(&input);

        // This tick already ran as an edit tick
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.scene.player.pos.y, y);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut app = app();
        let input = FrameInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(app.update(&input), EditorAction::None);
        assert!(!app.running);
    }

    #[test]
    fn test_origin_overlay_toggle() {
        let mut app = app();
        let input = FrameInput {
            toggle_origins: true,
            ..Default::default()
        };
        app.update(&input);
        assert!(app.show_origins);
        app.update(&input);
        assert!(!app.show_origins);
    }
}
