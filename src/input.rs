//! Per-tick snapshot of the input collaborator.
//!
//! The simulation and editor consume this snapshot instead of querying the
//! engine directly, which keeps both testable off-screen. Edge fields are
//! true only on the tick the key or button went down; held fields are true
//! on every tick it stays down.

use macroquad::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Close the app (edge)
    pub quit: bool,
    /// Reset the run (edge)
    pub restart: bool,
    /// Jump (edge)
    pub jump: bool,
    /// Flip between play and edit mode (edge)
    pub toggle_mode: bool,
    /// Toggle the anchor-marker overlay (edge)
    pub toggle_origins: bool,
    /// Walk left (held); wins over `move_right` when both are down
    pub move_left: bool,
    /// Walk right (held)
    pub move_right: bool,
    /// Replace collectibles with the flat preset row (held)
    pub layout_flat: bool,
    /// Replace collectibles with the staggered preset row (held)
    pub layout_staggered: bool,
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Primary pointer button went down this tick (edge)
    pub pointer_pressed: bool,
    /// Primary pointer button is held
    pub pointer_down: bool,
    /// Secondary pointer button went down this tick (edge)
    pub cancel_pressed: bool,
    /// Frame delta time in seconds
    pub dt: f32,
}

impl FrameInput {
    /// Snapshot the current frame's input state.
    pub fn poll() -> Self {
        let (mouse_x, mouse_y) = mouse_position();
        Self {
            quit: is_key_pressed(KeyCode::Q),
            restart: is_key_pressed(KeyCode::R),
            jump: is_key_pressed(KeyCode::Space),
            toggle_mode: is_key_pressed(KeyCode::E),
            toggle_origins: is_key_pressed(KeyCode::O),
            move_left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            move_right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            layout_flat: is_key_down(KeyCode::Key1),
            layout_staggered: is_key_down(KeyCode::Key2),
            pointer: vec2(mouse_x, mouse_y),
            pointer_pressed: is_mouse_button_pressed(MouseButton::Left),
            pointer_down: is_mouse_button_down(MouseButton::Left),
            cancel_pressed: is_mouse_button_pressed(MouseButton::Right),
            dt: get_frame_time(),
        }
    }
}
