//! Editor interaction: exclusive tool buttons, collectible placement, and
//! drag-to-move authoring.
//!
//! Invariants: at most one button is selected and it is exactly the one at
//! `active`; a drag never coexists with an active tool in the same tick;
//! drags only start while no tool is active.

use macroquad::prelude::*;

use crate::input::FrameInput;
use crate::scene::{Scene, SCREEN_WIDTH};

/// What a tool button does while active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    PlaceCollectible,
    SaveLevel,
}

/// A tool button: anchored hit region plus selection state
#[derive(Debug, Clone)]
pub struct Button {
    pub kind: ButtonKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    pub selected: bool,
}

impl Button {
    fn new(kind: ButtonKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            size: vec2(60.0, 60.0),
            origin: vec2(25.0, 50.0),
            selected: false,
        }
    }

    pub fn hit_rect(&self) -> Rect {
        Rect::new(
            self.pos.x - self.origin.x,
            self.pos.y - self.origin.y,
            self.size.x,
            self.size.y,
        )
    }
}

/// What the caller should do after an editor tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Persist the current collectible coordinate list
    SaveLevel,
}

pub struct Editor {
    pub buttons: Vec<Button>,
    /// Index of the selected button, if any
    pub active: Option<usize>,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buttons: vec![
                Button::new(ButtonKind::PlaceCollectible, vec2(SCREEN_WIDTH / 2.0, 60.0)),
                Button::new(ButtonKind::SaveLevel, vec2(SCREEN_WIDTH / 2.0 + 60.0, 60.0)),
            ],
            active: None,
        }
    }

    fn active_kind(&self) -> Option<ButtonKind> {
        self.active.map(|i| self.buttons[i].kind)
    }

    fn deselect(&mut self) {
        if let Some(i) = self.active.take() {
            self.buttons[i].selected = false;
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// One editor tick.
///
/// On a primary press the first button under the pointer toggles, and a hit
/// suppresses the create tool for that press; the save tool fires on the
/// same press that reaches it and immediately deselects itself. A secondary
/// press cancels whatever is active. Dragging runs on held state, only with
/// no tool active, and unlatches the moment one becomes active.
pub fn update(editor: &mut Editor, scene: &mut Scene, input: &FrameInput) -> EditorAction {
    let mut action = EditorAction::None;

    if input.pointer_pressed {
        let hit = editor
            .buttons
            .iter()
            .position(|b| b.hit_rect().contains(input.pointer));

        if let Some(i) = hit {
            if editor.buttons[i].selected {
                editor.buttons[i].selected = false;
                editor.active = None;
            } else {
                editor.deselect();
                editor.buttons[i].selected = true;
                editor.active = Some(i);
            }
        } else if editor.active_kind() == Some(ButtonKind::PlaceCollectible) {
            scene.spawn_collectible(input.pointer);
        }

        // One-shot: fires even on the press that just selected it
        if editor.active_kind() == Some(ButtonKind::SaveLevel) {
            action = EditorAction::SaveLevel;
            editor.deselect();
        }
    }

    if input.cancel_pressed {
        editor.deselect();
    }

    if input.pointer_down {
        if editor.active.is_none() {
            if scene.dragged.is_none() {
                scene.dragged = scene
                    .collectibles
                    .iter()
                    .find(|c| !c.collected && c.bounds().contains(input.pointer))
                    .map(|c| c.id);
            }
        } else {
            scene.dragged = None;
        }
    } else {
        scene.dragged = None;
    }

    if let Some(id) = scene.dragged {
        match scene.collectible_mut(id) {
            Some(c) => c.pos = input.pointer,
            // Stale latch: the list was replaced since the drag started
            None => scene.dragged = None,
        }
    }

    action
}
