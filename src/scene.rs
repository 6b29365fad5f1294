//! World model: player, platforms, collectibles.
//!
//! Pure data plus setup and reset. Every entity is anchored at its
//! bottom-center: the stored position is the anchor point, not the top-left
//! corner of the rectangle.

use macroquad::prelude::*;

/// Screen dimensions the level geometry is authored against
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Player spawn anchor
pub const PLAYER_SPAWN: Vec2 = Vec2::new(75.0, 600.0);
/// Player rectangle (16x24 sprite cell at 3x scale)
pub const PLAYER_SIZE: Vec2 = Vec2::new(48.0, 72.0);
/// Collectible rectangle (16x16 sprite cell at 2x scale)
pub const COLLECTIBLE_SIZE: Vec2 = Vec2::new(32.0, 32.0);
/// Floating ledge rectangle (47x8 sprite cell at 2x scale)
const LEDGE_SIZE: Vec2 = Vec2::new(94.0, 16.0);

/// Flat preset row for the first layout shortcut
pub const LAYOUT_FLAT: [(f32, f32); 5] = [
    (440.0, SCREEN_HEIGHT - 50.0),
    (540.0, SCREEN_HEIGHT - 50.0),
    (640.0, SCREEN_HEIGHT - 50.0),
    (740.0, SCREEN_HEIGHT - 50.0),
    (840.0, SCREEN_HEIGHT - 50.0),
];

/// Staggered preset row for the second layout shortcut
pub const LAYOUT_STAGGERED: [(f32, f32); 5] = [
    (440.0, SCREEN_HEIGHT - 70.0),
    (540.0, SCREEN_HEIGHT - 50.0),
    (640.0, SCREEN_HEIGHT - 70.0),
    (740.0, SCREEN_HEIGHT - 50.0),
    (840.0, SCREEN_HEIGHT - 70.0),
];

/// Bounding rectangle of a bottom-center anchored entity
pub fn anchored_bounds(pos: Vec2, size: Vec2) -> Rect {
    Rect::new(pos.x - size.x / 2.0, pos.y - size.y, size.x, size.y)
}

/// Horizontal-motion intent, distinct from airborne/grounded status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Idle,
    MovingLeft,
    MovingRight,
}

/// Which way the player sprite faces; kept across idle falls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Whether the sprite should be mirrored horizontally
    pub fn flipped(self) -> bool {
        self == Facing::Left
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub state: Locomotion,
    pub facing: Facing,
    /// Vertical speed, positive downward
    pub speed: f32,
    /// True while resting on a surface
    pub can_jump: bool,
    /// Current sprite frame index
    pub frame: usize,
    /// Ticks spent grounded and idle; zeroed while airborne or walking
    pub idle_ticks: u32,
    /// Ticks spent grounded and walking; zeroed while airborne or idle
    pub walk_ticks: u32,
    pub score: u32,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            size: PLAYER_SIZE,
            state: Locomotion::Idle,
            facing: Facing::Right,
            speed: 0.0,
            can_jump: false,
            frame: 0,
            idle_ticks: 0,
            walk_ticks: 0,
            score: 0,
        }
    }

    /// Back to the spawn state. Score and facing survive a reset.
    pub fn reset(&mut self) {
        self.pos = PLAYER_SPAWN;
        self.state = Locomotion::Idle;
        self.speed = 0.0;
        self.can_jump = false;
        self.frame = 0;
        self.idle_ticks = 0;
        self.walk_ticks = 0;
    }

    pub fn bounds(&self) -> Rect {
        anchored_bounds(self.pos, self.size)
    }
}

/// A static surface the player can land on. Never mutates after setup.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    /// Y coordinate of the walkable top edge
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y
    }

    pub fn bounds(&self) -> Rect {
        anchored_bounds(self.pos, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Collectible {
    /// Stable identifier; never reused, so held ids survive list growth
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
}

impl Collectible {
    pub fn bounds(&self) -> Rect {
        anchored_bounds(self.pos, self.size)
    }
}

/// The whole mutable world. Index 0 of `platforms` is always the ground.
pub struct Scene {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    /// Collectible currently latched to the pointer, by id
    pub dragged: Option<u32>,
    next_collectible_id: u32,
}

impl Scene {
    /// Build the scene: ground, the fixed ledge staircase, and one
    /// collectible per persisted coordinate pair.
    pub fn new(points: &[(i32, i32)]) -> Self {
        let mut platforms = vec![Platform {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT),
            size: Vec2::new(SCREEN_WIDTH, 50.0),
        }];
        let ledges = [
            (200.0, 600.0),
            (400.0, 500.0),
            (600.0, 400.0),
            (800.0, 300.0),
            (1000.0, 200.0),
        ];
        platforms.extend(ledges.iter().map(|&(x, y)| Platform {
            pos: Vec2::new(x, y),
            size: LEDGE_SIZE,
        }));

        let mut scene = Self {
            player: Player::spawn(),
            platforms,
            collectibles: Vec::new(),
            dragged: None,
            next_collectible_id: 1,
        };
        for &(x, y) in points {
            scene.spawn_collectible(Vec2::new(x as f32, y as f32));
        }
        scene
    }

    /// Append a collectible at `pos` and return its id.
    pub fn spawn_collectible(&mut self, pos: Vec2) -> u32 {
        let id = self.next_collectible_id;
        self.next_collectible_id += 1;
        self.collectibles.push(Collectible {
            id,
            pos,
            size: COLLECTIBLE_SIZE,
            collected: false,
        });
        id
    }

    pub fn collectible_mut(&mut self, id: u32) -> Option<&mut Collectible> {
        self.collectibles.iter_mut().find(|c| c.id == id)
    }

    /// Restart the run: player to spawn, everything uncollected.
    pub fn reset(&mut self) {
        self.player.reset();
        for c in &mut self.collectibles {
            c.collected = false;
        }
    }

    /// Replace the collectible list with a preset arrangement.
    pub fn apply_layout(&mut self, points: &[(f32, f32)]) {
        self.collectibles.clear();
        self.dragged = None;
        for &(x, y) in points {
            self.spawn_collectible(Vec2::new(x, y));
        }
    }

    /// Coordinate pairs for the persistence collaborator, in list order.
    pub fn collectible_points(&self) -> Vec<(i32, i32)> {
        self.collectibles
            .iter()
            .map(|c| (c.pos.x as i32, c.pos.y as i32))
            .collect()
    }
}
