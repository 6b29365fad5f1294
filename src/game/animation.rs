//! Animation selection: derive the sprite frame from locomotion state and
//! the grounded tick counters.

use crate::scene::{Facing, Locomotion, Player};

/// Walk cycle, held [`WALK_FRAME_TICKS`] ticks per entry
pub const WALK_FRAMES: [usize; 4] = [2, 3, 4, 5];
pub const WALK_FRAME_TICKS: u32 = 6;

/// Frame shown whenever the player is off the ground
pub const AIRBORNE_FRAME: usize = 3;
/// Frame shown on first standing still
pub const IDLE_FRAME: usize = 1;
/// Frame shown once the idle pose has settled
pub const REST_FRAME: usize = 0;
/// Grounded idle ticks before the idle pose settles into the rest pose
pub const IDLE_SETTLE_TICKS: u32 = 120;

/// Current walk-cycle frame for a grounded walking player.
pub fn walk_frame(walk_ticks: u32) -> usize {
    let cycle = WALK_FRAMES.len() as u32 * WALK_FRAME_TICKS;
    WALK_FRAMES[((walk_ticks % cycle) / WALK_FRAME_TICKS) as usize]
}

/// Update the player's frame index and facing. An idle fall keeps the last
/// facing; walking in either state turns the sprite that way.
pub fn advance(player: &mut Player) {
    match player.state {
        Locomotion::MovingLeft => player.facing = Facing::Left,
        Locomotion::MovingRight => player.facing = Facing::Right,
        Locomotion::Idle => {}
    }

    player.frame = if !player.can_jump {
        AIRBORNE_FRAME
    } else {
        match player.state {
            Locomotion::Idle => {
                if player.idle_ticks < IDLE_SETTLE_TICKS {
                    IDLE_FRAME
                } else {
                    REST_FRAME
                }
            }
            Locomotion::MovingLeft | Locomotion::MovingRight => walk_frame(player.walk_ticks),
        }
    };
}
