//! Kinematic integration against the platform list.
//!
//! Platforms only block vertical landing; horizontal movement is bounded by
//! the screen edges alone. The landing scan takes the first platform in
//! list order whose top edge the player's bottom would cross this tick, so
//! ledges must be authored non-overlapping in x.

use crate::scene::{Collectible, Locomotion, Platform, Player, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Advance the player by one tick: horizontal displacement, vertical
/// landing test, gravity, then the screen-edge clamp.
pub fn integrate(player: &mut Player, platforms: &[Platform], tuning: &Tuning, dt: f32) {
    match player.state {
        Locomotion::MovingLeft => player.pos.x -= tuning.walk_speed * dt,
        Locomotion::MovingRight => player.pos.x += tuning.walk_speed * dt,
        Locomotion::Idle => {}
    }

    let half_width = player.size.x / 2.0;
    let landing_top = platforms.iter().find_map(|p| {
        let top = p.top();
        let overlaps_x = p.pos.x - p.size.x / 2.0 <= player.pos.x + half_width
            && player.pos.x - half_width <= p.pos.x + p.size.x / 2.0;
        let crosses_top = player.pos.y <= top && player.pos.y + player.speed * dt >= top;
        (overlaps_x && crosses_top).then_some(top)
    });

    match landing_top {
        Some(top) => {
            player.speed = 0.0;
            player.pos.y = top;
            player.can_jump = true;
        }
        None => {
            player.pos.y += player.speed * dt;
            player.speed += tuning.gravity * dt;
            player.can_jump = false;
        }
    }

    player.pos.x = player.pos.x.clamp(half_width, SCREEN_WIDTH - half_width);
}

/// Pick up every uncollected collectible overlapping the player.
pub fn collect_touching(player: &mut Player, collectibles: &mut [Collectible]) {
    let player_bounds = player.bounds();
    for c in collectibles.iter_mut() {
        if !c.collected && c.bounds().overlaps(&player_bounds) {
            c.collected = true;
            player.score += 1;
        }
    }
}
