//! Play-mode simulation: input dispatch, tick counters, physics, animation.

pub mod animation;
pub mod physics;

use crate::input::FrameInput;
use crate::scene::{Locomotion, Scene, LAYOUT_FLAT, LAYOUT_STAGGERED};
use crate::tuning::Tuning;

/// One play-mode tick.
///
/// Handler order is fixed: restart (short-circuits the whole tick), jump,
/// airborne counter reset, held-direction query (left wins over right),
/// layout shortcuts, then integration, pickup, and animation.
pub fn tick(scene: &mut Scene, input: &FrameInput, tuning: &Tuning) {
    if input.restart {
        scene.reset();
        return;
    }

    let player = &mut scene.player;

    if input.jump && player.can_jump {
        player.speed = -tuning.jump_speed;
        player.can_jump = false;
    }

    // The counters only mean something while grounded
    if !player.can_jump {
        player.idle_ticks = 0;
        player.walk_ticks = 0;
    }

    if input.move_left {
        player.state = Locomotion::MovingLeft;
        if player.can_jump {
            player.walk_ticks += 1;
            player.idle_ticks = 0;
        }
    } else if input.move_right {
        player.state = Locomotion::MovingRight;
        if player.can_jump {
            player.walk_ticks += 1;
            player.idle_ticks = 0;
        }
    } else {
        player.state = Locomotion::Idle;
        if player.can_jump {
            player.idle_ticks += 1;
            player.walk_ticks = 0;
        }
    }

    if input.layout_flat {
        scene.apply_layout(&LAYOUT_FLAT);
    }
    if input.layout_staggered {
        scene.apply_layout(&LAYOUT_STAGGERED);
    }

    physics::integrate(&mut scene.player, &scene.platforms, tuning, input.dt);
    physics::collect_touching(&mut scene.player, &mut scene.collectibles);
    animation::advance(&mut scene.player);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Facing, PLAYER_SPAWN};
    use macroquad::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn play_input() -> FrameInput {
        FrameInput {
            dt: DT,
            ..Default::default()
        }
    }

    /// Scene with the player standing on the ground platform
    fn grounded_scene() -> Scene {
        let mut scene = Scene::new(&[(440, 670)]);
        scene.player.pos = Vec2::new(300.0, 670.0);
        scene.player.speed = 0.0;
        scene.player.can_jump = true;
        scene
    }

    #[test]
    fn test_restart_resets_the_run() {
        let mut scene = grounded_scene();
        scene.player.score = 2;
        scene.player.walk_ticks = 9;
        scene.collectibles[0].collected = true;

        let input = FrameInput {
            restart: true,
            ..play_input()
        };
        tick(&mut scene, &input, &Tuning::default());

        assert_eq!(scene.player.pos, PLAYER_SPAWN);
        assert_eq!(scene.player.state, Locomotion::Idle);
        assert_eq!(scene.player.speed, 0.0);
        assert!(!scene.player.can_jump);
        assert_eq!(scene.player.idle_ticks, 0);
        assert_eq!(scene.player.walk_ticks, 0);
        assert!(!scene.collectibles[0].collected);
        assert_eq!(scene.player.score, 2);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut scene = grounded_scene();
        scene.player.pos = Vec2::new(900.0, 200.0);
        let input = FrameInput {
            restart: true,
            ..play_input()
        };
        let tuning = Tuning::default();

        tick(&mut scene, &input, &tuning);
        let once = scene.player.clone();
        tick(&mut scene, &input, &tuning);

        assert_eq!(scene.player.pos, once.pos);
        assert_eq!(scene.player.speed, once.speed);
        assert_eq!(scene.player.state, once.state);
        assert_eq!(scene.player.can_jump, once.can_jump);
    }

    #[test]
    fn test_restart_short_circuits_the_tick() {
        let mut scene = grounded_scene();
        let input = FrameInput {
            restart: true,
            move_right: true,
            ..play_input()
        };
        tick(&mut scene, &input, &Tuning::default());

        // No direction handling and no integration happened this tick
        assert_eq!(scene.player.state, Locomotion::Idle);
        assert_eq!(scene.player.pos.x, PLAYER_SPAWN.x);
        assert_eq!(scene.player.speed, 0.0);
    }

    #[test]
    fn test_jump_only_from_the_ground() {
        let tuning = Tuning::default();
        let input = FrameInput {
            jump: true,
            ..play_input()
        };

        let mut scene = grounded_scene();
        tick(&mut scene, &input, &tuning);
        assert_eq!(scene.player.speed, -tuning.jump_speed + tuning.gravity * DT);
        assert!(!scene.player.can_jump);

        // Airborne now; a second jump edge does nothing
        let speed_before = scene.player.speed;
        tick(&mut scene, &input, &tuning);
        assert_eq!(scene.player.speed, speed_before + tuning.gravity * DT);
    }

    #[test]
    fn test_counters_forced_to_zero_while_airborne() {
        let mut scene = grounded_scene();
        scene.player.can_jump = false;
        scene.player.idle_ticks = 40;
        scene.player.walk_ticks = 7;

        let input = FrameInput {
            move_right: true,
            ..play_input()
        };
        tick(&mut scene, &input, &Tuning::default());

        assert_eq!(scene.player.idle_ticks, 0);
        assert_eq!(scene.player.walk_ticks, 0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut scene = grounded_scene();
        let input = FrameInput {
            move_left: true,
            move_right: true,
            ..play_input()
        };
        tick(&mut scene, &input, &Tuning::default());

        assert_eq!(scene.player.state, Locomotion::MovingLeft);
        assert_eq!(scene.player.facing, Facing::Left);
    }

    #[test]
    fn test_counters_advance_only_while_grounded() {
        let mut scene = grounded_scene();
        let input = FrameInput {
            move_right: true,
            ..play_input()
        };
        let tuning = Tuning::default();

        tick(&mut scene, &input, &tuning);
        assert_eq!(scene.player.walk_ticks, 1);
        assert_eq!(scene.player.idle_ticks, 0);

        tick(&mut scene, &input, &tuning);
        assert_eq!(scene.player.walk_ticks, 2);

        let idle = play_input();
        tick(&mut scene, &idle, &tuning);
        assert_eq!(scene.player.idle_ticks, 1);
        assert_eq!(scene.player.walk_ticks, 0);
    }

    #[test]
    fn test_layout_shortcut_replaces_collectibles() {
        let mut scene = grounded_scene();
        scene.spawn_collectible(Vec2::new(100.0, 100.0));
        scene.collectibles[0].collected = true;

        let input = FrameInput {
            layout_flat: true,
            ..play_input()
        };
        tick(&mut scene, &input, &Tuning::default());

        assert_eq!(scene.collectibles.len(), LAYOUT_FLAT.len());
        for (c, &(x, y)) in scene.collectibles.iter().zip(LAYOUT_FLAT.iter()) {
            assert_eq!(c.pos, vec2(x, y));
            assert!(!c.collected);
        }
    }

    #[test]
    fn test_standing_on_ground_stays_grounded() {
        let mut scene = grounded_scene();
        let input = play_input();
        let tuning = Tuning::default();
        for _ in 0..10 {
            tick(&mut scene, &input, &tuning);
        }
        assert!(scene.player.can_jump);
        assert_eq!(scene.player.pos.y, 670.0);
        assert_eq!(scene.player.idle_ticks, 10);
    }
}
