//! Frame-driven simulation tick
//!
//! Core game loop that advances the simulation by one display frame.

use super::collision::{has_support, resolve_landings};
use super::input::TickInput;
use super::state::{Facing, GamePhase, GameState, MotionState};
use super::world;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The player is resting on a platform after this tick
    pub landed: bool,
    /// Points gained this tick
    pub scored: u32,
    /// A new platform was generated
    pub spawned: bool,
    /// Platforms recycled below the play area
    pub pruned: usize,
    /// This tick ended the game
    pub game_over: bool,
}

/// Advance the game state by one frame
///
/// Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    if state.phase == GamePhase::GameOver {
        return report;
    }

    state.frame += 1;
    let tuning = state.tuning;
    let viewport = state.viewport;

    // Horizontal: velocity comes straight from the held direction
    let player = &mut state.player;
    let axis = input.axis();
    player.vel.x = axis * tuning.player_speed;
    if axis < 0.0 {
        player.facing = Facing::Left;
    } else if axis > 0.0 {
        player.facing = Facing::Right;
    }
    player.pos.x = (player.pos.x + player.vel.x).clamp(0.0, viewport.width - player.size.x);

    // Vertical: gravity always applies, landings cancel it
    player.vel.y += tuning.gravity;
    player.pos.y += player.vel.y;

    let landing = resolve_landings(player, &mut state.platforms, tuning.landing_tolerance);
    report.landed = landing.landed;
    report.scored = landing.scored;
    state.score += landing.scored;

    player.motion = match (landing.landed, player.vel.x != 0.0) {
        (true, true) => MotionState::Running,
        (true, false) => MotionState::Idle,
        (false, _) => MotionState::Jumping,
    };

    state.camera.follow(state.player.pos.y, viewport.height);

    report.spawned = world::extend(state);
    report.pruned = world::prune(state);

    state.lava.rise(tuning.lava_speed, &state.camera, viewport.height);
    state.lava.update_bubbles(&mut state.rng, viewport, &tuning);

    if state.player.bottom() > state.lava.surface_y {
        state.phase = GamePhase::GameOver;
        report.game_over = true;
        log::info!(
            "Game over: score {} after {} frames (seed {})",
            state.score,
            state.frame,
            state.seed
        );
    }

    report
}

/// Jump if the player is standing on a platform
///
/// Returns true if the jump impulse was applied. Airborne requests are
/// dropped rather than queued.
pub fn jump(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    if !has_support(&state.player, &state.platforms, state.tuning.jump_tolerance) {
        return false;
    }

    state.player.vel.y = state.tuning.jump_impulse;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;
    use proptest::prelude::*;
    use rand::Rng;
    use std::collections::HashSet;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, Viewport::new(800.0, 600.0), Tuning::default())
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_first_landing_scores_once() {
        let mut state = new_state(12345);
        let report = tick(&mut state, &idle());
        assert!(report.landed);
        assert_eq!(report.scored, 1);
        assert_eq!(state.score, 1);
        assert!(state.platforms[0].visited);
        assert_eq!(state.platforms.iter().filter(|p| p.visited).count(), 1);
        assert_eq!(state.player.bottom(), state.platforms[0].top());
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.motion, MotionState::Idle);

        for _ in 0..50 {
            let report = tick(&mut state, &idle());
            assert!(report.landed);
            assert_eq!(report.scored, 0);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_running_then_falling() {
        let mut state = new_state(1);
        let right = TickInput {
            right: true,
            ..Default::default()
        };

        tick(&mut state, &right);
        assert_eq!(state.player.motion, MotionState::Running);
        assert_eq!(state.player.vel.x, 5.0);
        assert_eq!(state.player.facing, Facing::Right);

        // Platform spans 350..450; after 14 steps the player's left edge is at 450
        for _ in 0..13 {
            tick(&mut state, &right);
        }
        assert_eq!(state.player.pos.x, 450.0);
        assert_eq!(state.player.motion, MotionState::Jumping);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = new_state(1);
        let both = TickInput {
            left: true,
            right: true,
        };
        tick(&mut state, &both);
        assert_eq!(state.player.vel.x, -5.0);
        assert_eq!(state.player.facing, Facing::Left);

        // Releasing keeps the facing
        tick(&mut state, &idle());
        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.player.facing, Facing::Left);
    }

    #[test]
    fn test_wall_clamp() {
        let mut state = new_state(1);
        state.player.pos.x = 2.0;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.player.pos.x, 0.0);

        state.player.pos.x = 757.0;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.player.pos.x, 760.0);
    }

    #[test]
    fn test_jump_from_platform() {
        let mut state = new_state(7);
        tick(&mut state, &idle());

        assert!(jump(&mut state));
        assert_eq!(state.player.vel.y, -12.0);

        let report = tick(&mut state, &idle());
        assert!(!report.landed);
        assert_eq!(state.player.vel.y, -11.5);
        assert_eq!(state.player.motion, MotionState::Jumping);
    }

    #[test]
    fn test_airborne_jump_ignored() {
        let mut state = new_state(7);
        tick(&mut state, &idle());
        assert!(jump(&mut state));
        tick(&mut state, &idle());

        let vel = state.player.vel;
        assert!(!jump(&mut state));
        assert_eq!(state.player.vel, vel);
    }

    #[test]
    fn test_jump_lands_back_on_spawn() {
        let mut state = new_state(7);
        // Keep the other platforms out of the jump arc
        for platform in &mut state.platforms[1..] {
            platform.pos.x = 0.0;
        }
        tick(&mut state, &idle());
        jump(&mut state);

        let mut frames = 0;
        loop {
            let report = tick(&mut state, &idle());
            frames += 1;
            if report.landed {
                break;
            }
            assert!(frames < 100, "never landed");
        }
        assert_eq!(state.player.bottom(), 500.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_camera_follows_climb() {
        let mut state = new_state(7);
        state.player.pos.y = 100.0;
        tick(&mut state, &idle());
        let expected = 300.0 - state.player.pos.y;
        assert_eq!(state.camera.offset, expected);
    }

    #[test]
    fn test_game_over_once_then_frozen() {
        let mut state = new_state(99);
        tick(&mut state, &idle());

        state.lava.surface_y = state.player.bottom() - 1.0;
        let report = tick(&mut state, &idle());
        assert!(report.game_over);
        assert_eq!(state.phase, GamePhase::GameOver);

        let before = serde_json::to_value(&state).unwrap();
        let rng_before = state.rng.clone().random::<u64>();
        for _ in 0..10 {
            let report = tick(&mut state, &TickInput { left: true, right: false });
            assert_eq!(report, TickReport::default());
            assert!(!jump(&mut state));
        }
        assert_eq!(serde_json::to_value(&state).unwrap(), before);
        assert_eq!(state.rng.clone().random::<u64>(), rng_before);
    }

    #[test]
    fn test_idle_player_eventually_burns() {
        let mut state = new_state(3);
        let mut game_overs = 0;
        for _ in 0..1000 {
            if tick(&mut state, &idle()).game_over {
                game_overs += 1;
            }
        }
        assert_eq!(game_overs, 1);
        assert!(state.is_game_over());
        // Lava starts at 600 and needs ~400 frames to reach the spawn platform
        assert!(state.frame > 390 && state.frame < 410, "frame {}", state.frame);
    }

    #[test]
    fn test_one_platform_per_tick() {
        let mut state = new_state(11);
        state.player.pos.y = -5000.0;

        let mut spawned_ticks = 0;
        for _ in 0..60 {
            let before = state.platforms.len();
            let report = tick(&mut state, &idle());
            let after = state.platforms.len();
            assert!(after + report.pruned <= before + 1);
            assert_eq!(after + report.pruned - before, report.spawned as usize);
            if report.spawned {
                spawned_ticks += 1;
            }
        }
        assert!(spawned_ticks > 1);
    }

    #[test]
    fn test_determinism() {
        let inputs: Vec<TickInput> = (0..600)
            .map(|i| TickInput {
                left: i % 90 < 30,
                right: i % 90 >= 60,
            })
            .collect();

        let run = |seed| {
            let mut state = new_state(seed);
            for (i, input) in inputs.iter().enumerate() {
                if i % 40 == 0 {
                    jump(&mut state);
                }
                tick(&mut state, input);
            }
            serde_json::to_value(&state).unwrap()
        };

        assert_eq!(run(2024), run(2024));
        assert_ne!(run(2024), run(2025));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_simulation_invariants(
            seed in any::<u64>(),
            steps in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..400),
        ) {
            let mut state = new_state(seed);
            let mut visited: HashSet<u32> = HashSet::new();
            let mut last_offset = state.camera.offset;

            for (left, right, want_jump) in steps {
                if want_jump {
                    let vel = state.player.vel;
                    if !jump(&mut state) {
                        prop_assert_eq!(state.player.vel, vel);
                    }
                }
                let report = tick(&mut state, &TickInput { left, right });

                let max_x = state.viewport.width - state.player.size.x;
                prop_assert!(state.player.pos.x >= 0.0 && state.player.pos.x <= max_x);

                prop_assert!(state.camera.offset >= last_offset);
                last_offset = state.camera.offset;

                let mut newly = 0;
                for platform in &state.platforms {
                    if platform.visited && visited.insert(platform.id) {
                        newly += 1;
                    }
                    if visited.contains(&platform.id) {
                        prop_assert!(platform.visited);
                    }
                }
                prop_assert_eq!(newly, report.scored);
                prop_assert_eq!(state.score as usize, visited.len());

                if report.landed {
                    prop_assert_eq!(state.player.vel.y, 0.0);
                    let bottom = state.player.bottom();
                    prop_assert!(state.platforms.iter().any(|p| (p.top() - bottom).abs() < 1e-3));
                }
            }
        }
    }
}
