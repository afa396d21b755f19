//! Procedural platform generation and recycling
//!
//! The platform set is an append-only strip growing upward: new platforms
//! are pushed one at a time above the last generated one, and platforms
//! that fall far enough below the player are dropped.

use rand::Rng;

use super::state::{GameState, Platform};

/// Random platform x within the viewport
fn random_x(state: &mut GameState) -> f32 {
    let max_x = state.viewport.width - state.tuning.platform_width;
    state.rng.random_range(0.0..max_x)
}

/// Random vertical gap between consecutive platforms
fn random_spacing(state: &mut GameState) -> f32 {
    let tuning = &state.tuning;
    state
        .rng
        .random_range(tuning.platform_min_spacing..tuning.platform_max_spacing)
}

fn push_platform(state: &mut GameState, x: f32, y: f32) {
    let id = state.next_entity_id();
    let platform = Platform::new(id, x, y, &state.tuning);
    state.platforms.push(platform);
}

/// Build the starting platform set
///
/// The first platform is centred under the player's spawn point so every
/// session starts on solid ground.
pub fn seed_platforms(state: &mut GameState) {
    state.platforms.clear();

    let count = state.tuning.initial_platforms.max(1);
    let mut y = state.viewport.height - state.tuning.spawn_offset;
    for i in 0..count {
        if i > 0 {
            y -= random_spacing(state);
        }
        let x = random_x(state);
        push_platform(state, x, y);
    }

    let player = &state.player;
    let spawn_x = player.pos.x + player.size.x / 2.0 - state.tuning.platform_width / 2.0;
    let spawn_y = player.bottom();
    let spawn = &mut state.platforms[0];
    spawn.pos.x = spawn_x;
    spawn.pos.y = spawn_y;
}

/// Append at most one platform above the last generated one
///
/// Returns true if a platform was added.
pub fn extend(state: &mut GameState) -> bool {
    let player = &state.player;
    let top_y = state.platforms.last().map_or(player.bottom(), |p| p.top());
    if top_y <= player.pos.y - state.viewport.height {
        return false;
    }

    let y = top_y - random_spacing(state);
    let x = random_x(state);
    log::debug!("Platform spawned at ({x:.1}, {y:.1})");
    push_platform(state, x, y);
    true
}

/// Drop platforms far below the play area, returning how many went
pub fn prune(state: &mut GameState) -> usize {
    let limit = state.player.pos.y + state.viewport.height + state.tuning.prune_margin;
    let before = state.platforms.len();
    state.platforms.retain(|p| p.top() < limit);
    before - state.platforms.len()
}
