//! Read-only per-frame view handed to the presentation layer

use serde::Serialize;

use super::lava::Bubble;
use super::state::{GameState, Platform, Player, Viewport};

/// Everything a renderer needs for one frame
///
/// Borrowed from the [`GameState`]; taken after the tick completes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameSnapshot<'a> {
    pub viewport: Viewport,
    pub player: &'a Player,
    /// Animation clock for limb motion
    pub frame: u64,
    pub platforms: &'a [Platform],
    pub lava_y: f32,
    pub bubbles: &'a [Bubble],
    pub camera_offset: f32,
    pub score: u32,
    pub game_over: bool,
}

impl<'a> From<&'a GameState> for FrameSnapshot<'a> {
    fn from(state: &'a GameState) -> Self {
        Self {
            viewport: state.viewport,
            player: &state.player,
            frame: state.frame,
            platforms: &state.platforms,
            lava_y: state.lava.surface_y,
            bubbles: &state.lava.bubbles,
            camera_offset: state.camera.offset,
            score: state.score,
            game_over: state.is_game_over(),
        }
    }
}
