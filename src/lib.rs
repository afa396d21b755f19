//! Lava Jumper - A platform climber racing rising lava
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, platforms, lava, camera, session)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Keyboard/touch input adapters
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, TouchControls};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
///
/// All values are in pixels and pixels-per-frame; the simulation advances
/// once per display refresh rather than on a fixed timestep.
pub mod consts {
    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Horizontal speed while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Vertical velocity applied by a jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.5;
    /// Distance between the spawn platform and the bottom of the viewport
    pub const SPAWN_OFFSET: f32 = 100.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_MIN_SPACING: f32 = 100.0;
    pub const PLATFORM_MAX_SPACING: f32 = 150.0;
    /// Platforms seeded at session start
    pub const INITIAL_PLATFORM_COUNT: usize = 10;
    /// Extra distance below the viewport before a platform is recycled
    pub const PRUNE_MARGIN: f32 = 200.0;

    /// Band below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 1.0;
    /// Wider band used when checking whether a jump is allowed
    pub const JUMP_TOLERANCE: f32 = 5.0;

    /// Lava starts this far below the viewport
    pub const LAVA_HEIGHT: f32 = 50.0;
    /// Lava rise per frame
    pub const LAVA_SPEED: f32 = 0.25;

    /// Bubble particles (cosmetic)
    pub const BUBBLE_SPAWN_CHANCE: f64 = 0.2;
    pub const BUBBLE_LIFE: u32 = 100;
    pub const BUBBLE_RISE: f32 = 1.0;
    pub const BUBBLE_MIN_RADIUS: f32 = 5.0;
    pub const BUBBLE_MAX_RADIUS: f32 = 15.0;
    pub const MAX_BUBBLES: usize = 128;

    /// Smallest viewport the simulation accepts
    pub const MIN_VIEWPORT_WIDTH: f32 = 200.0;
    pub const MIN_VIEWPORT_HEIGHT: f32 = 300.0;
}

/// Open-interval overlap of `[a_min, a_max]` and `[b_min, b_max]`
///
/// Touching edges do not count as overlapping.
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}
