//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (platforms in generation order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod input;
pub mod lava;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use collision::{LandingResult, has_support, resolve_landings};
pub use input::{Direction, IntentSink, TickInput};
pub use lava::{Bubble, Lava};
pub use session::Session;
pub use snapshot::FrameSnapshot;
pub use state::{Facing, GamePhase, GameState, MotionState, Platform, Player, Viewport};
pub use tick::{TickReport, jump, tick};
