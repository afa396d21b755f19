//! Device-independent input intents

use serde::{Deserialize, Serialize};

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Held movement intents sampled by each tick
///
/// Only the latest state of each flag matters; press/release events simply
/// overwrite it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
        }
    }

    /// -1, 0 or +1; left wins when both are held
    pub fn axis(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

/// Anything that accepts logical intents
///
/// Keyboard and touch adapters translate device events into these calls.
pub trait IntentSink {
    fn set_intent(&mut self, direction: Direction, active: bool);
    fn request_jump(&mut self);
}
