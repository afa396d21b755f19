//! Platform abstraction layer
//!
//! Translates device events into simulation intents:
//! - Keyboard (arrows / WASD / space)
//! - On-screen touch buttons

pub mod input;

pub use input::{KeyboardAdapter, TouchAdapter, TouchButton};
