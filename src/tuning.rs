//! Data-driven game balance
//!
//! Every number the simulation reads comes from a [`Tuning`]. The defaults
//! reproduce the constants in [`crate::consts`]; a JSON document can override
//! any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Largest magnitude accepted for any length or rate
const MAX_MAGNITUDE: f32 = 1.0e6;

/// Physics, generation and hazard parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Negative (upward) vertical velocity applied by a jump
    pub jump_impulse: f32,
    pub gravity: f32,
    pub spawn_offset: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_min_spacing: f32,
    pub platform_max_spacing: f32,
    pub initial_platforms: usize,
    pub prune_margin: f32,

    // === Collision ===
    pub landing_tolerance: f32,
    pub jump_tolerance: f32,

    // === Lava ===
    pub lava_height: f32,
    pub lava_speed: f32,
    pub bubble_spawn_chance: f64,
    pub bubble_life: u32,
    pub bubble_rise: f32,
    pub bubble_min_radius: f32,
    pub bubble_max_radius: f32,
    pub max_bubbles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            spawn_offset: SPAWN_OFFSET,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_min_spacing: PLATFORM_MIN_SPACING,
            platform_max_spacing: PLATFORM_MAX_SPACING,
            initial_platforms: INITIAL_PLATFORM_COUNT,
            prune_margin: PRUNE_MARGIN,

            landing_tolerance: LANDING_TOLERANCE,
            jump_tolerance: JUMP_TOLERANCE,

            lava_height: LAVA_HEIGHT,
            lava_speed: LAVA_SPEED,
            bubble_spawn_chance: BUBBLE_SPAWN_CHANCE,
            bubble_life: BUBBLE_LIFE,
            bubble_rise: BUBBLE_RISE,
            bubble_min_radius: BUBBLE_MIN_RADIUS,
            bubble_max_radius: BUBBLE_MAX_RADIUS,
            max_bubbles: MAX_BUBBLES,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Repair values that would break generation or collision
    ///
    /// Each correction is logged; the result is always usable by the
    /// simulation.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        // Every length and rate must be finite and small enough that sums of
        // them (viewport floors, lava start) stay finite too
        for (name, value, fallback) in [
            ("player_width", &mut self.player_width, defaults.player_width),
            ("player_height", &mut self.player_height, defaults.player_height),
            ("player_speed", &mut self.player_speed, defaults.player_speed),
            ("jump_impulse", &mut self.jump_impulse, defaults.jump_impulse),
            ("gravity", &mut self.gravity, defaults.gravity),
            ("spawn_offset", &mut self.spawn_offset, defaults.spawn_offset),
            ("platform_width", &mut self.platform_width, defaults.platform_width),
            ("platform_height", &mut self.platform_height, defaults.platform_height),
            ("platform_min_spacing", &mut self.platform_min_spacing, defaults.platform_min_spacing),
            ("platform_max_spacing", &mut self.platform_max_spacing, defaults.platform_max_spacing),
            ("prune_margin", &mut self.prune_margin, defaults.prune_margin),
            ("landing_tolerance", &mut self.landing_tolerance, defaults.landing_tolerance),
            ("jump_tolerance", &mut self.jump_tolerance, defaults.jump_tolerance),
            ("lava_height", &mut self.lava_height, defaults.lava_height),
            ("lava_speed", &mut self.lava_speed, defaults.lava_speed),
            ("bubble_rise", &mut self.bubble_rise, defaults.bubble_rise),
            ("bubble_min_radius", &mut self.bubble_min_radius, defaults.bubble_min_radius),
            ("bubble_max_radius", &mut self.bubble_max_radius, defaults.bubble_max_radius),
        ] {
            if !(value.is_finite() && value.abs() <= MAX_MAGNITUDE) {
                log::warn!("tuning.{name} = {value} is out of range, using {fallback}");
                *value = fallback;
            }
        }

        for (name, value, fallback) in [
            ("player_width", &mut self.player_width, defaults.player_width),
            ("player_height", &mut self.player_height, defaults.player_height),
            ("platform_width", &mut self.platform_width, defaults.platform_width),
            ("platform_height", &mut self.platform_height, defaults.platform_height),
            ("platform_min_spacing", &mut self.platform_min_spacing, defaults.platform_min_spacing),
            ("bubble_min_radius", &mut self.bubble_min_radius, defaults.bubble_min_radius),
        ] {
            if *value <= 0.0 {
                log::warn!("tuning.{name} = {value} is not positive, using {fallback}");
                *value = fallback;
            }
        }

        for (name, value) in [
            ("spawn_offset", &mut self.spawn_offset),
            ("gravity", &mut self.gravity),
            ("landing_tolerance", &mut self.landing_tolerance),
            ("jump_tolerance", &mut self.jump_tolerance),
            ("lava_height", &mut self.lava_height),
            ("lava_speed", &mut self.lava_speed),
            ("bubble_rise", &mut self.bubble_rise),
        ] {
            if *value < 0.0 {
                log::warn!("tuning.{name} = {value} is negative, using 0");
                *value = 0.0;
            }
        }

        if self.platform_max_spacing <= self.platform_min_spacing {
            log::warn!(
                "tuning.platform_max_spacing ({}) must exceed platform_min_spacing ({})",
                self.platform_max_spacing,
                self.platform_min_spacing
            );
            self.platform_max_spacing = self.platform_min_spacing + 1.0;
        }
        if self.bubble_max_radius <= self.bubble_min_radius {
            log::warn!("tuning.bubble_max_radius must exceed bubble_min_radius");
            self.bubble_max_radius = self.bubble_min_radius + 1.0;
        }
        if self.jump_impulse >= 0.0 {
            log::warn!("tuning.jump_impulse ({}) must point upward", self.jump_impulse);
            self.jump_impulse = defaults.jump_impulse;
        }
        if self.initial_platforms == 0 {
            log::warn!("tuning.initial_platforms must be at least 1");
            self.initial_platforms = 1;
        }
        // Pruning inside the collision bands would drop platforms mid-landing
        let min_margin = self.platform_height + self.landing_tolerance.max(self.jump_tolerance);
        if self.prune_margin <= min_margin {
            let margin = defaults.prune_margin.max(min_margin + 1.0);
            log::warn!(
                "tuning.prune_margin ({}) must exceed collision tolerance, using {}",
                self.prune_margin,
                margin
            );
            self.prune_margin = margin;
        }
        if !(0.0..=1.0).contains(&self.bubble_spawn_chance) {
            log::warn!(
                "tuning.bubble_spawn_chance ({}) is not a probability",
                self.bubble_spawn_chance
            );
            self.bubble_spawn_chance = if self.bubble_spawn_chance.is_nan() {
                defaults.bubble_spawn_chance
            } else {
                self.bubble_spawn_chance.clamp(0.0, 1.0)
            };
        }

        self
    }

    /// Smallest viewport that keeps every random range non-empty
    pub fn min_viewport(&self) -> (f32, f32) {
        let width = MIN_VIEWPORT_WIDTH.max(self.platform_width + self.player_width);
        let height = MIN_VIEWPORT_HEIGHT.max(self.spawn_offset + self.player_height * 2.0);
        (width, height)
    }
}
