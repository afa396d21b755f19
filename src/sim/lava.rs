//! Rising lava and its cosmetic bubbles

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::state::Viewport;
use crate::tuning::Tuning;

/// A short-lived bubble drawn inside the lava
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks remaining
    pub life: u32,
}

/// Lava surface plus bubbles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lava {
    /// World y of the surface; only ever decreases (rises)
    pub surface_y: f32,
    pub bubbles: Vec<Bubble>,
}

impl Lava {
    /// Lava starts just below the viewport
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            surface_y: viewport.height + tuning.lava_height,
            bubbles: Vec::new(),
        }
    }

    /// Advance the surface one tick
    ///
    /// The surface is pinned to the bottom of the screen so it is always
    /// visible and closes in on a player who climbs faster than it rises.
    pub fn rise(&mut self, speed: f32, camera: &Camera, viewport_height: f32) {
        self.surface_y -= speed;
        self.surface_y = self.surface_y.min(camera.bottom_edge(viewport_height));
    }

    /// Spawn (maybe), drift and expire bubbles
    pub fn update_bubbles<R: Rng>(&mut self, rng: &mut R, viewport: Viewport, tuning: &Tuning) {
        if rng.random_bool(tuning.bubble_spawn_chance) && self.bubbles.len() < tuning.max_bubbles {
            self.bubbles.push(Bubble {
                pos: Vec2::new(
                    rng.random_range(0.0..viewport.width),
                    self.surface_y + rng.random_range(0.0..viewport.height),
                ),
                radius: rng.random_range(tuning.bubble_min_radius..tuning.bubble_max_radius),
                life: tuning.bubble_life,
            });
        }

        for bubble in &mut self.bubbles {
            bubble.pos.y -= tuning.bubble_rise;
            bubble.life = bubble.life.saturating_sub(1);
        }
        self.bubbles.retain(|b| b.life > 0);
    }
}
