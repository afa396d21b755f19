//! Game state and core simulation types
//!
//! A [`GameState`] is one complete generation of play: player, platforms,
//! lava and camera all live here and are replaced wholesale on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::lava::Lava;
use super::world;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player touched the lava; only a restart leaves this phase
    GameOver,
}

/// Movement state, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Idle,
    Running,
    Jumping,
}

/// Direction the player last moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Drawable area, floored so random ranges stay valid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Raise the viewport to the smallest size `tuning` can generate into
    pub fn floored(self, tuning: &Tuning) -> Self {
        let (min_w, min_h) = tuning.min_viewport();
        let width = if self.width.is_finite() { self.width.max(min_w) } else { min_w };
        let height = if self.height.is_finite() { self.height.max(min_h) } else { min_h };
        if width != self.width || height != self.height {
            log::warn!(
                "Viewport {}x{} below minimum, using {}x{}",
                self.width,
                self.height,
                width,
                height
            );
        }
        Self { width, height }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub motion: MotionState,
    pub facing: Facing,
}

impl Player {
    /// Spawn centred horizontally, standing on the spawn platform
    pub fn spawn(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width / 2.0 - tuning.player_width / 2.0,
                viewport.height - tuning.player_height - tuning.spawn_offset,
            ),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            motion: MotionState::Idle,
            facing: Facing::Right,
        }
    }

    /// y of the feet
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A platform the player can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Set on first landing; each platform scores once
    pub visited: bool,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.platform_width, tuning.platform_height),
            visited: false,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Mark as visited, returning true only on the first call
    pub fn visit(&mut self) -> bool {
        !std::mem::replace(&mut self.visited, true)
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generation RNG
    #[serde(skip)]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Platforms landed on for the first time
    pub score: u32,
    /// Playing ticks since spawn (drives limb animation)
    pub frame: u64,
    pub player: Player,
    /// Active platforms in generation order
    pub platforms: Vec<Platform>,
    pub lava: Lava,
    pub camera: Camera,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let viewport = viewport.floored(&tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            phase: GamePhase::Playing,
            score: 0,
            frame: 0,
            player: Player::spawn(viewport, &tuning),
            platforms: Vec::new(),
            lava: Lava::new(viewport, &tuning),
            camera: Camera::default(),
            next_id: 1,
        };

        world::seed_platforms(&mut state);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
