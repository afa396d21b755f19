//! Session state machine
//!
//! A [`Session`] owns the current [`GameState`] plus everything that outlives
//! a single play-through: the held intents, the viewport, the tuning and the
//! seed used for restarts.

use super::input::{Direction, IntentSink, TickInput};
use super::snapshot::FrameSnapshot;
use super::state::{GamePhase, GameState, Viewport};
use super::tick::{TickReport, jump, tick};
use crate::tuning::Tuning;

pub struct Session {
    state: GameState,
    input: TickInput,
    tuning: Tuning,
    viewport: Viewport,
    seed: u64,
}

impl Session {
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let viewport = viewport.floored(&tuning);
        log::info!(
            "Session started: {}x{} seed {}",
            viewport.width,
            viewport.height,
            seed
        );
        Self {
            state: GameState::new(seed, viewport, tuning),
            input: TickInput::default(),
            tuning,
            viewport,
            seed,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Run one frame of simulation with the currently held intents
    pub fn advance(&mut self) -> TickReport {
        tick(&mut self.state, &self.input)
    }

    /// Start over with the original seed (identical layout)
    pub fn restart(&mut self) {
        self.restart_with_seed(self.seed);
    }

    /// Start over with a new seed
    pub fn restart_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.state = GameState::new(seed, self.viewport, self.tuning);
        log::info!("Session restarted with seed {}", seed);
    }

    /// Adopt a new drawable size
    ///
    /// While playing this rebuilds the whole session for the new size; after a
    /// game over the size is only remembered for the next restart.
    pub fn resize(&mut self, viewport: Viewport) {
        let viewport = viewport.floored(&self.tuning);
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        log::info!("Viewport resized to {}x{}", viewport.width, viewport.height);

        if self.state.phase == GamePhase::Playing {
            self.state = GameState::new(self.seed, viewport, self.tuning);
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot::from(&self.state)
    }
}

impl IntentSink for Session {
    /// Held flags are always recorded; ticks ignore them after a game over
    fn set_intent(&mut self, direction: Direction, active: bool) {
        self.input.set(direction, active);
    }

    /// Jumps are resolved immediately against the current state
    fn request_jump(&mut self) {
        if jump(&mut self.state) {
            log::trace!("Jump at frame {}", self.state.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(4242, Viewport::new(800.0, 600.0), Tuning::default())
    }

    fn run_until_game_over(session: &mut Session) {
        for _ in 0..2000 {
            if session.advance().game_over {
                return;
            }
        }
        panic!("session never ended");
    }

    #[test]
    fn test_restart_restores_initial_layout() {
        let mut session = session();
        let initial = session.state().platforms.clone();

        session.set_intent(Direction::Right, true);
        run_until_game_over(&mut session);
        assert_eq!(session.phase(), GamePhase::GameOver);

        session.restart();
        let state = session.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.camera.offset, 0.0);
        assert_eq!(state.platforms, initial);
    }

    #[test]
    fn test_restart_with_new_seed_changes_layout() {
        let mut session = session();
        let initial = session.state().platforms.clone();
        session.restart_with_seed(1);
        assert_ne!(session.state().platforms, initial);
        assert_eq!(session.state().seed, 1);
    }

    #[test]
    fn test_resize_while_playing_reinitializes() {
        let mut session = session();
        for _ in 0..5 {
            session.advance();
        }
        assert_eq!(session.state().score, 1);

        session.resize(Viewport::new(1024.0, 768.0));
        let state = session.state();
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.viewport, Viewport::new(1024.0, 768.0));
        assert_eq!(state.player.pos.y, 768.0 - 140.0);
    }

    #[test]
    fn test_resize_same_size_is_noop() {
        let mut session = session();
        for _ in 0..5 {
            session.advance();
        }
        session.resize(Viewport::new(800.0, 600.0));
        assert_eq!(session.state().frame, 5);
    }

    #[test]
    fn test_resize_after_game_over_stays_over() {
        let mut session = session();
        run_until_game_over(&mut session);

        session.resize(Viewport::new(640.0, 480.0));
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.state().viewport, Viewport::new(800.0, 600.0));

        session.restart();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.state().viewport, Viewport::new(640.0, 480.0));
    }

    #[test]
    fn test_tiny_viewport_is_floored() {
        let session = Session::new(1, Viewport::new(10.0, 10.0), Tuning::default());
        let (w, h) = Tuning::default().min_viewport();
        assert_eq!(session.viewport(), Viewport::new(w, h));
        assert!(session.state().platforms.iter().all(|p| p.pos.x >= 0.0));
    }

    #[test]
    fn test_intents_ignored_after_game_over() {
        let mut session = session();
        run_until_game_over(&mut session);
        let x = session.state().player.pos.x;

        session.set_intent(Direction::Left, true);
        session.request_jump();
        session.advance();
        assert_eq!(session.state().player.pos.x, x);
        assert!(session.input().left);
    }

    #[test]
    fn test_jump_through_sink() {
        let mut session = session();
        session.advance();
        session.request_jump();
        assert_eq!(session.state().player.vel.y, -12.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = session();
        session.advance();
        let snap = session.snapshot();
        assert_eq!(snap.score, 1);
        assert!(!snap.game_over);
        assert_eq!(snap.platforms.len(), session.state().platforms.len());
        assert_eq!(snap.lava_y, 600.0);
        assert_eq!(snap.camera_offset, 0.0);

        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(json["score"], 1);
    }
}
