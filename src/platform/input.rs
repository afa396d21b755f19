//! Keyboard and touch adapters
//!
//! Both adapters write through the same [`IntentSink`] calls, so the
//! simulation never knows which device produced an intent.

use crate::sim::{Direction, IntentSink};

/// Maps `KeyboardEvent.key` values to intents
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAdapter;

impl KeyboardAdapter {
    fn direction(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    fn is_jump(key: &str) -> bool {
        matches!(key, " " | "ArrowUp" | "w" | "W")
    }

    /// Handle a keydown; returns true if the key was consumed
    pub fn key_down(&self, sink: &mut impl IntentSink, key: &str) -> bool {
        if let Some(direction) = Self::direction(key) {
            sink.set_intent(direction, true);
            true
        } else if Self::is_jump(key) {
            sink.request_jump();
            true
        } else {
            false
        }
    }

    /// Handle a keyup; returns true if the key was consumed
    pub fn key_up(&self, sink: &mut impl IntentSink, key: &str) -> bool {
        match Self::direction(key) {
            Some(direction) => {
                sink.set_intent(direction, false);
                true
            }
            None => false,
        }
    }
}

/// On-screen control buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

impl TouchButton {
    /// DOM element id of the button
    pub fn element_id(&self) -> &'static str {
        match self {
            TouchButton::Left => "left-button",
            TouchButton::Right => "right-button",
            TouchButton::Jump => "jump-button",
        }
    }

    pub const ALL: [TouchButton; 3] = [TouchButton::Left, TouchButton::Right, TouchButton::Jump];
}

/// Maps touch start/end on the control buttons to intents
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchAdapter;

impl TouchAdapter {
    pub fn touch_start(&self, sink: &mut impl IntentSink, button: TouchButton) {
        match button {
            TouchButton::Left => sink.set_intent(Direction::Left, true),
            TouchButton::Right => sink.set_intent(Direction::Right, true),
            TouchButton::Jump => sink.request_jump(),
        }
    }

    /// Releasing the jump button does nothing: jumps are not variable height
    pub fn touch_end(&self, sink: &mut impl IntentSink, button: TouchButton) {
        match button {
            TouchButton::Left => sink.set_intent(Direction::Left, false),
            TouchButton::Right => sink.set_intent(Direction::Right, false),
            TouchButton::Jump => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls for inspection
    #[derive(Default)]
    struct Recorder {
        intents: Vec<(Direction, bool)>,
        jumps: u32,
    }

    impl IntentSink for Recorder {
        fn set_intent(&mut self, direction: Direction, active: bool) {
            self.intents.push((direction, active));
        }

        fn request_jump(&mut self) {
            self.jumps += 1;
        }
    }

    #[test]
    fn test_keyboard_mapping() {
        let keyboard = KeyboardAdapter;
        let mut rec = Recorder::default();

        assert!(keyboard.key_down(&mut rec, "ArrowLeft"));
        assert!(keyboard.key_down(&mut rec, "d"));
        assert!(keyboard.key_up(&mut rec, "a"));
        assert!(keyboard.key_down(&mut rec, " "));
        assert!(keyboard.key_down(&mut rec, "w"));
        assert!(!keyboard.key_down(&mut rec, "Escape"));
        // Releasing a jump key is not consumed
        assert!(!keyboard.key_up(&mut rec, "ArrowUp"));

        assert_eq!(
            rec.intents,
            vec![
                (Direction::Left, true),
                (Direction::Right, true),
                (Direction::Left, false),
            ]
        );
        assert_eq!(rec.jumps, 2);
    }

    #[test]
    fn test_touch_mapping() {
        let touch = TouchAdapter;
        let mut rec = Recorder::default();

        touch.touch_start(&mut rec, TouchButton::Right);
        touch.touch_end(&mut rec, TouchButton::Right);
        touch.touch_start(&mut rec, TouchButton::Jump);
        touch.touch_end(&mut rec, TouchButton::Jump);

        assert_eq!(
            rec.intents,
            vec![(Direction::Right, true), (Direction::Right, false)]
        );
        assert_eq!(rec.jumps, 1);
    }

    #[test]
    fn test_adapters_drive_session() {
        use crate::sim::{Session, Viewport};
        use crate::tuning::Tuning;

        let mut session = Session::new(9, Viewport::new(800.0, 600.0), Tuning::default());
        KeyboardAdapter.key_down(&mut session, "ArrowRight");
        assert!(session.input().right);
        TouchAdapter.touch_start(&mut session, TouchButton::Left);
        assert!(session.input().left);
        TouchAdapter.touch_end(&mut session, TouchButton::Left);
        KeyboardAdapter.key_up(&mut session, "ArrowRight");
        assert_eq!(session.input(), Default::default());
    }
}
