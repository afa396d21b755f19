//! Scroll-up-only camera

use serde::{Deserialize, Serialize};

/// Vertical scroll offset; screen y = world y + offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Pull the view up so the player never sits above mid-screen
    ///
    /// The offset only grows: falling never scrolls the view back down.
    pub fn follow(&mut self, player_y: f32, viewport_height: f32) {
        let middle = viewport_height / 2.0;
        if player_y < middle - self.offset {
            self.offset = middle - player_y;
        }
    }

    /// World y of the bottom edge of the screen
    #[inline]
    pub fn bottom_edge(&self, viewport_height: f32) -> f32 {
        viewport_height - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_only_scrolls_up() {
        let mut camera = Camera::default();

        // Player below mid-screen: no movement
        camera.follow(400.0, 600.0);
        assert_eq!(camera.offset, 0.0);

        // Player above mid-screen: pulled back to exactly the middle
        camera.follow(250.0, 600.0);
        assert_eq!(camera.offset, 50.0);
        assert_eq!(250.0 + camera.offset, 300.0);

        // Falling back down leaves the offset alone
        camera.follow(500.0, 600.0);
        assert_eq!(camera.offset, 50.0);
    }

    #[test]
    fn test_bottom_edge() {
        let camera = Camera { offset: 120.0 };
        assert_eq!(camera.bottom_edge(600.0), 480.0);
    }
}
