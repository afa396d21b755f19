//! Landing and support tests between the player and platforms
//!
//! Both tests work on the player's feet (bottom edge) against a platform's
//! top surface. Landing uses a narrow band and requires the player to be
//! falling or resting; the support test used by jumps is a little wider and
//! ignores velocity.

use super::state::{Platform, Player};
use crate::spans_overlap;

/// Result of resolving the player against the platform set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingResult {
    /// At least one platform caught the player this tick
    pub landed: bool,
    /// Platforms visited for the first time this tick
    pub scored: u32,
}

/// Horizontal extents overlap (touching edges excluded)
#[inline]
fn overlaps_horizontally(player: &Player, platform: &Platform) -> bool {
    spans_overlap(player.pos.x, player.right(), platform.pos.x, platform.right())
}

/// Is the player falling onto `platform` this tick?
pub fn is_landing(player: &Player, platform: &Platform, tolerance: f32) -> bool {
    let bottom = player.bottom();
    bottom > platform.top()
        && bottom < platform.top() + platform.size.y + tolerance
        && overlaps_horizontally(player, platform)
        && player.vel.y >= 0.0
}

/// Is the player standing on `platform` closely enough to jump from it?
pub fn is_supported_by(player: &Player, platform: &Platform, tolerance: f32) -> bool {
    let bottom = player.bottom();
    bottom >= platform.top()
        && bottom <= platform.top() + platform.size.y + tolerance
        && overlaps_horizontally(player, platform)
}

/// Snap the player onto every platform it is landing on
///
/// Platforms are checked in slice order and each match sees the player as
/// left by the previous one, so with overlapping platforms the last match
/// decides the final position.
pub fn resolve_landings(
    player: &mut Player,
    platforms: &mut [Platform],
    tolerance: f32,
) -> LandingResult {
    let mut result = LandingResult::default();

    for platform in platforms.iter_mut() {
        if is_landing(player, platform, tolerance) {
            player.vel.y = 0.0;
            player.pos.y = platform.top() - player.size.y;
            result.landed = true;

            if platform.visit() {
                result.scored += 1;
            }
        }
    }

    result
}

/// Is any platform supporting the player?
pub fn has_support(player: &Player, platforms: &[Platform], tolerance: f32) -> bool {
    platforms
        .iter()
        .any(|platform| is_supported_by(player, platform, tolerance))
}
