//! Turns a frame snapshot into triangles
//!
//! Everything is emitted in screen pixels: world y plus the camera offset.

use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Facing, FrameSnapshot, MotionState, Player};

/// Stick figure proportions
const HEAD_RADIUS: f32 = 7.0;
const BODY_HEIGHT: f32 = 18.0;
const LEG_LENGTH: f32 = 14.0;
const ARM_LENGTH: f32 = 12.0;
const STROKE: f32 = 2.0;
/// Limb swing speed (radians per frame)
const SWING_RATE: f32 = 0.3;

const GRASS_HEIGHT: f32 = 8.0;
/// Depth of the lava color gradient
const LAVA_GRADIENT_DEPTH: f32 = 200.0;
const BUBBLE_SEGMENTS: u32 = 12;
const HEAD_SEGMENTS: u32 = 16;

/// Build the full frame
pub fn build(snapshot: &FrameSnapshot<'_>, settings: &Settings) -> Vec<Vertex> {
    let offset = Vec2::new(0.0, snapshot.camera_offset);
    let mut vertices = Vec::with_capacity(512);

    let swing = if settings.effective_limb_animation() {
        (snapshot.frame as f32 * SWING_RATE).sin()
    } else {
        0.0
    };
    vertices.extend(stick_figure(snapshot.player, offset, swing));

    for platform in snapshot.platforms {
        let min = platform.pos + offset;
        let grass = Vec2::new(platform.size.x, GRASS_HEIGHT.min(platform.size.y));
        let dirt = Vec2::new(platform.size.x, platform.size.y - grass.y);
        vertices.extend(shapes::rect(min + Vec2::new(0.0, grass.y), dirt, colors::DIRT));
        vertices.extend(shapes::rect(min, grass, colors::GRASS));
    }

    let width = snapshot.viewport.width;
    let lava_top = Vec2::new(0.0, snapshot.lava_y) + offset;
    vertices.extend(shapes::vertical_gradient(
        lava_top,
        Vec2::new(width, LAVA_GRADIENT_DEPTH),
        colors::LAVA_TOP,
        colors::LAVA_DEEP,
    ));
    vertices.extend(shapes::rect(
        lava_top + Vec2::new(0.0, LAVA_GRADIENT_DEPTH),
        Vec2::new(width, snapshot.viewport.height),
        colors::LAVA_DEEP,
    ));

    if settings.lava_bubbles {
        for bubble in snapshot.bubbles {
            vertices.extend(shapes::circle(
                bubble.pos + offset,
                bubble.radius,
                colors::BUBBLE,
                BUBBLE_SEGMENTS,
            ));
        }
    }

    vertices
}

/// Player as a stick figure; `swing` in [-1, 1] drives running limbs
fn stick_figure(player: &Player, offset: Vec2, swing: f32) -> Vec<Vertex> {
    let mut v = Vec::with_capacity(128);
    let stroke = colors::PLAYER_STROKE;

    let figure_height = HEAD_RADIUS * 2.0 + BODY_HEIGHT + LEG_LENGTH;
    let buffer_y = (player.size.y - figure_height) / 2.0;
    let center_x = player.pos.x + player.size.x / 2.0 + offset.x;
    let top_y = player.pos.y + buffer_y + offset.y;

    // Head
    let head = Vec2::new(center_x, top_y + HEAD_RADIUS);
    v.extend(shapes::circle(head, HEAD_RADIUS, colors::PLAYER_FILL, HEAD_SEGMENTS));
    v.extend(shapes::ring(
        head,
        HEAD_RADIUS - STROKE / 2.0,
        HEAD_RADIUS + STROKE / 2.0,
        stroke,
        HEAD_SEGMENTS,
    ));

    // Body
    let body_start = Vec2::new(center_x, top_y + HEAD_RADIUS * 2.0);
    let body_end = body_start + Vec2::new(0.0, BODY_HEIGHT);
    v.extend(shapes::line(body_start, body_end, STROKE, stroke));

    // Arms
    let running = player.motion == MotionState::Running;
    let facing = match player.facing {
        Facing::Left => -1.0,
        Facing::Right => 1.0,
    };
    let arm_offset = if running { facing * swing * 5.0 } else { 0.0 };
    let shoulder = body_start + Vec2::new(0.0, 4.0);
    let hand_y = shoulder.y + ARM_LENGTH - 4.0;
    v.extend(shapes::line(
        shoulder,
        Vec2::new(center_x - ARM_LENGTH + arm_offset, hand_y),
        STROKE,
        stroke,
    ));
    v.extend(shapes::line(
        shoulder,
        Vec2::new(center_x + ARM_LENGTH - arm_offset, hand_y),
        STROKE,
        stroke,
    ));

    // Legs
    let hip = body_end;
    let (left_foot, right_foot) = match player.motion {
        MotionState::Jumping => (
            hip + Vec2::new(-LEG_LENGTH / 2.0, LEG_LENGTH),
            hip + Vec2::new(LEG_LENGTH / 2.0, LEG_LENGTH),
        ),
        MotionState::Running => {
            let (sin, cos) = (swing * FRAC_PI_4).sin_cos();
            (
                hip + Vec2::new(-cos, sin) * LEG_LENGTH,
                hip + Vec2::new(cos, -sin) * LEG_LENGTH,
            )
        }
        MotionState::Idle => (
            hip + Vec2::new(-5.0, LEG_LENGTH),
            hip + Vec2::new(5.0, LEG_LENGTH),
        ),
    };
    v.extend(shapes::line(hip, left_foot, STROKE, stroke));
    v.extend(shapes::line(hip, right_foot, STROKE, stroke));

    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, IntentSink, Session, Viewport};
    use crate::tuning::Tuning;

    fn session() -> Session {
        let tuning = Tuning {
            bubble_spawn_chance: 1.0,
            ..Tuning::default()
        };
        let mut session = Session::new(31, Viewport::new(800.0, 600.0), tuning);
        for _ in 0..5 {
            session.advance();
        }
        session
    }

    #[test]
    fn test_bubbles_toggle() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.bubbles.len(), 5);

        let with = build(&snapshot, &Settings::default());
        let without = build(
            &snapshot,
            &Settings {
                lava_bubbles: false,
                ..Settings::default()
            },
        );
        assert_eq!(with.len() - without.len(), 5 * BUBBLE_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_platforms_follow_camera() {
        let session = session();
        let settings = Settings {
            lava_bubbles: false,
            ..Settings::default()
        };
        let before = build(&session.snapshot(), &settings);

        // Same layout, scrolled view
        let mut scrolled = session.state().clone();
        scrolled.camera.offset += 50.0;
        let snapshot = FrameSnapshot::from(&scrolled);
        let after = build(&snapshot, &settings);

        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(&after) {
            assert!((b.position[1] - a.position[1] - 50.0).abs() < 1e-3);
            assert_eq!(a.position[0], b.position[0]);
        }
    }

    #[test]
    fn test_figure_fits_player_box() {
        let session = session();
        let player = session.state().player.clone();
        let figure = stick_figure(&player, Vec2::ZERO, 0.0);
        for v in figure {
            assert!(v.position[0] >= player.pos.x - STROKE);
            assert!(v.position[0] <= player.pos.x + player.size.x + STROKE);
            assert!(v.position[1] >= player.pos.y - 4.0 - STROKE);
            assert!(v.position[1] <= player.pos.y + player.size.y + 4.0 + STROKE);
        }
    }

    #[test]
    fn test_reduced_motion_freezes_limbs() {
        let mut session = session();
        let settings = Settings {
            reduced_motion: true,
            lava_bubbles: false,
            ..Settings::default()
        };
        session.set_intent(Direction::Right, true);
        session.advance();
        let a = build(&session.snapshot(), &settings);
        let mut frozen = session.state().clone();
        frozen.frame += 3;
        let b = build(&FrameSnapshot::from(&frozen), &settings);
        assert_eq!(a, b);
    }
}
