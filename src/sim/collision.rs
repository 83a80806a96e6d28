//! Collision resolution against walls, paddle, and bricks
//!
//! Everything here is discrete: overlaps are checked once per tick with
//! closed rectangle intersection. Responses are pure sign flips, except
//! paddle hits, which re-derive the full velocity from the contact offset.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, Paddle};
use crate::consts::*;

/// Outcome of the wall check. The two axes resolve independently, so a
/// corner can flip both in the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right bound crossed; horizontal velocity flipped
    pub side: bool,
    /// Top bound crossed; vertical velocity flipped
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Reflect the ball off the side and top bounds, clamping it back inside
/// so no overshoot persists into the next tick. The bottom bound is not a
/// wall; misses are the tick's concern.
pub fn resolve_walls(ball: &mut Ball) -> WallContact {
    let half = BALL_SIZE / 2.0;
    let mut contact = WallContact::default();

    if ball.pos.x <= half {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = half;
        contact.side = true;
    } else if ball.pos.x >= SCREEN_W - half {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = SCREEN_W - half;
        contact.side = true;
    }

    if ball.pos.y <= half {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = half;
        contact.top = true;
    }

    contact
}

/// Deflect the ball off the paddle when it overlaps while moving downward.
///
/// The rebound angle comes from the contact offset across the paddle face,
/// capped at `PADDLE_MAX_ANGLE`; the outgoing speed is always
/// `PADDLE_REBOUND_SPEED` regardless of incoming speed.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 || !ball.rect().intersects(&paddle.rect()) {
        return false;
    }

    let relative = (ball.pos.x - paddle.center_x()) / (PADDLE_W / 2.0);
    let angle = relative * PADDLE_MAX_ANGLE;
    ball.vel = Vec2::new(
        PADDLE_REBOUND_SPEED * angle.sin(),
        -PADDLE_REBOUND_SPEED * angle.cos(),
    );
    true
}

/// Deflect the ball off a brick it overlaps.
///
/// Side of impact is inferred by edge proximity within `SIDE_TOLERANCE`
/// combined with the velocity sign; the checks run in a fixed order
/// (bottom-vs-top, top-vs-bottom, right-vs-left, left-vs-right) and stop
/// at the first match. A corner hit matching none of them leaves the
/// velocity unchanged; the caller still destroys the brick.
pub fn deflect_off_brick(ball: &mut Ball, brick: &Rect) {
    let rect = ball.rect();

    if (rect.bottom() - brick.top()).abs() < SIDE_TOLERANCE && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
    } else if (rect.top() - brick.bottom()).abs() < SIDE_TOLERANCE && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
    } else if (rect.right() - brick.left()).abs() < SIDE_TOLERANCE && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
    } else if (rect.left() - brick.right()).abs() < SIDE_TOLERANCE && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
        }
    }

    #[test]
    fn test_left_wall_flips_and_clamps() {
        // One tick past the bound after integration
        let mut ball = ball_at(-1.0, 300.0, -4.0, 2.0);
        let contact = resolve_walls(&mut ball);
        assert!(contact.side && !contact.top);
        assert_eq!(ball.vel, Vec2::new(4.0, 2.0));
        assert_eq!(ball.pos.x, BALL_SIZE / 2.0);
    }

    #[test]
    fn test_right_wall_flips_and_clamps() {
        let mut ball = ball_at(799.0, 300.0, 4.0, 2.0);
        let contact = resolve_walls(&mut ball);
        assert!(contact.side);
        assert_eq!(ball.vel.x, -4.0);
        assert_eq!(ball.pos.x, SCREEN_W - BALL_SIZE / 2.0);
    }

    #[test]
    fn test_top_wall_flips_and_clamps() {
        let mut ball = ball_at(400.0, 1.0, 3.0, -4.0);
        let contact = resolve_walls(&mut ball);
        assert!(contact.top && !contact.side);
        assert_eq!(ball.vel.y, 4.0);
        assert_eq!(ball.pos.y, BALL_SIZE / 2.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut ball = ball_at(2.0, 2.0, -3.0, -3.0);
        let contact = resolve_walls(&mut ball);
        assert!(contact.side && contact.top);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_bottom_is_not_a_wall() {
        let mut ball = ball_at(400.0, 650.0, 3.0, 4.0);
        let contact = resolve_walls(&mut ball);
        assert!(!contact.any());
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_paddle_requires_downward_motion() {
        let paddle = Paddle { x: 360.0 };
        // Overlapping but moving upward: no deflection
        let mut ball = ball_at(400.0, PADDLE_Y, 2.0, -3.0);
        assert!(!resolve_paddle(&mut ball, &paddle));
        assert_eq!(ball.vel, Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let paddle = Paddle { x: 360.0 };
        let mut ball = ball_at(400.0, PADDLE_Y, 3.0, 4.0);
        assert!(resolve_paddle(&mut ball, &paddle));
        assert!(ball.vel.x.abs() < 1e-6);
        assert!((ball.vel.y + PADDLE_REBOUND_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_edge_hit_deflects_sideways() {
        let paddle = Paddle { x: 360.0 };
        // Contact near the right edge of the face
        let mut ball = ball_at(436.0, PADDLE_Y, 0.0, 4.0);
        assert!(resolve_paddle(&mut ball, &paddle));
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_brick_hit_from_above_flips_vertical() {
        let brick = Rect::new(0.0, 50.0, BRICK_W, BRICK_H);
        let mut ball = ball_at(40.0, 48.0, 3.0, 4.0);
        deflect_off_brick(&mut ball, &brick);
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_brick_hit_from_below_flips_vertical() {
        let brick = Rect::new(0.0, 50.0, BRICK_W, BRICK_H);
        let mut ball = ball_at(40.0, 73.0, 3.0, -4.0);
        deflect_off_brick(&mut ball, &brick);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_brick_hit_from_left_flips_horizontal() {
        let brick = Rect::new(80.0, 50.0, BRICK_W, BRICK_H);
        let mut ball = ball_at(78.0, 60.0, 4.0, 0.5);
        deflect_off_brick(&mut ball, &brick);
        assert_eq!(ball.vel, Vec2::new(-4.0, 0.5));
    }

    #[test]
    fn test_brick_hit_from_right_flips_horizontal() {
        let brick = Rect::new(80.0, 50.0, BRICK_W, BRICK_H);
        let mut ball = ball_at(162.0, 60.0, -4.0, 0.5);
        deflect_off_brick(&mut ball, &brick);
        assert_eq!(ball.vel, Vec2::new(4.0, 0.5));
    }

    #[test]
    fn test_deep_overlap_matches_no_side() {
        // Ball dead center inside the brick: every edge delta exceeds the
        // tolerance, so the velocity passes through unchanged
        let brick = Rect::new(0.0, 50.0, BRICK_W, BRICK_H);
        let mut ball = ball_at(40.0, 60.0, 3.0, 4.0);
        deflect_off_brick(&mut ball, &brick);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    proptest! {
        #[test]
        fn paddle_rebound_speed_is_always_five(
            offset in -1.0f32..1.0,
            dx in -12.0f32..12.0,
            dy in 0.1f32..12.0,
        ) {
            let paddle = Paddle { x: 360.0 };
            let mut ball = Ball {
                pos: Vec2::new(paddle.center_x() + offset * (PADDLE_W / 2.0), PADDLE_Y),
                vel: Vec2::new(dx, dy),
            };
            prop_assert!(resolve_paddle(&mut ball, &paddle));
            prop_assert!((ball.vel.length() - PADDLE_REBOUND_SPEED).abs() < 1e-4);
            // Always leaves upward
            prop_assert!(ball.vel.y < 0.0);
        }

        #[test]
        fn walls_always_leave_ball_inside(
            x in -100.0f32..900.0,
            y in -100.0f32..500.0,
            dx in -8.0f32..8.0,
            dy in -8.0f32..8.0,
        ) {
            let mut ball = Ball {
                pos: Vec2::new(x, y),
                vel: Vec2::new(dx, dy),
            };
            resolve_walls(&mut ball);
            let half = BALL_SIZE / 2.0;
            prop_assert!(ball.pos.x >= half);
            prop_assert!(ball.pos.x <= SCREEN_W - half);
            prop_assert!(ball.pos.y >= half);
        }
    }
}
