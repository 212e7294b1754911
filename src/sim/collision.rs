//! Collision detection and response
//!
//! Pure functions over ball position, velocity and the shapes it can hit.
//! Each returns the velocity the ball should carry after the collision, or
//! `None` when nothing was hit; the tick applies them in a fixed order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Block, Paddle};
use crate::consts::PADDLE_MAX_BOUNCE;
use crate::normalize_speed;

/// Which face of a block the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl HitSide {
    /// Top and bottom faces flip vertical velocity; left and right flip horizontal
    #[inline]
    pub fn flips_vertical(self) -> bool {
        matches!(self, HitSide::Top | HitSide::Bottom)
    }
}

/// Reflect off the left, right and top walls.
///
/// The component is pointed back into the playfield rather than blindly
/// negated, so a ball that is still past the wall on the next frame cannot
/// get stuck flipping back and forth. The bottom edge never reflects.
pub fn wall_collision(pos: Vec2, vel: Vec2, radius: f32, width: f32) -> Option<Vec2> {
    let mut out = vel;
    let mut hit = false;

    if pos.x - radius <= 0.0 {
        out.x = vel.x.abs();
        hit = true;
    } else if pos.x + radius >= width {
        out.x = -vel.x.abs();
        hit = true;
    }

    if pos.y - radius <= 0.0 {
        out.y = vel.y.abs();
        hit = true;
    }

    hit.then_some(out)
}

/// Bounding box overlap between the ball and the paddle.
///
/// Vertically the ball's full extent counts; horizontally only its center,
/// which keeps the hit offset inside [-1, 1].
pub fn ball_paddle_overlap(pos: Vec2, radius: f32, paddle: &Paddle) -> bool {
    pos.y + radius >= paddle.top()
        && pos.y - radius <= paddle.bottom()
        && pos.x >= paddle.left()
        && pos.x <= paddle.right()
}

/// Signed offset of the ball from the paddle center: -1 at the left edge,
/// 0 at the center, +1 at the right edge
#[inline]
pub fn paddle_hit_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    ((ball_x - paddle.x) / paddle.half_width()).clamp(-1.0, 1.0)
}

/// Bounce velocity for a paddle hit at `offset`.
///
/// Keeps the incoming speed and sends the ball upward at `offset` x 60
/// degrees from vertical.
pub fn paddle_bounce(vel: Vec2, offset: f32) -> Vec2 {
    let speed = vel.length();
    let angle = offset * PADDLE_MAX_BOUNCE;
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Full paddle check: returns the hit offset and new velocity on overlap
pub fn paddle_collision(pos: Vec2, vel: Vec2, radius: f32, paddle: &Paddle) -> Option<(f32, Vec2)> {
    if !ball_paddle_overlap(pos, radius, paddle) {
        return None;
    }
    let offset = paddle_hit_offset(pos.x, paddle);
    Some((offset, paddle_bounce(vel, offset)))
}

/// Closest point on the block rectangle to `pos`
#[inline]
pub fn closest_point(pos: Vec2, block: &Block) -> Vec2 {
    pos.clamp(block.min(), block.max())
}

/// Circle vs rectangle test for one block.
///
/// The side is read off the closest point: on the left edge, on the right
/// edge, on the top edge, otherwise bottom. Corner contacts therefore lean
/// toward left/right first and bottom last.
pub fn ball_block_collision(pos: Vec2, radius: f32, block: &Block) -> Option<HitSide> {
    let closest = closest_point(pos, block);
    if pos.distance_squared(closest) >= radius * radius {
        return None;
    }

    let min = block.min();
    let max = block.max();
    let side = if closest.x == min.x {
        HitSide::Left
    } else if closest.x == max.x {
        HitSide::Right
    } else if closest.y == min.y {
        HitSide::Top
    } else {
        HitSide::Bottom
    };
    Some(side)
}

/// Bounce off a block face, nudge the other axis by `jitter`, then restore
/// the speed to `BALL_SPEED`
pub fn block_bounce(vel: Vec2, side: HitSide, jitter: f32) -> Vec2 {
    let out = if side.flips_vertical() {
        Vec2::new(vel.x + jitter, -vel.y)
    } else {
        Vec2::new(-vel.x, vel.y + jitter)
    };
    normalize_speed(out)
}

/// The ball's top edge has dropped below the bottom of the playfield
#[inline]
pub fn ball_below_floor(pos: Vec2, radius: f32, height: f32) -> bool {
    pos.y - radius > height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::BlockColor;

    const GREY: BlockColor = BlockColor { r: 0.5, g: 0.5, b: 0.5 };

    fn block_at(x: f32, y: f32) -> Block {
        Block::new(Vec2::new(x, y), GREY)
    }

    #[test]
    fn test_wall_left_right_top() {
        let r = BALL_RADIUS;
        let w = WINDOW_WIDTH;

        let vel = wall_collision(Vec2::new(5.0, 300.0), Vec2::new(-3.0, 2.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(3.0, 2.0));

        let vel = wall_collision(Vec2::new(795.0, 300.0), Vec2::new(3.0, 2.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(-3.0, 2.0));

        let vel = wall_collision(Vec2::new(300.0, 5.0), Vec2::new(3.0, -2.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(3.0, 2.0));

        // Corner: both components flip
        let vel = wall_collision(Vec2::new(5.0, 5.0), Vec2::new(-3.0, -2.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_wall_no_hit_and_no_floor() {
        let r = BALL_RADIUS;
        let w = WINDOW_WIDTH;
        assert!(wall_collision(Vec2::new(400.0, 300.0), Vec2::new(3.0, 2.0), r, w).is_none());
        assert!(wall_collision(Vec2::new(400.0, 599.0), Vec2::new(3.0, 2.0), r, w).is_none());
    }

    /// A paddle hit near a side wall can leave the ball overlapping the wall
    /// while already heading inward. Plain negation would send it back into
    /// the wall and trap it there; the reflection must keep it heading in.
    #[test]
    fn test_wall_already_reflected_stays_inward() {
        let (r, w) = (BALL_RADIUS, WINDOW_WIDTH);

        let vel = wall_collision(Vec2::new(2.0, 560.0), Vec2::new(3.0, -4.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(3.0, -4.0));

        let vel = wall_collision(Vec2::new(w - 2.0, 560.0), Vec2::new(-3.0, -4.0), r, w).unwrap();
        assert_eq!(vel, Vec2::new(-3.0, -4.0));

        // Two frames in a row inside the wall still head inward
        let mut pos = Vec2::new(2.0, 560.0);
        let mut vel = Vec2::new(-1.0, -4.0);
        for _ in 0..2 {
            vel = wall_collision(pos, vel, r, w).unwrap_or(vel);
            assert!(vel.x > 0.0);
            pos += vel;
        }
    }

    #[test]
    fn test_paddle_overlap() {
        let paddle = Paddle::default();
        assert!(ball_paddle_overlap(Vec2::new(400.0, 555.0), BALL_RADIUS, &paddle));
        assert!(ball_paddle_overlap(Vec2::new(350.0, 570.0), BALL_RADIUS, &paddle));
        assert!(!ball_paddle_overlap(Vec2::new(400.0, 545.0), BALL_RADIUS, &paddle));
        assert!(!ball_paddle_overlap(Vec2::new(349.0, 570.0), BALL_RADIUS, &paddle));
        assert!(!ball_paddle_overlap(Vec2::new(400.0, 591.0), BALL_RADIUS, &paddle));
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let paddle = Paddle::default();
        let (offset, vel) =
            paddle_collision(Vec2::new(400.0, 560.0), Vec2::new(3.0, 4.0), BALL_RADIUS, &paddle)
                .unwrap();
        assert_eq!(offset, 0.0);
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_edge_hit_sixty_degrees() {
        let paddle = Paddle::default();
        let (offset, vel) =
            paddle_collision(Vec2::new(450.0, 560.0), Vec2::new(0.0, 5.0), BALL_RADIUS, &paddle)
                .unwrap();
        assert_eq!(offset, 1.0);
        let angle = vel.x.atan2(-vel.y);
        assert!((angle - PADDLE_MAX_BOUNCE).abs() < 1e-5);
        assert!((vel.length() - 5.0).abs() < 1e-5);

        let (offset, vel) =
            paddle_collision(Vec2::new(350.0, 560.0), Vec2::new(0.0, 5.0), BALL_RADIUS, &paddle)
                .unwrap();
        assert_eq!(offset, -1.0);
        assert!(vel.x < 0.0 && vel.y < 0.0);
    }

    #[test]
    fn test_paddle_bounce_keeps_speed() {
        for i in -10..=10 {
            let offset = i as f32 / 10.0;
            let vel = paddle_bounce(Vec2::new(3.5, 3.5), offset);
            assert!((vel.length() - Vec2::new(3.5, 3.5).length()).abs() < 1e-4);
            assert!(vel.y < 0.0);
        }
    }

    #[test]
    fn test_block_hit_sides() {
        let block = block_at(100.0, 100.0); // spans x 100..180, y 100..130

        assert_eq!(ball_block_collision(Vec2::new(140.0, 95.0), 10.0, &block), Some(HitSide::Top));
        assert_eq!(
            ball_block_collision(Vec2::new(140.0, 135.0), 10.0, &block),
            Some(HitSide::Bottom)
        );
        assert_eq!(ball_block_collision(Vec2::new(95.0, 115.0), 10.0, &block), Some(HitSide::Left));
        assert_eq!(
            ball_block_collision(Vec2::new(185.0, 115.0), 10.0, &block),
            Some(HitSide::Right)
        );
        assert_eq!(ball_block_collision(Vec2::new(140.0, 80.0), 10.0, &block), None);
    }

    #[test]
    fn test_block_touching_exactly_is_a_miss() {
        let block = block_at(100.0, 100.0);
        assert_eq!(ball_block_collision(Vec2::new(140.0, 90.0), 10.0, &block), None);
    }

    #[test]
    fn test_block_corner_bias() {
        let block = block_at(100.0, 100.0);
        // Top-left corner: closest point sits on the left edge first
        assert_eq!(ball_block_collision(Vec2::new(95.0, 95.0), 10.0, &block), Some(HitSide::Left));
        // Center inside the block: no edge matches, falls through to bottom
        assert_eq!(
            ball_block_collision(Vec2::new(140.0, 115.0), 10.0, &block),
            Some(HitSide::Bottom)
        );
    }

    #[test]
    fn test_block_bounce_top() {
        let vel = Vec2::new(3.0, 4.0);
        let out = block_bounce(vel, HitSide::Top, 0.0);
        assert!((out.x - 3.0).abs() < 1e-5);
        assert!((out.y + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_block_bounce_side_with_jitter() {
        let vel = Vec2::new(3.0, 4.0);
        let out = block_bounce(vel, HitSide::Left, 0.1);
        assert!(out.x < 0.0);
        assert!(out.y > 0.0);
        assert!((out.length() - BALL_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_block_bounce_zero_velocity_never_nan() {
        let out = block_bounce(Vec2::ZERO, HitSide::Top, 0.0);
        assert!(out.is_finite());
        assert!((out.length() - BALL_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_below_floor() {
        assert!(!ball_below_floor(Vec2::new(0.0, 610.0), 10.0, WINDOW_HEIGHT));
        assert!(ball_below_floor(Vec2::new(0.0, 610.5), 10.0, WINDOW_HEIGHT));
    }
}
