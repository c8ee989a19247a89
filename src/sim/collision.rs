//! Collision detection and response
//!
//! Ball vs top/bottom walls, and ball vs paddles (circle against an
//! axis-aligned box). Paddle hits reshape the ball's trajectory from the
//! strike height, which is what lets a player aim.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::settings::Settings;

/// Which wall a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// True when a circle overlaps (or touches) an axis-aligned box
///
/// Uses the point on the box closest to the circle center.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_max: Vec2) -> bool {
    let closest = center.clamp(rect_min, rect_max);
    center.distance_squared(closest) <= radius * radius
}

/// Bounce the ball off the top or bottom wall.
///
/// The ball is pinned to the boundary and `vy` points back into the arena;
/// speed is unchanged.
pub fn resolve_walls(ball: &mut Ball, arena_height: f32) -> Option<Wall> {
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        Some(Wall::Top)
    } else if ball.pos.y + ball.radius >= arena_height {
        ball.pos.y = arena_height - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Whether the ball hits the paddle on `side` this tick.
///
/// Only counts while the ball travels toward that paddle, so a ball already
/// moving away after a bounce cannot retrigger.
pub fn paddle_hit(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let approaching = ball.vel.x * side.sign() > 0.0;
    approaching && circle_rect_overlap(ball.pos, ball.radius, paddle.min(), paddle.max())
}

/// Outgoing angle off the horizontal for a ball struck at `ball_y`.
///
/// Center maps to 0, top edge to `+max_angle`, bottom edge to `-max_angle`.
/// Corner grazes beyond the edges are clamped.
pub fn bounce_angle(paddle: &Paddle, ball_y: f32, max_angle: f32) -> f32 {
    let half = paddle.height / 2.0;
    let relative = ((paddle.center_y() - ball_y) / half).clamp(-1.0, 1.0);
    relative * max_angle
}

/// Resolve a confirmed hit against the paddle on `side`
pub fn reflect_from_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, settings: &Settings) {
    // Push the ball clear of the paddle's outer face
    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };

    let angle = bounce_angle(paddle, ball.pos.y, settings.max_bounce_angle);
    ball.speed = (ball.speed * settings.ball_speed_growth).min(settings.ball_max_speed);

    // Away from the paddle; screen y grows downward so a positive angle goes up
    let direction = side.opponent().sign();
    ball.vel = Vec2::new(
        direction * ball.speed * angle.cos(),
        -ball.speed * angle.sin(),
    );
}
