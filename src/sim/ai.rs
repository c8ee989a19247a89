//! Reactive AI for the right paddle
//!
//! No prediction: the paddle chases the ball's current height at a speed that
//! grows with the score gap.

use super::state::{Paddle, Score};
use crate::settings::{AiScaling, Settings};

/// AI paddle speed for the current score: `base + min(cap, gap * per_point)`
pub fn ai_speed(settings: &Settings, score: &Score) -> f32 {
    // Player is Left, AI is Right
    let gap = match settings.ai_scaling {
        AiScaling::Symmetric => score.left.abs_diff(score.right),
        AiScaling::TrailingOnly => score.left.saturating_sub(score.right),
    };
    let bonus = (gap as f32 * settings.ai_speed_per_point).min(settings.ai_speed_cap);
    settings.ai_base_speed + bonus
}

/// Step the paddle toward `ball_y` unless the ball is within the deadzone
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, deadzone: f32, arena_height: f32) {
    let center = paddle.center_y();
    if ball_y < center - deadzone {
        paddle.y -= paddle.speed;
    } else if ball_y > center + deadzone {
        paddle.y += paddle.speed;
    }
    paddle.clamp_to(arena_height);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(780.0, y, 10.0, 100.0, 4.0)
    }

    #[test]
    fn test_speed_even_score() {
        let settings = Settings::default();
        assert_eq!(ai_speed(&settings, &Score::new()), 4.0);
        assert_eq!(ai_speed(&settings, &Score { left: 5, right: 5 }), 4.0);
    }

    #[test]
    fn test_speed_scales_and_caps() {
        let settings = Settings::default();
        let speed = ai_speed(&settings, &Score { left: 2, right: 0 });
        assert!((speed - 4.6).abs() < 1e-5);

        // 20 * 0.3 = 6 > cap of 4
        let speed = ai_speed(&settings, &Score { left: 20, right: 0 });
        assert_eq!(speed, 8.0);
    }

    #[test]
    fn test_symmetric_scaling_when_ai_leads() {
        let settings = Settings::default();
        let speed = ai_speed(&settings, &Score { left: 0, right: 3 });
        assert!((speed - 4.9).abs() < 1e-5);
    }

    #[test]
    fn test_trailing_only_scaling() {
        let settings = Settings {
            ai_scaling: AiScaling::TrailingOnly,
            ..Default::default()
        };
        assert_eq!(ai_speed(&settings, &Score { left: 0, right: 3 }), 4.0);
        let speed = ai_speed(&settings, &Score { left: 3, right: 0 });
        assert!((speed - 4.9).abs() < 1e-5);
    }

    #[test]
    fn test_tracks_up_and_down() {
        let mut paddle = paddle_at(200.0);
        track_ball(&mut paddle, 100.0, 4.0, 500.0);
        assert_eq!(paddle.y, 196.0);

        let mut paddle = paddle_at(200.0);
        track_ball(&mut paddle, 400.0, 4.0, 500.0);
        assert_eq!(paddle.y, 204.0);
    }

    #[test]
    fn test_deadzone_holds_still() {
        let mut paddle = paddle_at(200.0);
        // Center is 250
        track_ball(&mut paddle, 253.0, 4.0, 500.0);
        assert_eq!(paddle.y, 200.0);
        track_ball(&mut paddle, 246.0, 4.0, 500.0);
        assert_eq!(paddle.y, 200.0);
    }

    #[test]
    fn test_tracking_is_clamped() {
        let mut paddle = paddle_at(1.0);
        track_ball(&mut paddle, 0.0, 4.0, 500.0);
        assert_eq!(paddle.y, 0.0);

        let mut paddle = paddle_at(398.0);
        track_ball(&mut paddle, 500.0, 4.0, 500.0);
        assert_eq!(paddle.y, 400.0);
    }
}
