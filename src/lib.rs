//! Classic Pong - a two-player paddle game simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation (paddles, AI, ball, collisions, scoring)
//! - `frame`: Cooperative frame pacing with stale-frame suppression
//! - `settings`: Data-driven game tuning
//! - `error`: Error types reported to collaborators
//!
//! Rendering and input capture are left to the embedding application: it feeds
//! a [`sim::TickInput`] into each frame and draws from [`sim::Snapshot`].

pub mod error;
pub mod frame;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use frame::{FrameLoop, FrameOutcome, FrameToken};
pub use settings::{AiScaling, Settings};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    use std::f32::consts::PI;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults - both paddles share geometry
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Player paddle displacement per tick while a key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// AI tracking
    pub const AI_BASE_SPEED: f32 = 4.0;
    /// Upper bound on the score-gap bonus added to the AI base speed
    pub const AI_SPEED_CAP: f32 = 4.0;
    pub const AI_SPEED_PER_POINT: f32 = 0.3;
    pub const AI_DEADZONE: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_SPEED: f32 = 6.0;
    pub const BALL_MAX_SPEED: f32 = 14.0;
    /// Speed boost when ball hits a paddle (multiplicative)
    pub const BALL_SPEED_GROWTH: f32 = 1.06;

    /// Steepest outgoing angle off a paddle edge (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * PI / 12.0;
    /// Serve angle is drawn from [-spread, +spread] (30 degrees)
    pub const SERVE_ANGLE_SPREAD: f32 = PI / 6.0;
}

/// Clamp a paddle's top edge into `[0, arena_height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, arena_height: f32) -> f32 {
    y.clamp(0.0, (arena_height - paddle_height).max(0.0))
}
