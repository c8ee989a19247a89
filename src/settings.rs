//! Game tuning
//!
//! Every constant the simulation reads comes through [`Settings`], so a host
//! can override any subset from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// How the AI's speed reacts to the score gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AiScaling {
    /// Faster whenever the scores differ, whoever leads
    #[default]
    Symmetric,
    /// Faster only while the AI side is behind
    TrailingOnly,
}

impl AiScaling {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiScaling::Symmetric => "Symmetric",
            AiScaling::TrailingOnly => "TrailingOnly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "symmetric" => Some(AiScaling::Symmetric),
            "trailingonly" | "trailing_only" | "trailing" => Some(AiScaling::TrailingOnly),
            _ => None,
        }
    }
}

/// Simulation tuning (units are arena pixels and pixels per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance between each paddle and its wall
    pub paddle_margin: f32,
    /// Player paddle speed per tick
    pub paddle_speed: f32,

    // === AI ===
    pub ai_base_speed: f32,
    pub ai_speed_cap: f32,
    /// Extra AI speed per point of score difference
    pub ai_speed_per_point: f32,
    /// Half-width of the band around the AI paddle center with no correction
    pub ai_deadzone: f32,
    pub ai_scaling: AiScaling,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub ball_max_speed: f32,
    /// Multiplier applied to ball speed on each paddle hit
    pub ball_speed_growth: f32,
    /// Radians
    pub max_bounce_angle: f32,
    /// Radians
    pub serve_angle_spread: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ai_base_speed: AI_BASE_SPEED,
            ai_speed_cap: AI_SPEED_CAP,
            ai_speed_per_point: AI_SPEED_PER_POINT,
            ai_deadzone: AI_DEADZONE,
            ai_scaling: AiScaling::Symmetric,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            ball_speed_growth: BALL_SPEED_GROWTH,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            serve_angle_spread: SERVE_ANGLE_SPREAD,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Left wall x of the player (left) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left wall x of the AI (right) paddle
    pub fn ai_paddle_x(&self) -> f32 {
        self.arena_width - self.paddle_margin - self.paddle_width
    }

    /// Paddle y that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Reject configurations that would break world invariants
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ai_base_speed", self.ai_base_speed),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("ball_max_speed", self.ball_max_speed),
            ("ball_speed_growth", self.ball_speed_growth),
            ("max_bounce_angle", self.max_bounce_angle),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                let msg = format!("{name} must be finite and positive, got {value}");
                return Err(invalid(msg));
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("ai_speed_cap", self.ai_speed_cap),
            ("ai_speed_per_point", self.ai_speed_per_point),
            ("ai_deadzone", self.ai_deadzone),
            ("serve_angle_spread", self.serve_angle_spread),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                let msg = format!("{name} must be finite and non-negative, got {value}");
                return Err(invalid(msg));
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(invalid("paddle_height exceeds arena_height".into()));
        }
        if self.player_paddle_x() + self.paddle_width >= self.ai_paddle_x() {
            return Err(invalid("paddles overlap; arena too narrow for margins".into()));
        }
        if 2.0 * self.ball_radius >= self.arena_height {
            return Err(invalid("ball does not fit between the walls".into()));
        }
        if self.ball_start_speed > self.ball_max_speed {
            return Err(invalid("ball_start_speed exceeds ball_max_speed".into()));
        }
        if self.ball_speed_growth < 1.0 {
            return Err(invalid("ball_speed_growth must be at least 1".into()));
        }
        if self.max_bounce_angle >= std::f32::consts::FRAC_PI_2 {
            return Err(invalid("max_bounce_angle must be below 90 degrees".into()));
        }
        if self.serve_angle_spread >= std::f32::consts::FRAC_PI_2 {
            return Err(invalid("serve_angle_spread must be below 90 degrees".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SimError {
    SimError::InvalidSettings(msg)
}
