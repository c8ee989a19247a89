//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives in [`GameState`]; there is no
//! ambient global state, so independent matches can run side by side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai;
use crate::clamp_paddle_y;
use crate::error::SimError;
use crate::settings::Settings;

/// One half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player paddle, left wall
    Left,
    /// AI paddle, right wall
    Right,
}

impl Side {
    /// Horizontal unit direction pointing toward this side's wall
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPhase {
    /// Never started, or just reset
    #[default]
    Idle,
    /// Ticks advance the world
    Running,
    /// Frozen; resumable into Running
    Paused,
}

/// A paddle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed for the match
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Displacement per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Keep the paddle inside the arena
    pub fn clamp_to(&mut self, arena_height: f32) {
        self.y = clamp_paddle_y(self.y, self.height, arena_height);
    }
}

/// The ball (position is its center)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed; `vel.length()` matches it after every launch or bounce
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            speed: 0.0,
        }
    }

    /// Set velocity from the scalar speed, an angle off the horizontal, and a
    /// horizontal direction (`+1` right, `-1` left)
    pub fn aim(&mut self, angle: f32, direction: f32) {
        self.vel = Vec2::new(
            direction * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A point was scored this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub scorer: Side,
    /// Score after the point
    pub score: Score,
}

/// Things that happened during the last tick, for audio/effects collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { top: bool },
    PaddleHit { side: Side, speed: f32 },
    Scored(ScoreEvent),
    /// Direct placement input ignored because it was not finite
    InputRejected { value: f32 },
}

/// Read-only view of the world for renderers
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub time_ticks: u64,
}

/// Complete match state
///
/// Generic over the random source so tests can pin serve trajectories.
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub(crate) settings: Settings,
    /// Current phase
    pub phase: MatchPhase,
    /// Left paddle, user controlled
    pub player: Paddle,
    /// Right paddle, AI controlled
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Executed ticks since creation
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    rng: R,
}

impl GameState<Pcg32> {
    /// Default settings, seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::build(Settings::default(), Pcg32::seed_from_u64(seed))
    }

    pub fn with_settings(settings: Settings, seed: u64) -> Result<Self, SimError> {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a match driven by a caller-supplied random source
    pub fn with_rng(settings: Settings, rng: R) -> Result<Self, SimError> {
        settings.validate()?;
        Ok(Self::build(settings, rng))
    }

    fn build(settings: Settings, rng: R) -> Self {
        let centered = settings.centered_paddle_y();
        let player = Paddle::new(
            settings.player_paddle_x(),
            centered,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let ai = Paddle::new(
            settings.ai_paddle_x(),
            centered,
            settings.paddle_width,
            settings.paddle_height,
            ai::ai_speed(&settings, &Score::new()),
        );
        let ball = Ball::new(Self::center(&settings), settings.ball_radius);

        let mut state = Self {
            settings,
            phase: MatchPhase::Idle,
            player,
            ai,
            ball,
            score: Score::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        };

        // Ball is placed and aimed before the first start so there is something to draw
        state.serve(None);
        state
    }

    fn center(settings: &Settings) -> Vec2 {
        Vec2::new(settings.arena_width / 2.0, settings.arena_height / 2.0)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Events recorded by the most recent executed tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player,
            ai: self.ai,
            ball: self.ball,
            score: self.score,
            time_ticks: self.time_ticks,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    /// Recenter the ball at base speed with a fresh launch angle.
    ///
    /// `toward` forces the horizontal direction (the side the ball heads to);
    /// `None` picks one with even odds.
    pub fn serve(&mut self, toward: Option<Side>) {
        let spread = self.settings.serve_angle_spread;
        let angle = self.rng.random_range(-spread..=spread);
        let toward = toward.unwrap_or_else(|| {
            if self.rng.random_bool(0.5) {
                Side::Right
            } else {
                Side::Left
            }
        });

        self.ball.pos = Self::center(&self.settings);
        self.ball.radius = self.settings.ball_radius;
        self.ball.speed = self.settings.ball_start_speed;
        self.ball.aim(angle, toward.sign());
    }

    /// Idle -> Running. Returns false if a match is already underway.
    pub fn start(&mut self) -> bool {
        if self.phase != MatchPhase::Idle {
            return false;
        }
        self.phase = MatchPhase::Running;
        self.serve(None);
        log::info!("Match started");
        true
    }

    /// Running -> Paused
    pub fn pause(&mut self) -> bool {
        if self.phase != MatchPhase::Running {
            return false;
        }
        self.phase = MatchPhase::Paused;
        log::info!("Match paused at tick {}", self.time_ticks);
        true
    }

    /// Paused -> Running
    pub fn resume(&mut self) -> bool {
        if self.phase != MatchPhase::Paused {
            return false;
        }
        self.phase = MatchPhase::Running;
        log::info!("Match resumed");
        true
    }

    /// Flip between Running and Paused; no-op while Idle
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            MatchPhase::Running => self.pause(),
            MatchPhase::Paused => self.resume(),
            MatchPhase::Idle => false,
        }
    }

    /// Single start/pause control: starts an idle match, otherwise toggles pause
    pub fn toggle(&mut self) -> bool {
        match self.phase {
            MatchPhase::Idle => self.start(),
            _ => self.toggle_pause(),
        }
    }

    /// Back to Idle with zeroed scores, centered paddles, and a fresh serve
    pub fn reset(&mut self) {
        let centered = self.settings.centered_paddle_y();
        self.phase = MatchPhase::Idle;
        self.score = Score::new();
        self.player.y = centered;
        self.ai.y = centered;
        self.ai.speed = ai::ai_speed(&self.settings, &self.score);
        self.events.clear();
        self.serve(None);
        log::info!("Match reset");
    }

    /// Center the player paddle on an absolute pointer y.
    ///
    /// Works in any phase. Non-finite input is rejected and nothing changes.
    pub fn place_player(&mut self, pointer_y: f32) -> Result<(), SimError> {
        if !pointer_y.is_finite() {
            log::warn!("Rejected player placement at {}", pointer_y);
            return Err(SimError::NonFiniteCoordinate { value: pointer_y });
        }
        self.player.y = pointer_y - self.player.height / 2.0;
        self.player.clamp_to(self.settings.arena_height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(7);
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.score, Score::new());
        assert_eq!(state.player.y, 200.0);
        assert_eq!(state.ai.y, 200.0);
        assert_eq!(state.player.x, 10.0);
        assert_eq!(state.ai.x, 780.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
        assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-4);
    }

    #[test]
    fn test_serve_forced_direction_and_angle_range() {
        let mut state = GameState::new(42);
        let spread = state.settings().serve_angle_spread;
        for _ in 0..200 {
            state.serve(Some(Side::Left));
            assert!(state.ball.vel.x < 0.0);
            let angle = (state.ball.vel.y / state.ball.speed).asin();
            assert!(angle.abs() <= spread + 1e-5);

            state.serve(Some(Side::Right));
            assert!(state.ball.vel.x > 0.0);
        }
    }

    #[test]
    fn test_serve_random_direction_hits_both_sides() {
        let mut state = GameState::new(3);
        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            state.serve(None);
            if state.ball.vel.x < 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_serve_restores_base_speed() {
        let mut state = GameState::new(1);
        state.ball.speed = 13.0;
        state.serve(Some(Side::Right));
        assert_eq!(state.ball.speed, state.settings().ball_start_speed);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut state = GameState::new(9);
        assert!(!state.pause());
        assert!(!state.resume());
        assert!(!state.toggle_pause());

        assert!(state.start());
        assert_eq!(state.phase, MatchPhase::Running);
        assert!(!state.start());

        assert!(state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::Paused);
        assert!(!state.start());
        assert!(state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::Running);

        state.reset();
        assert_eq!(state.phase, MatchPhase::Idle);
    }

    #[test]
    fn test_toggle_starts_then_pauses() {
        let mut state = GameState::new(9);
        assert!(state.toggle());
        assert_eq!(state.phase, MatchPhase::Running);
        assert!(state.toggle());
        assert_eq!(state.phase, MatchPhase::Paused);
        assert!(state.toggle());
        assert_eq!(state.phase, MatchPhase::Running);
    }

    #[test]
    fn test_reset_clears_scores_and_paddles() {
        let mut state = GameState::new(5);
        state.start();
        state.score = Score { left: 3, right: 7 };
        state.player.y = 0.0;
        state.ai.y = 400.0;
        state.pause();

        state.reset();
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.score, Score::new());
        assert_eq!(state.player.y, 200.0);
        assert_eq!(state.ai.y, 200.0);
        assert_eq!(state.ai.speed, state.settings().ai_base_speed);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_place_player_clamps() {
        let mut state = GameState::new(0);
        state.place_player(250.0).expect("finite");
        assert_eq!(state.player.y, 200.0);
        state.place_player(10.0).expect("finite");
        assert_eq!(state.player.y, 0.0);
        state.place_player(10_000.0).expect("finite");
        assert_eq!(state.player.y, 400.0);
    }

    #[test]
    fn test_place_player_rejects_non_finite() {
        let mut state = GameState::new(0);
        let before = state.player;
        assert!(matches!(
            state.place_player(f32::NAN),
            Err(SimError::NonFiniteCoordinate { .. })
        ));
        assert!(state.place_player(f32::INFINITY).is_err());
        assert_eq!(state.player, before);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            arena_height: -1.0,
            ..Default::default()
        };
        assert!(GameState::with_settings(settings, 1).is_err());
    }

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
