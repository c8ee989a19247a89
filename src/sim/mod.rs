//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One synchronous tick per frame, no substeps
//! - Injectable RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Wall, bounce_angle, circle_rect_overlap, paddle_hit, reflect_from_paddle};
pub use state::{
    Ball, GameEvent, GameState, MatchPhase, Paddle, Score, ScoreEvent, Side, Snapshot,
};
pub use tick::{TickInput, tick};
