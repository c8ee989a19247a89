//! Per-frame simulation tick
//!
//! Phases run in a fixed order: paddle motion, ball integration, collision,
//! scoring. One call advances the world by exactly one frame.

use rand::Rng;

use super::ai;
use super::collision::{Wall, paddle_hit, reflect_from_paddle, resolve_walls};
use super::state::{GameEvent, GameState, ScoreEvent, Side};

/// Input commands for a single tick, sampled fresh each frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Move-up key held
    pub up: bool,
    /// Move-down key held
    pub down: bool,
    /// Absolute pointer y; centers the player paddle and overrides the keys
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one frame.
///
/// Does nothing unless the match is running. Returns the scoring event, if a
/// point was won this tick.
pub fn tick<R: Rng>(state: &mut GameState<R>, input: &TickInput) -> Option<ScoreEvent> {
    if !state.is_running() {
        return None;
    }

    state.events.clear();
    state.time_ticks += 1;

    move_player(state, input);
    move_ai(state);
    integrate_ball(state);
    resolve_collisions(state);
    let scored = check_scoring(state);

    log::trace!(
        "tick {}: ball ({:.1}, {:.1}) v=({:.2}, {:.2})",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y
    );
    scored
}

fn move_player<R: Rng>(state: &mut GameState<R>, input: &TickInput) {
    if let Some(pointer_y) = input.pointer_y {
        if state.place_player(pointer_y).is_ok() {
            return;
        }
        state.events.push(GameEvent::InputRejected { value: pointer_y });
    }

    // Independent deltas: holding both keys cancels out
    let paddle = &mut state.player;
    if input.up {
        paddle.y -= paddle.speed;
    }
    if input.down {
        paddle.y += paddle.speed;
    }
    paddle.clamp_to(state.settings.arena_height);
}

fn move_ai<R: Rng>(state: &mut GameState<R>) {
    state.ai.speed = ai::ai_speed(&state.settings, &state.score);
    ai::track_ball(
        &mut state.ai,
        state.ball.pos.y,
        state.settings.ai_deadzone,
        state.settings.arena_height,
    );
}

/// Straight-line step, no substeps; very fast balls may tunnel
fn integrate_ball<R: Rng>(state: &mut GameState<R>) {
    state.ball.pos += state.ball.vel;
}

fn resolve_collisions<R: Rng>(state: &mut GameState<R>) {
    if let Some(wall) = resolve_walls(&mut state.ball, state.settings.arena_height) {
        state.events.push(GameEvent::WallBounce {
            top: wall == Wall::Top,
        });
    }

    // The approach gate means at most one of these can fire
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => state.player,
            Side::Right => state.ai,
        };
        if paddle_hit(&state.ball, &paddle, side) {
            reflect_from_paddle(&mut state.ball, &paddle, side, &state.settings);
            log::debug!("Paddle hit ({:?}), speed now {:.2}", side, state.ball.speed);
            state.events.push(GameEvent::PaddleHit {
                side,
                speed: state.ball.speed,
            });
        }
    }
}

fn check_scoring<R: Rng>(state: &mut GameState<R>) -> Option<ScoreEvent> {
    let ball = &state.ball;
    let scorer = if ball.pos.x < -ball.radius {
        Side::Right
    } else if ball.pos.x > state.settings.arena_width + ball.radius {
        Side::Left
    } else {
        return None;
    };

    state.score.increment(scorer);
    // Ball exited past the loser's wall; relaunch back toward the scorer
    state.serve(Some(scorer));

    let event = ScoreEvent {
        scorer,
        score: state.score,
    };
    log::info!(
        "{:?} scored: {} - {}",
        scorer,
        state.score.left,
        state.score.right
    );
    state.events.push(GameEvent::Scored(event));
    Some(event)
}
