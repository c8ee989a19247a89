//! Frame pacing
//!
//! The host owns the display-refresh callback; [`FrameLoop`] decides whether
//! a given callback may tick. Every requested frame carries a [`FrameToken`].
//! Pausing or resetting bumps an epoch, so callbacks that were already queued
//! come back [`FrameOutcome::Stale`] and never touch the world.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::SimError;
use crate::sim::{GameState, MatchPhase, ScoreEvent, TickInput, tick};

/// Handle for one requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken {
    epoch: u64,
    /// Unique per request, so a delivered token never matches its successor
    seq: u64,
}

/// Result of delivering a frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// One tick ran; request another frame for `next`
    Ticked {
        next: FrameToken,
        scored: Option<ScoreEvent>,
    },
    /// Cancelled or superseded; do not reschedule
    Stale,
}

/// A match plus the bookkeeping for its pending frame
pub struct FrameLoop<R = Pcg32> {
    state: GameState<R>,
    epoch: u64,
    next_seq: u64,
    pending: Option<FrameToken>,
}

impl<R: Rng> FrameLoop<R> {
    pub fn new(state: GameState<R>) -> Self {
        Self {
            state,
            epoch: 0,
            next_seq: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn into_state(self) -> GameState<R> {
        self.state
    }

    /// Frame currently awaiting delivery, if any
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    fn schedule(&mut self) -> FrameToken {
        let token = FrameToken {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(token);
        token
    }

    fn cancel(&mut self) {
        self.epoch += 1;
        self.pending = None;
    }

    /// Start an idle match; returns the first frame to request
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.state.start() {
            Some(self.schedule())
        } else {
            None
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.pause() {
            self.cancel();
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> Option<FrameToken> {
        if self.state.resume() {
            Some(self.schedule())
        } else {
            None
        }
    }

    /// Pause a running match or resume a paused one.
    ///
    /// Returns the frame to request when the match resumed.
    pub fn toggle_pause(&mut self) -> Option<FrameToken> {
        match self.state.phase {
            MatchPhase::Running => {
                self.pause();
                None
            }
            MatchPhase::Paused => self.resume(),
            MatchPhase::Idle => None,
        }
    }

    /// Start/pause button: starts when idle, otherwise toggles pause
    pub fn press_start_pause(&mut self) -> Option<FrameToken> {
        match self.state.phase {
            MatchPhase::Idle => self.start(),
            _ => self.toggle_pause(),
        }
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.state.reset();
    }

    /// Direct pointer placement between frames
    pub fn place_player(&mut self, pointer_y: f32) -> Result<(), SimError> {
        self.state.place_player(pointer_y)
    }

    /// Deliver a frame callback
    pub fn frame(&mut self, token: FrameToken, input: &TickInput) -> FrameOutcome {
        if self.pending != Some(token) || !self.state.is_running() {
            log::trace!(
                "Dropping stale frame (epoch {}, seq {})",
                token.epoch,
                token.seq
            );
            return FrameOutcome::Stale;
        }

        let scored = tick(&mut self.state, input);
        let next = self.schedule();
        FrameOutcome::Ticked { next, scored }
    }
}
