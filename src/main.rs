//! Classic Pong entry point
//!
//! Runs a headless match: the left paddle follows the ball with the pointer,
//! the right paddle is the built-in AI.
//!
//! Usage: `classic-pong [settings.json|-] [ticks] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Classic Pong (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on wasm
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), classic_pong::SimError> {
    use classic_pong::sim::GameState;
    use classic_pong::{FrameLoop, FrameOutcome, Settings};

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) if path != "-" => Settings::load(path)?,
        _ => Settings::default(),
    };
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);

    let state = GameState::with_settings(settings, seed)?;
    log::info!("Game initialized with seed: {}", seed);
    let mut frames = FrameLoop::new(state);
    let mut token = frames.start();

    for _ in 0..ticks {
        let Some(current) = token else { break };

        let input = follow_ball(frames.state());
        token = match frames.frame(current, &input) {
            FrameOutcome::Ticked { next, scored } => {
                if let Some(event) = scored {
                    println!(
                        "tick {:>6}: {:?} scores -> {} : {}",
                        frames.state().time_ticks,
                        event.scorer,
                        event.score.left,
                        event.score.right
                    );
                }
                Some(next)
            }
            FrameOutcome::Stale => None,
        };
    }

    let score = frames.state().score;
    println!("\nFinal score: player {} - AI {}", score.left, score.right);
    Ok(())
}

/// Pointer input that keeps the player paddle centered on the ball
#[cfg(not(target_arch = "wasm32"))]
fn follow_ball(state: &classic_pong::sim::GameState) -> classic_pong::sim::TickInput {
    classic_pong::sim::TickInput {
        pointer_y: Some(state.ball.pos.y),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_pong::sim::{GameState, tick};

    #[test]
    fn test_runner_steers_with_pointer() {
        let mut state = GameState::new(11);
        state.start();
        state.ball.pos.y = 120.0;

        let input = follow_ball(&state);
        assert_eq!(input.pointer_y, Some(120.0));
        assert!(!input.up && !input.down);

        tick(&mut state, &input);
        assert_eq!(state.player.y, 70.0);
    }
}
