//! Block Breaker headless driver
//!
//! There is no window here: the platform glue (window, drawing, pointer
//! events) lives in a separate adapter. This binary runs a session under the
//! autopilot at the compiled frame rate and prints the final snapshot as JSON.
//!
//! Usage: `block-breaker [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_breaker::Snapshot;
    use block_breaker::consts::FRAMES_PER_SECOND;
    use block_breaker::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 0x5eed_u64);
    let frames = parse_arg(args.next(), "frames", 120 * FRAMES_PER_SECOND as u64);

    log::info!("Block Breaker (headless) starting: seed {}, {} frames", seed, frames);

    let mut state = GameState::new(seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..frames {
        tick(&mut state, &input);
        for event in state.events() {
            match event {
                GameEvent::Finished(outcome) => {
                    log::info!("Session finished: {:?} with score {}", outcome, state.score())
                }
                GameEvent::LifeLost { remaining } => {
                    log::info!("Life lost, {} remaining", remaining)
                }
                other => log::trace!("{:?}", other),
            }
        }
        if state.is_over() {
            break;
        }
    }

    match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', using {}", name, raw, default);
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by a browser adapter on wasm32; nothing to run here
}
