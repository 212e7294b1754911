//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame tick
//! - Injected RNG only
//! - Stable iteration order (grid index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{HitSide, ball_block_collision, block_bounce, paddle_collision, wall_collision};
pub use rng::{RandomSource, SequenceRng};
pub use state::{Ball, Block, BlockColor, GameEvent, GamePhase, GameState, Outcome, Paddle};
pub use tick::{TickInput, autopilot_target, tick};
