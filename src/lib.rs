//! Block Breaker - a single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `snapshot`: Read-only view of the simulation for render adapters
//!
//! Window creation, drawing and the frame timer live outside this crate. An
//! adapter calls [`sim::GameState::on_frame_tick`] once per frame, forwards
//! pointer events, and draws from a [`snapshot::Snapshot`].

pub mod sim;
pub mod snapshot;

pub use sim::{GamePhase, GameState, Outcome};
pub use snapshot::Snapshot;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Frame rate driving the tick
    pub const FRAMES_PER_SECOND: u32 = 60;
    /// Tick interval in milliseconds
    pub const FRAME_INTERVAL_MS: u32 = 1000 / FRAMES_PER_SECOND;

    /// Paddle defaults - y is fixed, x follows the pointer
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = WINDOW_HEIGHT - 30.0;
    /// Maximum bounce angle from vertical at the paddle edge (60 degrees)
    pub const PADDLE_MAX_BOUNCE: f32 = std::f32::consts::FRAC_PI_3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity magnitude in pixels per frame
    pub const BALL_SPEED: f32 = 5.0;
    /// Height the ball is served from
    pub const BALL_START_Y: f32 = WINDOW_HEIGHT - 50.0;
    /// Launch direction, measured from horizontal
    pub const BALL_LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 9;
    pub const BLOCK_SPACING: f32 = 5.0;
    pub const TOP_MARGIN: f32 = 50.0;
    pub const SIDE_MARGIN: f32 = 20.0;

    /// Rules
    pub const STARTING_LIVES: u32 = 3;
    pub const POINTS_PER_BLOCK: u32 = 10;

    /// Velocity jitter applied on block hits: [-0.1, 0.1) in steps of 0.002
    pub const JITTER_STEPS: u32 = 100;
    pub const JITTER_SCALE: f32 = 500.0;
    pub const JITTER_OFFSET: f32 = 0.1;
}

/// Initial serve velocity: `BALL_SPEED` at 45 degrees up and to the right
#[inline]
pub fn launch_velocity() -> Vec2 {
    let angle = consts::BALL_LAUNCH_ANGLE;
    Vec2::new(angle.cos(), -angle.sin()) * consts::BALL_SPEED
}

/// Rescale a velocity to `BALL_SPEED`.
///
/// A zero (or non-finite) vector has no direction to keep, so it falls back
/// to the launch velocity rather than producing NaN.
#[inline]
pub fn normalize_speed(vel: Vec2) -> Vec2 {
    let len = vel.length();
    if len > f32::EPSILON && len.is_finite() {
        vel / len * consts::BALL_SPEED
    } else {
        launch_velocity()
    }
}
