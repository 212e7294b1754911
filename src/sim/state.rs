//! Game state and core simulation types
//!
//! The session object owns exactly one ball, one paddle and the block grid.
//! Blocks are addressed by index; nothing outside the session holds a
//! reference into it.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::HitSide;
use super::rng::{self, RandomSource};
use crate::consts::*;
use crate::launch_velocity;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every block was destroyed
    Won,
    /// The last life was lost
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball docked on the paddle, waiting for a click
    NotStarted,
    /// Active gameplay
    Running,
    /// Session ended; a click resets and starts a new one
    GameOver(Outcome),
}

/// Something noteworthy that happened during a tick or input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    Reset,
    WallBounce,
    /// Paddle hit, with the signed offset from paddle center in [-1, 1]
    PaddleHit { offset: f32 },
    BlockDestroyed { index: usize, side: HitSide },
    LifeLost { remaining: u32 },
    Finished(Outcome),
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: launch_velocity(),
            radius: BALL_RADIUS,
        }
    }

    /// Advance one frame. Bounds are the collision engine's business.
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball back on the serve line above `x` with the launch velocity
    pub fn serve(&mut self, x: f32) {
        self.pos = Vec2::new(x, BALL_START_Y);
        self.vel = launch_velocity();
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle. `x` is the center; `y` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: WINDOW_WIDTH / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Center the paddle on `target_x`, clamped so it stays inside the window.
    ///
    /// NaN is ignored; infinities clamp to the nearest edge.
    pub fn move_to(&mut self, target_x: f32) {
        if target_x.is_nan() {
            return;
        }
        let half = self.width / 2.0;
        self.x = target_x.clamp(half, WINDOW_WIDTH - half);
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.half_width()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.half_width()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Block fill color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BlockColor {
    /// Random pastel-ish color, each channel in [0.3, 0.99]
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || 0.3 + rng.next_below(70) as f32 / 100.0;
        Self {
            r: channel(),
            g: channel(),
            b: channel(),
        }
    }
}

/// A block. `pos` is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    pub color: BlockColor,
}

impl Block {
    pub fn new(pos: Vec2, color: BlockColor) -> Self {
        Self {
            pos,
            width: BLOCK_WIDTH,
            height: BLOCK_HEIGHT,
            active: true,
            color,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height)
    }
}

/// Lay out the full `BLOCK_ROWS` x `BLOCK_COLS` grid, row by row
pub fn build_grid<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLS);
    for row in 0..BLOCK_ROWS {
        for col in 0..BLOCK_COLS {
            let x = SIDE_MARGIN + col as f32 * (BLOCK_WIDTH + BLOCK_SPACING);
            let y = TOP_MARGIN + row as f32 * (BLOCK_HEIGHT + BLOCK_SPACING);
            blocks.push(Block::new(Vec2::new(x, y), BlockColor::random(rng)));
        }
    }
    blocks
}

/// One game session: ball, paddle, blocks, score, lives and phase.
///
/// Constructed once at program start and reset in place on replay.
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = Pcg32> {
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    pub(crate) blocks: Vec<Block>,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) phase: GamePhase,
    /// Frames simulated while running
    pub(crate) frames: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// Create a new session with a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session drawing colors and jitter from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let blocks = build_grid(&mut rng);
        Self {
            ball: Ball::new(Vec2::new(WINDOW_WIDTH / 2.0, BALL_START_Y)),
            paddle: Paddle::default(),
            blocks,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::NotStarted,
            frames: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Reinitialize ball, paddle, block grid, score and lives in place
    pub fn reset(&mut self) {
        self.ball = Ball::new(Vec2::new(WINDOW_WIDTH / 2.0, BALL_START_Y));
        self.paddle = Paddle::default();
        self.blocks = build_grid(&mut self.rng);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::NotStarted;
        self.frames = 0;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
    }

    /// Launch the docked ball. Only valid from `NotStarted`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
            self.events.push(GameEvent::Started);
            log::info!("Ball launched (lives: {}, score: {})", self.lives, self.score);
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn active_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events from the last frame tick, or from a click that started or reset
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Snap the docked ball to the paddle center
    pub(crate) fn dock_ball(&mut self) {
        self.ball.pos.x = self.paddle.x;
    }
}
