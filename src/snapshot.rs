//! Read-only view of a session for render adapters
//!
//! The core never draws. An adapter takes a [`Snapshot`] after each tick or
//! input event and paints it however its platform likes; the helpers here
//! carry the look of the game (palette, block shading, HUD text).

use glam::Vec2;
use serde::Serialize;

use crate::sim::{BlockColor, GamePhase, GameState, Outcome, RandomSource};

/// Colors for game elements (RGB, 0-1)
pub mod colors {
    pub const BACKGROUND: [f32; 3] = [0.1, 0.1, 0.2];
    pub const BALL: [f32; 3] = [1.0, 0.8, 0.0];
    pub const PADDLE: [f32; 3] = [0.0, 0.7, 1.0];
    pub const TEXT: [f32; 3] = [1.0, 1.0, 1.0];
    /// Backdrop behind status messages (RGBA)
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
    /// Block edge highlight (top/left) and shadow (bottom/right), RGBA
    pub const EDGE_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const EDGE_DARK: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
}

impl BlockColor {
    fn scaled(self, factor: f32) -> [f32; 3] {
        [
            (self.r * factor).min(1.0),
            (self.g * factor).min(1.0),
            (self.b * factor).min(1.0),
        ]
    }

    /// Lighter top-left end of the block gradient
    pub fn highlight(self) -> [f32; 3] {
        self.scaled(1.2)
    }

    /// Darker bottom-right end of the block gradient
    pub fn shadow(self) -> [f32; 3] {
        self.scaled(0.7)
    }

    /// Inner bevel fill
    pub fn bevel(self) -> [f32; 3] {
        self.scaled(0.8)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Paddle rectangle, `pos` is the center
#[derive(Debug, Clone, Serialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Block rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    pub color: BlockColor,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub paddle: PaddleView,
    pub blocks: Vec<BlockView>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture<R: RandomSource>(state: &GameState<R>) -> Self {
        let ball = state.ball();
        let paddle = state.paddle();
        Self {
            ball: BallView {
                pos: ball.pos,
                radius: ball.radius,
            },
            paddle: PaddleView {
                pos: Vec2::new(paddle.x, paddle.y),
                width: paddle.width,
                height: paddle.height,
            },
            blocks: state
                .blocks()
                .iter()
                .map(|b| BlockView {
                    pos: b.pos,
                    width: b.width,
                    height: b.height,
                    active: b.active,
                    color: b.color,
                })
                .collect(),
            score: state.score(),
            lives: state.lives(),
            phase: state.phase(),
        }
    }

    /// Blocks still on the board, the only ones a renderer should draw
    pub fn visible_blocks(&self) -> impl Iterator<Item = &BlockView> {
        self.blocks.iter().filter(|b| b.active)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }
}

/// Centered banner text for the current phase
pub fn status_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::NotStarted => Some("Click to Start!"),
        GamePhase::Running => None,
        GamePhase::GameOver(Outcome::Lost) => Some("Game Over!"),
        GamePhase::GameOver(Outcome::Won) => Some("You Win!"),
    }
}

/// Smaller line shown under the banner
pub fn status_hint(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::GameOver(_) => Some("Click to Play Again"),
        _ => None,
    }
}
