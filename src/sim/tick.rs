//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one frame, plus the input
//! entry points a platform adapter calls between frames.

use super::collision::{
    ball_below_floor, ball_block_collision, block_bounce, paddle_collision, wall_collision,
};
use super::rng::{self, RandomSource};
use super::state::{GameEvent, GamePhase, GameState, Outcome};
use crate::consts::*;

/// Input gathered for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x position, if it moved
    pub pointer_x: Option<f32>,
    /// Click (start, or reset and start after game over)
    pub click: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Apply one frame of input, then advance the simulation by one frame
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) {
    let (pointer_x, click) = if input.idle_mode {
        (Some(autopilot_target(state)), input.click || !state.is_running())
    } else {
        (input.pointer_x, input.click)
    };

    state.events.clear();

    if let Some(x) = pointer_x {
        state.on_pointer_move(x);
    }
    if click {
        state.on_pointer_click();
    }
    state.advance_frame();
}

/// Paddle x the autopilot steers toward.
///
/// Tracks the ball with a slow sideways wobble so the bounce angle varies
/// instead of settling into a vertical loop. The wobble stays well inside
/// the paddle's half width.
pub fn autopilot_target<R: RandomSource>(state: &GameState<R>) -> f32 {
    let wobble = (state.frames as f32 * 0.01).sin() * state.paddle.half_width() * 0.6;
    state.ball.pos.x + wobble
}

impl<R: RandomSource> GameState<R> {
    /// Frame timer callback: advance physics and rules by one frame
    pub fn on_frame_tick(&mut self) {
        self.events.clear();
        self.advance_frame();
    }

    /// Pointer moved to `x` (window coordinates).
    ///
    /// Ignored after game over. Before launch the ball rides on the paddle.
    pub fn on_pointer_move(&mut self, x: f32) {
        if self.is_over() {
            return;
        }
        self.paddle.move_to(x);
        if self.phase == GamePhase::NotStarted {
            self.dock_ball();
        }
    }

    /// Pointer clicked: launch, or reset and launch after game over.
    ///
    /// A click that changes phase replaces the previous frame's events.
    pub fn on_pointer_click(&mut self) {
        match self.phase {
            GamePhase::NotStarted => {
                self.events.clear();
                self.start();
            }
            GamePhase::Running => {}
            GamePhase::GameOver(_) => {
                self.events.clear();
                self.reset();
                self.start();
            }
        }
    }

    pub(crate) fn advance_frame(&mut self) {
        match self.phase {
            GamePhase::NotStarted => {
                self.dock_ball();
                return;
            }
            GamePhase::GameOver(_) => return,
            GamePhase::Running => {}
        }

        self.frames += 1;
        self.ball.step();

        let (pos, radius) = (self.ball.pos, self.ball.radius);
        if let Some(vel) = wall_collision(pos, self.ball.vel, radius, WINDOW_WIDTH) {
            self.ball.vel = vel;
            self.events.push(GameEvent::WallBounce);
        }

        if let Some((offset, vel)) = paddle_collision(pos, self.ball.vel, radius, &self.paddle) {
            self.ball.vel = vel;
            self.events.push(GameEvent::PaddleHit { offset });
            log::debug!("Paddle hit at offset {:.2}, vel {:?}", offset, vel);
        }

        self.resolve_block_hit();

        if ball_below_floor(self.ball.pos, radius, WINDOW_HEIGHT) {
            self.lose_life();
        }

        if !self.is_over() && self.active_blocks() == 0 {
            self.phase = GamePhase::GameOver(Outcome::Won);
            self.events.push(GameEvent::Finished(Outcome::Won));
            log::info!("All blocks cleared - you win! Score: {}", self.score);
        }
    }

    /// Destroy at most one block this frame: the first active block, in grid
    /// order, that the ball overlaps
    fn resolve_block_hit(&mut self) {
        let (pos, radius) = (self.ball.pos, self.ball.radius);
        let hit = self
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.active)
            .find_map(|(index, block)| {
                ball_block_collision(pos, radius, block).map(|side| (index, side))
            });

        let Some((index, side)) = hit else {
            return;
        };

        let jitter = rng::jitter(&mut self.rng);
        self.ball.vel = block_bounce(self.ball.vel, side, jitter);
        self.blocks[index].active = false;
        self.score += POINTS_PER_BLOCK;
        self.events.push(GameEvent::BlockDestroyed { index, side });
        log::debug!(
            "Block {} hit on {:?} side (jitter {:+.3}), score {}",
            index,
            side,
            jitter,
            self.score
        );
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost { remaining: self.lives });

        if self.lives == 0 {
            self.phase = GamePhase::GameOver(Outcome::Lost);
            self.events.push(GameEvent::Finished(Outcome::Lost));
            log::info!("Game over! Final score: {}", self.score);
        } else {
            self.ball.serve(self.paddle.x);
            self.phase = GamePhase::NotStarted;
            log::info!("Ball lost, {} lives left", self.lives);
        }
    }
}
