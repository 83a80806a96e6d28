//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first click
    NotStarted,
    /// Active gameplay
    Playing,
    /// Out of lives, waiting for the restart key
    GameOver,
}

/// The ball - a small square positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Bounding rect for collision checks
    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, BALL_SIZE, BALL_SIZE)
    }

    /// Place the ball at screen center with a fresh downward trajectory.
    /// The horizontal component is drawn from a fixed discrete set.
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0);
        let dx = SPAWN_DX_CHOICES[rng.random_range(0..SPAWN_DX_CHOICES.len())];
        self.vel = Vec2::new(dx, SPAWN_DY);
    }

    fn spawned(rng: &mut Pcg32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.respawn(rng);
        ball
    }
}

/// The player's paddle; only the left edge moves, everything else is fixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    fn centered() -> Self {
        Self {
            x: (SCREEN_W - PADDLE_W) / 2.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_W, PADDLE_H)
    }

    pub fn center_x(&self) -> f32 {
        self.x + PADDLE_W / 2.0
    }

    /// Follow the pointer, clamped so the paddle stays on screen
    pub fn track(&mut self, pointer_x: f32) {
        self.x = pointer_x.clamp(0.0, SCREEN_W - PADDLE_W);
    }
}

/// One cell of the brick grid. `row` picks the palette color.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub row: usize,
    pub destroyed: bool,
}

/// Build the full grid, row-major, all bricks live
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick {
                rect: Rect::new(
                    col as f32 * BRICK_W,
                    row as f32 * BRICK_H + BRICK_TOP,
                    BRICK_W,
                    BRICK_H,
                ),
                row,
                destroyed: false,
            });
        }
    }
    bricks
}

/// Complete game state, deterministic given the seed and the input stream.
/// The RNG lives here so ball spawns are reproducible under test.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub lives: u8,
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game on the title screen with a fully populated grid
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawned(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::NotStarted,
            ball,
            paddle: Paddle::centered(),
            bricks: brick_grid(),
            score: 0,
            lives: START_LIVES,
            time_ticks: 0,
        }
    }

    /// Reinitialize everything and go straight to Playing.
    /// The RNG stream continues rather than reseeding, so a run stays
    /// reproducible across restarts.
    pub fn reset(&mut self) {
        self.ball.respawn(&mut self.rng);
        self.paddle = Paddle::centered();
        self.bricks = brick_grid();
        self.score = 0;
        self.lives = START_LIVES;
        self.phase = GamePhase::Playing;
    }

    /// Bricks still standing
    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }
}
