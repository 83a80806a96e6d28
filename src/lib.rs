//! Atari Breakout - a fixed-timestep arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Best-effort tone playback

pub mod audio;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are pixels per tick)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum sim steps drained from the accumulator per rendered frame
    pub const MAX_STEPS_PER_FRAME: u32 = 4;

    /// Screen dimensions in pixels
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 600.0;

    /// Paddle geometry - left edge tracked by the pointer, top edge fixed
    pub const PADDLE_W: f32 = 80.0;
    pub const PADDLE_H: f32 = 12.0;
    pub const PADDLE_Y: f32 = SCREEN_H - 50.0;
    /// Deflection-angle cap on paddle hits (radians)
    pub const PADDLE_MAX_ANGLE: f32 = 0.8;
    /// Ball speed after a paddle hit; paddle hits renormalize speed
    pub const PADDLE_REBOUND_SPEED: f32 = 5.0;

    /// The ball is a square of this side, positioned by its center
    pub const BALL_SIZE: f32 = 8.0;
    /// Horizontal spawn velocities, one drawn per respawn
    pub const SPAWN_DX_CHOICES: [f32; 4] = [-4.0, -3.0, 3.0, 4.0];
    /// Vertical spawn velocity (downward, toward the paddle)
    pub const SPAWN_DY: f32 = 4.0;

    /// Brick grid: SCREEN_W / BRICK_W columns, first row top at BRICK_TOP
    pub const BRICK_W: f32 = 80.0;
    pub const BRICK_H: f32 = 20.0;
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_TOP: f32 = 50.0;
    /// Edge-proximity tolerance for the brick side-of-impact heuristic
    pub const SIDE_TOLERANCE: f32 = 10.0;

    pub const SCORE_PER_BRICK: u32 = 10;
    pub const START_LIVES: u8 = 3;
}
