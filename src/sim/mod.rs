//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only (velocities are pixels per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallContact, deflect_off_brick, resolve_paddle, resolve_walls};
pub use rect::Rect;
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, brick_grid};
pub use tick::{GameEvent, TickInput, tick};
