//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one 1/60 s step. The order of
//! operations matters for tie-breaking: paddle tracking, integration,
//! walls, paddle, miss handling, then a first-match brick scan.

use super::collision::{deflect_off_brick, resolve_paddle, resolve_walls};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer x position, if the cursor has been seen
    pub pointer_x: Option<f32>,
    /// Pointer pressed; starts the game from the title screen
    pub start: bool,
    /// Restart key pressed; resets the game from the game-over screen
    pub restart: bool,
}

/// Observable things that happened during a tick. The loop maps these to
/// sound cues; tests assert on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    BrickBroken,
    BallLost,
    GameOver,
}

/// Advance the game state by one fixed step, appending events to `events`.
///
/// Outside `Playing` nothing moves: the title screen waits for `start`,
/// the game-over screen waits for `restart`.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    if let Some(x) = input.pointer_x {
        state.paddle.track(x);
    }

    // Euler step, pixels per tick
    state.ball.pos += state.ball.vel;

    let contact = resolve_walls(&mut state.ball);
    if contact.side {
        events.push(GameEvent::WallBounce);
    }
    if contact.top {
        events.push(GameEvent::WallBounce);
    }

    if resolve_paddle(&mut state.ball, &state.paddle) {
        events.push(GameEvent::PaddleBounce);
    }

    // The bottom bound costs a life instead of bouncing
    if state.ball.pos.y >= SCREEN_H {
        state.lives -= 1;
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
            return;
        }
        state.ball.respawn(&mut state.rng);
        events.push(GameEvent::BallLost);
    }

    // First-match scan: at most one brick is destroyed per tick, even when
    // the ball overlaps several at once
    let ball_rect = state.ball.rect();
    for brick in state.bricks.iter_mut() {
        if brick.destroyed || !brick.rect.intersects(&ball_rect) {
            continue;
        }
        deflect_off_brick(&mut state.ball, &brick.rect);
        brick.destroyed = true;
        state.score += SCORE_PER_BRICK;
        events.push(GameEvent::BrickBroken);
        break;
    }
}
