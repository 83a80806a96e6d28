//! Scene assembly
//!
//! Turns a [`GameState`] into the vertex list for one frame. Pure
//! function of the state, so it stays testable without a GPU.

use crate::consts::{BALL_SIZE, SCREEN_H, SCREEN_W};
use crate::sim::{GamePhase, GameState, Rect};

use super::shapes::{outline, quad, scanlines};
use super::text::{draw_text, draw_text_centered};
use super::vertex::{colors, Vertex};

const HUD_SCALE: f32 = 4.0;
const TITLE_SCALE: f32 = 8.0;
const SCANLINE_STRIDE: f32 = 4.0;
const BRICK_OUTLINE: f32 = 2.0;

/// Build the full vertex list for the current frame
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut verts = Vec::new();

    scanlines(SCANLINE_STRIDE, colors::SCANLINE, &mut verts);

    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        quad(&brick.rect, colors::brick_row(brick.row), &mut verts);
        outline(&brick.rect, BRICK_OUTLINE, colors::WHITE, &mut verts);
    }

    quad(&state.paddle.rect(), colors::WHITE, &mut verts);

    let ball = Rect::centered(state.ball.pos, BALL_SIZE, BALL_SIZE);
    quad(&ball, colors::WHITE, &mut verts);

    draw_text(
        &format!("SCORE: {:04}", state.score),
        20.0,
        15.0,
        HUD_SCALE,
        colors::WHITE,
        &mut verts,
    );
    draw_text(
        &format!("LIVES: {}", state.lives),
        SCREEN_W - 140.0,
        15.0,
        HUD_SCALE,
        colors::WHITE,
        &mut verts,
    );

    let cx = SCREEN_W / 2.0;
    let cy = SCREEN_H / 2.0;
    match state.phase {
        GamePhase::NotStarted => {
            draw_text_centered("ATARI BREAKOUT", cx, cy - 50.0, TITLE_SCALE, colors::YELLOW, &mut verts);
            draw_text_centered("CLICK TO START", cx, cy + 20.0, HUD_SCALE, colors::WHITE, &mut verts);
        }
        GamePhase::GameOver => {
            draw_text_centered("GAME OVER", cx, cy - 50.0, TITLE_SCALE, colors::RED, &mut verts);
            draw_text_centered("PRESS R TO RESTART", cx, cy + 20.0, HUD_SCALE, colors::WHITE, &mut verts);
        }
        GamePhase::Playing => {}
    }

    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroying_a_brick_shrinks_the_scene() {
        let mut state = GameState::new(7);
        let before = scene_vertices(&state).len();
        state.bricks[0].destroyed = true;
        let after = scene_vertices(&state).len();
        // One brick quad (6 verts) and its outline (24 verts) gone
        assert_eq!(before - after, 30);
    }

    #[test]
    fn test_title_overlay_only_before_start() {
        let mut state = GameState::new(7);
        let with_title = scene_vertices(&state).len();
        state.phase = GamePhase::Playing;
        let without = scene_vertices(&state).len();
        assert!(with_title > without);
    }

    #[test]
    fn test_game_over_overlay_is_drawn() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Playing;
        let playing = scene_vertices(&state).len();
        state.phase = GamePhase::GameOver;
        let over = scene_vertices(&state).len();
        assert!(over > playing);
    }
}
