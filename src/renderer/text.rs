//! Bitmap text rendered as quads
//!
//! A 3x5 pixel font covering just the characters the HUD and overlays
//! use. Each lit cell becomes one scaled quad; no textures, no atlas.

use super::shapes::quad;
use super::vertex::Vertex;
use crate::sim::Rect;

pub const GLYPH_W: f32 = 3.0;
pub const GLYPH_H: f32 = 5.0;
/// Glyph cell plus one column of spacing
const ADVANCE: f32 = GLYPH_W + 1.0;

/// 3x5 glyph bitmaps, row-major. Unknown characters render as blanks.
#[rustfmt::skip]
fn glyph(ch: char) -> [u8; 15] {
    match ch {
        '0' => [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        '1' => [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1],
        '2' => [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1],
        '3' => [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1],
        '4' => [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1],
        '5' => [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1],
        '6' => [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1],
        '7' => [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0],
        '8' => [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1],
        '9' => [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1],
        'A' => [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'B' => [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0],
        'C' => [0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1],
        'E' => [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1],
        'G' => [0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1],
        'I' => [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1],
        'K' => [1,0,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'L' => [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1],
        'M' => [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1],
        'O' => [0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        'P' => [1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0],
        'R' => [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'S' => [0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0],
        'T' => [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0],
        'U' => [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        'V' => [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        ':' => [0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0],
        _ => [0; 15],
    }
}

/// Pixel width of `text` at `scale` (trailing gap excluded)
pub fn text_width(text: &str, scale: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        0.0
    } else {
        (count * ADVANCE - 1.0) * scale
    }
}

/// Append quads for `text` with its top-left corner at `(x, y)`.
/// `scale` is pixels per glyph cell.
pub fn draw_text(text: &str, x: f32, y: f32, scale: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let mut cursor_x = x;
    for ch in text.chars() {
        let bits = glyph(ch);
        for row in 0..GLYPH_H as usize {
            for col in 0..GLYPH_W as usize {
                if bits[row * GLYPH_W as usize + col] == 1 {
                    quad(
                        &Rect::new(
                            cursor_x + col as f32 * scale,
                            y + row as f32 * scale,
                            scale,
                            scale,
                        ),
                        color,
                        out,
                    );
                }
            }
        }
        cursor_x += ADVANCE * scale;
    }
}

/// Append quads for `text` centered horizontally on `cx`
pub fn draw_text_centered(
    text: &str,
    cx: f32,
    y: f32,
    scale: f32,
    color: [f32; 4],
    out: &mut Vec<Vertex>,
) {
    draw_text(text, cx - text_width(text, scale) / 2.0, y, scale, color, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1.0), 0.0);
        // One glyph: 3 cells, no trailing gap
        assert_eq!(text_width("0", 1.0), 3.0);
        // Two glyphs: 3 + 1 + 3 cells, doubled by scale
        assert_eq!(text_width("00", 2.0), 14.0);
    }

    #[test]
    fn test_draw_text_emits_quads_for_lit_cells() {
        let mut out = Vec::new();
        // '1' lights 8 of 15 cells
        draw_text("1", 0.0, 0.0, 1.0, colors::WHITE, &mut out);
        assert_eq!(out.len(), 8 * 6);
    }

    #[test]
    fn test_unknown_characters_render_blank() {
        let mut out = Vec::new();
        draw_text("???", 0.0, 0.0, 1.0, colors::WHITE, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_centered_text_is_symmetric() {
        let mut out = Vec::new();
        draw_text_centered("88", 100.0, 0.0, 2.0, colors::WHITE, &mut out);
        let min_x = out
            .iter()
            .map(|v| v.position[0])
            .fold(f32::INFINITY, f32::min);
        let max_x = out
            .iter()
            .map(|v| v.position[0])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((100.0 - min_x - (max_x - 100.0)).abs() < 1e-4);
    }
}
