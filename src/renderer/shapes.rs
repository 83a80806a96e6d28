//! Shape generation for 2D primitives
//!
//! Everything on screen is a quad; these helpers append the two triangles
//! for each into a shared vertex list.

use super::vertex::Vertex;
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: [f32; 4], out: &mut Vec<Vertex>) {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    out.push(Vertex::new(l, t, color));
    out.push(Vertex::new(r, t, color));
    out.push(Vertex::new(l, b, color));

    out.push(Vertex::new(r, t, color));
    out.push(Vertex::new(r, b, color));
    out.push(Vertex::new(l, b, color));
}

/// Rectangle border of `width` pixels, drawn as four quads inside the rect
pub fn outline(rect: &Rect, width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    quad(&Rect::new(rect.x, rect.y, rect.w, width), color, out);
    quad(
        &Rect::new(rect.x, rect.bottom() - width, rect.w, width),
        color,
        out,
    );
    quad(&Rect::new(rect.x, rect.y, width, rect.h), color, out);
    quad(
        &Rect::new(rect.right() - width, rect.y, width, rect.h),
        color,
        out,
    );
}

/// Horizontal scanlines across the full screen, one pixel high every
/// `stride` pixels, for the CRT look
pub fn scanlines(stride: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let mut y = 0.0;
    while y < SCREEN_H {
        quad(&Rect::new(0.0, y, SCREEN_W, 1.0), color, out);
        y += stride;
    }
}
