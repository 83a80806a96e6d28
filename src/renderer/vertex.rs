//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color. Positions are in screen
/// pixels (y down); the pipeline maps them to NDC at upload time.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Atari 2600-styled palette
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [0.890, 0.118, 0.141, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.584, 0.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 0.847, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.471, 1.0, 1.0];
    pub const PURPLE: [f32; 4] = [0.706, 0.235, 0.863, 1.0];
    /// Dim blue-grey for the CRT scanline overlay
    pub const SCANLINE: [f32; 4] = [0.078, 0.078, 0.118, 1.0];

    /// Brick row colors cycle over this palette, top row first
    pub const BRICK_PALETTE: [[f32; 4]; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];

    pub fn brick_row(row: usize) -> [f32; 4] {
        BRICK_PALETTE[row % BRICK_PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::colors;

    #[test]
    fn test_brick_palette_cycles() {
        assert_eq!(colors::brick_row(0), colors::RED);
        assert_eq!(colors::brick_row(5), colors::PURPLE);
        // Rows 6 and 7 wrap back to the start of the palette
        assert_eq!(colors::brick_row(6), colors::RED);
        assert_eq!(colors::brick_row(7), colors::ORANGE);
    }
}
