use sash_common::Color;

/// A single filled rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuadInstance {
    /// Position and size in pixels: [x, y, width, height].
    pub rect: [f32; 4],
    /// RGBA color, each component 0.0..=1.0.
    pub color: [f32; 4],
}

impl QuadInstance {
    /// Build an instance from edge coordinates and a packed `0xRRGGBBAA` color.
    ///
    /// This is the boundary where packed colors become float RGBA. A
    /// zero-area input produces a zero-size instance, which rasterizes
    /// to nothing.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32, color: u32) -> Self {
        Self {
            rect: [left, top, right - left, bottom - top],
            color: Color::from_packed(color).to_rgba_f32(),
        }
    }
}

/// Unit quad vertices (2D position).
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
}

/// Uniform buffer holding the viewport resolution.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Uniforms {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

pub(crate) const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.0, 0.0],
    }, // top-left
    Vertex {
        position: [1.0, 0.0],
    }, // top-right
    Vertex {
        position: [1.0, 1.0],
    }, // bottom-right
    Vertex {
        position: [0.0, 1.0],
    }, // bottom-left
];

pub(crate) const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

pub(crate) const MAX_INSTANCES: u32 = 1024;
