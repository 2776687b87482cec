//! GPU-accelerated filled rectangle renderer using instanced drawing.
//!
//! The backend half of the border compositor: rectangles accumulated
//! through the [`crate::border::RectSink`] interface are uploaded as quad
//! instances and drawn in one indexed call per frame.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::QuadInstance;

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn quad_instance_size() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 32); // 8 floats * 4 bytes
    }

    #[test]
    fn vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8); // 2 floats * 4 bytes
    }

    #[test]
    fn uniforms_size() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 16); // 4 floats * 4 bytes
    }

    #[test]
    fn quad_indices_form_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        // Triangle 1: 0-1-2, Triangle 2: 0-2-3
        assert_eq!(&QUAD_INDICES[..3], &[0, 1, 2]);
        assert_eq!(&QUAD_INDICES[3..], &[0, 2, 3]);
    }

    #[test]
    fn quad_vertices_form_unit_quad() {
        assert_eq!(QUAD_VERTICES.len(), 4);
        assert_eq!(QUAD_VERTICES[0].position, [0.0, 0.0]);
        assert_eq!(QUAD_VERTICES[1].position, [1.0, 0.0]);
        assert_eq!(QUAD_VERTICES[2].position, [1.0, 1.0]);
        assert_eq!(QUAD_VERTICES[3].position, [0.0, 1.0]);
    }

    #[test]
    fn from_edges_converts_to_origin_and_size() {
        let q = QuadInstance::from_edges(10.0, 20.0, 50.0, 80.0, 0xff000080);
        assert_eq!(q.rect, [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(q.color[0], 1.0);
        assert_eq!(q.color[1], 0.0);
        assert_eq!(q.color[2], 0.0);
        assert!((q.color[3] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn from_edges_zero_area_is_zero_size() {
        let q = QuadInstance::from_edges(0.0, 0.0, 0.0, 0.0, 0);
        assert_eq!(q.rect, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(q.color, [0.0, 0.0, 0.0, 0.0]);
    }
}
