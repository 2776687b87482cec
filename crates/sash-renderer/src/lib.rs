pub mod border;
pub mod gpu;
pub mod quad;
pub mod render_state;
pub mod scale;

pub use border::{BorderRects, RectSink};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use quad::{QuadInstance, QuadRenderer};
pub use render_state::RenderState;
pub use scale::pt_to_px;
