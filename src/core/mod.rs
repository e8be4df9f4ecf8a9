pub mod canvas;
pub mod gpu_context;
pub mod surface_renderer;
pub mod timing;

pub use canvas::Canvas;
pub use gpu_context::GpuContext;
pub use surface_renderer::SurfaceRenderer;
pub use timing::{Clock, FramePacer};
