//! Mote Render - wgpu renderer for the demos
//!
//! Two pipelines over one shared context: instanced 2D quads (runner and
//! motion scenes) and the additive text-formation particle field. Both pull
//! instances from storage buffers; neither needs a depth pass.

mod context;
mod field_pipeline;
mod quad_pipeline;

pub use context::{RenderContext, RenderError};
pub use field_pipeline::FieldPipeline;
pub use quad_pipeline::{QuadInstanceGpu, QuadPipeline, QuadUniforms};
