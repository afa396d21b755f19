//! WebGPU rendering module
//!
//! The scene is built on the CPU as a colored triangle list in screen
//! pixels and drawn with a single pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, pixels_to_ndc};
pub use vertex::Vertex;
