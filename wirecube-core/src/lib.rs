/// wirecube core library - geometry, transforms and rasterization
///
/// Everything needed to turn a frame tick into a set of character cells:
/// fixed-shape matrix math, axis-angle rotations, the per-frame transform
/// pipeline and Bresenham line drawing. No terminal I/O happens here.

pub mod geometry;
pub mod matrix;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Edge, Wireframe};
pub use matrix::{Mat4, Mat4x8};
pub use pipeline::Pipeline;
pub use projection::Viewport;
pub use raster::Plot;
pub use transform::{Spin, Transform};
