//! Low-level building blocks for custom pipelines.
//!
//! Most users should prefer [`draw_lines`](crate::draw_lines) or
//! [`LineDrawing`](crate::LineDrawing); these re-exports expose the
//! individual stages.

pub use crate::filter::binary_threshold;
pub use crate::image::blur::{blur_kernel, gaussian_blur};
pub use crate::kernel::{gauss, gaussian_vector, GAUSSIAN_THRESHOLD};
