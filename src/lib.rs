//! cldraw turns grayscale photographs into coherent line drawings.
//!
//! The pipeline follows the flow-based DoG approach: an Edge Tangent Flow
//! field is built from image gradients and smoothed, a difference of
//! Gaussians is taken across the flow and integrated along it, and the result
//! is thresholded into black lines on white. Extra passes burn the lines back
//! into the image to strengthen them. Per-pixel work is row-parallel with the
//! `rayon` feature (on by default).
//!
//! ```no_run
//! use cldraw::{draw_lines, CldConfig, ImageView};
//!
//! # fn main() -> cldraw::CldResult<()> {
//! let pixels = vec![0u8; 64 * 48];
//! let view = ImageView::from_slice(&pixels, 64, 48)?;
//! let drawing = draw_lines(view, &CldConfig::default())?;
//! assert_eq!(drawing.width(), 64);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drawing;
pub mod etf;
pub mod filter;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod post;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{ImageView, Raster};

pub use config::CldConfig;
pub use drawing::{draw_lines, LineDrawing};
pub use etf::{EdgeTangentField, Vec2};
pub use filter::FlowDog;
pub use post::{anti_alias, visualize_etf};
pub use util::{CldError, CldResult, ErrorKind};
