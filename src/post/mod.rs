//! Cosmetic post-processing of the drawing and a tangent field preview.

mod antialias;
mod visualize;

pub use antialias::anti_alias;
pub use visualize::{visualize_etf, LIC_STEPS};
