//! Gaussian weight vectors shared by the DoG stages.

pub mod gaussian;

pub use gaussian::{gauss, gaussian_vector, GAUSSIAN_THRESHOLD};
