//! Shared utility helpers.

pub mod error;
pub(crate) mod math;
pub(crate) mod par;

pub use error::{CldError, CldResult, ErrorKind};
