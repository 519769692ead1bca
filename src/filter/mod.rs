//! Flow-guided difference of Gaussians.
//!
//! A pass runs three stages, each a full sweep over the raster:
//! 1. `gradient_dog`: a 1D DoG across the edge, steered by the tangent field;
//! 2. `flow_dog`: Gaussian integration of that response along the flow;
//! 3. `binary_threshold`: cut at `tau`.
//!
//! The tangent field is only read here, so the stages need no locking.

mod flow_dog;
mod gradient_dog;
mod threshold;

pub use threshold::binary_threshold;

use crate::config::CldConfig;
use crate::etf::EdgeTangentField;
use crate::image::raster::ensure_dims;
use crate::image::Raster;
use crate::kernel::gaussian_vector;
use crate::trace::trace_span;
use crate::util::{CldError, CldResult};

/// Precomputed kernels and thresholds for the flow-guided DoG.
#[derive(Clone, Debug)]
pub struct FlowDog {
    gvc: Vec<f64>,
    gvs: Vec<f64>,
    gvm: Vec<f64>,
    rho: f64,
    tau: f32,
    parallel: bool,
}

impl FlowDog {
    /// Builds the center, surround and flow kernels from `cfg`.
    pub fn new(cfg: &CldConfig) -> CldResult<Self> {
        let gvc = gaussian_vector(cfg.sigma_c).map_err(|err| rename_sigma(err, "sigma_c"))?;
        let gvs = gaussian_vector(cfg.sigma_r * cfg.sigma_c)
            .map_err(|err| rename_sigma(err, "sigma_r"))?;
        let gvm = gaussian_vector(cfg.sigma_m).map_err(|err| rename_sigma(err, "sigma_m"))?;
        Ok(Self {
            gvc,
            gvs,
            gvm,
            rho: cfg.rho,
            tau: cfg.tau,
            parallel: cfg.parallel,
        })
    }

    /// Center (narrow) Gaussian vector.
    pub fn center_kernel(&self) -> &[f64] {
        &self.gvc
    }

    /// Surround (wide) Gaussian vector.
    pub fn surround_kernel(&self) -> &[f64] {
        &self.gvs
    }

    /// Flow integration Gaussian vector.
    pub fn flow_kernel(&self) -> &[f64] {
        &self.gvm
    }

    /// DoG across the edge at every pixel of `src` (values in `[0, 1]`).
    pub fn gradient_dog(
        &self,
        src: &Raster<f32>,
        etf: &EdgeTangentField,
    ) -> CldResult<Raster<f32>> {
        ensure_dims(etf.width(), etf.height(), src.width(), src.height())?;
        let _span = trace_span!("gradient_dog", kernel = self.gvs.len() - 1).entered();
        gradient_dog::gradient_dog(src, etf, &self.gvc, &self.gvs, self.rho, self.parallel)
    }

    /// Flow integration of a gradient DoG raster, normalized to `[0, 1]`.
    pub fn flow_dog(&self, dog: &Raster<f32>, etf: &EdgeTangentField) -> CldResult<Raster<f32>> {
        ensure_dims(etf.width(), etf.height(), dog.width(), dog.height())?;
        let _span = trace_span!("flow_dog", steps = self.gvm.len() - 1).entered();
        flow_dog::flow_dog(dog, etf, &self.gvm, self.parallel)
    }

    /// Thresholds a flow DoG raster at the configured `tau`.
    pub fn binarize(&self, fdog: &Raster<f32>) -> CldResult<Raster<u8>> {
        binary_threshold(fdog, self.tau, self.parallel)
    }

    /// Runs all three stages on an 8-bit source and returns the binary edges.
    pub fn apply(&self, src: &Raster<u8>, etf: &EdgeTangentField) -> CldResult<Raster<u8>> {
        let src = src.to_unit_f32();
        let dog = self.gradient_dog(&src, etf)?;
        let fdog = self.flow_dog(&dog, etf)?;
        self.binarize(&fdog)
    }
}

fn rename_sigma(err: CldError, field: &'static str) -> CldError {
    match err {
        CldError::InvalidConfig { reason, .. } => CldError::InvalidConfig { field, reason },
        other => other,
    }
}
