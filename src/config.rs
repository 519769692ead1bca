//! Pipeline configuration.

use crate::util::{CldError, CldResult};

/// Tuning knobs for the line drawing pipeline.
///
/// Short parameter names used by the command line front end are given in
/// brackets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CldConfig {
    /// Ratio between the surround and center sigmas of the gradient DoG (`sr`).
    pub sigma_r: f64,
    /// Sigma of the integration along the flow (`sm`).
    pub sigma_m: f64,
    /// Center sigma of the gradient DoG (`sc`).
    pub sigma_c: f64,
    /// Weight of the surround response (`rho`).
    pub rho: f64,
    /// Binarization threshold in `[0, 1]` (`tau`).
    pub tau: f32,
    /// Half-width of the ETF refinement neighbourhood (`k`).
    pub etf_kernel: usize,
    /// Number of ETF refinement passes (`ei`).
    pub etf_iterations: usize,
    /// Number of recombine-and-filter passes after the first one (`di`).
    pub fdog_iterations: usize,
    /// Size of the Gaussian blur used between passes and for anti-aliasing (`bl`).
    pub blur_size: usize,
    /// Soften the final binary output (`ai`).
    pub anti_alias: bool,
    /// Distribute per-pixel work over the rayon pool when available.
    pub parallel: bool,
}

impl Default for CldConfig {
    fn default() -> Self {
        Self {
            sigma_r: 2.6,
            sigma_m: 3.0,
            sigma_c: 1.0,
            rho: 0.98,
            tau: 0.98,
            etf_kernel: 1,
            etf_iterations: 1,
            fdog_iterations: 1,
            blur_size: 3,
            anti_alias: false,
            parallel: true,
        }
    }
}

impl CldConfig {
    /// Checks every field that has a restricted domain.
    pub fn validate(&self) -> CldResult<()> {
        positive("sigma_r", self.sigma_r)?;
        positive("sigma_m", self.sigma_m)?;
        positive("sigma_c", self.sigma_c)?;
        positive("sigma_r * sigma_c", self.sigma_r * self.sigma_c)?;
        if !self.rho.is_finite() {
            return Err(CldError::InvalidConfig {
                field: "rho",
                reason: "must be finite",
            });
        }
        if !self.tau.is_finite() {
            return Err(CldError::InvalidConfig {
                field: "tau",
                reason: "must be finite",
            });
        }
        if self.blur_size == 0 || self.blur_size % 2 == 0 {
            return Err(CldError::InvalidConfig {
                field: "blur_size",
                reason: "must be odd and positive",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> CldResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CldError::InvalidConfig {
            field,
            reason: "must be positive and finite",
        })
    }
}
