//! Truncated one-sided Gaussian vectors.
//!
//! `gaussian_vector(sigma)[i]` is the Gaussian density at offset `i`, starting
//! from the peak. Both DoG stages index it by absolute offset, so the vector is
//! used symmetrically.

use crate::util::{CldError, CldResult};

/// Weights below this value end the vector.
pub const GAUSSIAN_THRESHOLD: f64 = 0.001;

/// Normal density with the given mean and standard deviation.
#[inline]
pub fn gauss(x: f64, mean: f64, sigma: f64) -> f64 {
    let d = x - mean;
    (-(d * d) / (2.0 * sigma * sigma)).exp() / (std::f64::consts::TAU * sigma * sigma).sqrt()
}

/// Builds the truncated Gaussian vector for `sigma`.
///
/// The vector ends with the first weight that falls below
/// [`GAUSSIAN_THRESHOLD`], so it always holds the peak plus at least one tail
/// sample and its last element is below the threshold.
pub fn gaussian_vector(sigma: f64) -> CldResult<Vec<f64>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CldError::InvalidConfig {
            field: "sigma",
            reason: "must be positive and finite",
        });
    }

    let peak = gauss(0.0, 0.0, sigma);
    if !peak.is_finite() || peak <= 0.0 {
        return Err(CldError::Degenerate {
            reason: "gaussian peak is not a positive finite number",
        });
    }

    let mut weights = vec![peak];
    let mut i = 1usize;
    loop {
        let w = gauss(i as f64, 0.0, sigma);
        weights.push(w);
        // NaN also ends the vector.
        if !(w >= GAUSSIAN_THRESHOLD) {
            break;
        }
        i += 1;
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::{gauss, gaussian_vector, GAUSSIAN_THRESHOLD};
    use crate::util::ErrorKind;

    #[test]
    fn unit_sigma_has_five_taps() {
        let g = gaussian_vector(1.0).unwrap();
        assert_eq!(g.len(), 5);
        assert!((g[0] - 0.398_942_28).abs() < 1e-6);
        assert!((g[1] - 0.241_970_72).abs() < 1e-6);
    }

    #[test]
    fn vector_is_non_increasing_and_truncated() {
        for sigma in [0.5, 1.0, 2.6, 3.0, 7.5, 20.0] {
            let g = gaussian_vector(sigma).unwrap();
            assert!(g.len() >= 2);
            assert!(g.windows(2).all(|w| w[1] <= w[0]));
            assert!(*g.last().unwrap() < GAUSSIAN_THRESHOLD);
            assert!(g[g.len() - 2] >= GAUSSIAN_THRESHOLD);
        }
    }

    #[test]
    fn doubling_sigma_grows_the_vector() {
        for sigma in [0.5, 1.0, 1.3, 2.6, 3.0, 10.0, 25.0] {
            let short = gaussian_vector(sigma).unwrap().len();
            let long = gaussian_vector(2.0 * sigma).unwrap().len();
            assert!(long > short, "sigma {sigma}: {long} <= {short}");
        }
    }

    #[test]
    fn invalid_sigma_is_a_configuration_error() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = gaussian_vector(sigma).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn underflowing_sigma_is_a_computation_error() {
        let err = gaussian_vector(f64::MIN_POSITIVE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Computation);
    }

    #[test]
    fn gauss_is_symmetric_around_mean() {
        assert!((gauss(1.5, 1.0, 2.0) - gauss(0.5, 1.0, 2.0)).abs() < 1e-12);
    }
}
