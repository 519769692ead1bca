//! Separable Gaussian blur for 8-bit rasters.
//!
//! Kernel selection follows the `sigma = 0` convention of OpenCV's
//! `getGaussianKernel`: sizes 1, 3, 5 and 7 use fixed binomial taps, larger
//! sizes derive `sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`. Samples outside
//! the raster read as zero (constant border).

use crate::image::Raster;
use crate::util::math::to_u8;
use crate::util::par::for_each_row;
use crate::util::{CldError, CldResult};

const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
    ],
];

/// Returns the normalized 1D kernel used for a blur of size `ksize`.
pub fn blur_kernel(ksize: usize) -> CldResult<Vec<f32>> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(CldError::InvalidConfig {
            field: "blur_size",
            reason: "must be odd and positive",
        });
    }
    if ksize <= 7 {
        return Ok(SMALL_KERNELS[ksize / 2].to_vec());
    }

    let sigma = 0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let radius = (ksize / 2) as f64;
    let mut taps: Vec<f64> = (0..ksize)
        .map(|i| {
            let x = i as f64 - radius;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    Ok(taps.into_iter().map(|t| t as f32).collect())
}

/// Blurs `src` with a `ksize x ksize` Gaussian and returns a new raster.
pub fn gaussian_blur(src: &Raster<u8>, ksize: usize, parallel: bool) -> CldResult<Raster<u8>> {
    let kernel = blur_kernel(ksize)?;
    let width = src.width();
    let height = src.height();
    let radius = kernel.len() / 2;

    let mut horizontal = vec![0.0f32; width * height];
    for_each_row(&mut horizontal, width, parallel, |y, row| {
        let src_row = src.row(y);
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                let sx = x as isize + k as isize - radius as isize;
                if sx >= 0 && (sx as usize) < width {
                    acc += f32::from(src_row[sx as usize]) * w;
                }
            }
            *out = acc;
        }
    });

    let mut data = vec![0u8; width * height];
    for_each_row(&mut data, width, parallel, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &w) in kernel.iter().enumerate() {
                let sy = y as isize + k as isize - radius as isize;
                if sy >= 0 && (sy as usize) < height {
                    acc += horizontal[sy as usize * width + x] * w;
                }
            }
            *out = to_u8(acc);
        }
    });

    Raster::new(data, width, height)
}

#[cfg(test)]
mod tests {
    use super::{blur_kernel, gaussian_blur};
    use crate::image::Raster;

    #[test]
    fn kernels_sum_to_one() {
        for ksize in [1, 3, 5, 7, 9, 15] {
            let k = blur_kernel(ksize).unwrap();
            assert_eq!(k.len(), ksize);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "ksize {ksize}");
        }
    }

    #[test]
    fn even_or_zero_size_is_rejected() {
        assert!(blur_kernel(0).is_err());
        assert!(blur_kernel(4).is_err());
    }

    #[test]
    fn size_one_is_identity() {
        let src = Raster::new((0u8..12).collect(), 4, 3).unwrap();
        let out = gaussian_blur(&src, 1, false).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn interior_of_flat_raster_is_preserved() {
        let src = Raster::filled(9, 9, 200u8).unwrap();
        let out = gaussian_blur(&src, 3, false).unwrap();
        assert_eq!(out.at(4, 4), 200);
        // Constant zero border darkens the frame.
        assert!(out.at(0, 0) < 200);
    }
}
