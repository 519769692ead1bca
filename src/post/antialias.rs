//! Softening of the binary drawing.

use crate::image::blur::gaussian_blur;
use crate::image::Raster;
use crate::util::math::to_u8;
use crate::util::CldResult;

/// Stretches `src` to `[0, 255]` and blurs it with a `blur_size` Gaussian.
pub fn anti_alias(src: &Raster<u8>, blur_size: usize, parallel: bool) -> CldResult<Raster<u8>> {
    let mut stretched = src.map(f32::from);
    stretched.normalize_min_max(0.0, 255.0);
    gaussian_blur(&stretched.map(to_u8), blur_size, parallel)
}

#[cfg(test)]
mod tests {
    use super::anti_alias;
    use crate::image::Raster;

    #[test]
    fn softens_a_hard_line() {
        let mut src = Raster::filled(9, 9, 255u8).unwrap();
        for y in 0..9 {
            src.data_mut()[y * 9 + 4] = 0;
        }
        let out = anti_alias(&src, 3, false).unwrap();
        let center = out.at(4, 4);
        let side = out.at(3, 4);
        let far = out.at(1, 4);
        assert!(center < side && side < far);
        assert!(center > 0 && side < 255);
        assert_eq!(far, 255);
    }

    #[test]
    fn stretches_low_contrast_input() {
        let src = Raster::new(vec![100u8, 150, 100, 150, 100, 150, 100, 150, 100], 3, 3).unwrap();
        let out = anti_alias(&src, 1, false).unwrap();
        assert_eq!(out.data(), &[0, 255, 0, 255, 0, 255, 0, 255, 0]);
    }
}
