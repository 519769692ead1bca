//! Binarization of the flow DoG response.

use crate::image::Raster;
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// Maps samples below `tau` to `0` (line) and everything else to `255`.
pub fn binary_threshold(src: &Raster<f32>, tau: f32, parallel: bool) -> CldResult<Raster<u8>> {
    let width = src.width();
    let mut out = vec![0u8; src.data().len()];
    for_each_row(&mut out, width, parallel, |y, row| {
        for (dst, &h) in row.iter_mut().zip(src.row(y)) {
            *dst = if h < tau { 0 } else { 255 };
        }
    });
    Raster::new(out, width, src.height())
}
