//! Difference of Gaussians sampled across the edge.

use crate::etf::EdgeTangentField;
use crate::image::Raster;
use crate::util::math::pixel_index;
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// Per-pixel DoG along the gradient direction (the tangent rotated by -90
/// degrees).
///
/// `gvc` and `gvs` are the center and surround vectors; the sampling range is
/// set by the surround. Positions that fall outside the raster are skipped
/// and their weights are not counted.
pub(crate) fn gradient_dog(
    src: &Raster<f32>,
    etf: &EdgeTangentField,
    gvc: &[f64],
    gvs: &[f64],
    rho: f64,
    parallel: bool,
) -> CldResult<Raster<f32>> {
    let width = src.width();
    let height = src.height();
    let kernel = gvs.len() as isize - 1;

    let mut out = vec![0.0f32; width * height];
    for_each_row(&mut out, width, parallel, |y, row| {
        for (x, dst) in row.iter_mut().enumerate() {
            let gradient = etf.tangent(x, y).rotate_cw();

            let mut c_acc = 0.0f64;
            let mut s_acc = 0.0f64;
            let mut c_weight = 0.0f64;
            let mut s_weight = 0.0f64;
            for step in -kernel..=kernel {
                let sample_x = x as f32 + gradient.x * step as f32;
                let sample_y = y as f32 + gradient.y * step as f32;
                let (Some(sx), Some(sy)) =
                    (pixel_index(sample_x, width), pixel_index(sample_y, height))
                else {
                    continue;
                };
                let value = f64::from(src.at(sx, sy));

                let idx = step.unsigned_abs();
                let wc = gvc.get(idx).copied().unwrap_or(0.0);
                let ws = gvs[idx];
                c_acc += value * wc;
                s_acc += value * ws;
                c_weight += wc;
                s_weight += ws;
            }

            // The zero offset is always sampled, so both sums hold the peak.
            let vc = if c_weight > 0.0 { c_acc / c_weight } else { 0.0 };
            let vs = if s_weight > 0.0 { s_acc / s_weight } else { 0.0 };
            *dst = (vc - rho * vs) as f32;
        }
    });

    Raster::new(out, width, height)
}
