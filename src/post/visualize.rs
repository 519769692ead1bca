//! Line integral convolution preview of a tangent field.
//!
//! White noise is smeared along the flow: every pixel averages the noise met
//! on a short walk in both directions, which draws streaks that follow the
//! field. The noise is generated at half resolution and upsampled with
//! nearest-neighbour so the streaks are wider than one pixel. Walks wrap
//! around the image borders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::etf::EdgeTangentField;
use crate::image::Raster;
use crate::trace::trace_span;
use crate::util::math::to_u8;
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// Walk length in each direction.
pub const LIC_STEPS: usize = 10;

/// Renders the tangent field as flow-aligned streaks of noise.
///
/// The same `seed` always gives the same picture.
pub fn visualize_etf(etf: &EdgeTangentField, seed: u64, parallel: bool) -> CldResult<Raster<u8>> {
    let _span = trace_span!("visualize_etf", steps = LIC_STEPS).entered();

    let width = etf.width();
    let height = etf.height();
    let noise = upsampled_noise(width, height, seed);

    let sigma = 2.0 * (LIC_STEPS * LIC_STEPS) as f32;
    let weights: Vec<f32> = (0..LIC_STEPS)
        .map(|k| (-((k * k) as f32) / sigma).exp() / (std::f32::consts::PI * sigma))
        .collect();

    let mut out = vec![0u8; width * height];
    for_each_row(&mut out, width, parallel, |y, row| {
        for (x, dst) in row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            let mut weight_sum = 0.0f32;
            for sign in [1.0f32, -1.0] {
                let mut px = x as f32;
                let mut py = y as f32;
                for &w in &weights {
                    let v = etf.tangent(wrap(px, width), wrap(py, height)) * sign;
                    let l1 = v.x.abs() + v.y.abs();
                    if l1 > 0.0 {
                        px += v.x / l1;
                        py += v.y / l1;
                    }
                    acc += w * noise[wrap(py, height) * width + wrap(px, width)];
                    weight_sum += w;
                }
            }
            *dst = to_u8(acc / weight_sum * 255.0);
        }
    });

    Raster::new(out, width, height)
}

fn upsampled_noise(width: usize, height: usize, seed: u64) -> Vec<f32> {
    let coarse_w = (width / 2).max(1);
    let coarse_h = (height / 2).max(1);
    let mut rng = StdRng::seed_from_u64(seed);
    let coarse: Vec<f32> = (0..coarse_w * coarse_h).map(|_| rng.random()).collect();

    let mut noise = Vec::with_capacity(width * height);
    for y in 0..height {
        let cy = (y * coarse_h / height).min(coarse_h - 1);
        for x in 0..width {
            let cx = (x * coarse_w / width).min(coarse_w - 1);
            noise.push(coarse[cy * coarse_w + cx]);
        }
    }
    noise
}

#[inline]
fn wrap(p: f32, len: usize) -> usize {
    (p.floor() as i64).rem_euclid(len as i64) as usize
}
