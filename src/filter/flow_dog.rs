//! Integration of the gradient DoG response along the tangent flow.

use crate::etf::{EdgeTangentField, Vec2};
use crate::image::Raster;
use crate::util::math::pixel_index;
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// Smooths `dog` along the flow and maps the result into `(0, 1]`.
///
/// For every pixel two walks leave the pixel, one following the tangent and
/// one against it, each for at most `gvm.len() - 1` steps. A walk ends early
/// on a zero tangent or when it leaves the raster. The walks start at the
/// pixel itself, so a negative center tap keeps the center counted once.
/// Positive averages saturate to `1`, the rest map to `1 + tanh(avg)`. The
/// output is then stretched to `[0, 1]`.
pub(crate) fn flow_dog(
    dog: &Raster<f32>,
    etf: &EdgeTangentField,
    gvm: &[f64],
    parallel: bool,
) -> CldResult<Raster<f32>> {
    let width = dog.width();
    let height = dog.height();
    let steps = gvm.len() - 1;

    let mut out = vec![0.0f32; width * height];
    for_each_row(&mut out, width, parallel, |y, row| {
        for (x, dst) in row.iter_mut().enumerate() {
            let center = f64::from(dog.at(x, y));
            let mut acc = -gvm[0] * center;
            let mut weight = -gvm[0];

            for sign in [1.0f32, -1.0] {
                let (a, w) = walk(dog, etf, gvm, steps, x, y, sign);
                acc += a;
                weight += w;
            }

            let avg = if weight != 0.0 { acc / weight } else { center };
            *dst = if avg > 0.0 { 1.0 } else { (1.0 + avg.tanh()) as f32 };
        }
    });

    let mut out = Raster::new(out, width, height)?;
    out.normalize_min_max(0.0, 1.0);
    Ok(out)
}

/// Accumulates weighted samples along `sign * tangent`, returning
/// `(sum, weight)`.
fn walk(
    dog: &Raster<f32>,
    etf: &EdgeTangentField,
    gvm: &[f64],
    steps: usize,
    x: usize,
    y: usize,
    sign: f32,
) -> (f64, f64) {
    let width = dog.width();
    let height = dog.height();
    let mut pos = Vec2::new(x as f32, y as f32);
    let mut acc = 0.0f64;
    let mut weight = 0.0f64;

    for &w in gvm.iter().take(steps) {
        let (Some(px), Some(py)) = (pixel_index(pos.x, width), pixel_index(pos.y, height)) else {
            break;
        };
        let direction = etf.tangent(px, py) * sign;
        if direction.is_zero() {
            break;
        }

        acc += f64::from(dog.at(px, py)) * w;
        weight += w;
        pos = pos + direction;
    }

    (acc, weight)
}
