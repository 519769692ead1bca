//! 3x3 Sobel gradients with clamped borders.

use crate::image::Raster;
use crate::util::par::for_each_row;

use super::Vec2;

/// Computes the `(gx, gy)` Sobel response of every pixel.
///
/// Taps are combined as paired differences, so a flat neighbourhood gives an
/// exact zero.
pub(crate) fn sobel(src: &Raster<f32>, parallel: bool) -> Vec<Vec2> {
    let w = src.width();
    let h = src.height();
    let mut out = vec![Vec2::ZERO; w * h];

    for_each_row(&mut out, w, parallel, |y, row| {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let (top, mid, bot) = (src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2]));
        for (x, g) in row.iter_mut().enumerate() {
            let (l, c, r) = (x.saturating_sub(1), x, (x + 1).min(w - 1));
            let gx = (top[r] - top[l]) + 2.0 * (mid[r] - mid[l]) + (bot[r] - bot[l]);
            let gy = (bot[l] - top[l]) + 2.0 * (bot[c] - top[c]) + (bot[r] - top[r]);
            *g = Vec2::new(gx, gy);
        }
    });

    out
}
