//! Edge Tangent Flow: a smooth field of edge-tangent directions.
//!
//! The field is seeded from Sobel gradients rotated by 90 degrees, so every
//! vector follows the local isophote. Refinement passes then average each
//! vector with its neighbours, favouring strong edges and aligned directions.
//! Every cell is either a unit vector or exactly zero (no gradient).

mod gradient;
mod vector;

pub use vector::Vec2;

use crate::image::{ImageView, Raster};
use crate::trace::{trace_event, trace_span};
use crate::util::math::min_max;
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// Tangent directions plus the normalized gradient magnitude of the source.
#[derive(Clone, Debug)]
pub struct EdgeTangentField {
    width: usize,
    height: usize,
    flow: Vec<Vec2>,
    magnitude: Vec<f32>,
}

impl EdgeTangentField {
    /// Builds the initial field from a grayscale image.
    ///
    /// The image is stretched to `[0, 1]` before differentiation and the
    /// gradient magnitude is stretched to `[0, 1]` afterwards; a flat image
    /// yields an all-zero field.
    pub fn build(image: ImageView<'_, u8>, parallel: bool) -> CldResult<Self> {
        let _span = trace_span!("etf_build", width = image.width(), height = image.height())
            .entered();

        let mut src = Raster::from_view(image)?.to_unit_f32();
        src.normalize_min_max(0.0, 1.0);
        let width = src.width();
        let height = src.height();

        let grad = gradient::sobel(&src, parallel);

        let mut magnitude: Vec<f32> = grad.iter().map(|g| g.norm()).collect();
        let (min, max) = min_max(&magnitude);
        let range = max - min;
        if range > 0.0 {
            for m in &mut magnitude {
                *m = (*m - min) / range;
            }
        } else {
            magnitude.iter_mut().for_each(|m| *m = 0.0);
        }

        let flow = grad.iter().map(|g| g.rotate_ccw().normalized()).collect();

        Ok(Self {
            width,
            height,
            flow,
            magnitude,
        })
    }

    /// Runs one smoothing pass with a neighbourhood of half-width
    /// `kernel_radius`.
    ///
    /// Each output vector is computed from the field as it was before the
    /// pass; the new field replaces the old one only once every cell is done.
    pub fn refine(&mut self, kernel_radius: usize, parallel: bool) {
        let _span = trace_span!("etf_refine", kernel = kernel_radius).entered();

        let mut next = vec![Vec2::ZERO; self.flow.len()];
        let prev = &*self;
        for_each_row(&mut next, self.width, parallel, |y, row| {
            for (x, out) in row.iter_mut().enumerate() {
                *out = prev.refined_at(x, y, kernel_radius);
            }
        });
        self.flow = next;
    }

    /// Runs `iterations` refinement passes.
    pub fn refine_n(&mut self, kernel_radius: usize, iterations: usize, parallel: bool) {
        for pass in 0..iterations {
            self.refine(kernel_radius, parallel);
            trace_event!("etf_pass", pass = pass);
        }
    }

    fn refined_at(&self, x: usize, y: usize, r: usize) -> Vec2 {
        let idx = y * self.width + x;
        let t_p = self.flow[idx];
        let m_p = self.magnitude[idx];

        let y0 = y.saturating_sub(r);
        let y1 = (y + r).min(self.height - 1);
        let x0 = x.saturating_sub(r);
        let x1 = (x + r).min(self.width - 1);
        let reach = r as f32 + 1.0;

        let mut acc = Vec2::ZERO;
        for qy in y0..=y1 {
            for qx in x0..=x1 {
                let dx = qx as f32 - x as f32;
                let dy = qy as f32 - y as f32;
                let dist = dx.hypot(dy);
                if dist > r as f32 {
                    continue;
                }
                let q = qy * self.width + qx;
                let t_q = self.flow[q];

                let ws = 1.0 - dist / reach;
                let wm = 0.5 * (1.0 + (self.magnitude[q] - m_p).tanh());
                let dot = t_p.dot(t_q);
                let aligned = if dot > 0.0 { t_q } else { -t_q };
                let wd = dot.abs();

                acc = acc + aligned * (ws * wm * wd);
            }
        }

        if acc.is_zero() {
            t_p
        } else {
            acc.normalized()
        }
    }

    #[cfg(test)]
    pub(crate) fn from_flow(width: usize, height: usize, flow: Vec<Vec2>) -> Self {
        assert_eq!(flow.len(), width * height);
        Self {
            width,
            height,
            magnitude: vec![0.0; flow.len()],
            flow,
        }
    }

    /// Returns the field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the tangent at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn tangent(&self, x: usize, y: usize) -> Vec2 {
        self.flow[y * self.width + x]
    }

    /// Returns the normalized gradient magnitude at `(x, y)`.
    #[inline]
    pub fn magnitude(&self, x: usize, y: usize) -> f32 {
        self.magnitude[y * self.width + x]
    }

    /// Returns all tangents in row-major order.
    pub fn flow(&self) -> &[Vec2] {
        &self.flow
    }

    /// Returns all magnitudes in row-major order.
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeTangentField, Vec2};
    use crate::image::ImageView;

    fn is_zero_or_unit(v: Vec2) -> bool {
        v.is_zero() || (v.norm() - 1.0).abs() < 1e-5
    }

    fn ring(width: usize, height: usize) -> Vec<u8> {
        let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let d = (x as f32 - cx).hypot(y as f32 - cy);
                data.push(if (4.0..8.0).contains(&d) { 220 } else { 30 });
            }
        }
        data
    }

    #[test]
    fn flat_image_has_zero_field() {
        let data = vec![77u8; 36];
        let view = ImageView::from_slice(&data, 6, 6).unwrap();
        let etf = EdgeTangentField::build(view, false).unwrap();
        assert!(etf.flow().iter().all(|v| v.is_zero()));
        assert!(etf.magnitudes().iter().all(|&m| m == 0.0));
    }

    #[test]
    fn vectors_stay_unit_or_zero_through_refinement() {
        let data = ring(24, 20);
        let view = ImageView::from_slice(&data, 24, 20).unwrap();
        let mut etf = EdgeTangentField::build(view, false).unwrap();
        assert!(etf.flow().iter().copied().all(is_zero_or_unit));
        for kernel in [1, 2, 3] {
            etf.refine(kernel, false);
            assert!(etf.flow().iter().copied().all(is_zero_or_unit));
        }
    }

    #[test]
    fn zero_radius_refinement_is_a_no_op() {
        let data = ring(16, 16);
        let view = ImageView::from_slice(&data, 16, 16).unwrap();
        let mut etf = EdgeTangentField::build(view, false).unwrap();
        let before = etf.flow().to_vec();
        etf.refine(0, false);
        for (a, b) in before.iter().zip(etf.flow()) {
            assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
        }
    }

    fn thin_line(width: usize, height: usize, column: usize) -> Vec<u8> {
        (0..width * height)
            .map(|i| if i % width == column { 20 } else { 220 })
            .collect()
    }

    #[test]
    fn line_flanks_keep_their_orientation() {
        let data = thin_line(16, 12, 8);
        let view = ImageView::from_slice(&data, 16, 12).unwrap();
        let mut etf = EdgeTangentField::build(view, false).unwrap();
        let before = etf.flow().to_vec();

        // The two flanks of the line point in opposite directions.
        assert_eq!(etf.tangent(7, 5), Vec2::new(0.0, -1.0));
        assert_eq!(etf.tangent(9, 5), Vec2::new(0.0, 1.0));
        assert!(etf.tangent(8, 5).is_zero());

        for kernel in [1, 2, 3] {
            etf.refine(kernel, false);
            for (a, b) in before.iter().zip(etf.flow()) {
                if a.is_zero() {
                    assert!(b.is_zero());
                } else {
                    assert!(!b.is_zero());
                    assert!(a.dot(*b) > 0.0);
                }
            }
        }
    }

    #[test]
    fn opposite_neighbours_reinforce_instead_of_flipping() {
        // Center points right, every neighbour points left.
        let mut flow = vec![Vec2::new(-1.0, 0.0); 9];
        flow[4] = Vec2::new(1.0, 0.0);
        let mut etf = EdgeTangentField::from_flow(3, 3, flow);
        etf.refine(1, false);
        let t = etf.tangent(1, 1);
        assert!((t.x - 1.0).abs() < 1e-6 && t.y.abs() < 1e-6);
        // A neighbour with an opposite center nearby keeps its own sign too.
        assert!(etf.tangent(1, 0).x < 0.0);
    }

    #[test]
    fn refinement_reads_only_the_previous_field() {
        let data = ring(20, 18);
        let view = ImageView::from_slice(&data, 20, 18).unwrap();
        let mut etf = EdgeTangentField::build(view, false).unwrap();
        let snapshot = etf.clone();
        etf.refine(2, false);
        for y in 0..etf.height() {
            for x in 0..etf.width() {
                assert_eq!(etf.tangent(x, y), snapshot.refined_at(x, y, 2));
                assert_eq!(etf.magnitude(x, y), snapshot.magnitude(x, y));
            }
        }
    }

    #[test]
    fn magnitude_is_normalized() {
        let data = ring(16, 16);
        let view = ImageView::from_slice(&data, 16, 16).unwrap();
        let etf = EdgeTangentField::build(view, false).unwrap();
        let max = etf.magnitudes().iter().copied().fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-6);
        assert!(etf.magnitudes().iter().all(|&m| m >= 0.0));
    }
}
