//! Owned contiguous rasters (`stride == width`).

use crate::image::ImageView;
use crate::util::math::min_max;
use crate::util::{CldError, CldResult};

/// Owned single-channel raster in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Raster<T> {
    /// Wraps a buffer of exactly `width * height` samples.
    pub fn new(data: Vec<T>, width: usize, height: usize) -> CldResult<Self> {
        let needed = area(width, height)?;
        if data.len() < needed {
            return Err(CldError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(CldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a raster with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> CldResult<Self> {
        let needed = area(width, height)?;
        Ok(Self {
            data: vec![value; needed],
            width,
            height,
        })
    }

    /// Copies a (possibly strided) view into a contiguous raster.
    pub fn from_view(view: ImageView<'_, T>) -> CldResult<Self> {
        let width = view.width();
        let height = view.height();
        let mut data = Vec::with_capacity(area(width, height)?);
        for y in 0..height {
            let row = view.row(y).ok_or(CldError::BufferTooSmall {
                needed: y * view.stride() + width,
                got: view.as_slice().len(),
            })?;
            data.extend_from_slice(row);
        }
        Self::new(data, width, height)
    }

    /// Returns a borrowed view of the raster.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the samples in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the samples mutably in row-major order.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the raster and returns its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the sample at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Returns row `y`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Applies `f` to every sample.
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Raster<U> {
        Raster {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Fails unless `other` has the same size as `self`.
    pub fn ensure_same_size<U: Copy>(&self, other: &Raster<U>) -> CldResult<()> {
        ensure_dims(self.width, self.height, other.width, other.height)
    }
}

impl Raster<u8> {
    /// Converts 8-bit samples to floats in `[0, 1]`.
    pub fn to_unit_f32(&self) -> Raster<f32> {
        self.map(|v| f32::from(v) / 255.0)
    }
}

impl Raster<f32> {
    /// Linearly rescales the samples so that the minimum maps to `lo` and the
    /// maximum maps to `hi`.
    ///
    /// A constant raster has no range to stretch and is left unchanged.
    pub fn normalize_min_max(&mut self, lo: f32, hi: f32) {
        let (min, max) = min_max(&self.data);
        let range = max - min;
        if !(range > f32::EPSILON) {
            return;
        }
        let scale = (hi - lo) / range;
        for v in &mut self.data {
            *v = lo + (*v - min) * scale;
        }
    }
}

pub(crate) fn ensure_dims(
    expected_width: usize,
    expected_height: usize,
    width: usize,
    height: usize,
) -> CldResult<()> {
    if expected_width != width || expected_height != height {
        return Err(CldError::DimensionMismatch {
            expected_width,
            expected_height,
            width,
            height,
        });
    }
    Ok(())
}

fn area(width: usize, height: usize) -> CldResult<usize> {
    if width == 0 || height == 0 {
        return Err(CldError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(CldError::InvalidDimensions { width, height })
}
