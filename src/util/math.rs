//! Small numeric helpers shared by the filters.

/// Returns the nearest pixel index for a sampling position, or `None` when the
/// position lies outside `[0, len - 1]`.
#[inline]
pub(crate) fn pixel_index(value: f32, len: usize) -> Option<usize> {
    if !(value >= 0.0) || value > (len - 1) as f32 {
        return None;
    }
    Some(value.round() as usize)
}

/// Clamps and rounds a float sample to the `u8` range.
#[inline]
pub(crate) fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Returns `(min, max)` of a non-empty slice, ignoring NaN.
pub(crate) fn min_max(values: &[f32]) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}
