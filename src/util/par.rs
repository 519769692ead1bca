//! Row-parallel iteration over an output buffer.
//!
//! Each call hands out disjoint rows of `out` to the closure; the call returns
//! only after every row has been written, which gives the pipeline its stage
//! barriers. With the `rayon` feature and `parallel == true` rows are
//! distributed over the rayon pool, otherwise they are visited in order.

/// Calls `f(y, row)` for every row of `out`, where `row` has length `width`.
#[cfg(feature = "rayon")]
pub(crate) fn for_each_row<T, F>(out: &mut [T], width: usize, parallel: bool, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    use rayon::prelude::*;

    if parallel {
        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        for_each_row_seq(out, width, f);
    }
}

/// Calls `f(y, row)` for every row of `out`, where `row` has length `width`.
#[cfg(not(feature = "rayon"))]
pub(crate) fn for_each_row<T, F>(out: &mut [T], width: usize, _parallel: bool, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    for_each_row_seq(out, width, f);
}

fn for_each_row_seq<T, F>(out: &mut [T], width: usize, f: F)
where
    F: Fn(usize, &mut [T]),
{
    for (y, row) in out.chunks_mut(width).enumerate() {
        f(y, row);
    }
}

#[cfg(test)]
mod tests {
    use super::for_each_row;

    #[test]
    fn rows_are_disjoint_and_complete() {
        for parallel in [false, true] {
            let mut out = vec![0usize; 12];
            for_each_row(&mut out, 4, parallel, |y, row| {
                for (x, v) in row.iter_mut().enumerate() {
                    *v = y * 4 + x;
                }
            });
            assert_eq!(out, (0..12).collect::<Vec<_>>());
        }
    }
}
