use rayon::prelude::*;

use crate::accumulator::CenterAccumulator;
use crate::atomic::AtomicAdd;

/// One parallel scatter-reduce pass over the dataset rows.
///
/// Zeroes the accumulators, then partitions the row range across the rayon
/// pool. Each row adds its values into the sums of its assigned center, bumps
/// that center's count, and adds its distance to that center's score — every
/// write goes through an atomic add, because rows sharing a center may be
/// processed by different workers at the same time.
///
/// The result is invariant to row order and to how rayon chunks the range:
/// each row contributes exactly once and the adds commute. Generic over the
/// dataset element type; accumulation happens in `f64` regardless.
///
/// Callers validate shapes first (see [`aggregate`](crate::aggregate)); this
/// function assumes `values.len() == assignments.len() * n_cols` and matching
/// `distances`.
pub(crate) fn scatter_rows<T>(
    values: &[T],
    n_cols: usize,
    assignments: &[usize],
    distances: &[T],
    accumulator: &CenterAccumulator,
) where
    T: Copy + Into<f64> + Sync,
{
    accumulator.reset();

    values
        .par_chunks_exact(n_cols)
        .zip_eq(assignments.par_iter())
        .zip_eq(distances.par_iter())
        .for_each(|((row, &center), &distance)| {
            let base = center * n_cols;
            for (col, &value) in row.iter().enumerate() {
                accumulator.sums[base + col].add(value.into());
            }
            accumulator.counts[center].add(1);
            accumulator.scores[center].add(distance.into());
        });
}
