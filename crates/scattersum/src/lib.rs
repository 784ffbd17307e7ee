mod accumulator;
mod atomic;
mod scatter;

pub use accumulator::CenterAccumulator;
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DatasetError {
    #[snafu(display("dataset dimensions must be positive"))]
    ZeroDatasetSize,

    #[snafu(display(
        "dataset shape ({n_rows}x{n_cols}) doesn't match the buffer length ({buf_len})"
    ))]
    DatasetSizeMismatch {
        n_rows: usize,
        n_cols: usize,
        buf_len: usize,
    },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AggregateError {
    #[snafu(display(
        "column count mismatch: dataset - {dataset_cols} accumulator - {accumulator_cols}"
    ))]
    ColumnCountMismatch {
        dataset_cols: usize,
        accumulator_cols: usize,
    },
}

/// A structure used as a façade for a borrowed row-major `f32` matrix.
#[derive(Debug, Copy, Clone)]
pub struct Dataset<'a> {
    n_rows: usize,
    n_cols: usize,
    values: &'a [f32],
}

impl Dataset<'_> {
    /// Wrap a flat row-major buffer of `n_rows * n_cols` values.
    pub fn from_slice(
        values: &[f32],
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Dataset<'_>, DatasetError> {
        ensure!(n_rows > 0 && n_cols > 0, ZeroDatasetSizeSnafu);
        ensure!(
            values.len() == n_rows * n_cols,
            DatasetSizeMismatchSnafu {
                n_rows,
                n_cols,
                buf_len: values.len()
            }
        );

        Ok(Dataset {
            n_rows,
            n_cols,
            values,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }
}

/// Aggregate dataset rows into per-center sums, counts, and distance scores.
///
/// This is the inner-loop primitive of a k-means style clustering iteration:
/// given each row's assigned center and its distance to that center, compute
/// for every center the elementwise sum of its assigned rows, the number of
/// assigned rows, and the sum of their distances, in a single parallel pass.
/// The caller divides sums by counts to obtain updated centers and may use
/// the scores for inertia or convergence reporting; none of that happens
/// here.
///
/// The accumulator determines the number of centers and is fully zeroed
/// before any row is processed, so outputs depend only on this call's inputs.
/// Aggregation is all-or-nothing: the one validated error, a column-count
/// mismatch between the dataset and the accumulator, is reported before any
/// buffer is touched.
///
/// ```
/// let dataset = scattersum::Dataset::from_slice(
///     &[1.0, 2.0,
///       3.0, 4.0,
///       5.0, 6.0],
///     3, 2,
/// ).unwrap();
/// let accumulator = scattersum::CenterAccumulator::new(2, 2);
///
/// scattersum::aggregate(dataset, &[0, 1, 0], &[0.1, 0.2, 0.3], &accumulator).unwrap();
///
/// assert_eq!(accumulator.sums(), vec![6.0, 8.0, 3.0, 4.0]);
/// assert_eq!(accumulator.counts(), vec![2, 1]);
/// ```
///
/// # Panics
///
/// Assignment values are NOT validated against the accumulator's center
/// count: keeping them in `[0, n_centers)` is the caller's responsibility,
/// and an out-of-range value panics mid-pass (an index out of bounds, never
/// an out-of-bounds write). `assignments` and `distances` must both have one
/// entry per dataset row; a length mismatch also panics.
pub fn aggregate(
    dataset: Dataset<'_>,
    assignments: &[usize],
    distances: &[f32],
    accumulator: &CenterAccumulator,
) -> Result<(), AggregateError> {
    ensure!(
        dataset.n_cols == accumulator.n_cols(),
        ColumnCountMismatchSnafu {
            dataset_cols: dataset.n_cols,
            accumulator_cols: accumulator.n_cols(),
        }
    );
    assert_eq!(assignments.len(), dataset.n_rows);
    assert_eq!(distances.len(), dataset.n_rows);

    scatter::scatter_rows(
        dataset.values,
        dataset.n_cols,
        assignments,
        distances,
        accumulator,
    );
    Ok(())
}
