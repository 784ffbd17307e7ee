use crate::atomic::{AtomicAdd, AtomicCount, AtomicF64};

/// Caller-allocated scratch space for one aggregation pass.
///
/// Holds, per center: the elementwise `f64` sum of assigned rows (row-major,
/// `n_centers × n_cols`), the `i64` count of assigned rows, and the `f64` sum
/// of their distances. Sums are kept in double precision regardless of the
/// dataset element type to bound accumulated rounding error across many rows.
///
/// [`aggregate`](crate::aggregate) zeroes all three buffers before
/// accumulating, so an accumulator can be allocated once and reused across
/// iterations; results never leak from one call into the next.
#[derive(Debug)]
pub struct CenterAccumulator {
    n_centers: usize,
    n_cols: usize,
    pub(crate) sums: Vec<AtomicF64>,
    pub(crate) counts: Vec<AtomicCount>,
    pub(crate) scores: Vec<AtomicF64>,
}

impl CenterAccumulator {
    /// Allocate zeroed accumulators for `n_centers` centers of `n_cols`
    /// columns each. Both dimensions must be positive.
    pub fn new(n_centers: usize, n_cols: usize) -> Self {
        assert!(n_centers > 0);
        assert!(n_cols > 0);

        Self {
            n_centers,
            n_cols,
            sums: std::iter::repeat_with(AtomicF64::default)
                .take(n_centers * n_cols)
                .collect(),
            counts: std::iter::repeat_with(AtomicCount::default)
                .take(n_centers)
                .collect(),
            scores: std::iter::repeat_with(AtomicF64::default)
                .take(n_centers)
                .collect(),
        }
    }

    pub fn n_centers(&self) -> usize {
        self.n_centers
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Summed value of column `col` over the rows assigned to `center`.
    pub fn sum(&self, center: usize, col: usize) -> f64 {
        assert!(col < self.n_cols);
        self.sums[center * self.n_cols + col].load()
    }

    /// Number of rows assigned to `center`.
    pub fn count(&self, center: usize) -> i64 {
        self.counts[center].load()
    }

    /// Summed distance of the rows assigned to `center`.
    pub fn score(&self, center: usize) -> f64 {
        self.scores[center].load()
    }

    /// All center sums as a row-major `n_centers × n_cols` vector.
    pub fn sums(&self) -> Vec<f64> {
        self.sums.iter().map(AtomicF64::load).collect()
    }

    /// Per-center row counts.
    pub fn counts(&self) -> Vec<i64> {
        self.counts.iter().map(AtomicCount::load).collect()
    }

    /// Per-center distance sums.
    pub fn scores(&self) -> Vec<f64> {
        self.scores.iter().map(AtomicF64::load).collect()
    }

    /// Unconditional zero of all three buffers before a pass starts.
    pub(crate) fn reset(&self) {
        for cell in &self.sums {
            cell.reset();
        }
        for cell in &self.counts {
            cell.reset();
        }
        for cell in &self.scores {
            cell.reset();
        }
    }
}
