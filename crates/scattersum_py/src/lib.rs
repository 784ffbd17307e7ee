use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use scattersum::{CenterAccumulator, Dataset};

/// One k-means aggregation pass over flat buffers.
///
/// Returns `(sums, counts, scores)` where `sums` is row-major
/// `n_centers * n_cols`.
#[pyfunction]
fn aggregate(
    dataset: Vec<f32>,
    n_rows: usize,
    n_cols: usize,
    assignments: Vec<usize>,
    distances: Vec<f32>,
    n_centers: usize,
) -> PyResult<(Vec<f64>, Vec<i64>, Vec<f64>)> {
    if n_centers == 0 {
        return Err(PyValueError::new_err("n_centers must be positive"));
    }
    if assignments.len() != n_rows || distances.len() != n_rows {
        return Err(PyValueError::new_err(
            "assignments and distances must have one entry per row",
        ));
    }
    if let Some(&bad) = assignments.iter().find(|&&c| c >= n_centers) {
        return Err(PyValueError::new_err(format!(
            "assignment {bad} out of range for {n_centers} centers"
        )));
    }

    let dataset = Dataset::from_slice(&dataset, n_rows, n_cols)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let accumulator = CenterAccumulator::new(n_centers, n_cols);

    scattersum::aggregate(dataset, &assignments, &distances, &accumulator)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok((
        accumulator.sums(),
        accumulator.counts(),
        accumulator.scores(),
    ))
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(aggregate, m)?)?;
    Ok(())
}
