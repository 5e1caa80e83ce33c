use pyo3::prelude::*;

mod align;
mod vecpy;

/// A Python module implemented in Rust for fast audio alignment.
///
/// This module provides Python bindings for the wavealign library, which finds
/// the best temporal alignment offset between two float32 sample buffers by
/// minimizing mean squared error (or maximizing correlation) over a bounded
/// offset range.
#[pymodule]
fn wavealignpy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(align::find_best_alignment_offset, m)?)?;
    m.add_function(wrap_pyfunction!(align::align_pair, m)?)?;
    m.add_function(wrap_pyfunction!(
        align::align_delayed_signal_with_reference,
        m
    )?)?;
    Ok(())
}
