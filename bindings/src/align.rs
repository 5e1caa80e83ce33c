use pyo3::{PyResult, exceptions::PyValueError, pyfunction};
use wavealign::{
    alignment::{self, AlignMode, FixLength, OffsetMethod},
    statistics::Stats,
};

use crate::vecpy::VecPy;

/// Find the best offset of `delayed` with respect to `reference`.
///
/// Args:
///     reference: Reference signal as a list of f32 samples
///     delayed: Delayed signal as a list of f32 samples
///     max_offset: Largest absolute offset (in samples) to test
///     lookahead: Maximum samples compared per candidate offset (default: no cap)
///     method: "mse" (fast) or "corr" (slow, gain-invariant)
///     consider_both_polarities: Also try the polarity-inverted delayed signal
///
/// Returns:
///     A tuple (offset, score); the score is an MSE or a correlation
///     coefficient depending on the method
#[pyfunction]
#[pyo3(signature = (reference, delayed, max_offset, lookahead=None, method="mse", consider_both_polarities=false))]
pub fn find_best_alignment_offset(
    reference: VecPy,
    delayed: VecPy,
    max_offset: usize,
    lookahead: Option<usize>,
    method: &str,
    consider_both_polarities: bool,
) -> PyResult<(isize, f32)> {
    let method = match method {
        "mse" => OffsetMethod::Mse,
        "corr" => OffsetMethod::Corr,
        other => return Err(PyValueError::new_err(format!("Unknown method {other:?}"))),
    };

    let mut stats = Stats::new();
    let result = alignment::find_best_alignment_offset(
        reference.as_ref(),
        delayed.as_ref(),
        max_offset,
        lookahead,
        method,
        consider_both_polarities,
        &mut stats,
    );
    Ok((result.offset, result.score.0))
}

/// Apply a found offset onto a pair of signals.
///
/// Args:
///     reference: Reference signal as a list of f32 samples
///     delayed: Delayed signal as a list of f32 samples
///     offset: Offset as returned by find_best_alignment_offset
///     align_mode: "crop" or "pad"
///     fix_length: "shortest", "longest" or None
///
/// Returns:
///     The shifted (reference, delayed) pair
#[pyfunction]
#[pyo3(signature = (reference, delayed, offset, align_mode, fix_length=None))]
pub fn align_pair(
    reference: VecPy,
    delayed: VecPy,
    offset: isize,
    align_mode: &str,
    fix_length: Option<&str>,
) -> PyResult<(VecPy, VecPy)> {
    let align_mode = match align_mode {
        "crop" => AlignMode::Crop,
        "pad" => AlignMode::Pad,
        other => return Err(PyValueError::new_err(format!(
            "align_mode={other:?} not understood"
        ))),
    };
    let fix_length = match fix_length {
        None => None,
        Some("shortest") => Some(FixLength::Shortest),
        Some("longest") => Some(FixLength::Longest),
        Some(other) => {
            return Err(PyValueError::new_err(format!(
                "fix_length={other:?} not understood"
            )));
        }
    };

    let (reference, delayed) = alignment::align_pair(
        reference.as_ref(),
        delayed.as_ref(),
        offset,
        align_mode,
        fix_length,
    );
    Ok((VecPy { inner: reference }, VecPy { inner: delayed }))
}

/// Return `delayed` re-timed onto the reference's clock, zero-padded at the
/// start or the end depending on the sign of the offset.
#[pyfunction]
pub fn align_delayed_signal_with_reference(
    reference: VecPy,
    delayed: VecPy,
    offset: isize,
) -> VecPy {
    VecPy {
        inner: alignment::align_delayed_signal_with_reference(
            reference.as_ref(),
            delayed.as_ref(),
            offset,
        ),
    }
}
