use std::ops::RangeBounds;

use ndarray::{ArrayView, Dimension};
use thiserror::Error;

/// Rejection of a caller-supplied value, raised before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A weather input or fire-danger code lies outside its valid domain.
    /// For array calls `value` is the first offending element.
    #[error("Invalid {field}: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// Month outside 1..=12.
    #[error("Invalid mon: {value}")]
    InvalidMonth { value: u32 },

    /// An array input cannot be broadcast to the shape of the call.
    #[error("Invalid shape for {field}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

pub(crate) fn check<R: RangeBounds<f64>>(
    field: &'static str,
    value: f64,
    range: &R,
) -> Result<(), DomainError> {
    // NaN is never contained in a range
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::OutOfRange { field, value })
    }
}

/// Whole-array validation: the call is rejected if any element is out of domain.
pub(crate) fn check_all<D: Dimension, R: RangeBounds<f64>>(
    field: &'static str,
    values: &ArrayView<f64, D>,
    range: &R,
) -> Result<(), DomainError> {
    match values.iter().find(|v| !range.contains(*v)) {
        Some(&value) => Err(DomainError::OutOfRange { field, value }),
        None => Ok(()),
    }
}

/// Broadcast `values` to `dim`, the shape every array of the call is evaluated on.
pub(crate) fn broadcast_to<'a, D: Dimension>(
    field: &'static str,
    values: &'a ArrayView<'_, f64, D>,
    dim: &D,
) -> Result<ArrayView<'a, f64, D>, DomainError> {
    values
        .broadcast(dim.clone())
        .ok_or_else(|| DomainError::ShapeMismatch {
            field,
            expected: dim.slice().to_vec(),
            found: values.shape().to_vec(),
        })
}
