//! # Errors
//!
//! The evaluation itself is total. These variants cover misuse of the
//! building blocks (array slots, reading state that was never computed).

use thiserror::Error;

/// Result type for evaluator operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors from evaluator building blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("null element at index {0}")]
    NullElement(usize),

    #[error("derived sum read before the static phase ran")]
    SumNotComputed,
}
