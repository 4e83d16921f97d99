use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, MatrixOpsError>;

/// Custom error type for matrix operations.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MatrixOpsError {
    /// A structural precondition on shape or dimensions was violated.
    #[error("Invalid argument in {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// An element index fell outside the matrix bounds.
    #[error("Index out of range: index {index:?} for shape {shape:?}")]
    OutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
}

/// Coarse category of a [`MatrixOpsError`], for callers that only need to
/// branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
}

impl MatrixOpsError {
    pub(crate) fn invalid_argument(operation: &str, message: impl Into<String>) -> Self {
        MatrixOpsError::InvalidArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixOpsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            MatrixOpsError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
