//! Error types for polymd

use thiserror::Error;

/// Result type alias using polymd's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in polymd operations
///
/// Every variant is a usage error: the core is pure computation, so nothing
/// here is worth retrying. Numeric failures such as division by a zero scalar
/// are left to the element type and never surface as an `Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Number of axes does not match the sequence / polynomial dimension
    #[error("Dimension mismatch: expected {expected} axes, got {got}")]
    DimensionMismatch {
        /// Expected number of axes
        expected: usize,
        /// Actual number of axes
        got: usize,
    },

    /// Shape mismatch between dense tensors
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid axis index
    #[error("Invalid axis {axis} for object with {ndim} axes")]
    InvalidAxis {
        /// The invalid axis
        axis: usize,
        /// Number of axes
        ndim: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Coefficient container is not a recognised nested-array shape
    #[error("Malformed coefficients: {reason}")]
    MalformedCoefficients {
        /// What is wrong with the container
        reason: String,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a malformed coefficients error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCoefficients {
            reason: reason.into(),
        }
    }
}
