//! Error types for tarea operations

use thiserror::Error;

/// Result type for tarea operations
pub type Result<T> = std::result::Result<T, TareaError>;

/// Errors that can occur during tarea operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TareaError {
    /// Inner dimensions of the two operands disagree
    #[error("Dimension mismatch: A has inner dimension {expected}, B supplies {actual}")]
    DimensionMismatch {
        /// Column count of the left operand
        expected: usize,
        /// Column length of the right operand
        actual: usize,
    },

    /// Construction data length does not match the declared shape
    #[error("Data length {len} does not match matrix dimensions {rows}x{cols}")]
    ShapeMismatch {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
        /// Actual data length
        len: usize,
    },

    /// The worker pool could not be created or run
    #[error("Scheduling failure: {0}")]
    SchedulingFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_error() {
        let err = TareaError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: A has inner dimension 3, B supplies 4"
        );
    }

    #[test]
    fn test_shape_mismatch_error() {
        let err = TareaError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Data length 5 does not match matrix dimensions 2x3"
        );
    }

    #[test]
    fn test_scheduling_failure_error() {
        let err = TareaError::SchedulingFailure("worker pool exhausted".to_string());
        assert_eq!(err.to_string(), "Scheduling failure: worker pool exhausted");
    }

    #[test]
    fn test_error_equality() {
        let err1 = TareaError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        let err2 = TareaError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(err1, err2);
    }
}
