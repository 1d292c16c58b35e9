//! Error types for engine and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid and I/O operations
///
/// Data-shape variation is never an error: ragged or empty serialized
/// input, zero-sized grids, and clipped compositions are all valid. The
/// engine fails only on the programmer-error case of coordinate access
/// outside the current dimensions; the CLI layer adds parameter and file
/// system failures.
#[derive(Debug)]
pub enum LifeError {
    /// Coordinate access outside the grid's current dimensions
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid height at the time of access
        height: usize,
        /// Grid width at the time of access
        width: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No bundled pattern has the requested name
    UnknownPattern {
        /// The requested pattern name
        name: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                height,
                width,
            } => {
                write!(
                    f,
                    "Coordinates ({row}, {col}) are out of bounds for a {height}x{width} grid"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownPattern { name } => {
                write!(f, "No bundled pattern named '{name}'")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, LifeError>;

impl From<std::io::Error> for LifeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LifeError {
    LifeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = LifeError::OutOfBounds {
            row: 7,
            col: 2,
            height: 5,
            width: 5,
        };
        assert_eq!(
            err.to_string(),
            "Coordinates (7, 2) are out of bounds for a 5x5 grid"
        );
    }

    #[test]
    fn test_file_system_source_chain() {
        let err: LifeError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        match &err {
            LifeError::FileSystem { operation, .. } => assert_eq!(*operation, "unknown"),
            _ => unreachable!("Expected FileSystem error type"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("generations", &0, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'generations' = '0': must be positive"
        );
    }
}
