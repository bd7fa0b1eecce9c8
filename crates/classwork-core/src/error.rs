//! Error types for validated construction and mutation

use std::path::PathBuf;
use thiserror::Error;

/// Domain error raised when a salary is rejected at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalaryError {
    /// A negative salary was supplied to a constructor
    #[error("Salary must be non-negative! (got {0})")]
    Negative(f64),
}

/// Generic validation error raised when a mutation would break an invariant
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} must be at least {minimum}. (got {value})")]
pub struct ValidationError {
    pub field: &'static str,
    pub minimum: f64,
    pub value: f64,
}

/// Failure to pull a line out of a text source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
