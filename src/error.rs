//! Error types for the elimination solvers.

use thiserror::Error;

/// Errors that stop a solve before any elimination happens.
///
/// Rank deficiency is not an error: inconsistent and underdetermined systems
/// are reported through [`crate::solver::solver::Outcome`] and the trace.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Dimension out of range or a row with the wrong number of entries
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Tolerance that is not a finite positive number
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Coefficient file could not be read
    #[error("Cannot read coefficients: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
