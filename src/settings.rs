use crate::error::{SolverError, SolverResult};

/// Smallest accepted number of equations.
pub const MIN_DIM: usize = 2;

/// Largest accepted number of equations.
pub const MAX_DIM: usize = 9;

/// Threshold under which a value counts as zero.
pub const EPS: f64 = 0.001;

/// Tolerances and trace layout shared by both elimination methods.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    /// Pivot threshold, degeneracy threshold and display snap-to-zero
    pub eps: f64,

    /// Decimal places of every value written to the trace
    pub precision: usize,

    /// Minimal width of every value written to the trace
    pub width: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            eps: EPS,
            precision: 4,
            width: 8,
        }
    }
}

impl SolverSettings {
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            ..Self::default()
        }
    }

    /// A zero, negative or NaN `eps` would accept exact zeros as pivots.
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(SolverError::InvalidSettings(format!(
                "eps must be a finite positive number, got {}",
                self.eps
            )));
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
