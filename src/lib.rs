#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod augmented;
    pub mod scalar;
}
pub mod solver {
    pub mod gauss;
    pub mod jordan;
    pub mod pivot;
    pub mod solver;
}
pub mod trace {
    pub mod format;
    pub mod trace;
}

pub mod error;
pub mod loader;
pub mod settings;

#[cfg(feature = "python")]
pub mod python;

pub use error::{SolverError, SolverResult};
pub use settings::SolverSettings;
pub use solver::solver::{cross_check, solve, solve_with, Method, Outcome, SolveReport};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn gauss_solver(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::solve_gauss, m)?)?;
    m.add_function(wrap_pyfunction!(python::solve_jordan, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_load_coefficients, m)?)?;
    m.add_class::<python::SolveResult>()?;
    Ok(())
}
