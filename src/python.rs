use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::loader;
use crate::solver::solver::{solve, Method, SolveReport};

#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct SolveResult {
    trace: String,
    solution: Option<Vec<f64>>,
    status: &'static str,
}

impl From<SolveReport<f64>> for SolveResult {
    fn from(report: SolveReport<f64>) -> Self {
        SolveResult {
            trace: report.trace.render(),
            status: report.outcome.status(),
            solution: report.solution().map(|x| x.to_vec()),
        }
    }
}

#[pymethods]
impl SolveResult {
    #[getter]
    pub fn trace(&self) -> String {
        self.trace.clone()
    }

    #[getter]
    pub fn solution(&self) -> Option<Vec<f64>> {
        self.solution.clone()
    }

    #[getter]
    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn __str__(&self) -> String {
        self.trace.clone()
    }
}

fn run(method: Method, rows: Vec<Vec<f64>>) -> PyResult<SolveResult> {
    match solve(method, &rows) {
        Ok(report) => Ok(report.into()),
        Err(error) => Err(PyValueError::new_err(error.to_string())),
    }
}

#[pyfunction]
pub fn solve_gauss(rows: Vec<Vec<f64>>) -> PyResult<SolveResult> {
    run(Method::Gauss, rows)
}

#[pyfunction]
pub fn solve_jordan(rows: Vec<Vec<f64>>) -> PyResult<SolveResult> {
    run(Method::GaussJordan, rows)
}

#[pyfunction]
#[pyo3(name = "load_coefficients")]
pub fn py_load_coefficients(path: String, dim: usize) -> PyResult<Vec<Vec<f64>>> {
    match loader::load_coefficients(path, dim) {
        Ok(rows) => Ok(rows),
        Err(error) => Err(PyValueError::new_err(error.to_string())),
    }
}
