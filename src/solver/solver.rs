use log::info;

use crate::error::SolverResult;
use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::scalar::Scalar;
use crate::settings::SolverSettings;
use crate::solver::gauss::GaussMethod;
use crate::solver::jordan::JordanMethod;
use crate::solver::pivot::{check_degeneracy, select_pivot, Degeneracy, PivotFlags};
use crate::trace::trace::Trace;

/// The part in which the two elimination methods differ. Pivoting,
/// snapshots and degeneracy checks are shared by [`eliminate`].
pub trait Elimination {
    const NAME: &'static str;
    const METHOD: Method;

    /// Clears column `col` once its pivot sits at `matrix[col][col]`.
    fn transform_column<T: Scalar>(matrix: &mut AugmentedMatrix<T>, col: usize);

    /// Reads the unknowns out of a fully eliminated, determined system.
    fn extract_solution<T: Scalar>(matrix: &AugmentedMatrix<T>) -> Vec<T>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Gauss,
    GaussJordan,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => GaussMethod::NAME,
            Method::GaussJordan => JordanMethod::NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Solved(Vec<T>),
    Inconsistent,
    Underdetermined,
}

impl<T> Outcome<T> {
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Solved(_) => "solved",
            Outcome::Inconsistent => "inconsistent",
            Outcome::Underdetermined => "underdetermined",
        }
    }
}

/// Everything one solve produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport<T> {
    pub method: Method,
    pub trace: Trace,
    pub outcome: Outcome<T>,
    /// Working matrix as left by the last elimination step
    pub matrix: AugmentedMatrix<T>,
}

impl<T> SolveReport<T> {
    pub fn solution(&self) -> Option<&[T]> {
        match &self.outcome {
            Outcome::Solved(x) => Some(x.as_slice()),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

/// Mutable state owned by a single solve. The settings live in the trace.
#[derive(Debug, Clone)]
pub struct SolveState<T> {
    pub matrix: AugmentedMatrix<T>,
    pub flags: PivotFlags,
    pub trace: Trace,
}

impl<T: Scalar> SolveState<T> {
    pub fn new(rows: &[Vec<T>], settings: &SolverSettings) -> SolverResult<Self> {
        settings.validate()?;
        let matrix = AugmentedMatrix::from_list(rows)?;
        Ok(SolveState {
            flags: PivotFlags::new(matrix.dim()),
            matrix,
            trace: Trace::new(settings.clone()),
        })
    }

    pub fn eps(&self) -> f64 {
        self.trace.settings().eps
    }
}

/// Runs method `E` over `state` from the source matrix to the result lines.
pub fn eliminate<E: Elimination, T: Scalar>(mut state: SolveState<T>) -> SolveReport<T> {
    state.trace.append_line(format!(
        "Solve the system of linear equations\nby {}\n\n",
        E::NAME
    ));
    state.trace.append_snapshot("Source matrix", &state.matrix);

    let eps = state.eps();
    for i in 0..state.matrix.dim() {
        if !select_pivot(&mut state.matrix, &mut state.flags, i, eps) {
            continue;
        }

        E::transform_column(&mut state.matrix, i);

        state
            .trace
            .append_snapshot(&format!("Iteration #{}", i + 1), &state.matrix);
    }

    let degeneracy = check_degeneracy(&state.matrix, &state.flags, eps);
    info!("{}: {:?}", E::NAME, degeneracy);

    let outcome = match degeneracy {
        Degeneracy::Determined => {
            let x = E::extract_solution(&state.matrix);
            for (i, value) in x.iter().enumerate() {
                let line = format!("x{} = {}\n", i + 1, state.trace.format_value(*value));
                state.trace.append_line(line);
            }
            Outcome::Solved(x)
        }
        Degeneracy::Inconsistent => Outcome::Inconsistent,
        Degeneracy::Underdetermined => Outcome::Underdetermined,
    };
    if let Some(diagnostic) = degeneracy.diagnostic() {
        state.trace.append_line(diagnostic);
    }

    SolveReport {
        method: E::METHOD,
        trace: state.trace,
        outcome,
        matrix: state.matrix,
    }
}

/// Solves the augmented system `rows` with the default settings.
pub fn solve(method: Method, rows: &[Vec<f64>]) -> SolverResult<SolveReport<f64>> {
    solve_with(method, rows, &SolverSettings::default())
}

pub fn solve_with<T: Scalar>(
    method: Method,
    rows: &[Vec<T>],
    settings: &SolverSettings,
) -> SolverResult<SolveReport<T>> {
    let state = SolveState::new(rows, settings)?;
    Ok(match method {
        Method::Gauss => eliminate::<GaussMethod, T>(state),
        Method::GaussJordan => eliminate::<JordanMethod, T>(state),
    })
}

/// Both methods run on the same input, the second one as a check of the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheck<T> {
    pub gauss: SolveReport<T>,
    pub jordan: SolveReport<T>,
    pub agree: bool,
}

pub fn cross_check<T: Scalar>(
    rows: &[Vec<T>],
    settings: &SolverSettings,
) -> SolverResult<CrossCheck<T>> {
    let gauss = solve_with(Method::Gauss, rows, settings)?;
    let jordan = solve_with(Method::GaussJordan, rows, settings)?;

    let eps = T::of_f64(settings.eps);
    let agree = match (&gauss.outcome, &jordan.outcome) {
        (Outcome::Solved(a), Outcome::Solved(b)) => {
            a.iter().zip(b.iter()).all(|(x, y)| (*x - *y).abs() <= eps)
        }
        (a, b) => a.status() == b.status(),
    };
    if !agree {
        info!(
            "methods disagree: {} vs {}",
            gauss.outcome.status(),
            jordan.outcome.status()
        );
    }

    Ok(CrossCheck {
        gauss,
        jordan,
        agree,
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
