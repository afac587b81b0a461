//! Partial pivoting and rank deficiency detection shared by both methods.

use log::debug;

use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::scalar::{is_negligible, Scalar};

/// One flag per row, set once the row has served as the pivot of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotFlags {
    used: Vec<bool>,
}

impl PivotFlags {
    pub fn new(dim: usize) -> Self {
        PivotFlags {
            used: vec![false; dim],
        }
    }

    pub fn is_used(&self, row: usize) -> bool {
        self.used[row]
    }

    fn mark(&mut self, row: usize) {
        debug_assert!(!self.used[row], "row {} pivoted twice", row);
        self.used[row] = true;
    }

    pub fn unused_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.used
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(row, _)| row)
    }

    pub fn all_used(&self) -> bool {
        self.used.iter().all(|used| *used)
    }
}

/// Moves the largest candidate of column `row_cur` (rows `row_cur..`) onto
/// the diagonal and marks `row_cur` as pivoted.
///
/// Returns `false` without touching anything when every candidate is below
/// `eps`; the column is then left for [`check_degeneracy`] to account for.
///
/// # Panics
///
/// If `row_cur` is not a row of `matrix`, or `flags` was not built for
/// `matrix.dim()` rows.
pub fn select_pivot<T: Scalar>(
    matrix: &mut AugmentedMatrix<T>,
    flags: &mut PivotFlags,
    row_cur: usize,
    eps: f64,
) -> bool {
    assert_eq!(
        flags.used.len(),
        matrix.dim(),
        "pivot flags do not match the matrix"
    );
    assert!(
        row_cur < matrix.dim(),
        "row {} out of range for {} equations",
        row_cur,
        matrix.dim()
    );
    let col_cur = row_cur;

    // strictly greater: ties keep the upper row
    let row_pivot = (row_cur + 1..matrix.dim()).fold(row_cur, |best, row| {
        if matrix.at(row, col_cur).abs() > matrix.at(best, col_cur).abs() {
            row
        } else {
            best
        }
    });

    if is_negligible(matrix.at(row_pivot, col_cur), eps) {
        debug!("column {}: no pivot above {}", col_cur + 1, eps);
        return false;
    }

    debug!(
        "column {}: pivot {} taken from row {}",
        col_cur + 1,
        matrix.at(row_pivot, col_cur),
        row_pivot + 1
    );
    matrix.swap_rows(row_cur, row_pivot);
    flags.mark(row_cur);
    true
}

/// How many solutions the eliminated system has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    Determined,
    Inconsistent,
    Underdetermined,
}

impl Degeneracy {
    /// Trace line written when no unique solution exists.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Degeneracy::Determined => None,
            Degeneracy::Inconsistent => Some("The system is inconsistent\n"),
            Degeneracy::Underdetermined => Some("The system has a general solution\n"),
        }
    }
}

/// Classifies the system from the rows that never became a pivot.
///
/// A leftover row with a right-hand side above `eps` anywhere makes the
/// system inconsistent, regardless of the order rows are inspected in.
pub fn check_degeneracy<T: Scalar>(
    matrix: &AugmentedMatrix<T>,
    flags: &PivotFlags,
    eps: f64,
) -> Degeneracy {
    if flags.all_used() {
        return Degeneracy::Determined;
    }

    let eps = T::of_f64(eps);
    if flags.unused_rows().any(|row| matrix.rhs(row).abs() > eps) {
        Degeneracy::Inconsistent
    } else {
        Degeneracy::Underdetermined
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
