use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::scalar::Scalar;
use crate::solver::solver::{Elimination, Method};

/// Full reduction to reduced row-echelon form, the unknowns are then read
/// from the right-hand side directly.
pub struct JordanMethod;

impl Elimination for JordanMethod {
    const NAME: &'static str = "Gauss-Jordan method";
    const METHOD: Method = Method::GaussJordan;

    fn transform_column<T: Scalar>(matrix: &mut AugmentedMatrix<T>, col: usize) {
        let pivot = matrix.at(col, col);
        matrix.scale_row(col, pivot);

        // Handle every row except the pivot row. Columns left of `col` are
        // already cleared in all of them.
        for row in 0..matrix.dim() {
            if row != col {
                let factor = matrix.at(row, col);
                matrix.sub_scaled_row(row, col, factor, col);
            }
        }
    }

    fn extract_solution<T: Scalar>(matrix: &AugmentedMatrix<T>) -> Vec<T> {
        (0..matrix.dim()).map(|i| matrix.rhs(i)).collect()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
