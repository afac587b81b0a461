use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::scalar::Scalar;
use crate::solver::solver::{Elimination, Method};

/// Forward elimination to row-echelon form, then back-substitution.
pub struct GaussMethod;

impl Elimination for GaussMethod {
    const NAME: &'static str = "Gauss method";
    const METHOD: Method = Method::Gauss;

    fn transform_column<T: Scalar>(matrix: &mut AugmentedMatrix<T>, col: usize) {
        let pivot = matrix.at(col, col);

        // Handle every row below the pivot row
        for row in col + 1..matrix.dim() {
            let factor = matrix.at(row, col) / pivot;
            matrix.sub_scaled_row(row, col, factor, 0);
        }
    }

    fn extract_solution<T: Scalar>(matrix: &AugmentedMatrix<T>) -> Vec<T> {
        let n = matrix.dim();
        let mut x = vec![T::zero(); n];

        for i in (0..n).rev() {
            let s: T = (i + 1..n).map(|j| matrix.at(i, j) * x[j]).sum();
            x[i] = (matrix.rhs(i) - s) / matrix.at(i, i);
        }

        x
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solver::solve;

    #[test]
    fn test_transform_column() {
        let mut m = AugmentedMatrix::from_list(&[
            vec![2.0, 1.0, -1.0, 8.0],
            vec![1.0, 3.0, 2.0, 5.0],
            vec![4.0, 0.0, 1.0, 2.0],
        ])
        .unwrap();

        GaussMethod::transform_column(&mut m, 0);
        assert_eq!(m.row(0), &[2.0, 1.0, -1.0, 8.0]);
        assert_eq!(m.row(1), &[0.0, 2.5, 2.5, 1.0]);
        assert_eq!(m.row(2), &[0.0, -2.0, 3.0, -14.0]);
    }

    #[test]
    fn test_back_substitution() {
        let m = AugmentedMatrix::from_list(&[
            vec![2.0, 1.0, -1.0, 8.0],
            vec![0.0, 0.5, 0.5, 1.0],
            vec![0.0, 0.0, -1.0, 1.0],
        ])
        .unwrap();

        assert_eq!(GaussMethod::extract_solution(&m), vec![2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_trace() {
        let report = solve(Method::Gauss, &[vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap();
        assert_eq!(
            report.trace.render(),
            "Solve the system of linear equations\n\
             by Gauss method\n\
             \n\
             Source matrix:\n  \
             2.0000   1.0000   5.0000 \n  \
             1.0000  -1.0000   1.0000 \n\
             \n\
             Iteration #1:\n  \
             2.0000   1.0000   5.0000 \n  \
             0.0000  -1.5000  -1.5000 \n\
             \n\
             Iteration #2:\n  \
             2.0000   1.0000   5.0000 \n  \
             0.0000  -1.5000  -1.5000 \n\
             \n\
             x1 =   2.0000 \n\
             x2 =   1.0000 \n"
        );
    }

    #[test]
    fn test_skipped_column_has_no_snapshot() {
        // x2 never appears, column 2 has no pivot
        let report = solve(
            Method::Gauss,
            &[
                vec![1.0, 0.0, 1.0, 2.0],
                vec![2.0, 0.0, 1.0, 3.0],
                vec![0.0, 0.0, 1.0, 1.0],
            ],
        )
        .unwrap();

        let labels: Vec<&str> = report
            .trace
            .blocks()
            .iter()
            .filter_map(|b| b.lines().next())
            .filter(|l| l.starts_with("Iteration"))
            .collect();
        assert_eq!(labels, vec!["Iteration #1:", "Iteration #3:"]);
    }
}
