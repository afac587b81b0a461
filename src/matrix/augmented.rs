use crate::error::{SolverError, SolverResult};
use crate::matrix::scalar::{is_negligible, Scalar};
use crate::settings::{MAX_DIM, MIN_DIM};

/// `dim` equations over `dim` unknowns, the right-hand side stored as the
/// last column. Cells are kept row-major in a single vector.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    dim: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Scalar> AugmentedMatrix<T> {
    /// Copies `lines` into a new matrix. Every line must hold `dim + 1`
    /// values, where `dim` is the number of lines.
    pub fn from_list(lines: &[Vec<T>]) -> SolverResult<Self> {
        let dim = lines.len();
        if !(MIN_DIM..=MAX_DIM).contains(&dim) {
            return Err(SolverError::InvalidDimension(format!(
                "{} equations, expected {}..={}",
                dim, MIN_DIM, MAX_DIM
            )));
        }

        let cols = dim + 1;
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(SolverError::InvalidDimension(format!(
                "row {} has {} values, expected {}",
                row + 1,
                line.len(),
                cols
            )));
        }

        Ok(AugmentedMatrix {
            dim,
            cols,
            cells: lines.iter().flat_map(|l| l.iter().copied()).collect(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    /// Number of equations (and of unknowns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    /// Right-hand side of equation `row`.
    #[inline(always)]
    pub fn rhs(&self, row: usize) -> T {
        self.at(row, self.dim)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Divides every value of `row` by `divisor`.
    pub fn scale_row(&mut self, row: usize, divisor: T) {
        for cell in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            *cell = *cell / divisor;
        }
    }

    /// `target -= factor * source`, restricted to the columns `from_col..`.
    pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T, from_col: usize) {
        for k in from_col..self.cols {
            let value = self.at(source, k) * factor;
            self.cells[target * self.cols + k] = self.cells[target * self.cols + k] - value;
        }
    }

    /// Whether the coefficient part is in reduced row-echelon form, values
    /// below `eps` counting as zero.
    pub fn is_rref(&self, eps: f64) -> bool {
        let zero = |x: T| is_negligible(x, eps);
        let one = |x: T| is_negligible(x - T::one(), eps);
        let mut lead = None;

        for i in 0..self.dim {
            let row = &self.row(i)[..self.dim];
            let pivot_col_opt = row.iter().position(|x| !zero(*x));

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.dim {
                        if self.row(r)[..self.dim].iter().any(|x| !zero(*x)) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !one(row[pivot_col]) {
                        return false;
                    }

                    for r in 0..self.dim {
                        if r != i && !zero(self.at(r, pivot_col)) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
