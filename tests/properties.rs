//! Randomised checks over every supported dimension.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use gauss_solver::matrix::augmented::AugmentedMatrix;
use gauss_solver::settings::{EPS, MAX_DIM, MIN_DIM};
use gauss_solver::solver::pivot::{select_pivot, PivotFlags};
use gauss_solver::trace::format::format_value;
use gauss_solver::{cross_check, solve, Method, SolverSettings};

/// Strictly diagonally dominant, hence non-singular and well conditioned.
fn random_system(rng: &mut StdRng, n: usize) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..=n).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    for (i, row) in rows.iter_mut().enumerate() {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| row[j].abs()).sum();
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        row[i] = sign * (off_diagonal + rng.gen_range(1.0..5.0));
    }
    // shuffle the equations so pivoting has work to do
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        rows.swap(i, j);
    }
    rows
}

fn residual(rows: &[Vec<f64>], x: &[f64]) -> f64 {
    let n = rows.len();
    rows.iter()
        .map(|row| {
            let lhs: f64 = (0..n).map(|j| row[j] * x[j]).sum();
            (lhs - row[n]).abs()
        })
        .fold(0.0, f64::max)
}

#[test]
fn test_methods_agree() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in MIN_DIM..=MAX_DIM {
        for _ in 0..25 {
            let rows = random_system(&mut rng, n);
            let check = cross_check(&rows, &SolverSettings::default()).unwrap();
            assert!(check.agree, "disagreement on {:?}", rows);

            for report in [&check.gauss, &check.jordan] {
                let x = report.solution().unwrap();
                assert!(residual(&rows, x) < 1e-6);
            }
            assert!(check.jordan.matrix.is_rref(EPS));
        }
    }
}

#[test]
fn test_pivot_is_column_maximum() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in MIN_DIM..=MAX_DIM {
        for row_cur in 0..n {
            let rows: Vec<Vec<f64>> = (0..n)
                .map(|_| (0..=n).map(|_| rng.gen_range(-100.0..100.0)).collect())
                .collect();
            let mut m = AugmentedMatrix::from_list(&rows).unwrap();
            let mut flags = PivotFlags::new(n);

            assert!(select_pivot(&mut m, &mut flags, row_cur, EPS));
            assert!(flags.is_used(row_cur));

            let pivot = m.at(row_cur, row_cur).abs();
            for row in row_cur..n {
                assert!(pivot >= m.at(row, row_cur).abs());
            }
            // rows above the current one never move
            for row in 0..row_cur {
                assert_eq!(m.row(row), rows[row].as_slice());
            }
        }
    }
}

#[test]
fn test_format_snaps_small_values() {
    let mut rng = StdRng::seed_from_u64(99);
    let zero = format_value(0.0);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(-EPS..EPS);
        if x.abs() < EPS {
            assert_eq!(format_value(x), zero);
        }
    }
}

#[test]
fn test_parallel_solves_are_independent() {
    let systems: Vec<Vec<Vec<f64>>> = {
        let mut rng = StdRng::seed_from_u64(31);
        (0..64)
            .map(|i| random_system(&mut rng, MIN_DIM + i % (MAX_DIM - MIN_DIM + 1)))
            .collect()
    };

    let sequential: Vec<_> = systems
        .iter()
        .map(|rows| solve(Method::Gauss, rows).unwrap())
        .collect();
    let parallel: Vec<_> = systems
        .par_iter()
        .map(|rows| solve(Method::Gauss, rows).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
