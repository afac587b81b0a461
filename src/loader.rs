//! Reading augmented matrices from coefficient text files.
//!
//! One equation per line, values separated by any run of whitespace or
//! semicolons:
//!
//! ```text
//! 2; 1; 5
//! 1  -1  1
//! ```
//!
//! The result is always a `dim x (dim + 1)` matrix. Extra lines and values
//! are ignored, anything missing or unreadable stays `0`.

use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::error::{SolverError, SolverResult};
use crate::settings::{MAX_DIM, MIN_DIM};

// any whitespace, so stray `\r` from old line endings is dropped too
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ';'
}

pub fn parse_coefficients(text: &str, dim: usize) -> SolverResult<Vec<Vec<f64>>> {
    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(SolverError::InvalidDimension(format!(
            "{} equations, expected {}..={}",
            dim, MIN_DIM, MAX_DIM
        )));
    }

    let mut rows = vec![vec![0.0; dim + 1]; dim];

    for (i, (row, line)) in rows.iter_mut().zip(text.lines()).enumerate() {
        let tokens = line.split(is_separator).filter(|t| !t.is_empty());

        for (j, (cell, token)) in row.iter_mut().zip(tokens).enumerate() {
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => *cell = value,
                _ => warn!("line {}, value {}: cannot read {:?}", i + 1, j + 1, token),
            }
        }
    }

    Ok(rows)
}

pub fn load_coefficients(path: impl AsRef<Path>, dim: usize) -> SolverResult<Vec<Vec<f64>>> {
    let path = path.as_ref();
    debug!("loading {} equations from {}", dim, path.display());
    let text = fs::read_to_string(path)?;
    parse_coefficients(&text, dim)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
