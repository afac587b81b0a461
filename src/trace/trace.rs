use itertools::Itertools;
use std::fmt;

use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::scalar::Scalar;
use crate::settings::SolverSettings;
use crate::trace::format::format_value_with;

/// Human readable record of one solve: the source matrix, one snapshot per
/// eliminated column, then either the unknowns or a diagnostic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    blocks: Vec<String>,
    settings: SolverSettings,
}

impl Trace {
    pub fn new(settings: SolverSettings) -> Self {
        Trace {
            blocks: vec![],
            settings,
        }
    }

    pub fn append_line(&mut self, text: impl Into<String>) {
        self.blocks.push(text.into());
    }

    /// Appends `label`, every row of `matrix` and a blank line as one block.
    pub fn append_snapshot<T: Scalar>(&mut self, label: &str, matrix: &AugmentedMatrix<T>) {
        let mut block = format!("{}:\n", label);
        for row in matrix.rows() {
            block += &row
                .iter()
                .map(|x| format_value_with(*x, &self.settings))
                .join("");
            block.push('\n');
        }
        block.push('\n');
        self.blocks.push(block);
    }

    pub fn format_value<T: Scalar>(&self, x: T) -> String {
        format_value_with(x, &self.settings)
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn render(&self) -> String {
        self.blocks.concat()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.blocks.iter().try_for_each(|block| f.write_str(block))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
