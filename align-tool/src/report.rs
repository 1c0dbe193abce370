use std::fmt::{self, Display};

use aligner::Alignment;

/// Explains the conventions of the annotated fields.
pub const CONVENTIONS: &str = "\
Conventions used:
 - token index: 0-based and includes special tokens ([CLS] is index 0). Use this to index Bert
   outputs, e.g. outputs.last_hidden_state[batch_idx, token_index, :]
 - character span: 'start:end' with 0-based start inclusive, end exclusive (python slicing).
 - If multiple occurrences exist in a sentence, the FIRST (left-to-right) occurrence is recorded.
 - Rows without an occurrence have the token index -1 and an empty character span.";

/// The summary of an annotated table.
#[derive(Debug, PartialEq)]
pub struct Report {
    target: String,
    total: usize,
    /// The 1-based numbers of the rows without an occurrence.
    unmatched: Vec<usize>,
}

impl Report {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            total: 0,
            unmatched: Vec::new(),
        }
    }

    /// Records the alignment of the next row.
    pub fn record(&mut self, alignment: &Alignment) {
        self.total += 1;
        if !alignment.is_found() {
            self.unmatched.push(self.total);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn matched(&self) -> usize {
        self.total - self.unmatched.len()
    }

    pub fn unmatched(&self) -> &[usize] {
        &self.unmatched
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found '{}' in {} rows; {} not found.",
            self.target,
            self.matched(),
            self.unmatched.len(),
        )?;
        if !self.unmatched.is_empty() {
            let rows = self
                .unmatched
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(
                f,
                "\nRows where '{}' was not located (1-based csv row numbers):\n{}",
                self.target, rows,
            )?;
        }

        Ok(())
    }
}
