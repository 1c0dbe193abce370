use std::{
    fmt::{self, Display},
    iter::once,
};

use serde::Serialize;

/// The character offsets of a token in a sentence.
///
/// The offsets count unicode scalar values, the start is inclusive and the end is exclusive.
/// Special tokens don't cover any text and are marked by the degenerate offsets `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Offsets {
    pub start: usize,
    pub end: usize,
}

impl Offsets {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checks whether the offsets don't cover any text, which is the case for special tokens.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Merges the offsets with the offsets of a subsequent token.
    pub(crate) fn to(self, other: Self) -> Self {
        Self::new(self.start, other.end)
    }
}

impl From<(usize, usize)> for Offsets {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl Display for Offsets {
    /// Formats the offsets as `start:end`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// A sentence which can be sliced by character offsets.
pub(crate) struct Sentence<'s> {
    text: &'s str,
    /// The byte index of each character followed by the byte length of the text.
    boundaries: Vec<usize>,
}

impl<'s> Sentence<'s> {
    pub(crate) fn new(text: &'s str) -> Self {
        let boundaries = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(once(text.len()))
            .collect();

        Self { text, boundaries }
    }

    /// Gets the text covered by the offsets.
    ///
    /// Returns `None` if the offsets are empty or exceed the sentence.
    pub(crate) fn get(&self, offsets: Offsets) -> Option<&'s str> {
        if offsets.start >= offsets.end {
            return None;
        }
        let start = *self.boundaries.get(offsets.start)?;
        let end = *self.boundaries.get(offsets.end)?;

        self.text.get(start..end)
    }
}
