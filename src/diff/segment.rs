use core::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of change a [`Diff`] segment applies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Delete,
    Insert,
    Equal,
}

/// One segment of a diff script: an operation and the text it covers.
///
/// The text is held as characters so the engine can slice and index it
/// without re-walking UTF-8 boundaries; [`Diff::text`] reassembles it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct Diff {
    pub(crate) op: Op,
    pub(crate) text: Vec<char>,
}

impl Diff {
    #[must_use]
    pub fn new(op: Op, text: &str) -> Self {
        Self {
            op,
            text: text.chars().collect(),
        }
    }

    /// A segment present in both texts.
    #[must_use]
    pub fn equal(text: &str) -> Self { Self::new(Op::Equal, text) }

    /// A segment present only in the destination text.
    #[must_use]
    pub fn insert(text: &str) -> Self { Self::new(Op::Insert, text) }

    /// A segment present only in the source text.
    #[must_use]
    pub fn delete(text: &str) -> Self { Self::new(Op::Delete, text) }

    pub(crate) fn from_chars(op: Op, text: &[char]) -> Self {
        Self {
            op,
            text: text.to_vec(),
        }
    }

    #[must_use]
    pub fn op(&self) -> Op { self.op }

    /// The segment's text, reassembled into a `String`.
    #[must_use]
    pub fn text(&self) -> String { self.text.iter().collect() }

    /// The number of characters the segment covers.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }
}

impl Display for Diff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = self.text().replace('\n', "\\n");
        match self.op {
            Op::Delete => write!(f, "<delete '{text}'>"),
            Op::Insert => write!(f, "<insert '{text}'>"),
            Op::Equal => write!(f, "<equal '{text}'>"),
        }
    }
}

impl Debug for Diff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{self}") }
}
