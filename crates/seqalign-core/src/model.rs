//! Value types produced by the matcher.
//!
//! All types are plain data: `Copy` where possible, serde-serialisable, and
//! ordered by their fields so that sorting needs no custom comparator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Which of the two sequences in a comparison something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The sequence being transformed (`a`)
    Base,
    /// The sequence being transformed into (`b`)
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Base => f.write_str("base"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// A run of `len` pairwise-equal elements starting at `base_start` in the
/// base sequence and `target_start` in the target sequence.
///
/// The derived ordering compares `(base_start, target_start, len)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct MatchingBlock {
    pub base_start: usize,
    pub target_start: usize,
    pub len: usize,
}

impl MatchingBlock {
    pub fn new(base_start: usize, target_start: usize, len: usize) -> Self {
        Self {
            base_start,
            target_start,
            len,
        }
    }

    /// One past the last base index covered by the block
    pub fn base_end(&self) -> usize {
        self.base_start + self.len
    }

    /// One past the last target index covered by the block
    pub fn target_end(&self) -> usize {
        self.target_start + self.len
    }

    /// True when `next` starts exactly where this block ends in both sequences
    pub fn is_adjacent_to(&self, next: &MatchingBlock) -> bool {
        self.base_end() == next.base_start && self.target_end() == next.target_start
    }
}

/// Edit operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl OpTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpTag::Equal => "equal",
            OpTag::Replace => "replace",
            OpTag::Delete => "delete",
            OpTag::Insert => "insert",
        }
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit operation over the half-open ranges
/// `[base_start, base_end)` and `[target_start, target_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub base_start: usize,
    pub base_end: usize,
    pub target_start: usize,
    pub target_end: usize,
}

impl Opcode {
    pub fn new(
        tag: OpTag,
        base_start: usize,
        base_end: usize,
        target_start: usize,
        target_end: usize,
    ) -> Self {
        Self {
            tag,
            base_start,
            base_end,
            target_start,
            target_end,
        }
    }

    pub fn base_range(&self) -> Range<usize> {
        self.base_start..self.base_end
    }

    pub fn target_range(&self) -> Range<usize> {
        self.target_start..self.target_end
    }

    pub fn base_len(&self) -> usize {
        self.base_end - self.base_start
    }

    pub fn target_len(&self) -> usize {
        self.target_end - self.target_start
    }
}

/// A hunk: consecutive opcodes bounded by a limited amount of unchanged
/// context on each side.
pub type Group = Vec<Opcode>;
