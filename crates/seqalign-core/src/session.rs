//! Comparison sessions.
//!
//! A [`SequenceMatcher`] holds a base sequence, a target sequence and an
//! optional junk classifier, and lazily derives everything else from them:
//! the target index, matching blocks, opcodes and the target frequency table.
//! Each derived artifact is memoised until one of the sequences changes.
//!
//! Replacing the base keeps the target index and frequency table, since both
//! depend on the target alone. Replacing the target drops everything.

use crate::cache::{CacheState, Memo};
use crate::classifier::{JunkClassifier, JunkPolicy, WhitespaceElement};
use crate::errors::{ExError, Result, SeqAlignError};
use crate::grouping::group_opcodes;
use crate::index::TargetIndex;
use crate::matcher::{self, assemble_blocks, assemble_blocks_cancellable};
use crate::model::{Group, MatchingBlock, Opcode, Side};
use crate::opcodes::derive_opcodes;
use crate::ratio::{self, FrequencyTable};
use crate::{log_op_end, log_op_error, log_op_start};
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;

/// Derived artifacts memoised by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Index,
    MatchingBlocks,
    Opcodes,
    FrequencyTable,
}

/// Compares a base sequence against a target sequence.
///
/// Sessions are cheap to query repeatedly: derived results are returned as
/// shared `Arc`s and recomputed only after [`set_base`](Self::set_base),
/// [`set_target`](Self::set_target) or [`set_seqs`](Self::set_seqs) change a
/// sequence. A session is `Send` but not `Sync`; share results, not sessions.
///
/// # Example
///
/// ```
/// use seqalign_core::{OpTag, SequenceMatcher};
///
/// let sm = SequenceMatcher::new(
///     "abcd".chars().collect(),
///     "bcde".chars().collect(),
/// );
/// let tags: Vec<OpTag> = sm.opcodes().iter().map(|op| op.tag).collect();
/// assert_eq!(tags, vec![OpTag::Delete, OpTag::Equal, OpTag::Insert]);
/// assert_eq!(sm.ratio(), 0.75);
/// ```
pub struct SequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    junk: Option<JunkClassifier<T>>,
    index: Memo<TargetIndex<T>>,
    blocks: Memo<Vec<MatchingBlock>>,
    opcodes: Memo<Vec<Opcode>>,
    counts: Memo<FrequencyTable<T>>,
}

impl<T: Eq + Hash + Clone + WhitespaceElement> SequenceMatcher<T> {
    /// Session using the default classifier: single whitespace characters
    /// are junk.
    pub fn new(a: Vec<T>, b: Vec<T>) -> Self {
        Self::from_parts(a, b, Some(JunkClassifier::whitespace()))
    }
}

impl<T: Eq + Hash + Clone + AsRef<str>> SequenceMatcher<T> {
    /// Session for string elements using one of the built-in policies.
    pub fn with_policy(a: Vec<T>, b: Vec<T>, policy: JunkPolicy) -> Self {
        Self::from_parts(a, b, policy.classifier())
    }
}

impl<T: Eq + Hash + Clone> SequenceMatcher<T> {
    /// Session in which nothing is junk.
    pub fn without_junk(a: Vec<T>, b: Vec<T>) -> Self {
        Self::from_parts(a, b, None)
    }

    /// Session with a caller-supplied classifier.
    pub fn with_junk(a: Vec<T>, b: Vec<T>, junk: JunkClassifier<T>) -> Self {
        Self::from_parts(a, b, Some(junk))
    }

    /// Start a session whose sequences may not be known yet.
    pub fn builder() -> SequenceMatcherBuilder<T> {
        SequenceMatcherBuilder::default()
    }

    fn from_parts(a: Vec<T>, b: Vec<T>, junk: Option<JunkClassifier<T>>) -> Self {
        Self {
            a,
            b,
            junk,
            index: Memo::new("index"),
            blocks: Memo::new("matching_blocks"),
            opcodes: Memo::new("opcodes"),
            counts: Memo::new("frequency_table"),
        }
    }

    // ---------- sequences ----------

    pub fn base(&self) -> &[T] {
        &self.a
    }

    pub fn target(&self) -> &[T] {
        &self.b
    }

    /// Replace both sequences.
    pub fn set_seqs(&mut self, a: Vec<T>, b: Vec<T>) {
        self.set_base(a);
        self.set_target(b);
    }

    /// Replace the base sequence. A value-equal replacement is a no-op.
    pub fn set_base(&mut self, a: Vec<T>) {
        if a == self.a {
            return;
        }
        self.a = a;
        self.blocks.invalidate();
        self.opcodes.invalidate();
    }

    /// Replace the target sequence. A value-equal replacement is a no-op.
    pub fn set_target(&mut self, b: Vec<T>) {
        if b == self.b {
            return;
        }
        self.b = b;
        self.index.invalidate();
        self.counts.invalidate();
        self.blocks.invalidate();
        self.opcodes.invalidate();
    }

    pub fn cache_state(&self, artifact: Artifact) -> CacheState {
        match artifact {
            Artifact::Index => self.index.state(),
            Artifact::MatchingBlocks => self.blocks.state(),
            Artifact::Opcodes => self.opcodes.state(),
            Artifact::FrequencyTable => self.counts.state(),
        }
    }

    // ---------- target index ----------

    fn index(&self) -> Arc<TargetIndex<T>> {
        self.index
            .get_or_compute(|| TargetIndex::build(&self.b, self.junk.as_ref()))
    }

    /// Whether `elt` was classified as junk while indexing the target.
    ///
    /// Only elements that occur in the target can be junk.
    pub fn is_target_junk(&self, elt: &T) -> bool {
        self.index().is_junk(elt)
    }

    /// Whether `elt` is too frequent in the target to anchor a match.
    pub fn is_target_popular(&self, elt: &T) -> bool {
        self.index().is_popular(elt)
    }

    // ---------- matching ----------

    /// Longest matching run in `base[a_lo..a_hi]` and `target[b_lo..b_hi]`.
    ///
    /// # Errors
    ///
    /// - `RangeOutOfBounds` when a range is reversed or exceeds its sequence
    pub fn find_longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> Result<MatchingBlock> {
        check_range(Side::Base, a_lo, a_hi, self.a.len())?;
        check_range(Side::Target, b_lo, b_hi, self.b.len())?;
        let index = self.index();
        Ok(matcher::find_longest_match(
            &self.a, &self.b, &index, a_lo, a_hi, b_lo, b_hi,
        ))
    }

    /// Ordered matching blocks, ending with the `(len(a), len(b), 0)` sentinel.
    pub fn matching_blocks(&self) -> Arc<Vec<MatchingBlock>> {
        let computed = self.blocks.get_or_try_compute(|| {
            self.compute_blocks(|a, b, index| Ok::<_, Infallible>(assemble_blocks(a, b, index)))
        });
        match computed {
            Ok(blocks) => blocks,
            Err(never) => match never {},
        }
    }

    /// [`matching_blocks`](Self::matching_blocks) with cooperative
    /// cancellation. `should_abort` is polled between sub-ranges.
    ///
    /// A cancelled computation leaves nothing cached.
    ///
    /// # Errors
    ///
    /// - `Cancelled` when `should_abort` returns `true`
    pub fn matching_blocks_cancellable<F>(&self, should_abort: F) -> Result<Arc<Vec<MatchingBlock>>>
    where
        F: FnMut() -> bool,
    {
        self.blocks.get_or_try_compute(|| {
            self.compute_blocks(|a, b, index| assemble_blocks_cancellable(a, b, index, should_abort))
        })
    }

    fn compute_blocks<E, F>(&self, assemble: F) -> std::result::Result<Vec<MatchingBlock>, E>
    where
        E: Clone + Into<ExError>,
        F: FnOnce(&[T], &[T], &TargetIndex<T>) -> std::result::Result<Vec<MatchingBlock>, E>,
    {
        let start = Instant::now();
        log_op_start!(
            "matching_blocks",
            base_len = self.a.len(),
            target_len = self.b.len()
        );

        let index = self.index();
        match assemble(&self.a, &self.b, &index) {
            Ok(blocks) => {
                log_op_end!(
                    "matching_blocks",
                    duration_ms = start.elapsed().as_millis() as u64,
                    base_len = self.a.len(),
                    target_len = self.b.len(),
                    block_count = blocks.len()
                );
                Ok(blocks)
            }
            Err(err) => {
                log_op_error!(
                    "matching_blocks",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    base_len = self.a.len(),
                    target_len = self.b.len()
                );
                Err(err)
            }
        }
    }

    // ---------- edit script ----------

    /// Contiguous edit script turning the base into the target.
    ///
    /// Empty when both sequences are empty.
    pub fn opcodes(&self) -> Arc<Vec<Opcode>> {
        self.opcodes
            .get_or_compute(|| derive_opcodes(&self.matching_blocks()))
    }

    /// Hunks of changes with `context` unchanged elements around each.
    /// `0` selects [`DEFAULT_CONTEXT`](crate::grouping::DEFAULT_CONTEXT).
    ///
    /// The cached opcodes are left untouched.
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Group> {
        let groups = group_opcodes(&self.opcodes(), context);
        tracing::debug!(context, group_count = groups.len(), "opcodes grouped");
        groups
    }

    // ---------- similarity ----------

    /// `2 * M / (len(a) + len(b))` where `M` counts matched elements.
    pub fn ratio(&self) -> f64 {
        ratio::ratio(&self.matching_blocks(), self.a.len(), self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) that ignores element order.
    pub fn quick_ratio(&self) -> f64 {
        let counts = self
            .counts
            .get_or_compute(|| ratio::frequency_table(&self.b));
        ratio::quick_ratio(&self.a, &counts, self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        ratio::real_quick_ratio(self.a.len(), self.b.len())
    }
}

fn check_range(side: Side, lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi || hi > len {
        return Err(SeqAlignError::RangeOutOfBounds { side, lo, hi, len });
    }
    Ok(())
}

impl<T> fmt::Debug for SequenceMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("base_len", &self.a.len())
            .field("target_len", &self.b.len())
            .field("junk", &self.junk)
            .field("index", &self.index.state())
            .field("blocks", &self.blocks.state())
            .field("opcodes", &self.opcodes.state())
            .field("counts", &self.counts.state())
            .finish()
    }
}

/// Assembles a [`SequenceMatcher`] from parts supplied one at a time.
///
/// Unlike the direct constructors, a builder without a classifier produces
/// a session in which nothing is junk.
pub struct SequenceMatcherBuilder<T> {
    base: Option<Vec<T>>,
    target: Option<Vec<T>>,
    junk: Option<JunkClassifier<T>>,
}

impl<T> Default for SequenceMatcherBuilder<T> {
    fn default() -> Self {
        Self {
            base: None,
            target: None,
            junk: None,
        }
    }
}

impl<T: Eq + Hash + Clone> SequenceMatcherBuilder<T> {
    pub fn base(mut self, a: Vec<T>) -> Self {
        self.base = Some(a);
        self
    }

    pub fn target(mut self, b: Vec<T>) -> Self {
        self.target = Some(b);
        self
    }

    pub fn junk(mut self, junk: JunkClassifier<T>) -> Self {
        self.junk = Some(junk);
        self
    }

    pub fn junk_fn<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.junk(JunkClassifier::from_fn(f))
    }

    /// # Errors
    ///
    /// - `MissingSequence` when the base or target was never supplied
    pub fn build(self) -> Result<SequenceMatcher<T>> {
        let a = self.base.ok_or(SeqAlignError::MissingSequence { side: Side::Base })?;
        let b = self.target.ok_or(SeqAlignError::MissingSequence {
            side: Side::Target,
        })?;
        Ok(SequenceMatcher::from_parts(a, b, self.junk))
    }
}
