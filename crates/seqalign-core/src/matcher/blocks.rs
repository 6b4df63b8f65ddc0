use crate::errors::{Result, SeqAlignError};
use crate::index::TargetIndex;
use crate::matcher::longest::find_longest_match;
use crate::model::MatchingBlock;
use std::convert::Infallible;
use std::hash::Hash;

/// Assemble the full matching-block list for `a` and `b`.
///
/// Ranges are processed from an explicit stack: each range contributes its
/// longest match, then the sub-ranges before and after it (each only when
/// non-empty on both sides) are pushed, left first. The collected blocks are
/// sorted, blocks that touch in both sequences are merged, and the
/// `(len(a), len(b), 0)` sentinel is appended.
pub fn assemble_blocks<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &TargetIndex<T>,
) -> Vec<MatchingBlock> {
    match assemble_with(a, b, index, || Ok::<(), Infallible>(())) {
        Ok(blocks) => blocks,
        Err(never) => match never {},
    }
}

/// Like [`assemble_blocks`], polling `should_abort` before each range.
///
/// # Errors
///
/// - `Cancelled` when `should_abort` returns `true`
pub fn assemble_blocks_cancellable<T, F>(
    a: &[T],
    b: &[T],
    index: &TargetIndex<T>,
    mut should_abort: F,
) -> Result<Vec<MatchingBlock>>
where
    T: Eq + Hash,
    F: FnMut() -> bool,
{
    assemble_with(a, b, index, || {
        if should_abort() {
            Err(SeqAlignError::Cancelled {
                op: "matching_blocks".to_string(),
            })
        } else {
            Ok(())
        }
    })
}

fn assemble_with<T, E, C>(
    a: &[T],
    b: &[T],
    index: &TargetIndex<T>,
    mut checkpoint: C,
) -> std::result::Result<Vec<MatchingBlock>, E>
where
    T: Eq + Hash,
    C: FnMut() -> std::result::Result<(), E>,
{
    let la = a.len();
    let lb = b.len();

    let mut queue = vec![(0, la, 0, lb)];
    let mut found: Vec<MatchingBlock> = Vec::new();

    while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
        checkpoint()?;

        let m = find_longest_match(a, b, index, a_lo, a_hi, b_lo, b_hi);
        if m.len == 0 {
            continue;
        }
        found.push(m);
        if a_lo < m.base_start && b_lo < m.target_start {
            queue.push((a_lo, m.base_start, b_lo, m.target_start));
        }
        if m.base_end() < a_hi && m.target_end() < b_hi {
            queue.push((m.base_end(), a_hi, m.target_end(), b_hi));
        }
    }

    found.sort();

    let mut merged = merge_adjacent(found);
    merged.push(MatchingBlock::new(la, lb, 0));
    Ok(merged)
}

/// Collapse sorted blocks that continue each other in both sequences.
fn merge_adjacent(sorted: Vec<MatchingBlock>) -> Vec<MatchingBlock> {
    let mut out: Vec<MatchingBlock> = Vec::with_capacity(sorted.len() + 1);
    let mut current = MatchingBlock::default();

    for block in sorted {
        if current.is_adjacent_to(&block) {
            current.len += block.len;
        } else {
            if current.len > 0 {
                out.push(current);
            }
            current = block;
        }
    }
    if current.len > 0 {
        out.push(current);
    }
    out
}
