//! Similarity ratios.
//!
//! All three share the normalisation `2 * matches / (len(a) + len(b))` and
//! report `1.0` for two empty sequences. Each is an upper bound of the next:
//! `real_quick >= quick >= full`.

use crate::model::MatchingBlock;
use std::collections::HashMap;
use std::hash::Hash;

/// Element counts of a target sequence, used by [`quick_ratio`].
pub type FrequencyTable<T> = HashMap<T, usize>;

pub(crate) fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Ratio over the matched lengths of `blocks`.
pub fn ratio(blocks: &[MatchingBlock], la: usize, lb: usize) -> f64 {
    let matches: usize = blocks.iter().map(|b| b.len).sum();
    calculate_ratio(matches, la + lb)
}

/// Count each element of `target`.
pub fn frequency_table<T: Eq + Hash + Clone>(target: &[T]) -> FrequencyTable<T> {
    let mut counts: FrequencyTable<T> = HashMap::new();
    for elt in target {
        *counts.entry(elt.clone()).or_insert(0) += 1;
    }
    counts
}

/// Ratio over the multiset intersection of `a` and the target counts,
/// ignoring positions.
pub fn quick_ratio<T: Eq + Hash>(a: &[T], target_counts: &FrequencyTable<T>, lb: usize) -> f64 {
    let mut avail: HashMap<&T, isize> = HashMap::new();
    let mut matches = 0;
    for elt in a {
        let numb = match avail.get(elt) {
            Some(&n) => n,
            None => target_counts.get(elt).copied().unwrap_or(0) as isize,
        };
        avail.insert(elt, numb - 1);
        if numb > 0 {
            matches += 1;
        }
    }
    calculate_ratio(matches, a.len() + lb)
}

/// Ratio over the shorter length alone.
pub fn real_quick_ratio(la: usize, lb: usize) -> f64 {
    calculate_ratio(la.min(lb), la + lb)
}
