//! Target-sequence index used by the matcher.
//!
//! Maps each useful element of the target to the ascending list of positions
//! where it occurs. Junk elements and "popular" elements (too frequent to be
//! good anchors) are left out of the map and recorded in their own sets.

use crate::classifier::JunkClassifier;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Targets shorter than this never have popular elements.
pub const POPULAR_MIN_LEN: usize = 200;

/// Index over a target sequence.
#[derive(Debug, Clone)]
pub struct TargetIndex<T> {
    positions: HashMap<T, Vec<usize>>,
    junk: HashSet<T>,
    popular: HashSet<T>,
}

impl<T: Eq + Hash + Clone> TargetIndex<T> {
    /// Build the index for `target`.
    ///
    /// An element becomes popular the moment it is seen again while its
    /// accumulated position list times 100 already exceeds the target length.
    /// Its list is dropped at that point; a later occurrence starts a fresh
    /// list, which is discarded after the scan along with every other popular
    /// element. The outcome therefore depends on scan order, and that is kept
    /// as-is.
    pub fn build(target: &[T], junk: Option<&JunkClassifier<T>>) -> Self {
        let n = target.len();
        let mut positions: HashMap<T, Vec<usize>> = HashMap::new();
        let mut popular: HashSet<T> = HashSet::new();

        for (i, elt) in target.iter().enumerate() {
            match positions.get_mut(elt) {
                Some(indices) => {
                    if n >= POPULAR_MIN_LEN && indices.len() * 100 > n {
                        popular.insert(elt.clone());
                        positions.remove(elt);
                    } else {
                        indices.push(i);
                    }
                }
                None => {
                    positions.insert(elt.clone(), vec![i]);
                }
            }
        }

        for elt in &popular {
            positions.remove(elt);
        }

        let mut junk_set: HashSet<T> = HashSet::new();
        if let Some(classifier) = junk {
            let junk_popular: Vec<T> = popular
                .iter()
                .filter(|elt| classifier.is_junk(elt))
                .cloned()
                .collect();
            for elt in junk_popular {
                popular.remove(&elt);
                junk_set.insert(elt);
            }

            let junk_indexed: Vec<T> = positions
                .keys()
                .filter(|elt| classifier.is_junk(elt))
                .cloned()
                .collect();
            for elt in junk_indexed {
                positions.remove(&elt);
                junk_set.insert(elt);
            }
        }

        tracing::debug!(
            target_len = n,
            indexed_count = positions.len(),
            popular_count = popular.len(),
            junk_count = junk_set.len(),
            "target index built"
        );

        Self {
            positions,
            junk: junk_set,
            popular,
        }
    }
}

impl<T: Eq + Hash> TargetIndex<T> {
    /// Positions of `elt` in the target, ascending. Empty for unindexed elements.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.positions.get(elt).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    pub fn is_popular(&self, elt: &T) -> bool {
        self.popular.contains(elt)
    }

    /// Number of distinct elements usable as anchors
    pub fn indexed_len(&self) -> usize {
        self.positions.len()
    }

    pub fn junk_len(&self) -> usize {
        self.junk.len()
    }

    pub fn popular_len(&self) -> usize {
        self.popular.len()
    }
}
