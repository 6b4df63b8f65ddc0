use crate::index::TargetIndex;
use crate::model::MatchingBlock;
use std::collections::HashMap;
use std::hash::Hash;

/// Find the longest matching run in `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Among runs of maximal length the one starting earliest in `a` wins, then
/// the one starting earliest in `b`. Anchors come from `index`, so junk and
/// popular elements never start a run. The best run is then grown in two
/// phases: first across equal elements whose target side is not junk (this
/// is how popular elements get absorbed), then across equal elements whose
/// target side is junk.
///
/// Returns a zero-length block at `(a_lo, b_lo)` when nothing matches.
///
/// Ranges must lie within the sequences; callers validate them.
pub fn find_longest_match<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &TargetIndex<T>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> MatchingBlock {
    let mut best_i = a_lo;
    let mut best_j = b_lo;
    let mut best_size = 0;

    // j2len[j] = length of the run ending at (i - 1, j)
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, elt) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        for &j in index.positions(elt) {
            if j < b_lo {
                continue;
            }
            if j >= b_hi {
                break;
            }
            let k = j
                .checked_sub(1)
                .and_then(|prev| j2len.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            new_j2len.insert(j, k);
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        j2len = new_j2len;
    }

    let not_junk = |elt: &T| !index.is_junk(elt);
    let junk = |elt: &T| index.is_junk(elt);
    let phases: [&dyn Fn(&T) -> bool; 2] = [&not_junk, &junk];

    for admit in phases {
        while best_i > a_lo
            && best_j > b_lo
            && admit(&b[best_j - 1])
            && a[best_i - 1] == b[best_j - 1]
        {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < a_hi
            && best_j + best_size < b_hi
            && admit(&b[best_j + best_size])
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }
    }

    MatchingBlock::new(best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::JunkClassifier;

    fn longest(a: &str, b: &str) -> MatchingBlock {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let index = TargetIndex::build(&b, None);
        find_longest_match(&a, &b, &index, 0, a.len(), 0, b.len())
    }

    #[test]
    fn test_simple_run() {
        assert_eq!(longest("xabcdy", "zzabcdq"), MatchingBlock::new(1, 2, 4));
    }

    #[test]
    fn test_no_match_reports_range_start() {
        let a: Vec<char> = "abc".chars().collect();
        let b: Vec<char> = "xyz".chars().collect();
        let index = TargetIndex::build(&b, None);
        assert_eq!(
            find_longest_match(&a, &b, &index, 1, 3, 2, 3),
            MatchingBlock::new(1, 2, 0)
        );
    }

    #[test]
    fn test_ties_prefer_earliest_in_base_then_target() {
        // "ab" appears twice in each; the first pairing wins.
        assert_eq!(longest("ab-ab", "ab+ab"), MatchingBlock::new(0, 0, 2));
        // base run at 0 matches target at 1 and 3; earliest target wins.
        assert_eq!(longest("xy", "qxyxy"), MatchingBlock::new(0, 1, 2));
    }

    #[test]
    fn test_respects_sub_ranges() {
        let a: Vec<char> = "abcabc".chars().collect();
        let b: Vec<char> = "abcabc".chars().collect();
        let index = TargetIndex::build(&b, None);
        assert_eq!(
            find_longest_match(&a, &b, &index, 3, 6, 0, 3),
            MatchingBlock::new(3, 0, 3)
        );
        assert_eq!(
            find_longest_match(&a, &b, &index, 1, 2, 4, 6),
            MatchingBlock::new(1, 4, 1)
        );
    }

    #[test]
    fn test_junk_only_extends_never_anchors() {
        // Python's difflib documentation example: with blanks as junk the
        // match cannot start on the leading space of " abcd".
        let a: Vec<char> = " abcd".chars().collect();
        let b: Vec<char> = "abcd abcd".chars().collect();
        let junk = JunkClassifier::from_fn(|c: &char| *c == ' ');
        let index = TargetIndex::build(&b, Some(&junk));
        assert_eq!(
            find_longest_match(&a, &b, &index, 0, 5, 0, 9),
            MatchingBlock::new(1, 0, 4)
        );

        let index = TargetIndex::build(&b, None);
        assert_eq!(
            find_longest_match(&a, &b, &index, 0, 5, 0, 9),
            MatchingBlock::new(0, 4, 5)
        );
    }

    #[test]
    fn test_junk_extension_after_plain_extension() {
        // Anchor is "b"; the trailing junk space is absorbed in phase two.
        let a: Vec<char> = "ab ".chars().collect();
        let b: Vec<char> = "ab ".chars().collect();
        let junk = JunkClassifier::from_fn(|c: &char| *c == ' ');
        let index = TargetIndex::build(&b, Some(&junk));
        assert_eq!(
            find_longest_match(&a, &b, &index, 0, 3, 0, 3),
            MatchingBlock::new(0, 0, 3)
        );
    }

    #[test]
    fn test_popular_elements_are_absorbed_by_extension() {
        // 'p' is popular in a 200-long target, so it cannot anchor, but the
        // non-junk extension phase still walks across it.
        let mut b: Vec<char> = vec!['p'; 198];
        b.push('x');
        b.push('p');
        let a: Vec<char> = vec!['p', 'x', 'p'];
        let index = TargetIndex::build(&b, None);
        assert!(index.is_popular(&'p'));
        assert_eq!(
            find_longest_match(&a, &b, &index, 0, 3, 0, b.len()),
            MatchingBlock::new(0, 197, 3)
        );
    }
}
