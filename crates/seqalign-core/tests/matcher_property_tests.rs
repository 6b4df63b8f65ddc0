//! Property tests for matching blocks, opcodes and ratios.

use proptest::prelude::*;
use seqalign_core::{OpTag, SequenceMatcher};
use std::sync::Arc;

fn small_alphabet() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', ' ']), 0..40)
}

proptest! {
    #[test]
    fn opcodes_are_exhaustive_and_contiguous(a in small_alphabet(), b in small_alphabet()) {
        let sm = SequenceMatcher::new(a.clone(), b.clone());
        let opcodes = sm.opcodes();

        if a.is_empty() && b.is_empty() {
            prop_assert!(opcodes.is_empty());
            return Ok(());
        }

        let (mut i, mut j) = (0, 0);
        for op in opcodes.iter() {
            prop_assert_eq!((op.base_start, op.target_start), (i, j));
            prop_assert!(op.base_len() + op.target_len() > 0);
            match op.tag {
                OpTag::Equal => prop_assert_eq!(op.base_len(), op.target_len()),
                OpTag::Replace => prop_assert!(op.base_len() > 0 && op.target_len() > 0),
                OpTag::Delete => prop_assert_eq!(op.target_len(), 0),
                OpTag::Insert => prop_assert_eq!(op.base_len(), 0),
            }
            i = op.base_end;
            j = op.target_end;
        }
        prop_assert_eq!((i, j), (a.len(), b.len()));
    }

    #[test]
    fn equal_opcodes_cover_equal_slices(a in small_alphabet(), b in small_alphabet()) {
        let sm = SequenceMatcher::new(a.clone(), b.clone());
        for op in sm.opcodes().iter().filter(|op| op.tag == OpTag::Equal) {
            prop_assert_eq!(&a[op.base_range()], &b[op.target_range()]);
        }
    }

    #[test]
    fn blocks_are_ordered_disjoint_and_merged(a in small_alphabet(), b in small_alphabet()) {
        let sm = SequenceMatcher::new(a.clone(), b.clone());
        let blocks = sm.matching_blocks();

        let (sentinel, real) = blocks.split_last().expect("sentinel is always present");
        prop_assert_eq!((sentinel.base_start, sentinel.target_start, sentinel.len), (a.len(), b.len(), 0));

        for block in real {
            prop_assert!(block.len > 0);
            prop_assert_eq!(&a[block.base_start..block.base_end()], &b[block.target_start..block.target_end()]);
        }
        for pair in real.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            prop_assert!(prev.base_end() <= next.base_start);
            prop_assert!(prev.target_end() <= next.target_start);
            prop_assert!(!prev.is_adjacent_to(&next));
        }
    }

    #[test]
    fn repeated_queries_are_idempotent(a in small_alphabet(), b in small_alphabet()) {
        let sm = SequenceMatcher::new(a, b);
        let first_blocks = sm.matching_blocks();
        let first_ops = sm.opcodes();
        prop_assert!(Arc::ptr_eq(&first_blocks, &sm.matching_blocks()));
        prop_assert!(Arc::ptr_eq(&first_ops, &sm.opcodes()));
        prop_assert_eq!(sm.grouped_opcodes(2), sm.grouped_opcodes(2));
    }

    #[test]
    fn ratios_are_ordered_upper_bounds(a in small_alphabet(), b in small_alphabet()) {
        let sm = SequenceMatcher::new(a, b);
        let (full, quick, real_quick) = (sm.ratio(), sm.quick_ratio(), sm.real_quick_ratio());
        prop_assert!((0.0..=1.0).contains(&full));
        prop_assert!(quick >= full - 1e-12);
        prop_assert!(real_quick >= quick - 1e-12);
    }

    #[test]
    fn longest_common_run_is_symmetric(a in small_alphabet(), b in small_alphabet()) {
        let forward = SequenceMatcher::without_junk(a.clone(), b.clone());
        let backward = SequenceMatcher::without_junk(b.clone(), a.clone());
        let f = forward.find_longest_match(0, a.len(), 0, b.len()).unwrap();
        let r = backward.find_longest_match(0, b.len(), 0, a.len()).unwrap();
        prop_assert_eq!(f.len, r.len);
    }

    #[test]
    fn reused_session_matches_fresh_session(
        a in small_alphabet(),
        b in small_alphabet(),
        c in small_alphabet(),
    ) {
        let mut sm = SequenceMatcher::new(a, b.clone());
        sm.opcodes();
        sm.quick_ratio();
        sm.set_base(c.clone());

        let fresh = SequenceMatcher::new(c, b);
        prop_assert_eq!(&*sm.opcodes(), &*fresh.opcodes());
        prop_assert_eq!(sm.quick_ratio(), fresh.quick_ratio());
    }
}
