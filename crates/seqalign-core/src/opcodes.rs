//! Edit-script derivation from matching blocks.

use crate::model::{MatchingBlock, OpTag, Opcode};

/// Turn ordered matching blocks into a contiguous, exhaustive edit script.
///
/// `blocks` must be sorted and end with the `(len(a), len(b), 0)` sentinel,
/// as produced by [`assemble_blocks`](crate::matcher::assemble_blocks); the
/// sentinel is what flushes the final gap.
pub fn derive_opcodes(blocks: &[MatchingBlock]) -> Vec<Opcode> {
    let mut i = 0;
    let mut j = 0;
    let mut answer = Vec::new();

    for block in blocks {
        let gap_tag = match (i < block.base_start, j < block.target_start) {
            (true, true) => Some(OpTag::Replace),
            (true, false) => Some(OpTag::Delete),
            (false, true) => Some(OpTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = gap_tag {
            answer.push(Opcode::new(
                tag,
                i,
                block.base_start,
                j,
                block.target_start,
            ));
        }

        i = block.base_end();
        j = block.target_end();

        if block.len > 0 {
            answer.push(Opcode::new(
                OpTag::Equal,
                block.base_start,
                i,
                block.target_start,
                j,
            ));
        }
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_between_equals() {
        let blocks = [
            MatchingBlock::new(0, 0, 1),
            MatchingBlock::new(2, 2, 2),
            MatchingBlock::new(4, 4, 0),
        ];
        assert_eq!(
            derive_opcodes(&blocks),
            vec![
                Opcode::new(OpTag::Equal, 0, 1, 0, 1),
                Opcode::new(OpTag::Replace, 1, 2, 1, 2),
                Opcode::new(OpTag::Equal, 2, 4, 2, 4),
            ]
        );
    }

    #[test]
    fn test_sentinel_flushes_trailing_gap() {
        let blocks = [MatchingBlock::new(0, 0, 2), MatchingBlock::new(2, 5, 0)];
        assert_eq!(
            derive_opcodes(&blocks),
            vec![
                Opcode::new(OpTag::Equal, 0, 2, 0, 2),
                Opcode::new(OpTag::Insert, 2, 2, 2, 5),
            ]
        );
    }

    #[test]
    fn test_delete_only() {
        let blocks = [MatchingBlock::new(3, 0, 0)];
        assert_eq!(
            derive_opcodes(&blocks),
            vec![Opcode::new(OpTag::Delete, 0, 3, 0, 0)]
        );
    }

    #[test]
    fn test_empty_sequences_give_no_opcodes() {
        assert!(derive_opcodes(&[MatchingBlock::new(0, 0, 0)]).is_empty());
    }

    #[test]
    fn test_python_documented_example() {
        // difflib docs: SequenceMatcher(None, "qabxcd", "abycdf")
        let blocks = [
            MatchingBlock::new(1, 0, 2),
            MatchingBlock::new(4, 3, 2),
            MatchingBlock::new(6, 6, 0),
        ];
        assert_eq!(
            derive_opcodes(&blocks),
            vec![
                Opcode::new(OpTag::Delete, 0, 1, 0, 0),
                Opcode::new(OpTag::Equal, 1, 3, 0, 2),
                Opcode::new(OpTag::Replace, 3, 4, 2, 3),
                Opcode::new(OpTag::Equal, 4, 6, 3, 5),
                Opcode::new(OpTag::Insert, 6, 6, 5, 6),
            ]
        );
    }
}
