use seqalign_core::{OpTag, Opcode};

/// Split a string into a character sequence
#[allow(dead_code)]
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Build `count` distinct filler lines that never match anything else
#[allow(dead_code)]
pub fn filler_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("filler-{i}")).collect()
}

/// Shorthand for building an expected opcode
#[allow(dead_code)]
pub fn op(tag: OpTag, a1: usize, a2: usize, b1: usize, b2: usize) -> Opcode {
    Opcode::new(tag, a1, a2, b1, b2)
}
