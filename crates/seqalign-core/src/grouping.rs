//! Context-windowed grouping of opcodes into hunks.

use crate::model::{Group, OpTag, Opcode};

/// Lines of unchanged context kept around each change by default.
pub const DEFAULT_CONTEXT: usize = 3;

/// Split `opcodes` into hunks with at most `context` unchanged elements on
/// each side of every change.
///
/// The leading and trailing `equal` opcodes are trimmed to `context`
/// elements; an interior `equal` longer than `2 * context` ends the current
/// group (keeping its first `context` elements) and opens the next one (with
/// its last `context` elements). A final group holding a lone `equal` is
/// dropped, so identical sequences yield no groups.
///
/// `context == 0` means [`DEFAULT_CONTEXT`]. `opcodes` is not modified.
pub fn group_opcodes(opcodes: &[Opcode], context: usize) -> Vec<Group> {
    let n = if context == 0 { DEFAULT_CONTEXT } else { context };
    let mut codes: Vec<Opcode> = opcodes.to_vec();

    if let Some(first) = codes.first_mut() {
        if first.tag == OpTag::Equal {
            first.base_start = first.base_start.max(first.base_end.saturating_sub(n));
            first.target_start = first.target_start.max(first.target_end.saturating_sub(n));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == OpTag::Equal {
            last.base_end = last.base_end.min(last.base_start.saturating_add(n));
            last.target_end = last.target_end.min(last.target_start.saturating_add(n));
        }
    }

    let nn = n.saturating_add(n);
    let mut groups: Vec<Group> = Vec::new();
    let mut group: Group = Vec::new();

    for code in codes {
        let mut code = code;
        if code.tag == OpTag::Equal && code.base_len() > nn {
            group.push(Opcode::new(
                OpTag::Equal,
                code.base_start,
                code.base_end.min(code.base_start.saturating_add(n)),
                code.target_start,
                code.target_end.min(code.target_start.saturating_add(n)),
            ));
            groups.push(std::mem::take(&mut group));
            code.base_start = code.base_start.max(code.base_end.saturating_sub(n));
            code.target_start = code.target_start.max(code.target_end.saturating_sub(n));
        }
        group.push(code);
    }

    let lone_equal = group.len() == 1 && group[0].tag == OpTag::Equal;
    if !group.is_empty() && !lone_equal {
        groups.push(group);
    }

    groups
}
