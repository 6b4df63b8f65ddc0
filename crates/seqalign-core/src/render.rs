//! Plain-text hunk renderer for grouped opcodes.

use crate::model::{Group, OpTag};
use std::fmt::Display;

/// Render grouped opcodes as unified-style hunks.
///
/// Each group gets an `@@ -start,len +start,len @@` header followed by its
/// lines: `' '` for context, `'-'` for base lines removed, `'+'` for target
/// lines added. Starts are 1-based; a one-line range prints just its start
/// and an empty range prints the line before it with length `0`.
///
/// Returns an empty string for no groups.
///
/// # Panics
///
/// Panics if a group refers to positions outside `a` or `b`, or has a
/// reversed range. Groups from [`SequenceMatcher::grouped_opcodes`] over the
/// same `a` and `b` never do.
///
/// [`SequenceMatcher::grouped_opcodes`]: crate::session::SequenceMatcher::grouped_opcodes
pub fn render_hunks<T: Display>(a: &[T], b: &[T], groups: &[Group]) -> String {
    let mut out = String::new();

    for group in groups {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(first.base_start, last.base_end),
            format_range(first.target_start, last.target_end)
        ));

        for op in group {
            match op.tag {
                OpTag::Equal => push_lines(&mut out, ' ', &a[op.base_range()]),
                OpTag::Delete => push_lines(&mut out, '-', &a[op.base_range()]),
                OpTag::Insert => push_lines(&mut out, '+', &b[op.target_range()]),
                OpTag::Replace => {
                    push_lines(&mut out, '-', &a[op.base_range()]);
                    push_lines(&mut out, '+', &b[op.target_range()]);
                }
            }
        }
    }

    out
}

fn format_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    match length {
        0 => format!("{},0", start),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, length),
    }
}

fn push_lines<T: Display>(out: &mut String, prefix: char, lines: &[T]) {
    for line in lines {
        out.push(prefix);
        out.push_str(&line.to_string());
        out.push('\n');
    }
}
