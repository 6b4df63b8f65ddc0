//! Splitting text into line sequences.

/// Remove leading and trailing runs of `\r` and `\n`.
pub fn strip_linebreaks(s: &str) -> &str {
    s.trim_matches(|c| c == '\r' || c == '\n')
}

/// Split `text` into lines without their terminators.
///
/// Lines are separated by `\n`, unless the text contains `\r` but no `\n`,
/// in which case `\r` separates them. Each piece is then passed through
/// [`strip_linebreaks`], so `\r\n` endings come out clean.
///
/// Splitting is literal: the empty string yields one empty line and a
/// trailing terminator yields a trailing empty line.
///
/// ```
/// use seqalign_core::string_as_lines;
///
/// assert_eq!(string_as_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
/// assert_eq!(string_as_lines("a\rb"), vec!["a", "b"]);
/// ```
pub fn string_as_lines(text: &str) -> Vec<&str> {
    let separator = if text.contains('\r') && !text.contains('\n') {
        '\r'
    } else {
        '\n'
    };
    text.split(separator).map(strip_linebreaks).collect()
}
