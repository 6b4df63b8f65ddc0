//! Junk classification for sequence elements.
//!
//! A junk classifier is a pure predicate over elements. Elements it accepts
//! are never used as anchors when searching for matches, although a match may
//! still be extended across them.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Junk predicate stored by a comparison session.
///
/// Built-in policies are plain function pointers so they work for borrowed
/// elements of any lifetime; caller closures are shared behind an `Arc`.
pub enum JunkClassifier<T> {
    Plain(fn(&T) -> bool),
    Shared(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T> JunkClassifier<T> {
    /// Wrap a caller-supplied predicate.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        JunkClassifier::Shared(Arc::new(f))
    }

    pub fn is_junk(&self, element: &T) -> bool {
        match self {
            JunkClassifier::Plain(f) => f(element),
            JunkClassifier::Shared(f) => f(element),
        }
    }
}

impl<T: WhitespaceElement> JunkClassifier<T> {
    /// The default classifier for elements that can be whitespace.
    pub fn whitespace() -> Self {
        JunkClassifier::Plain(|e: &T| e.is_whitespace_junk())
    }
}

impl<T> Clone for JunkClassifier<T> {
    fn clone(&self) -> Self {
        match self {
            JunkClassifier::Plain(f) => JunkClassifier::Plain(*f),
            JunkClassifier::Shared(f) => JunkClassifier::Shared(Arc::clone(f)),
        }
    }
}

impl<T> std::fmt::Debug for JunkClassifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JunkClassifier::Plain(_) => f.write_str("JunkClassifier::Plain"),
            JunkClassifier::Shared(_) => f.write_str("JunkClassifier::Shared"),
        }
    }
}

/// Characters treated as junk by the default classifier.
const WHITESPACE_JUNK: [char; 5] = [' ', '\t', '\n', '\x0c', '\r'];

/// Elements that the default classifier can inspect.
///
/// An element is whitespace junk when it *is* a single whitespace character:
/// `' '` or `"\t"` qualify, `"  "` and `""` do not.
pub trait WhitespaceElement {
    fn is_whitespace_junk(&self) -> bool;
}

impl WhitespaceElement for char {
    fn is_whitespace_junk(&self) -> bool {
        WHITESPACE_JUNK.contains(self)
    }
}

impl WhitespaceElement for str {
    fn is_whitespace_junk(&self) -> bool {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_whitespace_junk(),
            _ => false,
        }
    }
}

impl WhitespaceElement for String {
    fn is_whitespace_junk(&self) -> bool {
        self.as_str().is_whitespace_junk()
    }
}

impl<T: WhitespaceElement + ?Sized> WhitespaceElement for &T {
    fn is_whitespace_junk(&self) -> bool {
        (**self).is_whitespace_junk()
    }
}

/// Default classifier: single whitespace characters are junk.
pub fn whitespace<T: WhitespaceElement + ?Sized>(element: &T) -> bool {
    element.is_whitespace_junk()
}

/// Line classifier: empty or whitespace-only lines are junk.
pub fn blank_line<T: AsRef<str> + ?Sized>(element: &T) -> bool {
    element.as_ref().trim().is_empty()
}

/// Built-in junk policies for string sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JunkPolicy {
    /// Nothing is junk
    None,
    /// Single whitespace characters are junk
    #[default]
    Whitespace,
    /// Empty and whitespace-only lines are junk
    BlankLines,
}

impl JunkPolicy {
    /// Materialise the policy as a session classifier.
    pub fn classifier<T: AsRef<str>>(self) -> Option<JunkClassifier<T>> {
        match self {
            JunkPolicy::None => None,
            JunkPolicy::Whitespace => Some(JunkClassifier::Plain(|e: &T| {
                e.as_ref().is_whitespace_junk()
            })),
            JunkPolicy::BlankLines => Some(JunkClassifier::Plain(|e: &T| blank_line(e))),
        }
    }
}

impl std::str::FromStr for JunkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(JunkPolicy::None),
            "whitespace" => Ok(JunkPolicy::Whitespace),
            "blank-lines" | "blank_lines" => Ok(JunkPolicy::BlankLines),
            other => Err(format!(
                "unknown junk policy: {} (expected none, whitespace or blank-lines)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_whitespace_chars_are_junk() {
        for c in [' ', '\t', '\n', '\x0c', '\r'] {
            assert!(whitespace(&c), "{:?} should be junk", c);
        }
        assert!(!whitespace(&'a'));
        assert!(!whitespace(&'\u{a0}'));
    }

    #[test]
    fn test_strings_must_be_exactly_one_char() {
        assert!(whitespace(" "));
        assert!(whitespace(&"\t".to_string()));
        assert!(!whitespace("  "));
        assert!(!whitespace(""));
        assert!(!whitespace(" x"));
    }

    #[test]
    fn test_blank_line_policy() {
        assert!(blank_line(""));
        assert!(blank_line("   \t"));
        assert!(!blank_line("  x "));
    }

    #[test]
    fn test_policy_materialisation() {
        assert!(JunkPolicy::None.classifier::<String>().is_none());

        let ws = JunkPolicy::Whitespace.classifier::<&str>().unwrap();
        assert!(ws.is_junk(&" "));
        assert!(!ws.is_junk(&"   "));

        let blank = JunkPolicy::BlankLines.classifier::<String>().unwrap();
        assert!(blank.is_junk(&"   ".to_string()));
    }

    #[test]
    fn test_caller_closure_is_shared() {
        let digits = JunkClassifier::from_fn(|e: &char| e.is_ascii_digit());
        let copy = digits.clone();
        assert!(copy.is_junk(&'7'));
        assert!(!digits.is_junk(&'x'));
    }

    #[test]
    fn test_whitespace_classifier_for_chars() {
        let ws = JunkClassifier::<char>::whitespace();
        assert!(ws.is_junk(&'\r'));
        assert!(!ws.is_junk(&'_'));
    }

    #[test]
    fn test_policy_deserializes_kebab_case() {
        let p: JunkPolicy = serde_json::from_str("\"blank-lines\"").unwrap();
        assert_eq!(p, JunkPolicy::BlankLines);
        assert_eq!(JunkPolicy::default(), JunkPolicy::Whitespace);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("none".parse::<JunkPolicy>(), Ok(JunkPolicy::None));
        assert_eq!("Blank-Lines".parse::<JunkPolicy>(), Ok(JunkPolicy::BlankLines));
        assert!("tabs".parse::<JunkPolicy>().is_err());
    }
}
