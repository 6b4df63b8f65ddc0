//! Comparison options shared by library callers and the CLI config file.

use crate::classifier::JunkPolicy;
use crate::grouping::DEFAULT_CONTEXT;
use crate::session::SequenceMatcher;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Options for a line comparison.
///
/// Missing fields take their defaults, so an empty TOML table is valid:
///
/// ```
/// use seqalign_core::{DiffOptions, JunkPolicy};
///
/// let opts: DiffOptions = serde_json::from_str(r#"{ "junk": "none" }"#).unwrap();
/// assert_eq!(opts.context, 3);
/// assert_eq!(opts.junk, JunkPolicy::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Unchanged elements kept around each change when grouping
    pub context: usize,
    pub junk: JunkPolicy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            junk: JunkPolicy::default(),
        }
    }
}

impl DiffOptions {
    /// Open a session over `a` and `b` using these options' junk policy.
    pub fn session<T>(&self, a: Vec<T>, b: Vec<T>) -> SequenceMatcher<T>
    where
        T: Eq + Hash + Clone + AsRef<str>,
    {
        SequenceMatcher::with_policy(a, b, self.junk)
    }
}
