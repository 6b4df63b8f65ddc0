//! seqalign Core - sequence comparison engine
//!
//! This crate finds the longest matching runs between two sequences and turns
//! them into edit scripts, including:
//! - Junk classification and a popularity-filtered target index
//! - Longest-match search and matching-block assembly
//! - Opcodes, context-windowed hunks, and similarity ratios
//! - Comparison sessions that memoise every derived artifact
//! - Line splitting and plain-text hunk rendering
//!
//! Elements may be anything `Eq + Hash + Clone`: characters, lines, tokens.

pub use seqalign_core_types as core_types;

pub mod cache;
pub mod classifier;
pub mod errors;
pub mod grouping;
pub mod index;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod opcodes;
pub mod options;
pub mod ratio;
pub mod render;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use cache::CacheState;
pub use classifier::{JunkClassifier, JunkPolicy};
pub use errors::{ExError, ExErrorKind, Result, SeqAlignError};
pub use grouping::DEFAULT_CONTEXT;
pub use model::{Group, MatchingBlock, OpTag, Opcode, Side};
pub use options::DiffOptions;
pub use render::render_hunks;
pub use session::{Artifact, SequenceMatcher, SequenceMatcherBuilder};
pub use text::{string_as_lines, strip_linebreaks};
