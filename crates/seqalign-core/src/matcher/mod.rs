//! Matching-block computation.
//!
//! [`longest`] finds the single longest run of equal elements inside a pair
//! of sub-ranges; [`blocks`] partitions the full sequence pair around those
//! runs and assembles the ordered, merged block list.
//!
//! Both operate on borrowed sequences plus a prebuilt
//! [`TargetIndex`](crate::index::TargetIndex); caching lives in the session.

pub mod blocks;
pub mod longest;

pub use blocks::{assemble_blocks, assemble_blocks_cancellable};
pub use longest::find_longest_match;
