//! # Segmentation
//!
//! Segmentation turns chunks into vocabulary tokens.
//!
//! [`ChunkSegmenter`] is the policy seam; [`LongestMatchSegmenter`]
//! is the greedy longest-match implementation, and [`segment`] is
//! the convenience entry point.

mod chunk_segmenter;
mod longest_match;

#[doc(inline)]
pub use chunk_segmenter::*;
#[doc(inline)]
pub use longest_match::*;
