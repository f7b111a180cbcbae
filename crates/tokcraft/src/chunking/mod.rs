//! # Chunking (Pre-Tokenization)
//!
//! This module exists to factor out splitting normalized text into
//! the chunks which segmentation operates over independently.
//!
//! Most users will want [`TextChunker`], built from a
//! [`crate::config::ChunkPolicy`].

mod text_chunker;

#[doc(inline)]
pub use text_chunker::*;
