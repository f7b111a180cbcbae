//! # `tokcraft` Custom Tokenizer Construction
//!
//! Build a custom text tokenizer from parts, and test it against live input:
//!
//! ```text
//! text -> normalize -> chunk -> segment (greedy longest-match) -> assemble
//! ```
//!
//! See:
//! * [`config`] to describe a pipeline ([`config::PipelineConfig`], [`config::ConfigUpdate`]).
//! * [`normalize`] for lowercasing and accent stripping.
//! * [`chunking`] for pre-tokenization policies.
//! * [`vocab`] for the ordered [`vocab::Vocabulary`] store.
//! * [`segmentation`] for greedy longest-match subword segmentation.
//! * [`assembly`] for special-token wrapping, ids, and stats.
//! * [`generation`] and [`reference`] to harvest a vocabulary from a
//!   pretrained reference tokenizer.
//! * [`TokenizerSession`] for the mutable, shareable session API.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//! * ``rayon``
//!
//! #### feature: ``download``
//!
//! This enables ``reference::HfReferenceLoader``, which loads pretrained
//! reference tokenizers from the Hugging Face hub via the ``tokenizers`` crate.
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash`` (or ``foldhash``).
//! If both are enabled, ``ahash`` wins.
//!
//! This is done by the ``types::TCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables ``TokenizerPipeline::tokenize_batch``.
//!
//! #### feature: ``serde``
//!
//! Derives ``serde`` traits on config and result types.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! #### feature: ``testing``
//!
//! Exports ``reference::testing``, an in-memory reference loader.
//!
//! ## Example
//!
//! ```rust
//! use tokcraft::{TokenizerPipeline, config::PipelineConfig, vocab::Vocabulary};
//!
//! let vocab = Vocabulary::build(["[CLS]", "[SEP]", "[UNK]", "play", "##ing"]);
//! let pipeline = TokenizerPipeline::new(PipelineConfig::default(), vocab);
//!
//! let result = pipeline.tokenize("Playing").unwrap();
//! assert_eq!(result.tokens, vec!["[CLS]", "play", "##ing", "[SEP]"]);
//! assert_eq!(result.token_ids, vec![1, 4, 0, 2]);
//!
//! assert!(pipeline.tokenize("   ").is_none());
//! ```
#![warn(missing_docs, unused)]

pub mod assembly;
pub mod chunking;
pub mod config;
pub mod errors;
pub mod generation;
pub mod normalize;
pub mod reference;
pub mod segmentation;
pub mod types;
pub mod vocab;

mod pipeline;
mod session;

#[doc(inline)]
pub use errors::{TCResult, TokcraftError};
#[doc(inline)]
pub use pipeline::*;
#[doc(inline)]
pub use session::*;
