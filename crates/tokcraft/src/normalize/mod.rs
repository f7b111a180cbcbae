//! # Text Normalization

mod normalizer;

#[doc(inline)]
pub use normalizer::*;
