//! # Result Assembly
//!
//! Wraps segmentation output with ``cls``/``sep``, maps tokens to ids,
//! and computes [`TokenizationStats`].

mod result_assembler;
mod tokenization_result;

#[doc(inline)]
pub use result_assembler::*;
#[doc(inline)]
pub use tokenization_result::*;
