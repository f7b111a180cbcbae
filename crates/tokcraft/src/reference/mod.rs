//! # Reference Tokenizers
//!
//! Vocabulary generation harvests subwords from a pretrained
//! "reference" tokenizer, selected by [`crate::config::ModelFamily`].
//!
//! * [`ReferenceTokenizer`] - splits one chunk into subword strings.
//! * [`ReferenceLoader`] - loads a reference tokenizer by model id.
//! * [`ReferenceCache`] - load-once cache of loaded tokenizers.
//!
//! With the ``download`` feature, ``HfReferenceLoader`` loads pretrained
//! tokenizers from the Hugging Face hub.

#[cfg(feature = "download")]
mod hf_loader;
mod reference_cache;
mod reference_tokenizer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(feature = "download")]
#[doc(inline)]
pub use hf_loader::*;
#[doc(inline)]
pub use reference_cache::*;
#[doc(inline)]
pub use reference_tokenizer::*;
