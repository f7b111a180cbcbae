//! # Pipeline Configuration
//!
//! [`PipelineConfig`] describes the user-controlled parts of a tokenizer:
//! * `model_family` - the [`ModelFamily`], selecting the generation reference.
//! * `normalizer` - the [`NormalizerOptions`].
//! * `chunk_policy` - the [`ChunkPolicy`] for pre-tokenization.
//! * `special_tokens` - the [`SpecialTokens`].
//!
//! Partial updates are expressed with [`ConfigUpdate`].

mod chunk_policy;
mod model_family;
mod normalizer_options;
mod pipeline_config;
mod special_tokens;

#[doc(inline)]
pub use chunk_policy::*;
#[doc(inline)]
pub use model_family::*;
#[doc(inline)]
pub use normalizer_options::*;
#[doc(inline)]
pub use pipeline_config::*;
#[doc(inline)]
pub use special_tokens::*;
