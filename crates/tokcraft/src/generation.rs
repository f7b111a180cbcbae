//! # Vocabulary Generation
//!
//! Builds a [`Vocabulary`] by splitting sample text with the reference
//! tokenizer for the configured [`crate::config::ModelFamily`]:
//!
//! ```text
//! sample -> normalize -> chunk -> reference.tokenize(chunk)* -> union + specials -> Vocabulary
//! ```
//!
//! Generation either returns a complete vocabulary or fails as a whole.

use crate::{
    chunking::TextChunker,
    config::PipelineConfig,
    errors::{TCResult, TokcraftError},
    normalize::normalize,
    reference::ReferenceCache,
    types::TCHashSet,
    vocab::Vocabulary,
};

/// Generate a vocabulary from sample text.
///
/// See [`generate_vocabulary_cancellable`].
pub fn generate_vocabulary(
    sample: &str,
    config: &PipelineConfig,
    cache: &ReferenceCache,
) -> TCResult<Vocabulary> {
    generate_vocabulary_cancellable(sample, config, cache, || false)
}

/// Generate a vocabulary from sample text, aborting when superseded.
///
/// ## Arguments
/// * `sample` - The sample text.
/// * `config` - Normalization, chunking, specials, and the model family.
/// * `cache` - The reference tokenizer cache.
/// * `is_superseded` - Polled before loading and between chunks.
///
/// ## Returns
/// * [`TokcraftError::EmptySample`] for blank sample text.
/// * [`TokcraftError::GenerationSuperseded`] when `is_superseded` fires.
/// * [`TokcraftError::GenerationFailed`] when the reference cannot be
///   loaded or invoked.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(sample, config, cache, is_superseded))
)]
pub fn generate_vocabulary_cancellable<F>(
    sample: &str,
    config: &PipelineConfig,
    cache: &ReferenceCache,
    is_superseded: F,
) -> TCResult<Vocabulary>
where
    F: Fn() -> bool,
{
    if sample.trim().is_empty() {
        return Err(TokcraftError::EmptySample);
    }

    let model_id = config.model_family.reference_model_id();
    let superseded = || TokcraftError::GenerationSuperseded {
        model: model_id.to_string(),
    };

    let normalized = normalize(sample, &config.normalizer);
    let chunks = TextChunker::new(config.chunk_policy).chunks(&normalized);
    log::debug!(
        "generating vocabulary: model {model_id}, {} chunks",
        chunks.len()
    );

    if is_superseded() {
        return Err(superseded());
    }
    let reference = cache.get_or_load(model_id)?;

    let mut tokens: TCHashSet<String> = TCHashSet::default();
    for chunk in chunks {
        if is_superseded() {
            return Err(superseded());
        }
        tokens.extend(
            reference
                .tokenize(chunk)?
                .into_iter()
                .filter(|t| !t.is_empty()),
        );
    }
    tokens.extend(config.special_tokens.non_empty().map(str::to_string));

    let vocab = Vocabulary::build(tokens);
    log::debug!(
        "generated vocabulary: model {model_id}, {} tokens",
        vocab.len()
    );
    Ok(vocab)
}
