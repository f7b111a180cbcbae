//! # Tokenizer Pipeline
//!
//! [`TokenizerPipeline`] binds a [`PipelineConfig`] to a [`Vocabulary`]
//! and runs the full tokenize flow:
//!
//! ```text
//! text -> normalize -> chunk -> segment -> assemble -> TokenizationResult
//! ```

use crate::{
    assembly::{ResultAssembler, TokenizationResult},
    chunking::TextChunker,
    config::PipelineConfig,
    normalize::normalize,
    segmentation::{ChunkSegmenter, LongestMatchSegmenter},
    vocab::Vocabulary,
};

/// An immutable ``(config, vocabulary)`` snapshot.
///
/// Updating either part builds a new pipeline; see
/// [`crate::TokenizerSession`] for the mutable session wrapper.
///
/// ## Style Hints
///
/// Instance names should prefer `pipeline`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizerPipeline {
    config: PipelineConfig,
    vocab: Vocabulary,
}

impl TokenizerPipeline {
    /// Create a new pipeline.
    ///
    /// ## Arguments
    /// * `config` - The pipeline configuration.
    /// * `vocab` - The vocabulary to segment against.
    pub fn new(
        config: PipelineConfig,
        vocab: Vocabulary,
    ) -> Self {
        Self { config, vocab }
    }

    /// Get the config.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Replace the config and return the pipeline.
    pub fn with_config(
        self,
        config: PipelineConfig,
    ) -> Self {
        Self { config, ..self }
    }

    /// Replace the vocabulary and return the pipeline.
    pub fn with_vocab(
        self,
        vocab: Vocabulary,
    ) -> Self {
        Self { vocab, ..self }
    }

    /// Can this pipeline tokenize `text`?
    ///
    /// False when `text` is blank or the vocabulary is empty.
    pub fn is_tokenizable(
        &self,
        text: &str,
    ) -> bool {
        !self.vocab.is_empty() && !text.trim().is_empty()
    }

    /// Build a segmenter for this pipeline's specials.
    pub fn segmenter(&self) -> LongestMatchSegmenter {
        let specials = &self.config.special_tokens;
        LongestMatchSegmenter::new(specials.unk.as_str()).with_reserved(specials.non_empty())
    }

    /// Segment `text`, without special-token wrapping.
    ///
    /// Total: unmatched chars become the unknown token.
    pub fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        let normalized = normalize(text, &self.config.normalizer);
        let chunks = TextChunker::new(self.config.chunk_policy).chunks(&normalized);
        self.segmenter().segment_chunks(&self.vocab, chunks)
    }

    /// Tokenize `text`.
    ///
    /// ## Returns
    /// `None` when the text is blank or the vocabulary is empty;
    /// "not yet tokenizable" is a normal outcome, not an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Option<TokenizationResult> {
        if !self.is_tokenizable(text) {
            log::trace!(
                "not tokenizable: {} input chars, {} vocab tokens",
                text.len(),
                self.vocab.len()
            );
            return None;
        }

        let segmented = self.segment(text);
        let result = ResultAssembler::new(&self.vocab, &self.config.special_tokens)
            .assemble(text, segmented);

        log::trace!(
            "tokenized {} chars into {} tokens",
            result.stats.input_length,
            result.stats.token_count
        );
        Some(result)
    }

    /// Tokenize a batch of texts in parallel.
    ///
    /// Each entry is the [`Self::tokenize`] result for the matching text.
    #[cfg(feature = "rayon")]
    pub fn tokenize_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Option<TokenizationResult>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}
