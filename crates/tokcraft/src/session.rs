//! # Tokenizer Session
//!
//! [`TokenizerSession`] is the headless session API: it owns the current
//! ``(config, vocabulary)`` snapshot and the reference tokenizer cache.
//!
//! Every mutation builds a new [`TokenizerPipeline`] and swaps it in whole;
//! readers always observe a consistent snapshot.

use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use parking_lot::RwLock;

use crate::{
    TokenizerPipeline,
    assembly::TokenizationResult,
    config::{ConfigUpdate, PipelineConfig},
    errors::{TCResult, TokcraftError},
    generation::generate_vocabulary_cancellable,
    reference::{ReferenceCache, ReferenceLoader},
    vocab::Vocabulary,
};

/// Counts in-flight generations while alive.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A single tokenizer-building session.
///
/// All methods take `&self`; a session may be shared across threads.
/// Vocabulary generation is last-request-wins: a generation which is
/// overtaken by a newer one (or by [`Self::clear_vocabulary`] /
/// [`Self::reset`]) fails with [`TokcraftError::GenerationSuperseded`]
/// and never commits.
///
/// ## Style Hints
///
/// Instance names should prefer `session`.
pub struct TokenizerSession {
    snapshot: RwLock<Arc<TokenizerPipeline>>,
    cache: ReferenceCache,

    /// Ticket of the most recent generation-affecting request.
    latest_ticket: AtomicU64,

    in_flight: AtomicUsize,
}

impl core::fmt::Debug for TokenizerSession {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenizerSession")
            .field("config", self.snapshot().config())
            .field("vocab_len", &self.snapshot().vocab().len())
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(feature = "download")]
impl Default for TokenizerSession {
    fn default() -> Self {
        Self::new(crate::reference::HfReferenceLoader)
    }
}

impl TokenizerSession {
    /// Create a session with the default config and an empty vocabulary.
    ///
    /// ## Arguments
    /// * `loader` - Loads reference tokenizers for vocabulary generation.
    pub fn new<L>(loader: L) -> Self
    where
        L: ReferenceLoader + 'static,
    {
        Self::with_cache(ReferenceCache::new(loader))
    }

    /// Create a session over an existing reference cache.
    pub fn with_cache(cache: ReferenceCache) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(TokenizerPipeline::default())),
            cache,
            latest_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Replace the config and return the session.
    pub fn with_config(
        self,
        config: PipelineConfig,
    ) -> Self {
        self.replace(|pipeline| pipeline.clone().with_config(config));
        self
    }

    /// Get the current ``(config, vocabulary)`` snapshot.
    pub fn snapshot(&self) -> Arc<TokenizerPipeline> {
        self.snapshot.read().clone()
    }

    /// Get a copy of the current config.
    pub fn config(&self) -> PipelineConfig {
        self.snapshot().config().clone()
    }

    /// Get a copy of the current vocabulary.
    pub fn vocabulary(&self) -> Vocabulary {
        self.snapshot().vocab().clone()
    }

    /// Get the reference tokenizer cache.
    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    fn replace<F>(
        &self,
        f: F,
    ) -> Arc<TokenizerPipeline>
    where
        F: FnOnce(&TokenizerPipeline) -> TokenizerPipeline,
    {
        let mut snapshot = self.snapshot.write();
        *snapshot = Arc::new(f(snapshot.as_ref()));
        snapshot.clone()
    }

    fn next_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a partial config update.
    ///
    /// Only the named fields change; the vocabulary is not regenerated.
    ///
    /// ## Returns
    /// The updated config.
    pub fn set_config(
        &self,
        update: &ConfigUpdate,
    ) -> PipelineConfig {
        let pipeline = self.replace(|pipeline| {
            let config = pipeline.config().updated(update);
            pipeline.clone().with_config(config)
        });
        log::debug!("config updated: {:?}", pipeline.config());
        pipeline.config().clone()
    }

    /// Is a vocabulary generation in flight?
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Generate a vocabulary from sample text and commit it.
    ///
    /// Uses the config as of the call; the commit applies the new
    /// vocabulary to the config as of the commit.
    ///
    /// On any error the prior vocabulary is left untouched.
    ///
    /// ## Returns
    /// The committed vocabulary.
    pub fn generate_vocabulary(
        &self,
        sample: &str,
    ) -> TCResult<Vocabulary> {
        if sample.trim().is_empty() {
            return Err(TokcraftError::EmptySample);
        }

        let ticket = self.next_ticket();
        let _in_flight = InFlight::enter(&self.in_flight);
        let is_superseded = || self.latest_ticket.load(Ordering::SeqCst) != ticket;

        let config = self.config();
        let model_id = config.model_family.reference_model_id();

        let vocab = generate_vocabulary_cancellable(sample, &config, &self.cache, is_superseded)
            .inspect_err(|err| log::warn!("{err}"))?;

        let mut snapshot = self.snapshot.write();
        if is_superseded() {
            let err = TokcraftError::GenerationSuperseded {
                model: model_id.to_string(),
            };
            log::warn!("{err}");
            return Err(err);
        }
        *snapshot = Arc::new(TokenizerPipeline::new(
            snapshot.config().clone(),
            vocab.clone(),
        ));

        log::debug!("committed vocabulary: {} tokens", vocab.len());
        Ok(vocab)
    }

    /// Clear the vocabulary; supersedes any in-flight generation.
    pub fn clear_vocabulary(&self) {
        self.next_ticket();
        self.replace(|pipeline| pipeline.clone().with_vocab(Vocabulary::default()));
    }

    /// Restore the default config and clear the vocabulary.
    ///
    /// Supersedes any in-flight generation. The reference cache is kept.
    pub fn reset(&self) {
        self.next_ticket();
        self.replace(|_| TokenizerPipeline::default());
    }

    /// Tokenize `text` against the current snapshot.
    ///
    /// ## Returns
    /// `None` when the text is blank or the vocabulary is empty.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Option<TokenizationResult> {
        self.snapshot().tokenize(text)
    }

    /// Split `text` with the (cached) reference tokenizer for `model_id`.
    pub fn reference_tokenize(
        &self,
        model_id: &str,
        text: &str,
    ) -> TCResult<Vec<String>> {
        self.cache.get_or_load(model_id)?.tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ChunkPolicy, reference::testing::StaticReferenceLoader};

    fn session() -> TokenizerSession {
        TokenizerSession::new(StaticReferenceLoader::default().with_model(
            "bert-base-uncased",
            [("playing", vec!["play", "##ing"])],
        ))
    }

    #[test]
    fn test_generate_then_tokenize() {
        let session = session();
        assert_eq!(session.tokenize("playing"), None);
        assert!(!session.is_generating());

        let vocab = session.generate_vocabulary("playing").unwrap();
        assert_eq!(vocab, session.vocabulary());
        assert!(!session.is_generating());

        let result = session.tokenize("playing").unwrap();
        assert_eq!(result.tokens, vec!["[CLS]", "play", "##ing", "[SEP]"]);
    }

    #[test]
    fn test_set_config_keeps_vocab() {
        let session = session();
        session.generate_vocabulary("playing").unwrap();

        let config =
            session.set_config(&ConfigUpdate::default().with_chunk_policy(ChunkPolicy::BertStyle));
        assert_eq!(config.chunk_policy, ChunkPolicy::BertStyle);
        assert_eq!(session.config(), config);
        assert!(!session.vocabulary().is_empty());
    }

    #[test]
    fn test_clear_and_reset() {
        let session = session();
        session.set_config(&ConfigUpdate::default().with_lowercase(false));
        session.generate_vocabulary("playing").unwrap();

        session.clear_vocabulary();
        assert!(session.vocabulary().is_empty());
        assert!(!session.config().normalizer.lowercase);

        session.generate_vocabulary("playing").unwrap();
        session.reset();
        assert!(session.vocabulary().is_empty());
        assert_eq!(session.config(), PipelineConfig::default());
        assert_eq!(session.cache().len(), 1);
    }

    #[test]
    fn test_failures_keep_vocab() {
        let session = session();
        let before = session.generate_vocabulary("playing").unwrap();

        assert_eq!(
            session.generate_vocabulary("  ").err().unwrap(),
            TokcraftError::EmptySample
        );

        session.set_config(
            &ConfigUpdate::default().with_model_family(crate::config::ModelFamily::Bpe),
        );
        let err = session.generate_vocabulary("playing").err().unwrap();
        assert!(err.is_retryable());
        assert_eq!(session.vocabulary(), before);
    }

    #[test]
    fn test_reference_tokenize() {
        let session = session();
        assert_eq!(
            session
                .reference_tokenize("bert-base-uncased", "playing")
                .unwrap(),
            vec!["play", "##ing"]
        );
        assert!(session.reference_tokenize("nope", "playing").is_err());
    }
}
