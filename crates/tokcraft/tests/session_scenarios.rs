use std::{
    sync::{Arc, Barrier},
    thread,
};

use tokcraft::{
    TokcraftError, TokenizerPipeline, TokenizerSession,
    config::{ChunkPolicy, ConfigUpdate, ModelFamily, PipelineConfig},
    errors::TCResult,
    reference::{
        ReferenceCache, ReferenceTokenizer,
        testing::{StaticReferenceLoader, StaticReferenceTokenizer},
    },
    vocab::Vocabulary,
};

const BERT: &str = "bert-base-uncased";

fn bert_loader() -> StaticReferenceLoader {
    StaticReferenceLoader::default().with_model(
        BERT,
        [
            ("tokenization", vec!["token", "##ization"]),
            ("playing", vec!["play", "##ing"]),
            ("hello", vec!["hello"]),
            ("unbelievable", vec!["un", "##believ", "##able"]),
        ],
    )
}

#[test]
fn test_tokenization_splits_into_subwords() {
    let session = TokenizerSession::new(bert_loader());
    session.generate_vocabulary("tokenization").unwrap();

    let result = session.tokenize("tokenization").unwrap();
    assert_eq!(result.tokens, vec!["[CLS]", "token", "##ization", "[SEP]"]);
    assert_eq!(result.tokens.len(), result.token_ids.len());
}

#[test]
fn test_playing_splits_into_subwords() {
    let session = TokenizerSession::new(bert_loader());
    session.generate_vocabulary("playing").unwrap();

    let result = session.tokenize("playing").unwrap();
    assert_eq!(result.content_tokens(), &["play", "##ing"]);
}

#[test]
fn test_empty_vocabulary_is_not_tokenizable() {
    let session = TokenizerSession::new(bert_loader());
    assert!(session.vocabulary().is_empty());
    assert_eq!(session.tokenize("anything at all"), None);
}

#[test]
fn test_unmatched_tail_is_unknown() {
    let session = TokenizerSession::new(bert_loader());
    session.generate_vocabulary("hello").unwrap();

    let result = session.tokenize("hellox").unwrap();
    assert_eq!(result.content_tokens(), &["hello", "[UNK]"]);

    let unk_id = session.vocabulary().lookup("[UNK]").unwrap();
    assert_eq!(result.token_ids[2], unk_id);
}

#[test]
fn test_wrapping_and_stats() {
    let pipeline = TokenizerPipeline::new(
        PipelineConfig::default(),
        Vocabulary::build(["[CLS]", "[SEP]", "a", "b"]),
    );
    let result = pipeline.tokenize("a b").unwrap();
    assert_eq!(result.tokens, vec!["[CLS]", "a", "b", "[SEP]"]);
    assert_eq!(result.stats.token_count, 4);
    assert_eq!(result.stats.input_length, 3);
    assert_eq!(result.stats.compression_ratio, 75.0);
}

#[test]
fn test_tokenize_is_idempotent() {
    let session = TokenizerSession::new(bert_loader());
    session
        .generate_vocabulary("tokenization playing unbelievable")
        .unwrap();

    let text = "Unbelievable tokenization, playing!";
    assert_eq!(session.tokenize(text), session.tokenize(text));
}

#[test]
fn test_generation_is_order_independent() {
    let a = TokenizerSession::new(bert_loader());
    let b = TokenizerSession::new(bert_loader());

    a.generate_vocabulary("playing hello\ntokenization").unwrap();
    b.generate_vocabulary("tokenization hello playing playing")
        .unwrap();
    assert_eq!(a.vocabulary(), b.vocabulary());
}

#[test]
fn test_failed_generation_keeps_vocabulary() {
    let session = TokenizerSession::new(bert_loader());
    let before = session.generate_vocabulary("playing").unwrap();

    session.set_config(&ConfigUpdate::default().with_model_family(ModelFamily::SentencePiece));
    let err = session.generate_vocabulary("hello").unwrap_err();
    assert_eq!(
        err,
        TokcraftError::generation_failed("google/mt5-base", "model not found")
    );
    assert!(err.is_retryable());
    assert_eq!(session.vocabulary(), before);
    assert_eq!(session.config().model_family, ModelFamily::SentencePiece);
}

#[test]
fn test_reference_loaded_once_per_model() {
    let loader = Arc::new(bert_loader());
    let session = TokenizerSession::with_cache(ReferenceCache::from_shared(loader.clone()));

    for sample in ["playing", "hello", "tokenization"] {
        session.generate_vocabulary(sample).unwrap();
    }
    session.reset();
    session.generate_vocabulary("playing").unwrap();

    assert_eq!(loader.load_count(BERT), 1);
}

#[test]
fn test_regeneration_replaces_vocabulary_and_keeps_config() {
    let session = TokenizerSession::new(bert_loader());
    session.generate_vocabulary("playing").unwrap();

    session.set_config(&ConfigUpdate::default().with_chunk_policy(ChunkPolicy::Punctuation));
    session.generate_vocabulary("hello").unwrap();

    let config = session.config();
    assert_eq!(config.chunk_policy, ChunkPolicy::Punctuation);
    assert!(session.vocabulary().contains("hello"));
    assert!(!session.vocabulary().contains("play"));
}

/// Blocks inside `tokenize` until released.
struct GatedTokenizer {
    entered: Arc<Barrier>,
    release: Arc<Barrier>,
    inner: StaticReferenceTokenizer,
}

impl ReferenceTokenizer for GatedTokenizer {
    fn tokenize(
        &self,
        chunk: &str,
    ) -> TCResult<Vec<String>> {
        self.entered.wait();
        self.release.wait();
        self.inner.tokenize(chunk)
    }
}

#[test]
fn test_newer_generation_supersedes_older() {
    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));

    let gated = GatedTokenizer {
        entered: entered.clone(),
        release: release.clone(),
        inner: StaticReferenceTokenizer::new([("old", vec!["old"])]),
    };
    let loader = StaticReferenceLoader::default()
        .with_tokenizer(BERT, Arc::new(gated))
        .with_model("gpt2", [("new", vec!["new"])]);
    let session = Arc::new(TokenizerSession::new(loader));

    let older = {
        let session = session.clone();
        thread::spawn(move || session.generate_vocabulary("old"))
    };

    // The older request is now blocked inside the reference tokenizer.
    entered.wait();
    assert!(session.is_generating());

    session.set_config(&ConfigUpdate::default().with_model_family(ModelFamily::Bpe));
    let newer = session.generate_vocabulary("new").unwrap();
    assert!(newer.contains("new"));

    release.wait();
    let err = older.join().unwrap().unwrap_err();
    assert_eq!(
        err,
        TokcraftError::GenerationSuperseded {
            model: BERT.to_string()
        }
    );

    assert!(!session.is_generating());
    assert_eq!(session.vocabulary(), newer);
    assert!(!session.vocabulary().contains("old"));
}

#[test]
fn test_reset_supersedes_in_flight_generation() {
    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));

    let gated = GatedTokenizer {
        entered: entered.clone(),
        release: release.clone(),
        inner: StaticReferenceTokenizer::default(),
    };
    let loader = StaticReferenceLoader::default().with_tokenizer(BERT, Arc::new(gated));
    let session = Arc::new(TokenizerSession::new(loader));

    let pending = {
        let session = session.clone();
        thread::spawn(move || session.generate_vocabulary("pending"))
    };

    entered.wait();
    session.reset();
    release.wait();

    assert!(matches!(
        pending.join().unwrap(),
        Err(TokcraftError::GenerationSuperseded { .. })
    ));
    assert!(session.vocabulary().is_empty());
}

#[test]
fn test_snapshots_are_consistent() {
    let session = TokenizerSession::new(bert_loader());
    session.generate_vocabulary("playing").unwrap();

    let snapshot = session.snapshot();
    session.set_config(&ConfigUpdate::default().with_unk("<unk>"));
    session.clear_vocabulary();

    // The old snapshot is unaffected by later updates.
    assert_eq!(snapshot.config().special_tokens.unk, "[UNK]");
    assert!(!snapshot.vocab().is_empty());
    assert!(snapshot.tokenize("playing").is_some());

    assert_eq!(session.config().special_tokens.unk, "<unk>");
    assert_eq!(session.tokenize("playing"), None);
}
