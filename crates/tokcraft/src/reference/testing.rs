//! # Reference Test Utilities
//!
//! In-memory [`ReferenceLoader`] for tests which must not touch the network.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    errors::{TCResult, TokcraftError},
    reference::{ReferenceLoader, ReferenceTokenizer},
    types::TCHashMap,
};

/// A [`ReferenceTokenizer`] backed by a fixed ``{ chunk -> subwords }`` table.
///
/// Chunks missing from the table come back whole, as a single subword.
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceTokenizer {
    splits: TCHashMap<String, Vec<String>>,
}

impl StaticReferenceTokenizer {
    /// Create a tokenizer from ``(chunk, subwords)`` pairs.
    pub fn new<I, S, T>(splits: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            splits: splits
                .into_iter()
                .map(|(chunk, pieces)| {
                    let pieces = pieces.into_iter().map(Into::into).collect();
                    (chunk.into(), pieces)
                })
                .collect(),
        }
    }
}

impl ReferenceTokenizer for StaticReferenceTokenizer {
    fn tokenize(
        &self,
        chunk: &str,
    ) -> TCResult<Vec<String>> {
        Ok(self
            .splits
            .get(chunk)
            .cloned()
            .unwrap_or_else(|| vec![chunk.to_string()]))
    }
}

/// A [`ReferenceLoader`] over a fixed set of in-memory tokenizers.
///
/// Unregistered model ids fail with [`TokcraftError::GenerationFailed`].
/// Every load attempt is counted; see [`Self::load_count`].
#[derive(Default)]
pub struct StaticReferenceLoader {
    models: TCHashMap<String, Arc<dyn ReferenceTokenizer>>,
    loads: Mutex<TCHashMap<String, usize>>,
}

impl StaticReferenceLoader {
    /// Register a [`StaticReferenceTokenizer`] for `model_id`.
    pub fn with_model<M, I, S, T>(
        self,
        model_id: M,
        splits: I,
    ) -> Self
    where
        M: Into<String>,
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.with_tokenizer(model_id, Arc::new(StaticReferenceTokenizer::new(splits)))
    }

    /// Register an arbitrary tokenizer for `model_id`.
    pub fn with_tokenizer<M>(
        mut self,
        model_id: M,
        tokenizer: Arc<dyn ReferenceTokenizer>,
    ) -> Self
    where
        M: Into<String>,
    {
        self.models.insert(model_id.into(), tokenizer);
        self
    }

    /// Number of load attempts for `model_id`.
    pub fn load_count(
        &self,
        model_id: &str,
    ) -> usize {
        self.loads.lock().get(model_id).copied().unwrap_or(0)
    }
}

impl ReferenceLoader for StaticReferenceLoader {
    fn load(
        &self,
        model_id: &str,
    ) -> TCResult<Arc<dyn ReferenceTokenizer>> {
        *self.loads.lock().entry(model_id.to_string()).or_default() += 1;

        self.models
            .get(model_id)
            .cloned()
            .ok_or_else(|| TokcraftError::generation_failed(model_id, "model not found"))
    }
}
