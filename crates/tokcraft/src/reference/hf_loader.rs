//! # Hugging Face Reference Loader

use std::sync::Arc;

use crate::{
    errors::{TCResult, TokcraftError},
    reference::{ReferenceLoader, ReferenceTokenizer},
};

/// Loads pretrained tokenizers from the Hugging Face hub.
///
/// Downloads are cached on disk by the ``tokenizers`` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HfReferenceLoader;

impl ReferenceLoader for HfReferenceLoader {
    fn load(
        &self,
        model_id: &str,
    ) -> TCResult<Arc<dyn ReferenceTokenizer>> {
        log::debug!("loading pretrained tokenizer: {model_id}");
        let tokenizer = tokenizers::Tokenizer::from_pretrained(model_id, None)
            .map_err(|err| TokcraftError::generation_failed(model_id, err))?;

        Ok(Arc::new(HfReferenceTokenizer {
            model_id: model_id.to_string(),
            tokenizer,
        }))
    }
}

/// A [`ReferenceTokenizer`] over a [`tokenizers::Tokenizer`].
pub struct HfReferenceTokenizer {
    model_id: String,
    tokenizer: tokenizers::Tokenizer,
}

impl HfReferenceTokenizer {
    /// Get the model id.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl ReferenceTokenizer for HfReferenceTokenizer {
    fn tokenize(
        &self,
        chunk: &str,
    ) -> TCResult<Vec<String>> {
        let encoding = self
            .tokenizer
            .encode(chunk, false)
            .map_err(|err| TokcraftError::generation_failed(&self.model_id, err))?;

        Ok(encoding.get_tokens().to_vec())
    }
}
