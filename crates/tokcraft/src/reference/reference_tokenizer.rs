//! # Reference Tokenizer Traits

use std::sync::Arc;

use crate::errors::TCResult;

/// A pretrained tokenizer used to harvest vocabulary subwords.
///
/// Only used during vocabulary generation; tokenization runs
/// against the generated [`crate::vocab::Vocabulary`] alone.
pub trait ReferenceTokenizer: Send + Sync {
    /// Split a chunk into its canonical subword strings, in order.
    fn tokenize(
        &self,
        chunk: &str,
    ) -> TCResult<Vec<String>>;
}

/// Loads [`ReferenceTokenizer`]s by model identifier.
pub trait ReferenceLoader: Send + Sync {
    /// Load the reference tokenizer for `model_id`.
    ///
    /// ## Returns
    /// [`crate::TokcraftError::GenerationFailed`] when the model cannot be loaded.
    fn load(
        &self,
        model_id: &str,
    ) -> TCResult<Arc<dyn ReferenceTokenizer>>;
}

impl<F> ReferenceTokenizer for F
where
    F: Fn(&str) -> TCResult<Vec<String>> + Send + Sync,
{
    fn tokenize(
        &self,
        chunk: &str,
    ) -> TCResult<Vec<String>> {
        self(chunk)
    }
}
