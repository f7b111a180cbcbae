//! # Error Types

/// Errors from tokcraft operations.
///
/// Tokenization itself never fails; "not yet tokenizable" is reported
/// as `None` by [`crate::TokenizerPipeline::tokenize`], not as an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokcraftError {
    /// The reference tokenizer could not be loaded or invoked.
    ///
    /// The prior vocabulary is left unchanged; the request may be retried.
    #[error("vocabulary generation failed for \"{model}\": {message}")]
    GenerationFailed {
        /// The reference model identifier.
        model: String,

        /// The underlying failure.
        message: String,
    },

    /// A newer generation request started before this one could commit.
    #[error("vocabulary generation for \"{model}\" was superseded by a newer request")]
    GenerationSuperseded {
        /// The reference model identifier.
        model: String,
    },

    /// The sample text was empty or whitespace-only.
    #[error("sample text is empty")]
    EmptySample,

    /// The name did not match any [`crate::config::ModelFamily`].
    #[error("unknown model family: {0}")]
    UnknownModelFamily(String),

    /// The name did not match any [`crate::config::ChunkPolicy`].
    #[error("unknown chunk policy: {0}")]
    UnknownChunkPolicy(String),
}

impl TokcraftError {
    /// Build a [`TokcraftError::GenerationFailed`].
    pub fn generation_failed<M, E>(
        model: M,
        err: E,
    ) -> Self
    where
        M: Into<String>,
        E: core::fmt::Display,
    {
        Self::GenerationFailed {
            model: model.into(),
            message: err.to_string(),
        }
    }

    /// Returns true if repeating the request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed { .. } | Self::GenerationSuperseded { .. }
        )
    }
}

/// Result type for tokcraft operations.
pub type TCResult<T> = core::result::Result<T, TokcraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_message() {
        let err = TokcraftError::generation_failed("gpt2", "connection refused");
        assert_eq!(
            err.to_string(),
            "vocabulary generation failed for \"gpt2\": connection refused"
        );
        assert!(err.is_retryable());

        assert!(!TokcraftError::EmptySample.is_retryable());
        assert!(!TokcraftError::UnknownModelFamily("xyz".to_string()).is_retryable());
    }
}
