//! # Chunk Policy

use crate::errors::TokcraftError;

/// Pre-tokenization splitting policy.
///
/// See [`crate::chunking::TextChunker`].
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChunkPolicy {
    /// Split on runs of whitespace.
    #[default]
    #[strum(serialize = "whitespace")]
    Whitespace,

    /// Split on whitespace; each non-word symbol is its own chunk.
    #[strum(serialize = "bert")]
    #[cfg_attr(feature = "serde", serde(rename = "bert"))]
    BertStyle,

    /// Split on runs of whitespace and ``. , ! ? ; : ( ) [ ] { }``.
    #[strum(serialize = "punctuation")]
    Punctuation,

    /// No splitting; the whole text is one chunk.
    ///
    /// This is the fallback for unrecognized policy names.
    #[strum(serialize = "whole")]
    Whole,
}

impl ChunkPolicy {
    /// Parse a policy name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, TokcraftError> {
        name.parse()
            .map_err(|_| TokcraftError::UnknownChunkPolicy(name.to_string()))
    }

    /// Parse a policy name; unrecognized names select [`ChunkPolicy::Whole`].
    pub fn from_name_lossy(name: &str) -> Self {
        match Self::from_name(name) {
            Ok(policy) => policy,
            Err(_) => {
                log::warn!("unrecognized chunk policy {name:?}; using whole-text chunking");
                Self::Whole
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ChunkPolicy::from_name("bert"), Ok(ChunkPolicy::BertStyle));
        assert_eq!(
            ChunkPolicy::from_name("Punctuation"),
            Ok(ChunkPolicy::Punctuation)
        );
        assert_eq!(ChunkPolicy::BertStyle.to_string(), "bert");
        assert_eq!(ChunkPolicy::default(), ChunkPolicy::Whitespace);

        assert!(ChunkPolicy::from_name("metaspace").is_err());
        assert_eq!(ChunkPolicy::from_name_lossy("metaspace"), ChunkPolicy::Whole);
        assert_eq!(
            ChunkPolicy::from_name_lossy("whitespace"),
            ChunkPolicy::Whitespace
        );
    }
}
