//! # Model Family

use crate::errors::TokcraftError;

/// Tokenizer model family.
///
/// The family selects which pretrained reference tokenizer is consulted
/// during vocabulary generation; it does not change segmentation.
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
pub enum ModelFamily {
    /// BERT-style `WordPiece`.
    #[default]
    #[strum(serialize = "wordpiece")]
    WordPiece,

    /// GPT-style byte-pair encoding.
    #[strum(serialize = "bpe")]
    Bpe,

    /// XLNet-style Unigram.
    #[strum(serialize = "unigram")]
    Unigram,

    /// T5-style `SentencePiece`.
    #[strum(serialize = "sentencepiece")]
    SentencePiece,
}

impl ModelFamily {
    /// The pretrained reference model identifier for this family.
    pub fn reference_model_id(&self) -> &'static str {
        use ModelFamily::*;
        match self {
            WordPiece => "bert-base-uncased",
            Bpe => "gpt2",
            Unigram => "xlnet-base-cased",
            SentencePiece => "google/mt5-base",
        }
    }

    /// Parse a family name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, TokcraftError> {
        name.parse()
            .map_err(|_| TokcraftError::UnknownModelFamily(name.to_string()))
    }
}
