//! # Tokenization Results

use crate::types::TokenId;

/// Summary statistics for a [`TokenizationResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenizationStats {
    /// Char count of the original (pre-normalization) input.
    pub input_length: usize,

    /// Number of tokens, including the wrapping specials.
    pub token_count: usize,

    /// Percentage-scaled chars per token: ``input_length / token_count * 100``.
    pub compression_ratio: f64,
}

impl TokenizationStats {
    /// Compute stats for an input and its wrapped token count.
    pub fn compute(
        input_text: &str,
        token_count: usize,
    ) -> Self {
        let input_length = input_text.chars().count();
        let compression_ratio = if token_count == 0 {
            0.0
        } else {
            input_length as f64 / token_count as f64 * 100.0
        };

        Self {
            input_length,
            token_count,
            compression_ratio,
        }
    }
}

/// The output of one tokenize call.
///
/// Immutable once produced; the next call produces a new result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenizationResult {
    /// The original input text.
    pub input_text: String,

    /// The wrapped token sequence: ``[cls, *segmented, sep]``.
    pub tokens: Vec<String>,

    /// The id of each token; same length as `tokens`.
    pub token_ids: Vec<TokenId>,

    /// Summary statistics.
    pub stats: TokenizationStats,
}

impl TokenizationResult {
    /// Iterate over ``(token, id)`` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.token_ids.iter().copied())
    }

    /// The segmented tokens, without the wrapping specials.
    pub fn content_tokens(&self) -> &[String] {
        match self.tokens.len() {
            0..=2 => &[],
            n => &self.tokens[1..n - 1],
        }
    }
}
