//! # Result Assembler

use crate::{
    assembly::{TokenizationResult, TokenizationStats},
    config::SpecialTokens,
    types::TokenId,
    vocab::Vocabulary,
};

/// Wraps segmented tokens with specials and maps them to ids.
#[derive(Debug, Clone, Copy)]
pub struct ResultAssembler<'a> {
    vocab: &'a Vocabulary,
    special_tokens: &'a SpecialTokens,

    /// Id for tokens not in the vocabulary.
    fallback_id: TokenId,
}

impl<'a> ResultAssembler<'a> {
    /// Create an assembler over a vocabulary and its specials.
    pub fn new(
        vocab: &'a Vocabulary,
        special_tokens: &'a SpecialTokens,
    ) -> Self {
        let fallback_id = vocab.lookup(&special_tokens.unk).unwrap_or(0);
        Self {
            vocab,
            special_tokens,
            fallback_id,
        }
    }

    /// The id of a token.
    ///
    /// Falls back to the unknown token's id, or `0` when the
    /// unknown token is not in the vocabulary either.
    pub fn token_id(
        &self,
        token: &str,
    ) -> TokenId {
        self.vocab.lookup(token).unwrap_or(self.fallback_id)
    }

    /// Assemble a [`TokenizationResult`].
    ///
    /// ## Arguments
    /// * `input_text` - The original, pre-normalization input.
    /// * `segmented` - The chunk-level segmentation.
    pub fn assemble(
        &self,
        input_text: &str,
        segmented: Vec<String>,
    ) -> TokenizationResult {
        let mut tokens = Vec::with_capacity(segmented.len() + 2);
        tokens.push(self.special_tokens.cls.clone());
        tokens.extend(segmented);
        tokens.push(self.special_tokens.sep.clone());

        let token_ids = tokens.iter().map(|t| self.token_id(t)).collect();
        let stats = TokenizationStats::compute(input_text, tokens.len());

        TokenizationResult {
            input_text: input_text.to_string(),
            tokens,
            token_ids,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_and_ids() {
        let vocab = Vocabulary::build(["[CLS]", "[SEP]", "[UNK]", "a", "b"]);
        let specials = SpecialTokens::default();
        let assembler = ResultAssembler::new(&vocab, &specials);

        let result = assembler.assemble("a b", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.tokens, vec!["[CLS]", "a", "b", "[SEP]"]);
        assert_eq!(result.token_ids, vec![0, 3, 4, 1]);
        assert_eq!(result.stats.token_count, 4);
        assert_eq!(result.stats.input_length, 3);
        assert_eq!(result.stats.compression_ratio, 75.0);
        assert_eq!(result.input_text, "a b");
    }

    #[test]
    fn test_missing_tokens_use_unk_id() {
        let vocab = Vocabulary::build(["[UNK]", "a"]);
        let specials = SpecialTokens::default();
        let assembler = ResultAssembler::new(&vocab, &specials);

        let result = assembler.assemble("ax", vec!["a".to_string(), "[UNK]".to_string()]);
        // [CLS] and [SEP] are absent: they map to the [UNK] id.
        assert_eq!(result.token_ids, vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_missing_unk_maps_to_zero() {
        let vocab = Vocabulary::build(["b", "a"]);
        let specials = SpecialTokens::default();
        let assembler = ResultAssembler::new(&vocab, &specials);

        assert_eq!(assembler.token_id("a"), 0);
        assert_eq!(assembler.token_id("b"), 1);
        assert_eq!(assembler.token_id("zzz"), 0);
    }

    #[test]
    fn test_empty_specials_keep_their_slots() {
        let vocab = Vocabulary::build(["a"]);
        let specials = SpecialTokens::default().with_cls("").with_sep("");
        let assembler = ResultAssembler::new(&vocab, &specials);

        let result = assembler.assemble("a", vec!["a".to_string()]);
        assert_eq!(result.tokens, vec!["", "a", ""]);
        assert_eq!(result.token_ids.len(), result.tokens.len());
        assert_eq!(result.stats.token_count, 3);
    }
}
