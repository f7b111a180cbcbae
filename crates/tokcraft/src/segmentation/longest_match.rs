//! # Greedy Longest-Match Segmenter

use crate::{segmentation::ChunkSegmenter, types::TCHashSet, vocab::Vocabulary};

/// Greedy longest-match ([`WordPiece`-style]) segmenter.
///
/// Scans each chunk left to right over char positions. At each position
/// the longest candidate present in the vocabulary wins; at positions
/// past the start of the chunk only the continuation (``##``) form may
/// match. An unmatched char emits the unknown token, collapsing runs of
/// unmatched chars within a chunk into a single marker.
///
/// [`WordPiece`-style]: crate::config::ModelFamily::WordPiece
#[derive(Debug, Clone)]
pub struct LongestMatchSegmenter {
    /// Unknown-token marker.
    unk_token: String,

    /// Tokens which never match chunk content.
    reserved: TCHashSet<String>,

    /// Char boundary byte offsets of the current chunk.
    offsets: Vec<usize>,

    /// Scratch buffer for continuation-form lookups.
    scratch: String,
}

impl LongestMatchSegmenter {
    /// Create a new segmenter.
    ///
    /// ## Arguments
    /// * `unk_token` - The unknown-token marker.
    pub fn new<S: Into<String>>(unk_token: S) -> Self {
        Self {
            unk_token: unk_token.into(),
            reserved: TCHashSet::default(),
            offsets: Vec::new(),
            scratch: String::new(),
        }
    }

    /// Exclude the given tokens from content matching.
    ///
    /// Used to keep special tokens from matching literal input text.
    pub fn with_reserved<I, S>(
        mut self,
        reserved: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(reserved.into_iter().map(Into::into));
        self
    }

    /// Get the unknown-token marker.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }
}

impl ChunkSegmenter for LongestMatchSegmenter {
    fn segment_append(
        &mut self,
        vocab: &Vocabulary,
        chunk: &str,
        tokens: &mut Vec<String>,
    ) {
        if chunk.trim().is_empty() {
            return;
        }

        self.offsets.clear();
        self.offsets.extend(chunk.char_indices().map(|(idx, _)| idx));
        self.offsets.push(chunk.len());
        let char_count = self.offsets.len() - 1;

        let chunk_start = tokens.len();
        let mut i = 0;
        while i < char_count {
            // No entry is longer than `max_token_chars`, so neither is any match.
            let max_end = char_count.min(i + vocab.max_token_chars());

            let mut found = None;
            for end in (i + 1..=max_end).rev() {
                let candidate = &chunk[self.offsets[i]..self.offsets[end]];
                if let Some(matched) =
                    vocab.contains_effective_with(candidate, i > 0, &mut self.scratch)
                    && !self.reserved.contains(matched)
                {
                    found = Some((matched, end));
                    break;
                }
            }

            match found {
                Some((matched, end)) => {
                    tokens.push(matched.to_string());
                    i = end;
                }
                None => {
                    let after_unk = tokens.len() > chunk_start
                        && tokens.last().is_some_and(|t| *t == self.unk_token);
                    if !after_unk {
                        tokens.push(self.unk_token.clone());
                    }
                    i += 1;
                }
            }
        }
    }
}

/// Segment chunks against a vocabulary with [`LongestMatchSegmenter`].
///
/// ## Arguments
/// * `chunks` - The chunks, in text order.
/// * `vocab` - The vocabulary.
/// * `unk_token` - The unknown-token marker.
pub fn segment<'a, I>(
    chunks: I,
    vocab: &Vocabulary,
    unk_token: &str,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    LongestMatchSegmenter::new(unk_token).segment_chunks(vocab, chunks)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::vocab::strip_continuation;

    const UNK: &str = "[UNK]";

    fn seg(
        vocab: &[&str],
        chunks: &[&str],
    ) -> Vec<String> {
        segment(chunks.iter().copied(), &Vocabulary::build(vocab), UNK)
    }

    #[test]
    fn test_subword_split() {
        assert_eq!(
            seg(&["token", "##ization"], &["tokenization"]),
            vec!["token", "##ization"]
        );
        assert_eq!(seg(&["play", "##ing"], &["playing"]), vec!["play", "##ing"]);
    }

    #[test]
    fn test_unmatched_tail() {
        assert_eq!(seg(&["hello"], &["hellox"]), vec!["hello", UNK]);
    }

    #[test]
    fn test_plain_form_not_tried_mid_chunk() {
        // "ing" exists only in plain form; position 4 is a continuation position.
        assert_eq!(seg(&["play", "ing"], &["playing"]), vec!["play", UNK]);
    }

    #[test]
    fn test_continuation_not_tried_at_start() {
        assert_eq!(seg(&["##ing"], &["ing"]), vec![UNK]);
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(
            seg(&["a", "ab", "abc", "##d", "##cd"], &["abcd"]),
            vec!["abc", "##d"]
        );
    }

    #[test]
    fn test_backtracks_to_shorter_match() {
        assert_eq!(
            seg(&["un", "unb", "##believ", "##able"], &["unbelievable"]),
            vec!["unb", UNK, "##able"]
        );
        assert_eq!(
            seg(&["un", "##believ", "##able"], &["unbelievable"]),
            vec!["un", "##believ", "##able"]
        );
    }

    #[test]
    fn test_unknown_run_collapses() {
        assert_eq!(seg(&["a", "##b"], &["axyzb"]), vec!["a", UNK, "##b"]);
        assert_eq!(seg(&[], &["xyz"]), vec![UNK]);
    }

    #[test]
    fn test_unknown_is_continuation_after_miss() {
        // After the leading miss, "b" is at a continuation position.
        assert_eq!(seg(&["b"], &["xb"]), vec![UNK]);
        assert_eq!(seg(&["##b"], &["xb"]), vec![UNK, "##b"]);
    }

    #[test]
    fn test_unknown_collapse_is_per_chunk() {
        assert_eq!(seg(&["a"], &["ax", "xa"]), vec!["a", UNK, UNK]);
        assert_eq!(seg(&[], &["x", "y"]), vec![UNK, UNK]);
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(
            seg(&["caf", "##é", "naï", "##ve"], &["café", "naïve"]),
            vec!["caf", "##é", "naï", "##ve"]
        );
        assert_eq!(seg(&["日本"], &["日本語"]), vec!["日本", UNK]);
    }

    #[test]
    fn test_blank_chunks_skipped() {
        assert!(seg(&["a"], &["", "  ", "\t"]).is_empty());
        // Whole-text chunks keep inner spaces; spaces never match.
        assert_eq!(seg(&["a", "##b"], &["a b"]), vec!["a", UNK, "##b"]);
    }

    #[test]
    fn test_reserved_tokens_do_not_match() {
        let vocab = Vocabulary::build(["[CLS]", "[", "##cls", "##]"]);
        let mut segmenter = LongestMatchSegmenter::new(UNK).with_reserved(["[CLS]"]);
        assert_eq!(segmenter.unk_token(), UNK);

        let tokens = segmenter.segment_chunks(&vocab, ["[cls]", "[CLS]"]);
        assert_eq!(tokens, vec!["[", "##cls", "##]", "[", UNK, "##]"]);
    }

    #[test]
    fn test_deterministic() {
        let vocab = Vocabulary::build(["to", "##ken", "##s", "t", "##o"]);
        let a = segment(["tokens", "toto"], &vocab, UNK);
        let b = segment(["tokens", "toto"], &vocab, UNK);
        assert_eq!(a, b);
        assert_eq!(a, vec!["to", "##ken", "##s", "to", UNK, "##o"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// With every char present in both forms, segmentation never emits
        /// the unknown token and reconstructs the chunk exactly.
        #[test]
        fn full_alphabet_reconstructs(chunk in "[a-e]{1,24}", extra in proptest::collection::vec("[a-e]{2,4}", 0..8)) {
            let mut entries: Vec<String> = Vec::new();
            for c in 'a'..='e' {
                entries.push(c.to_string());
                entries.push(format!("##{c}"));
            }
            for e in &extra {
                entries.push(e.clone());
                entries.push(format!("##{e}"));
            }
            let vocab = Vocabulary::build(&entries);

            let tokens = segment([chunk.as_str()], &vocab, UNK);
            prop_assert!(!tokens.is_empty());
            prop_assert!(tokens.iter().all(|t| t != UNK));
            prop_assert!(!tokens[0].starts_with("##"));
            prop_assert!(tokens[1..].iter().all(|t| t.starts_with("##")));

            let rebuilt: String = tokens.iter().map(|t| strip_continuation(t)).collect();
            prop_assert_eq!(rebuilt, chunk);
        }

        /// Any vocabulary, any chunk: never empty, never two adjacent
        /// unknown markers, and every other token is a vocabulary entry
        /// whose stripped text occurs in the chunk, in order.
        #[test]
        fn total_segmentation(chunk in "[a-dx ]{0,4}[a-dx]{1,20}", entries in proptest::collection::vec("(##)?[a-d]{1,3}", 0..12)) {
            let vocab = Vocabulary::build(&entries);
            let tokens = segment([chunk.as_str()], &vocab, UNK);

            prop_assert!(!tokens.is_empty());
            for pair in tokens.windows(2) {
                prop_assert!(!(pair[0] == UNK && pair[1] == UNK));
            }

            let mut rest = chunk.as_str();
            for token in tokens.iter().filter(|t| *t != UNK) {
                prop_assert!(vocab.contains(token));
                let piece = strip_continuation(token);
                let at = rest.find(piece);
                prop_assert!(at.is_some(), "{piece:?} not found in {rest:?}");
                rest = &rest[at.unwrap_or(0) + piece.len()..];
            }
        }

        /// A run of unmatched chars inside one chunk yields exactly one marker.
        #[test]
        fn unknown_run_is_one_marker(n in 1usize..30) {
            let chunk = format!("a{}", "x".repeat(n));
            let tokens = segment([chunk.as_str()], &Vocabulary::build(["a"]), UNK);
            prop_assert_eq!(tokens, vec!["a".to_string(), UNK.to_string()]);
        }
    }
}
