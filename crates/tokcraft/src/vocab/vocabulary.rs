//! # Ordered Token Vocabulary

use std::collections::BTreeSet;

use crate::{
    types::{TCHashMap, TokenId, hash_map_with_capacity},
    vocab::CONTINUATION_PREFIX,
};

/// An ordered, deduplicated set of token strings.
///
/// Tokens are kept in code-point lexicographic order;
/// a token's [`TokenId`] is its position in that order.
///
/// A vocabulary is never mutated in place; regeneration builds
/// a new one and replaces the old one whole.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Sorted tokens; index is the token id.
    tokens: Vec<String>,

    /// Map of ``{ token -> id }``.
    index: TCHashMap<String, TokenId>,

    /// Length, in chars, of the longest token.
    max_token_chars: usize,
}

impl PartialEq for Vocabulary {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Vocabulary {}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl Vocabulary {
    /// Build a vocabulary from an iterable of tokens.
    ///
    /// Duplicates are dropped and the result is sorted, so the same
    /// set of tokens always yields the same ids, whatever their input order.
    ///
    /// ## Arguments
    /// * `tokens` - the token strings.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        Self::from_sorted_unique(unique.into_iter().collect())
    }

    fn from_sorted_unique(tokens: Vec<String>) -> Self {
        let mut index = hash_map_with_capacity(tokens.len());
        let mut max_token_chars = 0;
        for (id, token) in tokens.iter().enumerate() {
            max_token_chars = max_token_chars.max(token.chars().count());
            index.insert(token.clone(), id as TokenId);
        }

        log::debug!(
            "built vocabulary: {} tokens, longest {} chars",
            tokens.len(),
            max_token_chars
        );

        Self {
            tokens,
            index,
            max_token_chars,
        }
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the tokens, in id order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over ``(id, token)`` pairs, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, token)| (id as TokenId, token.as_str()))
    }

    /// Length, in chars, of the longest token.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// Look up the id of a token.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.index.get(token).copied()
    }

    /// Look up the token for an id.
    pub fn token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Match a candidate substring in its position-dependent form.
    ///
    /// At a continuation position only the [`CONTINUATION_PREFIX`] form is
    /// tried; otherwise only the plain form is tried.
    ///
    /// ## Returns
    /// The matched vocabulary entry, if any.
    pub fn contains_effective(
        &self,
        candidate: &str,
        is_continuation: bool,
    ) -> Option<&str> {
        let mut scratch = String::new();
        self.contains_effective_with(candidate, is_continuation, &mut scratch)
    }

    /// As [`Self::contains_effective`], reusing `scratch` for the prefixed form.
    pub fn contains_effective_with(
        &self,
        candidate: &str,
        is_continuation: bool,
        scratch: &mut String,
    ) -> Option<&str> {
        let key = if is_continuation {
            scratch.clear();
            scratch.push_str(CONTINUATION_PREFIX);
            scratch.push_str(candidate);
            scratch.as_str()
        } else {
            candidate
        };

        self.index
            .get(key)
            .map(|&id| self.tokens[id as usize].as_str())
    }

    /// Preview the first `limit` tokens.
    pub fn preview(
        &self,
        limit: usize,
    ) -> VocabPreview<'_> {
        let shown = limit.min(self.len());
        VocabPreview {
            head: &self.tokens[..shown],
            remaining: self.len() - shown,
        }
    }
}

/// A bounded view of a [`Vocabulary`]; see [`Vocabulary::preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabPreview<'a> {
    /// The leading tokens.
    pub head: &'a [String],

    /// The number of tokens not shown.
    pub remaining: usize,
}

impl core::fmt::Display for VocabPreview<'_> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        for (idx, token) in self.head.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        if self.remaining > 0 {
            if !self.head.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "+{} more", self.remaining)?;
        }
        Ok(())
    }
}
