//! # Vocabulary
//!
//! A [`Vocabulary`] is an ordered, deduplicated set of token strings;
//! token ids are positions in that order.
//!
//! ## Continuation Tokens
//!
//! Tokens which attach to a preceding token without a word boundary
//! carry the fixed [`CONTINUATION_PREFIX`], e.g. ``"##ing"``.

mod vocabulary;

#[doc(inline)]
pub use vocabulary::*;

/// Marker prefix for subword continuation tokens.
pub const CONTINUATION_PREFIX: &str = "##";

/// Strip the [`CONTINUATION_PREFIX`] from a token, if present.
pub fn strip_continuation(token: &str) -> &str {
    token.strip_prefix(CONTINUATION_PREFIX).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_continuation() {
        assert_eq!(strip_continuation("##ing"), "ing");
        assert_eq!(strip_continuation("play"), "play");
        assert_eq!(strip_continuation("####"), "##");
    }
}
