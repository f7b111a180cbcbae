//! # Special Tokens

/// The five structural tokens of a pipeline.
///
/// Any of these may be the empty string; an empty `cls` or `sep` still
/// occupies its slot in an assembled result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTokens {
    /// Sequence start.
    pub cls: String,

    /// Sequence separator / end.
    pub sep: String,

    /// Padding.
    pub pad: String,

    /// Unknown-token marker.
    pub unk: String,

    /// Mask.
    pub mask: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            cls: "[CLS]".to_string(),
            sep: "[SEP]".to_string(),
            pad: "[PAD]".to_string(),
            unk: "[UNK]".to_string(),
            mask: "[MASK]".to_string(),
        }
    }
}

impl SpecialTokens {
    /// Iterate over all five tokens, in ``cls, sep, pad, unk, mask`` order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.cls, &self.sep, &self.pad, &self.unk, &self.mask]
            .into_iter()
            .map(String::as_str)
    }

    /// Iterate over the non-empty tokens.
    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|t| !t.is_empty())
    }

    /// Is `token` one of the configured specials?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.iter().any(|t| t == token)
    }

    /// Set the `cls` token and return the tokens.
    pub fn with_cls<S: Into<String>>(
        self,
        cls: S,
    ) -> Self {
        Self {
            cls: cls.into(),
            ..self
        }
    }

    /// Set the `sep` token and return the tokens.
    pub fn with_sep<S: Into<String>>(
        self,
        sep: S,
    ) -> Self {
        Self {
            sep: sep.into(),
            ..self
        }
    }

    /// Set the `pad` token and return the tokens.
    pub fn with_pad<S: Into<String>>(
        self,
        pad: S,
    ) -> Self {
        Self {
            pad: pad.into(),
            ..self
        }
    }

    /// Set the `unk` token and return the tokens.
    pub fn with_unk<S: Into<String>>(
        self,
        unk: S,
    ) -> Self {
        Self {
            unk: unk.into(),
            ..self
        }
    }

    /// Set the `mask` token and return the tokens.
    pub fn with_mask<S: Into<String>>(
        self,
        mask: S,
    ) -> Self {
        Self {
            mask: mask.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let specials = SpecialTokens::default();
        assert_eq!(
            specials.iter().collect::<Vec<_>>(),
            vec!["[CLS]", "[SEP]", "[PAD]", "[UNK]", "[MASK]"]
        );
        assert!(specials.contains("[MASK]"));
        assert!(!specials.contains("mask"));
    }

    #[test]
    fn test_non_empty() {
        let specials = SpecialTokens::default().with_pad("").with_mask("");
        assert_eq!(
            specials.non_empty().collect::<Vec<_>>(),
            vec!["[CLS]", "[SEP]", "[UNK]"]
        );
        // The empty string is still a (degenerate) special.
        assert!(specials.contains(""));
    }
}
