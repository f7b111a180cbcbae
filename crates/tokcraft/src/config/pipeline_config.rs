//! # Pipeline Configuration

use crate::config::{ChunkPolicy, ModelFamily, NormalizerOptions, SpecialTokens};

/// User-controlled configuration for a tokenizer pipeline.
///
/// Every field is independent: changing the [`ModelFamily`] does not
/// regenerate the vocabulary or touch the specials.
///
/// ## Style Hints
///
/// Instance names should prefer `pipeline_config`,
/// or `config` when there is no ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Model family; selects the generation reference tokenizer.
    pub model_family: ModelFamily,

    /// Text normalization options.
    pub normalizer: NormalizerOptions,

    /// Pre-tokenization policy.
    pub chunk_policy: ChunkPolicy,

    /// Structural tokens.
    pub special_tokens: SpecialTokens,
}

impl PipelineConfig {
    /// Get the model family.
    pub fn model_family(&self) -> ModelFamily {
        self.model_family
    }

    /// Set the model family and return the config.
    pub fn with_model_family(
        self,
        model_family: ModelFamily,
    ) -> Self {
        Self {
            model_family,
            ..self
        }
    }

    /// Get the normalizer options.
    pub fn normalizer(&self) -> &NormalizerOptions {
        &self.normalizer
    }

    /// Set the normalizer options and return the config.
    pub fn with_normalizer(
        self,
        normalizer: NormalizerOptions,
    ) -> Self {
        Self { normalizer, ..self }
    }

    /// Get the chunk policy.
    pub fn chunk_policy(&self) -> ChunkPolicy {
        self.chunk_policy
    }

    /// Set the chunk policy and return the config.
    pub fn with_chunk_policy(
        self,
        chunk_policy: ChunkPolicy,
    ) -> Self {
        Self {
            chunk_policy,
            ..self
        }
    }

    /// Get the special tokens.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    /// Set the special tokens and return the config.
    pub fn with_special_tokens(
        self,
        special_tokens: SpecialTokens,
    ) -> Self {
        Self {
            special_tokens,
            ..self
        }
    }

    /// Apply a partial update, changing only the fields it names.
    pub fn apply(
        &mut self,
        update: &ConfigUpdate,
    ) {
        if let Some(model_family) = update.model_family {
            self.model_family = model_family;
        }
        if let Some(chunk_policy) = update.chunk_policy {
            self.chunk_policy = chunk_policy;
        }
        update.normalizer.apply_to(&mut self.normalizer);
        update.special_tokens.apply_to(&mut self.special_tokens);
    }

    /// Return a copy of the config with `update` applied.
    pub fn updated(
        &self,
        update: &ConfigUpdate,
    ) -> Self {
        let mut config = self.clone();
        config.apply(update);
        config
    }
}

/// Partial update of [`NormalizerOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerUpdate {
    /// New lowercase setting.
    pub lowercase: Option<bool>,

    /// New accent stripping setting.
    pub strip_accents: Option<bool>,
}

impl NormalizerUpdate {
    fn apply_to(
        &self,
        options: &mut NormalizerOptions,
    ) {
        if let Some(lowercase) = self.lowercase {
            options.set_lowercase(lowercase);
        }
        if let Some(strip_accents) = self.strip_accents {
            options.set_strip_accents(strip_accents);
        }
    }
}

/// Partial update of [`SpecialTokens`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialTokensUpdate {
    /// New `cls` token.
    pub cls: Option<String>,

    /// New `sep` token.
    pub sep: Option<String>,

    /// New `pad` token.
    pub pad: Option<String>,

    /// New `unk` token.
    pub unk: Option<String>,

    /// New `mask` token.
    pub mask: Option<String>,
}

impl SpecialTokensUpdate {
    fn apply_to(
        &self,
        specials: &mut SpecialTokens,
    ) {
        let slots = [
            (&self.cls, &mut specials.cls),
            (&self.sep, &mut specials.sep),
            (&self.pad, &mut specials.pad),
            (&self.unk, &mut specials.unk),
            (&self.mask, &mut specials.mask),
        ];
        for (update, slot) in slots {
            if let Some(value) = update {
                slot.clone_from(value);
            }
        }
    }
}

/// A partial, type-checked [`PipelineConfig`] update.
///
/// Nested groups merge field-by-field: setting `normalizer.lowercase`
/// leaves `normalizer.strip_accents` untouched.
///
/// ```rust
/// use tokcraft::config::{ChunkPolicy, ConfigUpdate, PipelineConfig};
///
/// let update = ConfigUpdate::default()
///     .with_chunk_policy(ChunkPolicy::BertStyle)
///     .with_strip_accents(true)
///     .with_unk("<unk>");
///
/// let config = PipelineConfig::default().updated(&update);
/// assert!(config.normalizer.lowercase);
/// assert!(config.normalizer.strip_accents);
/// assert_eq!(config.special_tokens.unk, "<unk>");
/// assert_eq!(config.special_tokens.cls, "[CLS]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New model family.
    pub model_family: Option<ModelFamily>,

    /// New chunk policy.
    pub chunk_policy: Option<ChunkPolicy>,

    /// Normalizer field updates.
    pub normalizer: NormalizerUpdate,

    /// Special token field updates.
    pub special_tokens: SpecialTokensUpdate,
}

impl ConfigUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the model family.
    pub fn with_model_family(
        mut self,
        model_family: ModelFamily,
    ) -> Self {
        self.model_family = Some(model_family);
        self
    }

    /// Set the chunk policy.
    pub fn with_chunk_policy(
        mut self,
        chunk_policy: ChunkPolicy,
    ) -> Self {
        self.chunk_policy = Some(chunk_policy);
        self
    }

    /// Set the normalizer lowercase flag.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.normalizer.lowercase = Some(lowercase);
        self
    }

    /// Set the normalizer accent stripping flag.
    pub fn with_strip_accents(
        mut self,
        strip_accents: bool,
    ) -> Self {
        self.normalizer.strip_accents = Some(strip_accents);
        self
    }

    /// Set the `cls` token.
    pub fn with_cls<S: Into<String>>(
        mut self,
        cls: S,
    ) -> Self {
        self.special_tokens.cls = Some(cls.into());
        self
    }

    /// Set the `sep` token.
    pub fn with_sep<S: Into<String>>(
        mut self,
        sep: S,
    ) -> Self {
        self.special_tokens.sep = Some(sep.into());
        self
    }

    /// Set the `pad` token.
    pub fn with_pad<S: Into<String>>(
        mut self,
        pad: S,
    ) -> Self {
        self.special_tokens.pad = Some(pad.into());
        self
    }

    /// Set the `unk` token.
    pub fn with_unk<S: Into<String>>(
        mut self,
        unk: S,
    ) -> Self {
        self.special_tokens.unk = Some(unk.into());
        self
    }

    /// Set the `mask` token.
    pub fn with_mask<S: Into<String>>(
        mut self,
        mask: S,
    ) -> Self {
        self.special_tokens.mask = Some(mask.into());
        self
    }
}
