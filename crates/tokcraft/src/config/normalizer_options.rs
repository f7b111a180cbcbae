//! # Normalizer Options

/// Options for [`crate::normalize::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizerOptions {
    /// Fold text to lowercase.
    pub lowercase: bool,

    /// Decompose and drop combining diacritical marks.
    pub strip_accents: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: false,
        }
    }
}

impl NormalizerOptions {
    /// Options which leave text untouched.
    pub const IDENTITY: Self = Self {
        lowercase: false,
        strip_accents: false,
    };

    /// Is lowercasing enabled?
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Set whether lowercasing is enabled.
    pub fn set_lowercase(
        &mut self,
        lowercase: bool,
    ) {
        self.lowercase = lowercase;
    }

    /// Set whether lowercasing is enabled and return the options.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.set_lowercase(lowercase);
        self
    }

    /// Is accent stripping enabled?
    pub fn strip_accents(&self) -> bool {
        self.strip_accents
    }

    /// Set whether accent stripping is enabled.
    pub fn set_strip_accents(
        &mut self,
        strip_accents: bool,
    ) {
        self.strip_accents = strip_accents;
    }

    /// Set whether accent stripping is enabled and return the options.
    pub fn with_strip_accents(
        mut self,
        strip_accents: bool,
    ) -> Self {
        self.set_strip_accents(strip_accents);
        self
    }

    /// Returns true if normalization would leave all text unchanged.
    pub fn is_identity(&self) -> bool {
        !self.lowercase && !self.strip_accents
    }
}
