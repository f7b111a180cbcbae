//! # Normalizer

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizerOptions;

/// Is `c` in the Combining Diacritical Marks block (``U+0300..=U+036F``)?
pub fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Normalize text per `options`.
///
/// Lowercases first, then applies canonical decomposition (NFD) and
/// drops combining diacritical marks. The decomposed output is not
/// recomposed.
///
/// Borrows the input when `options` is the identity.
pub fn normalize<'a>(
    text: &'a str,
    options: &NormalizerOptions,
) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);
    if options.is_identity() {
        return text;
    }

    if options.lowercase {
        text = Cow::Owned(text.to_lowercase());
    }

    if options.strip_accents {
        text = Cow::Owned(
            text.nfd()
                .filter(|&c| !is_combining_diacritic(c))
                .collect(),
        );
    }

    text
}
