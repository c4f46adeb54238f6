//! Per-scalar Unicode primitives used by the heading scan.
//!
//! The NACO rules compose each input scalar before the table lookup and only
//! decompose when nothing in the table matched. Both directions go through
//! ICU4X; ASCII never reaches it because every ASCII scalar is stable under
//! NFC and NFD.

use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// NFC of a single scalar, encoded into `buf` when nothing changes.
///
/// Usually one scalar comes back, but singletons such as U+0344 compose to
/// a sequence, so callers must not assume a single `char`.
#[inline]
pub fn compose_scalar(c: char, buf: &mut [u8; 4]) -> Cow<'_, str> {
    let encoded: &str = c.encode_utf8(buf);
    if c.is_ascii() {
        return Cow::Borrowed(encoded);
    }
    ICU4X_NFC.normalize(encoded)
}

/// Returns the sole scalar of `text`, or `None` for empty and multi-scalar text.
#[inline(always)]
pub fn sole_scalar(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// First scalar of the NFD form of `text`, but only when NFD yields more than
/// one scalar (a base followed by combining marks). `None` means the text is
/// a single scalar with no canonical decomposition.
#[inline]
pub fn decomposed_base(text: &str) -> Option<char> {
    if text.len() == 1 {
        return None;
    }
    let nfd = ICU4X_NFD.normalize(text);
    let mut chars = nfd.chars();
    let base = chars.next()?;
    chars.next().map(|_| base)
}

/// Simple (one-to-one) uppercase mapping.
///
/// Characters whose full uppercase expands to several scalars (`ŉ`, `ﬀ`,
/// `ǰ` and friends) are returned unchanged. No locale tailoring.
#[inline(always)]
pub fn simple_uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
