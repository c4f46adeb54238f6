//! src/stage/upper_case.rs
//!
//! Uppercasing for NACO comparison forms.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::simple_uppercase,
};
use std::borrow::Cow;

/// Uppercases every character with its simple (one-to-one) mapping.
///
/// Unicode-aware (Latin-1, Latin Extended-A, Greek, Cyrillic …) but not
/// locale-aware: there is no Turkish dotted-I handling, and characters whose
/// full uppercase would expand (`ŉ` → `ʼN`) are left as they are. Dotless `ı`
/// never reaches this stage, [`FoldHeading`] substitutes it first.
///
/// [`FoldHeading`]: crate::stage::fold_heading::FoldHeading
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperCase;

impl UpperCase {
    /// Infallible core of [`Stage::apply`].
    pub fn upper<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.changes(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_uppercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.chars().map(simple_uppercase).collect())
    }

    #[inline]
    fn changes(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_lowercase());
        }
        text.chars().any(|c| simple_uppercase(c) != c)
    }
}

impl Stage for UpperCase {
    fn name(&self) -> &'static str {
        "upper_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(self.changes(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.upper(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for UpperCase {
        fn samples(_ctx: &Context) -> &'static [&'static str] {
            &["$aAland, Kurt", "émile zola", "ÿ ŉ ﬀ", "ΑΒΓ", "straSSe", ""]
        }

        fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
            &["HELLO", "$AALAND, KURT", "ÉMILE", "ŉ", "123 !?", ""]
        }

        fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
            &[("mattie lou", "MATTIE LOU"), ("þorn àé", "ÞORN ÀÉ")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(UpperCase);
    }

    #[test]
    fn ascii_path_uppercases_in_place() {
        assert_eq!(UpperCase.upper(Cow::Borrowed("$ashakespeare")), "$ASHAKESPEARE");
    }

    #[test]
    fn latin_extended_a() {
        assert_eq!(UpperCase.upper(Cow::Borrowed("āăąćĉċčďēĕėęě")), "ĀĂĄĆĈĊČĎĒĔĖĘĚ");
        assert_eq!(UpperCase.upper(Cow::Borrowed("ÿ")), "Ÿ");
    }

    #[test]
    fn no_locale_tailoring() {
        assert_eq!(UpperCase.upper(Cow::Borrowed("istanbul")), "ISTANBUL");
    }

    #[test]
    fn expanding_mappings_are_skipped() {
        assert_eq!(UpperCase.upper(Cow::Borrowed("ŉ")), "ŉ");
        assert_eq!(UpperCase.upper(Cow::Borrowed("ﬀ")), "ﬀ");
    }
}
