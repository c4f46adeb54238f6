use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr_iter;
use std::borrow::Cow;

/// A retained comma may never be the last character of a heading.
///
/// Only active under [`CommaPolicy::KeepFirst`]. When the text ends with a
/// comma, **every** comma in the text is removed and the result re-trimmed.
/// After [`FoldHeading`] at most one comma survives, so in the NACO pipeline
/// this only ever drops the trailing one; fed directly, `"A, B,"` becomes
/// `"A B"`.
///
/// [`CommaPolicy::KeepFirst`]: crate::context::CommaPolicy::KeepFirst
/// [`FoldHeading`]: crate::stage::fold_heading::FoldHeading
#[derive(Debug, Default, Clone, Copy)]
pub struct StripTrailingComma;

impl StripTrailingComma {
    /// Infallible core of [`Stage::apply`].
    pub fn strip<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.changes(&text, ctx) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for pos in memchr_iter(b',', text.as_bytes()) {
            out.push_str(&text[last..pos]);
            last = pos + 1;
        }
        out.push_str(&text[last..]);

        let trimmed = out.trim();
        if trimmed.len() != out.len() {
            out = trimmed.to_owned();
        }
        Cow::Owned(out)
    }

    #[inline(always)]
    fn changes(&self, text: &str, ctx: &Context) -> bool {
        ctx.comma.keeps_first() && text.ends_with(',')
    }
}

impl Stage for StripTrailingComma {
    fn name(&self) -> &'static str {
        "strip_trailing_comma"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(self.changes(text, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.strip(text, ctx))
    }
}
