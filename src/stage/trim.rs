use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Removes leading and trailing whitespace (Unicode `White_Space`).
///
/// Borrowed input stays borrowed: the result is a subslice.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trim;

impl Trim {
    /// Infallible core of [`Stage::apply`].
    pub fn trim<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(mut s) => {
                let end = s.trim_end().len();
                s.truncate(end);
                let start = s.len() - s.trim_start().len();
                if start > 0 {
                    s.drain(..start);
                }
                Cow::Owned(s)
            }
        }
    }
}

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return Ok(true);
        }
        // Unicode fallback
        Ok(text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.trim(text))
    }
}
