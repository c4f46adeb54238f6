//! src/stage/fold_heading.rs
//!
//! The NACO character scan: one left-to-right pass over Unicode scalars.

use crate::{
    context::{CommaPolicy, Context},
    stage::{Stage, StageError},
    table::{self, Action},
    unicode::{compose_scalar, decomposed_base, sole_scalar},
};
use std::borrow::Cow;

/// Folds a heading to its NACO comparison characters.
///
/// For every input scalar, first match wins:
///
/// | Step | Input (after NFC of the scalar)     | Output                                        |
/// |------|-------------------------------------|-----------------------------------------------|
/// | 1    | table `Delete` (`'`, `[`, U+0301 …) | nothing                                       |
/// | 2    | table `Blank` (`.`, `-`, `(` …)     | one space, unless the last output was a space |
/// | 3    | table `Substitute` (`æ`, `þ` …)     | the replacement text                          |
/// | 4    | `,`                                 | kept once under [`CommaPolicy::KeepFirst`]    |
/// | 5    | ` `                                 | one space, unless the last output was a space |
/// | 6    | anything else                       | base scalar of its NFD, or itself             |
///
/// When step 6 strips marks off a base that is itself in the table (`ǿ` → `ø`,
/// `≠` → `=`), the base is classified again so that folding is idempotent.
///
/// Case is untouched and edges are not trimmed; [`UpperCase`] and [`Trim`]
/// follow in the pipeline.
///
/// [`UpperCase`]: crate::stage::upper_case::UpperCase
/// [`Trim`]: crate::stage::trim::Trim
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldHeading;

impl FoldHeading {
    /// Infallible core of [`Stage::apply`].
    pub fn fold<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut scan = Scan::new(ctx.comma);
        let mut out = String::with_capacity(text.len());
        let mut changed = false;

        for c in text.chars() {
            let emit = scan.step(c);
            changed |= emit != Emit::Char(c);
            match emit {
                Emit::Nothing => {}
                Emit::Char(e) => out.push(e),
                Emit::Text(s) => out.push_str(s),
            }
        }

        if changed { Cow::Owned(out) } else { text }
    }

    /// `true` iff [`fold`](Self::fold) would change `text`.
    pub fn changes(&self, text: &str, ctx: &Context) -> bool {
        let mut scan = Scan::new(ctx.comma);
        text.chars().any(|c| scan.step(c) != Emit::Char(c))
    }
}

impl Stage for FoldHeading {
    fn name(&self) -> &'static str {
        "fold_heading"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if text.is_empty() {
            return Ok(false);
        }
        Ok(self.changes(text, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.fold(text, ctx))
    }
}

/// What one input scalar turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Nothing,
    Char(char),
    Text(&'static str),
}

/// Whether the last emitted unit was a space. Deleted characters and
/// dropped commas emit nothing and leave it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Blank,
    Other,
}

/// Call-scoped scan state.
struct Scan {
    policy: CommaPolicy,
    comma_seen: bool,
    // Starts as `Other`: an empty output never suppresses a blank.
    last: Last,
}

impl Scan {
    #[inline(always)]
    fn new(policy: CommaPolicy) -> Self {
        Self {
            policy,
            comma_seen: false,
            last: Last::Other,
        }
    }

    fn step(&mut self, c: char) -> Emit {
        let mut buf = [0u8; 4];
        let canonical = compose_scalar(c, &mut buf);
        let single = sole_scalar(&canonical);

        if let Some(s) = single {
            if let Some(action) = table::classify(s) {
                return self.act(action);
            }
            match s {
                ',' => return self.comma(),
                ' ' => return self.blank(),
                _ => {}
            }
        }

        match decomposed_base(&canonical) {
            Some(base) => match table::classify(base) {
                Some(action) => self.act(action),
                None => self.other(base),
            },
            None => match single {
                Some(s) => self.other(s),
                None => Emit::Nothing,
            },
        }
    }

    #[inline(always)]
    fn act(&mut self, action: Action) -> Emit {
        match action {
            Action::Delete => Emit::Nothing,
            Action::Blank => self.blank(),
            Action::Substitute(text) => {
                self.last = Last::Other;
                Emit::Text(text)
            }
        }
    }

    #[inline(always)]
    fn blank(&mut self) -> Emit {
        match self.last {
            Last::Blank => Emit::Nothing,
            Last::Other => {
                self.last = Last::Blank;
                Emit::Char(' ')
            }
        }
    }

    #[inline(always)]
    fn comma(&mut self) -> Emit {
        if self.policy.keeps_first() && !self.comma_seen {
            self.comma_seen = true;
            self.last = Last::Other;
            Emit::Char(',')
        } else {
            Emit::Nothing
        }
    }

    #[inline(always)]
    fn other(&mut self, c: char) -> Emit {
        self.last = Last::Other;
        Emit::Char(c)
    }
}
