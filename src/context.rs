// src/context.rs
// Single source of truth for per-call configuration in hot paths.
// Tiny, Copy, no heap data.

/// What the scan does with `,` (U+002C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommaPolicy {
    /// Every comma is silently dropped.
    #[default]
    DropAll,
    /// The first comma of the input survives; later ones are dropped.
    /// A surviving comma is never left as the last character.
    KeepFirst,
}

impl CommaPolicy {
    #[inline(always)]
    pub const fn from_keep_first(keep_first_comma: bool) -> Self {
        if keep_first_comma {
            Self::KeepFirst
        } else {
            Self::DropAll
        }
    }

    #[inline(always)]
    pub const fn keeps_first(self) -> bool {
        matches!(self, Self::KeepFirst)
    }
}

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub comma: CommaPolicy,
}

impl Context {
    #[inline(always)]
    pub const fn new(comma: CommaPolicy) -> Self {
        Self { comma }
    }

    /// Shorthand for the boolean flag used by the NACO rules (`$a` headings keep
    /// their first comma, everything else drops them).
    #[inline(always)]
    pub const fn keep_first_comma(keep: bool) -> Self {
        Self::new(CommaPolicy::from_keep_first(keep))
    }
}
