use thiserror::Error;

use crate::{
    context::{CommaPolicy, Context},
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    stage::{
        Stage, StageError, fold_heading::FoldHeading, strip_trailing_comma::StripTrailingComma,
        trim::Trim, upper_case::UpperCase,
    },
};
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum NacoError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Normalize `input` to its NACO comparison form.
///
/// Total over `&str`: empty input, or input made only of deleted and blanked
/// characters, yields `""`. With `keep_first_comma` the first comma of the
/// input survives unless it would end the result.
///
/// ```
/// assert_eq!(naco::normalize("$aO'Kelley, Mattie Lou.", true), "$AOKELLEY, MATTIE LOU");
/// assert_eq!(naco::normalize("$aO'Kelley, Mattie Lou.", false), "$AOKELLEY MATTIE LOU");
/// ```
pub fn normalize(input: &str, keep_first_comma: bool) -> String {
    let ctx = Context::keep_first_comma(keep_first_comma);
    let text = FoldHeading.fold(Cow::Borrowed(input), &ctx);
    let text = Trim.trim(text);
    let text = UpperCase.upper(text);
    StripTrailingComma.strip(text, &ctx).into_owned()
}

/// `true` iff both headings normalize to the same comparison form.
pub fn headings_match(a: &str, b: &str, keep_first_comma: bool) -> bool {
    normalize(a, keep_first_comma) == normalize(b, keep_first_comma)
}

/// A reusable NACO normalizer.
///
/// Runs any caller-supplied stages first, then the four NACO stages.
/// `Send + Sync`; share one instance across threads.
pub struct Naco {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Naco {
    pub fn builder() -> NacoBuilder {
        NacoBuilder::default()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, NacoError> {
        let results = self.pipeline.process(Cow::Borrowed(text), &self.ctx)?;
        Ok(results)
    }

    /// Validates `bytes` as UTF-8 before normalizing. Invalid input is
    /// rejected, never repaired.
    pub fn normalize_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, NacoError> {
        let text = validate_utf8(bytes).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected heading bytes");
        })?;
        self.normalize(text)
    }

    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: &'a str,
    ) -> Result<Cow<'a, str>, NacoError> {
        let results = profile.run(Cow::Borrowed(text), &self.ctx)?;
        Ok(results)
    }

    /// `true` iff both headings normalize to the same comparison form.
    pub fn is_match(&self, a: &str, b: &str) -> Result<bool, NacoError> {
        Ok(self.normalize(a)? == self.normalize(b)?)
    }
}

#[cfg(feature = "simd")]
fn validate_utf8(bytes: &[u8]) -> Result<&str, NacoError> {
    simdutf8::compat::from_utf8(bytes).map_err(|e| NacoError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

#[cfg(not(feature = "simd"))]
fn validate_utf8(bytes: &[u8]) -> Result<&str, NacoError> {
    std::str::from_utf8(bytes).map_err(|e| NacoError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

#[derive(Default)]
pub struct NacoBuilder {
    comma: CommaPolicy,
    stages: Vec<Arc<dyn Stage + Send + Sync>>,
}

impl NacoBuilder {
    pub fn comma_policy(mut self, comma: CommaPolicy) -> Self {
        self.comma = comma;
        self
    }

    pub fn keep_first_comma(self, keep: bool) -> Self {
        self.comma_policy(CommaPolicy::from_keep_first(keep))
    }

    /// Adds a stage that runs before the NACO stages.
    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Naco {
        let ctx = Context::new(self.comma);
        let pipeline = self
            .stages
            .into_iter()
            .fold(DynamicProcess::new(), DynamicProcess::push_arc)
            .push(FoldHeading)
            .push(Trim)
            .push(UpperCase)
            .push(StripTrailingComma);
        Naco { ctx, pipeline }
    }
}
