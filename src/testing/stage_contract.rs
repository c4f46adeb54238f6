use crate::{
    context::{CommaPolicy, Context},
    stage::Stage,
};
use std::borrow::Cow;

/// Every comma policy a stage must behave under.
pub const ALL_CONTEXTS: &[Context] = &[
    Context::new(CommaPolicy::DropAll),
    Context::new(CommaPolicy::KeepFirst),
];

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples(_ctx: &Context) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", "a, b,", ""]
    }

    /// Samples that must come back unchanged and without allocation.
    fn should_pass_through(_ctx: &Context) -> &'static [&'static str] {
        &["HELLO", "WORLD", "TEST123", "ABC DEF", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_ctx: &Context) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string` → `""` stays `""`
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
///
/// Each contract runs under every [`CommaPolicy`].
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for ctx in ALL_CONTEXTS {
        for &input in S::samples(ctx) {
            let mut text = Cow::Borrowed(input);

            // First pass – respect needs_apply
            if stage.needs_apply(&text, ctx).unwrap() {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, ctx).unwrap();
                assert_ne!(
                    old_ptr,
                    text.as_ref() as *const str,
                    "needs_apply() said yes but apply() changed nothing ({ctx:?}, `{input}`)"
                );
            }

            // Second pass – must never allocate again (idempotency + zero-copy)
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, ctx).unwrap() {
                text = stage.apply(text, ctx).unwrap();
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second idempotent pass ({ctx:?}, input: `{input}`)"
            );
        }

        // Pass-through samples must always be zero-copy and unchanged, even
        // when apply() is called without asking needs_apply() first.
        for &pass_through in S::should_pass_through(ctx) {
            assert!(
                !stage.needs_apply(pass_through, ctx).unwrap(),
                "needs_apply() true on pass-through sample ({ctx:?}, `{pass_through}`)"
            );
            let text = stage.apply(Cow::Borrowed(pass_through), ctx).unwrap();
            assert_eq!(text.as_ref(), pass_through);
            assert!(
                matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
                "zero-copy violated on pass-through sample ({ctx:?}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(ctx) {
            let text = stage.apply(Cow::Borrowed(input), ctx).unwrap();
            assert_eq!(text.as_ref(), expected, "{ctx:?}, input: `{input}`");
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for ctx in ALL_CONTEXTS {
        for &input in S::samples(ctx) {
            let once = stage.apply(Cow::Borrowed(input), ctx).unwrap();
            let twice = stage.apply(once.clone(), ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent in {ctx:?} on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for ctx in ALL_CONTEXTS {
        for &sample in S::samples(ctx) {
            check_accuracy(&stage, sample, ctx);
        }
        for &sample in S::should_pass_through(ctx) {
            check_accuracy(&stage, sample, ctx);
        }
        for &(sample, _) in S::should_transform(ctx) {
            check_accuracy(&stage, sample, ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // Owned input so that stages which always allocate are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {ctx:?} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for ctx in ALL_CONTEXTS {
        assert!(!stage.needs_apply("", ctx).unwrap());
        let result = stage.apply(Cow::Borrowed(""), ctx).unwrap();
        assert_eq!(result.as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for ctx in ALL_CONTEXTS {
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 한국어 Ελληνικά"),
            ctx,
        );
        let _ = stage.apply(Cow::Borrowed("\u{0344}\u{0F73}\u{FE20}ǰ\u{1E96}ŉ,,,"), ctx);
    }
}
