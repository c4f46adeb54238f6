use crate::{
    process::Process,
    profile::Profile,
    stage::{
        fold_heading::FoldHeading, strip_trailing_comma::StripTrailingComma, trim::Trim,
        upper_case::UpperCase,
    },
};

/// The NACO comparison form: fold, trim, uppercase, then make sure a kept
/// comma is not the last character.
pub fn naco_heading() -> Profile<impl Process> {
    Profile::builder("naco_heading")
        .add_stage(FoldHeading)
        .add_stage(Trim)
        .add_stage(UpperCase)
        .add_stage(StripTrailingComma)
        .build()
}
