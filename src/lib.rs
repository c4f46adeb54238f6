//! NACO normalization of bibliographic authority headings.
//!
//! Implements the Library of Congress *Authority File Comparison Rules*
//! (Appendix A): headings are folded to an uppercase, diacritic-free,
//! punctuation-blanked form so that differently formatted headings compare equal.
//!
//! ```
//! assert_eq!(
//!     naco::normalize("$aShakespeare, William, $d1564-1616.", true),
//!     "$ASHAKESPEARE, WILLIAM $D1564 1616"
//! );
//! assert!(naco::headings_match("O'Kelley, Mattie Lou.", "OKELLEY MATTIE LOU", false));
//! ```
//!
//! Input must already be valid Unicode text. Callers holding raw bytes use
//! [`Naco::normalize_bytes`], which rejects invalid UTF-8 instead of repairing it.

pub mod context;
pub mod naco;
pub mod process;
pub mod profile;
pub mod stage;
pub mod table;
pub mod unicode;

pub use context::{CommaPolicy, Context};
pub use naco::{Naco, NacoBuilder, NacoError, headings_match, normalize};
pub use profile::preset::naco_heading;
pub use stage::fold_heading::FoldHeading;
pub use stage::strip_trailing_comma::StripTrailingComma;
pub use stage::trim::Trim;
pub use stage::upper_case::UpperCase;
