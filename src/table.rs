//! Appendix A of the NACO Authority File Comparison Rules as a static lookup.
//!
//! Keys are single Unicode scalar values in NFC. The comma is deliberately
//! absent: it is handled by the scanner according to the [`CommaPolicy`].
//!
//! Sources: <http://www.loc.gov/aba/pcc/naco/normrule-2.html> and the MARC-8
//! code tables at <http://memory.loc.gov/diglib/codetables/45.html>.
//!
//! [`CommaPolicy`]: crate::context::CommaPolicy

use phf::{Map, phf_map};

/// What the scanner does with a classified character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Removed without trace. Does not affect blank collapsing.
    Delete,
    /// Replaced by one space, collapsed against a preceding space.
    Blank,
    /// Replaced by fixed text, emitted verbatim.
    Substitute(&'static str),
}

use Action::{Blank, Delete, Substitute};

pub static CLASSIFICATION: Map<char, Action> = phf_map! {
    // ── Substitutions ─────────────────────────────────────────────
    '⁰' => Substitute("0"), // SUPERSCRIPT ZERO
    '¹' => Substitute("1"),
    '²' => Substitute("2"),
    '³' => Substitute("3"),
    '⁴' => Substitute("4"),
    '⁵' => Substitute("5"),
    '⁶' => Substitute("6"),
    '⁷' => Substitute("7"),
    '⁸' => Substitute("8"),
    '⁹' => Substitute("9"),
    '₀' => Substitute("0"), // SUBSCRIPT ZERO
    '₁' => Substitute("1"),
    '₂' => Substitute("2"),
    '₃' => Substitute("3"),
    '₄' => Substitute("4"),
    '₅' => Substitute("5"),
    '₆' => Substitute("6"),
    '₇' => Substitute("7"),
    '₈' => Substitute("8"),
    '₉' => Substitute("9"),
    'æ' => Substitute("AE"), // LATIN SMALL LIGATURE AE
    'Æ' => Substitute("AE"),
    'œ' => Substitute("OE"), // LATIN SMALL LIGATURE OE
    'Œ' => Substitute("OE"),
    'đ' => Substitute("D"), // D WITH STROKE
    'Đ' => Substitute("D"),
    'ð' => Substitute("D"), // ETH
    'Ð' => Substitute("D"),
    'ı' => Substitute("I"), // DOTLESS I
    'ł' => Substitute("L"), // L WITH STROKE
    'Ł' => Substitute("L"),
    'ℓ' => Substitute("L"), // SCRIPT SMALL L
    // O WITH HORN. The published rules give O; existing comparison forms use U.
    'ơ' => Substitute("U"),
    'Ơ' => Substitute("U"),
    'ư' => Substitute("U"), // U WITH HORN
    'Ư' => Substitute("U"),
    'ø' => Substitute("O"), // O WITH STROKE
    'Ø' => Substitute("O"),
    'þ' => Substitute("TH"), // THORN
    'Þ' => Substitute("TH"),
    'ß' => Substitute("SS"), // ESZETT
    // Greek letters keep their script; not valid in NACO 1XX fields.
    'α' => Substitute("Α"),
    'β' => Substitute("Β"),
    'γ' => Substitute("Γ"),

    // ── Deleted ───────────────────────────────────────────────────
    '[' => Delete,
    ']' => Delete,
    '\u{0027}' => Delete, // APOSTROPHE
    '\u{200D}' => Delete, // ZERO WIDTH JOINER
    '\u{200C}' => Delete, // ZERO WIDTH NON-JOINER
    '\u{02B9}' => Delete, // MODIFIER LETTER PRIME (soft sign)
    '\u{02BA}' => Delete, // MODIFIER LETTER DOUBLE PRIME (hard sign)
    '\u{02BB}' => Delete, // MODIFIER LETTER TURNED COMMA (ayn)
    '\u{02BC}' => Delete, // MODIFIER LETTER APOSTROPHE (alif)
    '\u{0300}' => Delete, // COMBINING GRAVE ACCENT
    '\u{0301}' => Delete, // COMBINING ACUTE ACCENT
    '\u{0302}' => Delete, // COMBINING CIRCUMFLEX ACCENT
    '\u{0303}' => Delete, // COMBINING TILDE
    '\u{0304}' => Delete, // COMBINING MACRON
    '\u{0306}' => Delete, // COMBINING BREVE
    '\u{0307}' => Delete, // COMBINING DOT ABOVE
    '\u{0308}' => Delete, // COMBINING DIAERESIS
    '\u{0309}' => Delete, // COMBINING HOOK ABOVE (pseudo question mark)
    '\u{030A}' => Delete, // COMBINING RING ABOVE
    '\u{030B}' => Delete, // COMBINING DOUBLE ACUTE ACCENT
    '\u{030C}' => Delete, // COMBINING CARON
    '\u{0310}' => Delete, // COMBINING CANDRABINDU
    '\u{0313}' => Delete, // COMBINING COMMA ABOVE
    '\u{0315}' => Delete, // COMBINING COMMA ABOVE RIGHT
    '\u{031C}' => Delete, // COMBINING LEFT HALF RING BELOW (right cedilla)
    '\u{0323}' => Delete, // COMBINING DOT BELOW
    '\u{0324}' => Delete, // COMBINING DIAERESIS BELOW
    '\u{0325}' => Delete, // COMBINING RING BELOW
    '\u{0326}' => Delete, // COMBINING COMMA BELOW
    '\u{0327}' => Delete, // COMBINING CEDILLA
    '\u{0328}' => Delete, // COMBINING OGONEK
    '\u{032E}' => Delete, // COMBINING BREVE BELOW
    '\u{0332}' => Delete, // COMBINING LOW LINE
    '\u{0333}' => Delete, // COMBINING DOUBLE LOW LINE
    '\u{0360}' => Delete, // COMBINING DOUBLE TILDE
    '\u{0361}' => Delete, // COMBINING DOUBLE INVERTED BREVE (ligature)

    // ── Blanked out ───────────────────────────────────────────────
    '!' => Blank,
    '"' => Blank,
    '(' => Blank,
    ')' => Blank,
    '-' => Blank,
    '{' => Blank,
    '}' => Blank,
    '<' => Blank,
    '>' => Blank,
    ';' => Blank,
    ':' => Blank,
    '.' => Blank,
    '?' => Blank,
    '¿' => Blank,
    '¡' => Blank,
    '/' => Blank,
    '\\' => Blank,
    '*' => Blank,
    '|' => Blank,
    '%' => Blank,
    '=' => Blank,
    '±' => Blank,
    '⁺' => Blank, // SUPERSCRIPT PLUS
    '⁻' => Blank, // SUPERSCRIPT MINUS
    '®' => Blank, // patent mark
    '℗' => Blank, // sound recording copyright
    '©' => Blank,
    '°' => Blank,
    '^' => Blank, // spacing circumflex
    '_' => Blank, // spacing underscore
    '`' => Blank, // spacing grave
    '~' => Blank, // spacing tilde
    '·' => Blank, // MIDDLE DOT
};

/// Look up the rule for one canonical scalar.
#[inline(always)]
pub fn classify(c: char) -> Option<Action> {
    CLASSIFICATION.get(&c).copied()
}
