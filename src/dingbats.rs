//! Symbol-font character table.
//!
//! `w:sym` elements address characters by (font, codepoint) in the
//! font's private encoding. This table maps the encodings of the fonts
//! seen in the wild onto Unicode. It covers the Symbol font's Greek
//! alphabet and the common Wingdings glyphs; anything else is reported
//! as unsupported by the caller.

use std::collections::HashMap;
use std::sync::LazyLock;

#[rustfmt::skip]
const DINGBATS: &[(&str, u32, char)] = &[
    // Symbol: uppercase Greek.
    ("Symbol", 0x41, 'Α'), ("Symbol", 0x42, 'Β'), ("Symbol", 0x43, 'Χ'),
    ("Symbol", 0x44, 'Δ'), ("Symbol", 0x45, 'Ε'), ("Symbol", 0x46, 'Φ'),
    ("Symbol", 0x47, 'Γ'), ("Symbol", 0x48, 'Η'), ("Symbol", 0x49, 'Ι'),
    ("Symbol", 0x4B, 'Κ'), ("Symbol", 0x4C, 'Λ'), ("Symbol", 0x4D, 'Μ'),
    ("Symbol", 0x4E, 'Ν'), ("Symbol", 0x4F, 'Ο'), ("Symbol", 0x50, 'Π'),
    ("Symbol", 0x51, 'Θ'), ("Symbol", 0x52, 'Ρ'), ("Symbol", 0x53, 'Σ'),
    ("Symbol", 0x54, 'Τ'), ("Symbol", 0x55, 'Υ'), ("Symbol", 0x57, 'Ω'),
    ("Symbol", 0x58, 'Ξ'), ("Symbol", 0x59, 'Ψ'), ("Symbol", 0x5A, 'Ζ'),
    // Symbol: lowercase Greek.
    ("Symbol", 0x61, 'α'), ("Symbol", 0x62, 'β'), ("Symbol", 0x63, 'χ'),
    ("Symbol", 0x64, 'δ'), ("Symbol", 0x65, 'ε'), ("Symbol", 0x66, 'φ'),
    ("Symbol", 0x67, 'γ'), ("Symbol", 0x68, 'η'), ("Symbol", 0x69, 'ι'),
    ("Symbol", 0x6A, 'ϕ'), ("Symbol", 0x6B, 'κ'), ("Symbol", 0x6C, 'λ'),
    ("Symbol", 0x6D, 'μ'), ("Symbol", 0x6E, 'ν'), ("Symbol", 0x6F, 'ο'),
    ("Symbol", 0x70, 'π'), ("Symbol", 0x71, 'θ'), ("Symbol", 0x72, 'ρ'),
    ("Symbol", 0x73, 'σ'), ("Symbol", 0x74, 'τ'), ("Symbol", 0x75, 'υ'),
    ("Symbol", 0x76, 'ϖ'), ("Symbol", 0x77, 'ω'), ("Symbol", 0x78, 'ξ'),
    ("Symbol", 0x79, 'ψ'), ("Symbol", 0x7A, 'ζ'),
    // Symbol: operators and arrows.
    ("Symbol", 0xB1, '±'), ("Symbol", 0xB4, '×'), ("Symbol", 0xB8, '÷'),
    ("Symbol", 0xB9, '≠'), ("Symbol", 0xBA, '≡'), ("Symbol", 0xBB, '≈'),
    ("Symbol", 0xA3, '≤'), ("Symbol", 0xB3, '≥'), ("Symbol", 0xA5, '∞'),
    ("Symbol", 0xAC, '←'), ("Symbol", 0xAD, '↑'), ("Symbol", 0xAE, '→'),
    ("Symbol", 0xAF, '↓'), ("Symbol", 0xD6, '√'), ("Symbol", 0xB6, '∂'),
    ("Symbol", 0xE5, '∑'), ("Symbol", 0xD5, '∏'), ("Symbol", 0xCE, '∈'),
    // Wingdings.
    ("Wingdings", 0x25, '🔔'), ("Wingdings", 0x26, '📖'),
    ("Wingdings", 0x28, '👍'), ("Wingdings", 0x2A, '✉'),
    ("Wingdings", 0x2C, '📪'), ("Wingdings", 0x31, '📁'),
    ("Wingdings", 0x33, '📄'), ("Wingdings", 0x36, '⌛'),
    ("Wingdings", 0x37, '⌨'),  ("Wingdings", 0x3A, '🖥'),
    ("Wingdings", 0x3E, '✂'),  ("Wingdings", 0x41, '✌'),
    ("Wingdings", 0x43, '👍'), ("Wingdings", 0x44, '👎'),
    ("Wingdings", 0x45, '☜'),  ("Wingdings", 0x46, '☞'),
    ("Wingdings", 0x47, '☝'),  ("Wingdings", 0x48, '☟'),
    ("Wingdings", 0x4A, '☺'),  ("Wingdings", 0x4B, '😐'),
    ("Wingdings", 0x4C, '☹'),  ("Wingdings", 0x52, '➢'),
    ("Wingdings", 0x55, '✈'),  ("Wingdings", 0x58, '✗'),
    ("Wingdings", 0x6C, '●'),  ("Wingdings", 0x6E, '■'),
    ("Wingdings", 0x6F, '□'),  ("Wingdings", 0x75, '◆'),
    ("Wingdings", 0x77, '◗'),  ("Wingdings", 0xDF, '←'),
    ("Wingdings", 0xE0, '→'),  ("Wingdings", 0xE1, '↑'),
    ("Wingdings", 0xE2, '↓'),  ("Wingdings", 0xFC, '✓'),
    ("Wingdings", 0xFB, '✗'),
];

static TABLE: LazyLock<HashMap<&'static str, HashMap<u32, char>>> = LazyLock::new(|| {
    let mut table: HashMap<&'static str, HashMap<u32, char>> = HashMap::new();
    for &(font, code_point, character) in DINGBATS {
        table.entry(font).or_default().insert(code_point, character);
    }
    table
});

/// Looks up the Unicode character for a (font, codepoint) pair.
pub(crate) fn find(font: &str, code_point: u32) -> Option<char> {
    TABLE.get(font)?.get(&code_point).copied()
}
