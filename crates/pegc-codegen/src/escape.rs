//! Literal escaping for generated source.
//!
//! Two tables exist because quoted strings and character classes have
//! different sets of significant characters. Each escaper is one pass over
//! the input:
//!
//! 1. delimiters of the literal kind get a backslash (backslash itself first),
//! 2. named control escapes (`\0 \b \t \n \v \f \r`),
//! 3. every other character outside printable ASCII is escaped numerically per
//!    UTF-16 code unit:
//!
//! ```text
//! 0x0000–0x000F          \x0H
//! 0x0010–0x001F, 7F–FF   \xHH
//! 0x0100–0x0FFF          \u0HHH
//! 0x1000–0xFFFF          \uHHHH
//! ```
//!
//! The bucket boundaries are part of the output format and must not change:
//! generated parsers are compared byte-for-byte.

use pegc_types::util::assert_invariant;

/// Default closing quote of generated string literals.
pub const STRING_QUOTE: char = '"';

/// Characters that must be backslash-escaped inside a character class.
/// `/` closes the surrounding regular-expression literal.
const CLASS_DELIMITERS: [char; 5] = ['\\', '/', ']', '^', '-'];

const CONTROL_ESCAPES: [(char, &str); 7] = [
    ('\0', "\\0"),
    ('\u{8}', "\\b"),
    ('\t', "\\t"),
    ('\n', "\\n"),
    ('\u{B}', "\\v"),
    ('\u{C}', "\\f"),
    ('\r', "\\r"),
];

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Escape `s` for placement between `"` delimiters of a string literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, |c| c == '\\' || c == STRING_QUOTE);
    out
}

/// Escape `s` for a string literal closed by `quote`.
///
/// `quote` must be printable ASCII punctuation; anything else could not be
/// escaped with a single backslash.
pub fn escape_string_literal_with(s: &str, quote: char) -> pegc_types::Result<String> {
    assert_invariant(
        quote.is_ascii_punctuation() && quote != '\\',
        format!("invalid string literal quote {quote:?}"),
    )?;
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, |c| c == '\\' || c == quote);
    Ok(out)
}

/// Escape `s` for placement inside the brackets of a character class.
///
/// Dash and caret are escaped regardless of position.
pub fn escape_class_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, |c| CLASS_DELIMITERS.contains(&c));
    out
}

/// Uppercase hex digits of a single code unit, without padding.
pub fn hex(unit: u16) -> String {
    format!("{unit:X}")
}

// ══════════════════════════════════════════════════════════════════════════════
// Internals
// ══════════════════════════════════════════════════════════════════════════════

fn escape_into(out: &mut String, s: &str, is_delimiter: impl Fn(char) -> bool) {
    let mut units = [0u16; 2];
    for c in s.chars() {
        if is_delimiter(c) {
            out.push('\\');
            out.push(c);
        } else if let Some(&(_, named)) = CONTROL_ESCAPES.iter().find(|(ch, _)| *ch == c) {
            out.push_str(named);
        } else if is_printable_ascii(c) {
            out.push(c);
        } else {
            for &unit in c.encode_utf16(&mut units).iter() {
                push_numeric_escape(out, unit);
            }
        }
    }
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn push_numeric_escape(out: &mut String, unit: u16) {
    let prefix = match unit {
        0x00..=0x0F => "\\x0",
        0x10..=0xFF => "\\x",
        0x100..=0xFFF => "\\u0",
        _ => "\\u",
    };
    out.push_str(prefix);
    out.push_str(&hex(unit));
}
