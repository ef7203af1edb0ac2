//! Generic helpers shared by every compiler stage: contract checks, emptiness
//! predicates, line indentation, and deep copies.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::ContractViolation;

// ══════════════════════════════════════════════════════════════════════════════
// Contracts
// ══════════════════════════════════════════════════════════════════════════════

/// Return a [`ContractViolation`] carrying `message` when `cond` is false.
///
/// Guards internal invariants only; user input goes through diagnostics.
pub fn assert_invariant(cond: bool, message: impl Into<String>) -> crate::Result<()> {
    if cond {
        Ok(())
    } else {
        fail(message)
    }
}

/// Abort the current compilation unit with a [`ContractViolation`].
pub fn fail<T>(message: impl Into<String>) -> crate::Result<T> {
    let err = ContractViolation::new(message);
    log::debug!("{err}");
    Err(err)
}

// ══════════════════════════════════════════════════════════════════════════════
// Presence & emptiness
// ══════════════════════════════════════════════════════════════════════════════

/// True for a missing value and for an explicit `null`.
pub fn is_absent(x: Option<&Value>) -> bool {
    matches!(x, None | Some(Value::Null))
}

pub fn is_present(x: Option<&Value>) -> bool {
    !is_absent(x)
}

/// "Was anything actually provided?"
///
/// Absent values, whitespace-only text, empty sequences and keyless maps are
/// empty. Everything else, including `0` and `false`, is not.
pub trait EmptyValue {
    fn is_empty_value(&self) -> bool;
}

impl EmptyValue for str {
    fn is_empty_value(&self) -> bool {
        self.chars().all(is_blank)
    }
}

impl EmptyValue for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<T> EmptyValue for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> EmptyValue for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> EmptyValue for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: EmptyValue> EmptyValue for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            None => true,
            Some(x) => x.is_empty_value(),
        }
    }
}

impl EmptyValue for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty_value(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

pub fn is_empty_value<T: EmptyValue + ?Sized>(x: &T) -> bool {
    x.is_empty_value()
}

pub fn is_non_empty_value<T: EmptyValue + ?Sized>(x: &T) -> bool {
    !x.is_empty_value()
}

/// Whitespace as understood by the generated target language, which also
/// counts the byte-order mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

// ══════════════════════════════════════════════════════════════════════════════
// Indentation
// ══════════════════════════════════════════════════════════════════════════════

/// Either a list of lines or one multi-line text. Indentation helpers keep
/// the shape they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    Text(String),
    Lines(Vec<String>),
}

impl TextBlock {
    /// The block's lines. Text is split on `\n`, so `""` is one empty line.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => text.split('\n').collect(),
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// Join into a single text with `\n` separators.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.join("\n"),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Text(text) => text.split('\n').map(str::to_string).collect(),
            Self::Lines(lines) => lines,
        }
    }

    /// Rebuild a block of the same shape as `self` from new lines.
    fn reshape(&self, lines: Vec<String>) -> Self {
        match self {
            Self::Text(_) => Self::Text(lines.join("\n")),
            Self::Lines(_) => Self::Lines(lines),
        }
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TextBlock {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for TextBlock {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<Vec<&str>> for TextBlock {
    fn from(lines: Vec<&str>) -> Self {
        Self::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Prefix every line with `unit` repeated `level` times.
pub fn indent_lines(block: impl Into<TextBlock>, level: usize, unit: &str) -> TextBlock {
    let block = block.into();
    let prefix = unit.repeat(level);
    let lines = block
        .lines()
        .into_iter()
        .map(|line| format!("{prefix}{line}"))
        .collect();
    block.reshape(lines)
}

/// Strip the first line's leading whitespace run from every line that starts
/// with it. Lines that don't are left untouched.
pub fn dedent_lines(block: impl Into<TextBlock>) -> TextBlock {
    let block = block.into();
    let lines = block.lines();
    let Some(first) = lines.first() else {
        return block;
    };

    let indent_len: usize = first
        .chars()
        .take_while(|&c| is_blank(c))
        .map(char::len_utf8)
        .sum();
    if indent_len == 0 {
        return block;
    }
    let indent = &first[..indent_len];

    let stripped = lines
        .iter()
        .map(|&line| line.strip_prefix(indent).unwrap_or(line).to_string())
        .collect();
    block.reshape(stripped)
}

// ══════════════════════════════════════════════════════════════════════════════
// Copies
// ══════════════════════════════════════════════════════════════════════════════

/// A fully independent structural copy of `x`.
///
/// Owned data in this crate never shares mutable substructure, so a deep
/// clone is exactly that.
pub fn deep_copy<T: Clone>(x: &T) -> T {
    x.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_invariant() {
        assert!(assert_invariant(true, "unused").is_ok());
        let err = assert_invariant(false, "not a string").unwrap_err();
        assert_eq!(err.message, "not a string");
    }

    #[test]
    fn test_fail_carries_message() {
        let result: crate::Result<u32> = fail("boom");
        assert_eq!(result.unwrap_err().to_string(), "contract violation: boom");
    }

    #[test]
    fn test_presence() {
        assert!(is_absent(None));
        assert!(is_absent(Some(&Value::Null)));
        assert!(!is_absent(Some(&json!(0))));
        assert!(is_present(Some(&json!(""))));
        assert!(!is_present(Some(&Value::Null)));
    }

    #[test]
    fn test_is_empty_value_true_cases() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!("   ")));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));
        assert!(is_empty_value(&None::<String>));
        assert!(is_empty_value(" \t\n"));
        assert!(is_empty_value(&Vec::<u8>::new()));
        assert!(is_empty_value(&HashMap::<String, u8>::new()));
    }

    #[test]
    fn test_is_empty_value_false_cases() {
        assert!(!is_empty_value(&json!("x")));
        assert!(!is_empty_value(&json!([0])));
        assert!(!is_empty_value(&json!({"k": 1})));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&Some(" x ".to_string())));
        assert!(is_non_empty_value(&vec![0]));
    }

    #[test]
    fn test_indent_text_keeps_shape() {
        let out = indent_lines("a\nb", 2, "  ");
        assert_eq!(out, TextBlock::Text("    a\n    b".to_string()));
    }

    #[test]
    fn test_indent_lines_keeps_shape() {
        let out = indent_lines(vec!["a", "b"], 1, "\t");
        assert_eq!(out, TextBlock::Lines(vec!["\ta".to_string(), "\tb".to_string()]));
    }

    #[test]
    fn test_indent_level_zero_is_identity() {
        assert_eq!(indent_lines("x\ny", 0, "\t").into_text(), "x\ny");
    }

    #[test]
    fn test_dedent_strips_first_line_indent() {
        let out = dedent_lines("    a\n      b\n  c\n    d");
        assert_eq!(out.into_text(), "a\n  b\n  c\nd");
    }

    #[test]
    fn test_dedent_noop_without_leading_whitespace() {
        let out = dedent_lines(vec!["a", "  b"]);
        assert_eq!(out, TextBlock::Lines(vec!["a".to_string(), "  b".to_string()]));
    }

    #[test]
    fn test_dedent_empty_lines() {
        let out = dedent_lines(Vec::<String>::new());
        assert_eq!(out, TextBlock::Lines(vec![]));
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = json!({"rules": [{"name": "start"}]});
        let mut copy = deep_copy(&original);
        copy["rules"][0]["name"] = json!("other");
        assert_eq!(original["rules"][0]["name"], "start");
        assert_ne!(original, copy);
    }
}
