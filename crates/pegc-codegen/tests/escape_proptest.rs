//! Property-based tests for literal escaping and base64 encoding.

use base64::Engine;
use pegc_codegen::{encode_bytes, escape_class_literal, escape_string_literal};
use proptest::prelude::*;

/// Characters of `escaped` that are not preceded by an escaping backslash.
fn unescaped_chars(escaped: &str) -> Vec<char> {
    let mut out = Vec::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn safe_ascii_is_unchanged(s in "[ !#-\\[\\]-~]{0,40}") {
        prop_assert_eq!(escape_string_literal(&s), s);
    }

    #[test]
    fn string_output_has_no_bare_quote_or_backslash(s in any::<String>()) {
        let escaped = escape_string_literal(&s);
        for c in unescaped_chars(&escaped) {
            prop_assert!(c != '"' && c != '\\', "bare {:?} in {:?}", c, escaped);
        }
    }

    #[test]
    fn class_output_has_no_bare_metacharacters(s in any::<String>()) {
        let escaped = escape_class_literal(&s);
        for c in unescaped_chars(&escaped) {
            prop_assert!(!matches!(c, '\\' | '/' | ']' | '^' | '-'), "bare {:?} in {:?}", c, escaped);
        }
    }

    #[test]
    fn escaped_output_is_printable_ascii(s in any::<String>()) {
        let escaped = escape_string_literal(&s);
        prop_assert!(escaped.chars().all(|c| (' '..='~').contains(&c)));
        let escaped = escape_class_literal(&s);
        prop_assert!(escaped.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn standard_decoder_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode_bytes(&bytes);
        let decoded = base64::engine::general_purpose::STANDARD.decode(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn encoding_matches_standard_encoder(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(
            encode_bytes(&bytes),
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        );
    }
}
