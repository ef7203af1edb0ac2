//! Base64 encoding for byte buffers embedded in generated source.
//!
//! Standard alphabet and padding per RFC 4648 §4, so any standard decoder
//! reverses it.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode `bytes` as padded base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    let mut chunks = bytes.chunks_exact(3);

    for chunk in &mut chunks {
        let group = u32::from(chunk[0]) << 16 | u32::from(chunk[1]) << 8 | u32::from(chunk[2]);
        push_sextets(&mut out, group, 4);
    }

    match *chunks.remainder() {
        [a] => {
            push_sextets(&mut out, u32::from(a) << 16, 2);
            out.push_str("==");
        }
        [a, b] => {
            push_sextets(&mut out, u32::from(a) << 16 | u32::from(b) << 8, 3);
            out.push('=');
        }
        _ => {}
    }

    out
}

/// Push the top `count` 6-bit groups of a 24-bit `group`.
fn push_sextets(out: &mut String, group: u32, count: u32) {
    for i in 0..count {
        let index = (group >> (18 - 6 * i)) & 0x3F;
        out.push(ALPHABET[index as usize] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode_bytes(&[]), "");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(encode_bytes(b"Man"), "TWFu");
    }

    #[test]
    fn test_padding() {
        assert_eq!(encode_bytes(b"M"), "TQ==");
        assert_eq!(encode_bytes(b"Ma"), "TWE=");
        assert_eq!(encode_bytes(&[0xFF]), "/w==");
        assert_eq!(encode_bytes(&[0xFF, 0xFF]), "//8=");
    }

    #[test]
    fn test_rfc4648_vectors() {
        let vectors = [
            ("f", "Zg=="),
            ("fo", "Zm8="),
            ("foo", "Zm9v"),
            ("foob", "Zm9vYg=="),
            ("fooba", "Zm9vYmE="),
            ("foobar", "Zm9vYmFy"),
        ];
        for (input, expected) in vectors {
            assert_eq!(encode_bytes(input.as_bytes()), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_output_length() {
        for n in 0..20 {
            let bytes = vec![0xA5u8; n];
            assert_eq!(encode_bytes(&bytes).len(), n.div_ceil(3) * 4);
        }
    }
}
