//! Whitespace made visible, for diagnostics and debug dumps of generated code.

/// Which whitespace characters get a visible stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibleMode {
    /// Carriage return, line feed, tab and space.
    #[default]
    All,
    /// Like [`VisibleMode::All`] but line feeds are kept, so blocks stay
    /// multi-line.
    NoNewline,
    /// No replacement.
    Raw,
}

impl VisibleMode {
    fn replacement(self, c: char) -> Option<char> {
        match (self, c) {
            (Self::Raw, _) => None,
            (_, '\r') => Some('◄'),
            (Self::All, '\n') => Some('▼'),
            (_, '\t') => Some('→'),
            (_, ' ') => Some('˳'),
            _ => None,
        }
    }
}

/// Render `s` with whitespace replaced per `mode`.
///
/// With `offset = Some(k)`, every character is preceded by a space except the
/// one at char index `k`, which is preceded by `:`. An offset equal to the
/// char count puts the `:` at the end. This marks a cursor position, e.g.
/// where a match failed.
pub fn escape_visible(s: &str, mode: VisibleMode, offset: Option<usize>) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut count = 0;
    for (i, c) in s.chars().enumerate() {
        if let Some(k) = offset {
            out.push(if i == k { ':' } else { ' ' });
        }
        out.push(mode.replacement(c).unwrap_or(c));
        count = i + 1;
    }
    if offset == Some(count) {
        out.push(':');
    }
    out
}

/// Make spaces, tabs and carriage returns in a code block visible, keeping
/// its line structure.
pub fn escape_block(block: &str) -> String {
    escape_visible(block, VisibleMode::NoNewline, None)
}
