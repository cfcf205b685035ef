//! HTML escaping for rendered markup

use std::borrow::Cow;

/// Encoding assumed when a view does not report one.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// HTML escaper bound to the character encoding of the owning view.
///
/// Rust strings are always UTF-8, so the encoding only labels the output;
/// escaping itself is identical for every encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEscaper {
    encoding: String,
}

impl HtmlEscaper {
    /// Create an escaper for the given encoding
    pub fn new(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
        }
    }

    /// Encoding this escaper was created for
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Escape text for an HTML element body or attribute value.
    ///
    /// Escapes `&`, `<`, `>`, `"` and `'` (as `&#039;`). Borrows the input
    /// when nothing needs escaping.
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_html(text)
    }
}

impl Default for HtmlEscaper {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODING)
    }
}

/// Escape HTML special characters, quotes included
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
