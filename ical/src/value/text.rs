// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text value type as defined in RFC 5545 Section 3.3.11.
//!
//! ```txt
//! text       = *(TSAFE-CHAR / ":" / DQUOTE / ESCAPED-CHAR)
//! ESCAPED-CHAR = ("\\" / "\;" / "\," / "\N" / "\n")
//! ```

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::value::ValueError;

/// Text value, stored unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(String);

impl Text {
    /// Create a text value from unescaped content.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The unescaped content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the unescaped content.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Text may carry any character except controls other than LF and HTAB,
    /// which have no escaped form.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first control character found.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self.0.chars().find(|c| c.is_control() && !matches!(c, '\n' | '\t')) {
            Some(c) => Err(ValueError::invalid(
                "TEXT",
                format!("control character {c:?} cannot be encoded"),
            )),
            None => Ok(()),
        }
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for Text {
    type Err = Infallible;

    /// Unescape wire text; unknown escapes are lenient.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(unescape_text(s)))
    }
}

impl fmt::Display for Text {
    /// Escaped wire form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_text(&self.0))
    }
}

/// Escape text for a TEXT property value.
///
/// Escapes backslash, semicolon, comma and newline.
#[must_use]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', ';', ',', '\n']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape a TEXT property value.
///
/// `\\`, `\;`, `\,`, `\n` and `\N` are decoded; any other escaped character
/// is kept without its backslash, and a trailing lone backslash is kept.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(escaped) => result.push(escaped),
            None => result.push('\\'),
        }
    }
    result
}

/// Split on `sep` where it is not escaped by a backslash.
pub(crate) fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(s.get(start..i).unwrap_or_default());
            start = i + c.len_utf8();
        }
    }
    parts.push(s.get(start..).unwrap_or_default());
    parts
}

/// Parse a comma-separated list of texts (e.g. CATEGORIES).
pub(crate) fn split_text_list(s: &str) -> Vec<Text> {
    split_unescaped(s, ',')
        .into_iter()
        .map(|part| Text(unescape_text(part)))
        .collect()
}

/// Format a comma-separated list of texts.
pub(crate) fn join_text_list(texts: &[Text]) -> String {
    texts
        .iter()
        .map(|text| escape_text(text.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escape_round_trip() {
        let samples = [
            "",
            "plain",
            "back\\slash",
            "semi;colon, comma",
            "line1\nline2\n",
            "\\n is not a newline",
            "mixed \\;,\n 漢字 🎉",
        ];
        for s in samples {
            assert_eq!(unescape_text(&escape_text(s)), s, "round trip of {s:?}");
        }
    }

    #[test]
    fn text_escapes() {
        assert_eq!(escape_text("hello, world"), "hello\\, world");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("semi;colon"), "semi\\;colon");
        assert!(matches!(escape_text("as-is"), Cow::Borrowed(_)));
    }

    #[test]
    fn text_unescape_is_lenient() {
        #[rustfmt::skip]
        let cases = [
            ("a\\nb", "a\nb"),
            ("a\\Nb", "a\nb"),
            ("a\\,b\\;c\\\\d", "a,b;c\\d"),
            ("\\x\\:", "x:"),    // unknown escapes pass the character through
            ("trailing\\", "trailing\\"),
            ("colon: and \"quotes\"", "colon: and \"quotes\""),
        ];
        for (src, expected) in cases {
            assert_eq!(unescape_text(src), expected, "unescaping {src:?}");
        }
    }

    #[test]
    fn text_list_splits_on_unescaped_commas() {
        let list = split_text_list("APPOINTMENT,EDUCATION\\, TRAINING,\\\\");
        assert_eq!(list, vec![
            Text::from("APPOINTMENT"),
            Text::from("EDUCATION, TRAINING"),
            Text::from("\\"),
        ]);
        assert_eq!(
            join_text_list(&list),
            "APPOINTMENT,EDUCATION\\, TRAINING,\\\\"
        );
    }

    #[test]
    fn split_unescaped_keeps_escapes() {
        assert_eq!(split_unescaped("a\\;b;c", ';'), vec!["a\\;b", "c"]);
        assert_eq!(split_unescaped("a\\\\;b", ';'), vec!["a\\\\", "b"]);
        assert_eq!(split_unescaped("", ';'), vec![""]);
    }

    #[test]
    fn text_validate_rejects_controls() {
        assert!(Text::from("tab\tand\nnewline").validate().is_ok());
        assert!(Text::from("carriage\rreturn").validate().is_err());
        assert!(Text::from("nul\0").validate().is_err());
    }
}
