// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) line folding.
//!
//! Components write plain content lines ending in CRLF; the [`Formatter`]
//! sits between them and the sink and folds every line longer than the
//! configured limit.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use calwire_ical::formatter::{FormatOptions, Formatter};
//!
//! let mut buffer = Vec::new();
//! let mut formatter = Formatter::new(&mut buffer, FormatOptions::default().with_folding(10));
//! formatter.write_all(b"SUMMARY:Lunch with Ada\r\n").unwrap();
//! assert_eq!(buffer, b"SUMMARY:Lu\r\n nch with \r\n Ada\r\n");
//! ```

use std::io::{self, Write};

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Fold lines longer than `octets`.
    #[must_use]
    pub const fn with_folding(mut self, octets: usize) -> Self {
        self.folding = Some(octets);
        self
    }

    /// Never fold lines.
    #[must_use]
    pub const fn without_folding(mut self) -> Self {
        self.folding = None;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn with_folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }
}

/// Folding writer wrapping any `Write` implementer.
///
/// Line length is counted in octets, excluding the CRLF. A multi-byte UTF-8
/// character that would cross the limit is moved whole onto the
/// continuation line.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Octets on the current physical line.
    line_len: usize,
    /// Continuation bytes still expected for the character being written.
    pending: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_len: 0,
            pending: 0,
        }
    }

    /// Get a mutable reference to the underlying writer.
    #[must_use]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            return self.writer.write(buf);
        };

        let mut out = Vec::with_capacity(buf.len() + buf.len() / max_len.max(1) * 3);
        for &byte in buf {
            match byte {
                b'\n' => self.line_len = 0,
                b'\r' => {}
                _ if self.pending > 0 => {
                    self.pending -= 1;
                    self.line_len += 1;
                }
                _ => {
                    let char_len = utf8_len(byte);
                    if self.line_len > 0 && self.line_len + char_len > max_len {
                        out.extend_from_slice(self.options.folding_style.as_bytes());
                        self.line_len = 1;
                    }
                    self.pending = char_len - 1;
                    self.line_len += 1;
                }
            }
            out.push(byte);
        }
        self.writer.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Length of the UTF-8 sequence introduced by `lead`.
///
/// UTF-8 encoding:
/// - 0xxxxxxx: 1 byte (ASCII)
/// - 110xxxxx: 2 bytes
/// - 1110xxxx: 3 bytes
/// - 11110xxx: 4 bytes
///
/// A stray continuation byte counts as a single octet.
const fn utf8_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
