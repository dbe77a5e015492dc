// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping of lexical tokens into content lines.
//!
//! Per RFC 5545, a content line has the format:
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! param       = param-name "=" param-value *("," param-value)
//! ```

use std::io::{self, Read, Write};

use crate::parameter::{escape_param_value, param_value_needs_quotes};
use crate::syntax::lexer::{LexError, Lexer, Token, TokenKind};

/// One logical content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, uppercased (e.g., "DTSTART", "SUMMARY")
    pub name: String,

    /// Property parameters, in source order
    pub params: Vec<RawParameter>,

    /// Raw property value, escapes untouched
    pub value: String,
}

impl ContentLine {
    /// Create a content line without parameters.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Attach parameters.
    #[must_use]
    pub fn with_params(mut self, params: Vec<RawParameter>) -> Self {
        self.params = params;
        self
    }

    /// Write the line, terminated by CRLF.
    ///
    /// Parameter values are caret-escaped and quoted when they contain a
    /// delimiter. Folding is the job of the writer passed in.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(self.name.as_bytes())?;
        for param in &self.params {
            write!(w, ";{}=", param.name)?;
            for (i, v) in param.values.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                let escaped = escape_param_value(&v.value);
                if v.quoted || param_value_needs_quotes(&escaped) {
                    write!(w, "\"{escaped}\"")?;
                } else {
                    w.write_all(escaped.as_bytes())?;
                }
            }
        }
        w.write_all(b":")?;
        w.write_all(self.value.as_bytes())?;
        w.write_all(b"\r\n")
    }
}

/// A parameter as it appeared on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Parameter name, uppercased (e.g., "TZID", "VALUE")
    pub name: String,

    /// Parameter values (comma-separated), never empty once phrased
    pub values: Vec<RawParamValue>,
}

impl RawParameter {
    /// Create a parameter with a single unquoted value.
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![RawParamValue {
                value: value.into(),
                quoted: false,
            }],
        }
    }
}

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParamValue {
    /// The value, without surrounding quotes
    ///
    /// Lines read by the [`Phraser`] keep RFC 6868 caret escapes as-is;
    /// [`ContentLine::write_to`] escapes the value itself.
    pub value: String,

    /// Whether the value was quoted in the source
    pub quoted: bool,
}

/// Structural errors of a content line.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum PhraseError {
    /// Lexical error below the phraser.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A line that does not begin with a name.
    #[error("line {line}: expected a property name, found {found}")]
    ExpectedName {
        /// Logical line number
        line: usize,
        /// Kind of token found instead
        found: TokenKind,
    },

    /// A name in the middle of a line.
    #[error("line {line}: unexpected name {name}")]
    UnexpectedName {
        /// Logical line number
        line: usize,
        /// The name found
        name: String,
    },

    /// A parameter value not preceded by a parameter name.
    #[error("line {line}: parameter value without a parameter name")]
    OrphanValue {
        /// Logical line number
        line: usize,
    },

    /// A parameter name with no value.
    #[error("line {line}: parameter {name} has no value")]
    EmptyParameter {
        /// Logical line number
        line: usize,
        /// Parameter name
        name: String,
    },
}

/// Groups the lexer's tokens into [`ContentLine`]s.
#[derive(Debug)]
pub struct Phraser<R> {
    lexer: Lexer<R>,
}

impl<R: Read> Phraser<R> {
    /// Create a phraser over an unfolded, lexed byte stream.
    pub fn new(reader: R) -> Self {
        Self {
            lexer: Lexer::new(reader),
        }
    }

    /// Logical line number of the most recently read line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Next content line, `Ok(None)` at a clean end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the token sequence is not
    /// `Name (ParamName ParamValue+)* Value`, or on lexical errors.
    pub fn next_line(&mut self) -> Result<Option<ContentLine>, PhraseError> {
        let Some(first) = self.lexer.next_token()? else {
            return Ok(None);
        };

        let line = self.lexer.line();
        let name = match first {
            Token {
                kind: TokenKind::Name,
                text,
            } => text,
            Token { kind, .. } => return Err(PhraseError::ExpectedName { line, found: kind }),
        };

        let mut params: Vec<RawParameter> = Vec::new();
        loop {
            let token = self.lexer.next_token()?.ok_or(LexError::UnexpectedEof)?;
            match token.kind {
                TokenKind::ParamName => {
                    check_has_values(params.last(), line)?;
                    params.push(RawParameter {
                        name: token.text,
                        values: Vec::with_capacity(1),
                    });
                }
                TokenKind::ParamValue { quoted } => match params.last_mut() {
                    Some(param) => param.values.push(RawParamValue {
                        value: token.text,
                        quoted,
                    }),
                    None => return Err(PhraseError::OrphanValue { line }),
                },
                TokenKind::Value => {
                    check_has_values(params.last(), line)?;
                    return Ok(Some(ContentLine {
                        name,
                        params,
                        value: token.text,
                    }));
                }
                TokenKind::Name => {
                    return Err(PhraseError::UnexpectedName {
                        line,
                        name: token.text,
                    });
                }
            }
        }
    }
}

fn check_has_values(param: Option<&RawParameter>, line: usize) -> Result<(), PhraseError> {
    match param {
        Some(p) if p.values.is_empty() => Err(PhraseError::EmptyParameter {
            line,
            name: p.name.clone(),
        }),
        _ => Ok(()),
    }
}
