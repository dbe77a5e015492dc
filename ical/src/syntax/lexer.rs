// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for iCalendar content lines as defined in RFC 5545.
//!
//! The lexer pulls one logical (already unfolded) line at a time from the
//! source, splits it into character-class atoms with [`logos`], and runs an
//! explicit state machine over those atoms:
//!
//! ```text
//! Name ──;──▶ ParamName ──=──▶ ParamValue ──,──▶ ParamValue
//!   │                              │  └────;──▶ ParamName
//!   └──:──▶ Value ◀──────:─────────┘
//! ```
//!
//! Names and parameter names are normalized to uppercase. The first error is
//! sticky: every later call returns it again.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::Arc;

use logos::Logos;

use crate::syntax::unfold::Unfolder;

/// Character-class atoms of a logical line.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
enum Atom<'a> {
    /// Double Quote ("), decimal codepoint 22
    #[token(r#"""#)]
    DQuote,

    /// Comma (,), decimal codepoint 44
    #[token(",")]
    Comma,

    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// ASCII symbols and whitespace other than the delimiters above
    #[regex(r#"[\t !#$%&'()*+./<>?@\[\\\]\^`\{|\}~]+"#)]
    Symbol,

    /// Carriage Return (\r) followed by Line Feed (\n)
    #[token("\r\n")]
    Newline,

    /// ASCII word characters: 0-9, A-Z, a-z, underscore and hyphen
    #[regex("[0-9A-Za-z_-]+")]
    Word(&'a str),

    /// NON-US-ASCII  = UTF8-2 / UTF8-3 / UTF8-4
    #[regex(r#"[^\x00-\x7F]+"#)]
    UnicodeText,
}

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Property name, or `BEGIN`/`END`
    Name,
    /// Parameter name
    ParamName,
    /// One parameter value
    ParamValue {
        /// Whether the value was enclosed in double quotes
        quoted: bool,
    },
    /// Property value, up to the end of the line
    Value,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::ParamName => write!(f, "parameter name"),
            Self::ParamValue { quoted: true } => write!(f, "quoted parameter value"),
            Self::ParamValue { quoted: false } => write!(f, "parameter value"),
            Self::Value => write!(f, "value"),
        }
    }
}

/// A token emitted by the [`Lexer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the text is
    pub kind: TokenKind,
    /// Token text, quotes stripped, names uppercased
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Lexical errors.
///
/// Errors are `Clone` because the lexer keeps returning the first one it
/// encountered.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum LexError {
    /// A character not permitted in the current position.
    #[error("line {line}, column {column}: unexpected character {found:?}")]
    InvalidCharacter {
        /// Logical line number, starting at 1
        line: usize,
        /// Character column, starting at 1
        column: usize,
        /// The offending character
        found: char,
    },

    /// A quoted parameter value without its closing quote.
    #[error("line {line}: unterminated quoted parameter value")]
    UnterminatedQuote {
        /// Logical line number, starting at 1
        line: usize,
    },

    /// The line ended before the `:` introducing the value.
    #[error("line {line}: content line ended before its value")]
    MissingValue {
        /// Logical line number, starting at 1
        line: usize,
    },

    /// A line with no content at all.
    #[error("line {line}: empty content line")]
    EmptyLine {
        /// Logical line number, starting at 1
        line: usize,
    },

    /// The line is not valid UTF-8.
    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 {
        /// Logical line number, starting at 1
        line: usize,
    },

    /// The input ended in the middle of a token.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The underlying reader failed.
    #[error(transparent)]
    Io(Arc<io::Error>),
}

impl From<io::Error> for LexError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Name,
    ParamName,
    ParamValueStart,
    ParamValueBare,
    ParamValueQuoted,
    ParamValueEnd,
    Value,
    Finished,
}

/// Pull-based lexer over an unfolded byte stream.
#[derive(Debug)]
pub struct Lexer<R> {
    reader: BufReader<Unfolder<R>>,
    buf: Vec<u8>,
    pending: VecDeque<Token>,
    line: usize,
    error: Option<LexError>,
    done: bool,
}

impl<R: Read> Lexer<R> {
    /// Create a lexer reading from `reader`; folding is removed on the fly.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(Unfolder::new(reader)),
            buf: Vec::new(),
            pending: VecDeque::new(),
            line: 0,
            error: None,
            done: false,
        }
    }

    /// Number of logical lines read so far.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next token, `Ok(None)` once the input is cleanly exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or I/O error; once an error has been
    /// returned, every later call returns the same error.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        if self.pending.is_empty() && !self.done {
            if let Err(err) = self.read_line() {
                self.error = Some(err.clone());
                return Err(err);
            }
        }

        Ok(self.pending.pop_front())
    }

    fn read_line(&mut self) -> Result<(), LexError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            self.done = true;
            return Ok(());
        }

        self.line += 1;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| LexError::InvalidUtf8 { line: self.line })?;
        let tokens = lex_line(text, self.line)?;
        self.pending.extend(tokens);
        Ok(())
    }
}

/// Split one logical line into tokens.
fn lex_line(text: &str, line: usize) -> Result<Vec<Token>, LexError> {
    let mut state = State::Name;
    let mut tokens = Vec::with_capacity(4);
    let mut current = String::new();

    let invalid = |start: usize, found: &str| LexError::InvalidCharacter {
        line,
        column: text.get(..start).map_or(0, |s| s.chars().count()) + 1,
        found: found.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
    };

    let mut atoms = Atom::lexer(text);
    while let Some(atom) = atoms.next() {
        let slice = atoms.slice();
        let start = atoms.span().start;
        let Ok(atom) = atom else {
            return Err(invalid(start, slice));
        };

        state = match (state, atom) {
            (State::Name, Atom::Word(w)) => {
                current.push_str(w);
                State::Name
            }
            (State::Name, Atom::Newline) if tokens.is_empty() && current.is_empty() => {
                return Err(LexError::EmptyLine { line });
            }
            (State::Name, Atom::Semicolon | Atom::Colon) if !current.is_empty() => {
                tokens.push(Token::new(TokenKind::Name, current.to_ascii_uppercase()));
                current.clear();
                match atom {
                    Atom::Colon => State::Value,
                    _ => State::ParamName,
                }
            }

            (State::ParamName, Atom::Word(w)) => {
                current.push_str(w);
                State::ParamName
            }
            (State::ParamName, Atom::Equal) if !current.is_empty() => {
                tokens.push(Token::new(
                    TokenKind::ParamName,
                    current.to_ascii_uppercase(),
                ));
                current.clear();
                State::ParamValueStart
            }

            (State::ParamValueStart, Atom::DQuote) => State::ParamValueQuoted,
            (
                State::ParamValueStart | State::ParamValueBare,
                Atom::Word(_) | Atom::Symbol | Atom::UnicodeText | Atom::Equal,
            ) => {
                current.push_str(slice);
                State::ParamValueBare
            }
            (
                State::ParamValueStart | State::ParamValueBare,
                Atom::Comma | Atom::Semicolon | Atom::Colon,
            ) => {
                let text = std::mem::take(&mut current);
                tokens.push(Token::new(TokenKind::ParamValue { quoted: false }, text));
                after_param_value(atom)
            }

            (State::ParamValueQuoted, Atom::DQuote) => {
                let text = std::mem::take(&mut current);
                tokens.push(Token::new(TokenKind::ParamValue { quoted: true }, text));
                State::ParamValueEnd
            }
            (State::ParamValueQuoted, Atom::Newline) => {
                return Err(LexError::UnterminatedQuote { line });
            }
            (State::ParamValueQuoted, _) => {
                current.push_str(slice);
                State::ParamValueQuoted
            }

            (State::ParamValueEnd, Atom::Comma | Atom::Semicolon | Atom::Colon) => {
                after_param_value(atom)
            }

            (State::Value, Atom::Newline) => {
                let text = std::mem::take(&mut current);
                tokens.push(Token::new(TokenKind::Value, text));
                State::Finished
            }
            (State::Value, _) => {
                current.push_str(slice);
                State::Value
            }

            (_, Atom::Newline) => return Err(LexError::MissingValue { line }),
            _ => return Err(invalid(start, slice)),
        };
    }

    match state {
        State::Finished => Ok(tokens),
        // end of input terminates the value as well
        State::Value => {
            tokens.push(Token::new(TokenKind::Value, current));
            Ok(tokens)
        }
        State::ParamValueQuoted => Err(LexError::UnterminatedQuote { line }),
        _ => Err(LexError::UnexpectedEof),
    }
}

const fn after_param_value(delimiter: Atom<'_>) -> State {
    match delimiter {
        Atom::Comma => State::ParamValueStart,
        Atom::Semicolon => State::ParamName,
        _ => State::Value,
    }
}
