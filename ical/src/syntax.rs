// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax layer of iCalendar: unfolding, lexing and content lines.
//!
//! ```text
//! bytes → Unfolder → Lexer → Phraser → ContentLine
//! ```

mod lexer;
mod phraser;
mod unfold;

pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use phraser::{ContentLine, PhraseError, Phraser, RawParamValue, RawParameter};
pub use unfold::Unfolder;
