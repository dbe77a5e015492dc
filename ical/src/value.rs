// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value types of iCalendar property values.
//!
//! This module handles the parsing, validation and formatting of iCalendar
//! value types as defined in RFC 5545 Section 3.3. Every value type parses
//! with [`FromStr`](std::str::FromStr), formats its wire representation with
//! [`Display`](std::fmt::Display), and checks its own invariants with a
//! `validate` method. Parameter handling (TZID, VALUE, ENCODING) lives one
//! layer up, in [`crate::property`].

mod datetime;
mod duration;
mod miscellaneous;
mod numeric;
mod period;
mod rrule;
mod text;

pub use datetime::{Date, DateOrDateTime, DateTime, Time, UtcOffset, Zone};
pub use duration::Duration;
pub use miscellaneous::{Binary, Uri, parse_boolean};
pub use numeric::{parse_float, parse_integer};
pub use period::{Period, PeriodEnd};
pub use rrule::{Frequency, RecurrenceRule, WeekDay, WeekDayNum};
pub use text::{Text, escape_text, unescape_text};

pub(crate) use datetime::date_time;
pub(crate) use duration::duration;
pub(crate) use text::{join_text_list, split_text_list, split_unescaped};

use chumsky::prelude::*;

/// Parser extra shared by every value grammar.
pub(crate) type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Errors produced while parsing or validating a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The text does not match the value grammar.
    #[error("invalid {kind} {value:?}: {reason}")]
    Syntax {
        /// Value type name, e.g. "DATE-TIME"
        kind: &'static str,
        /// Offending text
        value: String,
        /// What the grammar expected
        reason: String,
    },

    /// The value is well-formed but violates a constraint.
    #[error("invalid {kind}: {reason}")]
    Invalid {
        /// Value type name, e.g. "UTC-OFFSET"
        kind: &'static str,
        /// The violated constraint
        reason: String,
    },

    /// The VALUE parameter names a type this property does not take.
    #[error("unsupported value type {found} (expected one of {expected:?})")]
    UnsupportedType {
        /// Type named by the VALUE parameter
        found: String,
        /// Types accepted by the property
        expected: &'static [&'static str],
    },

    /// Inline binary data without `ENCODING=BASE64`.
    #[error("binary value requires ENCODING=BASE64")]
    MissingEncoding,

    /// A keyword outside a closed enumeration.
    #[error("invalid {kind} keyword {value:?}")]
    UnknownKeyword {
        /// Value type or property name
        kind: &'static str,
        /// Offending keyword
        value: String,
    },
}

impl ValueError {
    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            reason: reason.into(),
        }
    }
}

/// Run a value grammar over the whole of `raw`.
pub(crate) fn parse_full<'src, T>(
    parser: impl Parser<'src, &'src str, T, Extra<'src>>,
    kind: &'static str,
    raw: &'src str,
) -> Result<T, ValueError> {
    parser
        .parse(raw)
        .into_result()
        .map_err(|errs| ValueError::Syntax {
            kind,
            value: raw.to_string(),
            reason: errs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })
}

/// Exactly `count` ASCII digits, parsed as a number.
pub(crate) fn fixed_digits<'src, T>(count: usize) -> impl Parser<'src, &'src str, T, Extra<'src>> + Clone
where
    T: lexical::FromLexical,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .exactly(count)
        .to_slice()
        .try_map_with(|s: &str, e| {
            lexical::parse::<T, _>(s).map_err(|err| Rich::custom(e.span(), err))
        })
}

/// One or more ASCII digits, parsed as a number.
pub(crate) fn digits<'src, T>() -> impl Parser<'src, &'src str, T, Extra<'src>> + Clone
where
    T: lexical::FromLexical,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map_with(|s: &str, e| {
            lexical::parse::<T, _>(s).map_err(|err| Rich::custom(e.span(), err))
        })
}
