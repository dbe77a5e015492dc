// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integer and float values as defined in RFC 5545 Sections 3.3.7 and 3.3.8.

use chumsky::prelude::*;

use crate::keyword::{KW_FLOAT, KW_INTEGER};
use crate::value::{Extra, ValueError, parse_full};

/// Parse an INTEGER value.
///
/// # Errors
///
/// Returns an error if the text is not a signed decimal in `i32` range.
pub fn parse_integer(raw: &str) -> Result<i32, ValueError> {
    parse_full(integer(), KW_INTEGER, raw)
}

/// Parse a FLOAT value.
///
/// # Errors
///
/// Returns an error if the text does not follow the FLOAT grammar or does
/// not fit a finite `f64`.
pub fn parse_float(raw: &str) -> Result<f64, ValueError> {
    parse_full(float(), KW_FLOAT, raw)
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// integer    = (["+"] / "-") 1*DIGIT
/// ```
pub(crate) fn integer<'src>() -> impl Parser<'src, &'src str, i32, Extra<'src>> + Clone {
    one_of("+-")
        .or_not()
        .then(select! { c @ '0'..='9' => c }.repeated().at_least(1))
        .to_slice()
        .try_map_with(|s: &str, e| {
            lexical::parse::<i32, _>(s.strip_prefix('+').unwrap_or(s))
                .map_err(|err| Rich::custom(e.span(), err))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// float      = (["+"] / "-") 1*DIGIT ["." 1*DIGIT]
/// ```
pub(crate) fn float<'src>() -> impl Parser<'src, &'src str, f64, Extra<'src>> + Clone {
    let digit_run = select! { c @ '0'..='9' => c }.repeated().at_least(1);
    one_of("+-")
        .or_not()
        .then(digit_run.clone())
        .then(just('.').then(digit_run).or_not())
        .to_slice()
        .try_map_with(|s: &str, e| match lexical::parse::<f64, _>(s) {
            Ok(f) if f.is_finite() => Ok(f),
            Ok(_) => Err(Rich::custom(e.span(), "float out of range")),
            Err(err) => Err(Rich::custom(e.span(), err)),
        })
}
