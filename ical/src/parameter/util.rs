// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use crate::parameter::{ParameterError, ParameterKind};
use crate::syntax::{RawParamValue, RawParameter};

/// Escape a parameter value with RFC 6868 caret encoding.
///
/// `^` becomes `^^`, a newline becomes `^n` and `"` becomes `^'`.
#[must_use]
pub fn escape_param_value(s: &str) -> Cow<'_, str> {
    if !s.contains(['^', '\n', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Decode RFC 6868 caret encoding.
///
/// A caret followed by anything other than `n`, `^` or `'` is kept as-is.
#[must_use]
pub fn unescape_param_value(s: &str) -> Cow<'_, str> {
    if !s.contains('^') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '^' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('^') => result.push('^'),
            Some('\'') => result.push('"'),
            _ => {
                result.push('^');
                continue;
            }
        }
        chars.next();
    }
    Cow::Owned(result)
}

/// Whether an (escaped) parameter value must be written in double quotes.
#[must_use]
pub fn param_value_needs_quotes(s: &str) -> bool {
    s.contains([':', ';', ','])
}

/// Take the only value of a parameter, unescaped.
pub(crate) fn single(
    param: RawParameter,
    kind: ParameterKind,
) -> Result<RawParamValue, ParameterError> {
    let mut values = param.values;
    match (values.pop(), values.is_empty()) {
        (Some(v), true) => Ok(RawParamValue {
            value: unescape_param_value(&v.value).into_owned(),
            quoted: v.quoted,
        }),
        _ => Err(ParameterError::MultipleValues { kind }),
    }
}

/// Take the only value of a parameter, which must be quoted.
pub(crate) fn single_quoted(
    param: RawParameter,
    kind: ParameterKind,
) -> Result<String, ParameterError> {
    let v = single(param, kind)?;
    if v.quoted {
        Ok(v.value)
    } else {
        Err(ParameterError::MustBeQuoted {
            kind,
            value: v.value,
        })
    }
}

/// Take the only value of a parameter, which must not be quoted.
pub(crate) fn single_not_quoted(
    param: RawParameter,
    kind: ParameterKind,
) -> Result<String, ParameterError> {
    let v = single(param, kind)?;
    if v.quoted {
        Err(ParameterError::MustNotBeQuoted {
            kind,
            value: v.value,
        })
    } else {
        Ok(v.value)
    }
}

/// Take every value of a parameter, each of which must be quoted.
pub(crate) fn multiple_quoted(
    param: RawParameter,
    kind: ParameterKind,
) -> Result<Vec<String>, ParameterError> {
    param
        .values
        .into_iter()
        .map(|v| {
            let value = unescape_param_value(&v.value).into_owned();
            if v.quoted {
                Ok(value)
            } else {
                Err(ParameterError::MustBeQuoted { kind, value })
            }
        })
        .collect()
}
