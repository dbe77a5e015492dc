// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Boolean, binary and URI values as defined in RFC 5545 Sections 3.3.1,
//! 3.3.2 and 3.3.13.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::keyword::{KW_BINARY, KW_BOOLEAN, KW_FALSE, KW_TRUE, KW_URI};
use crate::value::ValueError;

/// Parse a BOOLEAN value, case-insensitively.
///
/// ```txt
/// boolean    = "TRUE" / "FALSE"
/// ```
///
/// # Errors
///
/// Returns an error for anything but `TRUE` or `FALSE`.
pub fn parse_boolean(raw: &str) -> Result<bool, ValueError> {
    if raw.eq_ignore_ascii_case(KW_TRUE) {
        Ok(true)
    } else if raw.eq_ignore_ascii_case(KW_FALSE) {
        Ok(false)
    } else {
        Err(ValueError::UnknownKeyword {
            kind: KW_BOOLEAN,
            value: raw.to_string(),
        })
    }
}

/// Binary value, carried inline as BASE64 text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary(pub Vec<u8>);

impl Binary {
    /// The decoded octets.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Binary {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl FromStr for Binary {
    type Err = ValueError;

    /// Decode BASE64 text (RFC 4648, with padding).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STANDARD
            .decode(s)
            .map(Self)
            .map_err(|err| ValueError::Syntax {
                kind: KW_BINARY,
                value: s.to_string(),
                reason: err.to_string(),
            })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(&self.0))
    }
}

static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// URI value (RFC 3986), also used for CAL-ADDRESS.
///
/// Only the scheme is checked; the rest of the reference is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Create a URI without checking it.
    pub fn new_unchecked(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme, e.g. `mailto`.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        URI_SCHEME
            .find(&self.0)
            .and_then(|m| self.0.get(..m.end() - 1))
    }

    /// Check that the URI starts with a scheme and holds no whitespace or
    /// control characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is malformed.
    pub fn validate(&self) -> Result<(), ValueError> {
        if !URI_SCHEME.is_match(&self.0) {
            return Err(ValueError::invalid(KW_URI, format!("{:?} has no scheme", self.0)));
        }
        if let Some(c) = self.0.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValueError::invalid(
                KW_URI,
                format!("{:?} contains {c:?}", self.0),
            ));
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = Self(s.to_string());
        uri.validate()?;
        Ok(uri)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
