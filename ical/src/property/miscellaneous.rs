// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous Component Properties (RFC 5545 Section 3.8.8)
//!
//! - 3.8.8.3: `RequestStatus` - Request status (REQUEST-STATUS)
//!
//! IANA and non-standard properties (3.8.8.1, 3.8.8.2) are kept as
//! [`UnknownProperty`](crate::property::UnknownProperty).

use std::sync::LazyLock;

use regex::Regex;

use crate::keyword::KW_REQUEST_STATUS;
use crate::parameter::Parameters;
use crate::property::PropertyValue;
use crate::value::{Text, ValueError, escape_text, split_unescaped, unescape_text};

static STATUS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-4]\.[0-9]+(\.[0-9]+)?$").unwrap());

/// Request status (RFC 5545 Section 3.8.8.3)
///
/// ```txt
/// rstatus    = statcode ";" statdesc [";" extdata]
/// statcode   = 1*DIGIT 1*2("." 1*DIGIT)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestStatus {
    /// Hierarchical status code, e.g. "2.0"
    pub code: String,

    /// Human readable description
    pub description: Text,

    /// Offending property or value, if any
    pub data: Option<Text>,
}

impl RequestStatus {
    /// Create a status without extra data.
    pub fn new(code: impl Into<String>, description: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            data: None,
        }
    }
}

impl PropertyValue for RequestStatus {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let (code, description, data) = match split_unescaped(raw, ';').as_slice() {
            [code, description] => (*code, *description, None),
            [code, description, data] => (*code, *description, Some(*data)),
            _ => {
                return Err(ValueError::Syntax {
                    kind: KW_REQUEST_STATUS,
                    value: raw.to_string(),
                    reason: "expected statcode;statdesc[;extdata]".to_string(),
                });
            }
        };
        Ok(Self {
            code: code.to_string(),
            description: Text::new(unescape_text(description)),
            data: data.map(|d| Text::new(unescape_text(d))),
        })
    }

    fn encode(&self, _: &mut Parameters) -> String {
        let mut out = format!("{};{}", self.code, escape_text(&self.description));
        if let Some(data) = &self.data {
            out.push(';');
            out.push_str(&escape_text(data));
        }
        out
    }

    fn validate(&self) -> Result<(), ValueError> {
        if !STATUS_CODE.is_match(&self.code) {
            return Err(ValueError::invalid(
                KW_REQUEST_STATUS,
                format!("invalid status code {:?}", self.code),
            ));
        }
        self.description.validate()?;
        if let Some(data) = &self.data {
            data.validate()?;
        }
        Ok(())
    }
}
