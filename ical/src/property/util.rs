// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use crate::value::{ValueError, Zone};

/// Implement [`PropertyValue`](crate::property::PropertyValue) for a keyword
/// enum defined with `define_keyword_enum!` or, given `with_unknown`,
/// `define_keyword_enum_with_unknown!`.
macro_rules! keyword_property_value {
    ($ty:ty, $kind:expr) => {
        impl $crate::property::PropertyValue for $ty {
            fn decode(
                _: &mut $crate::parameter::Parameters,
                raw: &str,
            ) -> Result<Self, $crate::value::ValueError> {
                Self::from_keyword(raw).ok_or_else(|| $crate::value::ValueError::UnknownKeyword {
                    kind: $kind,
                    value: raw.to_string(),
                })
            }

            fn encode(&self, _: &mut $crate::parameter::Parameters) -> String {
                self.as_str().to_string()
            }

            fn validate(&self) -> Result<(), $crate::value::ValueError> {
                Ok(())
            }
        }
    };

    ($ty:ty, $kind:expr, with_unknown) => {
        impl $crate::property::PropertyValue for $ty {
            fn decode(
                _: &mut $crate::parameter::Parameters,
                raw: &str,
            ) -> Result<Self, $crate::value::ValueError> {
                Ok(Self::from_keyword(raw))
            }

            fn encode(&self, _: &mut $crate::parameter::Parameters) -> String {
                self.as_str().to_string()
            }

            fn validate(&self) -> Result<(), $crate::value::ValueError> {
                match self {
                    Self::Unknown(s) if !$crate::parameter::TOKEN.is_match(s) => {
                        Err($crate::value::ValueError::UnknownKeyword {
                            kind: $kind,
                            value: s.clone(),
                        })
                    }
                    _ => Ok(()),
                }
            }
        }
    };
}

/// Parse a comma-separated list of values.
pub(crate) fn decode_list<T>(raw: &str) -> Result<Vec<T>, ValueError>
where
    T: FromStr<Err = ValueError>,
{
    raw.split(',').map(str::parse).collect()
}

/// Format a comma-separated list of values.
pub(crate) fn encode_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// All values of one content line share its TZID, so they must share a zone.
pub(crate) fn check_same_zone<'a>(
    kind: &'static str,
    mut zones: impl Iterator<Item = &'a Zone>,
) -> Result<(), ValueError> {
    let Some(first) = zones.next() else {
        return Err(ValueError::invalid(kind, "list is empty"));
    };
    if zones.all(|z| z == first) {
        Ok(())
    } else {
        Err(ValueError::invalid(
            kind,
            "values of one property must share the same zone",
        ))
    }
}
