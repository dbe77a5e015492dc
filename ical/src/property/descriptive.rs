// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Descriptive Component Properties (RFC 5545 Section 3.8.1)
//!
//! - 3.8.1.1: `Attachment` - Attached documents or resources
//! - 3.8.1.3: `Classification` - Access classification (PUBLIC, PRIVATE, CONFIDENTIAL)
//! - 3.8.1.6: `Geo` - Geographic position (latitude/longitude)
//! - 3.8.1.8: `PercentComplete` - Percent complete for todos (0-100)
//! - 3.8.1.9: `Priority` - Priority level (0-9, undefined = 0)
//! - 3.8.1.11: `EventStatus`, `TodoStatus`, `JournalStatus` - Component status
//!
//! CATEGORIES, COMMENT, DESCRIPTION, LOCATION, RESOURCES and SUMMARY are
//! plain text values.

use crate::keyword::{
    KW_BINARY, KW_CLASS, KW_CLASS_CONFIDENTIAL, KW_CLASS_PRIVATE, KW_CLASS_PUBLIC, KW_GEO,
    KW_PERCENT_COMPLETE, KW_PRIORITY, KW_STATUS, KW_STATUS_CANCELLED, KW_STATUS_COMPLETED,
    KW_STATUS_CONFIRMED, KW_STATUS_DRAFT, KW_STATUS_FINAL, KW_STATUS_IN_PROCESS,
    KW_STATUS_NEEDS_ACTION, KW_STATUS_TENTATIVE,
};
use crate::parameter::{Encoding, Parameter, ParameterKind, Parameters, ValueType};
use crate::property::PropertyValue;
use crate::value::{Binary, Uri, ValueError, parse_float, parse_integer};

/// Attachment value (RFC 5545 Section 3.8.1.1)
///
/// A URI reference by default; inline content is carried as BASE64 with
/// `ENCODING=BASE64;VALUE=BINARY`, which are derived from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    /// URI reference
    Uri(Uri),

    /// Inline binary data
    Binary(Binary),
}

impl PropertyValue for Attachment {
    const MANAGED: &'static [ParameterKind] = &[ParameterKind::ValueType, ParameterKind::Encoding];

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let value_type = params.take_value_type();
        let encoding = params.take_encoding();
        match (value_type, encoding) {
            (None | Some(ValueType::Binary), Some(Encoding::Base64)) => {
                raw.parse().map(Self::Binary)
            }
            (Some(ValueType::Binary), _) => Err(ValueError::MissingEncoding),
            (_, Some(Encoding::Base64)) => Err(ValueError::invalid(
                KW_BINARY,
                "ENCODING=BASE64 on a URI attachment",
            )),
            (_, Some(Encoding::Unknown(name))) => Err(ValueError::invalid(
                KW_BINARY,
                format!("unsupported ENCODING {name}"),
            )),
            _ => raw.parse().map(Self::Uri),
        }
    }

    fn encode(&self, params: &mut Parameters) -> String {
        match self {
            Self::Uri(uri) => uri.to_string(),
            Self::Binary(binary) => {
                params.prepend(Parameter::ValueType(ValueType::Binary));
                params.prepend(Parameter::Encoding(Encoding::Base64));
                binary.to_string()
            }
        }
    }

    fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Uri(uri) => uri.validate(),
            Self::Binary(_) => Ok(()),
        }
    }
}

define_keyword_enum_with_unknown! {
    /// Access classification (RFC 5545 Section 3.8.1.3).
    #[derive(Default)]
    enum Classification {
        /// Public classification
        #[default]
        Public       => KW_CLASS_PUBLIC,
        /// Private classification
        Private      => KW_CLASS_PRIVATE,
        /// Confidential classification
        Confidential => KW_CLASS_CONFIDENTIAL,
    }
}

keyword_property_value!(Classification, KW_CLASS, with_unknown);

/// Geographic position (RFC 5545 Section 3.8.1.6)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,

    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
}

impl Geo {
    /// Create a position.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl PropertyValue for Geo {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let Some((latitude, longitude)) = raw.split_once(';') else {
            return Err(ValueError::Syntax {
                kind: KW_GEO,
                value: raw.to_string(),
                reason: "expected latitude;longitude".to_string(),
            });
        };
        Ok(Self {
            latitude: parse_float(latitude)?,
            longitude: parse_float(longitude)?,
        })
    }

    fn encode(&self, _: &mut Parameters) -> String {
        format!("{};{}", self.latitude, self.longitude)
    }

    fn validate(&self) -> Result<(), ValueError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValueError::invalid(
                KW_GEO,
                format!("latitude {} out of range", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValueError::invalid(
                KW_GEO,
                format!("longitude {} out of range", self.longitude),
            ));
        }
        Ok(())
    }
}

/// Percent complete of a to-do (RFC 5545 Section 3.8.1.8), 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PercentComplete(pub u8);

/// Priority (RFC 5545 Section 3.8.1.9): 1 is highest, 9 lowest, 0 undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Priority(pub u8);

macro_rules! bounded_integer {
    ($ty:ident, $kind:expr, $max:expr) => {
        impl PropertyValue for $ty {
            fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
                let n = parse_integer(raw)?;
                u8::try_from(n)
                    .ok()
                    .map(Self)
                    .filter(|v| v.validate().is_ok())
                    .ok_or_else(|| {
                        ValueError::invalid($kind, format!("{n} is not within 0..={}", $max))
                    })
            }

            fn encode(&self, _: &mut Parameters) -> String {
                self.0.to_string()
            }

            fn validate(&self) -> Result<(), ValueError> {
                if self.0 <= $max {
                    Ok(())
                } else {
                    Err(ValueError::invalid(
                        $kind,
                        format!("{} is not within 0..={}", self.0, $max),
                    ))
                }
            }
        }
    };
}

bounded_integer!(PercentComplete, KW_PERCENT_COMPLETE, 100);
bounded_integer!(Priority, KW_PRIORITY, 9);

define_keyword_enum! {
    /// Status of a VEVENT (RFC 5545 Section 3.8.1.11).
    enum EventStatus {
        /// Indicates event is tentative
        Tentative => KW_STATUS_TENTATIVE,
        /// Indicates event is definite
        Confirmed => KW_STATUS_CONFIRMED,
        /// Indicates event was cancelled
        Cancelled => KW_STATUS_CANCELLED,
    }
}

define_keyword_enum! {
    /// Status of a VTODO (RFC 5545 Section 3.8.1.11).
    enum TodoStatus {
        /// Indicates to-do needs action
        NeedsAction => KW_STATUS_NEEDS_ACTION,
        /// Indicates to-do is completed
        Completed   => KW_STATUS_COMPLETED,
        /// Indicates to-do is in process
        InProcess   => KW_STATUS_IN_PROCESS,
        /// Indicates to-do was cancelled
        Cancelled   => KW_STATUS_CANCELLED,
    }
}

define_keyword_enum! {
    /// Status of a VJOURNAL (RFC 5545 Section 3.8.1.11).
    enum JournalStatus {
        /// Indicates journal is draft
        Draft     => KW_STATUS_DRAFT,
        /// Indicates journal is final
        Final     => KW_STATUS_FINAL,
        /// Indicates journal is removed
        Cancelled => KW_STATUS_CANCELLED,
    }
}

keyword_property_value!(EventStatus, KW_STATUS);
keyword_property_value!(TodoStatus, KW_STATUS);
keyword_property_value!(JournalStatus, KW_STATUS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::RawParameter;

    #[test]
    fn attachment_uri() {
        let mut params = Parameters::new();
        let attach = Attachment::decode(&mut params, "CID:jsmith.part3.960817T083000.xyzMail@example.com")
            .unwrap();
        assert!(matches!(attach, Attachment::Uri(_)));
        assert!(params.is_empty());
    }

    #[test]
    fn attachment_binary_moves_parameters() {
        let raw = vec![
            RawParameter::single("FMTTYPE", "text/plain"),
            RawParameter::single("ENCODING", "BASE64"),
            RawParameter::single("VALUE", "BINARY"),
        ];
        let mut params = Parameters::decode(raw, &Default::default()).unwrap();
        let attach = Attachment::decode(&mut params, "SGVsbG8=").unwrap();
        assert_eq!(attach, Attachment::Binary(Binary(b"Hello".to_vec())));
        assert_eq!(params.len(), 1);

        let value = attach.encode(&mut params);
        assert_eq!(value, "SGVsbG8=");
        let names: Vec<_> = params.iter().map(Parameter::name).collect();
        assert_eq!(names, ["ENCODING", "VALUE", "FMTTYPE"]);
    }

    #[test]
    fn attachment_binary_requires_base64() {
        let mut params = Parameters::from(vec![Parameter::ValueType(ValueType::Binary)]);
        assert_eq!(
            Attachment::decode(&mut params, "SGVsbG8="),
            Err(ValueError::MissingEncoding)
        );

        let mut params = Parameters::from(vec![
            Parameter::ValueType(ValueType::Binary),
            Parameter::Encoding(Encoding::Unknown("X-UUENCODE".to_string())),
        ]);
        assert_eq!(
            Attachment::decode(&mut params, "SGVsbG8="),
            Err(ValueError::MissingEncoding)
        );

        let mut params = Parameters::from(vec![Parameter::Encoding(Encoding::Unknown(
            "X-UUENCODE".to_string(),
        ))]);
        assert!(Attachment::decode(&mut params, "http://example.com/a").is_err());
    }

    #[test]
    fn geo_position() {
        let mut params = Parameters::new();
        let geo = Geo::decode(&mut params, "37.386013;-122.082932").unwrap();
        assert_eq!(geo, Geo::new(37.386_013, -122.082_932));
        assert_eq!(geo.encode(&mut params), "37.386013;-122.082932");

        assert!(Geo::decode(&mut params, "37.386013").is_err());
        assert!(Geo::new(91.0, 0.0).validate().is_err());
        assert!(Geo::new(0.0, -181.0).validate().is_err());
    }

    #[test]
    fn bounded_integers() {
        let mut params = Parameters::new();
        assert_eq!(Priority::decode(&mut params, "9"), Ok(Priority(9)));
        assert!(Priority::decode(&mut params, "10").is_err());
        assert!(Priority::decode(&mut params, "-1").is_err());
        assert_eq!(
            PercentComplete::decode(&mut params, "100"),
            Ok(PercentComplete(100))
        );
        assert!(PercentComplete::decode(&mut params, "101").is_err());
    }

    #[test]
    fn status_is_per_component() {
        let mut params = Parameters::new();
        assert_eq!(
            TodoStatus::decode(&mut params, "NEEDS-ACTION"),
            Ok(TodoStatus::NeedsAction)
        );
        assert!(EventStatus::decode(&mut params, "NEEDS-ACTION").is_err());
        assert_eq!(JournalStatus::Final.encode(&mut params), "FINAL");
    }

    #[test]
    fn classification_keeps_extensions() {
        let mut params = Parameters::new();
        assert_eq!(
            Classification::decode(&mut params, "private"),
            Ok(Classification::Private)
        );
        assert_eq!(
            Classification::decode(&mut params, "X-SECRET"),
            Ok(Classification::Unknown("X-SECRET".to_string()))
        );
    }
}
