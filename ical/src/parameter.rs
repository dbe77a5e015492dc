// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter parsing module for iCalendar parameters.
//!
//! This module handles the parsing and validation of iCalendar parameters
//! as defined in RFC 5545 Section 3.2, with the RFC 6868 caret encoding of
//! parameter values.

mod definition;
mod kind;
mod util;

pub use definition::{
    AlarmTriggerRelationship, CalendarUserType, Encoding, FreeBusyType, ParticipationRole,
    ParticipationStatus, RecurrenceIdRange, RelationshipType, ValueType,
};
pub use kind::ParameterKind;
pub use util::{escape_param_value, param_value_needs_quotes, unescape_param_value};

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::syntax::{RawParamValue, RawParameter};
use crate::tz::{DecodeOptions, TzError};
use crate::value::{Uri, parse_boolean};
use util::{multiple_quoted, single, single_not_quoted, single_quoted};

/// A typed property parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// Alternate text representation (ALTREP)
    AltRep(Uri),

    /// Common name (CN)
    CommonName(String),

    /// Calendar user type (CUTYPE)
    CalendarUserType(CalendarUserType),

    /// Delegators (DELEGATED-FROM)
    DelegatedFrom(Vec<Uri>),

    /// Delegatees (DELEGATED-TO)
    DelegatedTo(Vec<Uri>),

    /// Directory entry reference (DIR)
    Directory(Uri),

    /// Inline encoding (ENCODING)
    Encoding(Encoding),

    /// Format type, a media type (FMTTYPE)
    FormatType(String),

    /// Free/busy time type (FBTYPE)
    FreeBusyType(FreeBusyType),

    /// Language tag (LANGUAGE)
    Language(String),

    /// Group or list membership (MEMBER)
    Member(Vec<Uri>),

    /// Participation status (PARTSTAT)
    ParticipationStatus(ParticipationStatus),

    /// Recurrence identifier range (RANGE)
    Range(RecurrenceIdRange),

    /// Alarm trigger relationship (RELATED)
    Related(AlarmTriggerRelationship),

    /// Relationship type (RELTYPE)
    RelationshipType(RelationshipType),

    /// Participation role (ROLE)
    Role(ParticipationRole),

    /// RSVP expectation (RSVP)
    Rsvp(bool),

    /// Sent by (SENT-BY)
    SentBy(Uri),

    /// Time zone identifier (TZID)
    TzId(String),

    /// Value data type (VALUE)
    ValueType(ValueType),

    /// An x-name or IANA parameter this crate does not interpret
    Unknown(UnknownParameter),
}

/// A parameter kept verbatim, values unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParameter {
    /// Parameter name, uppercased
    pub name: String,

    /// Parameter values
    pub values: Vec<String>,
}

/// Errors produced while decoding or validating a parameter.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ParameterError {
    /// A parameter that takes one value was given several.
    #[error("parameter {kind} takes exactly one value")]
    MultipleValues {
        /// The parameter
        kind: ParameterKind,
    },

    /// A URI-valued parameter was not quoted.
    #[error("parameter {kind} value {value:?} must be quoted")]
    MustBeQuoted {
        /// The parameter
        kind: ParameterKind,
        /// The value found
        value: String,
    },

    /// A keyword-valued parameter was quoted.
    #[error("parameter {kind} value {value:?} must not be quoted")]
    MustNotBeQuoted {
        /// The parameter
        kind: ParameterKind,
        /// The value found
        value: String,
    },

    /// The value does not fit the parameter.
    #[error("invalid {kind} value {value:?}: {reason}")]
    InvalidValue {
        /// The parameter
        kind: ParameterKind,
        /// The value found
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// An unknown parameter with a malformed name.
    #[error("invalid parameter name {0:?}")]
    InvalidName(String),

    /// An unknown parameter without values.
    #[error("parameter {0} has no value")]
    Empty(String),

    /// A known parameter given more than once.
    #[error("parameter {kind} appears more than once")]
    Duplicate {
        /// The parameter
        kind: ParameterKind,
    },

    /// A parameter that is derived from the property value, set by hand.
    #[error("parameter {kind} is derived from the value and cannot be set directly")]
    Managed {
        /// The parameter
        kind: ParameterKind,
    },

    /// A TZID the resolver does not know.
    #[error(transparent)]
    TimeZone(#[from] TzError),
}

impl ParameterError {
    fn invalid(kind: ParameterKind, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

type DecodeFn = fn(RawParameter, &DecodeOptions) -> Result<Parameter, ParameterError>;

static DECODERS: LazyLock<HashMap<&'static str, DecodeFn>> = LazyLock::new(|| {
    use ParameterKind as K;

    let table: [(K, DecodeFn); 20] = [
        (K::AltRep, |raw, _| {
            uri(K::AltRep, single_quoted(raw, K::AltRep)?).map(Parameter::AltRep)
        }),
        (K::CommonName, |raw, _| {
            Ok(Parameter::CommonName(single(raw, K::CommonName)?.value))
        }),
        (K::CalendarUserType, |raw, _| {
            let value = single_not_quoted(raw, K::CalendarUserType)?;
            Ok(Parameter::CalendarUserType(CalendarUserType::from_keyword(&value)))
        }),
        (K::DelegatedFrom, |raw, _| {
            uris(K::DelegatedFrom, multiple_quoted(raw, K::DelegatedFrom)?)
                .map(Parameter::DelegatedFrom)
        }),
        (K::DelegatedTo, |raw, _| {
            uris(K::DelegatedTo, multiple_quoted(raw, K::DelegatedTo)?).map(Parameter::DelegatedTo)
        }),
        (K::Directory, |raw, _| {
            uri(K::Directory, single_quoted(raw, K::Directory)?).map(Parameter::Directory)
        }),
        (K::Encoding, |raw, _| {
            let value = single_not_quoted(raw, K::Encoding)?;
            Ok(Parameter::Encoding(Encoding::from_keyword(&value)))
        }),
        (K::FormatType, |raw, _| {
            let value = single(raw, K::FormatType)?.value;
            check_format_type(&value)?;
            Ok(Parameter::FormatType(value))
        }),
        (K::FreeBusyType, |raw, _| {
            let value = single_not_quoted(raw, K::FreeBusyType)?;
            Ok(Parameter::FreeBusyType(FreeBusyType::from_keyword(&value)))
        }),
        (K::Language, |raw, _| {
            let value = single(raw, K::Language)?.value;
            check_language(&value)?;
            Ok(Parameter::Language(value))
        }),
        (K::Member, |raw, _| {
            uris(K::Member, multiple_quoted(raw, K::Member)?).map(Parameter::Member)
        }),
        (K::ParticipationStatus, |raw, _| {
            let value = single_not_quoted(raw, K::ParticipationStatus)?;
            Ok(Parameter::ParticipationStatus(
                ParticipationStatus::from_keyword(&value),
            ))
        }),
        (K::Range, |raw, _| {
            let value = single_not_quoted(raw, K::Range)?;
            Ok(Parameter::Range(RecurrenceIdRange::from_keyword(&value)))
        }),
        (K::Related, |raw, _| {
            let value = single_not_quoted(raw, K::Related)?;
            Ok(Parameter::Related(AlarmTriggerRelationship::from_keyword(
                &value,
            )))
        }),
        (K::RelationshipType, |raw, _| {
            let value = single_not_quoted(raw, K::RelationshipType)?;
            Ok(Parameter::RelationshipType(RelationshipType::from_keyword(
                &value,
            )))
        }),
        (K::Role, |raw, _| {
            let value = single_not_quoted(raw, K::Role)?;
            Ok(Parameter::Role(ParticipationRole::from_keyword(&value)))
        }),
        (K::Rsvp, |raw, _| {
            let value = single_not_quoted(raw, K::Rsvp)?;
            parse_boolean(&value)
                .map(Parameter::Rsvp)
                .map_err(|err| ParameterError::invalid(K::Rsvp, value, err.to_string()))
        }),
        (K::SentBy, |raw, _| {
            uri(K::SentBy, single_quoted(raw, K::SentBy)?).map(Parameter::SentBy)
        }),
        (K::TzId, |raw, options| {
            let value = single(raw, K::TzId)?.value;
            if value.is_empty() {
                return Err(ParameterError::invalid(K::TzId, value, "empty identifier"));
            }
            options.tz_resolver.resolve(&value)?;
            Ok(Parameter::TzId(value))
        }),
        (K::ValueType, |raw, _| {
            let value = single_not_quoted(raw, K::ValueType)?;
            Ok(Parameter::ValueType(ValueType::from_keyword(&value)))
        }),
    ];

    table
        .into_iter()
        .map(|(kind, decode)| (kind.name(), decode))
        .collect()
});

pub(crate) static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

static MEDIA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$").unwrap()
});

fn uri(kind: ParameterKind, value: String) -> Result<Uri, ParameterError> {
    value
        .parse::<Uri>()
        .map_err(|err| ParameterError::invalid(kind, value, err.to_string()))
}

fn uris(kind: ParameterKind, values: Vec<String>) -> Result<Vec<Uri>, ParameterError> {
    values.into_iter().map(|v| uri(kind, v)).collect()
}

fn check_format_type(value: &str) -> Result<(), ParameterError> {
    if MEDIA_TYPE.is_match(value) {
        Ok(())
    } else {
        Err(ParameterError::invalid(
            ParameterKind::FormatType,
            value,
            "expected a media type such as text/plain",
        ))
    }
}

fn check_language(value: &str) -> Result<(), ParameterError> {
    if LANGUAGE_TAG.is_match(value) {
        Ok(())
    } else {
        Err(ParameterError::invalid(
            ParameterKind::Language,
            value,
            "expected a language tag such as en-US",
        ))
    }
}

fn check_token(kind: ParameterKind, value: &str) -> Result<(), ParameterError> {
    if TOKEN.is_match(value) {
        Ok(())
    } else {
        Err(ParameterError::invalid(kind, value, "expected a token"))
    }
}

fn check_text(kind: ParameterKind, value: &str) -> Result<(), ParameterError> {
    match value.chars().find(|c| c.is_control() && !matches!(c, '\n' | '\t')) {
        Some(c) => Err(ParameterError::invalid(
            kind,
            value,
            format!("control character {c:?} cannot be encoded"),
        )),
        None => Ok(()),
    }
}

impl Parameter {
    /// Decode a parameter as read by the phraser.
    ///
    /// Names without a decoder become [`Parameter::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns an error if a known parameter has an invalid value.
    pub fn decode(raw: RawParameter, options: &DecodeOptions) -> Result<Self, ParameterError> {
        let name = raw.name.to_ascii_uppercase();
        match DECODERS.get(name.as_str()) {
            Some(decode) => decode(raw, options),
            None => Ok(Self::Unknown(UnknownParameter {
                name,
                values: raw
                    .values
                    .into_iter()
                    .map(|v| unescape_param_value(&v.value).into_owned())
                    .collect(),
            })),
        }
    }

    /// The kind of a known parameter, `None` for [`Parameter::Unknown`].
    #[must_use]
    pub fn kind(&self) -> Option<ParameterKind> {
        use ParameterKind as K;

        Some(match self {
            Self::AltRep(_) => K::AltRep,
            Self::CommonName(_) => K::CommonName,
            Self::CalendarUserType(_) => K::CalendarUserType,
            Self::DelegatedFrom(_) => K::DelegatedFrom,
            Self::DelegatedTo(_) => K::DelegatedTo,
            Self::Directory(_) => K::Directory,
            Self::Encoding(_) => K::Encoding,
            Self::FormatType(_) => K::FormatType,
            Self::FreeBusyType(_) => K::FreeBusyType,
            Self::Language(_) => K::Language,
            Self::Member(_) => K::Member,
            Self::ParticipationStatus(_) => K::ParticipationStatus,
            Self::Range(_) => K::Range,
            Self::Related(_) => K::Related,
            Self::RelationshipType(_) => K::RelationshipType,
            Self::Role(_) => K::Role,
            Self::Rsvp(_) => K::Rsvp,
            Self::SentBy(_) => K::SentBy,
            Self::TzId(_) => K::TzId,
            Self::ValueType(_) => K::ValueType,
            Self::Unknown(_) => return None,
        })
    }

    /// The parameter name as written on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Unknown(p) => &p.name,
            _ => self.kind().map_or("", ParameterKind::name),
        }
    }

    /// Convert to the form written by [`ContentLine`](crate::syntax::ContentLine).
    #[must_use]
    pub fn encode(&self) -> RawParameter {
        let quoted = |v: &Uri| RawParamValue {
            value: v.as_str().to_string(),
            quoted: true,
        };
        let bare = |v: &str| RawParamValue {
            value: v.to_string(),
            quoted: false,
        };

        let values = match self {
            Self::AltRep(v) | Self::Directory(v) | Self::SentBy(v) => vec![quoted(v)],
            Self::DelegatedFrom(vs) | Self::DelegatedTo(vs) | Self::Member(vs) => {
                vs.iter().map(quoted).collect()
            }
            Self::CommonName(v) | Self::FormatType(v) | Self::Language(v) | Self::TzId(v) => {
                vec![bare(v)]
            }
            Self::CalendarUserType(v) => vec![bare(v.as_str())],
            Self::Encoding(v) => vec![bare(v.as_str())],
            Self::FreeBusyType(v) => vec![bare(v.as_str())],
            Self::ParticipationStatus(v) => vec![bare(v.as_str())],
            Self::Range(v) => vec![bare(v.as_str())],
            Self::Related(v) => vec![bare(v.as_str())],
            Self::RelationshipType(v) => vec![bare(v.as_str())],
            Self::Role(v) => vec![bare(v.as_str())],
            Self::Rsvp(v) => vec![bare(if *v { "TRUE" } else { "FALSE" })],
            Self::ValueType(v) => vec![bare(v.as_str())],
            Self::Unknown(p) => p.values.iter().map(|v| bare(v)).collect(),
        };

        RawParameter {
            name: self.name().to_string(),
            values,
        }
    }

    /// Check that the parameter can be written back.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed.
    pub fn validate(&self) -> Result<(), ParameterError> {
        use ParameterKind as K;

        let check_uri = |kind, v: &Uri| {
            v.validate()
                .map_err(|err| ParameterError::invalid(kind, v.as_str(), err.to_string()))
        };
        let unknown_token = |kind, v: &str, known: bool| {
            if known { Ok(()) } else { check_token(kind, v) }
        };

        match self {
            Self::AltRep(v) => check_uri(K::AltRep, v),
            Self::Directory(v) => check_uri(K::Directory, v),
            Self::SentBy(v) => check_uri(K::SentBy, v),
            Self::DelegatedFrom(vs) => vs.iter().try_for_each(|v| check_uri(K::DelegatedFrom, v)),
            Self::DelegatedTo(vs) => vs.iter().try_for_each(|v| check_uri(K::DelegatedTo, v)),
            Self::Member(vs) => vs.iter().try_for_each(|v| check_uri(K::Member, v)),
            Self::CommonName(v) => check_text(K::CommonName, v),
            Self::FormatType(v) => check_format_type(v),
            Self::Language(v) => check_language(v),
            Self::TzId(v) if v.is_empty() => {
                Err(ParameterError::invalid(K::TzId, v.as_str(), "empty identifier"))
            }
            Self::TzId(v) => check_text(K::TzId, v),
            Self::CalendarUserType(v) => unknown_token(
                K::CalendarUserType,
                v.as_str(),
                !matches!(v, CalendarUserType::Unknown(_)),
            ),
            Self::FreeBusyType(v) => unknown_token(
                K::FreeBusyType,
                v.as_str(),
                !matches!(v, FreeBusyType::Unknown(_)),
            ),
            Self::ParticipationStatus(v) => unknown_token(
                K::ParticipationStatus,
                v.as_str(),
                !matches!(v, ParticipationStatus::Unknown(_)),
            ),
            Self::RelationshipType(v) => unknown_token(
                K::RelationshipType,
                v.as_str(),
                !matches!(v, RelationshipType::Unknown(_)),
            ),
            Self::Role(v) => unknown_token(
                K::Role,
                v.as_str(),
                !matches!(v, ParticipationRole::Unknown(_)),
            ),
            Self::ValueType(v) => unknown_token(
                K::ValueType,
                v.as_str(),
                !matches!(v, ValueType::Unknown(_)),
            ),
            Self::Encoding(v) => unknown_token(
                K::Encoding,
                v.as_str(),
                !matches!(v, Encoding::Unknown(_)),
            ),
            Self::Range(v) => unknown_token(
                K::Range,
                v.as_str(),
                !matches!(v, RecurrenceIdRange::Unknown(_)),
            ),
            Self::Related(v) => unknown_token(
                K::Related,
                v.as_str(),
                !matches!(v, AlarmTriggerRelationship::Unknown(_)),
            ),
            Self::Rsvp(_) => Ok(()),
            Self::Unknown(p) => {
                if !TOKEN.is_match(&p.name) {
                    return Err(ParameterError::InvalidName(p.name.clone()));
                }
                if p.values.is_empty() {
                    return Err(ParameterError::Empty(p.name.clone()));
                }
                Ok(())
            }
        }
    }
}

/// The parameters of one property, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// An empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode every parameter of a content line.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid or a known parameter
    /// appears twice.
    pub fn decode(raw: Vec<RawParameter>, options: &DecodeOptions) -> Result<Self, ParameterError> {
        let mut params = Self(Vec::with_capacity(raw.len()));
        for raw in raw {
            let param = Parameter::decode(raw, options)?;
            if let Some(kind) = param.kind()
                && params.get(kind).is_some()
            {
                return Err(ParameterError::Duplicate { kind });
            }
            params.0.push(param);
        }
        Ok(params)
    }

    /// Convert every parameter for writing.
    #[must_use]
    pub fn encode(&self) -> Vec<RawParameter> {
        self.0.iter().map(Parameter::encode).collect()
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter, or a duplicated known one.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (i, param) in self.0.iter().enumerate() {
            param.validate()?;
            if let Some(kind) = param.kind()
                && self.0.iter().skip(i + 1).any(|p| p.kind() == Some(kind))
            {
                return Err(ParameterError::Duplicate { kind });
            }
        }
        Ok(())
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    /// Append a parameter.
    pub fn push(&mut self, param: Parameter) {
        self.0.push(param);
    }

    /// Set a known parameter, replacing any previous one of the same kind.
    pub fn set(&mut self, param: Parameter) {
        match param.kind().and_then(|kind| self.position(kind)) {
            Some(i) => {
                if let Some(slot) = self.0.get_mut(i) {
                    *slot = param;
                }
            }
            None => self.0.push(param),
        }
    }

    /// Insert a parameter in front of the others, dropping any previous one
    /// of the same kind.
    pub(crate) fn prepend(&mut self, param: Parameter) {
        if let Some(kind) = param.kind() {
            self.remove(kind);
        }
        self.0.insert(0, param);
    }

    /// The parameter of the given kind.
    #[must_use]
    pub fn get(&self, kind: ParameterKind) -> Option<&Parameter> {
        self.0.iter().find(|p| p.kind() == Some(kind))
    }

    /// Remove and return the parameter of the given kind.
    pub fn remove(&mut self, kind: ParameterKind) -> Option<Parameter> {
        self.position(kind).map(|i| self.0.remove(i))
    }

    fn position(&self, kind: ParameterKind) -> Option<usize> {
        self.0.iter().position(|p| p.kind() == Some(kind))
    }

    /// The TZID, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self.get(ParameterKind::TzId) {
            Some(Parameter::TzId(v)) => Some(v),
            _ => None,
        }
    }

    /// The VALUE data type, if any.
    #[must_use]
    pub fn value_type(&self) -> Option<&ValueType> {
        match self.get(ParameterKind::ValueType) {
            Some(Parameter::ValueType(v)) => Some(v),
            _ => None,
        }
    }

    /// The inline ENCODING, if any.
    #[must_use]
    pub fn encoding(&self) -> Option<&Encoding> {
        match self.get(ParameterKind::Encoding) {
            Some(Parameter::Encoding(v)) => Some(v),
            _ => None,
        }
    }

    /// The LANGUAGE tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self.get(ParameterKind::Language) {
            Some(Parameter::Language(v)) => Some(v),
            _ => None,
        }
    }

    /// The common name (CN), if any.
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        match self.get(ParameterKind::CommonName) {
            Some(Parameter::CommonName(v)) => Some(v),
            _ => None,
        }
    }

    /// The alarm trigger relationship (RELATED), if any.
    #[must_use]
    pub fn related(&self) -> Option<&AlarmTriggerRelationship> {
        match self.get(ParameterKind::Related) {
            Some(Parameter::Related(v)) => Some(v),
            _ => None,
        }
    }

    /// The free/busy type (FBTYPE), if any.
    #[must_use]
    pub fn free_busy_type(&self) -> Option<&FreeBusyType> {
        match self.get(ParameterKind::FreeBusyType) {
            Some(Parameter::FreeBusyType(v)) => Some(v),
            _ => None,
        }
    }

    /// Parameters this crate does not interpret.
    pub fn unknown(&self) -> impl Iterator<Item = &UnknownParameter> {
        self.0.iter().filter_map(|p| match p {
            Parameter::Unknown(u) => Some(u),
            _ => None,
        })
    }

    pub(crate) fn take_tzid(&mut self) -> Option<String> {
        match self.remove(ParameterKind::TzId) {
            Some(Parameter::TzId(v)) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn take_value_type(&mut self) -> Option<ValueType> {
        match self.remove(ParameterKind::ValueType) {
            Some(Parameter::ValueType(v)) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn take_encoding(&mut self) -> Option<Encoding> {
        match self.remove(ParameterKind::Encoding) {
            Some(Parameter::Encoding(v)) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn take_related(&mut self) -> Option<AlarmTriggerRelationship> {
        match self.remove(ParameterKind::Related) {
            Some(Parameter::Related(v)) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(value: Vec<Parameter>) -> Self {
        Self(value)
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tz::AnyTimeZone;

    fn quoted(name: &str, values: &[&str]) -> RawParameter {
        RawParameter {
            name: name.to_string(),
            values: values
                .iter()
                .map(|v| RawParamValue {
                    value: (*v).to_string(),
                    quoted: true,
                })
                .collect(),
        }
    }

    fn decode(raw: RawParameter) -> Result<Parameter, ParameterError> {
        Parameter::decode(raw, &DecodeOptions::default())
    }

    #[test]
    fn decodes_known_parameters() {
        assert_eq!(
            decode(RawParameter::single("CN", "John Smith")).unwrap(),
            Parameter::CommonName("John Smith".to_string())
        );
        assert_eq!(
            decode(RawParameter::single("PARTSTAT", "accepted")).unwrap(),
            Parameter::ParticipationStatus(ParticipationStatus::Accepted)
        );
        assert_eq!(
            decode(RawParameter::single("RSVP", "TRUE")).unwrap(),
            Parameter::Rsvp(true)
        );
        assert_eq!(
            decode(RawParameter::single("VALUE", "DATE")).unwrap(),
            Parameter::ValueType(ValueType::Date)
        );
        assert_eq!(
            decode(RawParameter::single("FMTTYPE", "application/msword")).unwrap(),
            Parameter::FormatType("application/msword".to_string())
        );
        assert_eq!(
            decode(RawParameter::single("LANGUAGE", "en-US")).unwrap(),
            Parameter::Language("en-US".to_string())
        );
        assert_eq!(
            decode(quoted("DELEGATED-TO", &["mailto:a@example.com", "mailto:b@example.com"]))
                .unwrap(),
            Parameter::DelegatedTo(vec![
                "mailto:a@example.com".parse().unwrap(),
                "mailto:b@example.com".parse().unwrap(),
            ])
        );
    }

    #[test]
    fn decode_unescapes_caret_encoding() {
        assert_eq!(
            decode(RawParameter::single("CN", "George Herman ^'Babe^' Ruth")).unwrap(),
            Parameter::CommonName("George Herman \"Babe\" Ruth".to_string())
        );
        assert_eq!(
            decode(RawParameter::single("X-ADDRESS", "Pittsburgh Pirates^n115 Federal St"))
                .unwrap(),
            Parameter::Unknown(UnknownParameter {
                name: "X-ADDRESS".to_string(),
                values: vec!["Pittsburgh Pirates\n115 Federal St".to_string()],
            })
        );
    }

    #[test]
    fn decode_rejects_invalid_parameters() {
        let fail_cases = [
            RawParameter::single("ALTREP", "cid:part1"), // must be quoted
            quoted("ROLE", &["CHAIR"]),                   // must not be quoted
            RawParameter::single("RSVP", "MAYBE"),
            RawParameter::single("FMTTYPE", "not a media type"),
            RawParameter::single("LANGUAGE", "en_US"),
            RawParameter::single("TZID", "Mars/Olympus_Mons"),
            RawParameter::single("TZID", ""),
            quoted("DIR", &["not a uri"]),
            quoted("MEMBER", &["mailto:a@example.com", "b@example.com"]),
        ];
        for raw in fail_cases {
            assert!(decode(raw.clone()).is_err(), "decoding {raw:?} should fail");
        }
    }

    #[test]
    fn enumerated_parameters_keep_unknown_keywords() {
        #[rustfmt::skip]
        let cases = [
            ("CUTYPE",   Parameter::CalendarUserType(CalendarUserType::Unknown("X-FOO".to_string()))),
            ("ENCODING", Parameter::Encoding(Encoding::Unknown("X-FOO".to_string()))),
            ("FBTYPE",   Parameter::FreeBusyType(FreeBusyType::Unknown("X-FOO".to_string()))),
            ("PARTSTAT", Parameter::ParticipationStatus(ParticipationStatus::Unknown("X-FOO".to_string()))),
            ("RANGE",    Parameter::Range(RecurrenceIdRange::Unknown("X-FOO".to_string()))),
            ("RELATED",  Parameter::Related(AlarmTriggerRelationship::Unknown("X-FOO".to_string()))),
            ("RELTYPE",  Parameter::RelationshipType(RelationshipType::Unknown("X-FOO".to_string()))),
            ("ROLE",     Parameter::Role(ParticipationRole::Unknown("X-FOO".to_string()))),
            ("VALUE",    Parameter::ValueType(ValueType::Unknown("X-FOO".to_string()))),
        ];
        for (name, expected) in cases {
            let raw = RawParameter::single(name, "X-FOO");
            let param = decode(raw.clone()).unwrap();
            assert_eq!(param, expected, "decoding {name}");
            assert!(param.validate().is_ok(), "validating {name}");
            assert_eq!(param.encode(), raw, "encoding {name}");
        }
    }

    #[test]
    fn deprecated_range_is_kept() {
        assert_eq!(
            decode(RawParameter::single("RANGE", "THISANDPRIOR")).unwrap(),
            Parameter::Range(RecurrenceIdRange::Unknown("THISANDPRIOR".to_string()))
        );
        assert!(
            Parameter::Related(AlarmTriggerRelationship::Unknown("not a token".to_string()))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn tzid_uses_resolver() {
        let raw = RawParameter::single("TZID", "Custom Zone");
        assert!(matches!(
            decode(raw.clone()),
            Err(ParameterError::TimeZone(TzError::Unknown { .. }))
        ));
        let options = DecodeOptions::default().with_tz_resolver(AnyTimeZone);
        assert_eq!(
            Parameter::decode(raw, &options).unwrap(),
            Parameter::TzId("Custom Zone".to_string())
        );
    }

    #[test]
    fn parameters_reject_duplicates() {
        let raw = vec![
            RawParameter::single("CN", "A"),
            RawParameter::single("X-A", "1"),
            RawParameter::single("X-A", "2"),
        ];
        assert_eq!(Parameters::decode(raw, &DecodeOptions::default()).unwrap().len(), 3);

        let raw = vec![RawParameter::single("CN", "A"), RawParameter::single("cn", "B")];
        assert!(matches!(
            Parameters::decode(raw, &DecodeOptions::default()),
            Err(ParameterError::Duplicate {
                kind: ParameterKind::CommonName
            })
        ));
    }

    #[test]
    fn parameters_accessors() {
        let mut params = Parameters::decode(
            vec![
                RawParameter::single("VALUE", "DATE"),
                RawParameter::single("TZID", "Europe/Paris"),
                RawParameter::single("X-FOO", "bar"),
            ],
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(params.tzid(), Some("Europe/Paris"));
        assert_eq!(params.value_type(), Some(&ValueType::Date));
        assert_eq!(params.unknown().count(), 1);

        assert_eq!(params.take_tzid().as_deref(), Some("Europe/Paris"));
        assert_eq!(params.take_value_type(), Some(ValueType::Date));
        assert_eq!(params.len(), 1);

        params.set(Parameter::Language("de".to_string()));
        params.set(Parameter::Language("fr".to_string()));
        assert_eq!(params.language(), Some("fr"));
        params.prepend(Parameter::Encoding(Encoding::Base64));
        params.prepend(Parameter::Encoding(Encoding::Bit8));
        assert_eq!(params.iter().next(), Some(&Parameter::Encoding(Encoding::Bit8)));
        assert_eq!(params.len(), 3);
        assert_eq!(params.take_encoding(), Some(Encoding::Bit8));
    }

    #[test]
    fn encode_quotes_uri_parameters() {
        let param = Parameter::SentBy("mailto:sray@example.com".parse().unwrap());
        assert_eq!(param.encode(), quoted("SENT-BY", &["mailto:sray@example.com"]));

        let param = Parameter::Role(ParticipationRole::Chair);
        assert_eq!(param.encode(), RawParameter::single("ROLE", "CHAIR"));

        let param = Parameter::Rsvp(false);
        assert_eq!(param.encode(), RawParameter::single("RSVP", "FALSE"));
    }

    #[test]
    fn validate_parameters() {
        assert!(Parameter::CommonName("ok\nline".to_string()).validate().is_ok());
        assert!(Parameter::CommonName("bad\r".to_string()).validate().is_err());
        assert!(Parameter::Language("en us".to_string()).validate().is_err());
        assert!(
            Parameter::Role(ParticipationRole::Unknown("X-OBSERVER".to_string()))
                .validate()
                .is_ok()
        );
        assert!(
            Parameter::Role(ParticipationRole::Unknown("has space".to_string()))
                .validate()
                .is_err()
        );
        assert!(
            Parameter::Unknown(UnknownParameter {
                name: "X BAD".to_string(),
                values: vec!["v".to_string()],
            })
            .validate()
            .is_err()
        );

        let dup: Parameters = vec![
            Parameter::TzId("UTC".to_string()),
            Parameter::TzId("UTC".to_string()),
        ]
        .into();
        assert!(dup.validate().is_err());
    }
}
