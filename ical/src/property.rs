// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property module for iCalendar properties organized by RFC 5545 sections.
//!
//! A property occurrence is a [`Property<V>`]: a typed value plus the
//! parameters written next to it. The value type decides how the raw value
//! text is read and written through the [`PropertyValue`] trait, including
//! the parameters that only shape the value (`TZID`, `VALUE`, `ENCODING`,
//! `RELATED`), which are consumed on decode and regenerated on encode.
//!
//! ## Property Organization
//!
//! - 3.7. Calendar Properties (calendar.rs)
//! - 3.8.1. Descriptive Component Properties (descriptive.rs)
//! - 3.8.2. Date and Time Properties (datetime.rs)
//! - 3.8.5. Recurrence Properties (recurrence.rs)
//! - 3.8.6. Alarm Component Properties (alarm.rs)
//! - 3.8.8. Miscellaneous Properties (miscellaneous.rs)
//!
//! Plain text, URI, integer, duration and UTC offset values shared by many
//! sections live in common.rs.

#[macro_use]
mod util;

mod alarm;
mod calendar;
mod common;
mod datetime;
mod descriptive;
mod kind;
mod miscellaneous;
mod recurrence;

pub use alarm::{Action, Trigger};
pub use calendar::{CalendarScale, Method, Version};
pub use descriptive::{
    Attachment, Classification, EventStatus, Geo, JournalStatus, PercentComplete, Priority,
    TodoStatus,
};
pub use datetime::TimeTransparency;
pub use kind::PropertyKind;
pub use miscellaneous::RequestStatus;
pub use recurrence::{ExceptionDates, RecurrenceDates};

use crate::error::{DecodeError, ValidationError};
use crate::keyword::KW_TEXT;
use crate::parameter::{
    Parameter, ParameterError, ParameterKind, Parameters, TOKEN, UnknownParameter,
    unescape_param_value,
};
use crate::syntax::{ContentLine, RawParamValue, RawParameter};
use crate::tz::DecodeOptions;
use crate::value::ValueError;

/// A value type that can be carried by a property.
pub trait PropertyValue: Sized {
    /// Parameters the value derives itself, which must not be set by hand.
    const MANAGED: &'static [ParameterKind] = &[];

    /// Decode the raw value text.
    ///
    /// Parameters that shape the value are removed from `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not match the value grammar.
    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError>;

    /// Encode the value text, adding the parameters it needs to `params`.
    fn encode(&self, params: &mut Parameters) -> String;

    /// Check the value can be encoded and decoded back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), ValueError>;
}

/// A property occurrence: a typed value and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property<V> {
    /// The property value
    pub value: V,

    /// Parameters other than those derived from the value
    pub params: Parameters,
}

impl<V> Property<V> {
    /// A property without parameters.
    pub const fn new(value: V) -> Self {
        Self {
            value,
            params: Parameters::new(),
        }
    }

    /// Set a parameter.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.set(param);
        self
    }
}

impl<V> From<V> for Property<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: PropertyValue> Property<V> {
    /// Decode a content line as a property of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter or the value is invalid, or the
    /// `VALUE` parameter names a type the property does not take.
    pub fn decode(
        kind: PropertyKind,
        line: ContentLine,
        options: &DecodeOptions,
    ) -> Result<Self, DecodeError> {
        let mut params = Parameters::decode(line.params, options)?;
        check_value_type(kind, &params)?;
        let value = V::decode(&mut params, &line.value)?;
        value.validate()?;
        Ok(Self { value, params })
    }

    /// Encode as a content line named after `kind`.
    #[must_use]
    pub fn encode(&self, kind: PropertyKind) -> ContentLine {
        let mut params = self.params.clone();
        let value = self.value.encode(&mut params);
        ContentLine::new(kind.name(), value).with_params(params.encode())
    }

    /// Check the property can be written as a property of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter or the value is invalid.
    pub fn validate(&self, kind: PropertyKind) -> Result<(), ValidationError> {
        if let Some(managed) = V::MANAGED.iter().find(|k| self.params.get(**k).is_some()) {
            return Err(ParameterError::Managed { kind: *managed }.into());
        }
        check_value_type(kind, &self.params)?;
        self.params.validate()?;
        self.value.validate()?;
        Ok(())
    }
}

fn check_value_type(kind: PropertyKind, params: &Parameters) -> Result<(), ValueError> {
    match params.value_type() {
        Some(found) if !kind.accepts(found) => Err(ValueError::UnsupportedType {
            found: found.to_string(),
            expected: kind.value_types(),
        }),
        _ => Ok(()),
    }
}

/// A property this crate does not interpret, kept for round-tripping.
///
/// X-name and IANA properties unknown to this crate, as well as known
/// properties appearing in a component that does not define them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProperty {
    /// Property name, uppercased
    pub name: String,

    /// Parameters, values unescaped
    pub params: Vec<UnknownParameter>,

    /// Raw value, escapes untouched
    pub value: String,
}

impl UnknownProperty {
    /// Create a property without parameters.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Encode as a content line.
    #[must_use]
    pub fn encode(&self) -> ContentLine {
        let params = self
            .params
            .iter()
            .map(|p| RawParameter {
                name: p.name.clone(),
                values: p
                    .values
                    .iter()
                    .map(|v| RawParamValue {
                        value: v.clone(),
                        quoted: false,
                    })
                    .collect(),
            })
            .collect();
        ContentLine::new(self.name.clone(), self.value.clone()).with_params(params)
    }

    /// Check the property can be written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid iCalendar name, a
    /// parameter is invalid, or the value contains a control character.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !TOKEN.is_match(&self.name) {
            return Err(ValidationError::InvalidName(self.name.clone()));
        }
        for param in &self.params {
            Parameter::Unknown(param.clone()).validate()?;
        }
        match self.value.chars().find(|c| c.is_control() && *c != '\t') {
            Some(c) => Err(ValueError::invalid(
                KW_TEXT,
                format!("control character {c:?} in raw value"),
            )
            .into()),
            None => Ok(()),
        }
    }
}

impl From<ContentLine> for UnknownProperty {
    fn from(line: ContentLine) -> Self {
        let params = line
            .params
            .into_iter()
            .map(|p| UnknownParameter {
                name: p.name,
                values: p
                    .values
                    .iter()
                    .map(|v| unescape_param_value(&v.value).into_owned())
                    .collect(),
            })
            .collect();

        Self {
            name: line.name,
            params,
            value: line.value,
        }
    }
}
