// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding, validating and encoding calendars.
//!
//! Errors raised inside a component or a property are wrapped in
//! breadcrumb variants, so a failure deep in the tree renders as
//! `VCALENDAR → VEVENT → ORGANIZER: ...`. Use [`DecodeError::root`] to get
//! at the underlying cause and [`DecodeError::path`] for the breadcrumb.

use std::io;

use crate::parameter::ParameterError;
use crate::property::PropertyKind;
use crate::syntax::{LexError, PhraseError};
use crate::value::ValueError;

/// A cross-field rule of a component that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleViolation {
    /// Two properties that must not both be present.
    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusive {
        /// Property that was set first in the fixed order
        first: PropertyKind,
        /// Property that conflicts with it
        second: PropertyKind,
    },

    /// A property that is only meaningful together with another one.
    #[error("{property} requires {required}")]
    Requires {
        /// The property present
        property: PropertyKind,
        /// The property it depends on
        required: PropertyKind,
    },

    /// Two properties that must either both be present or both be absent.
    #[error("{first} and {second} must be set together")]
    Paired {
        /// One of the pair
        first: PropertyKind,
        /// The other one
        second: PropertyKind,
    },

    /// A repeatable property that must occur at least once.
    #[error("at least one {0} is required")]
    AtLeastOne(PropertyKind),

    /// VTIMEZONE without STANDARD or DAYLIGHT.
    #[error("VTIMEZONE needs at least one STANDARD or DAYLIGHT component")]
    NoObservance,
}

/// Errors produced while decoding a calendar.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Lexical or structural error in a content line.
    #[error(transparent)]
    Syntax(#[from] PhraseError),

    /// A parameter that cannot be decoded.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// A property value that cannot be decoded.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// An at-most-once property given twice.
    #[error("duplicate property {0}")]
    DuplicateProperty(PropertyKind),

    /// A required property absent at the end of its component.
    #[error("missing required property {0}")]
    MissingProperty(PropertyKind),

    /// `END` that does not close the open component.
    #[error("expected END:{expected}, found END:{found}")]
    InvalidEnd {
        /// Name of the open component
        expected: String,
        /// Name found on the END line
        found: String,
    },

    /// The stream does not start with `BEGIN:VCALENDAR`.
    #[error("expected BEGIN:VCALENDAR, found {found}")]
    NotCalendar {
        /// The first content line, abbreviated to its name and value
        found: String,
    },

    /// A cross-field rule is violated.
    #[error(transparent)]
    RequirementNotMet(#[from] RuleViolation),

    /// Input ended before the open component was closed.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Error inside a component.
    #[error("{name} → {source}")]
    Component {
        /// Component name, e.g. "VEVENT"
        name: &'static str,
        /// What went wrong inside it
        source: Box<DecodeError>,
    },

    /// Error inside a property.
    #[error("{name}: {source}")]
    Property {
        /// Property name, e.g. "DTSTART"
        name: &'static str,
        /// What went wrong inside it
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// The innermost error, without breadcrumbs.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut err = self;
        while let Self::Component { source, .. } | Self::Property { source, .. } = err {
            err = source;
        }
        err
    }

    /// Names of the components and property enclosing the error, outermost
    /// first.
    #[must_use]
    pub fn path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut err = self;
        while let Self::Component { name, source } | Self::Property { name, source } = err {
            path.push(*name);
            err = source;
        }
        path
    }

    /// Whether decoding failed because the input ended too early.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(
            self.root(),
            Self::UnexpectedEof | Self::Syntax(PhraseError::Lex(LexError::UnexpectedEof))
        )
    }
}

/// A calendar that cannot be written as is.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// An invalid parameter.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// An invalid property value.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A cross-field rule is violated.
    #[error(transparent)]
    RequirementNotMet(#[from] RuleViolation),

    /// A property name that is not a valid iCalendar name.
    #[error("invalid property name {0:?}")]
    InvalidName(String),

    /// Error inside a component.
    #[error("{name} → {source}")]
    Component {
        /// Component name, e.g. "VEVENT"
        name: &'static str,
        /// What is wrong inside it
        source: Box<ValidationError>,
    },

    /// Error inside a property.
    #[error("{name}: {source}")]
    Property {
        /// Property name, e.g. "DTSTART"
        name: String,
        /// What is wrong inside it
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// The innermost error, without breadcrumbs.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut err = self;
        while let Self::Component { source, .. } | Self::Property { source, .. } = err {
            err = source;
        }
        err
    }

    /// Names of the components and property enclosing the error, outermost
    /// first.
    #[must_use]
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut err = self;
        loop {
            match err {
                Self::Component { name, source } => {
                    path.push(*name);
                    err = source;
                }
                Self::Property { name, source } => {
                    path.push(name.as_str());
                    err = source;
                }
                _ => return path,
            }
        }
    }
}

/// Errors produced while encoding a calendar.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The calendar failed validation; nothing was written.
    #[error("invalid calendar: {0}")]
    Invalid(#[from] ValidationError),

    /// Writing to the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
