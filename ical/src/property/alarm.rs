// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm Component Properties (RFC 5545 Section 3.8.6)
//!
//! - 3.8.6.1: `Action` - Alarm action type (AUDIO, DISPLAY, EMAIL, URI)
//! - 3.8.6.2: Repeat count (REPEAT), non-negative integer
//! - 3.8.6.3: `Trigger` - Alarm trigger (relative duration or absolute UTC date-time)

use crate::keyword::{
    KW_ACTION, KW_ACTION_AUDIO, KW_ACTION_DISPLAY, KW_ACTION_EMAIL, KW_ACTION_URI,
};
use crate::parameter::{AlarmTriggerRelationship, Parameter, ParameterKind, Parameters, ValueType};
use crate::property::PropertyValue;
use crate::value::{DateTime, Duration, ValueError};

define_keyword_enum! {
    /// Alarm action (RFC 5545 Section 3.8.6.1).
    enum Action {
        /// Play a sound
        Audio   => KW_ACTION_AUDIO,
        /// Display a message
        Display => KW_ACTION_DISPLAY,
        /// Send an email
        Email   => KW_ACTION_EMAIL,
        /// Open a URI
        Uri     => KW_ACTION_URI,
    }
}

keyword_property_value!(Action, KW_ACTION);

/// Alarm trigger (RFC 5545 Section 3.8.6.3)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Offset from the start or end of the enclosing component
    Relative {
        /// Offset, negative to fire before
        duration: Duration,
        /// What the offset is relative to, written as `RELATED`
        related: AlarmTriggerRelationship,
    },

    /// Fixed instant in UTC, written with `VALUE=DATE-TIME`
    Absolute(DateTime),
}

impl Trigger {
    /// A trigger relative to the start of the component.
    #[must_use]
    pub const fn before_start(duration: Duration) -> Self {
        Self::Relative {
            duration,
            related: AlarmTriggerRelationship::Start,
        }
    }
}

impl PropertyValue for Trigger {
    const MANAGED: &'static [ParameterKind] = &[ParameterKind::ValueType, ParameterKind::Related];

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let related = params.take_related();
        match params.take_value_type() {
            Some(ValueType::DateTime) => DateTime::decode(params, raw).map(Self::Absolute),
            _ => Ok(Self::Relative {
                duration: raw.parse()?,
                related: related.unwrap_or_default(),
            }),
        }
    }

    fn encode(&self, params: &mut Parameters) -> String {
        match self {
            Self::Relative { duration, related } => {
                if *related != AlarmTriggerRelationship::Start {
                    params.prepend(Parameter::Related(related.clone()));
                }
                duration.to_string()
            }
            Self::Absolute(dt) => {
                params.prepend(Parameter::ValueType(ValueType::DateTime));
                dt.to_string()
            }
        }
    }

    fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Relative { .. } => Ok(()),
            Self::Absolute(dt) => PropertyValue::validate(dt),
        }
    }
}
