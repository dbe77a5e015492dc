// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period value type as defined in RFC 5545 Section 3.3.9.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;

use crate::keyword::KW_PERIOD;
use crate::value::{
    DateTime, Duration, Extra, ValueError, Zone, date_time, duration, parse_full,
};

/// Period of Time value defined in RFC 5545 Section 3.3.9
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    /// Start date-time
    pub start: DateTime,

    /// Where the period ends
    pub end: PeriodEnd,
}

/// The second half of a period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PeriodEnd {
    /// Explicit end, `date-time "/" date-time`
    DateTime(DateTime),

    /// Length from the start, `date-time "/" dur-value`
    Duration(Duration),
}

impl Period {
    /// Create a period with an explicit end.
    #[must_use]
    pub fn explicit(start: DateTime, end: DateTime) -> Self {
        Self {
            start,
            end: PeriodEnd::DateTime(end),
        }
    }

    /// Create a period with a start and a duration.
    #[must_use]
    pub fn with_duration(start: DateTime, duration: Duration) -> Self {
        Self {
            start,
            end: PeriodEnd::Duration(duration),
        }
    }

    /// Move both ends of the period into the zone named by `tzid`.
    pub(crate) fn set_tzid(&mut self, tzid: &str) {
        self.start.zone = Zone::Tz(tzid.to_string());
        if let PeriodEnd::DateTime(end) = &mut self.end {
            end.zone = Zone::Tz(tzid.to_string());
        }
    }

    /// Check the start and end.
    ///
    /// The end must share the start's zone and lie after it; a duration must
    /// be positive and non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ValueError> {
        self.start.validate()?;
        match &self.end {
            PeriodEnd::DateTime(end) => {
                end.validate()?;
                if end.zone != self.start.zone {
                    return Err(ValueError::invalid(
                        KW_PERIOD,
                        "start and end are in different zones",
                    ));
                }
                if end.wall_clock() <= self.start.wall_clock() {
                    return Err(ValueError::invalid(
                        KW_PERIOD,
                        format!("end {end} is not after start {}", self.start),
                    ));
                }
            }
            PeriodEnd::Duration(duration) => {
                if !duration.is_positive() || duration.is_zero() {
                    return Err(ValueError::invalid(
                        KW_PERIOD,
                        format!("duration {duration} is not positive"),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(period(), KW_PERIOD, s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.start)?;
        match &self.end {
            PeriodEnd::DateTime(end) => fmt::Display::fmt(end, f),
            PeriodEnd::Duration(duration) => fmt::Display::fmt(duration, f),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and end.  The start MUST
/// ; be before the end.
///
/// period-start = date-time "/" dur-value
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and positive duration
/// ; of time.
/// ```
fn period<'src>() -> impl Parser<'src, &'src str, Period, Extra<'src>> + Clone {
    date_time()
        .then_ignore(just('/'))
        .then(choice((
            duration().map(PeriodEnd::Duration),
            date_time().map(PeriodEnd::DateTime),
        )))
        .map(|(start, end)| Period { start, end })
}
