// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type as defined in RFC 5545 Section 3.3.6.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;

use crate::keyword::KW_DURATION_TYPE;
use crate::value::{Extra, ValueError, digits, parse_full};

/// Duration Value defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl Duration {
    /// A positive duration of whole seconds, split into days, hours, minutes
    /// and seconds.
    #[must_use]
    pub fn from_seconds(positive: bool, seconds: u64) -> Self {
        let day = seconds / 86_400;
        let rest = seconds % 86_400;
        Self::DateTime {
            positive,
            day: u32::try_from(day).unwrap_or(u32::MAX),
            hour: u32::try_from(rest / 3600).unwrap_or(0),
            minute: u32::try_from(rest % 3600 / 60).unwrap_or(0),
            second: u32::try_from(rest % 60).unwrap_or(0),
        }
    }

    /// Whether the duration is positive.
    ///
    /// Note that a zero duration is positive unless it was written as `-P...`.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        match self {
            Self::DateTime { positive, .. } | Self::Week { positive, .. } => *positive,
        }
    }

    /// Whether the duration spans no time at all.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude_seconds() == 0
    }

    /// Absolute length in seconds.
    #[must_use]
    pub fn magnitude_seconds(&self) -> i64 {
        match *self {
            Self::Week { week, .. } => i64::from(week) * 7 * 86_400,
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                i64::from(day) * 86_400
                    + i64::from(hour) * 3600
                    + i64::from(minute) * 60
                    + i64::from(second)
            }
        }
    }

    /// Signed length in seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let magnitude = self.magnitude_seconds();
        if self.is_positive() { magnitude } else { -magnitude }
    }

    /// Convert to `jiff::SignedDuration`.
    ///
    /// Days and weeks are taken as exact multiples of 24 hours.
    #[must_use]
    pub fn to_signed_duration(&self) -> jiff::SignedDuration {
        jiff::SignedDuration::from_secs(self.as_seconds())
    }

    /// Convert to a `jiff::Span` with nominal days and weeks, so adding it to
    /// a zoned time respects DST transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if a unit is out of jiff's range.
    pub fn to_span(&self) -> Result<jiff::Span, jiff::Error> {
        let span = match *self {
            Self::Week { week, .. } => jiff::Span::new().try_weeks(i64::from(week))?,
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => jiff::Span::new()
                .try_days(i64::from(day))?
                .try_hours(i64::from(hour))?
                .try_minutes(i64::from(minute))?
                .try_seconds(i64::from(second))?,
        };
        Ok(if self.is_positive() { span } else { span.negate() })
    }
}

impl FromStr for Duration {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(duration(), KW_DURATION_TYPE, s)
    }
}

impl fmt::Display for Duration {
    /// Zero components are omitted; a zero duration is written `PT0S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        match *self {
            Self::Week { week, .. } => write!(f, "{week}W"),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                if day == 0 && hour == 0 && minute == 0 && second == 0 {
                    return f.write_str("T0S");
                }
                if day > 0 {
                    write!(f, "{day}D")?;
                }
                if hour > 0 || minute > 0 || second > 0 {
                    f.write_str("T")?;
                    if hour > 0 {
                        write!(f, "{hour}H")?;
                    }
                    if minute > 0 {
                        write!(f, "{minute}M")?;
                    }
                    if second > 0 {
                        write!(f, "{second}S")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
///
/// Any non-empty subset of hour, minute and second is accepted after `T`, in
/// that order.
pub(crate) fn duration<'src>() -> impl Parser<'src, &'src str, Duration, Extra<'src>> + Clone {
    let part = |designator: char| digits::<u32>().then_ignore(just(designator));

    let time = just('T')
        .ignore_then(
            part('H')
                .or_not()
                .then(part('M').or_not())
                .then(part('S').or_not()),
        )
        .try_map_with(|((hour, minute), second), e| {
            if hour.is_none() && minute.is_none() && second.is_none() {
                return Err(Rich::custom(e.span(), "empty time part"));
            }
            Ok((
                hour.unwrap_or(0),
                minute.unwrap_or(0),
                second.unwrap_or(0),
            ))
        });

    let date = part('D')
        .then(time.clone().or_not())
        .map(|(day, time)| (day, time.unwrap_or((0, 0, 0))));
    let body = choice((
        part('W').map(|week| Duration::Week {
            positive: true,
            week,
        }),
        date.or(time.map(|time| (0, time)))
            .map(|(day, (hour, minute, second))| Duration::DateTime {
                positive: true,
                day,
                hour,
                minute,
                second,
            }),
    ));

    let sign = one_of("+-").or_not().map(|sign| sign != Some('-'));
    sign.then_ignore(just('P'))
        .then(body)
        .map(|(sign, mut duration)| {
            match &mut duration {
                Duration::DateTime { positive, .. } | Duration::Week { positive, .. } => {
                    *positive = sign;
                }
            }
            duration
        })
}
