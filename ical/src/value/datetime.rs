// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date, time and UTC offset values as defined in RFC 5545 Sections 3.3.4,
//! 3.3.5, 3.3.12 and 3.3.14.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;

use crate::keyword::{KW_DATE, KW_DATETIME, KW_TIME, KW_UTC_OFFSET};
use crate::tz::{TzError, TzResolver};
use crate::value::{Extra, ValueError, fixed_digits, parse_full};

/// Date value defined in RFC 5545 Section 3.3.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    /// Year component, 0-9999.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl Date {
    /// Create a date without checking it.
    #[must_use]
    pub const fn new(year: i16, month: i8, day: i8) -> Self {
        Self { year, month, day }
    }

    /// Convert to `jiff::civil::Date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist.
    pub fn civil(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.year, self.month, self.day)
    }

    /// Check that the date exists in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns an error for an impossible date, including the zero date.
    pub fn validate(&self) -> Result<(), ValueError> {
        self.check().map_err(|reason| ValueError::invalid(KW_DATE, reason))
    }

    fn check(self) -> Result<(), String> {
        if !(0..=9999).contains(&self.year) {
            return Err(format!("year {} is not a 4-digit year", self.year));
        }
        if self.civil().is_err() {
            return Err(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            ));
        }
        Ok(())
    }
}

impl FromStr for Date {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(date(), KW_DATE, s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl From<jiff::civil::Date> for Date {
    fn from(value: jiff::civil::Date) -> Self {
        Self::new(value.year(), value.month(), value.day())
    }
}

/// Time value defined in RFC 5545 Section 3.3.12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    /// Hour component, 0-23.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: u8,

    /// Second component, 0-60 (60 for leap second).
    pub second: u8,
}

impl Time {
    /// Create a time without checking it.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Convert to `jiff::civil::Time`; a leap second is clamped to 59.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn civil(self) -> jiff::civil::Time {
        jiff::civil::time(
            self.hour.min(23) as i8,
            self.minute.min(59) as i8,
            self.second.min(59) as i8,
            0,
        )
    }

    /// Check the field ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is out of range.
    pub fn validate(&self) -> Result<(), ValueError> {
        self.check().map_err(|reason| ValueError::invalid(KW_TIME, reason))
    }

    fn check(self) -> Result<(), String> {
        if self.hour > 23 {
            Err(format!("hour {} is out of range 0..=23", self.hour))
        } else if self.minute > 59 {
            Err(format!("minute {} is out of range 0..=59", self.minute))
        } else if self.second > 60 {
            Err(format!("second {} is out of range 0..=60", self.second))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)
    }
}

/// How a date-time relates to UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    /// No zone: the time is the same wall-clock time wherever it is read.
    #[default]
    Floating,

    /// UTC, written with a trailing `Z`.
    Utc,

    /// Local time in the named zone, written with a `TZID` parameter.
    Tz(String),
}

/// Date-Time value defined in RFC 5545 Section 3.3.5.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Date component.
    pub date: Date,

    /// Time component.
    pub time: Time,

    /// Zone the wall-clock time is expressed in.
    pub zone: Zone,
}

impl DateTime {
    /// Create a floating date-time.
    #[must_use]
    pub const fn floating(date: Date, time: Time) -> Self {
        Self {
            date,
            time,
            zone: Zone::Floating,
        }
    }

    /// Create a UTC date-time.
    #[must_use]
    pub const fn utc(date: Date, time: Time) -> Self {
        Self {
            date,
            time,
            zone: Zone::Utc,
        }
    }

    /// Create a date-time local to the zone `tzid`.
    #[must_use]
    pub fn zoned(date: Date, time: Time, tzid: impl Into<String>) -> Self {
        Self {
            date,
            time,
            zone: Zone::Tz(tzid.into()),
        }
    }

    /// Whether the value is in UTC.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.zone == Zone::Utc
    }

    /// The `TZID` this value refers to, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.zone {
            Zone::Tz(tzid) => Some(tzid),
            Zone::Floating | Zone::Utc => None,
        }
    }

    /// Convert to `jiff::civil::DateTime`, ignoring the zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist.
    pub fn civil(&self) -> Result<jiff::civil::DateTime, jiff::Error> {
        Ok(self.date.civil()?.to_datetime(self.time.civil()))
    }

    /// Resolve into an instant.
    ///
    /// Floating times are read in the system time zone; `TZID` references are
    /// looked up through `resolver`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is invalid or the zone cannot be resolved.
    pub fn to_zoned(&self, resolver: &dyn TzResolver) -> Result<jiff::Zoned, TzError> {
        let civil = self.civil().map_err(TzError::Jiff)?;
        let tz = match &self.zone {
            Zone::Utc => jiff::tz::TimeZone::UTC,
            Zone::Floating => jiff::tz::TimeZone::system(),
            Zone::Tz(tzid) => resolver.resolve(tzid)?,
        };
        civil.to_zoned(tz).map_err(TzError::Jiff)
    }

    /// Check the date and time fields.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is invalid.
    pub fn validate(&self) -> Result<(), ValueError> {
        self.check()
            .map_err(|reason| ValueError::invalid(KW_DATETIME, reason))
    }

    fn check(&self) -> Result<(), String> {
        self.date.check()?;
        self.time.check()?;
        if let Zone::Tz(tzid) = &self.zone
            && tzid.is_empty()
        {
            return Err("empty TZID".to_string());
        }
        Ok(())
    }

    /// Position on the wall clock, for ordering values in the same zone.
    pub(crate) fn wall_clock(&self) -> (Date, Time) {
        (self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = ValueError;

    /// Parse `YYYYMMDDTHHMMSS[Z]`; the result is UTC or floating.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(date_time(), KW_DATETIME, s)
    }
}

impl fmt::Display for DateTime {
    /// Wire form; a `TZID` is carried by a parameter, not by the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if self.is_utc() {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

/// A value that is either a DATE or a DATE-TIME (e.g. DTSTART, EXDATE).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateOrDateTime {
    /// Whole-day value, written with `VALUE=DATE`.
    Date(Date),

    /// Date with time of day.
    DateTime(DateTime),
}

impl DateOrDateTime {
    /// The date part.
    #[must_use]
    pub fn date(&self) -> Date {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date,
        }
    }

    /// The date-time, if this is not a whole-day value.
    #[must_use]
    pub fn as_date_time(&self) -> Option<&DateTime> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(dt) => Some(dt),
        }
    }

    /// Check the contained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or date-time is invalid.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Date(date) => date.validate(),
            Self::DateTime(dt) => dt.validate(),
        }
    }
}

impl From<Date> for DateOrDateTime {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for DateOrDateTime {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl FromStr for DateOrDateTime {
    type Err = ValueError;

    /// Parse either form, telling them apart by the `T` separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(date_or_date_time(), KW_DATETIME, s)
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => fmt::Display::fmt(date, f),
            Self::DateTime(dt) => fmt::Display::fmt(dt, f),
        }
    }
}

/// UTC Offset Value defined in RFC 5545 Section 3.3.14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Whether the offset is positive
    pub positive: bool,

    /// Hour, 0-23
    pub hour: u8,

    /// Minute, 0-59
    pub minute: u8,

    /// Second, 0-59, optional
    pub second: Option<u8>,
}

impl UtcOffset {
    /// Create an `[+-]HHMM` offset.
    #[must_use]
    pub const fn new(positive: bool, hour: u8, minute: u8) -> Self {
        Self {
            positive,
            hour,
            minute,
            second: None,
        }
    }

    /// Signed offset in seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i32 {
        let magnitude = i32::from(self.hour) * 3600
            + i32::from(self.minute) * 60
            + i32::from(self.second.unwrap_or(0));
        if self.positive { magnitude } else { -magnitude }
    }

    /// Convert to `jiff::tz::Offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is out of jiff's supported range.
    pub fn to_offset(&self) -> Result<jiff::tz::Offset, jiff::Error> {
        jiff::tz::Offset::from_seconds(self.as_seconds())
    }

    /// Check the field ranges and reject `-0000`.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is out of range or the offset is a
    /// negative zero.
    pub fn validate(&self) -> Result<(), ValueError> {
        self.check()
            .map_err(|reason| ValueError::invalid(KW_UTC_OFFSET, reason))
    }

    fn check(self) -> Result<(), String> {
        if self.hour > 23 {
            return Err(format!("hour {} is out of range 0..=23", self.hour));
        }
        if self.minute > 59 {
            return Err(format!("minute {} is out of range 0..=59", self.minute));
        }
        if let Some(second) = self.second
            && second > 59
        {
            return Err(format!("second {second} is out of range 0..=59"));
        }
        if !self.positive && self.as_seconds() == 0 {
            return Err("negative zero offset".to_string());
        }
        Ok(())
    }
}

impl FromStr for UtcOffset {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_full(utc_offset(), KW_UTC_OFFSET, s)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{sign}{:02}{:02}", self.hour, self.minute)?;
        if let Some(second) = self.second {
            write!(f, "{second:02}")?;
        }
        Ok(())
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
pub(crate) fn date<'src>() -> impl Parser<'src, &'src str, Date, Extra<'src>> + Clone {
    fixed_digits::<i16>(4)
        .then(fixed_digits::<i8>(2))
        .then(fixed_digits::<i8>(2))
        .try_map_with(|((year, month), day), e| {
            let date = Date { year, month, day };
            date.check()
                .map(|()| date)
                .map_err(|reason| Rich::custom(e.span(), reason))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// ;The "60" value is used to account for positive "leap" seconds.
///
/// time-utc     = "Z"
/// ```
fn time<'src>() -> impl Parser<'src, &'src str, Time, Extra<'src>> + Clone {
    fixed_digits::<u8>(2)
        .then(fixed_digits::<u8>(2))
        .then(fixed_digits::<u8>(2))
        .try_map_with(|((hour, minute), second), e| {
            let time = Time::new(hour, minute, second);
            time.check()
                .map(|()| time)
                .map_err(|reason| Rich::custom(e.span(), reason))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
/// ```
pub(crate) fn date_time<'src>() -> impl Parser<'src, &'src str, DateTime, Extra<'src>> + Clone {
    date()
        .then_ignore(just('T'))
        .then(time())
        .then(just('Z').or_not())
        .map(|((date, time), utc)| DateTime {
            date,
            time,
            zone: if utc.is_some() {
                Zone::Utc
            } else {
                Zone::Floating
            },
        })
}

fn date_or_date_time<'src>() -> impl Parser<'src, &'src str, DateOrDateTime, Extra<'src>> + Clone {
    choice((
        date_time().map(DateOrDateTime::DateTime),
        date().map(DateOrDateTime::Date),
    ))
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// utc-offset = time-numzone
///
/// time-numzone = ("+" / "-") time-hour time-minute [time-second]
/// ```
fn utc_offset<'src>() -> impl Parser<'src, &'src str, UtcOffset, Extra<'src>> + Clone {
    one_of("+-")
        .then(fixed_digits::<u8>(2))
        .then(fixed_digits::<u8>(2))
        .then(fixed_digits::<u8>(2).or_not())
        .try_map_with(|(((sign, hour), minute), second), e| {
            let offset = UtcOffset {
                positive: sign == '+',
                hour,
                minute,
                second,
            };
            offset
                .check()
                .map(|()| offset)
                .map_err(|reason| Rich::custom(e.span(), reason))
        })
}
