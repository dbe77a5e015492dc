// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule value as defined in RFC 5545 Section 3.3.10.
//!
//! The rule is kept as data only; nothing here expands it into occurrences.

use std::fmt::{self, Display};
use std::str::FromStr;

use chumsky::prelude::*;

use crate::keyword::{
    KW_RECUR, KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH,
    KW_RRULE_BYMONTHDAY, KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO,
    KW_RRULE_BYYEARDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
    KW_RRULE_WKST,
};
use crate::value::numeric::integer;
use crate::value::{DateOrDateTime, Extra, ValueError, digits, parse_full};

/// Recurrence rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    /// Frequency of recurrence
    pub freq: Frequency,
    /// Until date for recurrence
    pub until: Option<DateOrDateTime>,
    /// Number of occurrences
    pub count: Option<u32>,
    /// Interval between recurrences
    pub interval: Option<u32>,
    /// Second specifier, 0-60
    pub by_second: Vec<u8>,
    /// Minute specifier, 0-59
    pub by_minute: Vec<u8>,
    /// Hour specifier, 0-23
    pub by_hour: Vec<u8>,
    /// Day of week specifier
    pub by_day: Vec<WeekDayNum>,
    /// Day of month specifier, ±1-31
    pub by_month_day: Vec<i8>,
    /// Day of year specifier, ±1-366
    pub by_year_day: Vec<i16>,
    /// Week number specifier, ±1-53
    pub by_week_no: Vec<i8>,
    /// Month specifier, 1-12
    pub by_month: Vec<u8>,
    /// Position in the set of occurrences, ±1-366
    pub by_set_pos: Vec<i16>,
    /// Start day of week
    pub wkst: Option<WeekDay>,
}

impl RecurrenceRule {
    /// Create a rule with only a frequency.
    #[must_use]
    pub fn new(freq: Frequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            wkst: None,
        }
    }

    /// Check the ranges of every part, and that COUNT and UNTIL do not
    /// appear together.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.count.is_some() && self.until.is_some() {
            return Err(ValueError::invalid(
                KW_RECUR,
                "COUNT and UNTIL are mutually exclusive",
            ));
        }
        if self.count == Some(0) {
            return Err(ValueError::invalid(KW_RECUR, "COUNT must be positive"));
        }
        if self.interval == Some(0) {
            return Err(ValueError::invalid(KW_RECUR, "INTERVAL must be positive"));
        }
        if let Some(until) = &self.until {
            until.validate()?;
        }

        check_unsigned(KW_RRULE_BYSECOND, &self.by_second, 0, 60)?;
        check_unsigned(KW_RRULE_BYMINUTE, &self.by_minute, 0, 59)?;
        check_unsigned(KW_RRULE_BYHOUR, &self.by_hour, 0, 23)?;
        check_signed(KW_RRULE_BYMONTHDAY, &self.by_month_day, 31)?;
        check_signed(KW_RRULE_BYYEARDAY, &self.by_year_day, 366)?;
        check_signed(KW_RRULE_BYWEEKNO, &self.by_week_no, 53)?;
        check_unsigned(KW_RRULE_BYMONTH, &self.by_month, 1, 12)?;
        check_signed(KW_RRULE_BYSETPOS, &self.by_set_pos, 366)?;
        let ordinals: Vec<i8> = self.by_day.iter().filter_map(|d| d.ordinal).collect();
        check_signed(KW_RRULE_BYDAY, &ordinals, 53)?;
        Ok(())
    }
}

fn check_unsigned(part: &str, values: &[u8], min: u8, max: u8) -> Result<(), ValueError> {
    match values.iter().find(|v| !(min..=max).contains(*v)) {
        Some(v) => Err(ValueError::invalid(
            KW_RECUR,
            format!("{part} value {v} is out of range {min}..={max}"),
        )),
        None => Ok(()),
    }
}

fn check_signed<T>(part: &str, values: &[T], max: i16) -> Result<(), ValueError>
where
    T: Copy + Into<i16> + Display,
{
    match values.iter().find(|v| {
        let v: i16 = (**v).into();
        v == 0 || v.unsigned_abs() > max.unsigned_abs()
    }) {
        Some(v) => Err(ValueError::invalid(
            KW_RECUR,
            format!("{part} value {v} is out of range ±1..={max}"),
        )),
        None => Ok(()),
    }
}

impl FromStr for RecurrenceRule {
    type Err = ValueError;

    /// Parse `KEY=VALUE` parts separated by `;`, case-insensitively.
    ///
    /// FREQ is required but may appear in any position. Unknown or repeated
    /// parts are errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let mut freq = None;
        let mut rule = Self::new(Frequency::Yearly);
        let mut seen: Vec<&str> = Vec::new();

        for part in upper.split(';').filter(|part| !part.is_empty()) {
            let Some((key, value)) = part.split_once('=') else {
                return Err(ValueError::Syntax {
                    kind: KW_RECUR,
                    value: s.to_string(),
                    reason: format!("rule part {part:?} has no '='"),
                });
            };
            if seen.contains(&key) {
                return Err(ValueError::invalid(
                    KW_RECUR,
                    format!("rule part {key} appears more than once"),
                ));
            }
            seen.push(key);

            match key {
                KW_RRULE_FREQ => {
                    freq = Some(value.parse::<Frequency>().map_err(|_| ValueError::UnknownKeyword {
                        kind: KW_RRULE_FREQ,
                        value: value.to_string(),
                    })?);
                }
                KW_RRULE_UNTIL => rule.until = Some(value.parse()?),
                KW_RRULE_COUNT => rule.count = Some(parse_full(digits(), KW_RRULE_COUNT, value)?),
                KW_RRULE_INTERVAL => {
                    rule.interval = Some(parse_full(digits(), KW_RRULE_INTERVAL, value)?);
                }
                KW_RRULE_BYSECOND => rule.by_second = number_list(KW_RRULE_BYSECOND, value)?,
                KW_RRULE_BYMINUTE => rule.by_minute = number_list(KW_RRULE_BYMINUTE, value)?,
                KW_RRULE_BYHOUR => rule.by_hour = number_list(KW_RRULE_BYHOUR, value)?,
                KW_RRULE_BYDAY => {
                    rule.by_day = parse_full(
                        week_day_num().separated_by(just(',')).at_least(1).collect(),
                        KW_RRULE_BYDAY,
                        value,
                    )?;
                }
                KW_RRULE_BYMONTHDAY => {
                    rule.by_month_day = number_list(KW_RRULE_BYMONTHDAY, value)?;
                }
                KW_RRULE_BYYEARDAY => rule.by_year_day = number_list(KW_RRULE_BYYEARDAY, value)?,
                KW_RRULE_BYWEEKNO => rule.by_week_no = number_list(KW_RRULE_BYWEEKNO, value)?,
                KW_RRULE_BYMONTH => rule.by_month = number_list(KW_RRULE_BYMONTH, value)?,
                KW_RRULE_BYSETPOS => rule.by_set_pos = number_list(KW_RRULE_BYSETPOS, value)?,
                KW_RRULE_WKST => rule.wkst = Some(parse_full(week_day(), KW_RRULE_WKST, value)?),
                _ => {
                    return Err(ValueError::invalid(
                        KW_RECUR,
                        format!("unknown rule part {key}"),
                    ));
                }
            }
        }

        rule.freq = freq.ok_or_else(|| ValueError::invalid(KW_RECUR, "FREQ is required"))?;
        rule.validate()?;
        Ok(rule)
    }
}

impl Display for RecurrenceRule {
    /// Parts are written in a fixed order, starting with FREQ.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KW_RRULE_FREQ}={}", self.freq)?;
        if let Some(until) = &self.until {
            write!(f, ";{KW_RRULE_UNTIL}={until}")?;
        }
        if let Some(count) = self.count {
            write!(f, ";{KW_RRULE_COUNT}={count}")?;
        }
        if let Some(interval) = self.interval {
            write!(f, ";{KW_RRULE_INTERVAL}={interval}")?;
        }
        write_list(f, KW_RRULE_BYSECOND, &self.by_second)?;
        write_list(f, KW_RRULE_BYMINUTE, &self.by_minute)?;
        write_list(f, KW_RRULE_BYHOUR, &self.by_hour)?;
        write_list(f, KW_RRULE_BYDAY, &self.by_day)?;
        write_list(f, KW_RRULE_BYMONTHDAY, &self.by_month_day)?;
        write_list(f, KW_RRULE_BYYEARDAY, &self.by_year_day)?;
        write_list(f, KW_RRULE_BYWEEKNO, &self.by_week_no)?;
        write_list(f, KW_RRULE_BYMONTH, &self.by_month)?;
        write_list(f, KW_RRULE_BYSETPOS, &self.by_set_pos)?;
        if let Some(wkst) = self.wkst {
            write!(f, ";{KW_RRULE_WKST}={wkst}")?;
        }
        Ok(())
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, part: &str, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i == 0 {
            write!(f, ";{part}={v}")?;
        } else {
            write!(f, ",{v}")?;
        }
    }
    Ok(())
}

/// Recurrence frequency
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr,
)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

impl From<WeekDay> for jiff::civil::Weekday {
    fn from(value: WeekDay) -> Self {
        match value {
            WeekDay::Sunday => Self::Sunday,
            WeekDay::Monday => Self::Monday,
            WeekDay::Tuesday => Self::Tuesday,
            WeekDay::Wednesday => Self::Wednesday,
            WeekDay::Thursday => Self::Thursday,
            WeekDay::Friday => Self::Friday,
            WeekDay::Saturday => Self::Saturday,
        }
    }
}

impl From<jiff::civil::Weekday> for WeekDay {
    fn from(value: jiff::civil::Weekday) -> Self {
        match value {
            jiff::civil::Weekday::Sunday => Self::Sunday,
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
        }
    }
}

/// Day of week with optional ordinal, e.g. `-1SU` or `MO`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Occurrence within the month or year, ±1-53
    pub ordinal: Option<i8>,
    /// Day of the week
    pub weekday: WeekDay,
}

impl WeekDayNum {
    /// Every occurrence of `weekday`.
    #[must_use]
    pub const fn every(weekday: WeekDay) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// The `ordinal`th occurrence of `weekday`; negative counts from the end.
    #[must_use]
    pub const fn nth(ordinal: i8, weekday: WeekDay) -> Self {
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// A comma-separated list of signed integers, each converted to `T`.
fn number_list<T>(part: &'static str, raw: &str) -> Result<Vec<T>, ValueError>
where
    T: TryFrom<i32>,
{
    let numbers: Vec<i32> = parse_full(
        integer().separated_by(just(',')).at_least(1).collect(),
        part,
        raw,
    )?;
    numbers
        .into_iter()
        .map(|n| {
            T::try_from(n)
                .map_err(|_| ValueError::invalid(KW_RECUR, format!("{part} value {n} is out of range")))
        })
        .collect()
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn week_day<'src>() -> impl Parser<'src, &'src str, WeekDay, Extra<'src>> + Clone {
    any()
        .repeated()
        .exactly(2)
        .to_slice()
        .try_map_with(|s: &str, e| {
            s.parse::<WeekDay>()
                .map_err(|_| Rich::custom(e.span(), format!("unknown weekday {s:?}")))
        })
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ordwk       = 1*2DIGIT       ;1 to 53
/// ```
fn week_day_num<'src>() -> impl Parser<'src, &'src str, WeekDayNum, Extra<'src>> + Clone {
    one_of("+-")
        .or_not()
        .then(digits::<i8>())
        .map(|(sign, n)| if sign == Some('-') { -n } else { n })
        .or_not()
        .then(week_day())
        .map(|(ordinal, weekday)| WeekDayNum { ordinal, weekday })
}
