// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence Component Properties (RFC 5545 Section 3.8.5)
//!
//! - 3.8.5.1: `ExceptionDates` - Exception date-times (EXDATE)
//! - 3.8.5.2: `RecurrenceDates` - Recurrence date-times (RDATE)
//! - 3.8.5.3: `RecurrenceRule` - Recurrence rule (RRULE)
//!
//! A list property carries a single `TZID` parameter, so every value of
//! one occurrence lives in the same zone.

use crate::keyword::{KW_DATE, KW_DATETIME, KW_PERIOD};
use crate::parameter::{Parameter, ParameterKind, Parameters, ValueType};
use crate::property::PropertyValue;
use crate::property::util::{check_same_zone, decode_list, encode_list};
use crate::value::{Date, DateTime, Period, RecurrenceRule, ValueError, Zone};

/// Recurrence dates (RFC 5545 Section 3.8.5.2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceDates {
    /// Whole days, `VALUE=DATE`
    Dates(Vec<Date>),

    /// Date-times, the default
    DateTimes(Vec<DateTime>),

    /// Periods, `VALUE=PERIOD`
    Periods(Vec<Period>),
}

/// Exception dates (RFC 5545 Section 3.8.5.1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionDates {
    /// Whole days, `VALUE=DATE`
    Dates(Vec<Date>),

    /// Date-times, the default
    DateTimes(Vec<DateTime>),
}

const MANAGED: &[ParameterKind] = &[ParameterKind::TzId, ParameterKind::ValueType];

impl PropertyValue for RecurrenceDates {
    const MANAGED: &'static [ParameterKind] = MANAGED;

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let tzid = params.take_tzid();
        match params.take_value_type() {
            Some(ValueType::Date) => decode_list(raw).map(Self::Dates),
            Some(ValueType::Period) => {
                let mut periods: Vec<Period> = decode_list(raw)?;
                if let Some(tzid) = tzid {
                    for period in periods.iter_mut().filter(|p| !p.start.is_utc()) {
                        period.set_tzid(&tzid);
                    }
                }
                Ok(Self::Periods(periods))
            }
            Some(ValueType::DateTime) => decode_date_times(raw, tzid).map(Self::DateTimes),
            _ if !raw.contains('T') => decode_list(raw).map(Self::Dates),
            _ => decode_date_times(raw, tzid).map(Self::DateTimes),
        }
    }

    fn encode(&self, params: &mut Parameters) -> String {
        match self {
            Self::Dates(dates) => {
                params.prepend(Parameter::ValueType(ValueType::Date));
                encode_list(dates)
            }
            Self::DateTimes(dts) => {
                prepend_tzid(params, dts.iter().map(|dt| &dt.zone));
                encode_list(dts)
            }
            Self::Periods(periods) => {
                params.prepend(Parameter::ValueType(ValueType::Period));
                prepend_tzid(params, periods.iter().map(|p| &p.start.zone));
                encode_list(periods)
            }
        }
    }

    fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Dates(dates) => validate_dates(dates),
            Self::DateTimes(dts) => validate_date_times(dts),
            Self::Periods(periods) => {
                periods.iter().try_for_each(Period::validate)?;
                check_same_zone(KW_PERIOD, periods.iter().map(|p| &p.start.zone))
            }
        }
    }
}

impl PropertyValue for ExceptionDates {
    const MANAGED: &'static [ParameterKind] = MANAGED;

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let tzid = params.take_tzid();
        match params.take_value_type() {
            Some(ValueType::Date) => decode_list(raw).map(Self::Dates),
            Some(ValueType::DateTime) => decode_date_times(raw, tzid).map(Self::DateTimes),
            _ if !raw.contains('T') => decode_list(raw).map(Self::Dates),
            _ => decode_date_times(raw, tzid).map(Self::DateTimes),
        }
    }

    fn encode(&self, params: &mut Parameters) -> String {
        match self {
            Self::Dates(dates) => {
                params.prepend(Parameter::ValueType(ValueType::Date));
                encode_list(dates)
            }
            Self::DateTimes(dts) => {
                prepend_tzid(params, dts.iter().map(|dt| &dt.zone));
                encode_list(dts)
            }
        }
    }

    fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Dates(dates) => validate_dates(dates),
            Self::DateTimes(dts) => validate_date_times(dts),
        }
    }
}

fn decode_date_times(raw: &str, tzid: Option<String>) -> Result<Vec<DateTime>, ValueError> {
    let mut dts: Vec<DateTime> = decode_list(raw)?;
    if let Some(tzid) = tzid {
        for dt in dts.iter_mut().filter(|dt| !dt.is_utc()) {
            dt.zone = Zone::Tz(tzid.clone());
        }
    }
    Ok(dts)
}

fn prepend_tzid<'a>(params: &mut Parameters, mut zones: impl Iterator<Item = &'a Zone>) {
    if let Some(Zone::Tz(tzid)) = zones.next() {
        params.prepend(Parameter::TzId(tzid.clone()));
    }
}

fn validate_dates(dates: &[Date]) -> Result<(), ValueError> {
    if dates.is_empty() {
        return Err(ValueError::invalid(KW_DATE, "list is empty"));
    }
    dates.iter().try_for_each(Date::validate)
}

fn validate_date_times(dts: &[DateTime]) -> Result<(), ValueError> {
    dts.iter().try_for_each(DateTime::validate)?;
    check_same_zone(KW_DATETIME, dts.iter().map(|dt| &dt.zone))
}

impl PropertyValue for RecurrenceRule {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        raw.parse()
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        RecurrenceRule::validate(self)
    }
}
