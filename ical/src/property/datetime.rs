// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and Time Properties (RFC 5545 Section 3.8.2)
//!
//! - 3.8.2.1: COMPLETED, UTC date-time
//! - 3.8.2.2: DTEND, date or date-time
//! - 3.8.2.3: DUE, date or date-time
//! - 3.8.2.4: DTSTART, date or date-time
//! - 3.8.2.5: DURATION
//! - 3.8.2.6: FREEBUSY, list of UTC periods
//! - 3.8.2.7: `TimeTransparency` (TRANSP)
//!
//! The change management properties of Section 3.8.7 (CREATED, DTSTAMP,
//! LAST-MODIFIED) share the UTC date-time value.

use crate::keyword::{
    KW_DATETIME, KW_PERIOD, KW_TRANSP, KW_TRANSP_OPAQUE, KW_TRANSP_TRANSPARENT,
};
use crate::parameter::{Parameter, ParameterKind, Parameters, ValueType};
use crate::property::PropertyValue;
use crate::property::util::{decode_list, encode_list};
use crate::value::{DateOrDateTime, DateTime, Period, PeriodEnd, ValueError, Zone};

impl PropertyValue for DateOrDateTime {
    const MANAGED: &'static [ParameterKind] = &[ParameterKind::TzId, ParameterKind::ValueType];

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let tzid = params.take_tzid();
        let value = match params.take_value_type() {
            Some(ValueType::Date) => Self::Date(raw.parse()?),
            Some(ValueType::DateTime) => Self::DateTime(raw.parse()?),
            _ => raw.parse()?,
        };

        // A TZID on a date or on a UTC value has nothing to apply to.
        Ok(match (value, tzid) {
            (Self::DateTime(mut dt), Some(tzid)) if !dt.is_utc() => {
                dt.zone = Zone::Tz(tzid);
                Self::DateTime(dt)
            }
            (value, _) => value,
        })
    }

    fn encode(&self, params: &mut Parameters) -> String {
        match self {
            Self::Date(date) => {
                params.prepend(Parameter::ValueType(ValueType::Date));
                date.to_string()
            }
            Self::DateTime(dt) => {
                if let Some(tzid) = dt.tzid() {
                    params.prepend(Parameter::TzId(tzid.to_string()));
                }
                dt.to_string()
            }
        }
    }

    fn validate(&self) -> Result<(), ValueError> {
        DateOrDateTime::validate(self)
    }
}

/// UTC date-time, as taken by COMPLETED, CREATED, DTSTAMP, LAST-MODIFIED
/// and an absolute TRIGGER.
impl PropertyValue for DateTime {
    const MANAGED: &'static [ParameterKind] = &[ParameterKind::TzId, ParameterKind::ValueType];

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        params.take_tzid();
        params.take_value_type();
        let dt: DateTime = raw.parse()?;
        if dt.is_utc() {
            Ok(dt)
        } else {
            Err(ValueError::invalid(
                KW_DATETIME,
                format!("{raw:?} must be in UTC"),
            ))
        }
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        DateTime::validate(self)?;
        if self.is_utc() {
            Ok(())
        } else {
            Err(ValueError::invalid(KW_DATETIME, format!("{self} must be in UTC")))
        }
    }
}

/// Free/busy periods (FREEBUSY), all in UTC.
impl PropertyValue for Vec<Period> {
    const MANAGED: &'static [ParameterKind] = &[ParameterKind::ValueType];

    fn decode(params: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        params.take_value_type();
        decode_list(raw)
    }

    fn encode(&self, _: &mut Parameters) -> String {
        encode_list(self)
    }

    fn validate(&self) -> Result<(), ValueError> {
        if self.is_empty() {
            return Err(ValueError::invalid(KW_PERIOD, "list is empty"));
        }
        for period in self {
            period.validate()?;
            let end_is_utc = match &period.end {
                PeriodEnd::DateTime(end) => end.is_utc(),
                PeriodEnd::Duration(_) => true,
            };
            if !period.start.is_utc() || !end_is_utc {
                return Err(ValueError::invalid(
                    KW_PERIOD,
                    format!("free/busy period {period} must be in UTC"),
                ));
            }
        }
        Ok(())
    }
}

define_keyword_enum! {
    /// Time transparency (RFC 5545 Section 3.8.2.7).
    #[derive(Default)]
    enum TimeTransparency {
        /// Blocks or opaque on busy time searches
        #[default]
        Opaque      => KW_TRANSP_OPAQUE,
        /// Transparent on busy time searches
        Transparent => KW_TRANSP_TRANSPARENT,
    }
}

keyword_property_value!(TimeTransparency, KW_TRANSP);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Date, Duration, Time};

    #[test]
    fn date_or_date_time_is_inferred() {
        let mut params = Parameters::new();
        assert_eq!(
            DateOrDateTime::decode(&mut params, "19970714"),
            Ok(DateOrDateTime::Date(Date::new(1997, 7, 14)))
        );
        assert_eq!(
            DateOrDateTime::decode(&mut params, "19970714T133000Z"),
            Ok(DateOrDateTime::DateTime(DateTime::utc(
                Date::new(1997, 7, 14),
                Time::new(13, 30, 0)
            )))
        );
    }

    #[test]
    fn explicit_value_type_must_match() {
        let mut params = Parameters::from(vec![Parameter::ValueType(ValueType::Date)]);
        assert!(DateOrDateTime::decode(&mut params, "19970714T133000").is_err());
        assert!(params.is_empty());
    }

    #[test]
    fn date_encodes_value_parameter() {
        let mut params = Parameters::new();
        let value = DateOrDateTime::Date(Date::new(1997, 11, 2));
        assert_eq!(value.encode(&mut params), "19971102");
        assert_eq!(params.value_type(), Some(&ValueType::Date));
    }

    #[test]
    fn tzid_on_utc_value_is_dropped() {
        let mut params = Parameters::from(vec![Parameter::TzId("Europe/Paris".to_string())]);
        let value = DateOrDateTime::decode(&mut params, "20240101T090000Z").unwrap();
        assert_eq!(value.as_date_time().map(DateTime::is_utc), Some(true));
        assert!(params.is_empty());
    }

    #[test]
    fn stamps_must_be_utc() {
        let mut params = Parameters::new();
        assert!(DateTime::decode(&mut params, "19970610T172345Z").is_ok());
        assert!(DateTime::decode(&mut params, "19970610T172345").is_err());
        let floating = DateTime::floating(Date::new(1997, 6, 10), Time::new(17, 23, 45));
        assert!(PropertyValue::validate(&floating).is_err());
    }

    #[test]
    fn free_busy_periods() {
        let mut params = Parameters::new();
        let periods = Vec::<Period>::decode(
            &mut params,
            "19970308T160000Z/PT8H30M,19970308T230000Z/19970309T000000Z",
        )
        .unwrap();
        assert_eq!(periods.len(), 2);
        assert!(periods.validate().is_ok());
        assert_eq!(
            periods.encode(&mut params),
            "19970308T160000Z/PT8H30M,19970308T230000Z/19970309T000000Z"
        );

        let floating = vec![Period::with_duration(
            DateTime::floating(Date::new(1997, 3, 8), Time::new(16, 0, 0)),
            Duration::from_seconds(true, 3600),
        )];
        assert!(floating.validate().is_err());
        assert!(Vec::<Period>::new().validate().is_err());
    }

    #[test]
    fn transparency() {
        let mut params = Parameters::new();
        assert_eq!(
            TimeTransparency::decode(&mut params, "TRANSPARENT"),
            Ok(TimeTransparency::Transparent)
        );
        assert!(TimeTransparency::decode(&mut params, "CLEAR").is_err());
    }
}
