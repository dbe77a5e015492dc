// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time zone component (VTIMEZONE, RFC 5545 Section 3.6.5).

use crate::error::RuleViolation;
use crate::keyword::{KW_DAYLIGHT, KW_STANDARD, KW_VTIMEZONE};
use crate::property::RecurrenceDates;
use crate::semantic::analysis::Rules;
use crate::value::{DateOrDateTime, DateTime, RecurrenceRule, Text, Uri, UtcOffset};

define_component! {
    /// Time zone component (VTIMEZONE)
    pub struct VTimeZone(KW_VTIMEZONE, TimeZoneCollector) {
        required {
            /// Identifier referenced by TZID parameters
            tz_id: Text => TzId,
        }
        optional {
            /// When the definition was last revised
            last_modified: DateTime => LastModified,
            /// Where an up-to-date definition can be found
            tz_url: Uri => TzUrl,
        }
        repeated {}
        children {
            /// Standard time observances
            standard: Standard,
            /// Daylight saving time observances
            daylight: Daylight,
        }
    }
}

impl Rules for VTimeZone {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        if self.standard.is_empty() && self.daylight.is_empty() {
            return Err(RuleViolation::NoObservance);
        }
        Ok(())
    }
}

macro_rules! define_observance {
    ($(#[$meta:meta])* $Name:ident, $kw:expr, $Collector:ident) => {
        define_component! {
            $(#[$meta])*
            pub struct $Name($kw, $Collector) {
                required {
                    /// First onset, in local time
                    dt_start: DateOrDateTime => DtStart,
                    /// Offset in use during the observance
                    tz_offset_to: UtcOffset => TzOffsetTo,
                    /// Offset in use before the observance
                    tz_offset_from: UtcOffset => TzOffsetFrom,
                }
                optional {
                    /// Rule for later onsets
                    rrule: RecurrenceRule => RRule,
                }
                repeated {
                    /// Comments
                    comments: Text => Comment,
                    /// Further onsets
                    rdates: RecurrenceDates => RDate,
                    /// Customary names, e.g. "EST"
                    tz_names: Text => TzName,
                }
                children {}
            }
        }

        impl Rules for $Name {}
    };
}

define_observance!(
    /// Standard time observance (STANDARD)
    Standard,
    KW_STANDARD,
    StandardCollector
);

define_observance!(
    /// Daylight saving time observance (DAYLIGHT)
    Daylight,
    KW_DAYLIGHT,
    DaylightCollector
);
