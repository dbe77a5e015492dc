// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property kinds and value types for iCalendar properties.
//!
//! This module defines the `PropertyKind` enum that represents all standard
//! iCalendar properties defined in RFC 5545, along with their allowed value types.

use std::fmt;
use std::str::FromStr;

use crate::keyword::{
    KW_ACTION, KW_ATTACH, KW_ATTENDEE, KW_BINARY, KW_CAL_ADDRESS, KW_CALSCALE, KW_CATEGORIES,
    KW_CLASS, KW_COMMENT, KW_COMPLETED, KW_CONTACT, KW_CREATED, KW_DATE, KW_DATETIME,
    KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DUE, KW_DURATION, KW_DURATION_TYPE,
    KW_EXDATE, KW_FLOAT, KW_FREEBUSY, KW_GEO, KW_INTEGER, KW_LAST_MODIFIED, KW_LOCATION,
    KW_METHOD, KW_ORGANIZER, KW_PERCENT_COMPLETE, KW_PERIOD, KW_PRIORITY, KW_PRODID, KW_RDATE,
    KW_RECUR, KW_RECURRENCE_ID, KW_RELATED_TO, KW_REPEAT, KW_REQUEST_STATUS, KW_RESOURCES,
    KW_RRULE, KW_SEQUENCE, KW_STATUS, KW_SUMMARY, KW_TEXT, KW_TRANSP, KW_TRIGGER, KW_TZID,
    KW_TZNAME, KW_TZOFFSETFROM, KW_TZOFFSETTO, KW_TZURL, KW_UID, KW_URI, KW_URL, KW_UTC_OFFSET,
    KW_VERSION,
};
use crate::parameter::ValueType;

/// Macro to define `PropertyKind` with associated value types.
///
/// Usage: `property_kind!(Variant => KW => &[...], ...)`; the first value
/// type listed is the default one.
macro_rules! property_kind {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $kw:ident => $value_types:expr
        ),* $(,)?
    ) => {
        /// Kind of iCalendar property.
        /// Represents all standard properties defined in RFC 5545.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[expect(missing_docs)]
        pub enum PropertyKind {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl PropertyKind {
            /// Every known property kind.
            pub const ALL: &[Self] = &[$(Self::$variant,)*];

            /// Returns the name keyword of the property.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $kw,)*
                }
            }

            /// Returns the value types the property may take, default first.
            #[must_use]
            pub const fn value_types(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => $value_types,)*
                }
            }
        }

        impl FromStr for PropertyKind {
            type Err = ();

            /// Property names are case-insensitive per RFC 5545.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$variant);
                    }
                )*
                Err(())
            }
        }
    };
}

// Define PropertyKind with all RFC 5545 properties and their value types
property_kind! {
    // 3.7.1.  Calendar Scale
    CalScale    => KW_CALSCALE  => &[KW_TEXT],
    // 3.7.2.  Method
    Method      => KW_METHOD    => &[KW_TEXT],
    // 3.7.3.  Product Identifier
    ProdId      => KW_PRODID    => &[KW_TEXT],
    // 3.7.4.  Version
    Version     => KW_VERSION   => &[KW_TEXT],
    // 3.8.1.1.  Attachment
    Attach      => KW_ATTACH    => &[KW_URI, KW_BINARY],
    // 3.8.1.2.  Categories
    Categories  => KW_CATEGORIES => &[KW_TEXT],
    // 3.8.1.3.  Classification
    Class       => KW_CLASS     => &[KW_TEXT],
    // 3.8.1.4.  Comment
    Comment     => KW_COMMENT   => &[KW_TEXT],
    // 3.8.1.5.  Description
    Description => KW_DESCRIPTION => &[KW_TEXT],
    // 3.8.1.6.  Geographic Position
    Geo         => KW_GEO       => &[KW_FLOAT],
    // 3.8.1.7.  Location
    Location    => KW_LOCATION  => &[KW_TEXT],
    // 3.8.1.8.  Percent Complete
    PercentComplete => KW_PERCENT_COMPLETE => &[KW_INTEGER],
    // 3.8.1.9.  Priority
    Priority    => KW_PRIORITY  => &[KW_INTEGER],
    // 3.8.1.10.  Resources
    Resources   => KW_RESOURCES => &[KW_TEXT],
    // 3.8.1.11.  Status
    Status      => KW_STATUS    => &[KW_TEXT],
    // 3.8.1.12.  Summary
    Summary     => KW_SUMMARY   => &[KW_TEXT],
    // 3.8.2.1.  Date-Time Completed
    Completed   => KW_COMPLETED => &[KW_DATETIME],
    // 3.8.2.2.  Date-Time End
    DtEnd       => KW_DTEND     => &[KW_DATETIME, KW_DATE],
    // 3.8.2.3.  Date-Time Due
    Due         => KW_DUE       => &[KW_DATETIME, KW_DATE],
    // 3.8.2.4.  Date-Time Start
    DtStart     => KW_DTSTART   => &[KW_DATETIME, KW_DATE],
    // 3.8.2.5.  Duration
    Duration    => KW_DURATION  => &[KW_DURATION_TYPE],
    // 3.8.2.6.  Free/Busy Time
    FreeBusy    => KW_FREEBUSY  => &[KW_PERIOD],
    // 3.8.2.7.  Time Transparency
    Transp      => KW_TRANSP    => &[KW_TEXT],
    // 3.8.3.1.  Time Zone Identifier
    TzId        => KW_TZID      => &[KW_TEXT],
    // 3.8.3.2.  Time Zone Name
    TzName      => KW_TZNAME    => &[KW_TEXT],
    // 3.8.3.3.  Time Zone Offset From
    TzOffsetFrom => KW_TZOFFSETFROM => &[KW_UTC_OFFSET],
    // 3.8.3.4.  Time Zone Offset To
    TzOffsetTo  => KW_TZOFFSETTO => &[KW_UTC_OFFSET],
    // 3.8.3.5.  Time Zone URL
    TzUrl       => KW_TZURL     => &[KW_URI],
    // 3.8.4.1.  Attendee
    Attendee    => KW_ATTENDEE  => &[KW_CAL_ADDRESS],
    // 3.8.4.2.  Contact
    Contact     => KW_CONTACT   => &[KW_TEXT],
    // 3.8.4.3.  Organizer
    Organizer   => KW_ORGANIZER => &[KW_CAL_ADDRESS],
    // 3.8.4.4.  Recurrence ID
    RecurrenceId => KW_RECURRENCE_ID => &[KW_DATETIME, KW_DATE],
    // 3.8.4.5.  Related To
    RelatedTo   => KW_RELATED_TO => &[KW_TEXT],
    // 3.8.4.6.  Uniform Resource Locator
    Url         => KW_URL       => &[KW_URI],
    // 3.8.4.7.  Unique Identifier
    Uid         => KW_UID       => &[KW_TEXT],
    // 3.8.5.1.  Exception Date-Times
    ExDate      => KW_EXDATE    => &[KW_DATETIME, KW_DATE],
    // 3.8.5.2.  Recurrence Date-Times
    RDate       => KW_RDATE     => &[KW_DATETIME, KW_DATE, KW_PERIOD],
    // 3.8.5.3.  Recurrence Rule
    RRule       => KW_RRULE     => &[KW_RECUR],
    // 3.8.6.1.  Action
    Action      => KW_ACTION    => &[KW_TEXT],
    // 3.8.6.2.  Repeat Count
    Repeat      => KW_REPEAT    => &[KW_INTEGER],
    // 3.8.6.3.  Trigger
    Trigger     => KW_TRIGGER   => &[KW_DURATION_TYPE, KW_DATETIME],
    // 3.8.7.1.  Date-Time Created
    Created     => KW_CREATED   => &[KW_DATETIME],
    // 3.8.7.2.  Date-Time Stamp
    DtStamp     => KW_DTSTAMP   => &[KW_DATETIME],
    // 3.8.7.3.  Last Modified
    LastModified => KW_LAST_MODIFIED => &[KW_DATETIME],
    // 3.8.7.4.  Sequence Number
    Sequence    => KW_SEQUENCE  => &[KW_INTEGER],
    // 3.8.8.3.  Request Status
    RequestStatus => KW_REQUEST_STATUS => &[KW_TEXT],
}

impl PropertyKind {
    /// Whether the property takes values of the given type.
    #[must_use]
    pub fn accepts(self, value_type: &ValueType) -> bool {
        self.value_types()
            .iter()
            .any(|kw| value_type.as_str().eq_ignore_ascii_case(kw))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_have_value_types() {
        for kind in PropertyKind::ALL {
            assert!(
                !kind.value_types().is_empty(),
                "Property {kind:?}: value_types must not be empty",
            );
            assert_eq!(kind.name().parse::<PropertyKind>(), Ok(*kind));
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("dtstart".parse::<PropertyKind>(), Ok(PropertyKind::DtStart));
        assert_eq!("Last-Modified".parse::<PropertyKind>(), Ok(PropertyKind::LastModified));
        assert!("X-WR-CALNAME".parse::<PropertyKind>().is_err());
        assert!("".parse::<PropertyKind>().is_err());
    }

    #[test]
    fn accepts_listed_value_types() {
        assert!(PropertyKind::DtStart.accepts(&ValueType::Date));
        assert!(PropertyKind::DtStart.accepts(&ValueType::DateTime));
        assert!(!PropertyKind::DtStart.accepts(&ValueType::Period));
        assert!(PropertyKind::RDate.accepts(&ValueType::Period));
        assert!(PropertyKind::Attach.accepts(&ValueType::Binary));
        assert!(!PropertyKind::DtStamp.accepts(&ValueType::Unknown("X-TS".to_string())));
    }
}
