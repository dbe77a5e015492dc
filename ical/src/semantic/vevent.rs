// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT, RFC 5545 Section 3.6.1).

use crate::error::RuleViolation;
use crate::keyword::KW_VEVENT;
use crate::property::{
    Attachment, Classification, EventStatus, ExceptionDates, Geo, Priority, PropertyKind,
    RecurrenceDates, RequestStatus, TimeTransparency,
};
use crate::semantic::VAlarm;
use crate::semantic::analysis::Rules;
use crate::value::{DateOrDateTime, DateTime, Duration, RecurrenceRule, Text, Uri};

define_component! {
    /// Event component (VEVENT)
    pub struct VEvent(KW_VEVENT, EventCollector) {
        required {
            /// Date-time the event object was created or last exported
            dt_stamp: DateTime => DtStamp,
            /// Unique identifier
            uid: Text => Uid,
        }
        optional {
            /// Organizer, a calendar user address
            organizer: Uri => Organizer,
            /// When the event starts
            dt_start: DateOrDateTime => DtStart,
            /// When the event ends, exclusive with `duration`
            dt_end: DateOrDateTime => DtEnd,
            /// Length of the event, exclusive with `dt_end`
            duration: Duration => Duration,
            /// Status of the event
            status: EventStatus => Status,
            /// Summary or title
            summary: Text => Summary,
            /// Detailed description
            description: Text => Description,
            /// Venue
            location: Text => Location,
            /// Geographic position
            geo: Geo => Geo,
            /// Access classification
            class: Classification => Class,
            /// When the event was created in the calendar store
            created: DateTime => Created,
            /// When the event was last revised in the calendar store
            last_modified: DateTime => LastModified,
            /// Priority, 1 highest to 9 lowest
            priority: Priority => Priority,
            /// Revision sequence number
            sequence: u32 => Sequence,
            /// Whether the event blocks time
            transp: TimeTransparency => Transp,
            /// Associated URL
            url: Uri => Url,
            /// Which instance of a recurring event this overrides
            recurrence_id: DateOrDateTime => RecurrenceId,
            /// Recurrence rule
            rrule: RecurrenceRule => RRule,
        }
        repeated {
            /// Categories, each property a list
            categories: Vec<Text> => Categories,
            /// Attachments
            attachments: Attachment => Attach,
            /// Attendees, calendar user addresses
            attendees: Uri => Attendee,
            /// Comments
            comments: Text => Comment,
            /// Contact information
            contacts: Text => Contact,
            /// Exception dates
            exdates: ExceptionDates => ExDate,
            /// Recurrence dates
            rdates: RecurrenceDates => RDate,
            /// Related components, by UID
            related_to: Text => RelatedTo,
            /// Request statuses
            request_status: RequestStatus => RequestStatus,
            /// Resources, each property a list
            resources: Vec<Text> => Resources,
        }
        children {
            /// Alarms
            alarms: VAlarm,
        }
    }
}

impl Rules for VEvent {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        if self.dt_end.is_some() && self.duration.is_some() {
            return Err(RuleViolation::MutuallyExclusive {
                first: PropertyKind::DtEnd,
                second: PropertyKind::Duration,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;
    use crate::value::{Date, Time};

    fn event() -> VEvent {
        VEvent::new(
            DateTime::utc(Date::new(1997, 9, 1), Time::new(13, 0, 0)),
            Text::from("19970901T130000Z-123401@example.com"),
        )
    }

    #[test]
    fn minimal_event_is_valid() {
        assert!(event().validate().is_ok());
    }

    #[test]
    fn dtend_and_duration_are_exclusive() {
        let mut event = event();
        let start = DateTime::utc(Date::new(1997, 9, 3), Time::new(16, 30, 0));
        let end = DateTime::utc(Date::new(1997, 9, 3), Time::new(19, 0, 0));
        event.dt_start = Some(Property::new(start.into()));
        event.dt_end = Some(Property::new(end.into()));
        assert!(event.validate().is_ok());

        event.duration = Some(Property::new("PT1H".parse().unwrap()));
        let err = event.validate().unwrap_err();
        assert_eq!(err.path(), vec!["VEVENT"]);
        assert_eq!(err.to_string(), "VEVENT → DTEND and DURATION are mutually exclusive");
    }

    #[test]
    fn invalid_property_is_reported_with_path() {
        let mut event = event();
        event.organizer = Some(Property::new(Uri::new_unchecked("jsmith@example.com")));
        let err = event.validate().unwrap_err();
        assert_eq!(err.path(), vec!["VEVENT", "ORGANIZER"]);
    }
}
