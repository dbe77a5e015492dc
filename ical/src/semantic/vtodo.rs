// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! To-do component (VTODO, RFC 5545 Section 3.6.2).

use crate::error::RuleViolation;
use crate::keyword::KW_VTODO;
use crate::property::{
    Attachment, Classification, ExceptionDates, Geo, PercentComplete, Priority, PropertyKind,
    RecurrenceDates, RequestStatus, TodoStatus,
};
use crate::semantic::VAlarm;
use crate::semantic::analysis::Rules;
use crate::value::{DateOrDateTime, DateTime, Duration, RecurrenceRule, Text, Uri};

define_component! {
    /// To-do component (VTODO)
    pub struct VTodo(KW_VTODO, TodoCollector) {
        required {
            /// Date-time the to-do object was created or last exported
            dt_stamp: DateTime => DtStamp,
            /// Unique identifier
            uid: Text => Uid,
        }
        optional {
            /// Organizer, a calendar user address
            organizer: Uri => Organizer,
            /// When work on the to-do starts
            dt_start: DateOrDateTime => DtStart,
            /// When the to-do is due, exclusive with `duration`
            due: DateOrDateTime => Due,
            /// Expected length of the work, requires `dt_start`
            duration: Duration => Duration,
            /// When the to-do was completed
            completed: DateTime => Completed,
            /// Status of the to-do
            status: TodoStatus => Status,
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
            /// When the to-do was created in the calendar store
            created: DateTime => Created,
            /// When the to-do was last revised in the calendar store
            last_modified: DateTime => LastModified,
            /// How far the work has progressed
            percent_complete: PercentComplete => PercentComplete,
            /// Priority, 1 highest to 9 lowest
            priority: Priority => Priority,
            /// Revision sequence number
            sequence: u32 => Sequence,
            /// Associated URL
            url: Uri => Url,
            /// Which instance of a recurring to-do this overrides
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

impl Rules for VTodo {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        if self.duration.is_some() {
            if self.due.is_some() {
                return Err(RuleViolation::MutuallyExclusive {
                    first: PropertyKind::Due,
                    second: PropertyKind::Duration,
                });
            }
            if self.dt_start.is_none() {
                return Err(RuleViolation::Requires {
                    property: PropertyKind::Duration,
                    required: PropertyKind::DtStart,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;
    use crate::value::{Date, Time};

    fn todo() -> VTodo {
        VTodo::new(
            DateTime::utc(Date::new(2007, 3, 13), Time::new(12, 34, 32)),
            Text::from("20070313T123432Z-456553@example.com"),
        )
    }

    #[test]
    fn due_and_duration_are_exclusive() {
        let mut todo = todo();
        todo.dt_start = Some(Property::new(Date::new(2007, 5, 1).into()));
        todo.due = Some(Property::new(Date::new(2007, 5, 1).into()));
        assert!(todo.validate().is_ok());

        todo.duration = Some(Property::new("P1D".parse().unwrap()));
        assert!(matches!(
            todo.validate().unwrap_err().root(),
            crate::error::ValidationError::RequirementNotMet(RuleViolation::MutuallyExclusive { .. })
        ));
    }

    #[test]
    fn duration_requires_start() {
        let mut todo = todo();
        todo.duration = Some(Property::new("P1D".parse().unwrap()));
        assert_eq!(
            todo.validate().unwrap_err().to_string(),
            "VTODO → DURATION requires DTSTART"
        );

        todo.dt_start = Some(Property::new(Date::new(2007, 5, 1).into()));
        assert!(todo.validate().is_ok());
    }
}
