// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Journal component (VJOURNAL, RFC 5545 Section 3.6.3).

use crate::keyword::KW_VJOURNAL;
use crate::property::{
    Attachment, Classification, ExceptionDates, JournalStatus, RecurrenceDates, RequestStatus,
};
use crate::semantic::analysis::Rules;
use crate::value::{DateOrDateTime, DateTime, RecurrenceRule, Text, Uri};

define_component! {
    /// Journal component (VJOURNAL)
    pub struct VJournal(KW_VJOURNAL, JournalCollector) {
        required {
            /// Date-time the journal object was created or last exported
            dt_stamp: DateTime => DtStamp,
            /// Unique identifier
            uid: Text => Uid,
        }
        optional {
            /// Organizer, a calendar user address
            organizer: Uri => Organizer,
            /// Date the entry refers to
            dt_start: DateOrDateTime => DtStart,
            /// Status of the entry
            status: JournalStatus => Status,
            /// Summary or title
            summary: Text => Summary,
            /// Access classification
            class: Classification => Class,
            /// When the entry was created in the calendar store
            created: DateTime => Created,
            /// When the entry was last revised in the calendar store
            last_modified: DateTime => LastModified,
            /// Revision sequence number
            sequence: u32 => Sequence,
            /// Associated URL
            url: Uri => Url,
            /// Which instance of a recurring entry this overrides
            recurrence_id: DateOrDateTime => RecurrenceId,
            /// Recurrence rule
            rrule: RecurrenceRule => RRule,
        }
        repeated {
            /// Descriptions; a journal may carry several
            descriptions: Text => Description,
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
        }
        children {}
    }
}

impl Rules for VJournal {}
