// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Free/busy component (VFREEBUSY, RFC 5545 Section 3.6.4).

use crate::error::RuleViolation;
use crate::keyword::KW_VFREEBUSY;
use crate::property::{PropertyKind, RequestStatus};
use crate::semantic::analysis::Rules;
use crate::value::{DateOrDateTime, DateTime, Period, Text, Uri};

define_component! {
    /// Free/busy component (VFREEBUSY)
    pub struct VFreeBusy(KW_VFREEBUSY, FreeBusyCollector) {
        required {
            /// Date-time the object was created or last exported
            dt_stamp: DateTime => DtStamp,
            /// Unique identifier
            uid: Text => Uid,
        }
        optional {
            /// Organizer, a calendar user address
            organizer: Uri => Organizer,
            /// Start of the range covered
            dt_start: DateOrDateTime => DtStart,
            /// End of the range covered
            dt_end: DateOrDateTime => DtEnd,
            /// Contact information
            contact: Text => Contact,
            /// Where the free/busy data can be found
            url: Uri => Url,
        }
        repeated {
            /// Attendees, calendar user addresses
            attendees: Uri => Attendee,
            /// Comments
            comments: Text => Comment,
            /// Busy or free periods, kind given by the FBTYPE parameter
            free_busy: Vec<Period> => FreeBusy,
            /// Request statuses
            request_status: RequestStatus => RequestStatus,
        }
        children {}
    }
}

impl Rules for VFreeBusy {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        if self.dt_end.is_some() && self.dt_start.is_none() {
            return Err(RuleViolation::Requires {
                property: PropertyKind::DtEnd,
                required: PropertyKind::DtStart,
            });
        }
        Ok(())
    }
}
