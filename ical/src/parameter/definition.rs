// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{
    KW_BINARY, KW_BOOLEAN, KW_CAL_ADDRESS, KW_CUTYPE_GROUP, KW_CUTYPE_INDIVIDUAL,
    KW_CUTYPE_RESOURCE, KW_CUTYPE_ROOM, KW_CUTYPE_UNKNOWN, KW_DATE, KW_DATETIME, KW_DURATION_TYPE,
    KW_ENCODING_8BIT, KW_ENCODING_BASE64, KW_FBTYPE_BUSY, KW_FBTYPE_BUSY_TENTATIVE,
    KW_FBTYPE_BUSY_UNAVAILABLE, KW_FBTYPE_FREE, KW_FLOAT, KW_INTEGER, KW_PARTSTAT_ACCEPTED,
    KW_PARTSTAT_COMPLETED, KW_PARTSTAT_DECLINED, KW_PARTSTAT_DELEGATED, KW_PARTSTAT_IN_PROCESS,
    KW_PARTSTAT_NEEDS_ACTION, KW_PARTSTAT_TENTATIVE, KW_PERIOD, KW_RANGE_THISANDFUTURE,
    KW_RECUR, KW_RELATED_END, KW_RELATED_START, KW_RELTYPE_CHILD, KW_RELTYPE_PARENT,
    KW_RELTYPE_SIBLING, KW_ROLE_CHAIR, KW_ROLE_NON_PARTICIPANT, KW_ROLE_OPT_PARTICIPANT,
    KW_ROLE_REQ_PARTICIPANT, KW_TEXT, KW_TIME, KW_URI, KW_UTC_OFFSET,
};

define_keyword_enum_with_unknown! {
    /// To identify the type of calendar user specified by the property.
    #[derive(Default)]
    enum CalendarUserType {
        /// An individual
        #[default]
        Individual => KW_CUTYPE_INDIVIDUAL,
        /// A group of individuals
        Group      => KW_CUTYPE_GROUP,
        /// A physical resource
        Resource   => KW_CUTYPE_RESOURCE,
        /// A room resource
        Room       => KW_CUTYPE_ROOM,
        /// Otherwise not known
        NotKnown   => KW_CUTYPE_UNKNOWN,
    }
}

define_keyword_enum_with_unknown! {
    /// This parameter identifies the inline encoding used in a property value.
    #[derive(Default)]
    enum Encoding {
        /// The default encoding is "8BIT", corresponding to a property value
        /// consisting of text.
        #[default]
        Bit8   => KW_ENCODING_8BIT,
        /// The "BASE64" encoding type corresponds to a property value encoded
        /// using the "BASE64" encoding defined in [RFC2045].
        Base64 => KW_ENCODING_BASE64,
    }
}

define_keyword_enum_with_unknown! {
    /// This parameter defines the free or busy time type for a time
    #[derive(Default)]
    enum FreeBusyType {
        /// The time interval is free for scheduling
        Free             => KW_FBTYPE_FREE,
        /// The time interval is busy because one or more events have been
        /// scheduled for that interval
        #[default]
        Busy             => KW_FBTYPE_BUSY,
        /// The time interval is busy and that the interval can not be scheduled.
        BusyUnavailable  => KW_FBTYPE_BUSY_UNAVAILABLE,
        /// The time interval is busy because one or more events have been
        /// tentatively scheduled for that interval.
        BusyTentative    => KW_FBTYPE_BUSY_TENTATIVE,
    }
}

define_keyword_enum_with_unknown! {
    #[derive(Default)]
    enum ParticipationStatus {
        #[default]
        NeedsAction  => KW_PARTSTAT_NEEDS_ACTION,
        Accepted     => KW_PARTSTAT_ACCEPTED,
        Declined     => KW_PARTSTAT_DECLINED,
        Tentative    => KW_PARTSTAT_TENTATIVE,
        Delegated    => KW_PARTSTAT_DELEGATED,
        Completed    => KW_PARTSTAT_COMPLETED,
        InProcess    => KW_PARTSTAT_IN_PROCESS,
    }
}

define_keyword_enum_with_unknown! {
    enum RecurrenceIdRange {
        /// A range defined by the recurrence identifier and all subsequent
        /// instances
        ThisAndFuture => KW_RANGE_THISANDFUTURE,

        // The value "THISANDPRIOR" is deprecated by RFC 5545 and MUST NOT be
        // generated by applications.
    }
}

define_keyword_enum_with_unknown! {
    /// This parameter defines the relationship of the alarm trigger to the
    /// start or end of the calendar component.
    #[derive(Default)]
    enum AlarmTriggerRelationship {
        /// Trigger off the start of the calendar component
        #[default]
        Start => KW_RELATED_START,
        /// Trigger off the end of the calendar component
        End   => KW_RELATED_END,
    }
}

define_keyword_enum_with_unknown! {
    #[derive(Default)]
    enum RelationshipType {
        /// The referenced calendar component is a superior of calendar component
        #[default]
        Parent  => KW_RELTYPE_PARENT,
        /// The referenced calendar component is a subordinate of the calendar
        /// component
        Child   => KW_RELTYPE_CHILD,
        /// The referenced calendar component is a peer of the calendar component
        Sibling => KW_RELTYPE_SIBLING,
    }
}

define_keyword_enum_with_unknown! {
    #[derive(Default)]
    enum ParticipationRole {
        Chair             => KW_ROLE_CHAIR,
        #[default]
        ReqParticipant    => KW_ROLE_REQ_PARTICIPANT,
        OptParticipant    => KW_ROLE_OPT_PARTICIPANT,
        NonParticipant    => KW_ROLE_NON_PARTICIPANT,
    }
}

define_keyword_enum_with_unknown! {
    /// Value data type named by the VALUE parameter.
    enum ValueType {
        Binary              => KW_BINARY,
        Boolean             => KW_BOOLEAN,
        CalendarUserAddress => KW_CAL_ADDRESS,
        Date                => KW_DATE,
        DateTime            => KW_DATETIME,
        Duration            => KW_DURATION_TYPE,
        Float               => KW_FLOAT,
        Integer             => KW_INTEGER,
        Period              => KW_PERIOD,
        RecurrenceRule      => KW_RECUR,
        Text                => KW_TEXT,
        Time                => KW_TIME,
        Uri                 => KW_URI,
        UtcOffset           => KW_UTC_OFFSET,
    }
}
