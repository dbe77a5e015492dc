// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decode, validate and encode iCalendar (RFC 5545) objects.
//!
//! Decoding runs as a pull pipeline over any [`std::io::Read`]:
//!
//! ```text
//! bytes → Unfolder → Lexer → Phraser → components
//! ```
//!
//! Encoding validates the calendar first, then writes it through a
//! line-folding [`Formatter`](formatter::Formatter).
//!
//! ```
//! # use calwire_ical::{decode, encode_to_string};
//! let src = "\
//! BEGIN:VCALENDAR\r\n\
//! PRODID:Test\r\n\
//! VERSION:2.0\r\n\
//! END:VCALENDAR\r\n\
//! ";
//! let cal = decode(src.as_bytes()).unwrap();
//! assert_eq!(
//!     encode_to_string(&cal).unwrap(),
//!     "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:Test\r\nEND:VCALENDAR\r\n"
//! );
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

#[macro_use]
mod macros;

pub mod error;
pub mod formatter;
pub mod keyword;
pub mod parameter;
mod parser;
pub mod property;
pub mod semantic;
pub mod syntax;
pub mod tz;
pub mod value;

pub use crate::error::{DecodeError, EncodeError, RuleViolation, ValidationError};
pub use crate::formatter::{FoldingStyle, FormatOptions};
pub use crate::parameter::{
    AlarmTriggerRelationship, CalendarUserType, Encoding, FreeBusyType, Parameter, ParameterError,
    ParameterKind, Parameters, ParticipationRole, ParticipationStatus, RecurrenceIdRange,
    RelationshipType, UnknownParameter, ValueType,
};
pub use crate::parser::{decode, decode_with, encode, encode_to_string, encode_with};
pub use crate::property::{
    Action, Attachment, CalendarScale, Classification, EventStatus, ExceptionDates, Geo,
    JournalStatus, Method, PercentComplete, Priority, Property, PropertyKind, PropertyValue,
    RecurrenceDates, RequestStatus, TimeTransparency, TodoStatus, Trigger, UnknownProperty,
    Version,
};
pub use crate::semantic::{
    AudioAlarm, CalendarComponent, Daylight, DisplayAlarm, EmailAlarm, ICalendar, Standard,
    UriAlarm, VAlarm, VEvent, VFreeBusy, VJournal, VTimeZone, VTodo,
};
pub use crate::tz::{AnyTimeZone, DecodeOptions, IanaTimeZones, TzError, TzResolver};
pub use crate::value::{
    Binary, Date, DateOrDateTime, DateTime, Duration, Frequency, Period, PeriodEnd,
    RecurrenceRule, Text, Time, Uri, UtcOffset, ValueError, WeekDay, WeekDayNum, Zone,
};
