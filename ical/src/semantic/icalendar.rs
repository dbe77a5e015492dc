// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar container types.

use std::io::{self, Read, Write};

use crate::error::{DecodeError, ValidationError};
use crate::keyword::{
    KW_VCALENDAR, KW_VEVENT, KW_VFREEBUSY, KW_VJOURNAL, KW_VTIMEZONE, KW_VTODO,
};
use crate::property::{CalendarScale, Method, Version};
use crate::semantic::analysis::{ComponentReader, Nested, Rules};
use crate::semantic::{VEvent, VFreeBusy, VJournal, VTimeZone, VTodo};
use crate::value::Text;

define_component! {
    /// Main iCalendar object (VCALENDAR)
    pub struct ICalendar(KW_VCALENDAR, CalendarCollector) {
        required {
            /// Version of the iCalendar specification, always 2.0
            version: Version => Version,
            /// Identifier of the product that created the object
            prod_id: Text => ProdId,
        }
        optional {
            /// Calendar scale, GREGORIAN unless stated otherwise
            cal_scale: CalendarScale => CalScale,
            /// iTIP method
            method: Method => Method,
        }
        repeated {}
        children {
            /// Components in input order
            components: CalendarComponent,
        }
    }
}

impl ICalendar {
    /// Events in the calendar.
    pub fn events(&self) -> impl Iterator<Item = &VEvent> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
    }

    /// To-dos in the calendar.
    pub fn todos(&self) -> impl Iterator<Item = &VTodo> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Todo(todo) => Some(todo),
            _ => None,
        })
    }

    /// Time zone definitions in the calendar.
    pub fn time_zones(&self) -> impl Iterator<Item = &VTimeZone> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::TimeZone(tz) => Some(tz),
            _ => None,
        })
    }
}

impl Rules for ICalendar {}

/// A component at the top level of a calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarComponent {
    /// VEVENT
    Event(VEvent),
    /// VTODO
    Todo(VTodo),
    /// VJOURNAL
    Journal(VJournal),
    /// VFREEBUSY
    FreeBusy(VFreeBusy),
    /// VTIMEZONE
    TimeZone(VTimeZone),
}

impl CalendarComponent {
    /// Name on the component's `BEGIN` line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Event(_) => KW_VEVENT,
            Self::Todo(_) => KW_VTODO,
            Self::Journal(_) => KW_VJOURNAL,
            Self::FreeBusy(_) => KW_VFREEBUSY,
            Self::TimeZone(_) => KW_VTIMEZONE,
        }
    }
}

impl Nested for CalendarComponent {
    fn read_nested<R: Read>(
        name: &str,
        reader: &mut ComponentReader<'_, R>,
    ) -> Result<Option<Self>, DecodeError> {
        let component = match name {
            KW_VEVENT => Self::Event(reader.read()?),
            KW_VTODO => Self::Todo(reader.read()?),
            KW_VJOURNAL => Self::Journal(reader.read()?),
            KW_VFREEBUSY => Self::FreeBusy(reader.read()?),
            KW_VTIMEZONE => Self::TimeZone(reader.read()?),
            _ => return Ok(None),
        };
        Ok(Some(component))
    }

    fn write_nested<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Self::Event(c) => c.write_nested(w),
            Self::Todo(c) => c.write_nested(w),
            Self::Journal(c) => c.write_nested(w),
            Self::FreeBusy(c) => c.write_nested(w),
            Self::TimeZone(c) => c.write_nested(w),
        }
    }

    fn validate_nested(&self) -> Result<(), ValidationError> {
        match self {
            Self::Event(c) => c.validate_nested(),
            Self::Todo(c) => c.validate_nested(),
            Self::Journal(c) => c.validate_nested(),
            Self::FreeBusy(c) => c.validate_nested(),
            Self::TimeZone(c) => c.validate_nested(),
        }
    }
}

impl From<VEvent> for CalendarComponent {
    fn from(event: VEvent) -> Self {
        Self::Event(event)
    }
}

impl From<VTodo> for CalendarComponent {
    fn from(todo: VTodo) -> Self {
        Self::Todo(todo)
    }
}

impl From<VJournal> for CalendarComponent {
    fn from(journal: VJournal) -> Self {
        Self::Journal(journal)
    }
}

impl From<VFreeBusy> for CalendarComponent {
    fn from(free_busy: VFreeBusy) -> Self {
        Self::FreeBusy(free_busy)
    }
}

impl From<VTimeZone> for CalendarComponent {
    fn from(tz: VTimeZone) -> Self {
        Self::TimeZone(tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Phraser;
    use crate::tz::DecodeOptions;

    fn read(src: &str) -> Result<ICalendar, DecodeError> {
        let options = DecodeOptions::default();
        let mut reader = ComponentReader::new(Phraser::new(src.as_bytes()), &options);
        reader.read::<ICalendar>()
    }

    #[test]
    fn components_keep_input_order() {
        let cal = read(
            "VERSION:2.0\r\n\
             PRODID:-//Example//EN\r\n\
             BEGIN:VTODO\r\n\
             DTSTAMP:20070313T123432Z\r\n\
             UID:todo-1\r\n\
             END:VTODO\r\n\
             BEGIN:VEVENT\r\n\
             DTSTAMP:20070313T123432Z\r\n\
             UID:event-1\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR\r\n",
        )
        .unwrap();
        let names: Vec<_> = cal.components.iter().map(CalendarComponent::name).collect();
        assert_eq!(names, ["VTODO", "VEVENT"]);
        assert_eq!(cal.events().count(), 1);
        assert_eq!(cal.todos().count(), 1);
    }

    #[test]
    fn unknown_components_are_skipped() {
        let cal = read(
            "VERSION:2.0\r\n\
             PRODID:-//Example//EN\r\n\
             BEGIN:X-WIDGET\r\n\
             BEGIN:VEVENT\r\n\
             END:VEVENT\r\n\
             END:X-WIDGET\r\n\
             END:VCALENDAR\r\n",
        )
        .unwrap();
        assert!(cal.components.is_empty());
    }

    #[test]
    fn required_properties() {
        let err = read("VERSION:2.0\r\nEND:VCALENDAR\r\n").unwrap_err();
        assert!(matches!(
            err.root(),
            DecodeError::MissingProperty(crate::property::PropertyKind::ProdId)
        ));

        let err = read("VERSION:3.0\r\nPRODID:x\r\nEND:VCALENDAR\r\n").unwrap_err();
        assert_eq!(err.path(), vec!["VCALENDAR", "VERSION"]);
    }

    #[test]
    fn nested_errors_carry_the_path() {
        let err = read(
            "VERSION:2.0\r\n\
             PRODID:x\r\n\
             BEGIN:VEVENT\r\n\
             DTSTAMP:20070313T123432Z\r\n\
             UID:event-1\r\n\
             BEGIN:VALARM\r\n\
             ACTION:DISPLAY\r\n\
             TRIGGER:soon\r\n\
             DESCRIPTION:x\r\n\
             END:VALARM\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR\r\n",
        )
        .unwrap_err();
        assert_eq!(err.path(), vec!["VCALENDAR", "VEVENT", "VALARM", "TRIGGER"]);
    }
}
