// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Golden tests for the encoder.
//!
//! Each calendar is decoded and encoded again; the output must match the
//! expected text byte for byte.

use calwire_ical::{
    AnyTimeZone, Date, DateTime, DecodeOptions, EncodeError, FormatOptions, ICalendar, Parameter,
    Text, Time, UnknownProperty, VEvent, ValidationError, Version, decode, decode_with,
    encode_to_string, encode_with,
};

fn reencode(src: &str) -> String {
    let cal = decode(src.as_bytes()).unwrap();
    encode_to_string(&cal).unwrap()
}

#[test_log::test]
fn calendar_properties_in_fixed_order() {
    let src = "BEGIN:VCALENDAR\r\n\
PRODID:Test\r\n\
VERSION:2.0\r\n\
END:VCALENDAR\r\n";
    let expected = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:Test\r\n\
END:VCALENDAR\r\n";

    let cal = decode(src.as_bytes()).unwrap();
    assert_eq!(cal.prod_id.value, "Test");
    assert_eq!(cal.version.value, Version::V2);
    assert!(cal.components.is_empty());
    assert_eq!(encode_to_string(&cal).unwrap(), expected);
}

#[test_log::test]
fn event_golden() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp.//CalWire//EN\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20250110T120000Z\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
ORGANIZER:mailto:jsmith@example.com\r\n\
DTSTART:20250110T140000Z\r\n\
DTEND:20250110T150000Z\r\n\
STATUS:CONFIRMED\r\n\
SUMMARY:Annual Employee Review\r\n\
CATEGORIES:BUSINESS,HUMAN RESOURCES\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), src);
}

#[test_log::test]
fn event_fields_are_reordered() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:x\r\n\
BEGIN:VEVENT\r\n\
CATEGORIES:BUSINESS\r\n\
SUMMARY:Review\r\n\
UID:1@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let expected = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:x\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20250110T120000Z\r\n\
UID:1@example.com\r\n\
SUMMARY:Review\r\n\
CATEGORIES:BUSINESS\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), expected);
}

#[test_log::test]
fn todo_golden() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//ABC Corporation//NONSGML My Product//EN\r\n\
BEGIN:VTODO\r\n\
DTSTAMP:20070313T123432Z\r\n\
UID:20070313T123432Z-456553@example.com\r\n\
DUE;VALUE=DATE:20070501\r\n\
STATUS:NEEDS-ACTION\r\n\
SUMMARY:Submit Quebec Income Tax Return for 2006\r\n\
CLASS:CONFIDENTIAL\r\n\
CATEGORIES:FAMILY,FINANCE\r\n\
BEGIN:VALARM\r\n\
ACTION:AUDIO\r\n\
TRIGGER:-P2D\r\n\
ATTACH;FMTTYPE=audio/basic:http://example.com/pub/audio-files/ssbanner.aud\r\n\
END:VALARM\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), src);
}

#[test_log::test]
fn journal_golden() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//ABC Corporation//NONSGML My Product//EN\r\n\
BEGIN:VJOURNAL\r\n\
DTSTAMP:19970324T120000Z\r\n\
UID:uid5@example.com\r\n\
ORGANIZER:mailto:jsmith@example.com\r\n\
STATUS:DRAFT\r\n\
CLASS:PUBLIC\r\n\
DESCRIPTION:Project xyz Review Meeting Minutes\\nAgenda\\, in short\r\n\
CATEGORIES:Project Report,XYZ,Weekly Meeting\r\n\
END:VJOURNAL\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), src);
}

#[test_log::test]
fn free_busy_golden() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//RDU Software//NONSGML HandCal//EN\r\n\
METHOD:PUBLISH\r\n\
BEGIN:VFREEBUSY\r\n\
DTSTAMP:19970901T120000Z\r\n\
UID:19970901T115957Z-76A912@example.com\r\n\
ORGANIZER:mailto:jsmith@example.com\r\n\
DTSTART:19980313T141711Z\r\n\
DTEND:19980410T141711Z\r\n\
URL:http://www.example.com/calendar/busytime/jsmith.ifb\r\n\
FREEBUSY:19980314T233000Z/19980315T003000Z\r\n\
FREEBUSY;FBTYPE=BUSY:19980316T153000Z/PT1H,19980316T163000Z/PT30M\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), src);
}

#[test_log::test]
fn time_zone_golden() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
LAST-MODIFIED:20050809T050000Z\r\n\
BEGIN:STANDARD\r\n\
DTSTART:20071104T020000\r\n\
TZOFFSETTO:-0500\r\n\
TZOFFSETFROM:-0400\r\n\
RRULE:FREQ=YEARLY;BYDAY=1SU;BYMONTH=11\r\n\
TZNAME:EST\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:20070311T020000\r\n\
TZOFFSETTO:-0400\r\n\
TZOFFSETFROM:-0500\r\n\
RRULE:FREQ=YEARLY;BYDAY=2SU;BYMONTH=3\r\n\
TZNAME:EDT\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), src);
}

#[test_log::test]
fn zoned_values_get_their_tzid_back() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:x\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20250110T120000Z\r\n\
UID:1@example.com\r\n\
DTSTART;TZID=Custom/Zone:20250110T090000\r\n\
DURATION:PT1H30M\r\n\
EXDATE;TZID=Custom/Zone:20250117T090000,20250124T090000\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let options = DecodeOptions::default().with_tz_resolver(AnyTimeZone);
    let cal = decode_with(src.as_bytes(), &options).unwrap();
    assert_eq!(encode_to_string(&cal).unwrap(), src);
}

#[test_log::test]
fn unknown_properties_follow_known_ones() {
    let src = "BEGIN:VCALENDAR\r\n\
X-WR-CALNAME:Team\r\n\
VERSION:2.0\r\n\
PRODID:x\r\n\
BEGIN:VEVENT\r\n\
X-MICROSOFT-CDO-BUSYSTATUS;X-SOURCE=outlook:BUSY\r\n\
UID:1@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let expected = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:x\r\n\
X-WR-CALNAME:Team\r\n\
BEGIN:VEVENT\r\n\
DTSTAMP:20250110T120000Z\r\n\
UID:1@example.com\r\n\
X-MICROSOFT-CDO-BUSYSTATUS;X-SOURCE=outlook:BUSY\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    assert_eq!(reencode(src), expected);
}

#[test_log::test]
fn invalid_calendar_is_rejected_before_writing() {
    let mut cal = ICalendar::new(Version::V2, Text::from("x"));
    cal.unknown.push(UnknownProperty::new("NOT A NAME", "v"));

    let mut buffer = Vec::new();
    let err = encode_with(&mut buffer, &cal, FormatOptions::default()).unwrap_err();
    let EncodeError::Invalid(err) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert!(matches!(err.root(), ValidationError::InvalidName(_)));
    assert!(buffer.is_empty());
}

#[test_log::test]
fn managed_parameters_cannot_be_set_by_hand() {
    let mut event = VEvent::new(
        DateTime::utc(Date::new(2025, 1, 10), Time::new(12, 0, 0)),
        Text::from("1@example.com"),
    );
    event.dt_stamp = event
        .dt_stamp
        .clone()
        .with_param(Parameter::TzId("Europe/Berlin".to_string()));

    let mut cal = ICalendar::new(Version::V2, Text::from("x"));
    cal.components.push(event.into());
    let err = encode_to_string(&cal).unwrap_err();
    let EncodeError::Invalid(err) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(err.path(), ["VCALENDAR", "VEVENT", "DTSTAMP"]);
}
