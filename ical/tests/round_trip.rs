// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for calendars built in code.
//!
//! These tests verify that encoding a valid calendar and decoding the
//! output gives back an equal calendar.

use calwire_ical::{
    Action, AnyTimeZone, Attachment, AudioAlarm, Binary, CalendarComponent, CalendarScale,
    Classification, Date, DateOrDateTime, DateTime, Daylight, DecodeOptions, DisplayAlarm,
    Duration, EmailAlarm, EventStatus, ExceptionDates, FreeBusyType, Frequency, Geo, ICalendar,
    JournalStatus, Method, Parameter, ParticipationRole, PercentComplete, Period, Priority,
    Property, RecurrenceDates, RecurrenceRule, RequestStatus, Standard, Text, Time,
    TimeTransparency, TodoStatus, Trigger, UnknownProperty, Uri, UriAlarm, UtcOffset, VAlarm,
    VEvent, VFreeBusy, VJournal, VTimeZone, VTodo, Version, WeekDay, WeekDayNum, decode_with,
    encode_to_string,
};

fn utc(y: i16, mo: i8, d: i8, h: u8, mi: u8) -> DateTime {
    DateTime::utc(Date::new(y, mo, d), Time::new(h, mi, 0))
}

fn uri(s: &str) -> Uri {
    s.parse().unwrap()
}

fn round_trip(cal: &ICalendar) {
    cal.validate().unwrap();
    let text = encode_to_string(cal).unwrap();
    let options = DecodeOptions::default().with_tz_resolver(AnyTimeZone);
    let decoded = decode_with(text.as_bytes(), &options).unwrap();
    assert_eq!(&decoded, cal, "encoded as:\n{text}");
}

fn calendar() -> ICalendar {
    let mut cal = ICalendar::new(Version::V2, Text::from("-//CalWire//Tests//EN"));
    cal.cal_scale = Some(CalendarScale::Gregorian.into());
    cal.method = Some(Method::Publish.into());
    cal
}

#[test_log::test]
fn minimal_components() {
    let stamp = utc(2025, 1, 10, 12, 0);
    let mut cal = calendar();
    cal.components
        .push(VEvent::new(stamp.clone(), Text::from("event@example.com")).into());
    cal.components
        .push(VTodo::new(stamp.clone(), Text::from("todo@example.com")).into());
    cal.components
        .push(VJournal::new(stamp.clone(), Text::from("journal@example.com")).into());
    cal.components
        .push(VFreeBusy::new(stamp, Text::from("fb@example.com")).into());
    round_trip(&cal);
}

#[test_log::test]
fn event_with_everything() {
    let mut event = VEvent::new(utc(2025, 1, 10, 12, 0), Text::from("all@example.com"));
    event.organizer = Some(
        Property::new(uri("mailto:boss@example.com"))
            .with_param(Parameter::CommonName("The Boss".to_string())),
    );
    event.dt_start = Some(Property::new(DateOrDateTime::DateTime(DateTime::zoned(
        Date::new(2025, 1, 13),
        Time::new(9, 0, 0),
        "Europe/Berlin",
    ))));
    event.duration = Some(Property::new(Duration::from_seconds(true, 5400)));
    event.status = Some(EventStatus::Tentative.into());
    event.summary = Some(
        Property::new(Text::from("Weekly sync; agenda, notes\nand more"))
            .with_param(Parameter::Language("en-GB".to_string())),
    );
    event.description = Some(Text::from("Back\\slash").into());
    event.location = Some(Text::from("Room 4").into());
    event.geo = Some(Geo::new(52.52, 13.405).into());
    event.class = Some(Classification::Private.into());
    event.created = Some(utc(2024, 12, 1, 8, 30).into());
    event.last_modified = Some(utc(2024, 12, 2, 8, 30).into());
    event.priority = Some(Priority(1).into());
    event.sequence = Some(Property::new(3));
    event.transp = Some(TimeTransparency::Transparent.into());
    event.url = Some(uri("https://example.com/sync").into());

    let mut rule = RecurrenceRule::new(Frequency::Weekly);
    rule.count = Some(10);
    rule.by_day = vec![WeekDayNum::every(WeekDay::Monday)];
    event.rrule = Some(rule.into());

    event
        .categories
        .push(vec![Text::from("WORK"), Text::from("MEETING, WEEKLY")].into());
    event.attachments.push(Attachment::Uri(uri("https://example.com/a.pdf")).into());
    event
        .attachments
        .push(Attachment::Binary(Binary(b"\x00\x01binary".to_vec())).into());
    event.attendees.push(
        Property::new(uri("mailto:a@example.com"))
            .with_param(Parameter::Role(ParticipationRole::Chair))
            .with_param(Parameter::Rsvp(true)),
    );
    event.comments.push(Text::from("first").into());
    event.contacts.push(Text::from("Jim Dolittle, ABC Industries").into());
    event.exdates.push(
        ExceptionDates::DateTimes(vec![DateTime::zoned(
            Date::new(2025, 1, 20),
            Time::new(9, 0, 0),
            "Europe/Berlin",
        )])
        .into(),
    );
    event.rdates.push(
        RecurrenceDates::Periods(vec![Period::with_duration(
            utc(2025, 2, 1, 8, 0),
            Duration::from_seconds(true, 3600),
        )])
        .into(),
    );
    event.rdates.push(RecurrenceDates::Dates(vec![Date::new(2025, 3, 1)]).into());
    event.related_to.push(Text::from("parent@example.com").into());
    event
        .request_status
        .push(RequestStatus::new("2.0", "Success").into());
    event.resources.push(vec![Text::from("PROJECTOR")].into());
    event.unknown.push(UnknownProperty::new("X-LIC-ERROR", "none"));

    event.alarms.push(VAlarm::Display(DisplayAlarm::new(
        Text::from("Sync soon"),
        Trigger::before_start(Duration::from_seconds(false, 900)),
    )));
    let mut audio = AudioAlarm::new(Trigger::Absolute(utc(2025, 1, 13, 7, 0)));
    audio.duration = Some(Duration::from_seconds(true, 300).into());
    audio.repeat = Some(Property::new(2));
    audio.attachment = Some(Attachment::Uri(uri("ftp://example.com/beep.aud")).into());
    event.alarms.push(audio.into());
    let mut email = EmailAlarm::new(
        Text::from("Agenda attached"),
        Trigger::before_start(Duration::from_seconds(false, 86_400)),
        Text::from("Reminder"),
    );
    email.attendees.push(uri("mailto:team@example.com").into());
    event.alarms.push(email.into());
    event.alarms.push(
        UriAlarm::new(
            Trigger::before_start(Duration::from_seconds(false, 60)),
            uri("https://example.com/hook"),
        )
        .into(),
    );

    let mut cal = calendar();
    cal.components.push(event.into());
    round_trip(&cal);

    let Some(CalendarComponent::Event(event)) = cal.components.first() else {
        unreachable!()
    };
    let actions: Vec<_> = event.alarms.iter().map(VAlarm::action).collect();
    assert_eq!(actions, [Action::Display, Action::Audio, Action::Email, Action::Uri]);
}

#[test_log::test]
fn todo_and_journal() {
    let mut todo = VTodo::new(utc(2025, 1, 10, 12, 0), Text::from("todo@example.com"));
    todo.dt_start = Some(DateOrDateTime::Date(Date::new(2025, 1, 10)).into());
    todo.due = Some(DateOrDateTime::Date(Date::new(2025, 1, 31)).into());
    todo.completed = Some(utc(2025, 1, 20, 17, 45).into());
    todo.percent_complete = Some(PercentComplete(100).into());
    todo.status = Some(TodoStatus::Completed.into());

    let mut journal = VJournal::new(utc(2025, 1, 10, 12, 0), Text::from("journal@example.com"));
    journal.dt_start = Some(DateOrDateTime::Date(Date::new(2025, 1, 10)).into());
    journal.status = Some(JournalStatus::Final.into());
    journal.descriptions.push(Text::from("Day one").into());
    journal.descriptions.push(Text::from("Day two").into());

    let mut cal = calendar();
    cal.components.push(todo.into());
    cal.components.push(journal.into());
    round_trip(&cal);
}

#[test_log::test]
fn free_busy_and_time_zone() {
    let mut fb = VFreeBusy::new(utc(2025, 1, 10, 12, 0), Text::from("fb@example.com"));
    fb.dt_start = Some(DateOrDateTime::DateTime(utc(2025, 1, 10, 0, 0)).into());
    fb.dt_end = Some(DateOrDateTime::DateTime(utc(2025, 1, 17, 0, 0)).into());
    fb.free_busy.push(
        Property::new(vec![
            Period::explicit(utc(2025, 1, 10, 9, 0), utc(2025, 1, 10, 10, 0)),
            Period::with_duration(utc(2025, 1, 11, 9, 0), Duration::from_seconds(true, 1800)),
        ])
        .with_param(Parameter::FreeBusyType(FreeBusyType::BusyTentative)),
    );

    let mut tz = VTimeZone::new(Text::from("Europe/Berlin"));
    let mut dst_rule = RecurrenceRule::new(Frequency::Yearly);
    dst_rule.by_month = vec![3];
    dst_rule.by_day = vec![WeekDayNum::nth(-1, WeekDay::Sunday)];
    let mut daylight = Daylight::new(
        DateOrDateTime::DateTime(DateTime::floating(Date::new(1981, 3, 29), Time::new(2, 0, 0))),
        UtcOffset::new(true, 2, 0),
        UtcOffset::new(true, 1, 0),
    );
    daylight.rrule = Some(dst_rule.into());
    daylight.tz_names.push(Text::from("CEST").into());
    tz.daylight.push(daylight);

    let mut std_rule = RecurrenceRule::new(Frequency::Yearly);
    std_rule.by_month = vec![10];
    std_rule.by_day = vec![WeekDayNum::nth(-1, WeekDay::Sunday)];
    let mut standard = Standard::new(
        DateOrDateTime::DateTime(DateTime::floating(Date::new(1996, 10, 27), Time::new(3, 0, 0))),
        UtcOffset::new(true, 1, 0),
        UtcOffset::new(true, 2, 0),
    );
    standard.rrule = Some(std_rule.into());
    standard.tz_names.push(Text::from("CET").into());
    tz.standard.push(standard);

    let mut cal = calendar();
    cal.components.push(tz.into());
    cal.components.push(fb.into());
    round_trip(&cal);
}

#[test_log::test]
fn long_lines_survive_folding() {
    let mut event = VEvent::new(utc(2025, 1, 10, 12, 0), Text::from("long@example.com"));
    event.description = Some(Text::from("Grüße aus Köln 🎉 ".repeat(20)).into());

    let mut cal = calendar();
    cal.components.push(event.into());

    let text = encode_to_string(&cal).unwrap();
    assert!(text.split("\r\n").all(|line| line.len() <= 75));
    round_trip(&cal);
}
