// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line folding boundaries, checked through the whole encoder.

#![expect(clippy::indexing_slicing)]

use calwire_ical::{
    AnyTimeZone, CalendarComponent, Date, DateTime, DecodeOptions, FoldingStyle, FormatOptions,
    ICalendar, Text, Time, VEvent, Version, decode_with, encode_with,
};

/// Encode a calendar whose single event has the given summary and return
/// the physical lines the SUMMARY property was written on.
fn summary_lines(summary: &str, options: FormatOptions) -> Vec<String> {
    let mut event = VEvent::new(
        DateTime::utc(Date::new(2025, 1, 10), Time::new(12, 0, 0)),
        Text::from("fold@example.com"),
    );
    event.summary = Some(Text::from(summary).into());
    let mut cal = ICalendar::new(Version::V2, Text::from("x"));
    cal.components.push(event.into());

    let mut buffer = Vec::new();
    encode_with(&mut buffer, &cal, options).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let decoded = decode_with(
        text.as_bytes(),
        &DecodeOptions::default().with_tz_resolver(AnyTimeZone),
    )
    .unwrap();
    let Some(CalendarComponent::Event(event)) = decoded.components.first() else {
        panic!("expected an event");
    };
    assert_eq!(event.summary.as_ref().unwrap().value, summary);

    let lines: Vec<&str> = text.split("\r\n").collect();
    let start = lines
        .iter()
        .position(|line| line.starts_with("SUMMARY:"))
        .unwrap();
    let mut out = vec![lines[start].to_string()];
    out.extend(
        lines[start + 1..]
            .iter()
            .take_while(|line| line.starts_with([' ', '\t']))
            .map(ToString::to_string),
    );
    out
}

#[test_log::test]
fn boundary_lengths() {
    // "SUMMARY:" is 8 octets
    #[rustfmt::skip]
    let cases = [
        (74, vec![74]),
        (75, vec![75]),
        (76, vec![75, 2]),
        (150, vec![75, 75, 2]),
    ];
    for (octets, expected) in cases {
        let summary = "a".repeat(octets - 8);
        let lines = summary_lines(&summary, FormatOptions::default());
        let lengths: Vec<usize> = lines.iter().map(String::len).collect();
        assert_eq!(lengths, expected, "line of {octets} octets");
    }
}

#[test_log::test]
fn multibyte_character_is_not_split() {
    // 73 ASCII octets, then a 3-octet character crossing the limit
    let summary = format!("{}€b", "a".repeat(65));
    let lines = summary_lines(&summary, FormatOptions::default());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 73);
    assert_eq!(lines[1], " €b");

    // 72 ASCII octets, the character ends exactly on the limit
    let summary = format!("{}€b", "a".repeat(64));
    let lines = summary_lines(&summary, FormatOptions::default());
    assert_eq!(lines[0].len(), 75);
    assert!(lines[0].ends_with('€'));
    assert_eq!(lines[1], " b");
}

#[test_log::test]
fn custom_width_and_style() {
    let options = FormatOptions::default()
        .with_folding(20)
        .with_folding_style(FoldingStyle::Tab);
    let lines = summary_lines("0123456789abcdefghij", options);
    assert_eq!(lines, ["SUMMARY:0123456789ab", "\tcdefghij"]);

    let lines = summary_lines(&"z".repeat(200), FormatOptions::default().without_folding());
    assert_eq!(lines.len(), 1);
}
