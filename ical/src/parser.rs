// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Read, Write};

use crate::error::{DecodeError, EncodeError};
use crate::formatter::{FormatOptions, Formatter};
use crate::keyword::{KW_BEGIN, KW_VCALENDAR};
use crate::semantic::{Component, ComponentReader, ICalendar};
use crate::syntax::Phraser;
use crate::tz::DecodeOptions;

/// Decode a calendar with the default options.
///
/// ## Errors
///
/// Returns the first error found, wrapped with the components and property
/// it occurred in. Input that ends before `END:VCALENDAR`, including empty
/// input, yields [`DecodeError::UnexpectedEof`] at the root.
///
/// ## Examples
///
/// ```
/// # use calwire_ical::decode;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// PRODID:Test\r\n\
/// VERSION:2.0\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let cal = decode(src.as_bytes()).unwrap();
/// assert_eq!(cal.prod_id.value, "Test");
/// assert!(cal.components.is_empty());
/// ```
///
/// Errors report where they happened:
///
/// ```
/// # use calwire_ical::decode;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// PRODID:Test\r\n\
/// VERSION:2.0\r\n\
/// BEGIN:VEVENT\r\n\
/// UID:1\r\n\
/// DTSTAMP:yesterday\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let err = decode(src.as_bytes()).unwrap_err();
/// assert_eq!(err.path(), ["VCALENDAR", "VEVENT", "DTSTAMP"]);
/// ```
pub fn decode<R: Read>(reader: R) -> Result<ICalendar, DecodeError> {
    decode_with(reader, &DecodeOptions::default())
}

/// Decode a calendar.
///
/// Only the first calendar is read; anything after its `END:VCALENDAR` line
/// is left unread.
///
/// ## Errors
///
/// See [`decode`].
#[tracing::instrument(skip_all)]
pub fn decode_with<R: Read>(reader: R, options: &DecodeOptions) -> Result<ICalendar, DecodeError> {
    let mut reader = ComponentReader::new(Phraser::new(reader), options);
    let first = reader.next_line()?;
    if first.name != KW_BEGIN || !first.value.eq_ignore_ascii_case(KW_VCALENDAR) {
        return Err(DecodeError::NotCalendar {
            found: format!("{}:{}", first.name, first.value),
        });
    }
    let calendar = reader.read::<ICalendar>()?;
    tracing::debug!(components = calendar.components.len(), "decoded calendar");
    Ok(calendar)
}

/// Encode a calendar with the default options.
///
/// ## Errors
///
/// Returns [`EncodeError::Invalid`] before anything is written if the
/// calendar does not validate, or [`EncodeError::Io`] if writing fails.
pub fn encode<W: Write>(writer: W, calendar: &ICalendar) -> Result<(), EncodeError> {
    encode_with(writer, calendar, FormatOptions::default())
}

/// Encode a calendar.
///
/// ## Errors
///
/// See [`encode`].
#[tracing::instrument(skip_all)]
pub fn encode_with<W: Write>(
    writer: W,
    calendar: &ICalendar,
    options: FormatOptions,
) -> Result<(), EncodeError> {
    calendar.validate()?;
    let mut formatter = Formatter::new(writer, options);
    calendar.write(&mut formatter)?;
    formatter.flush()?;
    Ok(())
}

/// Encode a calendar to a string with the default options.
///
/// ## Errors
///
/// Returns [`EncodeError::Invalid`] if the calendar does not validate.
///
/// ## Examples
///
/// ```
/// # use calwire_ical::{ICalendar, Text, Version, encode_to_string};
/// let cal = ICalendar::new(Version::V2, Text::from("Test"));
/// assert_eq!(
///     encode_to_string(&cal).unwrap(),
///     "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:Test\r\nEND:VCALENDAR\r\n"
/// );
/// ```
pub fn encode_to_string(calendar: &ICalendar) -> Result<String, EncodeError> {
    let mut buffer = Vec::new();
    encode(&mut buffer, calendar)?;
    let s = String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_must_open_a_calendar() {
        let err = decode("BEGIN:VEVENT\r\nEND:VEVENT\r\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "expected BEGIN:VCALENDAR, found BEGIN:VEVENT");

        let err = decode("PRODID:x\r\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::NotCalendar { .. }));
    }

    #[test]
    fn lowercase_begin_value_is_accepted() {
        let src = "BEGIN:vcalendar\r\nVERSION:2.0\r\nPRODID:x\r\nEND:VCALENDAR\r\n";
        assert!(decode(src.as_bytes()).is_ok());
    }

    #[test]
    fn empty_and_truncated_input() {
        assert!(decode("".as_bytes()).unwrap_err().is_eof());
        let err = decode("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:x\r\n".as_bytes()).unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn trailing_content_is_not_read() {
        let cal = decode(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:x\r\nEND:VCALENDAR\r\n\x00garbage".as_bytes(),
        );
        assert!(cal.is_ok());
    }

    #[test]
    fn invalid_calendar_writes_nothing() {
        let mut cal = ICalendar::new(crate::property::Version::V2, crate::value::Text::from("x"));
        cal.prod_id.value = crate::value::Text::from("bad\u{7}");
        let mut buffer = Vec::new();
        let err = encode(&mut buffer, &cal).unwrap_err();
        assert!(matches!(err, EncodeError::Invalid(_)));
        assert!(buffer.is_empty());
    }
}
