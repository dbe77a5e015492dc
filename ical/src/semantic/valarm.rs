// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm component (VALARM, RFC 5545 Section 3.6.6).
//!
//! The properties an alarm takes depend on its ACTION, so an alarm is read
//! in two steps: its content lines are held until `END:VALARM`, then
//! replayed into the variant the ACTION selects. Known properties the
//! variant does not take are dropped with a warning.

use std::io::{self, Read, Write};

use crate::error::{DecodeError, RuleViolation, ValidationError};
use crate::keyword::KW_VALARM;
use crate::property::{Action, Attachment, Property, PropertyKind, Trigger, UnknownProperty};
use crate::semantic::analysis::{
    Collector, Component, ComponentReader, Rules, decode_once, validate_property,
};
use crate::syntax::ContentLine;
use crate::tz::DecodeOptions;
use crate::value::{Duration, Text, Uri};

/// Alarm component (VALARM)
#[derive(Debug, Clone, PartialEq)]
pub enum VAlarm {
    /// `ACTION:AUDIO`
    Audio(AudioAlarm),

    /// `ACTION:DISPLAY`
    Display(DisplayAlarm),

    /// `ACTION:EMAIL`
    Email(EmailAlarm),

    /// `ACTION:URI`
    Uri(UriAlarm),
}

impl VAlarm {
    /// The ACTION written for this alarm.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Audio(_) => Action::Audio,
            Self::Display(_) => Action::Display,
            Self::Email(_) => Action::Email,
            Self::Uri(_) => Action::Uri,
        }
    }

    /// Check the alarm can be encoded.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, with the path leading to it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::semantic::analysis::Nested::validate_nested(self)
    }
}

impl From<AudioAlarm> for VAlarm {
    fn from(alarm: AudioAlarm) -> Self {
        Self::Audio(alarm)
    }
}

impl From<DisplayAlarm> for VAlarm {
    fn from(alarm: DisplayAlarm) -> Self {
        Self::Display(alarm)
    }
}

impl From<EmailAlarm> for VAlarm {
    fn from(alarm: EmailAlarm) -> Self {
        Self::Email(alarm)
    }
}

impl From<UriAlarm> for VAlarm {
    fn from(alarm: UriAlarm) -> Self {
        Self::Uri(alarm)
    }
}

impl Component for VAlarm {
    const NAME: &'static str = KW_VALARM;
    type Collector = AlarmCollector;

    fn write_body<W: Write>(&self, w: &mut W) -> io::Result<()> {
        Property::new(self.action())
            .encode(PropertyKind::Action)
            .write_to(w)?;
        match self {
            Self::Audio(alarm) => alarm.write_body(w),
            Self::Display(alarm) => alarm.write_body(w),
            Self::Email(alarm) => alarm.write_body(w),
            Self::Uri(alarm) => alarm.write_body(w),
        }
    }

    fn validate_body(&self) -> Result<(), ValidationError> {
        validate_property(&Property::new(self.action()), PropertyKind::Action)?;
        match self {
            Self::Audio(alarm) => alarm.validate_body(),
            Self::Display(alarm) => alarm.validate_body(),
            Self::Email(alarm) => alarm.validate_body(),
            Self::Uri(alarm) => alarm.validate_body(),
        }
    }
}

nested_component!(VAlarm);

#[derive(Debug, Default)]
pub(crate) struct AlarmCollector {
    action: Option<Property<Action>>,
    lines: Vec<(PropertyKind, ContentLine)>,
    unknown: Vec<UnknownProperty>,
}

impl Collector for AlarmCollector {
    type Output = VAlarm;

    fn property(
        &mut self,
        kind: PropertyKind,
        line: ContentLine,
        options: &DecodeOptions,
    ) -> Result<Option<ContentLine>, DecodeError> {
        if kind == PropertyKind::Action {
            decode_once(&mut self.action, kind, line, options)?;
        } else {
            self.lines.push((kind, line));
        }
        Ok(None)
    }

    fn nested<R: Read>(
        &mut self,
        _: &str,
        _: &mut ComponentReader<'_, R>,
    ) -> Result<bool, DecodeError> {
        Ok(false)
    }

    fn unknown(&mut self, property: UnknownProperty) {
        self.unknown.push(property);
    }

    fn finish(self, options: &DecodeOptions) -> Result<VAlarm, DecodeError> {
        let action = self
            .action
            .ok_or(DecodeError::MissingProperty(PropertyKind::Action))?;
        match action.value {
            Action::Audio => replay(self.lines, self.unknown, options).map(VAlarm::Audio),
            Action::Display => replay(self.lines, self.unknown, options).map(VAlarm::Display),
            Action::Email => replay(self.lines, self.unknown, options).map(VAlarm::Email),
            Action::Uri => replay(self.lines, self.unknown, options).map(VAlarm::Uri),
        }
    }
}

fn replay<C: Component>(
    lines: Vec<(PropertyKind, ContentLine)>,
    unknown: Vec<UnknownProperty>,
    options: &DecodeOptions,
) -> Result<C, DecodeError> {
    let mut collector = C::Collector::default();
    for (kind, line) in lines {
        if let Some(line) = collector.property(kind, line, options)? {
            tracing::warn!(property = %line.name, "dropping property this alarm action does not take");
        }
    }
    for property in unknown {
        collector.unknown(property);
    }
    collector.finish(options)
}

fn check_repeat(duration: bool, repeat: bool) -> Result<(), RuleViolation> {
    if duration == repeat {
        Ok(())
    } else {
        Err(RuleViolation::Paired {
            first: PropertyKind::Duration,
            second: PropertyKind::Repeat,
        })
    }
}

define_component! {
    /// Alarm playing a sound
    pub struct AudioAlarm(KW_VALARM, AudioCollector) {
        required {
            /// When the alarm fires
            trigger: Trigger => Trigger,
        }
        optional {
            /// Delay between repetitions, set together with `repeat`
            duration: Duration => Duration,
            /// Number of repetitions, set together with `duration`
            repeat: u32 => Repeat,
            /// Sound to play
            attachment: Attachment => Attach,
        }
        repeated {}
        children {}
    }
}

impl Rules for AudioAlarm {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        check_repeat(self.duration.is_some(), self.repeat.is_some())
    }
}

define_component! {
    /// Alarm displaying a message
    pub struct DisplayAlarm(KW_VALARM, DisplayCollector) {
        required {
            /// Text to display
            description: Text => Description,
            /// When the alarm fires
            trigger: Trigger => Trigger,
        }
        optional {
            /// Delay between repetitions, set together with `repeat`
            duration: Duration => Duration,
            /// Number of repetitions, set together with `duration`
            repeat: u32 => Repeat,
        }
        repeated {}
        children {}
    }
}

impl Rules for DisplayAlarm {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        check_repeat(self.duration.is_some(), self.repeat.is_some())
    }
}

define_component! {
    /// Alarm sending an email
    pub struct EmailAlarm(KW_VALARM, EmailCollector) {
        required {
            /// Message body
            description: Text => Description,
            /// When the alarm fires
            trigger: Trigger => Trigger,
            /// Message subject
            summary: Text => Summary,
        }
        optional {
            /// Delay between repetitions, set together with `repeat`
            duration: Duration => Duration,
            /// Number of repetitions, set together with `duration`
            repeat: u32 => Repeat,
        }
        repeated {
            /// Recipients, at least one
            attendees: Uri => Attendee,
            /// Message attachments
            attachments: Attachment => Attach,
        }
        children {}
    }
}

impl Rules for EmailAlarm {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        if self.attendees.is_empty() {
            return Err(RuleViolation::AtLeastOne(PropertyKind::Attendee));
        }
        check_repeat(self.duration.is_some(), self.repeat.is_some())
    }
}

define_component! {
    /// Alarm opening a URI
    pub struct UriAlarm(KW_VALARM, UriCollector) {
        required {
            /// When the alarm fires
            trigger: Trigger => Trigger,
            /// URI to open
            url: Uri => Url,
        }
        optional {
            /// Delay between repetitions, set together with `repeat`
            duration: Duration => Duration,
            /// Number of repetitions, set together with `duration`
            repeat: u32 => Repeat,
            /// Description of the alarm
            description: Text => Description,
        }
        repeated {}
        children {}
    }
}

impl Rules for UriAlarm {
    fn check_rules(&self) -> Result<(), RuleViolation> {
        check_repeat(self.duration.is_some(), self.repeat.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Phraser;

    fn read(src: &str) -> Result<VAlarm, DecodeError> {
        let options = DecodeOptions::default();
        let mut reader = ComponentReader::new(Phraser::new(src.as_bytes()), &options);
        reader.read::<VAlarm>()
    }

    #[test]
    fn action_selects_variant() {
        let alarm = read(
            "TRIGGER:-PT30M\r\n\
             ACTION:DISPLAY\r\n\
             DESCRIPTION:Breakfast meeting\r\n\
             END:VALARM\r\n",
        )
        .unwrap();
        let VAlarm::Display(display) = &alarm else {
            panic!("expected a display alarm, got {alarm:?}");
        };
        assert_eq!(display.description.value, "Breakfast meeting");

        let mut out = Vec::new();
        alarm.write(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "BEGIN:VALARM\r\n\
             ACTION:DISPLAY\r\n\
             DESCRIPTION:Breakfast meeting\r\n\
             TRIGGER:-PT30M\r\n\
             END:VALARM\r\n"
        );
    }

    #[test]
    fn properties_foreign_to_action_are_dropped() {
        let alarm = read(
            "ACTION:AUDIO\r\n\
             TRIGGER:-PT15M\r\n\
             SUMMARY:not for audio\r\n\
             X-CUSTOM:kept\r\n\
             END:VALARM\r\n",
        )
        .unwrap();
        let VAlarm::Audio(audio) = alarm else {
            panic!("expected an audio alarm");
        };
        assert_eq!(audio.unknown.len(), 1);
        assert_eq!(audio.unknown[0].name, "X-CUSTOM");
    }

    #[test]
    fn duration_and_repeat_are_paired() {
        let err = read(
            "ACTION:AUDIO\r\n\
             TRIGGER:-PT15M\r\n\
             DURATION:PT5M\r\n\
             END:VALARM\r\n",
        )
        .unwrap_err();
        assert!(matches!(
            err.root(),
            DecodeError::RequirementNotMet(RuleViolation::Paired { .. })
        ));

        let alarm = read(
            "ACTION:AUDIO\r\n\
             TRIGGER:-PT15M\r\n\
             DURATION:PT5M\r\n\
             REPEAT:4\r\n\
             END:VALARM\r\n",
        );
        assert!(alarm.is_ok());
    }

    #[test]
    fn email_needs_attendee() {
        let err = read(
            "ACTION:EMAIL\r\n\
             TRIGGER:-P2D\r\n\
             SUMMARY:Reminder\r\n\
             DESCRIPTION:Call the office\r\n\
             END:VALARM\r\n",
        )
        .unwrap_err();
        assert!(matches!(
            err.root(),
            DecodeError::RequirementNotMet(RuleViolation::AtLeastOne(PropertyKind::Attendee))
        ));
    }

    #[test]
    fn missing_or_unknown_action() {
        let err = read("TRIGGER:-PT15M\r\nEND:VALARM\r\n").unwrap_err();
        assert!(matches!(
            err.root(),
            DecodeError::MissingProperty(PropertyKind::Action)
        ));

        let err = read("ACTION:X-PAGER\r\nTRIGGER:-PT15M\r\nEND:VALARM\r\n").unwrap_err();
        assert_eq!(err.path(), vec!["VALARM", "ACTION"]);

        let err = read("ACTION:URI\r\nTRIGGER:-PT15M\r\nEND:VALARM\r\n").unwrap_err();
        assert!(matches!(
            err.root(),
            DecodeError::MissingProperty(PropertyKind::Url)
        ));
    }
}
