// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by properties of many sections: TEXT (e.g. SUMMARY,
//! UID), lists of TEXT (CATEGORIES, RESOURCES), URI and CAL-ADDRESS (URL,
//! ATTENDEE, ORGANIZER), non-negative INTEGER (SEQUENCE, REPEAT), DURATION
//! and UTC-OFFSET (TZOFFSETFROM, TZOFFSETTO).

use crate::keyword::KW_INTEGER;
use crate::parameter::Parameters;
use crate::property::PropertyValue;
use crate::value::{
    Duration, Text, Uri, UtcOffset, ValueError, join_text_list, parse_integer, split_text_list,
    unescape_text,
};

impl PropertyValue for Text {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        Ok(Text::new(unescape_text(raw)))
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        Text::validate(self)
    }
}

impl PropertyValue for Vec<Text> {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        Ok(split_text_list(raw))
    }

    fn encode(&self, _: &mut Parameters) -> String {
        join_text_list(self)
    }

    fn validate(&self) -> Result<(), ValueError> {
        self.iter().try_for_each(Text::validate)
    }
}

impl PropertyValue for Uri {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        raw.parse()
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        Uri::validate(self)
    }
}

impl PropertyValue for u32 {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        let n = parse_integer(raw)?;
        u32::try_from(n).map_err(|_| ValueError::invalid(KW_INTEGER, format!("{n} is negative")))
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        match i32::try_from(*self) {
            Ok(_) => Ok(()),
            Err(_) => Err(ValueError::invalid(
                KW_INTEGER,
                format!("{self} does not fit a signed 32-bit integer"),
            )),
        }
    }
}

impl PropertyValue for Duration {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        raw.parse()
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        Ok(())
    }
}

impl PropertyValue for UtcOffset {
    fn decode(_: &mut Parameters, raw: &str) -> Result<Self, ValueError> {
        raw.parse()
    }

    fn encode(&self, _: &mut Parameters) -> String {
        self.to_string()
    }

    fn validate(&self) -> Result<(), ValueError> {
        UtcOffset::validate(self)
    }
}
