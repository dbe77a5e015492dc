// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::keyword::{
    KW_ALTREP, KW_CN, KW_CUTYPE, KW_DELEGATED_FROM, KW_DELEGATED_TO, KW_DIR, KW_ENCODING,
    KW_FBTYPE, KW_FMTTYPE, KW_LANGUAGE, KW_MEMBER, KW_PARTSTAT, KW_RANGE, KW_RELATED, KW_RELTYPE,
    KW_ROLE, KW_RSVP, KW_SENT_BY, KW_TZID, KW_VALUE,
};

macro_rules! define_parameter_kind {
    (
        $(#[$attr:meta])*
        enum $ty:ident {
            $(
                $variant:ident => $kw:ident
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$attr])*
        pub enum $ty {
            $(
                $variant,
            )+
        }

        impl $ty {
            /// Every known parameter kind.
            pub const ALL: &[Self] = &[$(Self::$variant,)+];

            /// Returns the name keyword for the parameter type
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $kw,
                    )+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ();

            /// Names are matched case-insensitively.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

define_parameter_kind! {
    /// Kinds of known iCalendar parameters
    #[expect(missing_docs)]
    enum ParameterKind {
        AltRep              => KW_ALTREP,
        CommonName          => KW_CN,
        CalendarUserType    => KW_CUTYPE,
        DelegatedFrom       => KW_DELEGATED_FROM,
        DelegatedTo         => KW_DELEGATED_TO,
        Directory           => KW_DIR,
        Encoding            => KW_ENCODING,
        FormatType          => KW_FMTTYPE,
        FreeBusyType        => KW_FBTYPE,
        Language            => KW_LANGUAGE,
        Member              => KW_MEMBER,
        ParticipationStatus => KW_PARTSTAT,
        Range               => KW_RANGE,
        Related             => KW_RELATED,
        RelationshipType    => KW_RELTYPE,
        Role                => KW_ROLE,
        Rsvp                => KW_RSVP,
        SentBy              => KW_SENT_BY,
        TzId                => KW_TZID,
        ValueType           => KW_VALUE,
    }
}
