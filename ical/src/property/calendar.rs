// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar Properties (RFC 5545 Section 3.7)
//!
//! - 3.7.1: `CalendarScale` - Calendar scale (CALSCALE)
//! - 3.7.2: `Method` - iTIP method (METHOD)
//! - 3.7.3: Product identifier (PRODID), plain text
//! - 3.7.4: `Version` - iCalendar version (VERSION)

use crate::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_METHOD, KW_METHOD_ADD, KW_METHOD_CANCEL,
    KW_METHOD_COUNTER, KW_METHOD_DECLINECOUNTER, KW_METHOD_PUBLISH, KW_METHOD_REFRESH,
    KW_METHOD_REPLY, KW_METHOD_REQUEST, KW_VERSION, KW_VERSION_2_0,
};

define_keyword_enum! {
    /// iCalendar specification version (RFC 5545 Section 3.7.4).
    #[derive(Default)]
    enum Version {
        /// Version 2.0, written as "2.0"
        #[default]
        V2 => KW_VERSION_2_0,
    }
}

define_keyword_enum_with_unknown! {
    /// Calendar scale (RFC 5545 Section 3.7.1).
    #[derive(Default)]
    enum CalendarScale {
        /// Gregorian calendar
        #[default]
        Gregorian => KW_CALSCALE_GREGORIAN,
    }
}

define_keyword_enum_with_unknown! {
    /// iTIP method (RFC 5546 Section 1.4).
    enum Method {
        Publish        => KW_METHOD_PUBLISH,
        Request        => KW_METHOD_REQUEST,
        Reply          => KW_METHOD_REPLY,
        Add            => KW_METHOD_ADD,
        Cancel         => KW_METHOD_CANCEL,
        Refresh        => KW_METHOD_REFRESH,
        Counter        => KW_METHOD_COUNTER,
        DeclineCounter => KW_METHOD_DECLINECOUNTER,
    }
}

keyword_property_value!(Version, KW_VERSION);
keyword_property_value!(CalendarScale, KW_CALSCALE, with_unknown);
keyword_property_value!(Method, KW_METHOD, with_unknown);
