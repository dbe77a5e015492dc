// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! This module provides strongly-typed structures that represent the
//! components of an iCalendar object. Every component is read by the same
//! loop in `analysis`, which hands known properties to a per-component
//! collector generated from the component's property table.
//!
//! Unknown properties are kept on the component that carried them and
//! written back after its known properties. Unknown components are skipped.

#[macro_use]
mod analysis;
#[macro_use]
mod define;

mod icalendar;
mod valarm;
mod vevent;
mod vfreebusy;
mod vjournal;
mod vtimezone;
mod vtodo;

pub(crate) use analysis::{Component, ComponentReader};
pub use icalendar::{CalendarComponent, ICalendar};
pub use valarm::{AudioAlarm, DisplayAlarm, EmailAlarm, UriAlarm, VAlarm};
pub use vevent::VEvent;
pub use vfreebusy::VFreeBusy;
pub use vjournal::VJournal;
pub use vtimezone::{Daylight, Standard, VTimeZone};
pub use vtodo::VTodo;
