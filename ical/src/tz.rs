// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time zone resolution and decoder configuration.

use std::fmt;
use std::sync::Arc;

use jiff::tz::TimeZone;

/// Errors produced while resolving a `TZID`.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum TzError {
    /// The identifier does not name a known zone.
    #[error("unknown time zone {tzid:?}")]
    Unknown {
        /// The identifier looked up
        tzid: String,
        /// Why the lookup failed, if the resolver knows
        #[source]
        source: Option<jiff::Error>,
    },

    /// Date arithmetic failed while applying a zone.
    #[error(transparent)]
    Jiff(jiff::Error),
}

/// Maps a textual zone identifier to a zone.
///
/// The decoder consults the resolver for every `TZID` parameter it meets.
pub trait TzResolver: fmt::Debug + Send + Sync {
    /// Look up `tzid`.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::Unknown`] if the identifier cannot be resolved.
    fn resolve(&self, tzid: &str) -> Result<TimeZone, TzError>;
}

/// Resolves identifiers against the IANA time zone database.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimeZones;

impl TzResolver for IanaTimeZones {
    fn resolve(&self, tzid: &str) -> Result<TimeZone, TzError> {
        // Some producers write TZID as a path, e.g. "/mozilla.org/.../Europe/Berlin".
        let name = tzid.strip_prefix('/').unwrap_or(tzid);
        TimeZone::get(name)
            .or_else(|err| match iana_suffix(name) {
                Some(suffix) => TimeZone::get(suffix),
                None => Err(err),
            })
            .map_err(|err| TzError::Unknown {
                tzid: tzid.to_string(),
                source: Some(err),
            })
    }
}

/// The trailing `Area/Location` of a path-like identifier.
fn iana_suffix(name: &str) -> Option<&str> {
    let mut slashes = name.rmatch_indices('/');
    slashes.next()?;
    let (start, _) = slashes.next()?;
    name.get(start + 1..)
}

/// Accepts every identifier.
///
/// Identifiers known to the IANA database resolve to that zone; anything
/// else resolves to UTC. Useful for feeds that only reference zones defined
/// by their own VTIMEZONE components.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTimeZone;

impl TzResolver for AnyTimeZone {
    fn resolve(&self, tzid: &str) -> Result<TimeZone, TzError> {
        Ok(IanaTimeZones.resolve(tzid).unwrap_or(TimeZone::UTC))
    }
}

/// Options controlling [`decode_with`](crate::decode_with).
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Resolver consulted for every `TZID` parameter.
    pub tz_resolver: Arc<dyn TzResolver>,
}

impl DecodeOptions {
    /// Replace the time zone resolver.
    #[must_use]
    pub fn with_tz_resolver(mut self, resolver: impl TzResolver + 'static) -> Self {
        self.tz_resolver = Arc::new(resolver);
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            tz_resolver: Arc::new(IanaTimeZones),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iana_resolves_known_zones() {
        let tz = IanaTimeZones.resolve("America/New_York").unwrap();
        assert_eq!(tz.iana_name(), Some("America/New_York"));
        assert!(IanaTimeZones.resolve("UTC").is_ok());
    }

    #[test]
    fn iana_resolves_path_like_ids() {
        let tz = IanaTimeZones
            .resolve("/mozilla.org/20050126_1/Europe/Berlin")
            .unwrap();
        assert_eq!(tz.iana_name(), Some("Europe/Berlin"));
    }

    #[test]
    fn iana_rejects_unknown_zones() {
        let err = IanaTimeZones.resolve("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, TzError::Unknown { ref tzid, .. } if tzid == "Mars/Olympus_Mons"));
        assert!(IanaTimeZones.resolve("").is_err());
    }

    #[test]
    fn any_time_zone_accepts_everything() {
        assert_eq!(
            AnyTimeZone
                .resolve("Pacific Standard Time")
                .unwrap()
                .iana_name(),
            Some("UTC")
        );
        assert_eq!(
            AnyTimeZone.resolve("Asia/Tokyo").unwrap().iana_name(),
            Some("Asia/Tokyo")
        );
    }

    #[test]
    fn decode_options_swap_resolver() {
        let options = DecodeOptions::default().with_tz_resolver(AnyTimeZone);
        assert!(options.tz_resolver.resolve("Custom/Zone").is_ok());
        assert!(DecodeOptions::default().tz_resolver.resolve("Custom/Zone").is_err());
    }
}
