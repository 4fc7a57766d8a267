//! The closed set of supported reference frames.
//!
//! Datum names only exist at the edges of the crate (parameter file keys,
//! user input); everything past the parsing boundary works with the `Datum`
//! enum, so an unsupported frame cannot reach the transform engine.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A supported geodetic reference frame.
///
/// `Gsk2011` is the hub: every parameter set in a
/// [`ParameterStore`](crate::ParameterStore) relates one of the other frames
/// to it, and conversions between two non-hub frames pivot through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datum {
    /// СК-42 (Pulkovo 1942, Krassowsky ellipsoid).
    Sk42,
    /// СК-95 (Pulkovo 1995).
    Sk95,
    /// ПЗ-90.
    Pz90,
    /// ПЗ-90.02.
    Pz9002,
    /// ПЗ-90.11.
    Pz9011,
    /// WGS-84 (G1150 and later realizations).
    Wgs84,
    /// ITRF-2008.
    Itrf2008,
    /// ГСК-2011, the hub frame. Never carries a parameter entry.
    Gsk2011,
}

/// Error returned when a datum name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized datum name '{0}'")]
pub struct ParseDatumError(pub String);

impl Datum {
    /// All supported frames, hub last.
    pub const ALL: [Datum; 8] = [
        Datum::Sk42,
        Datum::Sk95,
        Datum::Pz90,
        Datum::Pz9002,
        Datum::Pz9011,
        Datum::Wgs84,
        Datum::Itrf2008,
        Datum::Gsk2011,
    ];

    /// Canonical name, as used in the JSON parameter format.
    pub fn name(&self) -> &'static str {
        match self {
            Datum::Sk42 => "СК-42",
            Datum::Sk95 => "СК-95",
            Datum::Pz90 => "ПЗ-90",
            Datum::Pz9002 => "ПЗ-90.02",
            Datum::Pz9011 => "ПЗ-90.11",
            Datum::Wgs84 => "WGS-84",
            Datum::Itrf2008 => "ITRF-2008",
            Datum::Gsk2011 => "ГСК-2011",
        }
    }

    /// Romanized alias, accepted everywhere the canonical name is.
    pub fn ascii_name(&self) -> &'static str {
        match self {
            Datum::Sk42 => "SK-42",
            Datum::Sk95 => "SK-95",
            Datum::Pz90 => "PZ-90",
            Datum::Pz9002 => "PZ-90.02",
            Datum::Pz9011 => "PZ-90.11",
            Datum::Wgs84 => "WGS-84",
            Datum::Itrf2008 => "ITRF-2008",
            Datum::Gsk2011 => "GSK-2011",
        }
    }

    /// Returns `true` for the hub frame.
    pub fn is_hub(&self) -> bool {
        matches!(self, Datum::Gsk2011)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = ParseDatumError;

    /// Parse a canonical or romanized datum name, case-insensitively for
    /// the ASCII aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Datum::ALL
            .into_iter()
            .find(|d| {
                trimmed == d.name() || trimmed.eq_ignore_ascii_case(d.ascii_name())
            })
            .ok_or_else(|| ParseDatumError(trimmed.to_string()))
    }
}
