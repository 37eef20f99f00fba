//! The strict swim-time value type.
//!
//! [`SwimTime`] is the `Result`-returning counterpart to the lenient
//! [`crate::codec`] functions: same normalization rules, but empty input,
//! garbage, and out-of-range values come back as distinct
//! [`TimeError`](crate::TimeError)s instead of a silent zero. Values are
//! held at centisecond resolution, strictly under one hour, so
//! string-seconds-string conversions are exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::error::{Result, TimeError};

/// One hour in centiseconds, the exclusive upper bound for a swim time.
pub(crate) const HOUR_CENTIS: u32 = 60 * 60 * 100;

/// A swim performance time: non-negative, under one hour, centisecond
/// resolution.
///
/// Serializes as the canonical seconds number the persistence layer stores
/// in its `time_seconds` field, and displays as the canonical `MM:SS.cc`
/// string.
///
/// ```rust
/// use lanetime::SwimTime;
///
/// let time: SwimTime = "10235".parse()?;
/// assert_eq!(time.to_string(), "01:02.35");
/// assert_eq!(time.total_seconds(), 62.35);
/// # Ok::<(), lanetime::TimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwimTime {
    centiseconds: u32,
}

impl SwimTime {
    /// Construct from a total centisecond count.
    pub fn from_centiseconds(centiseconds: u32) -> Result<Self> {
        if centiseconds >= HOUR_CENTIS {
            return Err(TimeError::out_of_range(f64::from(centiseconds) / 100.0));
        }
        Ok(Self { centiseconds })
    }

    /// Construct from stored seconds, rounding to centisecond resolution.
    pub fn from_seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(TimeError::NotFinite);
        }
        if seconds < 0.0 {
            return Err(TimeError::out_of_range(seconds));
        }
        let centis = (seconds * 100.0).round();
        if centis >= f64::from(HOUR_CENTIS) {
            return Err(TimeError::out_of_range(seconds));
        }
        Ok(Self { centiseconds: centis as u32 })
    }

    /// Parse user entry with the same rules as [`codec::format`], but with
    /// explicit errors instead of pass-through.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, &codec::MarkerTable::default())
    }

    /// [`SwimTime::parse`] with a caller-supplied marker table.
    pub fn parse_with(input: &str, markers: &codec::MarkerTable) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimeError::Empty);
        }

        let formatted = codec::format_with(trimmed, markers);
        match codec::canonical_fields(&formatted) {
            Some((minutes, seconds, centis)) if minutes <= 59 && seconds <= 59 => {
                Self::from_centiseconds((minutes * 60 + seconds) * 100 + centis)
            }
            // Shape-canonical but out of range, e.g. a passed-through "99:00.00".
            Some((minutes, seconds, centis)) => Err(TimeError::out_of_range(
                f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(centis) / 100.0,
            )),
            None => Err(TimeError::unparseable(trimmed)),
        }
    }

    /// Whole minutes, 0–59.
    pub fn minutes(&self) -> u32 {
        self.centiseconds / 6000
    }

    /// Seconds within the minute, 0–59.
    pub fn seconds(&self) -> u32 {
        self.centiseconds / 100 % 60
    }

    /// Hundredths within the second, 0–99.
    pub fn centiseconds(&self) -> u32 {
        self.centiseconds % 100
    }

    /// Total duration in centiseconds.
    pub fn total_centiseconds(&self) -> u32 {
        self.centiseconds
    }

    /// Total duration in seconds, the stored canonical form.
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.centiseconds) / 100.0
    }
}

impl fmt::Display for SwimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:02}",
            self.minutes(),
            self.seconds(),
            self.centiseconds()
        )
    }
}

impl FromStr for SwimTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SwimTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.total_seconds())
    }
}

impl<'de> Deserialize<'de> for SwimTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Self::from_seconds(seconds).map_err(serde::de::Error::custom)
    }
}
