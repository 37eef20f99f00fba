//! Error types for swim-time parsing and validation.
//!
//! The lenient codec functions ([`crate::codec::format`] and
//! [`crate::codec::parse_seconds`]) never return these — they pass bad input
//! through or resolve it to zero so an entry form stays responsive. The
//! strict surfaces ([`crate::SwimTime`] constructors and
//! [`crate::validate_performance_seconds`]) return [`TimeError`] so callers
//! can tell "typed nothing", "typed garbage", and "typed an impossible time"
//! apart before anything is persisted.

use thiserror::Error;

/// Result type alias for swim-time operations.
pub type Result<T, E = TimeError> = std::result::Result<T, E>;

/// Main error type for strict time parsing and validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    #[error("time input is empty")]
    Empty,

    #[error("cannot interpret {input:?} as a swim time")]
    Unparseable { input: String },

    #[error("time of {seconds} seconds is outside the supported range (0 to one hour)")]
    OutOfRange { seconds: f64 },

    #[error("time value is not a finite number")]
    NotFinite,

    #[error("a zero time means no performance was recorded")]
    NoTimeRecorded,
}

impl TimeError {
    /// Helper constructor for unparseable input, keeping the offending text.
    pub fn unparseable(input: impl Into<String>) -> Self {
        TimeError::Unparseable { input: input.into() }
    }

    /// Helper constructor for values outside the under-one-hour range.
    pub fn out_of_range(seconds: f64) -> Self {
        TimeError::OutOfRange { seconds }
    }

    /// Returns whether re-typing the entry can fix this error.
    ///
    /// `NotFinite` comes from a stored or computed number, not from the
    /// text field, so re-typing will not help there.
    pub fn is_input_error(&self) -> bool {
        match self {
            TimeError::Empty => true,
            TimeError::Unparseable { .. } => true,
            TimeError::OutOfRange { .. } => true,
            TimeError::NoTimeRecorded => true,
            TimeError::NotFinite => false,
        }
    }

    /// A short, coach-facing hint for fixing the rejected entry.
    pub fn entry_hint(&self) -> &'static str {
        match self {
            TimeError::Empty => "Enter a time before saving",
            TimeError::Unparseable { .. } => {
                "Use digits like 2635 for 26.35s, or minute:second form like 1:05.2"
            }
            TimeError::OutOfRange { .. } => "Times must be under one hour",
            TimeError::NotFinite => "The stored time value is corrupt",
            TimeError::NoTimeRecorded => "A result of zero cannot be saved as a performance",
        }
    }
}
