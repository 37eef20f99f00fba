//! The form-layer business rule for a persistable performance time.
//!
//! The codec never rejects anything (its contract is best-effort normalize,
//! never crash), so the bound check lives here: entry forms call this at
//! submit time, after [`crate::codec::parse_seconds`], and block persistence
//! on any error.

use crate::error::{Result, TimeError};

/// Exclusive upper bound for a performance time, in seconds.
pub const MAX_PERFORMANCE_SECONDS: f64 = 3600.0;

/// Check that `seconds` is a valid performance result: finite, strictly
/// positive, under one hour.
///
/// Zero fails with [`TimeError::NoTimeRecorded`] — the lenient parser
/// resolves empty and garbage entry to zero, so a zero here means no usable
/// time was captured, never a legitimate result.
pub fn validate_performance_seconds(seconds: f64) -> Result<()> {
    if !seconds.is_finite() {
        return Err(TimeError::NotFinite);
    }
    if seconds == 0.0 {
        return Err(TimeError::NoTimeRecorded);
    }
    if seconds < 0.0 || seconds >= MAX_PERFORMANCE_SECONDS {
        return Err(TimeError::out_of_range(seconds));
    }
    Ok(())
}
