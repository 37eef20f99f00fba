//! Rendering of already-stored time values.
//!
//! Stored `time_seconds` values are unambiguous numbers, so turning them
//! back into `MM:SS.cc` is plain divide/mod arithmetic — none of the
//! entry-convention guessing in [`crate::codec`] applies here.

/// Format stored seconds as `MM:SS.cc`.
///
/// Negative and non-finite inputs clamp to `00:00.00`. Minutes are
/// cumulative: a value at or past an hour renders with a wide minute field
/// rather than failing, since this is a display routine for data that has
/// already been validated on the way in.
///
/// ```rust
/// use lanetime::seconds_to_display;
///
/// assert_eq!(seconds_to_display(62.35), "01:02.35");
/// assert_eq!(seconds_to_display(0.0), "00:00.00");
/// ```
pub fn seconds_to_display(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00.00".to_string();
    }
    let total_centis = (seconds * 100.0).round() as u64;
    let minutes = total_centis / 6000;
    let whole_seconds = total_centis / 100 % 60;
    let centis = total_centis % 100;
    format!("{minutes:02}:{whole_seconds:02}.{centis:02}")
}
