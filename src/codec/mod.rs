//! Smart-input codec for swim-time entry.
//!
//! Converts loosely formatted user text into the canonical `MM:SS.cc`
//! display string and the canonical seconds number the persistence layer
//! stores. Entry conventions are tried in order:
//!
//! 1. Pure digits, three or more: keypad shorthand. The last two digits are
//!    hundredths, the next up-to-two are seconds, the remainder minutes.
//! 2. A plain decimal number: a raw seconds value.
//! 3. Marker words for "minute"/"second" become `:` and `.`, full-width
//!    separators become ASCII, and the result is read as `MM:SS.cc` or
//!    `SS.cc`.
//!
//! Anything that fits none of these passes through unchanged from
//! [`format`] and resolves to `0.0` from [`parse_seconds`] — this codec
//! never panics and never errors, so it is safe to call on every keystroke.
//! Callers that want errors instead use [`crate::SwimTime`].
//!
//! ```rust
//! use lanetime::codec;
//!
//! assert_eq!(codec::format("2635"), "00:26.35");
//! assert_eq!(codec::format("10235"), "01:02.35");
//! assert_eq!(codec::format("1:05.2"), "01:05.20");
//! assert_eq!(codec::parse_seconds("1:05.25"), 65.25);
//! assert_eq!(codec::format("abc"), "abc");
//! assert_eq!(codec::parse_seconds("abc"), 0.0);
//! ```

mod keypad;
mod markers;

pub use markers::MarkerTable;

use tracing::trace;

/// Normalize arbitrary time entry into the canonical `MM:SS.cc` string.
///
/// Unparseable input is returned trimmed but otherwise unchanged; check the
/// result with [`is_canonical`] before treating it as a valid time. Uses the
/// default CJK marker table; see [`format_with`] for other conventions.
pub fn format(raw: &str) -> String {
    format_with(raw, &MarkerTable::default())
}

/// [`format`] with a caller-supplied marker table.
pub fn format_with(raw: &str, markers: &MarkerTable) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // Keypad shorthand takes precedence: it is the dominant entry method
    // poolside, and a string like "2635" must not read as 2635 seconds.
    if trimmed.len() >= 3 && is_pure_digits(trimmed) {
        return match keypad::decode(trimmed) {
            Some(time) => render(time.minutes, time.seconds, time.centiseconds),
            None => {
                trace!(input = trimmed, "keypad entry decodes to an hour or more, passing through");
                trimmed.to_string()
            }
        };
    }

    // A plain decimal (including one or two bare digits) is raw seconds.
    if is_decimal(trimmed) {
        return match decimal_to_canonical(trimmed) {
            Some(canonical) => canonical,
            None => {
                trace!(input = trimmed, "decimal entry is an hour or more, passing through");
                trimmed.to_string()
            }
        };
    }

    // Written-record forms: marker words first, then full-width separators.
    let replaced = markers::normalize_separators(&markers.apply(trimmed));
    match separated_to_canonical(&replaced) {
        Some(canonical) => canonical,
        None => {
            trace!(input = trimmed, "time entry did not normalize, passing through");
            trimmed.to_string()
        }
    }
}

/// Canonical seconds for a time entry, `0.0` when nothing can be made of it.
///
/// The zero fallback conflates "empty", "garbage", and a literal zero; form
/// layers must reject zero before persisting (see
/// [`crate::validate_performance_seconds`]).
pub fn parse_seconds(raw: &str) -> f64 {
    parse_seconds_with(raw, &MarkerTable::default())
}

/// [`parse_seconds`] with a caller-supplied marker table.
pub fn parse_seconds_with(raw: &str, markers: &MarkerTable) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let formatted = format_with(trimmed, markers);
    let mut parts = formatted.split(':');
    if let (Some(minutes_text), Some(rest), None) = (parts.next(), parts.next(), parts.next()) {
        if let (Ok(minutes), Ok(rest)) = (minutes_text.parse::<f64>(), rest.parse::<f64>()) {
            return minutes * 60.0 + rest;
        }
    }

    // Rust accepts "nan"/"inf" as float literals; those are garbage here,
    // and callers do arithmetic on the result before any validator runs.
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or_else(|| {
            trace!(input = trimmed, "unparseable time entry resolved to zero");
            0.0
        })
}

/// Whether `s` is a canonical `MM:SS.cc` string with in-range fields.
pub fn is_canonical(s: &str) -> bool {
    matches!(canonical_fields(s), Some((minutes, seconds, _)) if minutes <= 59 && seconds <= 59)
}

/// Parse a strict `MM:SS.cc` shape into its fields, without range checks.
pub(crate) fn canonical_fields(s: &str) -> Option<(u32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b'.' {
        return None;
    }
    let digit = |i: usize| -> Option<u32> {
        let b = bytes[i];
        b.is_ascii_digit().then(|| u32::from(b - b'0'))
    };
    let minutes = digit(0)? * 10 + digit(1)?;
    let seconds = digit(3)? * 10 + digit(4)?;
    let centis = digit(6)? * 10 + digit(7)?;
    Some((minutes, seconds, centis))
}

fn render(minutes: u32, seconds: u32, centiseconds: u32) -> String {
    format!("{minutes:02}:{seconds:02}.{centiseconds:02}")
}

fn is_pure_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        None => is_pure_digits(s),
        Some((whole, frac)) => is_pure_digits(whole) && is_pure_digits(frac),
    }
}

/// Read a decimal string as raw seconds and render it canonically.
///
/// Rounds to centisecond resolution, carrying a rounded-up fraction into
/// the seconds field. `None` when the value reaches an hour.
fn decimal_to_canonical(s: &str) -> Option<String> {
    let seconds: f64 = s.parse().ok()?;
    let total_centis = (seconds * 100.0).round();
    if !(0.0..360_000.0).contains(&total_centis) {
        return None;
    }
    let total_centis = total_centis as u32;
    Some(render(total_centis / 6000, total_centis / 100 % 60, total_centis % 100))
}

/// Read a separator-bearing string (`SS.cc` or `MM:SS.cc`, fields of any
/// width) and render it canonically.
///
/// Fractional seconds are right-padded then truncated to two digits, the
/// original behavior for punctuated entry. Seconds of 60 or more carry into
/// minutes so no canonical field leaves its range. `None` when any field is
/// non-numeric, the shape has three or more colon parts, or the total
/// reaches an hour.
fn separated_to_canonical(s: &str) -> Option<String> {
    let mut parts = s.split(':');
    let first = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let (minutes_text, seconds_text) = match second {
        Some(seconds) => (first, seconds),
        None => ("", first),
    };

    let minutes: u64 = if minutes_text.is_empty() {
        0
    } else {
        parse_digit_field(minutes_text)?
    };

    let (whole_text, frac_text) = match seconds_text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (seconds_text, ""),
    };
    if whole_text.is_empty() && frac_text.is_empty() {
        return None;
    }

    let seconds: u64 = if whole_text.is_empty() {
        0
    } else {
        parse_digit_field(whole_text)?
    };
    let centiseconds: u32 = if frac_text.is_empty() {
        0
    } else if is_pure_digits(frac_text) {
        let mut frac = frac_text.to_string();
        frac.truncate(2);
        while frac.len() < 2 {
            frac.push('0');
        }
        frac.parse().ok()?
    } else {
        return None;
    };

    let minutes = minutes + seconds / 60;
    let seconds = seconds % 60;
    if minutes > 59 {
        return None;
    }
    Some(render(minutes as u32, seconds as u32, centiseconds))
}

fn parse_digit_field(s: &str) -> Option<u64> {
    if is_pure_digits(s) { s.parse().ok() } else { None }
}
