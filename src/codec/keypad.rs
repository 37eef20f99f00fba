//! Keypad-style decoding for punctuation-free digit entry.
//!
//! Rapid poolside entry is digits only: the last two digits are hundredths,
//! the next up-to-two are seconds, and anything left over is minutes. A
//! coach keying `2635` means 26.35 seconds; `10235` means 1:02.35.

/// Fields decoded from a pure-digit keypad entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeypadTime {
    pub minutes: u32,
    pub seconds: u32,
    pub centiseconds: u32,
}

/// Decode a pure-digit string of length >= 3.
///
/// Seconds of 60 or more carry into minutes. Returns `None` when the input
/// is not pure digits, is too short for the heuristic, or decodes to an
/// hour or more — callers treat that as unparseable rather than guessing.
pub(crate) fn decode(digits: &str) -> Option<KeypadTime> {
    if digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let centi_split = digits.len() - 2;
    let centiseconds: u32 = digits[centi_split..].parse().ok()?;
    let rest = &digits[..centi_split];

    let (mut minutes, mut seconds): (u32, u32) = if rest.len() <= 2 {
        (0, rest.parse().ok()?)
    } else {
        let sec_split = rest.len() - 2;
        (rest[..sec_split].parse().ok()?, rest[sec_split..].parse().ok()?)
    };

    minutes += seconds / 60;
    seconds %= 60;

    if minutes > 59 {
        return None;
    }

    Some(KeypadTime { minutes, seconds, centiseconds })
}
