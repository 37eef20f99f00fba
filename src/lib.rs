//! Type-safe parsing and formatting for swim performance times.
//!
//! Swim coaches enter times the way a timing keypad produces them: digits
//! only, no punctuation. `lanetime` turns that shorthand (and the
//! punctuated or written-record variants of it) into a canonical `MM:SS.cc`
//! display string and a canonical seconds number for storage.
//!
//! # Two surfaces
//!
//! - **Lenient** — [`codec::format`] and [`codec::parse_seconds`] never
//!   panic and never error: garbage passes through, or resolves to `0.0`.
//!   This keeps an entry form responsive on every keystroke.
//! - **Strict** — [`SwimTime`] applies the same entry rules but returns a
//!   [`TimeError`] distinguishing empty, unparseable, and out-of-range
//!   input, so nothing ambiguous reaches storage.
//!
//! # Quick start
//!
//! ```rust
//! use lanetime::{codec, seconds_to_display, validate_performance_seconds, SwimTime};
//!
//! // On blur: normalize whatever the coach typed.
//! assert_eq!(codec::format("10235"), "01:02.35");
//!
//! // On submit: numeric value, then the business rule.
//! let seconds = codec::parse_seconds("10235");
//! validate_performance_seconds(seconds)?;
//!
//! // Re-rendering a stored value needs no guessing.
//! assert_eq!(seconds_to_display(seconds), "01:02.35");
//!
//! // Or skip the silent-zero contract entirely.
//! let time: SwimTime = "10235".parse()?;
//! assert_eq!(time.total_seconds(), 62.35);
//! # Ok::<(), lanetime::TimeError>(())
//! ```

pub mod codec;
mod display;
mod error;
pub mod records;
mod types;
mod validation;

pub use codec::MarkerTable;
pub use display::seconds_to_display;
pub use error::{Result, TimeError};
pub use records::PerformanceRecord;
pub use types::SwimTime;
pub use validation::{MAX_PERFORMANCE_SECONDS, validate_performance_seconds};
