//! Core value types for swim performance data.

mod swim_time;

pub use swim_time::SwimTime;
