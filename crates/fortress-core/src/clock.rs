//! Dashboard wall clock.

use chrono::{Local, Timelike};

/// `HH:MM:SS`, zero-padded, 24-hour.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Clock label for the local time right now.
pub fn now_label() -> String {
    format_clock(&Local::now())
}
