/*!
 * SRT timestamp formatting.
 */

use std::fmt;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Format a microsecond offset as `HH:MM:SS,mmm`.
///
/// The value is truncated to whole milliseconds and negative results clamp to
/// zero. Hours are not bounded, so 100 hours renders as `100:00:00,000`.
pub fn format_timestamp(micros: i64) -> String {
    let mut out = String::with_capacity(12);
    // Writing into a String cannot fail
    let _ = write_timestamp(&mut out, micros);
    out
}

/// Append the formatted timestamp to any `fmt::Write` sink
pub fn write_timestamp<W: fmt::Write + ?Sized>(out: &mut W, micros: i64) -> fmt::Result {
    let ms = (micros / 1_000).max(0);
    let hours = ms / MILLIS_PER_HOUR;
    let minutes = (ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let seconds = (ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let millis = ms % MILLIS_PER_SECOND;

    write!(out, "{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
