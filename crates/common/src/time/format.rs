//! Human-readable elapsed time formatting
//!
//! Used for log fields and error messages; callers that need an exact number
//! in a specific unit go through the unit registry instead.

use std::time::Duration;

/// Format an elapsed duration into a short human-readable string
///
/// Sub-second durations pick the largest unit that keeps the number above
/// one; longer durations are split into hours, minutes and seconds with
/// millisecond precision on the seconds part.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use lapwatch_common::time::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_nanos(800)), "800ns");
/// assert_eq!(format_elapsed(Duration::from_micros(1500)), "1.5ms");
/// assert_eq!(format_elapsed(Duration::from_millis(65_250)), "1m 5.25s");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs == 0 {
        let nanos = duration.subsec_nanos();
        return if nanos < 1_000 {
            format!("{nanos}ns")
        } else if nanos < 1_000_000 {
            format!("{}us", trim_decimals(f64::from(nanos) / 1_000.0))
        } else {
            format!("{}ms", trim_decimals(f64::from(nanos) / 1_000_000.0))
        };
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = (total_secs % 60) as f64 + f64::from(duration.subsec_millis()) / 1_000.0;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{}s", trim_decimals(seconds)));
    parts.join(" ")
}

/// Format a floating-point number of seconds
///
/// Negative or non-finite input cannot be represented as a [`Duration`] and
/// is rendered verbatim with an `s` suffix.
///
/// # Examples
///
/// ```
/// use lapwatch_common::time::format_elapsed_secs;
///
/// assert_eq!(format_elapsed_secs(0.05), "50ms");
/// assert_eq!(format_elapsed_secs(-1.0), "-1s");
/// ```
pub fn format_elapsed_secs(seconds: f64) -> String {
    Duration::try_from_secs_f64(seconds)
        .map_or_else(|_| format!("{seconds}s"), format_elapsed)
}

fn trim_decimals(value: f64) -> String {
    let rendered = format!("{value:.3}");
    rendered.trim_end_matches('0').trim_end_matches('.').to_string()
}
