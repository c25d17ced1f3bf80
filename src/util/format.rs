//! Display formatting for clock values and durations

use std::time::Duration;

/// Format a remaining-time value for the main readout, two decimals
///
/// # Examples
/// ```
/// use tickdown::util::format::format_remaining;
///
/// assert_eq!(format_remaining(60.0), "60.00");
/// assert_eq!(format_remaining(7.25), "7.25");
/// ```
pub fn format_remaining(secs: f64) -> String {
    format!("{:.2}", secs)
}

/// Format a recorded score with its unit
///
/// # Examples
/// ```
/// use tickdown::util::format::format_score;
///
/// assert_eq!(format_score(55.5), "55.50s");
/// ```
pub fn format_score(secs: f64) -> String {
    format!("{:.2}s", secs)
}

/// Format how long the session lasted, to whole seconds
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use tickdown::util::format::format_session_length;
///
/// assert_eq!(format_session_length(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_session_length(length: Duration) -> String {
    humantime::format_duration(Duration::from_secs(length.as_secs())).to_string()
}
