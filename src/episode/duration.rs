/// Format a number of seconds as `HH:MM:SS`
///
/// Every field is zero-padded to at least two digits. Hours never wrap, so
/// anything past 99 hours simply grows the first field (`360000` becomes
/// `"100:00:00"`).
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Convert an upstream duration value into whole seconds
///
/// Fractional values are truncated toward zero. Negative, NaN, infinite and
/// too-large-for-`u64` values are rejected with `None`; callers decide how to
/// surface that.
pub fn duration_from_raw(value: f64) -> Option<u64> {
    // u64::MAX rounds up to 2^64 as f64, the first value that does not fit
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }

    Some(value.trunc() as u64)
}
