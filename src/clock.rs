//! Wall-clock text for the status bars.

use chrono::Local;
use std::fmt::Write as _;

/// Format the current local time with the configured strftime string,
/// falling back to `%H:%M:%S` when the string is invalid.
pub fn clock_text(format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", Local::now().format(format)).is_err() {
        tracing::warn!(format, "invalid clock format, falling back to %H:%M:%S");
        return Local::now().format("%H:%M:%S").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_text_shape() {
        let text = clock_text("%H:%M:%S");
        assert_eq!(text.len(), 8);
        assert_eq!(&text[2..3], ":");
        assert_eq!(&text[5..6], ":");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let text = clock_text("%!");
        assert_eq!(text.len(), 8);
    }
}
