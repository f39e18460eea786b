//! Formatting utilities for file sizes and dates.

/// Format a byte count for the listing (e.g. "512 B", "1.50 KB", "3.20 MB").
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.2} GB", b / GB)
    } else if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.2} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Date part (YYYY-MM-DD) of an ISO-8601 timestamp.
///
/// Returns `None` when the string does not start with a date.
pub fn format_date_iso(timestamp: &str) -> Option<String> {
    let date = timestamp.get(..10)?;
    let bytes = date.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    well_formed.then(|| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(
            format_date_iso("2024-01-01T12:30:00+00:00"),
            Some("2024-01-01".to_string())
        );
        assert_eq!(format_date_iso("2024-01-01"), Some("2024-01-01".to_string()));
        assert_eq!(format_date_iso("yesterday"), None);
        assert_eq!(format_date_iso("2024/01/01T00"), None);
    }
}
