//! Human readable numbers for panel text

use humansize::{format_size, BINARY};

/// `1.5 GiB`
pub fn bytes(n: u64) -> String {
    format_size(n, BINARY.decimal_places(1))
}

/// `1.52 GiB`
pub fn bytes_precise(n: u64) -> String {
    format_size(n, BINARY.decimal_places(2))
}

/// `12MiB`, for narrow table columns.
pub fn bytes_compact(n: u64) -> String {
    format_size(n, BINARY.decimal_places(0).space_after_value(false))
}

/// `1.5 MiB/s`; negative or non-finite rates read as zero.
pub fn rate(bytes_per_sec: f64) -> String {
    let bytes_per_sec = if bytes_per_sec.is_finite() {
        bytes_per_sec.max(0.0)
    } else {
        0.0
    };
    format!("{}/s", bytes(bytes_per_sec.round() as u64))
}

/// Share of `total` in percent, zero when `total` is zero.
pub fn percent_of(value: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_units() {
        assert!(bytes(3 * 1024 * 1024).contains("MiB"));
        assert!(bytes_precise(5 * 1024 * 1024 * 1024).contains("GiB"));
        assert!(!bytes_compact(2048).contains(' '));
    }

    #[test]
    fn rates_never_negative() {
        assert_eq!(rate(-5.0), rate(0.0));
        assert_eq!(rate(f64::NAN), rate(0.0));
        assert!(rate(2048.0).ends_with("KiB/s"));
    }

    #[test]
    fn percent_guard() {
        assert_eq!(percent_of(5, 0), 0.0);
        assert_eq!(percent_of(25, 100), 25.0);
    }
}
