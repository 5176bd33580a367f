//! # Format Module
//!
//! Human-readable byte sizes for presentation.

/// Binary units used for display
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count using binary (1024) units
///
/// Picks the largest unit that keeps the scaled value under 1024, rounds to
/// two decimal places, and trims trailing zeros ("1.50" becomes "1.5",
/// "1.00" becomes "1"). Zero is special-cased to "0 B" - taking a logarithm
/// of zero is the classic defect here. Values past the unit table stay in
/// GB rather than indexing off its end.
pub fn humanize_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024f64.ln()) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    let mut value = format!("{rounded:.2}");
    while value.ends_with('0') {
        value.pop();
    }
    if value.ends_with('.') {
        value.pop();
    }

    format!("{} {}", value, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_is_special_cased() {
        assert_eq!(humanize_bytes(0), "0 B");
    }

    #[test]
    fn small_counts_stay_in_bytes() {
        assert_eq!(humanize_bytes(1), "1 B");
        assert_eq!(humanize_bytes(512), "512 B");
        assert_eq!(humanize_bytes(1023), "1023 B");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(humanize_bytes(1024), "1 KB");
        assert_eq!(humanize_bytes(1024 * 1024), "1 MB");
        assert_eq!(humanize_bytes(1073741824), "1 GB");
    }

    #[test]
    fn fractional_values_round_to_two_places() {
        assert_eq!(humanize_bytes(1536), "1.5 KB");
        assert_eq!(humanize_bytes(1025), "1 KB");
        assert_eq!(humanize_bytes(1664), "1.63 KB");
        assert_eq!(humanize_bytes(5_000_000), "4.77 MB");
    }

    #[test]
    fn values_past_the_table_stay_in_gigabytes() {
        let two_terabytes = 2048u64 * 1024 * 1024 * 1024;
        assert_eq!(humanize_bytes(two_terabytes), "2048 GB");
    }
}
