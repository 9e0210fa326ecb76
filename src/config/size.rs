//! Human-readable size strings for settings values.

/// Parse a size string like `8MB`, `500KB`, or `1048576` into bytes.
///
/// Units are case-insensitive and may be suffixed with or without `B`
/// (`8M` == `8MB`). Bare numbers are bytes.
pub fn parse_size(value: &str) -> Result<u64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty size string".to_string());
    }

    let upper = value.to_uppercase();
    let (digits, multiplier) = if let Some(stripped) = strip_unit(&upper, "GB").or_else(|| strip_unit(&upper, "G")) {
        (stripped, 1024 * 1024 * 1024)
    } else if let Some(stripped) = strip_unit(&upper, "MB").or_else(|| strip_unit(&upper, "M")) {
        (stripped, 1024 * 1024)
    } else if let Some(stripped) = strip_unit(&upper, "KB").or_else(|| strip_unit(&upper, "K")) {
        (stripped, 1024)
    } else if let Some(stripped) = strip_unit(&upper, "B") {
        (stripped, 1)
    } else {
        (upper.as_str(), 1)
    };

    let number: u64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", value))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| format!("'{}' is too large", value))
}

fn strip_unit<'a>(value: &'a str, unit: &str) -> Option<&'a str> {
    value.strip_suffix(unit)
}

/// Format a byte count with the largest unit that divides it evenly.
pub fn format_size(bytes: u64) -> String {
    const GB: u64 = 1024 * 1024 * 1024;
    const MB: u64 = 1024 * 1024;
    const KB: u64 = 1024;

    if bytes >= GB && bytes % GB == 0 {
        format!("{}GB", bytes / GB)
    } else if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_bytes() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("512B").unwrap(), 512);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_size("2KB").unwrap(), 2048);
        assert_eq!(parse_size("8MB").unwrap(), 8 * 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("8m").unwrap(), 8 * 1024 * 1024);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_size(" 4MB ").unwrap(), 4 * 1024 * 1024);
        assert_eq!(parse_size("  16KB").unwrap(), 16 * 1024);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_size("").is_err());
        assert!(parse_size("lots").is_err());
        assert!(parse_size("MB").is_err());
    }

    #[test]
    fn test_parse_overflowing_value_is_an_error() {
        // u64::MAX / 1024 + 1, in kilobytes
        assert!(parse_size("18014398509481984KB").is_err());
        assert!(parse_size("1000000000000GB").is_err());
        assert_eq!(parse_size("17592186044415KB").unwrap(), 17592186044415 * 1024);
    }

    #[test]
    fn test_format_round_trip() {
        for text in ["8MB", "512KB", "2GB", "3B"] {
            assert_eq!(format_size(parse_size(text).unwrap()), text);
        }
    }
}
