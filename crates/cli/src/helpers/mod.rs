// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

pub mod telemetry;

/// Parse a record count the way `strtoul(s, _, 0)` reads it: `0x` prefix for hex, a leading
/// `0` for octal, decimal otherwise. The whole string must be consumed.
pub fn parse_count(s: &str) -> Result<u32, String> {
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err("count is not a valid number".to_string());
    }
    u32::from_str_radix(digits, radix).map_err(|_| "count too large".to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("10"), Ok(10));
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("0x1f"), Ok(31));
        assert_eq!(parse_count("017"), Ok(15));
        assert_eq!(parse_count("4294967295"), Ok(u32::MAX));

        assert_eq!(parse_count("4294967296"), Err("count too large".to_string()));
        assert!(parse_count("").is_err());
        assert!(parse_count("12a").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("+1").is_err());
        assert!(parse_count("0x").is_err());
        assert!(parse_count("09").is_err());
    }
}
