//! String formatting utilities.
//!
//! Provides functions for formatting identifiers and hex strings for
//! display, including prefix management and truncation for readability.

/// Utility function to truncate a hex string for display purposes.
///
/// Shows only the first 8 characters followed by ".." for longer strings.
pub fn truncate_id(id: &str) -> String {
	if id.len() <= 8 {
		id.to_string()
	} else {
		format!("{}..", &id[..8])
	}
}

/// Adds "0x" prefix to a hex string if it doesn't already have one.
pub fn with_0x_prefix(hex_str: &str) -> String {
	if hex_str.to_lowercase().starts_with("0x") {
		hex_str.to_string()
	} else {
		format!("0x{}", hex_str)
	}
}

/// Removes "0x" prefix from a hex string if present.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truncate_id() {
		assert_eq!(truncate_id("12345678"), "12345678");
		assert_eq!(truncate_id("123456789"), "12345678..");
		assert_eq!(truncate_id("0x1234567890abcdef"), "0x123456..");
	}

	#[test]
	fn test_with_0x_prefix() {
		assert_eq!(
			with_0x_prefix("5fbdb2315678afecb367f032d93f642f64180aa3"),
			"0x5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			with_0x_prefix("0x5fbdb2315678afecb367f032d93f642f64180aa3"),
			"0x5fbdb2315678afecb367f032d93f642f64180aa3"
		);
	}

	#[test]
	fn test_without_0x_prefix() {
		assert_eq!(
			without_0x_prefix("0x5fbdb2315678afecb367f032d93f642f64180aa3"),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			without_0x_prefix("5fbdb2315678afecb367f032d93f642f64180aa3"),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);
		assert_eq!(
			without_0x_prefix("0X5fbdb2315678afecb367f032d93f642f64180aa3"),
			"5fbdb2315678afecb367f032d93f642f64180aa3"
		);
	}
}
