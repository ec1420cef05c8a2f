//! Helper utilities for common operations.

/// Helper function to get current timestamp, returns 0 if system time is
/// before UNIX epoch.
pub fn current_timestamp() -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_secs())
		.unwrap_or(0)
}
