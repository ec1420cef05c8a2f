//! Registry trait for self-registering implementations.
//!
//! Pluggable collaborators (price oracles today, further ones as they grow
//! implementations) register themselves with their configuration name and
//! a factory function.

/// Base trait for implementation registries.
///
/// Each implementation module must provide a `Registry` struct that
/// implements this trait. This ensures that every implementation declares
/// its configuration name and provides a factory function.
pub trait ImplementationRegistry {
	/// The name used in configuration files to reference this implementation.
	///
	/// This should match the key used in the TOML configuration, for example
	/// "fixed_rate" for oracle.implementation = "fixed_rate".
	const NAME: &'static str;

	/// The factory function type this implementation provides.
	type Factory;

	/// Get the factory function for this implementation.
	///
	/// Returns the factory function that can create instances of this
	/// implementation when provided with the appropriate configuration.
	fn factory() -> Self::Factory;
}
