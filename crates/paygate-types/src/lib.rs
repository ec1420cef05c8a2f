//! Common types module for the paygate settlement core.
//!
//! This module defines the core data types and structures shared by the
//! settlement crates. It provides a centralized location for shared types
//! to ensure consistency across all components.

/// Amount breakdown types produced by the settlement pipeline.
pub mod amounts;
/// Payment intent and delegated-transfer authorization types.
pub mod intent;
/// Payment categories, range guards, and the payment request type.
pub mod payment;
/// Registry trait for self-registering implementations.
pub mod registry;
/// Utility functions for encoding, formatting, and timestamps.
pub mod utils;
/// Configuration validation types for ensuring type-safe configurations.
pub mod validation;

// Re-export all types for convenient access
pub use amounts::*;
pub use intent::*;
pub use payment::*;
pub use registry::*;
pub use utils::{
	current_timestamp, truncate_id, with_0x_prefix, without_0x_prefix, WordEncoder,
	BPS_DENOMINATOR, NATIVE_ASSET, SIGNATURE_LENGTH,
};
pub use validation::*;
