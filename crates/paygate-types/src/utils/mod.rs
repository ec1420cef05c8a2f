//! Utility functions for common type conversions and encoding.

pub mod constants;
pub mod encoder;
pub mod formatting;
pub mod helpers;

pub use constants::{BPS_DENOMINATOR, NATIVE_ASSET, SIGNATURE_LENGTH};
pub use encoder::WordEncoder;
pub use formatting::{truncate_id, with_0x_prefix, without_0x_prefix};
pub use helpers::current_timestamp;
