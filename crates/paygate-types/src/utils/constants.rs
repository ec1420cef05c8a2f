//! Common constants used across the settlement core.

use alloy_primitives::Address;

/// Sentinel asset identifier denoting the chain's native asset.
///
/// Payment requests carry this value in `payment_token` when the payer
/// settles in the native asset rather than an ERC20 token.
pub const NATIVE_ASSET: Address = Address::ZERO;

/// Denominator for rates expressed in basis points.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Exact byte length of a raw r || s || v signature.
pub const SIGNATURE_LENGTH: usize = 65;
