//! Fee-splitting arithmetic for the paygate settlement core.
//!
//! Given a payment total in the platform's reference currency and the
//! platform and operator fee rates, this module produces the exact split
//! owed to each party. All arithmetic is integer floor division over U256;
//! rounding dust is not redistributed. The split is a pure function of its
//! inputs and is order-independent across a batch of requests.

use alloy_primitives::U256;
use paygate_types::{FeeBreakdown, BPS_DENOMINATOR};
use thiserror::Error;

/// Errors that can occur during fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
	/// Error that occurs when a fee rate exceeds the bps denominator.
	#[error("Invalid fee rate: {0} bps exceeds 10000")]
	InvalidFeeRate(u16),
	/// Error that occurs when the operator fee exceeds the creator's share.
	#[error("Operator fee exceeds creator amount")]
	ArithmeticUnderflow,
}

/// Splits a reference-currency total between platform, operator, and
/// creator.
///
/// The platform fee comes off the total; the operator fee comes out of the
/// creator's remaining share. Both fees round down, so the creator absorbs
/// the dust:
///
/// - `platform_fee = total * platform_rate_bps / 10000`
/// - `creator_amount = total - platform_fee`
/// - `operator_fee = total * operator_rate_bps / 10000`
/// - `adjusted_creator_amount = creator_amount - operator_fee`
///
/// Fails with [`FeeError::InvalidFeeRate`] if either rate exceeds 10000
/// bps, and with [`FeeError::ArithmeticUnderflow`] if the operator fee
/// would exceed the creator's share (a platform rate near 10000 combined
/// with a nonzero operator rate).
pub fn split(
	total: U256,
	platform_rate_bps: u16,
	operator_rate_bps: u16,
) -> Result<FeeBreakdown, FeeError> {
	if u64::from(platform_rate_bps) > BPS_DENOMINATOR {
		return Err(FeeError::InvalidFeeRate(platform_rate_bps));
	}
	if u64::from(operator_rate_bps) > BPS_DENOMINATOR {
		return Err(FeeError::InvalidFeeRate(operator_rate_bps));
	}

	let denominator = U256::from(BPS_DENOMINATOR);
	let platform_fee = total * U256::from(platform_rate_bps) / denominator;
	let creator_amount = total - platform_fee;
	let operator_fee = total * U256::from(operator_rate_bps) / denominator;
	let adjusted_creator_amount = creator_amount
		.checked_sub(operator_fee)
		.ok_or(FeeError::ArithmeticUnderflow)?;

	Ok(FeeBreakdown {
		total_amount: total,
		creator_amount,
		platform_fee,
		operator_fee,
		adjusted_creator_amount,
	})
}
