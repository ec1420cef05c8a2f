//! Amount breakdown types produced by the settlement pipeline.
//!
//! The fee split is computed in the platform's reference currency by
//! `paygate-fees`; the expected payment amount is supplied afterwards by
//! the conversion step in `paygate-price`.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Fee split of a payment total in the platform's reference currency.
///
/// All values are in the smallest unit of the reference currency.
/// Invariants maintained by the calculator:
/// `platform_fee + creator_amount == total_amount` and
/// `operator_fee + adjusted_creator_amount == creator_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
	/// Amount the payer is charged, before conversion.
	pub total_amount: U256,
	/// Creator's share before the operator cut.
	pub creator_amount: U256,
	/// Platform's share of the total.
	pub platform_fee: U256,
	/// Operator's cut, taken out of the creator's share.
	pub operator_fee: U256,
	/// What the creator actually receives.
	pub adjusted_creator_amount: U256,
}

/// Complete amount breakdown for a payment attempt.
///
/// Combines the reference-currency fee split with the payment-asset amount
/// the payer must provide. The latter already carries the slippage margin,
/// so it never undercuts the spot conversion of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBreakdown {
	/// Fee split in the reference currency.
	#[serde(flatten)]
	pub fees: FeeBreakdown,
	/// Amount of the payment asset the payer must provide.
	pub expected_payment_amount: U256,
}

impl AmountBreakdown {
	/// Assembles the breakdown once the conversion step has produced the
	/// expected payment amount.
	pub fn new(fees: FeeBreakdown, expected_payment_amount: U256) -> Self {
		Self {
			fees,
			expected_payment_amount,
		}
	}
}
