//! Payment intent and delegated-transfer authorization types.

use alloy_primitives::{Address, FixedBytes, U256};
use serde::{Deserialize, Serialize};

/// 16-byte deterministic identifier of a payment intent.
pub type IntentId = FixedBytes<16>;

/// A single payment to be authorized and executed exactly once.
///
/// The field set and its order are the signing payload contract: the
/// canonical hash in `paygate-intent` encodes exactly these fields in
/// declaration order, and every previously issued signature depends on
/// that order staying fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
	/// Amount the recipient is owed, in `recipient_currency` units.
	pub recipient_amount: U256,
	/// Unix timestamp after which the intent is void.
	pub deadline: u64,
	/// Party receiving the funds.
	pub recipient: Address,
	/// Asset the recipient is paid in.
	pub recipient_currency: Address,
	/// Where funds return if settlement unwinds.
	pub refund_destination: Address,
	/// Platform fee bound to this intent.
	pub fee_amount: U256,
	/// Deterministic intent identifier.
	pub id: IntentId,
	/// Operator authorized to drive settlement.
	pub operator: Address,
}

/// Delegated-transfer authorization presented alongside an intent.
///
/// Single-use: the nonce is consumed by the external authorization
/// collaborator once the transfer executes. This core only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitAuthorization {
	/// Token the user signed over.
	pub token: Address,
	/// Ceiling the signature covers; may exceed the actual charge.
	pub amount: U256,
	/// User's permit nonce at signing time.
	pub nonce: U256,
	/// Unix timestamp after which the permit is void.
	pub deadline: u64,
	/// Where the pulled funds are allowed to land.
	pub transfer_destination: Address,
	/// Amount the caller asks the system to charge. Must equal the expected
	/// charge exactly.
	pub requested_amount: U256,
	/// Raw 65-byte r || s || v signature.
	pub signature: Vec<u8>,
}
