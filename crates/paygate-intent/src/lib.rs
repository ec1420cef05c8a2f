//! Deterministic identity for payment intents.
//!
//! This module derives the 16-byte identifier that names a payment intent
//! and the 32-byte canonical hash an authorizing party signs off-band.
//! Both are pure functions over their inputs with no external state, so a
//! batch of near-simultaneous requests derives stable, non-colliding ids
//! as long as their seeds differ in at least one field.

use alloy_primitives::{keccak256, Address, B256};
use paygate_types::{IntentId, PaymentIntent, PaymentRequest, PaymentType, WordEncoder};

/// Inputs deriving a payment intent's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentSeed {
	/// User funding the payment.
	pub payer: Address,
	/// Creator receiving it.
	pub creator: Address,
	/// Content the payment is scoped to, 0 if none.
	pub content_id: u64,
	/// Category of the payment.
	pub payment_type: PaymentType,
	/// Payer's nonce at creation time.
	pub nonce: u64,
	/// Settlement contract the intent binds to.
	pub settlement_address: Address,
	/// Creation timestamp, unix seconds.
	pub timestamp: u64,
	/// Chain the intent settles on.
	pub chain_id: u64,
}

impl IntentSeed {
	/// Builds the seed for a payment request, binding it to the payer and
	/// the settlement context.
	pub fn for_request(
		request: &PaymentRequest,
		payer: Address,
		nonce: u64,
		settlement_address: Address,
		timestamp: u64,
		chain_id: u64,
	) -> Self {
		Self {
			payer,
			creator: request.creator,
			content_id: request.content_id,
			payment_type: request.payment_type,
			nonce,
			settlement_address,
			timestamp,
			chain_id,
		}
	}
}

/// Derives the 16-byte intent identifier from the seed.
///
/// Keccak256 over the fixed-order word encoding of all seed fields,
/// truncated to its leading 16 bytes. Identical seeds give identical ids;
/// a differing nonce or timestamp gives a different id with overwhelming
/// probability. The id alone carries no uniqueness guarantee against
/// replay; that requires the caller's external nonce-not-yet-used check.
pub fn generate_intent_id(seed: &IntentSeed) -> IntentId {
	let mut enc = WordEncoder::new();
	enc.push_address(&seed.payer);
	enc.push_address(&seed.creator);
	enc.push_u64(seed.content_id);
	enc.push_u8(seed.payment_type.as_raw());
	enc.push_u64(seed.nonce);
	enc.push_address(&seed.settlement_address);
	enc.push_u64(seed.timestamp);
	enc.push_u64(seed.chain_id);

	let digest = keccak256(enc.finish());
	IntentId::from_slice(&digest[..16])
}

/// Canonical hash of a payment intent, used as the signing payload.
///
/// Keccak256 over the fixed-order word encoding of the intent fields. The
/// field order is a compatibility contract, not an implementation detail:
/// reordering or omitting a field breaks verification of every previously
/// issued signature.
pub fn intent_struct_hash(intent: &PaymentIntent) -> B256 {
	let mut enc = WordEncoder::new();
	enc.push_u256(intent.recipient_amount);
	enc.push_u64(intent.deadline);
	enc.push_address(&intent.recipient);
	enc.push_address(&intent.recipient_currency);
	enc.push_address(&intent.refund_destination);
	enc.push_u256(intent.fee_amount);
	enc.push_bytes16(&intent.id);
	enc.push_address(&intent.operator);
	keccak256(enc.finish())
}
