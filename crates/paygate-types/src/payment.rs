//! Payment domain types for the paygate settlement core.
//!
//! This module defines the payment categories accepted by the platform and
//! the request type driving a single payment attempt. Category values cross
//! a trust boundary (wire input, stored state read-back), so every
//! construction from a raw integer goes through a range guard instead of a
//! cast.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a raw integer does not map to a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
	/// The raw value lies outside the valid domain of the named category.
	#[error("value {value} out of range for {category} (max {max})")]
	InvalidRange {
		category: &'static str,
		value: u8,
		max: u8,
	},
}

/// Category of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentType {
	/// One-off purchase of a single piece of content.
	PayPerView,
	/// Recurring subscription to a creator.
	Subscription,
	/// Voluntary tip attached to content.
	Tip,
	/// Voluntary donation not tied to content.
	Donation,
}

impl PaymentType {
	/// Highest raw value that maps to a variant.
	pub const MAX_RAW: u8 = 3;

	/// Maps an untrusted raw integer to a payment type.
	pub fn from_raw(raw: u8) -> Result<Self, RangeError> {
		match raw {
			0 => Ok(PaymentType::PayPerView),
			1 => Ok(PaymentType::Subscription),
			2 => Ok(PaymentType::Tip),
			3 => Ok(PaymentType::Donation),
			_ => Err(RangeError::InvalidRange {
				category: "payment type",
				value: raw,
				max: Self::MAX_RAW,
			}),
		}
	}

	/// Wire encoding of this variant.
	pub fn as_raw(self) -> u8 {
		self as u8
	}
}

/// Category of a piece of content in the creator registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentCategory {
	Video,
	Audio,
	Article,
	Livestream,
}

impl ContentCategory {
	/// Highest raw value that maps to a variant.
	pub const MAX_RAW: u8 = 3;

	/// Maps an untrusted raw integer to a content category.
	pub fn from_raw(raw: u8) -> Result<Self, RangeError> {
		match raw {
			0 => Ok(ContentCategory::Video),
			1 => Ok(ContentCategory::Audio),
			2 => Ok(ContentCategory::Article),
			3 => Ok(ContentCategory::Livestream),
			_ => Err(RangeError::InvalidRange {
				category: "content category",
				value: raw,
				max: Self::MAX_RAW,
			}),
		}
	}
}

/// Lifecycle state of a subscription read back from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscriptionStatus {
	Inactive,
	Active,
	Expired,
	Cancelled,
}

impl SubscriptionStatus {
	/// Highest raw value that maps to a variant.
	pub const MAX_RAW: u8 = 3;

	/// Maps an untrusted raw integer to a subscription status.
	pub fn from_raw(raw: u8) -> Result<Self, RangeError> {
		match raw {
			0 => Ok(SubscriptionStatus::Inactive),
			1 => Ok(SubscriptionStatus::Active),
			2 => Ok(SubscriptionStatus::Expired),
			3 => Ok(SubscriptionStatus::Cancelled),
			_ => Err(RangeError::InvalidRange {
				category: "subscription status",
				value: raw,
				max: Self::MAX_RAW,
			}),
		}
	}
}

/// A single payment attempt as submitted by a caller.
///
/// Immutable once constructed. `content_id == 0` means the payment is not
/// scoped to a specific piece of content (tips and donations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
	/// Category of this payment.
	pub payment_type: PaymentType,
	/// Creator receiving the payment.
	pub creator: Address,
	/// Content the payment is scoped to, 0 if none.
	pub content_id: u64,
	/// Asset the payer settles in. `NATIVE_ASSET` denotes the chain's
	/// native asset.
	pub payment_token: Address,
	/// Payer's maximum acceptable overpayment, in basis points.
	pub max_slippage_bps: u16,
	/// Absolute unix timestamp after which the attempt is void.
	pub deadline: u64,
}

impl PaymentRequest {
	/// Builds a request from wire-level values, guarding the category byte.
	///
	/// Invalid payment-type values never reach `PaymentType`; they surface
	/// as a category-specific [`RangeError`] here.
	pub fn from_raw_parts(
		raw_payment_type: u8,
		creator: Address,
		content_id: u64,
		payment_token: Address,
		max_slippage_bps: u16,
		deadline: u64,
	) -> Result<Self, RangeError> {
		Ok(Self {
			payment_type: PaymentType::from_raw(raw_payment_type)?,
			creator,
			content_id,
			payment_token,
			max_slippage_bps,
			deadline,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_payment_type_from_raw() {
		assert_eq!(PaymentType::from_raw(0), Ok(PaymentType::PayPerView));
		assert_eq!(PaymentType::from_raw(1), Ok(PaymentType::Subscription));
		assert_eq!(PaymentType::from_raw(2), Ok(PaymentType::Tip));
		assert_eq!(PaymentType::from_raw(3), Ok(PaymentType::Donation));

		assert_eq!(
			PaymentType::from_raw(4),
			Err(RangeError::InvalidRange {
				category: "payment type",
				value: 4,
				max: 3,
			})
		);
		assert!(PaymentType::from_raw(255).is_err());
	}

	#[test]
	fn test_content_category_from_raw() {
		assert_eq!(ContentCategory::from_raw(0), Ok(ContentCategory::Video));
		assert_eq!(
			ContentCategory::from_raw(3),
			Ok(ContentCategory::Livestream)
		);

		let err = ContentCategory::from_raw(9).unwrap_err();
		assert_eq!(
			err.to_string(),
			"value 9 out of range for content category (max 3)"
		);
	}

	#[test]
	fn test_subscription_status_from_raw() {
		assert_eq!(
			SubscriptionStatus::from_raw(1),
			Ok(SubscriptionStatus::Active)
		);
		assert!(SubscriptionStatus::from_raw(4).is_err());
	}

	#[test]
	fn test_request_from_raw_parts_guards_category() {
		let creator = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
		let token = address!("e7f1725e7734ce288f8367e1bb143e90bb3f0512");

		let request =
			PaymentRequest::from_raw_parts(0, creator, 42, token, 100, 1_700_000_000).unwrap();
		assert_eq!(request.payment_type, PaymentType::PayPerView);
		assert_eq!(request.content_id, 42);

		let err =
			PaymentRequest::from_raw_parts(7, creator, 42, token, 100, 1_700_000_000).unwrap_err();
		assert!(matches!(err, RangeError::InvalidRange { value: 7, .. }));
	}
}
