//! Permit authorization module for the paygate settlement core.
//!
//! Validates a delegated-transfer authorization against the payment it
//! claims to authorize before any external transfer is attempted. The
//! permit's content, not merely its cryptographic validity, must match the
//! expected token, amount, destination, and live nonce; any divergence is
//! rejected with a specific reason so a caller can tell a stale nonce from
//! a redirected destination. Transfer execution is delegated to an
//! external collaborator and never attempted speculatively.

/// Raw signature parsing and signer recovery.
pub mod signature;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use paygate_types::{current_timestamp, truncate_id, PaymentIntent, PermitAuthorization};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Specific reason a permit failed content validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermitRejection {
	/// The permit's deadline lies in the past.
	#[error("permit expired at {deadline}, now {now}")]
	Expired { deadline: u64, now: u64 },
	/// The permit was signed over a nonce that is no longer current.
	#[error("stale nonce: permit signed over {signed}, current is {current}")]
	StaleNonce { signed: U256, current: U256 },
	/// The permit covers a different token than the payment uses.
	#[error("wrong token: permit covers {signed}, payment uses {expected}")]
	WrongToken { signed: Address, expected: Address },
	/// The signed ceiling does not cover what will be pulled.
	#[error("insufficient amount: permit covers {signed}, payment needs {expected}")]
	InsufficientAmount { signed: U256, expected: U256 },
	/// The permit routes funds somewhere other than the expected recipient.
	#[error("wrong destination: permit sends to {signed}, payment expects {expected}")]
	WrongDestination { signed: Address, expected: Address },
	/// The caller's requested charge differs from the expected charge.
	#[error("amount mismatch: caller requested {requested}, payment expects {expected}")]
	AmountMismatch { requested: U256, expected: U256 },
}

/// Errors surfaced by permit validation and transfer execution.
#[derive(Debug, Error)]
pub enum TransferError {
	/// The permit failed content validation; no transfer was attempted.
	#[error("permit rejected: {0}")]
	Rejected(#[from] PermitRejection),
	/// The execution collaborator reported failure, or a collaborator read
	/// failed before validation could complete.
	#[error("transfer failed: {0}")]
	Failed(String),
}

/// Failure reported by the execution collaborator.
#[derive(Debug, Error)]
pub enum ExecutorError {
	/// Application-level failure with a structured reason.
	#[error("{0}")]
	Reverted(String),
	/// Unstructured low-level failure with no reliable reason.
	#[error("transport failure: {0}")]
	Transport(String),
}

/// What the payment pipeline expects a permit to authorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitExpectations {
	/// Token that will be pulled.
	pub token: Address,
	/// Exact amount that will be pulled.
	pub amount: U256,
	/// Where the pulled funds must land.
	pub destination: Address,
}

/// Trait for reading a user's current permit nonce.
///
/// The nonce registry is owned by the external authorization collaborator;
/// this core only ever reads it. The collaborator consumes the nonce when
/// the transfer executes, which is what makes a permit single-use.
#[async_trait]
pub trait NonceRegistry: Send + Sync {
	/// Current permit nonce of `user`.
	async fn current_nonce(&self, user: Address) -> Result<U256, TransferError>;
}

/// Trait for the external settlement collaborator executing transfers.
#[async_trait]
pub trait TransferExecutor: Send + Sync {
	/// Executes the transfer described by `intent`, pulling funds under
	/// `permit`. Only called after the permit passed content validation.
	async fn transfer(
		&self,
		intent: &PaymentIntent,
		permit: &PermitAuthorization,
	) -> Result<(), ExecutorError>;
}

/// Validates a permit's content against the payment it is presented for.
///
/// Checks run in a fixed order and short-circuit on the first divergence:
/// deadline, nonce, token, signed ceiling, destination, requested amount.
/// The signed ceiling may exceed the expected charge; the requested amount
/// must match it exactly.
pub fn check_permit(
	permit: &PermitAuthorization,
	expectations: &PermitExpectations,
	current_nonce: U256,
	now: u64,
) -> Result<(), PermitRejection> {
	if permit.deadline < now {
		return Err(PermitRejection::Expired {
			deadline: permit.deadline,
			now,
		});
	}
	if permit.nonce != current_nonce {
		return Err(PermitRejection::StaleNonce {
			signed: permit.nonce,
			current: current_nonce,
		});
	}
	if permit.token != expectations.token {
		return Err(PermitRejection::WrongToken {
			signed: permit.token,
			expected: expectations.token,
		});
	}
	if permit.amount < expectations.amount {
		return Err(PermitRejection::InsufficientAmount {
			signed: permit.amount,
			expected: expectations.amount,
		});
	}
	if permit.transfer_destination != expectations.destination {
		return Err(PermitRejection::WrongDestination {
			signed: permit.transfer_destination,
			expected: expectations.destination,
		});
	}
	if permit.requested_amount != expectations.amount {
		return Err(PermitRejection::AmountMismatch {
			requested: permit.requested_amount,
			expected: expectations.amount,
		});
	}
	Ok(())
}

/// Boolean convenience variant of [`check_permit`].
pub fn is_permit_valid(
	permit: &PermitAuthorization,
	expectations: &PermitExpectations,
	current_nonce: U256,
	now: u64,
) -> bool {
	check_permit(permit, expectations, current_nonce, now).is_ok()
}

/// Service validating permits against live state and delegating execution.
///
/// Wraps the two external collaborators this core consumes: the nonce
/// registry for validation reads and the transfer executor for the actual
/// fund movement. No retries are performed here; retry policy belongs to
/// the caller.
pub struct PermitAuthorizer {
	nonces: Arc<dyn NonceRegistry>,
	executor: Arc<dyn TransferExecutor>,
}

impl PermitAuthorizer {
	/// Creates a new PermitAuthorizer over the given collaborators.
	pub fn new(nonces: Arc<dyn NonceRegistry>, executor: Arc<dyn TransferExecutor>) -> Self {
		Self { nonces, executor }
	}

	/// Validates `permit` for `user` against the live nonce and the
	/// current clock.
	pub async fn validate(
		&self,
		user: Address,
		permit: &PermitAuthorization,
		expectations: &PermitExpectations,
	) -> Result<(), TransferError> {
		let current_nonce = self.nonces.current_nonce(user).await?;

		check_permit(permit, expectations, current_nonce, current_timestamp()).map_err(
			|rejection| {
				debug!(user = %user, "permit rejected: {}", rejection);
				TransferError::Rejected(rejection)
			},
		)
	}

	/// Validates and, only on success, delegates the transfer.
	///
	/// A structured executor failure propagates its reason verbatim. An
	/// unstructured failure surfaces as a generic failure; it is never
	/// treated as success.
	pub async fn execute(
		&self,
		user: Address,
		intent: &PaymentIntent,
		permit: &PermitAuthorization,
		expectations: &PermitExpectations,
	) -> Result<(), TransferError> {
		self.validate(user, permit, expectations).await?;

		let id = intent.id.to_string();
		match self.executor.transfer(intent, permit).await {
			Ok(()) => {
				debug!(intent = %truncate_id(&id), "transfer executed");
				Ok(())
			},
			Err(ExecutorError::Reverted(reason)) => {
				warn!(intent = %truncate_id(&id), "transfer reverted: {}", reason);
				Err(TransferError::Failed(reason))
			},
			Err(ExecutorError::Transport(detail)) => {
				warn!(
					intent = %truncate_id(&id),
					"transfer failed without a structured reason: {}", detail
				);
				Err(TransferError::Failed(
					"transfer execution failed".to_string(),
				))
			},
		}
	}
}
