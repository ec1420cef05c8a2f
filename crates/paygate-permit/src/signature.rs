//! Raw signature parsing and signer recovery.
//!
//! Decodes the fixed 65-byte r || s || v layout defensively and delegates
//! recovery to the platform primitive. Every malformed input resolves to
//! "no signer" rather than an error. Callers must compare the recovered
//! address against the signer they expect; a degenerate recovered value is
//! "unverified", never a valid identity.

use alloy_primitives::{Address, Signature, B256, U256};
use paygate_types::SIGNATURE_LENGTH;

/// Recovers the signer of `hash` from a raw 65-byte signature.
///
/// Returns `None` when the signature is not exactly 65 bytes, when the
/// recovery byte falls outside {0, 1, 27, 28}, or when recovery itself
/// fails. A recovery byte of 0 or 1 is normalized to 27/28 first, so both
/// encodings verify identically.
pub fn recover_signer(hash: B256, signature: &[u8]) -> Option<Address> {
	if signature.len() != SIGNATURE_LENGTH {
		return None;
	}

	let r = U256::from_be_slice(&signature[..32]);
	let s = U256::from_be_slice(&signature[32..64]);
	let v = match signature[64] {
		0 | 27 => 27u8,
		1 | 28 => 28u8,
		_ => return None,
	};

	let parsed = Signature::new(r, s, v == 28);
	parsed.recover_address_from_prehash(&hash).ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::keccak256;
	use k256::ecdsa::SigningKey;

	fn signed_payload() -> (B256, [u8; 65], Address) {
		let hash = keccak256(b"pay-per-view intent payload");

		let signing_key = SigningKey::from_bytes((&[0x42u8; 32]).into()).unwrap();
		let (sig, recovery_id) = signing_key.sign_prehash_recoverable(hash.as_slice()).unwrap();

		let mut raw = [0u8; 65];
		raw[..64].copy_from_slice(sig.to_bytes().as_slice());
		raw[64] = 27 + recovery_id.to_byte();

		let signer = Address::from_public_key(signing_key.verifying_key());
		(hash, raw, signer)
	}

	#[test]
	fn test_recovers_expected_signer() {
		let (hash, raw, signer) = signed_payload();
		assert_eq!(recover_signer(hash, &raw), Some(signer));
	}

	#[test]
	fn test_zero_one_encoding_is_equivalent() {
		let (hash, mut raw, signer) = signed_payload();

		// Re-encode v from {27,28} to {0,1}
		raw[64] -= 27;
		assert_eq!(recover_signer(hash, &raw), Some(signer));
	}

	#[test]
	fn test_wrong_length_yields_no_signer() {
		let (hash, raw, _) = signed_payload();

		assert_eq!(recover_signer(hash, &[]), None);
		assert_eq!(recover_signer(hash, &raw[..64]), None);

		let mut long = raw.to_vec();
		long.push(0);
		assert_eq!(recover_signer(hash, &long), None);
	}

	#[test]
	fn test_out_of_range_recovery_byte_yields_no_signer() {
		let (hash, raw, _) = signed_payload();

		for v in [2u8, 3, 26, 29, 31, 255] {
			let mut mutated = raw;
			mutated[64] = v;
			assert_eq!(recover_signer(hash, &mutated), None);
		}
	}

	#[test]
	fn test_tampered_hash_recovers_different_signer() {
		let (_, raw, signer) = signed_payload();

		let other_hash = keccak256(b"a different payload");
		let recovered = recover_signer(other_hash, &raw);
		// Recovery may fail outright or produce some other address; it must
		// never yield the original signer
		assert_ne!(recovered, Some(signer));
	}
}
