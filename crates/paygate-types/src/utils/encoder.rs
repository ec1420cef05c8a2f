//! Canonical word-aligned encoding for hashing.
//!
//! Intent identifiers and intent struct hashes are keccak256 digests over a
//! fixed-order sequence of 32-byte words, one word per field. The encoder
//! makes that layout explicit so a reordered or missing field is caught by
//! tests instead of silently producing a different digest.

use alloy_primitives::{Address, FixedBytes, U256};

/// Minimal encoder producing one 32-byte word per pushed field.
///
/// Numeric values are big-endian and right-aligned, addresses occupy the
/// low 20 bytes of their word, and fixed byte strings are left-aligned,
/// matching Solidity `abi.encode` of the corresponding types.
pub struct WordEncoder {
	buf: Vec<u8>,
}

impl Default for WordEncoder {
	fn default() -> Self {
		Self::new()
	}
}

impl WordEncoder {
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	pub fn push_address(&mut self, addr: &Address) {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(addr.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u256(&mut self, v: U256) {
		let word: [u8; 32] = v.to_be_bytes::<32>();
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u64(&mut self, v: u64) {
		let mut word = [0u8; 32];
		word[24..].copy_from_slice(&v.to_be_bytes());
		self.buf.extend_from_slice(&word);
	}

	pub fn push_u8(&mut self, v: u8) {
		let mut word = [0u8; 32];
		word[31] = v;
		self.buf.extend_from_slice(&word);
	}

	pub fn push_bytes16(&mut self, v: &FixedBytes<16>) {
		let mut word = [0u8; 32];
		word[..16].copy_from_slice(v.as_slice());
		self.buf.extend_from_slice(&word);
	}

	pub fn finish(self) -> Vec<u8> {
		self.buf
	}
}
