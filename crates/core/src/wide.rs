// Copyright 2025 Irreducible Inc.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use hashblock_hash::WIDE_BYTES;
use static_assertions::const_assert_eq;

/// 512-bit buffer carrying one chain step's digest into the next step.
///
/// Digests shorter than 64 bytes occupy the prefix and leave the rest zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Hash512(pub [u8; WIDE_BYTES]);

/// 256-bit chain digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
#[repr(transparent)]
pub struct Hash256(pub [u8; 32]);

const_assert_eq!(std::mem::size_of::<Hash512>(), 2 * std::mem::size_of::<Hash256>());

impl Hash512 {
	pub const ZERO: Self = Self([0; WIDE_BYTES]);

	/// Returns bytes `0..32`.
	pub fn truncate_to_256(&self) -> Hash256 {
		let [low, _high] = bytemuck::must_cast::<Self, [Hash256; 2]>(*self);
		low
	}

	pub fn as_bytes(&self) -> &[u8; WIDE_BYTES] {
		&self.0
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8; WIDE_BYTES] {
		&mut self.0
	}
}

impl Hash256 {
	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}

	/// Hex with the last byte first, the order block explorers and node RPCs print.
	///
	/// [`fmt::Display`] prints bytes in buffer order.
	pub fn to_reversed_hex(&self) -> String {
		self.0.iter().rev().map(|byte| format!("{byte:02x}")).collect()
	}
}

impl Default for Hash512 {
	fn default() -> Self {
		Self::ZERO
	}
}

impl From<[u8; WIDE_BYTES]> for Hash512 {
	fn from(bytes: [u8; WIDE_BYTES]) -> Self {
		Self(bytes)
	}
}

impl From<[u8; 32]> for Hash256 {
	fn from(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}
}

impl From<Hash256> for [u8; 32] {
	fn from(hash: Hash256) -> Self {
		hash.0
	}
}

impl AsRef<[u8]> for Hash512 {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl AsRef<[u8]> for Hash256 {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
	for byte in bytes {
		write!(f, "{byte:02x}")?;
	}
	Ok(())
}

impl fmt::Display for Hash512 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_hex(f, &self.0)
	}
}

impl fmt::Debug for Hash512 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Hash512({self})")
	}
}

impl fmt::Display for Hash256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_hex(f, &self.0)
	}
}

impl fmt::Debug for Hash256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Hash256({self})")
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_truncate_known_pattern() {
		let wide = Hash512(std::array::from_fn(|i| i as u8));
		let expected: [u8; 32] = std::array::from_fn(|i| i as u8);
		assert_eq!(wide.truncate_to_256(), Hash256(expected));
	}

	#[test]
	fn test_hex_display() {
		let mut bytes = [0u8; 32];
		bytes[0] = 0xab;
		bytes[31] = 0x01;
		let hash = Hash256(bytes);
		let text = hash.to_string();
		assert_eq!(text.len(), 64);
		assert!(text.starts_with("ab00"));
		assert!(text.ends_with("0001"));
		assert_eq!(format!("{:?}", Hash512::ZERO), format!("Hash512({})", "0".repeat(128)));
	}

	#[test]
	fn test_reversed_hex_puts_last_byte_first() {
		let hash = Hash256(std::array::from_fn(|i| i as u8));
		let text = hash.to_reversed_hex();
		assert!(text.starts_with("1f1e1d"));
		assert!(text.ends_with("020100"));
		assert_eq!(text, Hash256(std::array::from_fn(|i| 31 - i as u8)).to_string());
	}

	proptest! {
		#[test]
		fn test_truncate_keeps_prefix(
			bytes in prop::array::uniform32(any::<u8>()),
			tail in prop::array::uniform32(any::<u8>()),
		) {
			let mut wide = Hash512::ZERO;
			wide.0[..32].copy_from_slice(&bytes);
			wide.0[32..].copy_from_slice(&tail);
			prop_assert_eq!(wide.truncate_to_256().0, bytes);
		}
	}
}
