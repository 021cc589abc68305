// Copyright 2023-2025 Irreducible Inc.

use core::{fmt, slice};

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U128, U64},
	HashMarker, Output, Reset,
};
use sha2::compress512;

use crate::words::write_u64_be;

const IV: [u64; 8] = [
	0x6a09e667f3bcc908,
	0xbb67ae8584caa73b,
	0x3c6ef372fe94f82b,
	0xa54ff53a5f1d36f1,
	0x510e527fade682d1,
	0x9b05688c2b3e6c1f,
	0x1f83d9abfb41bd6b,
	0x5be0cd19137e2179,
];

/// SHA-512 core built on the block compression function of the `sha2` crate.
#[derive(Clone)]
pub struct Sha512Core {
	state: [u64; 8],
	blocks_len: u128,
}

pub type Sha512 = CoreWrapper<Sha512Core>;

impl HashMarker for Sha512Core {}

impl BlockSizeUser for Sha512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Sha512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Sha512Core {
	type OutputSize = U64;
}

impl UpdateCore for Sha512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u128;
		compress512(&mut self.state, blocks);
	}
}

impl FixedOutputCore for Sha512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_len = 8 * (buffer.get_pos() as u128 + 128 * self.blocks_len);
		let state = &mut self.state;
		buffer.len128_padding_be(bit_len, |block| compress512(state, slice::from_ref(block)));
		write_u64_be(state, out);
	}
}

impl Default for Sha512Core {
	#[inline]
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Sha512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Sha512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha512")
	}
}

impl fmt::Debug for Sha512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;

	use super::Sha512;

	proptest! {
		#[test]
		fn test_sha512_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Sha512::digest(&input), sha2::Sha512::digest(&input));
		}
	}
}
