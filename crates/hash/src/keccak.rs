// Copyright 2025 Irreducible Inc.

//! Keccak-512 with the original `0x01` padding (not FIPS-202 SHA3-512).

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U64, U72},
	HashMarker, Output, Reset,
};

use crate::words::{u64_le, write_u64_le};

const ROUNDS: usize = 24;
const RATE_WORDS: usize = 9;

const ROUND_CONSTANTS: [u64; ROUNDS] = [
	0x0000000000000001,
	0x0000000000008082,
	0x800000000000808a,
	0x8000000080008000,
	0x000000000000808b,
	0x0000000080000001,
	0x8000000080008081,
	0x8000000000008009,
	0x000000000000008a,
	0x0000000000000088,
	0x0000000080008009,
	0x000000008000000a,
	0x000000008000808b,
	0x800000000000008b,
	0x8000000000008089,
	0x8000000000008003,
	0x8000000000008002,
	0x8000000000000080,
	0x000000000000800a,
	0x800000008000000a,
	0x8000000080008081,
	0x8000000000008080,
	0x0000000080000001,
	0x8000000080008008,
];

/// Rho rotation of lane `x + 5y`.
#[rustfmt::skip]
const RHO: [u32; 25] = [
	0, 1, 62, 28, 27,
	36, 44, 6, 55, 20,
	3, 10, 43, 25, 39,
	41, 45, 15, 21, 8,
	18, 2, 61, 56, 14,
];

fn keccak_f(a: &mut [u64; 25]) {
	for rc in ROUND_CONSTANTS {
		// theta
		let c: [u64; 5] = std::array::from_fn(|x| a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20]);
		for x in 0..5 {
			let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
			for y in 0..5 {
				a[x + 5 * y] ^= d;
			}
		}
		// rho and pi
		let mut b = [0u64; 25];
		for x in 0..5 {
			for y in 0..5 {
				b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(RHO[x + 5 * y]);
			}
		}
		// chi
		for y in 0..5 {
			for x in 0..5 {
				a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
			}
		}
		// iota
		a[0] ^= rc;
	}
}

fn absorb_block(state: &mut [u64; 25], block: &[u8]) {
	for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)).take(RATE_WORDS) {
		*lane ^= u64_le(chunk);
	}
	keccak_f(state);
}

/// Keccak-512 core hasher state.
#[derive(Clone)]
pub struct Keccak512Core {
	state: [u64; 25],
}

pub type Keccak512 = CoreWrapper<Keccak512Core>;

impl HashMarker for Keccak512Core {}

impl BlockSizeUser for Keccak512Core {
	type BlockSize = U72;
}

impl BufferKindUser for Keccak512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Keccak512Core {
	type OutputSize = U64;
}

impl UpdateCore for Keccak512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			absorb_block(&mut self.state, block);
		}
	}
}

impl FixedOutputCore for Keccak512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = 0x01;
		let n = block.len();
		block[n - 1] |= 0x80;
		absorb_block(&mut self.state, block);
		write_u64_le(&self.state[..8], out);
	}
}

impl Default for Keccak512Core {
	#[inline]
	fn default() -> Self {
		Self { state: [0; 25] }
	}
}

impl Reset for Keccak512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Keccak512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Keccak512")
	}
}

impl fmt::Debug for Keccak512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Keccak512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;
	use tiny_keccak::{Hasher, Keccak};

	use super::Keccak512;

	fn reference(input: &[u8]) -> [u8; 64] {
		let mut hasher = Keccak::v512();
		hasher.update(input);
		let mut out = [0u8; 64];
		hasher.finalize(&mut out);
		out
	}

	proptest! {
		#[test]
		fn test_keccak_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Keccak512::digest(&input).as_slice(), reference(&input));
		}
	}
}
