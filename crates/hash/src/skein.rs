// Copyright 2025 Irreducible Inc.

//! Skein-512-512 (version 1.3) in simple hashing mode.

use core::fmt;

use digest::{
	block_buffer::Lazy,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::U64,
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

use crate::words::{read_u64_le, write_u64_le};

const WORDS: usize = 8;
const BLOCK_BYTES: u64 = 64;
const ROUNDS: usize = 72;
const KEY_PARITY: u64 = 0x1bd11bdaa9fc1a22;

const ROTATIONS: [[u32; 4]; 8] = [
	[46, 36, 19, 37],
	[33, 27, 14, 42],
	[17, 49, 36, 39],
	[44, 9, 54, 56],
	[39, 30, 34, 24],
	[13, 50, 10, 17],
	[25, 29, 39, 43],
	[8, 35, 56, 22],
];

const PERMUTATION: [usize; WORDS] = [2, 1, 4, 7, 6, 5, 0, 3];

const SCHEMA_ID: u32 = 0x33414853; // "SHA3"
const OUTPUT_BITS: u64 = 512;

mod block_type {
	pub const CONFIG: u64 = 4;
	pub const MESSAGE: u64 = 48;
	pub const OUTPUT: u64 = 63;
}

const FLAG_FIRST: u64 = 1 << 62;
const FLAG_FINAL: u64 = 1 << 63;

lazy_static! {
	/// Chaining value after the configuration UBI call for a 512-bit output.
	static ref IV: [u64; WORDS] = {
		let mut config = [0u8; 64];
		config[..4].copy_from_slice(&SCHEMA_ID.to_le_bytes());
		config[4..6].copy_from_slice(&1u16.to_le_bytes());
		config[8..16].copy_from_slice(&OUTPUT_BITS.to_le_bytes());
		let mut g = [0u64; WORDS];
		ubi(&mut g, &config, 32, (block_type::CONFIG << 56) | FLAG_FIRST | FLAG_FINAL);
		g
	};
}

fn threefish(key: &[u64; WORDS], tweak: [u64; 2], plaintext: &[u64; WORDS]) -> [u64; WORDS] {
	let mut k = [0u64; WORDS + 1];
	k[..WORDS].copy_from_slice(key);
	k[WORDS] = key.iter().fold(KEY_PARITY, |acc, &x| acc ^ x);
	let t = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

	let subkey = |s: usize| -> [u64; WORDS] {
		let mut out: [u64; WORDS] = std::array::from_fn(|i| k[(s + i) % (WORDS + 1)]);
		out[5] = out[5].wrapping_add(t[s % 3]);
		out[6] = out[6].wrapping_add(t[(s + 1) % 3]);
		out[7] = out[7].wrapping_add(s as u64);
		out
	};

	let mut v = *plaintext;
	for d in 0..ROUNDS {
		if d % 4 == 0 {
			let sk = subkey(d / 4);
			for (x, s) in v.iter_mut().zip(sk) {
				*x = x.wrapping_add(s);
			}
		}
		let mut e = [0u64; WORDS];
		for j in 0..4 {
			let a = v[2 * j].wrapping_add(v[2 * j + 1]);
			e[2 * j] = a;
			e[2 * j + 1] = v[2 * j + 1].rotate_left(ROTATIONS[d % 8][j]) ^ a;
		}
		v = std::array::from_fn(|i| e[PERMUTATION[i]]);
	}

	let sk = subkey(ROUNDS / 4);
	std::array::from_fn(|i| v[i].wrapping_add(sk[i]))
}

/// One UBI block: `g <- E(g, tweak, m) ^ m`, where `position` is the byte count through the block.
fn ubi(g: &mut [u64; WORDS], block: &[u8], position: u64, flags: u64) {
	let m: [u64; WORDS] = read_u64_le(block);
	let c = threefish(g, [position, flags], &m);
	for i in 0..WORDS {
		g[i] = c[i] ^ m[i];
	}
}

/// Skein-512 core hasher state.
///
/// The buffer is lazy because the final message block must be flagged as such, so a block can
/// only be processed once more input is known to follow.
#[derive(Clone)]
pub struct Skein512Core {
	g: [u64; WORDS],
	bytes_len: u64,
}

pub type Skein512 = CoreWrapper<Skein512Core>;

impl Skein512Core {
	fn message_flags(&self) -> u64 {
		let first = if self.bytes_len == 0 { FLAG_FIRST } else { 0 };
		(block_type::MESSAGE << 56) | first
	}
}

impl HashMarker for Skein512Core {}

impl BlockSizeUser for Skein512Core {
	type BlockSize = U64;
}

impl BufferKindUser for Skein512Core {
	type BufferKind = Lazy;
}

impl OutputSizeUser for Skein512Core {
	type OutputSize = U64;
}

impl UpdateCore for Skein512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			let flags = self.message_flags();
			self.bytes_len += BLOCK_BYTES;
			ubi(&mut self.g, block, self.bytes_len, flags);
		}
	}
}

impl FixedOutputCore for Skein512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos() as u64;
		let flags = self.message_flags() | FLAG_FINAL;
		self.bytes_len += pos;
		ubi(&mut self.g, buffer.pad_with_zeros(), self.bytes_len, flags);

		let counter = [0u8; 64];
		ubi(&mut self.g, &counter, 8, (block_type::OUTPUT << 56) | FLAG_FIRST | FLAG_FINAL);
		write_u64_le(&self.g, out);
	}
}

impl Default for Skein512Core {
	#[inline]
	fn default() -> Self {
		Self {
			g: *IV,
			bytes_len: 0,
		}
	}
}

impl Reset for Skein512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Skein512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Skein512")
	}
}

impl fmt::Debug for Skein512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Skein512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::{typenum::U64, Digest};
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_iv_first_word() {
		assert_eq!(IV[0], 0x4903adff749c51ce);
	}

	proptest! {
		#[test]
		fn test_skein_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Skein512::digest(&input), skein::Skein512::<U64>::digest(&input));
		}
	}
}
