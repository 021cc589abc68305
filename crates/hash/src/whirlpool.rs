// Copyright 2025 Irreducible Inc.

//! Whirlpool (2003 final) and Whirlpool-1 (the 2001 "Whirlpool-T" revision).
//!
//! Both revisions use the S-box built from the E and R mini-boxes and differ only in the first
//! row of the MDS circulant used by the row mixing.

use core::{fmt, marker::PhantomData};

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::U64,
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

use crate::words::{read_u64_be, write_u64_be};

const ROUNDS: usize = 10;

const MINI_E: [u8; 16] = [0x1, 0xb, 0x9, 0xc, 0xd, 0x6, 0xf, 0x3, 0xe, 0x8, 0x7, 0x4, 0xa, 0x2, 0x5, 0x0];
const MINI_R: [u8; 16] = [0x7, 0xc, 0xb, 0xd, 0xe, 0x4, 0x9, 0xf, 0x6, 0x3, 0x8, 0xa, 0x2, 0x5, 0x1, 0x0];

/// Multiplication in GF(2^8) modulo `x^8 + x^4 + x^3 + x^2 + 1`.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
	let mut acc = 0u8;
	while b != 0 {
		if b & 1 != 0 {
			acc ^= a;
		}
		let carry = a & 0x80 != 0;
		a <<= 1;
		if carry {
			a ^= 0x1d;
		}
		b >>= 1;
	}
	acc
}

fn generate_sbox() -> [u8; 256] {
	let mut e_inv = [0u8; 16];
	for (i, &v) in MINI_E.iter().enumerate() {
		e_inv[v as usize] = i as u8;
	}
	std::array::from_fn(|u| {
		let a = MINI_E[u >> 4];
		let b = e_inv[u & 0xf];
		let r = MINI_R[(a ^ b) as usize];
		(MINI_E[(a ^ r) as usize] << 4) | e_inv[(b ^ r) as usize]
	})
}

/// Round tables: `mix[k][x]` is the contribution of byte `S(x)` in column `k` to a state row,
/// rows being packed big-endian.
pub struct WhirlpoolTables {
	mix: [[u64; 256]; 8],
	round_constants: [u64; ROUNDS],
}

impl WhirlpoolTables {
	fn new(circulant: [u8; 8]) -> Self {
		let sbox = generate_sbox();
		let mut mix = [[0u64; 256]; 8];
		for x in 0..256 {
			let s = sbox[x];
			let row = u64::from_be_bytes(std::array::from_fn(|j| gf_mul(s, circulant[j])));
			for (k, table) in mix.iter_mut().enumerate() {
				table[x] = row.rotate_right(8 * k as u32);
			}
		}
		let round_constants = std::array::from_fn(|r| {
			u64::from_be_bytes(std::array::from_fn(|j| sbox[8 * r + j]))
		});
		Self {
			mix,
			round_constants,
		}
	}

	#[inline]
	fn round(&self, rows: &[u64; 8], key: &[u64; 8]) -> [u64; 8] {
		std::array::from_fn(|i| {
			let mut acc = key[i];
			for k in 0..8 {
				let byte = (rows[(i + 8 - k) % 8] >> (56 - 8 * k)) & 0xff;
				acc ^= self.mix[k][byte as usize];
			}
			acc
		})
	}

	fn compress(&self, h: &mut [u64; 8], block: &[u8]) {
		let m: [u64; 8] = read_u64_be(block);
		let mut key = *h;
		let mut state: [u64; 8] = std::array::from_fn(|i| m[i] ^ key[i]);
		for &rc in &self.round_constants {
			let mut constant = [0u64; 8];
			constant[0] = rc;
			key = self.round(&key, &constant);
			state = self.round(&state, &key);
		}
		for i in 0..8 {
			h[i] ^= state[i] ^ m[i];
		}
	}
}

lazy_static! {
	static ref FINAL_TABLES: WhirlpoolTables = WhirlpoolTables::new([1, 1, 4, 1, 8, 5, 2, 9]);
	static ref WHIRLPOOL1_TABLES: WhirlpoolTables = WhirlpoolTables::new([1, 1, 3, 1, 5, 8, 9, 5]);
}

/// Selects one Whirlpool revision.
pub trait WhirlpoolVariant: Clone + Send + Sync + 'static {
	const NAME: &'static str;

	fn tables() -> &'static WhirlpoolTables;
}

#[derive(Clone, Debug)]
pub struct FinalRevision;

#[derive(Clone, Debug)]
pub struct FirstRevision;

impl WhirlpoolVariant for FinalRevision {
	const NAME: &'static str = "Whirlpool";

	fn tables() -> &'static WhirlpoolTables {
		&FINAL_TABLES
	}
}

impl WhirlpoolVariant for FirstRevision {
	const NAME: &'static str = "Whirlpool-1";

	fn tables() -> &'static WhirlpoolTables {
		&WHIRLPOOL1_TABLES
	}
}

#[derive(Clone)]
pub struct WhirlpoolCore<V: WhirlpoolVariant> {
	h: [u64; 8],
	blocks_len: u64,
	_variant: PhantomData<V>,
}

pub type Whirlpool = CoreWrapper<WhirlpoolCore<FinalRevision>>;
pub type Whirlpool1 = CoreWrapper<WhirlpoolCore<FirstRevision>>;

impl<V: WhirlpoolVariant> HashMarker for WhirlpoolCore<V> {}

impl<V: WhirlpoolVariant> BlockSizeUser for WhirlpoolCore<V> {
	type BlockSize = U64;
}

impl<V: WhirlpoolVariant> BufferKindUser for WhirlpoolCore<V> {
	type BufferKind = Eager;
}

impl<V: WhirlpoolVariant> OutputSizeUser for WhirlpoolCore<V> {
	type OutputSize = U64;
}

impl<V: WhirlpoolVariant> UpdateCore for WhirlpoolCore<V> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		let tables = V::tables();
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			tables.compress(&mut self.h, block);
		}
	}
}

impl<V: WhirlpoolVariant> FixedOutputCore for WhirlpoolCore<V> {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let tables = V::tables();
		let bit_len = 8 * (buffer.get_pos() as u128 + 64 * self.blocks_len as u128);
		// The length field is 256 bits wide; the upper half is always zero here.
		let mut suffix = [0u8; 32];
		suffix[16..].copy_from_slice(&bit_len.to_be_bytes());
		let h = &mut self.h;
		buffer.digest_pad(0x80, &suffix, |block| tables.compress(h, block));
		write_u64_be(h, out);
	}
}

impl<V: WhirlpoolVariant> Default for WhirlpoolCore<V> {
	#[inline]
	fn default() -> Self {
		Self {
			h: [0; 8],
			blocks_len: 0,
			_variant: PhantomData,
		}
	}
}

impl<V: WhirlpoolVariant> Reset for WhirlpoolCore<V> {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<V: WhirlpoolVariant> AlgorithmName for WhirlpoolCore<V> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(V::NAME)
	}
}

impl<V: WhirlpoolVariant> fmt::Debug for WhirlpoolCore<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "WhirlpoolCore<{}> {{ ... }}", V::NAME)
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_sbox_head() {
		let sbox = generate_sbox();
		assert_eq!(sbox[..4], [0x18, 0x23, 0xc6, 0xe8]);
	}

	proptest! {
		#[test]
		fn test_whirlpool_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Whirlpool::digest(&input), whirlpool::Whirlpool::digest(&input));
		}
	}
}
