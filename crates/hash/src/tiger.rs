// Copyright 2025 Irreducible Inc.

//! Tiger and Tiger2.
//!
//! The two functions share the compression function and differ only in the first padding byte.
//! The four 256-entry S-boxes are not stored: they are regenerated once from the published
//! generator, which runs the compression function over its own partially built tables.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U24, U64},
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

use crate::words::{read_u64_le, write_u64_le};

const IV: [u64; 3] = [0x0123456789abcdef, 0xfedcba9876543210, 0xf096a5b4c3b2e187];

const GENERATOR_SEED: &[u8; 64] = b"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham";
const GENERATOR_PASSES: usize = 5;

type Sboxes = [u64; 1024];

lazy_static! {
	static ref SBOXES: Sboxes = generate_sboxes();
}

fn generate_sboxes() -> Sboxes {
	let seed: [u64; 8] = read_u64_le(GENERATOR_SEED);
	let mut table: Sboxes = std::array::from_fn(|i| 0x0101010101010101 * (i & 0xff) as u64);
	let mut state = IV;
	let mut abc = 2;

	for _ in 0..GENERATOR_PASSES {
		for i in 0..256 {
			for sb in (0..1024).step_by(256) {
				abc += 1;
				if abc == 3 {
					abc = 0;
					compress(&mut state, &seed, &table);
				}
				let selector = state[abc].to_le_bytes();
				for (col, &byte) in selector.iter().enumerate() {
					let mask = 0xffu64 << (8 * col);
					let (p, q) = (sb + i, sb + byte as usize);
					let (x, y) = (table[p] & mask, table[q] & mask);
					table[p] = (table[p] & !mask) | y;
					table[q] = (table[q] & !mask) | x;
				}
			}
		}
	}
	table
}

#[inline(always)]
fn round(a: &mut u64, b: &mut u64, c: &mut u64, x: u64, mul: u64, t: &Sboxes) {
	*c ^= x;
	let cb = c.to_le_bytes();
	*a = a.wrapping_sub(
		t[cb[0] as usize] ^ t[256 + cb[2] as usize] ^ t[512 + cb[4] as usize] ^ t[768 + cb[6] as usize],
	);
	*b = b.wrapping_add(
		t[768 + cb[1] as usize] ^ t[512 + cb[3] as usize] ^ t[256 + cb[5] as usize] ^ t[cb[7] as usize],
	);
	*b = b.wrapping_mul(mul);
}

#[inline(always)]
fn pass(a: &mut u64, b: &mut u64, c: &mut u64, x: &[u64; 8], mul: u64, t: &Sboxes) {
	round(a, b, c, x[0], mul, t);
	round(b, c, a, x[1], mul, t);
	round(c, a, b, x[2], mul, t);
	round(a, b, c, x[3], mul, t);
	round(b, c, a, x[4], mul, t);
	round(c, a, b, x[5], mul, t);
	round(a, b, c, x[6], mul, t);
	round(b, c, a, x[7], mul, t);
}

fn key_schedule(x: &mut [u64; 8]) {
	x[0] = x[0].wrapping_sub(x[7] ^ 0xa5a5a5a5a5a5a5a5);
	x[1] ^= x[0];
	x[2] = x[2].wrapping_add(x[1]);
	x[3] = x[3].wrapping_sub(x[2] ^ (!x[1] << 19));
	x[4] ^= x[3];
	x[5] = x[5].wrapping_add(x[4]);
	x[6] = x[6].wrapping_sub(x[5] ^ (!x[4] >> 23));
	x[7] ^= x[6];
	x[0] = x[0].wrapping_add(x[7]);
	x[1] = x[1].wrapping_sub(x[0] ^ (!x[7] << 19));
	x[2] ^= x[1];
	x[3] = x[3].wrapping_add(x[2]);
	x[4] = x[4].wrapping_sub(x[3] ^ (!x[2] >> 23));
	x[5] ^= x[4];
	x[6] = x[6].wrapping_add(x[5]);
	x[7] = x[7].wrapping_sub(x[6] ^ 0x0123456789abcdef);
}

fn compress(state: &mut [u64; 3], block: &[u64; 8], t: &Sboxes) {
	let mut x = *block;
	let [mut a, mut b, mut c] = *state;

	pass(&mut a, &mut b, &mut c, &x, 5, t);
	key_schedule(&mut x);
	pass(&mut c, &mut a, &mut b, &x, 7, t);
	key_schedule(&mut x);
	pass(&mut b, &mut c, &mut a, &x, 9, t);

	state[0] ^= a;
	state[1] = b.wrapping_sub(state[1]);
	state[2] = c.wrapping_add(state[2]);
}

/// Core hasher state shared by Tiger (`PAD = 0x01`) and Tiger2 (`PAD = 0x80`).
#[derive(Clone)]
pub struct TigerCore<const PAD: u8> {
	state: [u64; 3],
	blocks_len: u64,
}

pub type Tiger = CoreWrapper<TigerCore<0x01>>;
pub type Tiger2 = CoreWrapper<TigerCore<0x80>>;

impl<const PAD: u8> HashMarker for TigerCore<PAD> {}

impl<const PAD: u8> BlockSizeUser for TigerCore<PAD> {
	type BlockSize = U64;
}

impl<const PAD: u8> BufferKindUser for TigerCore<PAD> {
	type BufferKind = Eager;
}

impl<const PAD: u8> OutputSizeUser for TigerCore<PAD> {
	type OutputSize = U24;
}

impl<const PAD: u8> UpdateCore for TigerCore<PAD> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		let t = &*SBOXES;
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress(&mut self.state, &read_u64_le(block), t);
		}
	}
}

impl<const PAD: u8> FixedOutputCore for TigerCore<PAD> {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let t = &*SBOXES;
		let bit_len = 8 * (buffer.get_pos() as u64 + 64 * self.blocks_len);
		let state = &mut self.state;
		buffer.digest_pad(PAD, &bit_len.to_le_bytes(), |block| {
			compress(state, &read_u64_le(block), t)
		});
		write_u64_le(state, out);
	}
}

impl<const PAD: u8> Default for TigerCore<PAD> {
	#[inline]
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
		}
	}
}

impl<const PAD: u8> Reset for TigerCore<PAD> {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<const PAD: u8> AlgorithmName for TigerCore<PAD> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(if PAD == 0x80 { "Tiger2" } else { "Tiger" })
	}
}

impl<const PAD: u8> fmt::Debug for TigerCore<PAD> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("TigerCore { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_generated_sbox_entries() {
		assert_eq!(SBOXES[0], 0x02aab17cf7e90c5e);
		assert_eq!(SBOXES[1], 0xac424b03e243a8ec);
	}

	proptest! {
		#[test]
		fn test_tiger_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Tiger::digest(&input), tiger::Tiger::digest(&input));
			assert_eq!(Tiger2::digest(&input), tiger::Tiger2::digest(&input));
		}
	}
}
