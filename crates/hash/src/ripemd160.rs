// Copyright 2025 Irreducible Inc.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U20, U64},
	HashMarker, Output, Reset,
};

use crate::words::{read_u32_le, write_u32_le};

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K_LEFT: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

#[rustfmt::skip]
const WORD_LEFT: [[usize; 16]; 5] = [
	[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
	[7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8],
	[3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12],
	[1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2],
	[4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13],
];

#[rustfmt::skip]
const WORD_RIGHT: [[usize; 16]; 5] = [
	[5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12],
	[6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2],
	[15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13],
	[8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14],
	[12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11],
];

#[rustfmt::skip]
const SHIFT_LEFT: [[u32; 16]; 5] = [
	[11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8],
	[7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12],
	[11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5],
	[11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12],
	[9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6],
];

#[rustfmt::skip]
const SHIFT_RIGHT: [[u32; 16]; 5] = [
	[8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6],
	[9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11],
	[9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5],
	[15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8],
	[8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11],
];

#[inline(always)]
fn boolean(round: usize, x: u32, y: u32, z: u32) -> u32 {
	match round {
		0 => x ^ y ^ z,
		1 => (x & y) | (!x & z),
		2 => (x | !y) ^ z,
		3 => (x & z) | (y & !z),
		_ => x ^ (y | !z),
	}
}

fn compress(h: &mut [u32; 5], block: &[u8]) {
	let x: [u32; 16] = read_u32_le(block);
	let [mut al, mut bl, mut cl, mut dl, mut el] = *h;
	let [mut ar, mut br, mut cr, mut dr, mut er] = *h;

	for round in 0..5 {
		for i in 0..16 {
			let t = al
				.wrapping_add(boolean(round, bl, cl, dl))
				.wrapping_add(x[WORD_LEFT[round][i]])
				.wrapping_add(K_LEFT[round])
				.rotate_left(SHIFT_LEFT[round][i])
				.wrapping_add(el);
			al = el;
			el = dl;
			dl = cl.rotate_left(10);
			cl = bl;
			bl = t;

			let t = ar
				.wrapping_add(boolean(4 - round, br, cr, dr))
				.wrapping_add(x[WORD_RIGHT[round][i]])
				.wrapping_add(K_RIGHT[round])
				.rotate_left(SHIFT_RIGHT[round][i])
				.wrapping_add(er);
			ar = er;
			er = dr;
			dr = cr.rotate_left(10);
			cr = br;
			br = t;
		}
	}

	let t = h[1].wrapping_add(cl).wrapping_add(dr);
	h[1] = h[2].wrapping_add(dl).wrapping_add(er);
	h[2] = h[3].wrapping_add(el).wrapping_add(ar);
	h[3] = h[4].wrapping_add(al).wrapping_add(br);
	h[4] = h[0].wrapping_add(bl).wrapping_add(cr);
	h[0] = t;
}

/// RIPEMD-160 core hasher state.
#[derive(Clone)]
pub struct Ripemd160Core {
	h: [u32; 5],
	blocks_len: u64,
}

pub type Ripemd160 = CoreWrapper<Ripemd160Core>;

impl HashMarker for Ripemd160Core {}

impl BlockSizeUser for Ripemd160Core {
	type BlockSize = U64;
}

impl BufferKindUser for Ripemd160Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Ripemd160Core {
	type OutputSize = U20;
}

impl UpdateCore for Ripemd160Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress(&mut self.h, block);
		}
	}
}

impl FixedOutputCore for Ripemd160Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_len = 8 * (buffer.get_pos() as u64 + 64 * self.blocks_len);
		let h = &mut self.h;
		buffer.len64_padding_le(bit_len, |block| compress(h, block));
		write_u32_le(h, out);
	}
}

impl Default for Ripemd160Core {
	#[inline]
	fn default() -> Self {
		Self {
			h: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Ripemd160Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Ripemd160Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Ripemd160")
	}
}

impl fmt::Debug for Ripemd160Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Ripemd160Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;

	use super::Ripemd160;

	proptest! {
		#[test]
		fn test_ripemd160_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Ripemd160::digest(&input), ripemd::Ripemd160::digest(&input));
		}
	}
}
