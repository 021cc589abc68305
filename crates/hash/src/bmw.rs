// Copyright 2025 Irreducible Inc.

//! Blue Midnight Wish 512 (round-2 tweaked version).

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U128, U64},
	HashMarker, Output, Reset,
};

use crate::words::{read_u64_le, write_u64_le};

const IV_BASE: u64 = 0x8081828384858687;
const IV_STEP: u64 = 0x0808080808080808;
const FINAL_BASE: u64 = 0xaaaaaaaaaaaaaaa0;
const ADD_ELEMENT_STEP: u64 = 0x0555555555555555;

/// Signed terms of the bijective transform `W_j = sum(+-(M_i ^ H_i))`.
#[rustfmt::skip]
const W_TERMS: [[(usize, bool); 5]; 16] = [
	[(5, false), (7, true), (10, false), (13, false), (14, false)],
	[(6, false), (8, true), (11, false), (14, false), (15, true)],
	[(0, false), (7, false), (9, false), (12, true), (15, false)],
	[(0, false), (1, true), (8, false), (10, true), (13, false)],
	[(1, false), (2, false), (9, false), (11, true), (14, true)],
	[(3, false), (2, true), (10, false), (12, true), (15, false)],
	[(4, false), (0, true), (3, true), (11, true), (13, false)],
	[(1, false), (4, true), (5, true), (12, true), (14, true)],
	[(2, false), (5, true), (6, true), (13, false), (15, true)],
	[(0, false), (3, true), (6, false), (7, true), (14, false)],
	[(8, false), (1, true), (4, true), (7, true), (15, false)],
	[(8, false), (0, true), (2, true), (5, true), (9, false)],
	[(1, false), (3, false), (6, true), (9, true), (10, false)],
	[(2, false), (4, false), (7, false), (10, false), (11, false)],
	[(3, false), (5, true), (8, false), (11, true), (12, true)],
	[(12, false), (4, true), (6, true), (9, true), (13, false)],
];

const EXPAND2_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

#[inline(always)]
fn s0(x: u64) -> u64 {
	(x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
	(x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
	(x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
	(x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
	(x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
	(x >> 2) ^ x
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
	let mut q = [0u64; 32];

	for j in 0..16 {
		let w = W_TERMS[j].iter().fold(0u64, |acc, &(i, negate)| {
			let t = m[i] ^ h[i];
			if negate {
				acc.wrapping_sub(t)
			} else {
				acc.wrapping_add(t)
			}
		});
		let s = match j % 5 {
			0 => s0(w),
			1 => s1(w),
			2 => s2(w),
			3 => s3(w),
			_ => s4(w),
		};
		q[j] = s.wrapping_add(h[(j + 1) % 16]);
	}

	let add_element = |j: usize| -> u64 {
		let rotl_m = |k: usize| m[k % 16].rotate_left((k % 16) as u32 + 1);
		rotl_m(j - 16)
			.wrapping_add(rotl_m(j - 13))
			.wrapping_sub(rotl_m(j - 6))
			.wrapping_add((j as u64).wrapping_mul(ADD_ELEMENT_STEP))
			^ h[(j - 9) % 16]
	};

	for j in 16..18 {
		let mut acc = 0u64;
		for k in 0..16 {
			let x = q[j - 16 + k];
			acc = acc.wrapping_add(match k % 4 {
				0 => s1(x),
				1 => s2(x),
				2 => s3(x),
				_ => s0(x),
			});
		}
		q[j] = acc.wrapping_add(add_element(j));
	}

	for j in 18..32 {
		let mut acc = 0u64;
		for k in 0..14 {
			let x = q[j - 16 + k];
			acc = acc.wrapping_add(if k % 2 == 0 {
				x
			} else {
				x.rotate_left(EXPAND2_ROTATIONS[k / 2])
			});
		}
		acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
		q[j] = acc.wrapping_add(add_element(j));
	}

	let xl = q[16..24].iter().fold(0, |acc, &x| acc ^ x);
	let xh = q[24..32].iter().fold(xl, |acc, &x| acc ^ x);

	let mut n = [0u64; 16];
	n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
	n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
	n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
	n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
	n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
	n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
	n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
	n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

	let xl_terms = [
		(xl << 8) ^ q[23],
		(xl >> 6) ^ q[16],
		(xl << 6) ^ q[17],
		(xl << 4) ^ q[18],
		(xl >> 3) ^ q[19],
		(xl >> 4) ^ q[20],
		(xl >> 7) ^ q[21],
		(xl >> 2) ^ q[22],
	];
	for i in 0..8 {
		let j = i + 8;
		n[j] = n[(i + 4) % 8]
			.rotate_left(9 + i as u32)
			.wrapping_add(xh ^ q[24 + i] ^ m[j])
			.wrapping_add(xl_terms[i] ^ q[j]);
	}
	n
}

/// BMW-512 core hasher state.
#[derive(Clone)]
pub struct Bmw512Core {
	h: [u64; 16],
	blocks_len: u64,
}

pub type Bmw512 = CoreWrapper<Bmw512Core>;

impl HashMarker for Bmw512Core {}

impl BlockSizeUser for Bmw512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Bmw512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Bmw512Core {
	type OutputSize = U64;
}

impl UpdateCore for Bmw512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			self.h = compress(&self.h, &read_u64_le(block));
		}
	}
}

impl FixedOutputCore for Bmw512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_len = 8 * (buffer.get_pos() as u64 + 128 * self.blocks_len);
		let h = &mut self.h;
		buffer.len64_padding_le(bit_len, |block| *h = compress(h, &read_u64_le(block)));

		// The chaining value is fed as a message through one more compression under a fixed key.
		let final_key: [u64; 16] = std::array::from_fn(|i| FINAL_BASE + i as u64);
		let h = compress(&final_key, h);
		write_u64_le(&h[8..], out);
	}
}

impl Default for Bmw512Core {
	#[inline]
	fn default() -> Self {
		Self {
			h: std::array::from_fn(|i| IV_BASE.wrapping_add(IV_STEP.wrapping_mul(i as u64))),
			blocks_len: 0,
		}
	}
}

impl Reset for Bmw512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Bmw512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Bmw512")
	}
}

impl fmt::Debug for Bmw512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Bmw512Core { ... }")
	}
}
