// Copyright 2025 Irreducible Inc.

//! SIMD-512.
//!
//! The message block is expanded with a number-theoretic transform over `F_257` followed by two
//! inner codes (multiplication by 185 and 233 modulo `2^16`). The 1024-bit state, four 8-word
//! registers, runs four rounds of eight Feistel-like steps keyed by the expanded message and a
//! four-step feed-forward keyed by the previous chaining value.

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
use lazy_static::lazy_static;

use crate::words::{read_u32_le, write_u32_le};

const BLOCK_BYTES: usize = 128;
const NTT_SIZE: usize = 256;
const PRIME: i32 = 257;
/// Primitive 256th root of unity modulo 257.
const ALPHA: i32 = 41;
const INNER_CODES: [i32; 2] = [185, 233];
const STEPS: usize = 32;

const ROUND_ROTATIONS: [[u32; 4]; 4] =
	[[3, 23, 17, 27], [28, 19, 22, 7], [29, 9, 15, 5], [4, 13, 10, 25]];
const FEED_FORWARD_ROTATIONS: [u32; 4] = [4, 13, 10, 25];
const PERMUTATION_MASKS: [usize; 7] = [1, 6, 2, 3, 5, 7, 4];

/// Group of 16 transform outputs feeding each step.
#[rustfmt::skip]
const MESSAGE_ORDER: [usize; STEPS] = [
	4, 6, 0, 2, 7, 5, 3, 1,
	15, 11, 12, 8, 9, 13, 10, 14,
	17, 18, 23, 20, 22, 21, 16, 19,
	30, 24, 25, 31, 27, 29, 28, 26,
];

#[rustfmt::skip]
const IV: [u32; 32] = [
	0x0ba16b95, 0x72f999ad, 0x9fecc2ae, 0xba3264fc, 0x5e894929, 0x8e9f30e5, 0x2f1daa37, 0xf0f2c558,
	0xac506643, 0xa90635a5, 0xe25b878b, 0xaab7878f, 0x88817f7a, 0x0a02892b, 0x559a7550, 0x598f657e,
	0x7eef60a1, 0x6b70e3e8, 0x9c1714d1, 0xb958e2a8, 0xab02675e, 0xed1c014f, 0xcd8d65bb, 0xfdb7a257,
	0x09254899, 0xd699c7bc, 0x9019b6dc, 0x2b9022e4, 0x8fa14956, 0x21bf9bd3, 0xb94d0943, 0x6ffddc22,
];

lazy_static! {
	/// `POWERS[k] = ALPHA^k mod 257`
	static ref POWERS: [i32; NTT_SIZE] = {
		let mut powers = [1i32; NTT_SIZE];
		for k in 1..NTT_SIZE {
			powers[k] = powers[k - 1] * ALPHA % PRIME;
		}
		powers
	};
}

/// Representative of `x mod 257` in `-128..=128`.
#[inline(always)]
fn centered(x: i32) -> i32 {
	let x = x.rem_euclid(PRIME);
	if x > 128 {
		x - PRIME
	} else {
		x
	}
}

/// Low 16 bits of the inner code applied to a centered transform output.
#[inline(always)]
fn inner(y: i32, code: i32) -> u32 {
	(y * code) as u16 as u32
}

/// Expands a block into `STEPS` groups of eight words.
///
/// The message polynomial always carries `X^255`; the final block adds `X^253` as well.
fn expand(block: &[u8], last: bool) -> [[u32; 8]; STEPS] {
	let powers = &*POWERS;
	let y: [i32; NTT_SIZE] = std::array::from_fn(|i| {
		let mut acc = powers[(i * 255) % NTT_SIZE];
		if last {
			acc += powers[(i * 253) % NTT_SIZE];
		}
		for (j, &x) in block.iter().enumerate() {
			acc = (acc + x as i32 * powers[(i * j) % NTT_SIZE]) % PRIME;
		}
		centered(acc)
	});

	std::array::from_fn(|step| {
		let group = MESSAGE_ORDER[step];
		std::array::from_fn(|j| {
			// Rounds 0 and 1 pair neighbours, rounds 2 and 3 pair outputs 128 apart.
			let (lo, hi, code) = match step / 8 {
				0 | 1 => (16 * group + 2 * j, 16 * group + 2 * j + 1, INNER_CODES[0]),
				2 => {
					let base = 16 * (group - 16) + 2 * j;
					(base, base + 128, INNER_CODES[1])
				}
				_ => {
					let base = 16 * (group - 24) + 2 * j + 1;
					(base, base + 128, INNER_CODES[1])
				}
			};
			inner(y[lo], code) | (inner(y[hi], code) << 16)
		})
	})
}

#[inline(always)]
fn if_fn(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (!x & z)
}

#[inline(always)]
fn maj_fn(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (x & z) | (y & z)
}

/// Registers `A, B, C, D` as `s[0..8], s[8..16], s[16..24], s[24..32]`.
fn step(
	s: &mut [u32; 32],
	w: &[u32],
	phi: fn(u32, u32, u32) -> u32,
	r: u32,
	rot_s: u32,
	mask: usize,
) {
	let a_rot: [u32; 8] = std::array::from_fn(|j| s[j].rotate_left(r));
	let mut next = [0u32; 32];
	for j in 0..8 {
		let (a, b, c, d) = (s[j], s[8 + j], s[16 + j], s[24 + j]);
		let new_d = d
			.wrapping_add(w[j])
			.wrapping_add(phi(a, b, c))
			.rotate_left(rot_s)
			.wrapping_add(a_rot[j ^ mask]);
		next[j] = new_d;
		next[8 + j] = a_rot[j];
		next[16 + j] = b;
		next[24 + j] = c;
	}
	*s = next;
}

fn compress(h: &mut [u32; 32], block: &[u8], last: bool) {
	let w = expand(block, last);
	let m: [u32; 32] = read_u32_le(block);
	let mut s: [u32; 32] = std::array::from_fn(|i| h[i] ^ m[i]);

	for (t, wt) in w.iter().enumerate() {
		let phi = if t % 8 < 4 { if_fn } else { maj_fn };
		let rotations = ROUND_ROTATIONS[t / 8];
		let r = rotations[t % 4];
		let rot_s = rotations[(t + 1) % 4];
		step(&mut s, wt, phi, r, rot_s, PERMUTATION_MASKS[t % 7]);
	}

	for (t, hw) in h.chunks_exact(8).enumerate() {
		let r = FEED_FORWARD_ROTATIONS[t];
		let rot_s = FEED_FORWARD_ROTATIONS[(t + 1) % 4];
		step(&mut s, hw, if_fn, r, rot_s, PERMUTATION_MASKS[(STEPS + t) % 7]);
	}
	*h = s;
}

/// SIMD-512 core hasher state.
#[derive(Clone)]
pub struct Simd512Core {
	h: [u32; 32],
	blocks_len: u64,
}

pub type Simd512 = CoreWrapper<Simd512Core>;

impl HashMarker for Simd512Core {}

impl BlockSizeUser for Simd512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Simd512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Simd512Core {
	type OutputSize = U64;
}

impl UpdateCore for Simd512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress(&mut self.h, block, false);
		}
	}
}

impl FixedOutputCore for Simd512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let bit_len = 8 * (pos as u64 + BLOCK_BYTES as u64 * self.blocks_len);
		if pos != 0 {
			compress(&mut self.h, buffer.pad_with_zeros(), false);
		}
		let mut length_block = [0u8; BLOCK_BYTES];
		length_block[..8].copy_from_slice(&bit_len.to_le_bytes());
		compress(&mut self.h, &length_block, true);
		write_u32_le(&self.h[..16], out);
	}
}

impl Default for Simd512Core {
	#[inline]
	fn default() -> Self {
		Self {
			h: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Simd512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Simd512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Simd512")
	}
}

impl fmt::Debug for Simd512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Simd512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_alpha_has_order_256() {
		assert_eq!(POWERS[128], PRIME - 1);
		assert_eq!(POWERS[255] * ALPHA % PRIME, 1);
	}

	#[test]
	fn test_centered_range() {
		assert_eq!(centered(128), 128);
		assert_eq!(centered(129), -128);
		assert_eq!(centered(-1), -1);
		assert_eq!(centered(257 * 3 + 5), 5);
	}

	#[test]
	fn test_inner_code_wraps_to_16_bits() {
		assert_eq!(inner(128, 233), 0x7480);
		assert_eq!(inner(-1, 185), 0xff47);
		assert_eq!(inner(-128, 233), 0x8b80);
	}

	#[test]
	fn test_message_order_is_permutation() {
		let mut seen = [false; STEPS];
		for (step, &group) in MESSAGE_ORDER.iter().enumerate() {
			assert_eq!(group / 8, step / 8);
			seen[group] = true;
		}
		assert!(seen.iter().all(|&s| s));
	}

	#[test]
	fn test_last_block_expansion_differs() {
		let block = [0u8; BLOCK_BYTES];
		assert_ne!(expand(&block, false), expand(&block, true));
	}
}
