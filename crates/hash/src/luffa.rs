// Copyright 2025 Irreducible Inc.

//! Luffa-512: a sponge-like construction over five 256-bit sub-states.
//!
//! Each 32-byte block goes through the message injection MI followed by the five independent
//! 8-step permutations Q_j. After the padded block, two blank rounds produce the two halves of
//! the digest.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U32, U64},
	HashMarker, Output, Reset,
};

use crate::words::{read_u32_be, write_u32_be};

const WIDTH: usize = 5;
const STEPS: usize = 8;

type SubState = [u32; 8];

const IV: [SubState; WIDTH] = [
	[0x6d251e69, 0x44b051e0, 0x4eaa6fb4, 0xdbf78465, 0x6e292011, 0x90152df4, 0xee058139, 0xdef610bb],
	[0xc3b44b95, 0xd9d2f256, 0x70eee9a0, 0xde099fa3, 0x5d9b0557, 0x8fc944b3, 0xcf1ccf0e, 0x746cd581],
	[0xf7efc89d, 0x5dba5781, 0x04016ce5, 0xad659c05, 0x0306194f, 0x666d1836, 0x24aa230a, 0x8b264ae7],
	[0x858075d5, 0x36d79cce, 0xe571f7d7, 0x204b1f67, 0x35870c6a, 0x57e9e923, 0x14bcb808, 0x7cde72ce],
	[0x6c68e9be, 0x5ec41e22, 0xc825b7c7, 0xaffb4363, 0xf5df3999, 0x0fc688f1, 0xb07224cc, 0x03e86cea],
];

/// Step constants `(c0, c4)` of each permutation Q_j, added to words 0 and 4.
#[rustfmt::skip]
const STEP_CONSTANTS: [[[u32; STEPS]; 2]; WIDTH] = [
	[
		[0x303994a6, 0xc0e65299, 0x6cc33a12, 0xdc56983e, 0x1e00108f, 0x7800423d, 0x8f5b7882, 0x96e1db12],
		[0xe0337818, 0x441ba90d, 0x7f34d442, 0x9389217f, 0xe5a8bce6, 0x5274baf4, 0x26889ba7, 0x9a226e9d],
	],
	[
		[0xb6de10ed, 0x70f47aae, 0x0707a3d4, 0x1c1e8f51, 0x707a3d45, 0xaeb28562, 0xbaca1589, 0x40a46f3e],
		[0x01685f3d, 0x05a17cf4, 0xbd09caca, 0xf4272b28, 0x144ae5cc, 0xfaa7ae2b, 0x2e48f1c1, 0xb923c704],
	],
	[
		[0xfc20d9d2, 0x34552e25, 0x7ad8818f, 0x8438764a, 0xbb6de032, 0xedb780c8, 0xd9847356, 0xa2c78434],
		[0xe25e72c1, 0xe623bb72, 0x5c58a4a4, 0x1e38e2e7, 0x78e38b9d, 0x27586719, 0x36eda57f, 0x703aace7],
	],
	[
		[0xb213afa5, 0xc84ebe95, 0x4e608a22, 0x56d858fe, 0x343b138f, 0xd0ec4e3d, 0x2ceb4882, 0xb3ad2208],
		[0xe028c9bf, 0x44756f91, 0x7e8fce32, 0x956548be, 0xfe191be2, 0x3cb226e5, 0x5944a28e, 0xa1c4c355],
	],
	[
		[0xf0d2e9e3, 0xac11d7fa, 0x1bcb66f2, 0x6f2d9bc9, 0x78602649, 0x8edae952, 0x3b6ba548, 0xedae9520],
		[0x5090d577, 0x2d1925ab, 0xb46496ac, 0xd1925ab0, 0x29131ab6, 0x0fc053c3, 0x3f014f0c, 0xfc053c31],
	],
];

/// Multiplication by `x` in the ring of 8-word vectors used by the message injection.
#[inline(always)]
fn mul2(s: &SubState) -> SubState {
	let t = s[7];
	[t, s[0] ^ t, s[1], s[2] ^ t, s[3] ^ t, s[4], s[5], s[6]]
}

#[inline(always)]
fn xor(a: &SubState, b: &SubState) -> SubState {
	std::array::from_fn(|i| a[i] ^ b[i])
}

fn message_injection(v: &mut [SubState; WIDTH], m: &SubState) {
	let a = mul2(&v.iter().fold([0; 8], |acc, x| xor(&acc, x)));
	for x in v.iter_mut() {
		*x = xor(x, &a);
	}

	let b = xor(&mul2(&v[0]), &v[1]);
	v[1] = xor(&mul2(&v[1]), &v[2]);
	v[2] = xor(&mul2(&v[2]), &v[3]);
	v[3] = xor(&mul2(&v[3]), &v[4]);
	v[4] = xor(&mul2(&v[4]), &v[0]);
	v[0] = xor(&mul2(&b), &v[4]);
	v[4] = xor(&mul2(&v[4]), &v[3]);
	v[3] = xor(&mul2(&v[3]), &v[2]);
	v[2] = xor(&mul2(&v[2]), &v[1]);
	v[1] = xor(&mul2(&v[1]), &b);

	let mut m = *m;
	for x in v.iter_mut() {
		*x = xor(x, &m);
		m = mul2(&m);
	}
}

#[inline(always)]
fn sub_crumb(a0: &mut u32, a1: &mut u32, a2: &mut u32, a3: &mut u32) {
	let mut t = *a0;
	*a0 |= *a1;
	*a2 ^= *a3;
	*a1 = !*a1;
	*a0 ^= *a3;
	*a3 &= t;
	*a1 ^= *a3;
	*a3 ^= *a2;
	*a2 &= *a0;
	*a0 = !*a0;
	*a2 ^= *a1;
	*a1 |= *a3;
	t ^= *a1;
	*a3 ^= *a2;
	*a2 &= *a1;
	*a1 ^= *a0;
	*a0 = t;
}

#[inline(always)]
fn mix_word(u: &mut u32, v: &mut u32) {
	*v ^= *u;
	*u = u.rotate_left(2) ^ *v;
	*v = v.rotate_left(14) ^ *u;
	*u = u.rotate_left(10) ^ *v;
	*v = v.rotate_left(1);
}

fn permute(x: &mut SubState, j: usize) {
	// Tweak: the upper half of Q_j's input is rotated by j bits.
	for w in &mut x[4..] {
		*w = w.rotate_left(j as u32);
	}
	let [c0, c4] = &STEP_CONSTANTS[j];
	for step in 0..STEPS {
		let [x0, x1, x2, x3, x4, x5, x6, x7] = x;
		sub_crumb(x0, x1, x2, x3);
		sub_crumb(x5, x6, x7, x4);
		mix_word(x0, x4);
		mix_word(x1, x5);
		mix_word(x2, x6);
		mix_word(x3, x7);
		*x0 ^= c0[step];
		*x4 ^= c4[step];
	}
}

fn round(v: &mut [SubState; WIDTH], m: &SubState) {
	message_injection(v, m);
	for (j, x) in v.iter_mut().enumerate() {
		permute(x, j);
	}
}

/// Luffa-512 core hasher state.
#[derive(Clone)]
pub struct Luffa512Core {
	v: [SubState; WIDTH],
}

pub type Luffa512 = CoreWrapper<Luffa512Core>;

impl Luffa512Core {
	fn folded(&self) -> SubState {
		self.v.iter().fold([0; 8], |acc, x| xor(&acc, x))
	}
}

impl HashMarker for Luffa512Core {}

impl BlockSizeUser for Luffa512Core {
	type BlockSize = U32;
}

impl BufferKindUser for Luffa512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Luffa512Core {
	type OutputSize = U64;
}

impl UpdateCore for Luffa512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			round(&mut self.v, &read_u32_be(block));
		}
	}
}

impl FixedOutputCore for Luffa512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = 0x80;
		round(&mut self.v, &read_u32_be(block));

		let blank = [0u32; 8];
		for half in out.chunks_exact_mut(32) {
			round(&mut self.v, &blank);
			write_u32_be(&self.folded(), half);
		}
	}
}

impl Default for Luffa512Core {
	#[inline]
	fn default() -> Self {
		Self { v: IV }
	}
}

impl Reset for Luffa512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Luffa512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Luffa512")
	}
}

impl fmt::Debug for Luffa512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Luffa512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mul2_feedback_taps() {
		let top = [0, 0, 0, 0, 0, 0, 0, 1];
		assert_eq!(mul2(&top), [1, 1, 0, 1, 1, 0, 0, 0]);
	}

	#[test]
	fn test_permutations_are_distinct() {
		let mut a = [0u32; 8];
		let mut b = [0u32; 8];
		permute(&mut a, 0);
		permute(&mut b, 1);
		assert_ne!(a, b);
	}
}
