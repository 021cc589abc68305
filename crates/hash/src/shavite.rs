// Copyright 2025 Irreducible Inc.

//! SHAvite-3-512 (round-2 tweaked version).
//!
//! The compression function is a 14-round Feistel construction over four 128-bit lanes whose
//! round function is four keyed AES rounds. Round keys come from the message block through an
//! alternating nonlinear (AES based) and linear expansion, with the bit counter injected at four
//! fixed positions.

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

use crate::{
	aes::aes_round_nokey,
	words::{read_u32_le, write_u32_le},
};

type Lane = [u32; 4];
type RoundKeys = [u32; 32];

const BLOCK_BYTES: usize = 128;
const OUTPUT_BITS: u16 = 512;
const TRAILER_POS: usize = 110;

const IV: [u32; 16] = [
	0x72fccdd8, 0x79ca4727, 0x128a077b, 0x40d55aec, 0xd1901a06, 0x430ae307, 0xb29f5cd1, 0xdf07fbfc,
	0x8e45d73d, 0x681ab538, 0xbde86578, 0xdd577e47, 0xe275eade, 0x502d9fcd, 0xb9357178, 0x022a4b9a,
];

/// Nonlinear expansion pass, key group, and counter word order of each counter injection. The
/// last injected word is complemented.
const COUNTER_INJECTIONS: [(usize, usize, [usize; 4]); 4] = [
	(0, 0, [0, 1, 2, 3]),
	(1, 1, [3, 2, 1, 0]),
	(2, 7, [2, 3, 0, 1]),
	(3, 6, [1, 0, 3, 2]),
];

#[inline(always)]
fn xor_lane(x: Lane, k: &[u32]) -> Lane {
	[x[0] ^ k[0], x[1] ^ k[1], x[2] ^ k[2], x[3] ^ k[3]]
}

/// Round function: four AES rounds keyed by `rk[base..base + 16]`.
fn round_function(x: Lane, rk: &RoundKeys, base: usize) -> Lane {
	let mut x = aes_round_nokey(xor_lane(x, &rk[base..]));
	for k in [4, 8, 12] {
		x = aes_round_nokey(xor_lane(x, &rk[base + k..]));
	}
	x
}

fn nonlinear_expansion(rk: &mut RoundKeys, counter: &[u32; 4], pass: Option<usize>) {
	for group in 0..8 {
		let i = 4 * group;
		let t = aes_round_nokey([rk[i + 1], rk[i + 2], rk[i + 3], rk[i]]);
		for j in 0..4 {
			rk[i + j] = t[j] ^ rk[(i + 28 + j) % 32];
		}
		for &(at_pass, at_group, order) in &COUNTER_INJECTIONS {
			if pass == Some(at_pass) && group == at_group {
				for (j, &c) in order.iter().enumerate() {
					rk[i + j] ^= if j == 3 { !counter[c] } else { counter[c] };
				}
			}
		}
	}
}

fn linear_expansion(rk: &mut RoundKeys) {
	for i in 0..32 {
		rk[i] ^= rk[(i + 25) % 32];
	}
}

/// Two parallel Feistel steps: `p[dst] ^= F(p[src])` for each pair, with the first using the
/// lower and the second the upper half of the round keys.
fn feistel(p: &mut [u32; 16], rk: &RoundKeys, steps: [(usize, usize); 2]) {
	for (half, (dst, src)) in steps.into_iter().enumerate() {
		let mut lane = [0u32; 4];
		lane.copy_from_slice(&p[src..src + 4]);
		let f = round_function(lane, rk, 16 * half);
		for j in 0..4 {
			p[dst + j] ^= f[j];
		}
	}
}

fn compress(h: &mut [u32; 16], block: &[u8], counter: u128) {
	let counter: [u32; 4] = std::array::from_fn(|i| (counter >> (32 * i)) as u32);
	let mut rk: RoundKeys = read_u32_le(block);
	let mut p = *h;

	feistel(&mut p, &rk, [(0, 4), (8, 12)]);
	for pass in 0..3 {
		nonlinear_expansion(&mut rk, &counter, Some(pass));
		feistel(&mut p, &rk, [(12, 0), (4, 8)]);
		linear_expansion(&mut rk);
		feistel(&mut p, &rk, [(8, 12), (0, 4)]);
		nonlinear_expansion(&mut rk, &counter, None);
		feistel(&mut p, &rk, [(4, 8), (12, 0)]);
		linear_expansion(&mut rk);
		feistel(&mut p, &rk, [(0, 4), (8, 12)]);
	}
	nonlinear_expansion(&mut rk, &counter, Some(3));
	feistel(&mut p, &rk, [(12, 0), (4, 8)]);

	for i in 0..16 {
		h[i] ^= p[(i + 8) % 16];
	}
}

/// SHAvite-3-512 core hasher state.
#[derive(Clone)]
pub struct Shavite512Core {
	h: [u32; 16],
	blocks_len: u64,
}

pub type Shavite512 = CoreWrapper<Shavite512Core>;

impl HashMarker for Shavite512Core {}

impl BlockSizeUser for Shavite512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Shavite512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Shavite512Core {
	type OutputSize = U64;
}

impl UpdateCore for Shavite512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.blocks_len += 1;
			compress(&mut self.h, block, 8 * BLOCK_BYTES as u128 * self.blocks_len as u128);
		}
	}
}

impl FixedOutputCore for Shavite512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let bit_len = 8 * (pos as u128 + BLOCK_BYTES as u128 * self.blocks_len as u128);
		let mut trailer = [0u8; BLOCK_BYTES - TRAILER_POS];
		trailer[..16].copy_from_slice(&bit_len.to_le_bytes());
		trailer[16..].copy_from_slice(&OUTPUT_BITS.to_le_bytes());

		let block = buffer.pad_with_zeros();
		block[pos] = 0x80;
		if pos < TRAILER_POS {
			block[TRAILER_POS..].copy_from_slice(&trailer);
			let counter = if pos == 0 { 0 } else { bit_len };
			compress(&mut self.h, block, counter);
		} else {
			compress(&mut self.h, block, bit_len);
			let mut last = [0u8; BLOCK_BYTES];
			last[TRAILER_POS..].copy_from_slice(&trailer);
			compress(&mut self.h, &last, 0);
		}
		write_u32_le(&self.h, out);
	}
}

impl Default for Shavite512Core {
	#[inline]
	fn default() -> Self {
		Self {
			h: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Shavite512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Shavite512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Shavite512")
	}
}

impl fmt::Debug for Shavite512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Shavite512Core { ... }")
	}
}
