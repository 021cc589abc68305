// Copyright 2025 Irreducible Inc.

//! ECHO-512.
//!
//! The 2048-bit state is a 4x4 matrix of 128-bit words, each word being an AES state. The first
//! eight words carry the chaining value and the last eight the message block.

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

use crate::aes::{aes_round, aes_round_nokey, xtime_packed};

type Word = [u32; 4];

const ROUNDS: usize = 10;
const OUTPUT_BITS: u16 = 512;
const BLOCK_BYTES: usize = 128;
/// Offset of the trailer holding the output size and the message bit length.
const TRAILER_POS: usize = 110;

#[inline(always)]
fn counter_key(counter: u128) -> Word {
	[counter as u32, (counter >> 32) as u32, (counter >> 64) as u32, (counter >> 96) as u32]
}

fn mix_column(w: &mut [Word]) {
	for lane in 0..4 {
		let [a0, a1, a2, a3] = [w[0][lane], w[1][lane], w[2][lane], w[3][lane]];
		let [d0, d1, d2, d3] = [a0, a1, a2, a3].map(xtime_packed);
		w[0][lane] = d0 ^ d1 ^ a1 ^ a2 ^ a3;
		w[1][lane] = a0 ^ d1 ^ d2 ^ a2 ^ a3;
		w[2][lane] = a0 ^ a1 ^ d2 ^ d3 ^ a3;
		w[3][lane] = d0 ^ a0 ^ a1 ^ a2 ^ d3;
	}
}

/// Compresses one block; `counter` is the number of message bits hashed up to the end of the
/// block, or zero when the block carries no message bits.
fn compress(v: &mut [Word; 8], block: &[u8], mut counter: u128) {
	let m: [Word; 8] = std::array::from_fn(|i| crate::words::read_u32_le(&block[16 * i..]));
	let mut w = [[0u32; 4]; 16];
	w[..8].copy_from_slice(v);
	w[8..].copy_from_slice(&m);

	for _ in 0..ROUNDS {
		// BIG.SubWords
		for word in w.iter_mut() {
			*word = aes_round_nokey(aes_round(*word, counter_key(counter)));
			counter = counter.wrapping_add(1);
		}
		// BIG.ShiftRows
		let shifted: [Word; 16] = std::array::from_fn(|i| {
			let (col, row) = (i / 4, i % 4);
			w[4 * ((col + row) % 4) + row]
		});
		w = shifted;
		// BIG.MixColumns
		for column in w.chunks_exact_mut(4) {
			mix_column(column);
		}
	}

	for u in 0..8 {
		for lane in 0..4 {
			v[u][lane] ^= m[u][lane] ^ w[u][lane] ^ w[u + 8][lane];
		}
	}
}

/// ECHO-512 core hasher state.
#[derive(Clone)]
pub struct Echo512Core {
	v: [Word; 8],
	blocks_len: u64,
}

pub type Echo512 = CoreWrapper<Echo512Core>;

impl HashMarker for Echo512Core {}

impl BlockSizeUser for Echo512Core {
	type BlockSize = U128;
}

impl BufferKindUser for Echo512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Echo512Core {
	type OutputSize = U64;
}

impl UpdateCore for Echo512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.blocks_len += 1;
			compress(&mut self.v, block, 8 * BLOCK_BYTES as u128 * self.blocks_len as u128);
		}
	}
}

impl FixedOutputCore for Echo512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let bit_len = 8 * (pos as u128 + BLOCK_BYTES as u128 * self.blocks_len as u128);
		let mut trailer = [0u8; BLOCK_BYTES - TRAILER_POS];
		trailer[..2].copy_from_slice(&OUTPUT_BITS.to_le_bytes());
		trailer[2..].copy_from_slice(&bit_len.to_le_bytes());

		let block = buffer.pad_with_zeros();
		block[pos] = 0x80;
		if pos < TRAILER_POS {
			block[TRAILER_POS..].copy_from_slice(&trailer);
			let counter = if pos == 0 { 0 } else { bit_len };
			compress(&mut self.v, block, counter);
		} else {
			compress(&mut self.v, block, bit_len);
			let mut last = [0u8; BLOCK_BYTES];
			last[TRAILER_POS..].copy_from_slice(&trailer);
			compress(&mut self.v, &last, 0);
		}

		for (chunk, word) in out.chunks_exact_mut(16).zip(&self.v) {
			crate::words::write_u32_le(word, chunk);
		}
	}
}

impl Default for Echo512Core {
	#[inline]
	fn default() -> Self {
		Self {
			v: [[OUTPUT_BITS as u32, 0, 0, 0]; 8],
			blocks_len: 0,
		}
	}
}

impl Reset for Echo512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Echo512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Echo512")
	}
}

impl fmt::Debug for Echo512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Echo512Core { ... }")
	}
}
