// Copyright 2025 Irreducible Inc.

//! Shabal-512.

use core::fmt;

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

use crate::words::{read_u32_le, write_u32_le};

const OUTPUT_BITS: u32 = 512;
const FINAL_ROUNDS: usize = 3;

lazy_static! {
	/// State after the two prefix blocks `(o, o + 1, ..., o + 31)` with `o` the output size.
	static ref IV: ShabalState = {
		let mut state = ShabalState::zero();
		for half in 0..2 {
			let prefix: [u32; 16] = std::array::from_fn(|i| OUTPUT_BITS + 16 * half + i as u32);
			state.process_block(&prefix);
		}
		state
	};
}

#[derive(Clone, Copy)]
struct ShabalState {
	a: [u32; 12],
	b: [u32; 16],
	c: [u32; 16],
	w: u64,
}

impl ShabalState {
	const fn zero() -> Self {
		Self {
			a: [0; 12],
			b: [0; 16],
			c: [0; 16],
			w: u64::MAX,
		}
	}

	#[inline(always)]
	fn xor_counter(&mut self) {
		self.a[0] ^= self.w as u32;
		self.a[1] ^= (self.w >> 32) as u32;
	}

	fn permute(&mut self, m: &[u32; 16]) {
		let Self { a, b, c, .. } = self;
		for x in b.iter_mut() {
			*x = x.rotate_left(17);
		}
		for i in 0..3 {
			for j in 0..16 {
				let k = (j + 16 * i) % 12;
				let prev = a[(k + 11) % 12];
				let t = a[k] ^ prev.rotate_left(15).wrapping_mul(5) ^ c[(24 - j) % 16];
				a[k] = t.wrapping_mul(3)
					^ b[(j + 13) % 16]
					^ (b[(j + 9) % 16] & !b[(j + 6) % 16])
					^ m[j];
				b[j] = !(b[j].rotate_left(1) ^ a[k]);
			}
		}
		for j in 0..36 {
			a[j % 12] = a[j % 12].wrapping_add(c[(j + 3) % 16]);
		}
	}

	fn add_message(&mut self, m: &[u32; 16]) {
		for (x, &y) in self.b.iter_mut().zip(m) {
			*x = x.wrapping_add(y);
		}
	}

	fn process_block(&mut self, m: &[u32; 16]) {
		self.add_message(m);
		self.xor_counter();
		self.permute(m);
		for (x, &y) in self.c.iter_mut().zip(m) {
			*x = x.wrapping_sub(y);
		}
		std::mem::swap(&mut self.b, &mut self.c);
		self.w = self.w.wrapping_add(1);
	}

	fn process_final(&mut self, m: &[u32; 16]) {
		self.add_message(m);
		self.xor_counter();
		self.permute(m);
		for _ in 0..FINAL_ROUNDS {
			std::mem::swap(&mut self.b, &mut self.c);
			self.xor_counter();
			self.permute(m);
		}
	}
}

/// Shabal-512 core hasher state.
#[derive(Clone)]
pub struct Shabal512Core {
	state: ShabalState,
}

pub type Shabal512 = CoreWrapper<Shabal512Core>;

impl HashMarker for Shabal512Core {}

impl BlockSizeUser for Shabal512Core {
	type BlockSize = U64;
}

impl BufferKindUser for Shabal512Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Shabal512Core {
	type OutputSize = U64;
}

impl UpdateCore for Shabal512Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.state.process_block(&read_u32_le(block));
		}
	}
}

impl FixedOutputCore for Shabal512Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = 0x80;
		self.state.process_final(&read_u32_le(block));
		write_u32_le(&self.state.b, out);
	}
}

impl Default for Shabal512Core {
	#[inline]
	fn default() -> Self {
		Self { state: *IV }
	}
}

impl Reset for Shabal512Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Shabal512Core {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Shabal512")
	}
}

impl fmt::Debug for Shabal512Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Shabal512Core { ... }")
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_iv_head() {
		assert_eq!(IV.a[..2], [0x20728dfd, 0x46c0bd53]);
		assert_eq!(IV.b[0], 0xc1099cb7);
		assert_eq!(IV.c[0], 0xd9bf68d1);
	}

	proptest! {
		#[test]
		fn test_shabal_vs_reference(
			input in prop::collection::vec(any::<u8>(), 0..=1024),
		) {
			assert_eq!(Shabal512::digest(&input), shabal::Shabal512::digest(&input));
		}
	}
}
