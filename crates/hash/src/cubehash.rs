// Copyright 2025 Irreducible Inc.

//! CubeHash16/32 with 512-bit and 384-bit outputs.

use core::{fmt, marker::PhantomData};

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	generic_array::ArrayLength,
	typenum::{Unsigned, U32, U48, U64},
	HashMarker, Output, Reset,
};
use lazy_static::lazy_static;

use crate::words::{read_u32_le, write_u32_le};

const ROUNDS: usize = 16;
const BLOCK_BYTES: u32 = 32;
const INIT_ROUNDS: usize = 10 * ROUNDS;
const FINAL_ROUNDS: usize = 10 * ROUNDS;

type State = [u32; 32];

fn round(x: &mut State) {
	for i in 0..16 {
		x[i + 16] = x[i + 16].wrapping_add(x[i]);
	}
	for v in &mut x[..16] {
		*v = v.rotate_left(7);
	}
	for i in 0..8 {
		x.swap(i, i + 8);
	}
	for i in 0..16 {
		x[i] ^= x[i + 16];
	}
	for i in (16..32).filter(|i| i & 2 == 0) {
		x.swap(i, i ^ 2);
	}
	for i in 0..16 {
		x[i + 16] = x[i + 16].wrapping_add(x[i]);
	}
	for v in &mut x[..16] {
		*v = v.rotate_left(11);
	}
	for i in (0..16).filter(|i| i & 4 == 0) {
		x.swap(i, i ^ 4);
	}
	for i in 0..16 {
		x[i] ^= x[i + 16];
	}
	for i in (16..32).filter(|i| i & 1 == 0) {
		x.swap(i, i ^ 1);
	}
}

fn rounds(x: &mut State, n: usize) {
	for _ in 0..n {
		round(x);
	}
}

fn initial_state(output_bits: u32) -> State {
	let mut x = [0u32; 32];
	x[0] = output_bits / 8;
	x[1] = BLOCK_BYTES;
	x[2] = ROUNDS as u32;
	rounds(&mut x, INIT_ROUNDS);
	x
}

lazy_static! {
	static ref IV_512: State = initial_state(512);
	static ref IV_384: State = initial_state(384);
}

/// Selects the CubeHash output length.
pub trait CubeHashOutput: Clone + Send + Sync + 'static {
	type Size: ArrayLength<u8> + 'static;

	const NAME: &'static str;

	fn iv() -> &'static State;
}

#[derive(Clone, Debug)]
pub struct Output512;

#[derive(Clone, Debug)]
pub struct Output384;

impl CubeHashOutput for Output512 {
	type Size = U64;

	const NAME: &'static str = "CubeHash512";

	fn iv() -> &'static State {
		&IV_512
	}
}

impl CubeHashOutput for Output384 {
	type Size = U48;

	const NAME: &'static str = "CubeHash384";

	fn iv() -> &'static State {
		&IV_384
	}
}

#[derive(Clone)]
pub struct CubeHashCore<O: CubeHashOutput> {
	state: State,
	_output: PhantomData<O>,
}

pub type CubeHash512 = CoreWrapper<CubeHashCore<Output512>>;
pub type CubeHash384 = CoreWrapper<CubeHashCore<Output384>>;

impl<O: CubeHashOutput> HashMarker for CubeHashCore<O> {}

impl<O: CubeHashOutput> BlockSizeUser for CubeHashCore<O> {
	type BlockSize = U32;
}

impl<O: CubeHashOutput> BufferKindUser for CubeHashCore<O> {
	type BufferKind = Eager;
}

impl<O: CubeHashOutput> OutputSizeUser for CubeHashCore<O> {
	type OutputSize = O::Size;
}

impl<O: CubeHashOutput> UpdateCore for CubeHashCore<O> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			let m: [u32; 8] = read_u32_le(block);
			for (x, w) in self.state.iter_mut().zip(m) {
				*x ^= w;
			}
			rounds(&mut self.state, ROUNDS);
		}
	}
}

impl<O: CubeHashOutput> FixedOutputCore for CubeHashCore<O> {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = 0x80;
		self.update_blocks(core::slice::from_ref(block));

		self.state[31] ^= 1;
		rounds(&mut self.state, FINAL_ROUNDS);
		write_u32_le(&self.state[..O::Size::USIZE / 4], out);
	}
}

impl<O: CubeHashOutput> Default for CubeHashCore<O> {
	#[inline]
	fn default() -> Self {
		Self {
			state: *O::iv(),
			_output: PhantomData,
		}
	}
}

impl<O: CubeHashOutput> Reset for CubeHashCore<O> {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<O: CubeHashOutput> AlgorithmName for CubeHashCore<O> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(O::NAME)
	}
}

impl<O: CubeHashOutput> fmt::Debug for CubeHashCore<O> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "CubeHashCore<{}> {{ ... }}", O::NAME)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_iv_512_head() {
		assert_eq!(IV_512[..4], [0x2aea2a61, 0x50f494d4, 0x2d538b8b, 0x4167d83e]);
	}
}
