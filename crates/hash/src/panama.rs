// Copyright 2025 Irreducible Inc.

//! Panama used as a hash function: push the padded message, pull 32 blank iterations, output
//! the last eight words of the state.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::U32,
	HashMarker, Output, Reset,
};

use crate::words::{read_u32_le, write_u32_le};

const STAGES: usize = 32;
const STATE_WORDS: usize = 17;
const BLANK_PULLS: usize = 32;

type Stage = [u32; 8];

#[derive(Clone)]
struct PanamaState {
	a: [u32; STATE_WORDS],
	buffer: [Stage; STAGES],
	ptr: usize,
}

impl PanamaState {
	const fn new() -> Self {
		Self {
			a: [0; STATE_WORDS],
			buffer: [[0; 8]; STAGES],
			ptr: 0,
		}
	}

	/// One iteration: the buffer (LFSR) update fed with `lfsr_input`, then the state update
	/// gamma-pi-theta-sigma with `sigma_input` as the injected stage.
	fn step(&mut self, lfsr_input: &Stage, sigma_input: &Stage) {
		let p0 = self.ptr;
		let p24 = (p0 + STAGES - 8) % STAGES;
		let p31 = (p0 + STAGES - 1) % STAGES;
		for n0 in 0..8 {
			let n2 = (n0 + 2) % 8;
			let feedback = self.buffer[p31][n2];
			self.buffer[p24][n0] ^= feedback;
			self.buffer[p31][n2] ^= lfsr_input[n2];
		}

		let a = &self.a;
		let gamma: [u32; STATE_WORDS] = std::array::from_fn(|i| {
			a[i] ^ (a[(i + 1) % STATE_WORDS] | !a[(i + 2) % STATE_WORDS])
		});
		let pi: [u32; STATE_WORDS] = std::array::from_fn(|i| {
			gamma[(7 * i) % STATE_WORDS].rotate_left(((i * (i + 1) / 2) % 32) as u32)
		});
		let theta: [u32; STATE_WORDS] = std::array::from_fn(|i| {
			pi[i] ^ pi[(i + 1) % STATE_WORDS] ^ pi[(i + 4) % STATE_WORDS]
		});

		let p16 = (p0 + 16) % STAGES;
		let stage16 = self.buffer[p16];
		self.a = std::array::from_fn(|i| match i {
			0 => theta[0] ^ 1,
			1..=8 => theta[i] ^ sigma_input[i - 1],
			_ => theta[i] ^ stage16[i - 9],
		});
		self.ptr = p31;
	}

	fn push(&mut self, block: &Stage) {
		self.step(block, block);
	}

	fn pull(&mut self) {
		let mut lfsr_input = [0u32; 8];
		lfsr_input.copy_from_slice(&self.a[1..9]);
		let sigma_input = self.buffer[(self.ptr + 4) % STAGES];
		self.step(&lfsr_input, &sigma_input);
	}
}

/// Panama core hasher state.
#[derive(Clone)]
pub struct PanamaCore {
	state: PanamaState,
}

pub type Panama = CoreWrapper<PanamaCore>;

impl HashMarker for PanamaCore {}

impl BlockSizeUser for PanamaCore {
	type BlockSize = U32;
}

impl BufferKindUser for PanamaCore {
	type BufferKind = Eager;
}

impl OutputSizeUser for PanamaCore {
	type OutputSize = U32;
}

impl UpdateCore for PanamaCore {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			self.state.push(&read_u32_le(block));
		}
	}
}

impl FixedOutputCore for PanamaCore {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = 0x01;
		self.state.push(&read_u32_le(block));
		for _ in 0..BLANK_PULLS {
			self.state.pull();
		}
		write_u32_le(&self.state.a[9..], out);
	}
}

impl Default for PanamaCore {
	#[inline]
	fn default() -> Self {
		Self {
			state: PanamaState::new(),
		}
	}
}

impl Reset for PanamaCore {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for PanamaCore {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Panama")
	}
}

impl fmt::Debug for PanamaCore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PanamaCore { ... }")
	}
}
