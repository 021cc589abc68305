// Copyright (c) 2020-2025 The RustCrypto Project Developers
// Copyright 2025 Irreducible Inc.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		CtVariableCoreWrapper, OutputSizeUser, TruncSide, UpdateCore, VariableOutputCore,
	},
	typenum::{Unsigned, U128, U64},
	HashMarker, InvalidOutputSize, Output,
};

use super::permutation::{self, State, COLS};
use crate::words::{read_u64_be, write_u64_be};

const BLOCK_BYTES: usize = 8 * COLS;

/// Lowest-level core hasher state of the wide Grøstl variant.
#[derive(Clone)]
pub struct GroestlLongVarCore {
	state: State,
	blocks_len: u64,
}

/// Core hasher state of the wide Grøstl variant generic over output size.
pub type GroestlLongCore<OutSize> = CtVariableCoreWrapper<GroestlLongVarCore, OutSize>;
/// Grøstl-512 hasher state.
pub type Groestl512 = CoreWrapper<GroestlLongCore<U64>>;

impl HashMarker for GroestlLongVarCore {}

impl BlockSizeUser for GroestlLongVarCore {
	type BlockSize = U128;
}

impl BufferKindUser for GroestlLongVarCore {
	type BufferKind = Eager;
}

impl UpdateCore for GroestlLongVarCore {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			permutation::compress(&mut self.state, &read_u64_be(block));
		}
	}
}

impl OutputSizeUser for GroestlLongVarCore {
	type OutputSize = U64;
}

impl VariableOutputCore for GroestlLongVarCore {
	const TRUNC_SIDE: TruncSide = TruncSide::Right;

	#[inline]
	fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
		if output_size > Self::OutputSize::USIZE {
			return Err(InvalidOutputSize);
		}
		let mut state = [0u64; COLS];
		state[COLS - 1] = 8 * output_size as u64;
		Ok(Self {
			state,
			blocks_len: 0,
		})
	}

	#[inline]
	fn finalize_variable_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		// The length field counts blocks, including the one or two added by padding.
		let blocks_len = if buffer.remaining() <= 8 {
			self.blocks_len + 2
		} else {
			self.blocks_len + 1
		};
		let state = &mut self.state;
		buffer.len64_padding_be(blocks_len, |block| {
			permutation::compress(state, &read_u64_be(block))
		});
		let mut res = *state;
		permutation::p(&mut res);
		for (r, h) in res.iter_mut().zip(state.iter()) {
			*r ^= h;
		}
		let mut bytes = [0u8; BLOCK_BYTES];
		write_u64_be(&res, &mut bytes);
		out.copy_from_slice(&bytes[BLOCK_BYTES - Self::OutputSize::USIZE..]);
	}
}

impl AlgorithmName for GroestlLongVarCore {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("GroestlLong")
	}
}

impl fmt::Debug for GroestlLongVarCore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("GroestlLongVarCore { ... }")
	}
}
