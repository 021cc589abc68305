// Copyright 2025 Irreducible Inc.

//! The chained hash: each step hashes the previous step's 64-byte output.

use std::{fmt, str::FromStr};

use rayon::prelude::*;
use tracing::instrument;

use crate::{
	primitive::{PrimitiveContext, PrimitiveId},
	wide::{Hash256, Hash512},
	zero_state::ZeroStateCache,
	Error,
};

use PrimitiveId::*;

const X5_STEPS: [PrimitiveId; 5] = [Whirlpool1, Groestl512, Keccak512, Whirlpool1, Whirlpool];

const X24_STEPS: [PrimitiveId; 24] = [
	Whirlpool1,
	Bmw512,
	Groestl512,
	Echo512,
	Hamsi512,
	Fugue512,
	Shabal512,
	Jh512,
	Keccak512,
	Skein512,
	Luffa512,
	Tiger,
	CubeHash512,
	Panama,
	Sha512,
	Shavite512,
	Simd512,
	Blake512,
	Ripemd160,
	Haval256_5,
	CubeHash384,
	Whirlpool1,
	Tiger2,
	Whirlpool,
];

/// Which fixed step sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainVariant {
	X5,
	#[default]
	X24,
}

impl ChainVariant {
	pub const fn steps(self) -> &'static [PrimitiveId] {
		match self {
			Self::X5 => &X5_STEPS,
			Self::X24 => &X24_STEPS,
		}
	}
}

impl fmt::Display for ChainVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::X5 => f.write_str("x5"),
			Self::X24 => f.write_str("x24"),
		}
	}
}

impl FromStr for ChainVariant {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		if name.eq_ignore_ascii_case("x5") {
			Ok(Self::X5)
		} else if name.eq_ignore_ascii_case("x24") {
			Ok(Self::X24)
		} else {
			Err(Error::UnknownVariant {
				name: s.to_string(),
			})
		}
	}
}

/// Runs one chain variant, reusing a context per step across calls.
#[derive(Debug, Clone)]
pub struct ChainHasher<'a> {
	cache: &'a ZeroStateCache,
	variant: ChainVariant,
	contexts: Vec<PrimitiveContext>,
}

impl<'a> ChainHasher<'a> {
	#[instrument(skip_all, fields(variant = %variant))]
	pub fn new(cache: &'a ZeroStateCache, variant: ChainVariant) -> Self {
		let contexts = variant
			.steps()
			.iter()
			.map(|&id| cache.context(id))
			.collect();
		Self {
			cache,
			variant,
			contexts,
		}
	}

	pub fn variant(&self) -> ChainVariant {
		self.variant
	}

	pub fn hash(&mut self, message: &[u8]) -> Hash256 {
		self.run(message, |_| ()).truncate_to_256()
	}

	/// Like [`Self::hash`], also returning the output of every step.
	pub fn hash_with_trace(&mut self, message: &[u8]) -> (Hash256, Vec<Hash512>) {
		let mut trace = Vec::with_capacity(self.contexts.len());
		let last = self.run(message, |step| trace.push(*step));
		(last.truncate_to_256(), trace)
	}

	fn run(&mut self, message: &[u8], mut on_step: impl FnMut(&Hash512)) -> Hash512 {
		let mut current = Hash512::ZERO;
		let mut next = Hash512::ZERO;
		for (step, ctx) in self.contexts.iter_mut().enumerate() {
			self.cache.clone_into(ctx.id(), ctx);
			if step == 0 {
				ctx.update(message);
			} else {
				ctx.update(current.as_bytes());
			}
			ctx.close(&mut next);
			std::mem::swap(&mut current, &mut next);
			on_step(&current);
		}
		current
	}
}

/// Chain digest of `message` using the process-wide zero-state cache.
pub fn compute_chain_hash(message: &[u8], variant: ChainVariant) -> Hash256 {
	ChainHasher::new(ZeroStateCache::global(), variant).hash(message)
}

/// Chain digests of many messages, computed in parallel.
#[instrument(skip_all, fields(variant = %variant, count = messages.len()))]
pub fn compute_chain_hashes<M>(messages: &[M], variant: ChainVariant) -> Vec<Hash256>
where
	M: AsRef<[u8]> + Sync,
{
	messages
		.par_iter()
		.map_init(
			|| ChainHasher::new(ZeroStateCache::global(), variant),
			|hasher, message| hasher.hash(message.as_ref()),
		)
		.collect()
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_step_sequences() {
		assert_eq!(ChainVariant::X5.steps().len(), 5);
		assert_eq!(ChainVariant::X24.steps().len(), 24);
		assert_eq!(ChainVariant::X24.steps()[9], Skein512);
		assert_eq!(ChainVariant::X24.steps()[19], Haval256_5);
	}

	#[test]
	fn test_variant_names() {
		assert_eq!("x5".parse::<ChainVariant>().ok(), Some(ChainVariant::X5));
		assert_eq!("X24".parse::<ChainVariant>().ok(), Some(ChainVariant::X24));
		assert_eq!(" x24 ".parse::<ChainVariant>().ok(), Some(ChainVariant::X24));
		assert!("x11".parse::<ChainVariant>().is_err());
		for variant in [ChainVariant::X5, ChainVariant::X24] {
			assert_eq!(variant.to_string().parse::<ChainVariant>().ok(), Some(variant));
		}
	}

	#[test]
	fn test_x5_empty_message() {
		assert_eq!(
			compute_chain_hash(b"", ChainVariant::X5).0,
			hex!("ee58c8e5ce0df2617d909ea4f2bcc313a5143dd31d7ad9095f49c49e3183eca8")
		);
	}

	#[test]
	fn test_trace_ends_with_digest() {
		let cache = ZeroStateCache::warm_up();
		let mut hasher = ChainHasher::new(&cache, ChainVariant::X24);
		let (digest, trace) = hasher.hash_with_trace(b"abc");
		assert_eq!(trace.len(), 24);
		assert_eq!(trace[23].truncate_to_256(), digest);
		assert_eq!(hasher.hash(b"abc"), digest);

		// RIPEMD-160 at step 19 leaves 44 zero bytes.
		assert!(trace[18].0[20..].iter().all(|&b| b == 0));
	}
}
