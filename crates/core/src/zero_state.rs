// Copyright 2025 Irreducible Inc.

//! Post-initialization snapshots of every primitive.
//!
//! Mining loops re-initialize the same primitives millions of times. Copying a captured
//! snapshot is equivalent to running `init` and skips any setup the primitive does there.

use lazy_static::lazy_static;
use tracing::debug;

use crate::primitive::{PrimitiveContext, PrimitiveId};

lazy_static! {
	static ref GLOBAL: ZeroStateCache = ZeroStateCache::warm_up();
}

/// Initial state of every primitive, indexed by [`PrimitiveId::index`].
#[derive(Debug, Clone)]
pub struct ZeroStateCache {
	snapshots: Vec<PrimitiveContext>,
}

impl ZeroStateCache {
	/// Runs `init` once per primitive and keeps the results.
	pub fn warm_up() -> Self {
		let snapshots = PrimitiveId::ALL
			.iter()
			.map(|&id| PrimitiveContext::new(id))
			.collect::<Vec<_>>();
		debug!(snapshots = snapshots.len(), "zero-state cache warmed up");
		Self { snapshots }
	}

	/// The process-wide cache, built on first use.
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	pub fn snapshot(&self, id: PrimitiveId) -> &PrimitiveContext {
		&self.snapshots[id.index()]
	}

	/// Overwrites `ctx` with the initial state of `id`.
	#[inline]
	pub fn clone_into(&self, id: PrimitiveId, ctx: &mut PrimitiveContext) {
		ctx.clone_from(self.snapshot(id));
	}

	/// A new context holding the initial state of `id`.
	pub fn context(&self, id: PrimitiveId) -> PrimitiveContext {
		self.snapshot(id).clone()
	}
}

impl Default for ZeroStateCache {
	fn default() -> Self {
		Self::warm_up()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;
	use crate::wide::Hash512;

	#[test]
	fn test_clone_into_matches_init() {
		let cache = ZeroStateCache::warm_up();
		for &id in PrimitiveId::ALL {
			let mut expected = Hash512::ZERO;
			PrimitiveContext::new(id).close(&mut expected);

			// Start from a context of a different primitive that has absorbed data.
			let mut ctx = PrimitiveContext::new(PrimitiveId::Panama);
			ctx.update(b"left over");
			cache.clone_into(id, &mut ctx);
			assert_eq!(ctx.id(), id);

			let mut actual = Hash512::ZERO;
			ctx.close(&mut actual);
			assert_eq!(actual, expected, "{id}");
		}
	}

	#[test]
	fn test_snapshots_do_not_change() {
		let cache = ZeroStateCache::warm_up();
		let mut ctx = cache.context(PrimitiveId::Keccak512);
		ctx.update(b"abc");

		let mut from_cache = Hash512::ZERO;
		cache.context(PrimitiveId::Keccak512).close(&mut from_cache);
		let mut fresh = Hash512::ZERO;
		PrimitiveContext::new(PrimitiveId::Keccak512).close(&mut fresh);
		assert_eq!(from_cache, fresh);
	}

	#[test]
	fn test_global_is_shared() {
		let addresses = (0..4)
			.map(|_| thread::spawn(|| ZeroStateCache::global() as *const _ as usize))
			.collect::<Vec<_>>()
			.into_iter()
			.map(|handle| handle.join().expect("thread does not panic"))
			.collect::<Vec<_>>();
		assert!(addresses.windows(2).all(|w| w[0] == w[1]));
		assert_eq!(ZeroStateCache::global().snapshots.len(), PrimitiveId::ALL.len());
	}
}
