// Copyright 2025 Irreducible Inc.

use digest::{
	typenum::{IsLessOrEqual, True, Unsigned, U64},
	Digest, FixedOutputReset,
};

/// Width in bytes of the buffers passed between chained hash invocations.
pub const WIDE_BYTES: usize = 64;

/// Hash functions whose digest fits inside a 512-bit wide buffer.
///
/// This is the uniform `{init, update, close}` interface used by the chain. `init` is
/// [`Default::default`], `update` is [`Digest::update`] and `close` is [`WideHasher::close_wide`],
/// which leaves the hasher in its freshly initialized state.
///
/// The bound on the output size makes it a compile-time fact that the digest fits in the
/// destination buffer.
pub trait WideHasher: Digest + FixedOutputReset + Default + Clone + Send + Sync {
	/// Digest size in bytes.
	const OUTPUT_BYTES: usize;

	/// Absorbs `data`. An empty slice leaves the state untouched.
	fn absorb(&mut self, data: &[u8]) {
		if !data.is_empty() {
			Digest::update(self, data);
		}
	}

	/// Pads and finalizes into the prefix of `out`, zero-filling the rest, and resets the state.
	fn close_wide(&mut self, out: &mut [u8; WIDE_BYTES]) {
		let digest = Digest::finalize_reset(self);
		let (head, tail) = out.split_at_mut(Self::OUTPUT_BYTES);
		head.copy_from_slice(&digest);
		tail.fill(0);
	}
}

impl<D> WideHasher for D
where
	D: Digest + FixedOutputReset + Default + Clone + Send + Sync,
	<D as digest::OutputSizeUser>::OutputSize: IsLessOrEqual<U64, Output = True>,
{
	const OUTPUT_BYTES: usize = <D as digest::OutputSizeUser>::OutputSize::USIZE;
}

/// One-shot hash of `data` into a wide buffer.
pub fn hash_wide<H: WideHasher>(data: &[u8]) -> [u8; WIDE_BYTES] {
	let mut hasher = H::default();
	let mut out = [0u8; WIDE_BYTES];
	hasher.absorb(data);
	hasher.close_wide(&mut out);
	out
}
