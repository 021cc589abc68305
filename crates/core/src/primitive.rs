// Copyright 2025 Irreducible Inc.

//! Runtime dispatch over the hash primitives the chains are built from.

use std::fmt;

use hashblock_hash::{
	Blake512, Bmw512, CubeHash384, CubeHash512, Echo512, Fugue512, Groestl512, Hamsi512,
	Haval256_5, HavalConfig, Jh512, Keccak512, Luffa512, Panama, Ripemd160, Sha512, Shabal512,
	Shavite512, Simd512, Skein512, Tiger, Tiger2, WideHasher, Whirlpool, Whirlpool1,
};

use crate::{wide::Hash512, Error};

macro_rules! define_primitives {
	($($variant:ident => $hasher:ty, $name:literal;)*) => {
		/// Identity of one hash primitive.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum PrimitiveId {
			$($variant,)*
		}

		impl PrimitiveId {
			pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

			pub const fn name(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}

			/// Digest size in bytes.
			pub const fn output_bytes(self) -> usize {
				match self {
					$(Self::$variant => <$hasher as WideHasher>::OUTPUT_BYTES,)*
				}
			}
		}

		/// Mutable state of any one primitive.
		///
		/// `close` leaves the context freshly initialized, so one context can hash any number
		/// of messages.
		#[derive(Clone)]
		#[allow(clippy::large_enum_variant)]
		pub enum PrimitiveContext {
			$($variant($hasher),)*
		}

		impl PrimitiveContext {
			/// A freshly initialized context for `id`.
			pub fn new(id: PrimitiveId) -> Self {
				match id {
					$(PrimitiveId::$variant => Self::$variant(<$hasher>::default()),)*
				}
			}

			pub fn id(&self) -> PrimitiveId {
				match self {
					$(Self::$variant(_) => PrimitiveId::$variant,)*
				}
			}

			/// Absorbs `data`. Empty input is a no-op.
			#[inline]
			pub fn update(&mut self, data: &[u8]) {
				match self {
					$(Self::$variant(hasher) => hasher.absorb(data),)*
				}
			}

			/// Writes the digest into the prefix of `out`, zeroes the rest and re-initializes
			/// the context.
			#[inline]
			pub fn close(&mut self, out: &mut Hash512) {
				match self {
					$(Self::$variant(hasher) => hasher.close_wide(out.as_bytes_mut()),)*
				}
			}
		}
	};
}

define_primitives! {
	Sha512 => Sha512, "sha512";
	Ripemd160 => Ripemd160, "ripemd160";
	Tiger => Tiger, "tiger";
	Tiger2 => Tiger2, "tiger2";
	Whirlpool => Whirlpool, "whirlpool";
	Whirlpool1 => Whirlpool1, "whirlpool1";
	Blake512 => Blake512, "blake512";
	Bmw512 => Bmw512, "bmw512";
	CubeHash512 => CubeHash512, "cubehash512";
	CubeHash384 => CubeHash384, "cubehash384";
	Echo512 => Echo512, "echo512";
	Fugue512 => Fugue512, "fugue512";
	Groestl512 => Groestl512, "groestl512";
	Hamsi512 => Hamsi512, "hamsi512";
	Haval256_5 => Haval256_5, "haval256_5";
	Jh512 => Jh512, "jh512";
	Keccak512 => Keccak512, "keccak512";
	Luffa512 => Luffa512, "luffa512";
	Panama => Panama, "panama";
	Shabal512 => Shabal512, "shabal512";
	Shavite512 => Shavite512, "shavite512";
	Simd512 => Simd512, "simd512";
	Skein512 => Skein512, "skein512";
}

impl PrimitiveId {
	/// Position of this primitive in [`PrimitiveId::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for PrimitiveId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl PrimitiveContext {
	/// Resets the context to the primitive's initial constants.
	pub fn init(&mut self) {
		*self = Self::new(self.id());
	}
}

impl fmt::Debug for PrimitiveContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "PrimitiveContext {{ id: {}, ... }}", self.id())
	}
}

/// HAVAL digest of `data` with the pass count and output length chosen at runtime.
pub fn haval_digest(passes: u8, output_words: u8, data: &[u8]) -> Result<Vec<u8>, Error> {
	let config = HavalConfig::new(passes, output_words)?;
	Ok(config.digest(data))
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use hashblock_hash::{digest::Digest, InvalidHavalConfig};

	use super::*;

	#[test]
	fn test_ids_are_dense() {
		assert_eq!(PrimitiveId::ALL.len(), 23);
		for (i, &id) in PrimitiveId::ALL.iter().enumerate() {
			assert_eq!(id.index(), i);
			assert_eq!(PrimitiveContext::new(id).id(), id);
		}
	}

	#[test]
	fn test_output_sizes() {
		assert_eq!(PrimitiveId::Ripemd160.output_bytes(), 20);
		assert_eq!(PrimitiveId::Tiger2.output_bytes(), 24);
		assert_eq!(PrimitiveId::CubeHash384.output_bytes(), 48);
		assert_eq!(PrimitiveId::Haval256_5.output_bytes(), 32);
		assert_eq!(PrimitiveId::Panama.output_bytes(), 32);
		assert_eq!(PrimitiveId::Skein512.output_bytes(), 64);
	}

	#[test]
	fn test_context_matches_direct_hasher() {
		let mut ctx = PrimitiveContext::new(PrimitiveId::Tiger);
		ctx.update(b"abc");
		let mut out = Hash512::ZERO;
		ctx.close(&mut out);
		assert_eq!(out.0[..24], Tiger::digest(b"abc")[..]);
		assert!(out.0[24..].iter().all(|&b| b == 0));
	}

	#[test]
	fn test_init_discards_absorbed_data() {
		for &id in PrimitiveId::ALL {
			let mut fresh = PrimitiveContext::new(id);
			let mut dirty = PrimitiveContext::new(id);
			dirty.update(&[0x5a; 200]);
			dirty.init();

			let (mut expected, mut actual) = (Hash512::ZERO, Hash512::ZERO);
			fresh.close(&mut expected);
			dirty.close(&mut actual);
			assert_eq!(actual, expected, "{id}");
		}
	}

	#[test]
	fn test_haval_digest_parameters() {
		let digest = haval_digest(5, 8, b"").expect("valid HAVAL parameters");
		assert_eq!(digest[..], Haval256_5::digest(b"")[..]);
		assert_eq!(haval_digest(3, 4, b"abc").expect("valid HAVAL parameters").len(), 16);
		assert_matches!(
			haval_digest(2, 8, b""),
			Err(Error::InvalidHavalParameters(InvalidHavalConfig {
				passes: 2,
				output_words: 8
			}))
		);
	}
}
