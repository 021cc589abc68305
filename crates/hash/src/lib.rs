// Copyright 2025 Irreducible Inc.

//! Hash primitives used by the chained proof-of-work digest.
//!
//! Every primitive is implemented on top of the `digest` crate's core API and exposed as a
//! [`digest::core_api::CoreWrapper`] alias, so all of them share the [`digest::Digest`] interface
//! and the [`WideHasher`] extension used by the chain.

mod aes;
mod words;

pub mod blake;
pub mod bmw;
pub mod cubehash;
pub mod echo;
pub mod fugue;
pub mod groestl;
pub mod hamsi;
pub mod hasher;
pub mod haval;
pub mod jh;
pub mod keccak;
pub mod luffa;
pub mod panama;
pub mod ripemd160;
pub mod sha2;
pub mod shabal;
pub mod shavite;
pub mod simd;
pub mod skein;
pub mod tiger;
pub mod whirlpool;

pub use self::blake::Blake512;
pub use self::bmw::Bmw512;
pub use self::cubehash::{CubeHash384, CubeHash512};
pub use digest;
pub use self::echo::Echo512;
pub use self::fugue::Fugue512;
pub use self::groestl::Groestl512;
pub use self::hamsi::Hamsi512;
pub use self::hasher::*;
pub use self::haval::{Haval256_5, HavalConfig, InvalidHavalConfig};
pub use self::jh::Jh512;
pub use self::keccak::Keccak512;
pub use self::luffa::Luffa512;
pub use self::panama::Panama;
pub use self::ripemd160::Ripemd160;
pub use self::sha2::Sha512;
pub use self::shabal::Shabal512;
pub use self::shavite::Shavite512;
pub use self::simd::Simd512;
pub use self::skein::Skein512;
pub use self::tiger::{Tiger, Tiger2};
pub use self::whirlpool::{Whirlpool, Whirlpool1};
