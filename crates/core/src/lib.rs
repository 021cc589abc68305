// Copyright 2025 Irreducible Inc.

//! Chained proof-of-work digest built from the primitives in `hashblock_hash`.

pub mod chain;
pub mod config;
mod error;
pub mod primitive;
pub mod wide;
pub mod zero_state;

pub use chain::{compute_chain_hash, compute_chain_hashes, ChainHasher, ChainVariant};
pub use config::ChainConfig;
pub use error::Error;
pub use primitive::{PrimitiveContext, PrimitiveId};
pub use wide::{Hash256, Hash512};
pub use zero_state::ZeroStateCache;
