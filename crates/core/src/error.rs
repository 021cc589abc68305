// Copyright 2025 Irreducible Inc.

use hashblock_hash::InvalidHavalConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown chain variant {name:?}, expected \"x5\" or \"x24\"")]
	UnknownVariant { name: String },
	#[error("invalid HAVAL parameters: {0}")]
	InvalidHavalParameters(#[from] InvalidHavalConfig),
}
