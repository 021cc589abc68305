// Copyright 2025 Irreducible Inc.

use std::env::{self, VarError};

use crate::{chain::ChainVariant, Error};

/// Environment variable selecting the chain variant.
pub const CHAIN_VARIANT_ENV: &str = "HASHBLOCK_CHAIN_VARIANT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainConfig {
	pub variant: ChainVariant,
}

impl ChainConfig {
	pub fn new(variant: ChainVariant) -> Self {
		Self { variant }
	}

	/// Reads [`CHAIN_VARIANT_ENV`]. An unset variable selects X24.
	pub fn from_env() -> Result<Self, Error> {
		match env::var(CHAIN_VARIANT_ENV) {
			Ok(value) => Self::from_value(Some(&value)),
			Err(VarError::NotPresent) => Self::from_value(None),
			Err(VarError::NotUnicode(value)) => Err(Error::UnknownVariant {
				name: value.to_string_lossy().into_owned(),
			}),
		}
	}

	/// Builds the config from the raw value of [`CHAIN_VARIANT_ENV`].
	pub fn from_value(value: Option<&str>) -> Result<Self, Error> {
		let variant = match value {
			Some(name) => name.parse()?,
			None => ChainVariant::default(),
		};
		Ok(Self { variant })
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_default_is_x24() {
		assert_eq!(
			ChainConfig::from_value(None).ok(),
			Some(ChainConfig::new(ChainVariant::X24))
		);
		assert_eq!(ChainConfig::default().variant, ChainVariant::X24);
	}

	#[test]
	fn test_parse_value() {
		assert_eq!(
			ChainConfig::from_value(Some("X5")).ok(),
			Some(ChainConfig::new(ChainVariant::X5))
		);
		assert_matches!(
			ChainConfig::from_value(Some("x17")),
			Err(Error::UnknownVariant { name }) if name == "x17"
		);
	}
}
