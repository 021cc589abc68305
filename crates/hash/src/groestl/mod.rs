// Copyright 2024 Ulvetanna Inc.
// Copyright 2025 Irreducible Inc.

//! Grøstl-512, the wide variant of Grøstl built on the 1024-bit P and Q permutations.

mod digest;
mod permutation;
#[cfg(test)]
mod tests;

pub use self::digest::{Groestl512, GroestlLongCore, GroestlLongVarCore};
