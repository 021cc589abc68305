// Copyright 2025 Irreducible Inc.

//! Word/byte conversions shared by the primitive implementations.

use std::array;

#[inline(always)]
pub(crate) fn u32_le(bytes: &[u8]) -> u32 {
	let mut w = [0u8; 4];
	w.copy_from_slice(&bytes[..4]);
	u32::from_le_bytes(w)
}

#[inline(always)]
pub(crate) fn u32_be(bytes: &[u8]) -> u32 {
	let mut w = [0u8; 4];
	w.copy_from_slice(&bytes[..4]);
	u32::from_be_bytes(w)
}

#[inline(always)]
pub(crate) fn u64_le(bytes: &[u8]) -> u64 {
	let mut w = [0u8; 8];
	w.copy_from_slice(&bytes[..8]);
	u64::from_le_bytes(w)
}

#[inline(always)]
pub(crate) fn u64_be(bytes: &[u8]) -> u64 {
	let mut w = [0u8; 8];
	w.copy_from_slice(&bytes[..8]);
	u64::from_be_bytes(w)
}

#[inline]
pub(crate) fn read_u32_le<const N: usize>(bytes: &[u8]) -> [u32; N] {
	array::from_fn(|i| u32_le(&bytes[4 * i..]))
}

#[inline]
pub(crate) fn read_u32_be<const N: usize>(bytes: &[u8]) -> [u32; N] {
	array::from_fn(|i| u32_be(&bytes[4 * i..]))
}

#[inline]
pub(crate) fn read_u64_le<const N: usize>(bytes: &[u8]) -> [u64; N] {
	array::from_fn(|i| u64_le(&bytes[8 * i..]))
}

#[inline]
pub(crate) fn read_u64_be<const N: usize>(bytes: &[u8]) -> [u64; N] {
	array::from_fn(|i| u64_be(&bytes[8 * i..]))
}

pub(crate) fn write_u32_le(words: &[u32], out: &mut [u8]) {
	for (chunk, w) in out.chunks_exact_mut(4).zip(words) {
		chunk.copy_from_slice(&w.to_le_bytes());
	}
}

pub(crate) fn write_u32_be(words: &[u32], out: &mut [u8]) {
	for (chunk, w) in out.chunks_exact_mut(4).zip(words) {
		chunk.copy_from_slice(&w.to_be_bytes());
	}
}

pub(crate) fn write_u64_le(words: &[u64], out: &mut [u8]) {
	for (chunk, w) in out.chunks_exact_mut(8).zip(words) {
		chunk.copy_from_slice(&w.to_le_bytes());
	}
}

pub(crate) fn write_u64_be(words: &[u64], out: &mut [u8]) {
	for (chunk, w) in out.chunks_exact_mut(8).zip(words) {
		chunk.copy_from_slice(&w.to_be_bytes());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_word_roundtrip_endianness() {
		let bytes: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
		assert_eq!(read_u32_le::<2>(&bytes), [0x04030201, 0x08070605]);
		assert_eq!(read_u32_be::<2>(&bytes), [0x01020304, 0x05060708]);
		assert_eq!(read_u64_be::<1>(&bytes), [0x0102030405060708]);

		let mut out = [0u8; 8];
		write_u64_le(&[0x0807060504030201], &mut out);
		assert_eq!(out, bytes);
	}
}
