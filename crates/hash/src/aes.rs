// Copyright 2025 Irreducible Inc.

//! Portable AES round primitives shared by Groestl, ECHO, Fugue and SHAvite-3.
//!
//! AES states are handled as four little-endian column words: byte `r` of column `c` is bits
//! `8r..8r + 8` of word `c`.

use lazy_static::lazy_static;

/// Multiplication in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
pub(crate) const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
	let mut acc = 0u8;
	while b != 0 {
		if b & 1 != 0 {
			acc ^= a;
		}
		let carry = a & 0x80 != 0;
		a <<= 1;
		if carry {
			a ^= 0x1b;
		}
		b >>= 1;
	}
	acc
}

/// Doubles each of the four bytes packed in `x`.
#[inline(always)]
pub(crate) fn xtime_packed(x: u32) -> u32 {
	((x & 0x7f7f7f7f) << 1) ^ (((x >> 7) & 0x01010101) * 0x1b)
}

fn generate_sbox() -> [u8; 256] {
	let mut sbox = [0u8; 256];
	for (a, entry) in sbox.iter_mut().enumerate() {
		// Inverse as a^254.
		let mut inv = 1u8;
		let mut base = a as u8;
		let mut exp = 254u32;
		while exp != 0 {
			if exp & 1 != 0 {
				inv = gf_mul(inv, base);
			}
			base = gf_mul(base, base);
			exp >>= 1;
		}
		if a == 0 {
			inv = 0;
		}
		*entry = inv
			^ inv.rotate_left(1)
			^ inv.rotate_left(2)
			^ inv.rotate_left(3)
			^ inv.rotate_left(4)
			^ 0x63;
	}
	sbox
}

fn generate_round_tables(sbox: &[u8; 256]) -> [[u32; 256]; 4] {
	let mut tables = [[0u32; 256]; 4];
	for x in 0..256 {
		let s = sbox[x];
		let t0 = u32::from_le_bytes([gf_mul(s, 2), s, s, gf_mul(s, 3)]);
		for (i, table) in tables.iter_mut().enumerate() {
			table[x] = t0.rotate_left(8 * i as u32);
		}
	}
	tables
}

lazy_static! {
	pub(crate) static ref SBOX: [u8; 256] = generate_sbox();
	static ref ROUND_TABLES: [[u32; 256]; 4] = generate_round_tables(&SBOX);
}

/// One AES round (SubBytes, ShiftRows, MixColumns) without the key addition.
#[inline]
pub(crate) fn aes_round_nokey(x: [u32; 4]) -> [u32; 4] {
	let t = &*ROUND_TABLES;
	let column = |c: usize| {
		t[0][(x[c] & 0xff) as usize]
			^ t[1][((x[(c + 1) % 4] >> 8) & 0xff) as usize]
			^ t[2][((x[(c + 2) % 4] >> 16) & 0xff) as usize]
			^ t[3][(x[(c + 3) % 4] >> 24) as usize]
	};
	[column(0), column(1), column(2), column(3)]
}

/// One full AES round followed by the round key addition.
#[inline]
pub(crate) fn aes_round(x: [u32; 4], key: [u32; 4]) -> [u32; 4] {
	let y = aes_round_nokey(x);
	[y[0] ^ key[0], y[1] ^ key[1], y[2] ^ key[2], y[3] ^ key[3]]
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_sbox_known_entries() {
		assert_eq!(SBOX[0x00], 0x63);
		assert_eq!(SBOX[0x01], 0x7c);
		assert_eq!(SBOX[0x53], 0xed);
		assert_eq!(SBOX[0xff], 0x16);
	}

	#[test]
	fn test_aes_round_fips197_first_round() {
		// FIPS-197 appendix B: state after the initial AddRoundKey, then round 1 with its key.
		let state = hex!("193de3bea0f4e22b9ac68d2ae9f84808");
		let key = hex!("a0fafe1788542cb123a339392a6c7605");
		let expected = hex!("a49c7ff2689f352b6b5bea43026a5049");

		let to_words = |b: [u8; 16]| -> [u32; 4] { crate::words::read_u32_le(&b) };
		assert_eq!(aes_round(to_words(state), to_words(key)), to_words(expected));
	}

	#[test]
	fn test_xtime_packed() {
		let x = u32::from_le_bytes([0x57, 0x83, 0x01, 0x80]);
		let expected = u32::from_le_bytes([gf_mul(0x57, 2), gf_mul(0x83, 2), 2, 0x1b]);
		assert_eq!(xtime_packed(x), expected);
	}
}
