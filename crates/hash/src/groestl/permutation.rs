// Copyright 2025 Irreducible Inc.

use lazy_static::lazy_static;

use crate::aes::{gf_mul, SBOX};

/// Number of 8-byte columns in the wide state.
pub(super) const COLS: usize = 16;
const ROUNDS: usize = 14;

const SHIFT_P: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 11];
const SHIFT_Q: [usize; 8] = [1, 3, 5, 11, 0, 2, 4, 6];

/// First row of the MixBytes circulant.
const MIX_ROW: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];

pub(super) type State = [u64; COLS];

lazy_static! {
	/// `TABLE[row][x]` is the column produced by MixBytes from `S(x)` sitting in `row`, with
	/// row 0 in the most significant byte.
	static ref TABLE: [[u64; 256]; 8] = generate_table();
}

fn generate_table() -> [[u64; 256]; 8] {
	let mut table = [[0u64; 256]; 8];
	for (row, entries) in table.iter_mut().enumerate() {
		for (x, entry) in entries.iter_mut().enumerate() {
			let s = SBOX[x];
			*entry = u64::from_be_bytes(std::array::from_fn(|i| gf_mul(s, MIX_ROW[(row + 8 - i) % 8])));
		}
	}
	table
}

#[inline]
fn sub_shift_mix(x: &State, shifts: &[usize; 8]) -> State {
	let table = &*TABLE;
	std::array::from_fn(|col| {
		let mut acc = 0u64;
		for (row, &shift) in shifts.iter().enumerate() {
			let byte = (x[(col + shift) % COLS] >> (56 - 8 * row)) & 0xff;
			acc ^= table[row][byte as usize];
		}
		acc
	})
}

pub(super) fn p(state: &mut State) {
	for r in 0..ROUNDS {
		for (col, word) in state.iter_mut().enumerate() {
			*word ^= (((col << 4) ^ r) as u64) << 56;
		}
		*state = sub_shift_mix(state, &SHIFT_P);
	}
}

pub(super) fn q(state: &mut State) {
	for r in 0..ROUNDS {
		for (col, word) in state.iter_mut().enumerate() {
			*word ^= !(((col << 4) ^ r) as u64);
		}
		*state = sub_shift_mix(state, &SHIFT_Q);
	}
}

/// `h <- P(h ^ m) ^ Q(m) ^ h`
pub(super) fn compress(h: &mut State, m: &State) {
	let mut p_in: State = std::array::from_fn(|i| h[i] ^ m[i]);
	let mut q_in = *m;
	p(&mut p_in);
	q(&mut q_in);
	for i in 0..COLS {
		h[i] ^= p_in[i] ^ q_in[i];
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_table_row0_is_doubled_sbox() {
		// S(0) = 0x63 and the first circulant row is [2, 2, 3, 4, 5, 3, 5, 7].
		let s = 0x63u8;
		let expected = u64::from_be_bytes([
			gf_mul(s, 2),
			gf_mul(s, 7),
			gf_mul(s, 5),
			gf_mul(s, 3),
			gf_mul(s, 5),
			gf_mul(s, 4),
			gf_mul(s, 3),
			gf_mul(s, 2),
		]);
		assert_eq!(TABLE[0][0], expected);
	}

	#[test]
	fn test_p_and_q_differ() {
		let mut a = [0u64; COLS];
		let mut b = [0u64; COLS];
		p(&mut a);
		q(&mut b);
		assert_ne!(a, b);
	}
}
