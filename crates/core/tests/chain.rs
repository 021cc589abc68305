// Copyright 2025 Irreducible Inc.

use hashblock_core::{
	compute_chain_hash, compute_chain_hashes, ChainHasher, ChainVariant, Hash512, PrimitiveContext,
	ZeroStateCache,
};
use hashblock_hash::{digest::Digest, hash_wide, Whirlpool1};
use hex_literal::hex;
use proptest::prelude::*;
use tiny_keccak::{Hasher, Keccak};

const HEADER_LEN: usize = 80;

/// X5 assembled from the RustCrypto and tiny-keccak implementations. Whirlpool-1 has no
/// published crate and is covered by its own known-answer tests.
fn reference_x5(message: &[u8]) -> [u8; 32] {
	let step1 = hash_wide::<Whirlpool1>(message);
	let step2 = groestl_crypto::Groestl512::digest(step1);
	let mut step3 = [0u8; 64];
	let mut keccak = Keccak::v512();
	keccak.update(&step2);
	keccak.finalize(&mut step3);
	let step4 = hash_wide::<Whirlpool1>(&step3);
	let step5 = whirlpool::Whirlpool::digest(step4);

	let mut digest = [0u8; 32];
	digest.copy_from_slice(&step5[..32]);
	digest
}

#[test]
fn test_x5_vectors() {
	assert_eq!(
		compute_chain_hash(b"", ChainVariant::X5).0,
		hex!("ee58c8e5ce0df2617d909ea4f2bcc313a5143dd31d7ad9095f49c49e3183eca8")
	);
	assert_eq!(
		compute_chain_hash(&[0u8; HEADER_LEN], ChainVariant::X5).0,
		hex!("dc9aac3dc70df28b98f8730a07756fe00d9fb91dc2b92827bc7701e6cad3e60f")
	);
	assert_eq!(
		compute_chain_hash(b"The quick brown fox jumps over the lazy dog", ChainVariant::X5).0,
		hex!("4a899fef27ebf60edeed1661925d59cbe7ba813c14d1eb3e7435c9fc4706c23f")
	);
}

#[test]
fn test_x5_matches_reference_composition() {
	let header: [u8; HEADER_LEN] = std::array::from_fn(|i| (i * 7 + 3) as u8);
	let messages: [&[u8]; 4] = [b"", &[0u8; HEADER_LEN], &header, &[0xa5; 300]];
	for message in messages {
		assert_eq!(compute_chain_hash(message, ChainVariant::X5).0, reference_x5(message));
	}
}

#[test]
fn test_x24_is_deterministic() {
	let header = [0u8; HEADER_LEN];
	let first = compute_chain_hash(&header, ChainVariant::X24);
	assert_eq!(compute_chain_hash(&header, ChainVariant::X24), first);
	assert_ne!(compute_chain_hash(b"", ChainVariant::X24), first);
	assert_ne!(compute_chain_hash(&header, ChainVariant::X5), first);
}

#[test]
fn test_trace_follows_steps() {
	let cache = ZeroStateCache::warm_up();
	let message = b"block header";
	for variant in [ChainVariant::X5, ChainVariant::X24] {
		let (_, trace) = ChainHasher::new(&cache, variant).hash_with_trace(message);

		let mut previous: Option<Hash512> = None;
		for (&id, step) in variant.steps().iter().zip(&trace) {
			let mut ctx = PrimitiveContext::new(id);
			match &previous {
				Some(input) => ctx.update(input.as_bytes()),
				None => ctx.update(message),
			}
			let mut out = Hash512::ZERO;
			ctx.close(&mut out);
			assert_eq!(&out, step, "{variant} step {id}");
			assert!(out.0[id.output_bytes()..].iter().all(|&b| b == 0));
			previous = Some(out);
		}
	}
}

#[test]
fn test_batch_matches_single() {
	hashblock_utils::tracing::init_tracing();

	let messages = (0..64u8).map(|i| vec![i; i as usize]).collect::<Vec<_>>();
	for variant in [ChainVariant::X5, ChainVariant::X24] {
		let batch = compute_chain_hashes(&messages, variant);
		assert_eq!(batch.len(), messages.len());
		for (message, digest) in messages.iter().zip(&batch) {
			assert_eq!(compute_chain_hash(message, variant), *digest);
		}
	}
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn test_reused_hasher_matches_fresh(
		messages in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=200), 1..4),
	) {
		let cache = ZeroStateCache::warm_up();
		let mut reused = ChainHasher::new(&cache, ChainVariant::X24);
		for message in &messages {
			let fresh = ChainHasher::new(&cache, ChainVariant::X24).hash(message);
			prop_assert_eq!(reused.hash(message), fresh);
		}
	}
}
