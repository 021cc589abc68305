// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use hashblock_core::{
	compute_chain_hashes, ChainHasher, ChainVariant, PrimitiveContext, PrimitiveId,
	ZeroStateCache,
};

const HEADER_LEN: usize = 80;

fn bench_chain(c: &mut Criterion) {
	let mut group = c.benchmark_group("chain");
	let cache = ZeroStateCache::global();

	for variant in [ChainVariant::X5, ChainVariant::X24] {
		let mut hasher = ChainHasher::new(cache, variant);
		let mut header = [0u8; HEADER_LEN];
		let mut nonce = 0u32;
		group.bench_function(format!("{variant}/header"), |bench| {
			bench.iter(|| {
				nonce = nonce.wrapping_add(1);
				header[76..].copy_from_slice(&nonce.to_le_bytes());
				hasher.hash(&header)
			})
		});
	}

	const BATCH: usize = 1024;
	let headers = (0..BATCH as u32)
		.map(|i| {
			let mut header = [0u8; HEADER_LEN];
			header[76..].copy_from_slice(&i.to_le_bytes());
			header
		})
		.collect::<Vec<_>>();
	group.throughput(Throughput::Elements(BATCH as u64));
	group.bench_function("x24/batch", |bench| {
		bench.iter(|| compute_chain_hashes(&headers, ChainVariant::X24))
	});

	group.finish()
}

fn bench_reinit(c: &mut Criterion) {
	let mut group = c.benchmark_group("reinit");
	let cache = ZeroStateCache::global();

	for id in [PrimitiveId::Skein512, PrimitiveId::Shabal512, PrimitiveId::Panama] {
		group.bench_function(format!("{id}/clone_into"), |bench| {
			bench.iter_batched_ref(
				|| PrimitiveContext::new(id),
				|ctx| cache.clone_into(id, ctx),
				BatchSize::SmallInput,
			)
		});
		group.bench_function(format!("{id}/new"), |bench| bench.iter(|| PrimitiveContext::new(id)));
	}

	group.finish()
}

criterion_group!(benches, bench_chain, bench_reinit);
criterion_main!(benches);
