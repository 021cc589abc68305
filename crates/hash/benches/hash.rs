// Copyright 2025 Irreducible Inc.

use criterion::{
	criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, Throughput,
};
use hashblock_hash::{
	hash_wide, Blake512, Bmw512, CubeHash384, CubeHash512, Echo512, Fugue512, Groestl512,
	Hamsi512, Haval256_5, Jh512, Keccak512, Luffa512, Panama, Ripemd160, Sha512, Shabal512,
	Shavite512, Simd512, Skein512, Tiger, Tiger2, WideHasher, Whirlpool, Whirlpool1,
};
use rand::{thread_rng, RngCore};

fn bench_one<H: WideHasher>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, data: &[u8]) {
	group.bench_function(name, |bench| bench.iter(|| hash_wide::<H>(data)));
}

fn bench_primitives(c: &mut Criterion) {
	let mut group = c.benchmark_group("primitives");

	const N: usize = 1 << 14;
	let mut data = vec![0u8; N];
	thread_rng().fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));

	bench_one::<Sha512>(&mut group, "Sha512", &data);
	bench_one::<Ripemd160>(&mut group, "Ripemd160", &data);
	bench_one::<Tiger>(&mut group, "Tiger", &data);
	bench_one::<Tiger2>(&mut group, "Tiger2", &data);
	bench_one::<Whirlpool>(&mut group, "Whirlpool", &data);
	bench_one::<Whirlpool1>(&mut group, "Whirlpool1", &data);
	bench_one::<Blake512>(&mut group, "Blake512", &data);
	bench_one::<Bmw512>(&mut group, "Bmw512", &data);
	bench_one::<CubeHash512>(&mut group, "CubeHash512", &data);
	bench_one::<CubeHash384>(&mut group, "CubeHash384", &data);
	bench_one::<Echo512>(&mut group, "Echo512", &data);
	bench_one::<Fugue512>(&mut group, "Fugue512", &data);
	bench_one::<Groestl512>(&mut group, "Groestl512", &data);
	bench_one::<Hamsi512>(&mut group, "Hamsi512", &data);
	bench_one::<Haval256_5>(&mut group, "Haval256_5", &data);
	bench_one::<Jh512>(&mut group, "Jh512", &data);
	bench_one::<Keccak512>(&mut group, "Keccak512", &data);
	bench_one::<Luffa512>(&mut group, "Luffa512", &data);
	bench_one::<Panama>(&mut group, "Panama", &data);
	bench_one::<Shabal512>(&mut group, "Shabal512", &data);
	bench_one::<Shavite512>(&mut group, "Shavite512", &data);
	bench_one::<Simd512>(&mut group, "Simd512", &data);
	bench_one::<Skein512>(&mut group, "Skein512", &data);

	group.finish()
}

fn bench_reference_crates(c: &mut Criterion) {
	let mut group = c.benchmark_group("reference");

	const N: usize = 1 << 14;
	let mut data = vec![0u8; N];
	thread_rng().fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));

	group.bench_function("Groestl512-RustCrypto", |bench| {
		bench.iter(|| <groestl_crypto::Groestl512 as groestl_crypto::Digest>::digest(&data))
	});
	group.bench_function("Whirlpool-RustCrypto", |bench| {
		bench.iter(|| <whirlpool::Whirlpool as whirlpool::Digest>::digest(&data))
	});

	group.finish()
}

criterion_group!(benches, bench_primitives, bench_reference_crates);
criterion_main!(benches);
