// Copyright 2025 Irreducible Inc.

use hashblock_hash::{
	digest::Digest, hash_wide, Blake512, Bmw512, CubeHash384, CubeHash512, Echo512, Fugue512,
	Groestl512, Hamsi512, Haval256_5, Jh512, Keccak512, Luffa512, Panama, Ripemd160, Sha512,
	Shabal512, Shavite512, Simd512, Skein512, Tiger, Tiger2, WideHasher, Whirlpool, Whirlpool1,
	WIDE_BYTES,
};
use hex_literal::hex;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn message(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Splitting the input at any point must not change the digest.
fn check_streaming<H: WideHasher>() {
	let msg = message(1000);
	let expected = hash_wide::<H>(&msg);
	for split in [0, 1, 3, 4, 63, 64, 65, 71, 72, 127, 128, 129, 500, 999, 1000] {
		let (head, tail) = msg.split_at(split);
		let mut hasher = H::default();
		hasher.absorb(head);
		hasher.absorb(tail);
		let mut out = [0u8; WIDE_BYTES];
		hasher.close_wide(&mut out);
		assert_eq!(out, expected, "split at {split}");
	}

	let mut hasher = H::default();
	for byte in msg.chunks(1) {
		hasher.absorb(byte);
	}
	let mut out = [0u8; WIDE_BYTES];
	hasher.close_wide(&mut out);
	assert_eq!(out, expected, "byte-at-a-time");
}

/// A closed hasher behaves like a fresh one.
fn check_reuse<H: WideHasher>() {
	let mut hasher = H::default();
	let mut out = [0u8; WIDE_BYTES];
	hasher.absorb(&message(300));
	hasher.close_wide(&mut out);

	hasher.absorb(FOX);
	hasher.close_wide(&mut out);
	assert_eq!(out, hash_wide::<H>(FOX));

	hasher.close_wide(&mut out);
	assert_eq!(out, hash_wide::<H>(b""));
}

/// Digest bytes fill the prefix and the rest of the wide buffer stays zero.
fn check_wide_layout<H: WideHasher>() {
	let wide = hash_wide::<H>(FOX);
	let digest = H::digest(FOX);
	assert_eq!(digest.len(), H::OUTPUT_BYTES);
	assert_eq!(&wide[..H::OUTPUT_BYTES], digest.as_slice());
	assert!(wide[H::OUTPUT_BYTES..].iter().all(|&b| b == 0));
}

/// Inputs around block boundaries give pairwise distinct digests.
fn check_lengths_distinct<H: WideHasher>() {
	let digests = (0..=260).map(|len| hash_wide::<H>(&message(len))).collect::<Vec<_>>();
	for (i, a) in digests.iter().enumerate() {
		for b in &digests[i + 1..] {
			assert_ne!(a, b);
		}
	}
}

fn check_all<H: WideHasher>() {
	check_streaming::<H>();
	check_reuse::<H>();
	check_wide_layout::<H>();
	check_lengths_distinct::<H>();
}

macro_rules! primitive_tests {
	($($name:ident => $hasher:ty, $len:expr;)*) => {
		$(
			#[test]
			fn $name() {
				assert_eq!(<$hasher as WideHasher>::OUTPUT_BYTES, $len);
				check_all::<$hasher>();
			}
		)*
	};
}

primitive_tests! {
	test_sha512 => Sha512, 64;
	test_ripemd160 => Ripemd160, 20;
	test_tiger => Tiger, 24;
	test_tiger2 => Tiger2, 24;
	test_whirlpool => Whirlpool, 64;
	test_whirlpool1 => Whirlpool1, 64;
	test_blake512 => Blake512, 64;
	test_bmw512 => Bmw512, 64;
	test_cubehash512 => CubeHash512, 64;
	test_cubehash384 => CubeHash384, 48;
	test_echo512 => Echo512, 64;
	test_fugue512 => Fugue512, 64;
	test_groestl512 => Groestl512, 64;
	test_hamsi512 => Hamsi512, 64;
	test_haval256_5 => Haval256_5, 32;
	test_jh512 => Jh512, 64;
	test_keccak512 => Keccak512, 64;
	test_luffa512 => Luffa512, 64;
	test_panama => Panama, 32;
	test_shabal512 => Shabal512, 64;
	test_shavite512 => Shavite512, 64;
	test_simd512 => Simd512, 64;
	test_skein512 => Skein512, 64;
}

#[test]
fn test_empty_input_vectors() {
	assert_eq!(
		Blake512::digest(b"")[..],
		hex!("a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8")
	);
	assert_eq!(
		Bmw512::digest(b"")[..],
		hex!("6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e")
	);
	assert_eq!(
		CubeHash512::digest(b"")[..],
		hex!("4a1d00bbcfcb5a9562fb981e7f7db3350fe2658639d948b9d57452c22328bb32f468b072208450bad5ee178271408be0b16e5633ac8a1e3cf9864cfbfc8e043a")
	);
	assert_eq!(
		CubeHash384::digest(b"")[..],
		hex!("98ae93ebf4e58958497f610a22c8cf60f2292319283ca6459daed1707be06e7591c5f2d84bd3339e66c770e485bfa1fb")
	);
	assert_eq!(
		Echo512::digest(b"")[..],
		hex!("158f58cc79d300a9aa292515049275d051a28ab931726d0ec44bdd9faef4a702c36db9e7922fff077402236465833c5cc76af4efc352b4b44c7fa15aa0ef234e")
	);
	assert_eq!(
		Fugue512::digest(b"")[..],
		hex!("3124f0cbb5a1c2fb3ce747ada63ed2ab3bcd74795cef2b0e805d5319fcc360b4617b6a7eb631d66f6d106ed0724b56fa8c1110f9b8df1c6898e7ca3c2dfccf79")
	);
	assert_eq!(
		Groestl512::digest(b"")[..],
		hex!("6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8")
	);
	assert_eq!(
		Haval256_5::digest(b"")[..],
		hex!("be417bb4dd5cfb76c7126f4f8eeb1553a449039307b1a3cd451dbfdc0fbbe330")
	);
	assert_eq!(
		Jh512::digest(b"")[..],
		hex!("90ecf2f76f9d2c8017d979ad5ab96b87d58fc8fc4b83060f3f900774faa2c8fabe69c5f4ff1ec2b61d6b316941cedee117fb04b1f4c5bc1b919ae841c50eec4f")
	);
	assert_eq!(
		Keccak512::digest(b"")[..],
		hex!("0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e")
	);
	assert_eq!(
		Panama::digest(b"")[..],
		hex!("aa0cc954d757d7ac7779ca3342334ca471abd47d5952ac91ed837ecd5b16922b")
	);
	assert_eq!(
		Shabal512::digest(b"")[..],
		hex!("fc2d5dff5d70b7f6b1f8c2fcc8c1f9fe9934e54257eded0cf2b539a2ef0a19ccffa84f8d9fa135e4bd3c09f590f3a927ebd603ac29eb729e6f2a9af031ad8dc6")
	);
	assert_eq!(
		Skein512::digest(b"")[..],
		hex!("bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af41fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a")
	);
	assert_eq!(Tiger::digest(b"")[..], hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3"));
	assert_eq!(
		Whirlpool1::digest(b"")[..],
		hex!("470f0409abaa446e49667d4ebe12a14387cedbd10dd17b8243cad550a089dc0feea7aa40f6c2aaab71c6ebd076e43c7cfca0ad32567897dcb5969861049a0f5a")
	);
}

#[test]
fn test_hamsi_simd_luffa_shavite_vectors() {
	assert_eq!(
		Hamsi512::digest(b"")[..],
		hex!("5cd7436a91e27fc809d7015c3407540633dab391127113ce6ba360f0c1e35f404510834a551610d6e871e75651ea381a8ba628af1dcf2b2be13af2eb6247290f")
	);
	assert_eq!(
		Simd512::digest(b"")[..],
		hex!("51a5af7e243cd9a5989f7792c880c4c3168c3d60c4518725fe5757d1f7a69c6366977eaba7905ce2da5d7cfd07773725f0935b55f3efb954996689a49b6d29e0")
	);
	assert_eq!(
		Luffa512::digest(b"")[..],
		hex!("6e7de4501189b3ca58f3ac114916654bbcd4922024b4cc1cd764acfe8ab4b7805df133eab345ffdb1c414564c924f48e0a301824e2ac4c34bd4efde2e43da90e")
	);
	assert_eq!(
		Luffa512::digest(b"abc")[..],
		hex!("f40245973e80d79d0f4b9b202ddd4505b81b8830501bea31612b5817aae387921dcefd808ca2c78020aff59345d6f91f0ee6b2eee113f0cbcf22b64381387e8a")
	);
	assert_eq!(
		Shavite512::digest(b"")[..],
		hex!("a485c1b2578459d1efc5dddd840bb0b4a650ac82fe68f58c4442ccda747da006b2d1dc6b4a4eb7d84ff91e1f466fef429d259acd995dddcad16fa545c7a6e5ba")
	);
	assert_eq!(
		Shavite512::digest(b"abc")[..],
		hex!("0fb0b216b377e6d95db1b6d9b6c8b59f08d4e29814071c8c0f827b32e68c15362f24bcc15ad6b1c925a03f00092997f7628cb47f27c9ad7a22e4c00fbb2c16e3")
	);
}

#[test]
fn test_sample_string_vectors() {
	assert_eq!(
		Blake512::digest(FOX)[..],
		hex!("1f7e26f63b6ad25a0896fd978fd050a1766391d2fd0471a77afb975e5034b7ad2d9ccf8dfb47abbbe656e1b82fbc634ba42ce186e8dc5e1ce09a885d41f43451")
	);
	assert_eq!(
		Fugue512::digest(FOX)[..],
		hex!("ee1e53e892bedd72d753bd4c9f704201708fb9b79177816051ebca1dc1af7ee928b8996df0862bbea24503be2781b1a036079a88627d4d248f2d0ec77b579b7f")
	);
	assert_eq!(
		Groestl512::digest(FOX)[..],
		hex!("badc1f70ccd69e0cf3760c3f93884289da84ec13c70b3d12a53a7a8a4a513f99715d46288f55e1dbf926e6d084a0538e4eebfc91cf2b21452921ccde9131718d")
	);
	assert_eq!(
		Panama::digest(FOX)[..],
		hex!("5f5ca355b90ac622b0aa7e654ef5f27e9e75111415b48b8afe3add1c6b89cba1")
	);
	assert_eq!(
		Skein512::digest(FOX)[..],
		hex!("94c2ae036dba8783d0b3f7d6cc111ff810702f5c77707999be7e1c9486ff238a7044de734293147359b4ac7e1d09cd247c351d69826b78dcddd951f0ef912713")
	);
	assert_eq!(Tiger::digest(b"abc")[..], hex!("2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93"));
	assert_eq!(
		Bmw512::digest(b"abc")[..],
		hex!("8f37bef264289f61f3d713944d394a7ac1dd95d3fe5787b5d325a310bc9cd18783852bfee12fbdeaab3ad9a67f2b654e348714aed3acf7d7548e95591af68046")
	);
}

#[test]
fn test_whirlpool_revisions_differ() {
	assert_ne!(Whirlpool::digest(b"")[..], Whirlpool1::digest(b"")[..]);
	assert_eq!(
		Whirlpool::digest(b"")[..],
		hex!("19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a73e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3")
	);
}
