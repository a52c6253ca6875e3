//! FIPS 180-4 example vectors, rendered as lowercase hex.

use convkit_crypto_core::digest::{compute_hash, HashAlgorithm, RingProvider};

const TWO_BLOCK: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

struct ShaVector {
    algorithm: HashAlgorithm,
    input: &'static str,
    hex: &'static str,
}

const VECTORS: [ShaVector; 11] = [
    ShaVector {
        algorithm: HashAlgorithm::Sha1,
        input: "abc",
        hex: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha1,
        input: "",
        hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha1,
        input: TWO_BLOCK,
        hex: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha256,
        input: "abc",
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha256,
        input: "",
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha256,
        input: TWO_BLOCK,
        hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha384,
        input: "abc",
        hex: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
              8086072ba1e7cc2358baeca134c825a7",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha384,
        input: "",
        hex: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
              274edebfe76f65fbd51ad2f14898b95b",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha512,
        input: "abc",
        hex: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
              2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    ShaVector {
        algorithm: HashAlgorithm::Sha512,
        input: "",
        hex: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
              47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    // Non-ASCII input is hashed as UTF-8.
    ShaVector {
        algorithm: HashAlgorithm::Sha256,
        input: "héllo wörld",
        hex: "a1003f7d04a4115711d0b48a2eaf1359ce565d2d2a6fd65098dfcffadeeef59f",
    },
];

#[test]
fn fips_180_vectors() {
    for v in &VECTORS {
        let hex = compute_hash(&RingProvider, v.input, v.algorithm).unwrap();
        assert_eq!(hex, v.hex, "{} of {:?}", v.algorithm, v.input);
    }
}
