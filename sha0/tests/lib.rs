use digest::dev::fixed_reset_test;
use hex_literal::hex;
use sha0::{Digest, Sha0};

const VECTORS: &[(&[u8], [u8; 20])] = &[
    (b"", hex!("f96cea198ad1dd5617ac084a3d92c6107708c0ef")),
    (b"a", hex!("37f297772fae4cb1ba39b6cf9cf0381180bd62f2")),
    (b"abc", hex!("0164b8a914cd2a5e74c4f7ff082c4d97f1edf880")),
    (b"message digest", hex!("c1b0f222d150ebb9aa36a40cafdc8bcbed830b14")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        hex!("b40ce07a430cfd3c033039b9fe9afec95dc1bdcd"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("79e966f7a3a990df33e40e3d7f8f18d2caebadfa"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("4aa29d14d171522ece47bee8957e35a41f3e9cff"),
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        hex!("b03b401ba92d77666221e843feebf8c561cea5f7"),
    ),
];

#[test]
fn sha0_main() {
    for (i, (input, output)) in VECTORS.iter().enumerate() {
        if let Some(desc) = fixed_reset_test::<Sha0>(input, output) {
            panic!("\nFailed test №{}: {}\ninput:\t{:?}", i, desc, input);
        }
    }
}

#[test]
fn sha0_differs_from_sha1() {
    // SHA-1("abc") starts with a9993e36
    let out = Sha0::digest(b"abc");
    assert_ne!(out[..4], hex!("a9993e36"));
}

#[test]
fn sha0_1000_a_in_odd_chunks() {
    let msg = [b'a'; 1000];
    let mut h = Sha0::new();
    for chunk in msg.chunks(37) {
        h.update(chunk);
    }
    assert_eq!(h.finalize()[..], hex!("8a14112b4ba0c9544d50e2b7d06cdcbbf122824c"));
}
