use digest::dev::fixed_reset_test;
use hex_literal::hex;
use md4::{Digest, Md4};

const VECTORS: &[(&[u8], [u8; 16])] = &[
    (b"", hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
    (b"a", hex!("bde52cb31de33e46245e05fbdbd6fb24")),
    (b"abc", hex!("a448017aaf21d8525fc10ae87aa6729d")),
    (b"message digest", hex!("d9130a8164549fe818874806e1c7014b")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        hex!("d79e1c308aa5bbcdeea8ed63df412da9"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("043f8582f241db351ce627e153e7f0e4"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("e33b4ddc9c38f2199c3e7b164fcc0536"),
    ),
];

#[test]
fn md4_main() {
    for (i, (input, output)) in VECTORS.iter().enumerate() {
        if let Some(desc) = fixed_reset_test::<Md4>(input, output) {
            panic!("\nFailed test №{}: {}\ninput:\t{:?}", i, desc, input);
        }
    }
}

#[test]
fn md4_1000_a() {
    let mut h = Md4::new();
    for _ in 0..100 {
        h.update(&[b'a'; 10]);
    }
    assert_eq!(h.finalize()[..], hex!("5f1bf26a8067c9159b91f1440f7c9e8a"));
}

#[test]
fn md4_debug_names_algorithm() {
    let h = Md4::new();
    assert!(format!("{:?}", h).starts_with("Md4"));
}
