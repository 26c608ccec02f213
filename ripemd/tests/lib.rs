use digest::dev::fixed_reset_test;
use hex_literal::hex;
use ripemd::{Digest, Ripemd, Ripemd128, Ripemd160};

const RIPEMD: &[(&[u8], &[u8])] = &[
    (b"", &hex!("9f73aa9b372a9dacfb86a6108852e2d9")),
    (b"a", &hex!("486f74f790bc95ef7963cd2382b4bbc9")),
    (b"abc", &hex!("3f14bad4c2f9b0ea805e5485d3d6882d")),
    (b"message digest", &hex!("5f5c7ebe1abbb3c7036482942d5f9d49")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        &hex!("ff6e1547494251a1cca6f005a6eaa2b4"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        &hex!("ff418a5aed3763d8f2ddf88a29e62486"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        &hex!("dfd6b45f60fe79bbbde87c6bfc6580a5"),
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        &hex!("f5116fcd915f16e68df17b10b3e8a7d4"),
    ),
];

const RIPEMD128: &[(&[u8], &[u8])] = &[
    (b"", &hex!("cdf26213a150dc3ecb610f18f6b38b46")),
    (b"a", &hex!("86be7afa339d0fc7cfc785e72f578d33")),
    (b"abc", &hex!("c14a12199c66e4ba84636b0f69144c77")),
    (b"message digest", &hex!("9e327b3d6e523062afc1132d7df9d1b8")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        &hex!("fd2aa607f71dc8f510714922b371834e"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        &hex!("d1e959eb179c911faea4624c60c5c702"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        &hex!("3f45ef194732c2dbb2c4a2c769795fa3"),
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        &hex!("3fa9b57f053c053fbe2735b2380db596"),
    ),
];

const RIPEMD160: &[(&[u8], &[u8])] = &[
    (b"", &hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")),
    (b"a", &hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")),
    (b"abc", &hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")),
    (b"message digest", &hex!("5d0689ef49d2fae572b881b123a85ffa21595f36")),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        &hex!("f71c27109c692c1b56bbdceb5b9d2865b3708dbc"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        &hex!("b0e20b6e3116640286ed3a87a5713079b21f5189"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        &hex!("9b752e45573d4b39f4dbd3323cab82bf63326bfb"),
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        &hex!("37f332f68db77bd9d7edd4969571ad671cf9dd3b"),
    ),
];

fn check<D>(vectors: &[(&[u8], &[u8])])
where
    D: digest::FixedOutputReset + digest::Update + digest::HashMarker + Default + Clone + core::fmt::Debug,
{
    for (i, (input, output)) in vectors.iter().enumerate() {
        if let Some(desc) = fixed_reset_test::<D>(input, output) {
            panic!("\nFailed test №{}: {}\ninput:\t{:?}", i, desc, input);
        }
    }
}

#[test]
fn ripemd_main() {
    check::<Ripemd>(RIPEMD);
}

#[test]
fn ripemd128_main() {
    check::<Ripemd128>(RIPEMD128);
}

#[test]
fn ripemd160_main() {
    check::<Ripemd160>(RIPEMD160);
}

#[test]
fn long_input_across_blocks() {
    let msg = [b'a'; 1000];
    assert_eq!(
        Ripemd::digest(msg)[..],
        hex!("21102f6cc9d834fbf38807bf0a516382")
    );
    assert_eq!(
        Ripemd128::digest(msg)[..],
        hex!("a1fdefbd1837244d57fce707e2078bd7")
    );
    let mut h = Ripemd160::new();
    for chunk in msg.chunks(61) {
        h.update(chunk);
    }
    assert_eq!(
        h.finalize()[..],
        hex!("aa69deee9a8922e92f8105e007f76110f381e9cf")
    );
}

#[test]
fn original_ripemd_is_distinct_from_ripemd128() {
    assert_ne!(Ripemd::digest(b"abc"), Ripemd128::digest(b"abc"));
}
