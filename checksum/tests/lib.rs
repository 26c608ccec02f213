use checksum::{Adler32, Checksum, Crc16, Crc32, Crc64, Crc8};
use proptest::prelude::*;

const CHECK: &[u8] = b"123456789";
const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn check_values() {
    assert_eq!(Crc8::checksum(CHECK), 0xF4);
    assert_eq!(Crc16::checksum(CHECK), 0xBB3D);
    assert_eq!(Crc32::checksum(CHECK), 0xCBF4_3926);
    assert_eq!(Crc64::checksum(CHECK), 0x995D_C9BB_DF19_39FA);
    assert_eq!(Adler32::checksum(CHECK), 0x091E_01DE);
}

#[test]
fn empty_input() {
    assert_eq!(Crc8::checksum(b""), 0);
    assert_eq!(Crc16::checksum(b""), 0);
    assert_eq!(Crc32::checksum(b""), 0);
    assert_eq!(Crc64::checksum(b""), 0);
    assert_eq!(Adler32::checksum(b""), 1);
}

#[test]
fn short_strings() {
    assert_eq!(Crc8::checksum(b"abc"), 0x5F);
    assert_eq!(Crc16::checksum(b"abc"), 0x9738);
    assert_eq!(Crc32::checksum(b"abc"), 0x3524_41C2);
    assert_eq!(Crc64::checksum(b"abc"), 0x2CD8_094A_1A27_7627);
    assert_eq!(Adler32::checksum(b"abc"), 0x024D_0127);

    assert_eq!(Crc8::checksum(FOX), 0xC1);
    assert_eq!(Crc16::checksum(FOX), 0xFCDF);
    assert_eq!(Crc32::checksum(FOX), 0x414F_A339);
    assert_eq!(Crc64::checksum(FOX), 0x5B5E_B8C2_E54A_A1C4);
    assert_eq!(Adler32::checksum(FOX), 0x5BDC_0FDA);
}

#[test]
fn adler32_reduces_long_runs() {
    assert_eq!(Adler32::checksum(&[0xFF; 6000]), 0xA497_59EA);
}

#[test]
fn all_byte_values() {
    let data: Vec<u8> = (0..1024).map(|i| i as u8).collect();
    assert_eq!(Crc8::checksum(&data), 0x12);
    assert_eq!(Crc16::checksum(&data), 0x3840);
    assert_eq!(Crc32::checksum(&data), 0xB70B_4C26);
    assert_eq!(Crc64::checksum(&data), 0xD51F_B58D_C789_C400);
    assert_eq!(Adler32::checksum(&data), 0xE4C9_FE10);
}

#[test]
fn finalize_does_not_consume() {
    let mut crc = Crc64::new();
    crc.update(b"1234");
    let partial = crc.finalize();
    assert_eq!(partial, Crc64::checksum(b"1234"));
    crc.update(b"56789");
    assert_eq!(crc.finalize(), 0x995D_C9BB_DF19_39FA);
}

#[test]
fn reset_restores_initial_state() {
    let mut crc = Crc32::new();
    crc.update(b"garbage");
    crc.reset();
    crc.update(CHECK);
    assert_eq!(crc.finalize(), Crc32::checksum(CHECK));

    let mut adler = Adler32::new();
    adler.update(b"garbage");
    adler.reset();
    assert_eq!(adler.finalize(), 1);
}

fn chunked<C: Checksum>(data: &[u8], step: usize) -> C::Output {
    let mut c = C::new();
    for chunk in data.chunks(step.max(1)) {
        c.update(chunk);
    }
    c.finalize()
}

proptest! {
    #[test]
    fn streaming_matches_one_shot(data in proptest::collection::vec(any::<u8>(), 0..2048), step in 1usize..97) {
        prop_assert_eq!(chunked::<Crc8>(&data, step), Crc8::checksum(&data));
        prop_assert_eq!(chunked::<Crc16>(&data, step), Crc16::checksum(&data));
        prop_assert_eq!(chunked::<Crc32>(&data, step), Crc32::checksum(&data));
        prop_assert_eq!(chunked::<Crc64>(&data, step), Crc64::checksum(&data));
        prop_assert_eq!(chunked::<Adler32>(&data, step), Adler32::checksum(&data));
    }
}
