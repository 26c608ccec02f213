use ascii85::{
    add_identifiers, decode, decode_bare, encode, encode_with, remove_identifiers, Decoder, Encoder,
    Error, State,
};
use hex_literal::hex;
use proptest::prelude::*;

const VECTORS: &[(&[u8], &[u8])] = &[
    (b"", b"<~~>"),
    (b"h", b"<~BE~>"),
    (b"he", b"<~BOq~>"),
    (b"hel", b"<~BOtu~>"),
    (b"hell", b"<~BOu!r~>"),
    (b"hello", b"<~BOu!rDZ~>"),
    (&hex!("00000000"), b"<~z~>"),
    (&hex!("0000000078"), b"<~zGQ~>"),
    (b"    ", b"<~+<VdL~>"),
    (&hex!("ffffffff"), b"<~s8W-!~>"),
    (b"Man is distinguished", b"<~9jqo^BlbD-BleB1DJ+*+F(f,q~>"),
    (
        b"The quick brown fox jumps over the lazy dog",
        b"<~<+ohcEHPu*CER),Dg-(AAoDo:C3=B4F!,CEATAo8BOr<&@=!2AA8c)~>",
    ),
];

#[test]
fn vectors() {
    for &(data, encoded) in VECTORS {
        assert_eq!(encode(data), encoded);
        assert_eq!(decode(encoded).unwrap(), data);
        if data.is_empty() {
            continue;
        }
        assert_eq!(decode_bare(remove_identifiers(encoded)).unwrap(), data);
    }
}

#[test]
fn identifiers() {
    assert_eq!(add_identifiers(b"BE"), b"<~BE~>");
    assert_eq!(add_identifiers(b""), b"<~~>");
    assert_eq!(remove_identifiers(b"<~BE~>"), b"BE");
    assert_eq!(remove_identifiers(b"<~~>"), b"<~~>");
    assert_eq!(remove_identifiers(b"<~BE"), b"<~BE");
    assert_eq!(remove_identifiers(b"BE~>"), b"BE~>");
}

#[test]
fn space_abbreviation() {
    let encoder = Encoder::new().with_space_abbreviation(true);
    assert_eq!(encode_with(encoder.clone(), b"    "), b"<~y~>");
    assert_eq!(encode_with(encoder, b"     "), b"<~y+9~>");
    assert_eq!(decode(b"<~y+9~>").unwrap(), b"     ");
    assert_eq!(decode(b"<~zy~>").unwrap(), b"\0\0\0\0    ");
}

#[test]
fn line_width() {
    let encoded = encode_with(Encoder::new().with_width(10), b"Man is distinguished");
    assert_eq!(encoded, b"<~9jqo^Blb\nD-BleB1DJ+\n*+F(f,q~>");
    assert_eq!(decode(&encoded).unwrap(), b"Man is distinguished");

    // delimiters stay whole
    let encoded = encode_with(Encoder::new().with_width(5), b"hell");
    assert_eq!(encoded, b"<~BOu\n!r~>");
}

#[test]
fn streaming_encoder() {
    let mut encoder = Encoder::new();
    let mut out = Vec::new();
    for b in b"Man is distinguished" {
        encoder.encode(core::slice::from_ref(b), &mut out);
    }
    encoder.finish(&mut out);
    encoder.encode(b"ignored", &mut out);
    encoder.finish(&mut out);
    assert_eq!(out, b"<~9jqo^BlbD-BleB1DJ+*+F(f,q~>");
}

#[test]
fn whitespace_and_surroundings() {
    assert_eq!(decode(b"<~BOu!r D\r\n\tZ~>").unwrap(), b"hello");
    assert_eq!(decode(b"junk<~BE~>more<~BE~>").unwrap(), b"hh");
    assert_eq!(decode(b"a<b").unwrap(), b"");
}

#[test]
fn preserve_unencoded() {
    let run = |input: &[u8]| {
        let mut decoder = Decoder::preserving();
        let mut out = Vec::new();
        for &b in input {
            decoder.push(b, &mut out).unwrap();
        }
        decoder.finish(&mut out).unwrap();
        out
    };
    assert_eq!(run(b"a<b<~BE~>c"), b"a<bhc");
    assert_eq!(run(b"<<~BE~>"), b"<h");
    assert_eq!(run(b"x<"), b"x<");
}

#[test]
fn decoder_states() {
    let mut decoder = Decoder::new();
    let mut out = Vec::new();
    let mut step = |b: u8, decoder: &mut Decoder| {
        decoder.push(b, &mut out).unwrap();
        decoder.state()
    };
    assert_eq!(step(b'<', &mut decoder), State::MaybeStarting);
    assert_eq!(step(b'~', &mut decoder), State::Decoding);
    assert_eq!(step(b'B', &mut decoder), State::Decoding);
    assert_eq!(decoder.count(), 1);
    assert_eq!(step(b'E', &mut decoder), State::Decoding);
    assert_eq!(step(b'~', &mut decoder), State::MaybeStopping);
    assert_eq!(step(b'>', &mut decoder), State::NotDecoding);
    assert_eq!(decoder.offset(), 6);
    assert_eq!(out, b"h");
}

#[test]
fn malformed_input() {
    assert_eq!(decode(b"<~BO~x"), Err(Error::MissingTerminator { offset: 5 }));
    assert_eq!(
        decode(b"<~BOv~>"),
        Err(Error::InvalidDigit {
            byte: b'v',
            offset: 4
        })
    );
    assert_eq!(
        decode(b"<~Bz~>"),
        Err(Error::InvalidDigit {
            byte: b'z',
            offset: 3
        })
    );
    assert_eq!(decode(b"<~s8W-\"~>"), Err(Error::TupleOverflow { offset: 6 }));
    assert_eq!(decode(b"<~uuuu~>"), Err(Error::TupleOverflow { offset: 7 }));
    assert_eq!(decode(b"<~BOu"), Err(Error::UnterminatedSection { offset: 5 }));
    assert_eq!(decode(b"<~BOu~"), Err(Error::UnterminatedSection { offset: 6 }));
    assert_eq!(decode(b"<~B~>"), Err(Error::TruncatedGroup { offset: 4 }));
    assert_eq!(decode_bare(b"B"), Err(Error::TruncatedGroup { offset: 4 }));
    assert_eq!(Error::TupleOverflow { offset: 6 }.offset(), 6);
}

#[test]
fn whitespace_set() {
    assert_eq!(decode(b"<~\0B\tE\x0b\x0c~>").unwrap(), b"h");
    assert_eq!(
        decode(b"<~\x1cBE~>"),
        Err(Error::InvalidDigit {
            byte: 0x1c,
            offset: 2
        })
    );
}

proptest! {
    #[test]
    fn round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        width in 0usize..40,
        spaces in any::<bool>(),
        step in 1usize..9,
    ) {
        let encoder = Encoder::new().with_width(width).with_space_abbreviation(spaces);
        let encoded = encode_with(encoder.clone(), &data);

        let mut chunked = encoder;
        let mut out = Vec::new();
        for chunk in data.chunks(step) {
            chunked.encode(chunk, &mut out);
        }
        chunked.finish(&mut out);
        prop_assert_eq!(&out, &encoded);

        if width >= 2 {
            prop_assert!(encoded.split(|&b| b == b'\n').all(|line| line.len() <= width));
        }
        prop_assert_eq!(decode(&encoded).unwrap(), data);
    }
}
