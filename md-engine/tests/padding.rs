use digest::{generic_array::GenericArray, typenum::U65, Digest, FixedOutputReset};
use md_engine::{Block, BlockTransform, LengthField, MdHasher, BLOCK_LEN};

/// Remembers the last block it was fed and how many blocks it saw.
#[derive(Clone, Copy)]
struct Recorder<const BE: bool, const WIDE: bool> {
    last: [u8; BLOCK_LEN],
    blocks: u8,
}

impl<const BE: bool, const WIDE: bool> BlockTransform for Recorder<BE, WIDE> {
    type OutputSize = U65;
    const INIT: Self = Recorder {
        last: [0; BLOCK_LEN],
        blocks: 0,
    };
    const LENGTH: LengthField = match (BE, WIDE) {
        (_, true) => LengthField::Be256,
        (true, false) => LengthField::Be64,
        (false, false) => LengthField::Le64,
    };
    const NAME: &'static str = "Recorder";

    fn compress(&mut self, block: &Block) {
        self.last.copy_from_slice(block);
        self.blocks += 1;
    }

    fn write_output(&self, out: &mut GenericArray<u8, U65>) {
        out[..BLOCK_LEN].copy_from_slice(&self.last);
        out[BLOCK_LEN] = self.blocks;
    }
}

type Le = MdHasher<Recorder<false, false>>;
type Be = MdHasher<Recorder<true, false>>;
type Wide = MdHasher<Recorder<true, true>>;

fn run<D: Digest>(len: usize) -> (Vec<u8>, u8) {
    let msg = vec![0xAAu8; len];
    let out = D::digest(&msg);
    (out[..BLOCK_LEN].to_vec(), out[BLOCK_LEN])
}

#[test]
fn empty_message_single_block() {
    let (block, count) = run::<Le>(0);
    assert_eq!(count, 1);
    assert_eq!(block[0], 0x80);
    assert!(block[1..].iter().all(|&b| b == 0));
}

#[test]
fn le64_length_fits_in_residue() {
    let (block, count) = run::<Le>(55);
    assert_eq!(count, 1);
    assert_eq!(block[55], 0x80);
    assert_eq!(block[56..], (55u64 * 8).to_le_bytes());
}

#[test]
fn be64_length_needs_extra_block() {
    let (block, count) = run::<Be>(56);
    assert_eq!(count, 2);
    assert!(block[..56].iter().all(|&b| b == 0));
    assert_eq!(block[56..], (56u64 * 8).to_be_bytes());
}

#[test]
fn full_block_then_padding_block() {
    let (block, count) = run::<Be>(64);
    assert_eq!(count, 2);
    assert_eq!(block[0], 0x80);
    assert_eq!(block[56..], 512u64.to_be_bytes());
}

#[test]
fn be256_boundary() {
    let (block, count) = run::<Wide>(31);
    assert_eq!(count, 1);
    assert_eq!(block[31], 0x80);
    assert!(block[32..62].iter().all(|&b| b == 0));
    assert_eq!(block[62..], (31u16 * 8).to_be_bytes());

    let (block, count) = run::<Wide>(32);
    assert_eq!(count, 2);
    assert!(block[..62].iter().all(|&b| b == 0));
    assert_eq!(block[62..], (32u16 * 8).to_be_bytes());
}

#[test]
fn split_updates_match_single_update() {
    let msg: Vec<u8> = (0..300u32).map(|i| (i * 7) as u8).collect();
    let whole = Le::digest(&msg);
    for step in [1, 3, 63, 64, 65, 127] {
        let mut hasher = Le::new();
        for chunk in msg.chunks(step) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), whole, "chunk size {}", step);
    }
}

#[test]
fn finalize_reset_restores_initial_state() {
    let mut hasher = Be::new();
    hasher.update(&[1u8; 100]);
    let first = hasher.finalize_reset();
    assert_eq!(first[BLOCK_LEN], 2);

    hasher.update(b"abc");
    assert_eq!(hasher.finalize_fixed_reset(), Be::digest(b"abc"));
    Digest::update(&mut hasher, b"abc");
    assert_eq!(hasher.finalize(), Be::digest(b"abc"));
}
