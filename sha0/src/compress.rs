use md_engine::Block;

const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Expand one block into the 80-word schedule.
///
/// No rotation is applied to the XOR of the four taps.
fn schedule(block: &Block) -> [u32; 80] {
    let mut w = [0u32; 80];
    for (o, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..80 {
        w[i] = w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16];
    }
    w
}

pub(crate) fn compress(state: &mut [u32; 5], block: &Block) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let f = match i / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };
        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[i / 20])
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *s = s.wrapping_add(v);
    }
}
