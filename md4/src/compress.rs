use md_engine::Block;

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

const ORDER2: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const ORDER3: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

const SHIFT1: [u32; 4] = [3, 7, 11, 19];
const SHIFT2: [u32; 4] = [3, 5, 9, 13];
const SHIFT3: [u32; 4] = [3, 9, 11, 15];

const K2: u32 = 0x5A82_7999;
const K3: u32 = 0x6ED9_EBA1;

pub(crate) fn compress(state: &mut [u32; 4], block: &Block) {
    let mut x = [0u32; 16];
    for (o, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    // each step rotates the register roles: (a, b, c, d) <- (d, a', b, c)
    for i in 0..16 {
        let t = a.wrapping_add(f(b, c, d)).wrapping_add(x[i]);
        (a, b, c, d) = (d, t.rotate_left(SHIFT1[i % 4]), b, c);
    }
    for i in 0..16 {
        let t = a
            .wrapping_add(g(b, c, d))
            .wrapping_add(x[ORDER2[i]])
            .wrapping_add(K2);
        (a, b, c, d) = (d, t.rotate_left(SHIFT2[i % 4]), b, c);
    }
    for i in 0..16 {
        let t = a
            .wrapping_add(h(b, c, d))
            .wrapping_add(x[ORDER3[i]])
            .wrapping_add(K3);
        (a, b, c, d) = (d, t.rotate_left(SHIFT3[i % 4]), b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
