use crate::consts::Round;
use md_engine::Block;

pub(crate) const DIGEST_BUF_LEN: usize = 4;

fn line(h: &[u32; DIGEST_BUF_LEN], x: &[u32; 16], rounds: &[Round]) -> [u32; DIGEST_BUF_LEN] {
    let [mut a, mut b, mut c, mut d] = *h;
    for round in rounds {
        for i in 0..16 {
            let t = a
                .wrapping_add((round.f)(b, c, d))
                .wrapping_add(x[round.r[i]])
                .wrapping_add(round.k)
                .rotate_left(round.s[i]);
            (a, b, c, d) = (d, t, b, c);
        }
    }
    [a, b, c, d]
}

/// Four-word double-pipe compression shared by RIPEMD and RIPEMD-128.
pub(crate) fn compress(
    h: &mut [u32; DIGEST_BUF_LEN],
    block: &Block,
    left: &[Round],
    right: &[Round],
) {
    let mut x = [0u32; 16];
    for (o, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [al, bl, cl, dl] = line(h, &x, left);
    let [ar, br, cr, dr] = line(h, &x, right);

    let t = h[1].wrapping_add(cl).wrapping_add(dr);
    h[1] = h[2].wrapping_add(dl).wrapping_add(ar);
    h[2] = h[3].wrapping_add(al).wrapping_add(br);
    h[3] = h[0].wrapping_add(bl).wrapping_add(cr);
    h[0] = t;
}
