use crate::tables::TableBundle;
use md_engine::Block;

type State = [u64; 8];

/// One round of the internal cipher: substitution, cyclic permutation and
/// diffusion through the lookup tables, then key addition.
#[inline(always)]
fn round(c: &[[u64; 256]; 8], src: &State, key: &State) -> State {
    let mut out = *key;
    for (i, o) in out.iter_mut().enumerate() {
        for (k, table) in c.iter().enumerate() {
            let byte = (src[(i + 8 - k) % 8] >> (56 - 8 * k)) as u8;
            *o ^= table[byte as usize];
        }
    }
    out
}

pub(crate) fn compress(tables: &TableBundle, state: &mut State, block: &Block) {
    let mut m = [0u64; 8];
    for (o, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *o = u64::from_be_bytes(word);
    }

    let mut key = *state;
    let mut s = [0u64; 8];
    for i in 0..8 {
        s[i] = m[i] ^ key[i];
    }

    for &rc in tables.rc.iter() {
        let mut round_key = [0u64; 8];
        round_key[0] = rc;
        key = round(&tables.c, &key, &round_key);
        s = round(&tables.c, &s, &key);
    }

    for i in 0..8 {
        state[i] ^= s[i] ^ m[i];
    }
}
