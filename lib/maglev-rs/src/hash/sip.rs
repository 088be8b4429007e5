//! SipHash-2-4 over 64-bit state words.
//!
//! Two compression rounds per 8-byte block, four finalization rounds.

const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

#[inline]
const fn rotl(x: u64, b: u32) -> u64 {
    (x << b) | (x >> (64 - b))
}

/// Packs up to 8 bytes little-endian: byte `i` lands at bit `8 * i`.
#[inline]
pub(super) fn load_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl State {
    #[inline]
    pub(super) const fn new(k0: u64, k1: u64) -> Self {
        Self {
            v0: k0 ^ C0,
            v1: k1 ^ C1,
            v2: k0 ^ C2,
            v3: k1 ^ C3,
        }
    }

    #[inline]
    fn round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = rotl(self.v1, 13) ^ self.v0;
        self.v0 = rotl(self.v0, 32);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = rotl(self.v3, 16) ^ self.v2;

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = rotl(self.v3, 21) ^ self.v0;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = rotl(self.v1, 17) ^ self.v2;
        self.v2 = rotl(self.v2, 32);
    }

    #[inline]
    pub(super) fn compress(&mut self, m: u64) {
        self.v3 ^= m;
        self.round();
        self.round();
        self.v0 ^= m;
    }

    /// `last` is the final block: message length in the top byte, trailing bytes below.
    #[inline]
    pub(super) fn finish(mut self, last: u64) -> u64 {
        self.compress(last);

        self.v2 ^= 0xff;
        self.round();
        self.round();
        self.round();
        self.round();

        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

/// SipHash-2-4 of `data` under the 128-bit key `(k0, k1)`.
#[must_use]
pub fn hash(k0: u64, k1: u64, data: &[u8]) -> u64 {
    let mut state = State::new(k0, k1);

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        state.compress(load_le(block));
    }

    let last = ((data.len() as u64) << 56) | load_le(blocks.remainder());
    state.finish(last)
}
