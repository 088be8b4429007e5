use std::hash::{BuildHasher, Hasher};

use super::sip::{State, load_le};

/// Incremental SipHash-2-4.
///
/// Any split of the input across `write` calls yields the same value as
/// [`hash`](super::hash) over the concatenated bytes.
#[derive(Debug, Clone)]
pub struct SipHasher {
    state: State,
    tail: u64,
    ntail: usize,
    length: usize,
}

impl SipHasher {
    #[must_use]
    pub const fn new_with_keys(k0: u64, k1: u64) -> Self {
        Self {
            state: State::new(k0, k1),
            tail: 0,
            ntail: 0,
            length: 0,
        }
    }
}

impl Hasher for SipHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.length = self.length.wrapping_add(bytes.len());

        let mut bytes = bytes;
        if self.ntail != 0 {
            let fill = (8 - self.ntail).min(bytes.len());
            let (head, rest) = bytes.split_at(fill);

            self.tail |= load_le(head) << (8 * self.ntail);
            self.ntail += fill;
            if self.ntail < 8 {
                return;
            }

            self.state.compress(self.tail);
            self.tail = 0;
            self.ntail = 0;
            bytes = rest;
        }

        let mut blocks = bytes.chunks_exact(8);
        for block in &mut blocks {
            self.state.compress(load_le(block));
        }

        let rem = blocks.remainder();
        self.tail = load_le(rem);
        self.ntail = rem.len();
    }

    fn finish(&self) -> u64 {
        self.state
            .finish(((self.length as u64) << 56) | self.tail)
    }
}

/// Builds [`SipHasher`]s sharing one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipBuildHasher {
    k0: u64,
    k1: u64,
}

impl SipBuildHasher {
    #[must_use]
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }
}

impl BuildHasher for SipBuildHasher {
    type Hasher = SipHasher;

    #[inline]
    fn build_hasher(&self) -> SipHasher {
        SipHasher::new_with_keys(self.k0, self.k1)
    }
}
