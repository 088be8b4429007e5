use std::iter;

use crate::{
    config::{HashKeys, TableSize},
    hash::hash,
};

/// One backend's visiting order over the lookup table slots.
///
/// `row[j] = (offset + j * skip) mod M`. Depends only on the backend
/// identifier, `M` and the keys, never on the other backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    offset: usize,
    skip: usize,
    row: Vec<usize>,
}

impl Permutation {
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn generate(id: &[u8], size: TableSize, keys: &HashKeys) -> Self {
        let m = size.get() as u64;

        let offset = hash(keys.offset, 0, id) % m;
        let skip = hash(keys.skip, 0, id) % (m - 1) + 1;

        // Both are below M, which fits in usize.
        Self::from_parts(offset as usize, skip as usize, size.get())
    }

    /// Builds a row from explicit parameters. Nothing is validated: with `size`
    /// not prime, or `skip` sharing a factor with it, the row repeats slots.
    #[must_use]
    pub fn from_parts(offset: usize, skip: usize, size: usize) -> Self {
        let row = iter::successors(Some(offset), |&slot| Some((slot + skip) % size))
            .take(size)
            .collect();

        Self { offset, skip, row }
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn skip(&self) -> usize {
        self.skip
    }

    #[inline]
    #[must_use]
    pub fn row(&self) -> &[usize] {
        &self.row
    }
}
