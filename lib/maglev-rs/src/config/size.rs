use std::fmt;

use super::error::{ConfigError, ConfigResult};
use crate::util;

/// A lookup table size that is prime.
///
/// Every skip in `[1, M-1]` is then coprime with `M`, so each backend's
/// permutation row covers all `M` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableSize(usize);

impl TableSize {
    pub fn new(size: usize) -> ConfigResult<Self> {
        if size < 2 {
            return Err(ConfigError::TableSizeTooSmall(size));
        }

        if !util::is_prime(size) {
            return Err(ConfigError::TableSizeNotPrime(size));
        }

        Ok(Self(size))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for TableSize {
    type Error = ConfigError;

    fn try_from(size: usize) -> ConfigResult<Self> {
        Self::new(size)
    }
}

impl fmt::Display for TableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
