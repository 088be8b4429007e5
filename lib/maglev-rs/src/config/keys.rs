use super::{
    DEFAULT_LOOKUP_KEY, DEFAULT_OFFSET_KEY, DEFAULT_SKIP_KEY,
    error::{ConfigError, ConfigResult},
};

/// SipHash `k0` values used by a table. `k1` is always zero.
///
/// `offset` and `skip` derive every backend's permutation, `lookup` hashes
/// flow keys. Tables built with equal keys agree slot for slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct HashKeys {
    pub offset: u64,
    pub skip: u64,
    pub lookup: u64,
}

impl HashKeys {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.offset == self.skip || self.offset == self.lookup || self.skip == self.lookup {
            return Err(ConfigError::NonDistinctKeys);
        }

        Ok(())
    }
}

impl Default for HashKeys {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET_KEY,
            skip: DEFAULT_SKIP_KEY,
            lookup: DEFAULT_LOOKUP_KEY,
        }
    }
}
