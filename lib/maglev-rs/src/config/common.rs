use super::{
    DEFAULT_LOOKUP_KEY, DEFAULT_OFFSET_KEY, DEFAULT_SKIP_KEY, DEFAULT_TABLE_SIZE, HashKeys,
    MaglevConfig, TableSize,
    error::ConfigResult,
};

impl MaglevConfig {
    #[must_use]
    pub fn new(table_size: usize) -> Self {
        Self {
            table_size,
            offset_key: DEFAULT_OFFSET_KEY,
            skip_key: DEFAULT_SKIP_KEY,
            lookup_key: DEFAULT_LOOKUP_KEY,
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: HashKeys) -> Self {
        self.offset_key = keys.offset;
        self.skip_key = keys.skip;
        self.lookup_key = keys.lookup;
        self
    }

    #[must_use]
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    #[must_use]
    pub fn hash_keys(&self) -> HashKeys {
        HashKeys {
            offset: self.offset_key,
            skip: self.skip_key,
            lookup: self.lookup_key,
        }
    }

    pub(crate) fn validate(&self) -> ConfigResult<(TableSize, HashKeys)> {
        let size = TableSize::new(self.table_size)?;
        let keys = self.hash_keys();
        keys.validate()?;

        Ok((size, keys))
    }
}

impl Default for MaglevConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}
