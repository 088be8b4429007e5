#[derive(Debug, Clone)]
pub struct MaglevConfig {
    pub(crate) table_size: usize,
    pub(crate) offset_key: u64,
    pub(crate) skip_key: u64,
    pub(crate) lookup_key: u64,
}
