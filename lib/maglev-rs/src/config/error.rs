pub(crate) type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: table size {0} is smaller than 2")]
    TableSizeTooSmall(usize),

    #[error("config error: table size {0} is not prime")]
    TableSizeNotPrime(usize),

    #[error("config error: offset, skip and lookup keys must be distinct")]
    NonDistinctKeys,
}
