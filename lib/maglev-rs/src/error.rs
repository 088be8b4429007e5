use crate::{config::ConfigError, flow::FlowKeyError, table::TableError};

pub type MaglevResult<T> = Result<T, MaglevError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("maglev error: {0}")]
pub enum MaglevError {
    Config(#[from] ConfigError),
    Table(#[from] TableError),
    Flow(#[from] FlowKeyError),
}
