use std::{net::AddrParseError, num::ParseIntError};

pub(crate) type FlowKeyResult<T> = Result<T, FlowKeyError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowKeyError {
    #[error("flow error: missing {0}")]
    MissingField(&'static str),

    #[error("flow error: invalid address: {0}")]
    InvalidAddr(#[from] AddrParseError),

    #[error("flow error: invalid port: {0}")]
    InvalidPort(ParseIntError),

    #[error("flow error: invalid protocol {0:?}")]
    InvalidProto(String),

    #[error("flow error: unexpected trailing field")]
    TrailingField,
}
