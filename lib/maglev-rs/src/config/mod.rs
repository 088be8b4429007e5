mod common;
mod error;
mod keys;
mod size;

#[cfg(feature = "clap")]
mod config_clap;

#[cfg(not(feature = "clap"))]
mod config_noclap;

pub use error::ConfigError;
pub use keys::HashKeys;
pub use size::TableSize;

#[cfg(feature = "clap")]
pub use config_clap::MaglevConfig;

#[cfg(not(feature = "clap"))]
pub use config_noclap::MaglevConfig;

pub const DEFAULT_TABLE_SIZE: usize = 65537;

pub const DEFAULT_OFFSET_KEY: u64 = 0xdead_babe;
pub const DEFAULT_SKIP_KEY: u64 = 0xdead_beef;
pub const DEFAULT_LOOKUP_KEY: u64 = 0xdead_c0de;
