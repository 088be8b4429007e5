//! Maglev consistent hashing.
//!
//! Backends are spread over a prime-sized lookup table by per-backend
//! permutations derived with SipHash-2-4. Adding or removing a backend
//! moves few slots owned by the others, and any two tables built from the
//! same backends, size and keys are identical.

mod config;
mod error;
mod flow;
mod hash;
mod table;
mod util;

pub use crate::{
    config::{
        ConfigError, DEFAULT_LOOKUP_KEY, DEFAULT_OFFSET_KEY, DEFAULT_SKIP_KEY, DEFAULT_TABLE_SIZE,
        HashKeys, MaglevConfig, TableSize,
    },
    error::{MaglevError, MaglevResult},
    flow::{FlowKey, FlowKeyError, IP_PROTO_TCP, IP_PROTO_UDP},
    hash::{SipBuildHasher, SipHasher, hash},
    table::{Maglev, Permutation, TableError, populate},
};
