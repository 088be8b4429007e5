use std::num::ParseIntError;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
pub struct MaglevConfig {
    #[arg(
        short = 'M',
        long,
        default_value_t = super::DEFAULT_TABLE_SIZE,
        help = "Maglev lookup table size (must be prime)"
    )]
    pub(crate) table_size: usize,

    #[arg(
        long,
        default_value = "0xdeadbabe",
        value_parser = parse_key,
        help = "SipHash key deriving each backend's permutation offset"
    )]
    pub(crate) offset_key: u64,

    #[arg(
        long,
        default_value = "0xdeadbeef",
        value_parser = parse_key,
        help = "SipHash key deriving each backend's permutation skip"
    )]
    pub(crate) skip_key: u64,

    #[arg(
        long,
        default_value = "0xdeadc0de",
        value_parser = parse_key,
        help = "SipHash key for flow key lookups"
    )]
    pub(crate) lookup_key: u64,
}

fn parse_key(arg: &str) -> Result<u64, ParseIntError> {
    match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => arg.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LOOKUP_KEY, DEFAULT_TABLE_SIZE, HashKeys};

    #[test]
    fn defaults_match_plain_config() {
        let config = MaglevConfig::try_parse_from(["maglev"]).unwrap();

        assert_eq!(config.table_size, DEFAULT_TABLE_SIZE);
        assert_eq!(config.hash_keys(), HashKeys::default());
        assert_eq!(config.lookup_key, DEFAULT_LOOKUP_KEY);
    }

    #[test]
    fn parses_hex_and_decimal_keys() {
        let config = MaglevConfig::try_parse_from([
            "maglev",
            "-M",
            "13",
            "--offset-key",
            "0x10",
            "--skip-key",
            "17",
            "--lookup-key",
            "0XfF",
        ])
        .unwrap();

        assert_eq!(config.table_size, 13);
        assert_eq!(
            config.hash_keys(),
            HashKeys {
                offset: 16,
                skip: 17,
                lookup: 255,
            }
        );
    }

    #[test]
    fn rejects_garbage_key() {
        assert!(MaglevConfig::try_parse_from(["maglev", "--skip-key", "0xzz"]).is_err());
    }
}
