mod error;

use std::{fmt, net::Ipv4Addr, str::FromStr};

pub use error::FlowKeyError;

use error::FlowKeyResult;

pub const IP_PROTO_TCP: u8 = 6;
pub const IP_PROTO_UDP: u8 = 17;

/// Connection 5-tuple used as a lookup key.
///
/// The canonical text form, `src_addr/src_port/dst_addr/dst_port/proto`, is
/// the byte string hashed by [`Maglev::get_flow`](crate::Maglev::get_flow).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct FlowKey {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_proto"))]
    pub ip_proto: u8,

    pub src_addr: Ipv4Addr,
    pub dst_addr: Ipv4Addr,

    pub src_port: u16,
    pub dst_port: u16,
}

impl FlowKey {
    #[must_use]
    pub const fn new(
        ip_proto: u8,
        src_addr: Ipv4Addr,
        src_port: u16,
        dst_addr: Ipv4Addr,
        dst_port: u16,
    ) -> Self {
        Self {
            ip_proto,
            src_addr,
            dst_addr,
            src_port,
            dst_port,
        }
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.src_addr, self.src_port, self.dst_addr, self.dst_port, self.ip_proto
        )
    }
}

impl FromStr for FlowKey {
    type Err = FlowKeyError;

    fn from_str(s: &str) -> FlowKeyResult<Self> {
        let mut fields = s.split('/');
        let mut next = |name: &'static str| fields.next().ok_or(FlowKeyError::MissingField(name));

        let src_addr = next("source address")?.parse::<Ipv4Addr>()?;
        let src_port = next("source port")?
            .parse::<u16>()
            .map_err(FlowKeyError::InvalidPort)?;
        let dst_addr = next("destination address")?.parse::<Ipv4Addr>()?;
        let dst_port = next("destination port")?
            .parse::<u16>()
            .map_err(FlowKeyError::InvalidPort)?;
        let ip_proto = parse_proto(next("protocol")?)?;

        if fields.next().is_some() {
            return Err(FlowKeyError::TrailingField);
        }

        Ok(Self::new(ip_proto, src_addr, src_port, dst_addr, dst_port))
    }
}

fn parse_proto(value: &str) -> FlowKeyResult<u8> {
    match value.to_uppercase().as_str() {
        "TCP" => Ok(IP_PROTO_TCP),
        "UDP" => Ok(IP_PROTO_UDP),
        other => other
            .parse()
            .map_err(|_| FlowKeyError::InvalidProto(value.to_owned())),
    }
}

#[cfg(feature = "serde")]
fn deserialize_proto<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = String::deserialize(deserializer)?;
    parse_proto(&value).map_err(serde::de::Error::custom)
}
