//! Value types for address classification.
//!
//! - `Address` is the only input: a v4 or v6 address, or the sentinel for
//!   input that failed to parse
//! - `ValidationError` is the only failure, tagged with an `AddressStatus`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use thiserror::Error;

/// Parsed IP address, or the sentinel for unparsable input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
    Invalid,
}

impl Address {
    /// Parses textual input, falling back to `Address::Invalid`
    /// Accepts surrounding whitespace and bracketed IPv6 literals ("[::1]")
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let unbracketed = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        unbracketed.parse::<IpAddr>().ok().into()
    }

    /// The underlying IP address, if this is not the sentinel
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::V4(ip) => Some(IpAddr::V4(*ip)),
            Self::V6(ip) => Some(IpAddr::V6(*ip)),
            Self::Invalid => None,
        }
    }

    /// Unwraps IPv4-mapped IPv6 addresses (::ffff:a.b.c.d) to plain IPv4
    pub fn canonical(&self) -> Self {
        match self.ip() {
            Some(ip) => ip.to_canonical().into(),
            None => Self::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::V4(v4),
            IpAddr::V6(v6) => Self::V6(v6),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self::V4(ip)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self::V6(ip)
    }
}

impl From<Option<IpAddr>> for Address {
    fn from(ip: Option<IpAddr>) -> Self {
        ip.map_or(Self::Invalid, Self::from)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(ip) => write!(f, "{}", ip),
            Self::V6(ip) => write!(f, "{}", ip),
            Self::Invalid => write!(f, "<invalid>"),
        }
    }
}

/// Status code carried by every validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressStatus {
    #[serde(rename = "ERR_ADDRESS_INVALID")]
    AddressInvalid,
    #[serde(rename = "ERR_ADDRESS_PRIVATE")]
    AddressPrivate,
}

impl AddressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddressInvalid => "ERR_ADDRESS_INVALID",
            Self::AddressPrivate => "ERR_ADDRESS_PRIVATE",
        }
    }
}

impl fmt::Display for AddressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why an address was rejected as invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidReason {
    Unparsed,
    Unspecified,
    Loopback,
    LinkLocal,
    Broadcast,
    Multicast,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unparsed => "not an IP address",
            Self::Unspecified => "unspecified",
            Self::Loopback => "loopback",
            Self::LinkLocal => "link-local",
            Self::Broadcast => "broadcast",
            Self::Multicast => "multicast",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejection produced by `require_public`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("address is not global unicast ({reason}): {address}")]
    Invalid {
        address: Address,
        reason: InvalidReason,
    },
    #[error("address is private: {address}")]
    Private { address: IpAddr },
}

impl ValidationError {
    pub fn status(&self) -> AddressStatus {
        match self {
            Self::Invalid { .. } => AddressStatus::AddressInvalid,
            Self::Private { .. } => AddressStatus::AddressPrivate,
        }
    }
}

/// Network interface name (e.g., "eth0", "wlan0")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceName(String);

impl InterfaceName {
    pub fn new(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an address came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "kebab-case")]
pub enum InputSource {
    Argument,
    File(String),
    Stdin,
    Interface(InterfaceName),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument => write!(f, "argument"),
            Self::File(path) => write!(f, "file:{}", path),
            Self::Stdin => write!(f, "stdin"),
            Self::Interface(name) => write!(f, "interface:{}", name),
        }
    }
}

/// A single address to classify, with its raw text and origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInput {
    pub source: InputSource,
    pub raw: String,
    pub address: Address,
}

impl AddressInput {
    /// Parses raw text; unparsable text becomes `Address::Invalid`
    pub fn parse(source: InputSource, raw: String) -> Self {
        let address = Address::parse(&raw);
        Self { source, raw, address }
    }

    pub fn from_ip(source: InputSource, ip: IpAddr) -> Self {
        Self {
            source,
            raw: ip.to_string(),
            address: ip.into(),
        }
    }
}
