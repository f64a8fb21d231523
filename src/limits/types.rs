use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::constants::{
    BITS_PER_MEGABIT, INSTANCE_TYPE_SEPARATOR, MIN_INTERFACES, MIN_IPV4_PER_INTERFACE,
    MIN_NETWORK_THROUGHPUT_MBPS,
};

/// Network capacity limits of a single instance type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct InstanceLimits {
    /// Maximum attachable network interfaces, including the primary
    interfaces: u32,
    /// Maximum IPv4 addresses per interface
    ipv4_per_interface: u32,
    /// Maximum IPv6 addresses per interface
    ipv6_per_interface: u32,
    /// Maximum aggregate network throughput in Mbps
    network_throughput_mbps: u32,
}

impl InstanceLimits {
    /// Creates a limits record, rejecting values no real instance type can have.
    ///
    /// Fails with [`Error::InvalidRecord`]; the record is not yet tied to an
    /// instance type, so the error carries only the reason.
    pub fn new(
        interfaces: u32,
        ipv4_per_interface: u32,
        ipv6_per_interface: u32,
        network_throughput_mbps: u32,
    ) -> Result<Self> {
        let limits = Self::from_raw(
            interfaces,
            ipv4_per_interface,
            ipv6_per_interface,
            network_throughput_mbps,
        );
        limits.validate().map_err(Error::invalid_record)?;
        Ok(limits)
    }

    /// Unchecked constructor for the compiled-in table.
    pub(crate) const fn from_raw(
        interfaces: u32,
        ipv4_per_interface: u32,
        ipv6_per_interface: u32,
        network_throughput_mbps: u32,
    ) -> Self {
        Self {
            interfaces,
            ipv4_per_interface,
            ipv6_per_interface,
            network_throughput_mbps,
        }
    }

    /// Checks the field constraints, returning a description of the first violation.
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.interfaces < MIN_INTERFACES {
            return Err(format!(
                "interfaces must be at least {}, got {}",
                MIN_INTERFACES, self.interfaces
            ));
        }
        if self.ipv4_per_interface < MIN_IPV4_PER_INTERFACE {
            return Err(format!(
                "ipv4_per_interface must be at least {}, got {}",
                MIN_IPV4_PER_INTERFACE, self.ipv4_per_interface
            ));
        }
        if self.network_throughput_mbps < MIN_NETWORK_THROUGHPUT_MBPS {
            return Err(format!(
                "network_throughput_mbps must be at least {}, got {}",
                MIN_NETWORK_THROUGHPUT_MBPS, self.network_throughput_mbps
            ));
        }
        Ok(())
    }

    /// Maximum number of network interfaces, including the primary
    pub fn interfaces(&self) -> u32 {
        self.interfaces
    }

    pub fn ipv4_per_interface(&self) -> u32 {
        self.ipv4_per_interface
    }

    pub fn ipv6_per_interface(&self) -> u32 {
        self.ipv6_per_interface
    }

    pub fn network_throughput_mbps(&self) -> u32 {
        self.network_throughput_mbps
    }

    /// Throughput in bits per second. Widened to `u64`; 23 Gbps does not fit in 32 bits.
    pub fn network_throughput_bps(&self) -> u64 {
        u64::from(self.network_throughput_mbps) * BITS_PER_MEGABIT
    }

    /// IPv4 addresses available with every interface attached and fully populated
    pub fn total_ipv4_addresses(&self) -> u64 {
        u64::from(self.interfaces) * u64::from(self.ipv4_per_interface)
    }
}

/// Wire shape of a limits record before validation
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawLimits {
    pub interfaces: u32,
    pub ipv4_per_interface: u32,
    pub ipv6_per_interface: u32,
    pub network_throughput_mbps: u32,
}

impl TryFrom<RawLimits> for InstanceLimits {
    type Error = Error;

    fn try_from(raw: RawLimits) -> Result<Self> {
        Self::new(
            raw.interfaces,
            raw.ipv4_per_interface,
            raw.ipv6_per_interface,
            raw.network_throughput_mbps,
        )
    }
}

/// An instance type identifier split into family and subtype
///
/// Borrowed from the input string; `m4.xlarge` parses to family `m4` and
/// subtype `xlarge`. Only the first separator splits, so the subtype keeps
/// any further dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceType<'a> {
    family: &'a str,
    subtype: &'a str,
}

impl<'a> InstanceType<'a> {
    /// Parses `"<family>.<subtype>"`.
    ///
    /// Fails with [`Error::MalformedInstanceType`] when there is no separator
    /// or the family is empty. An empty subtype parses and is left for the
    /// table lookup to reject.
    pub fn parse(input: &'a str) -> Result<Self> {
        match input.split_once(INSTANCE_TYPE_SEPARATOR) {
            Some((family, subtype)) if !family.is_empty() => Ok(Self { family, subtype }),
            _ => Err(Error::malformed(input)),
        }
    }

    pub(crate) fn new(family: &'a str, subtype: &'a str) -> Self {
        Self { family, subtype }
    }

    pub fn family(&self) -> &'a str {
        self.family
    }

    pub fn subtype(&self) -> &'a str {
        self.subtype
    }
}

impl fmt::Display for InstanceType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, INSTANCE_TYPE_SEPARATOR, self.subtype)
    }
}
