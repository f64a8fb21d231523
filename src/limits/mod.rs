//! Network interface limits per instance type
//!
//! The free functions in this module query the built-in table (feature
//! `builtin-table`, on by default). Use [`LimitsTable`] directly to query a
//! table loaded from an external source.
//!
//! ```rust
//! # #[cfg(feature = "builtin-table")]
//! # {
//! use instance_limits::limits;
//!
//! let record = limits::lookup("m4.large")?;
//! assert_eq!(record.interfaces(), 2);
//! assert_eq!(limits::max_network_throughput_bps("m4.10xlarge")?, 10_000_000_000);
//! # }
//! # Ok::<(), instance_limits::Error>(())
//! ```
//!
//! There is deliberately no top-level IPv6 accessor; the per-interface IPv6
//! limit is available as [`InstanceLimits::ipv6_per_interface`].

#[cfg(feature = "builtin-table")]
mod builtin;
pub mod constants;
mod table;
mod types;

pub use table::LimitsTable;
pub use types::{InstanceLimits, InstanceType};

#[cfg(feature = "builtin-table")]
use crate::error::Result;

/// Limits record for `instance_type` from the built-in table
#[cfg(feature = "builtin-table")]
pub fn lookup(instance_type: &str) -> Result<InstanceLimits> {
    LimitsTable::builtin().lookup(instance_type)
}

/// Fail-fast variant of [`lookup`]; panics if the instance type is unknown.
#[cfg(feature = "builtin-table")]
#[track_caller]
pub fn lookup_or_panic(instance_type: &str) -> InstanceLimits {
    LimitsTable::builtin().lookup_or_panic(instance_type)
}

/// Maximum number of interfaces this instance type supports, including the primary
#[cfg(feature = "builtin-table")]
pub fn max_interfaces(instance_type: &str) -> Result<u32> {
    LimitsTable::builtin().max_interfaces(instance_type)
}

/// Maximum number of IPv4 addresses per interface for this instance type
#[cfg(feature = "builtin-table")]
pub fn max_ipv4_addresses(instance_type: &str) -> Result<u32> {
    LimitsTable::builtin().max_ipv4_addresses(instance_type)
}

#[cfg(feature = "builtin-table")]
pub(crate) fn max_network_throughput_mbps(instance_type: &str) -> Result<u32> {
    LimitsTable::builtin()
        .max_network_throughput_mbps(instance_type)
}

/// Maximum network throughput in bits per second for this instance type
#[cfg(feature = "builtin-table")]
pub fn max_network_throughput_bps(instance_type: &str) -> Result<u64> {
    max_network_throughput_mbps(instance_type)
        .map(|mbps| u64::from(mbps) * constants::BITS_PER_MEGABIT)
}
