//! Instance Limits - network interface capacity limits for cloud instance types
//!
//! This crate answers a narrow question for anything that attaches network
//! interfaces or assigns private addresses to compute instances: how many
//! interfaces can an instance type take, how many addresses fit on each, and
//! how much network throughput it has.
//!
//! # Features
//!
//! - **Built-in table**: limits for the `m4`, `r4` and `p2` families, built
//!   once on first use and shared for the life of the process
//! - **Typed lookups**: every query returns a [`Result`], distinguishing
//!   malformed input, unknown family and unknown subtype
//! - **Replacement tables**: load a table from JSON when the built-in data is
//!   not authoritative enough
//!
//! # Examples
//!
//! ```rust
//! use instance_limits::prelude::*;
//!
//! fn main() -> Result<()> {
//! #   #[cfg(feature = "builtin-table")]
//! #   {
//!     let limits = lookup("r4.16xlarge")?;
//!     println!(
//!         "{} interfaces, {} IPv4 addresses each, {} Mbps",
//!         limits.interfaces(),
//!         limits.ipv4_per_interface(),
//!         limits.network_throughput_mbps()
//!     );
//!
//!     assert_eq!(max_ipv4_addresses("p2.8xlarge")?, 30);
//! #   }
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Lookups never panic unless asked to:
//!
//! ```rust
//! use instance_limits::{Error, LimitsTable};
//!
//! let table = LimitsTable::from_json(
//!     r#"{"m4": {"large": {
//!         "interfaces": 2,
//!         "ipv4_per_interface": 10,
//!         "ipv6_per_interface": 10,
//!         "network_throughput_mbps": 100
//!     }}}"#,
//! )?;
//!
//! match table.lookup("zz9.xlarge") {
//!     Err(Error::UnknownFamily(family)) => assert_eq!(family, "zz9"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! // Fail-fast call sites opt in explicitly
//! let limits = table.lookup_or_panic("m4.large");
//! assert_eq!(limits.interfaces(), 2);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Tables are immutable after construction and all queries take `&self`, so
//! they can be read from any number of threads without locking.
//!
//! # Logging
//!
//! Failed lookups and table loading are reported through `tracing`. The
//! crate never installs a subscriber.

#![doc(html_root_url = "https://docs.rs/instance-limits/0.1.0")]

mod error;
pub mod limits;

pub use error::{Error, Result};
pub use limits::{InstanceLimits, InstanceType, LimitsTable};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::limits::{InstanceLimits, InstanceType, LimitsTable};
    #[cfg(feature = "builtin-table")]
    pub use crate::limits::{
        lookup, lookup_or_panic, max_interfaces, max_ipv4_addresses, max_network_throughput_bps,
    };
    pub use crate::Error;
    pub use crate::Result;
}
