/// Separator between family and subtype in an instance type identifier
pub const INSTANCE_TYPE_SEPARATOR: char = '.';

/// Conversion factor from megabits to bits (decimal, as quoted by the cloud provider)
pub const BITS_PER_MEGABIT: u64 = 1_000_000;

/// Minimum number of network interfaces; the primary interface always exists
pub const MIN_INTERFACES: u32 = 1;

/// Minimum IPv4 addresses per interface; the primary private address
pub const MIN_IPV4_PER_INTERFACE: u32 = 1;

/// Minimum network throughput in Mbps. Zero is rejected.
pub const MIN_NETWORK_THROUGHPUT_MBPS: u32 = 1;
