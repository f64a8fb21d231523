use crate::limits::types::InstanceLimits;

const fn limits(interfaces: u32, ipv4: u32, ipv6: u32, mbps: u32) -> InstanceLimits {
    InstanceLimits::from_raw(interfaces, ipv4, ipv6, mbps)
}

/// Compiled-in limits, keyed by family then subtype.
///
/// Key spellings are kept exactly as published upstream, including the
/// `2large` subtype keys.
pub(crate) const BUILTIN_LIMITS: &[(&str, &[(&str, InstanceLimits)])] = &[
    (
        "m4",
        &[
            ("large", limits(2, 10, 10, 100)),
            ("xlarge", limits(4, 15, 15, 1000)),
            ("2large", limits(4, 15, 15, 1000)),
            ("4xlarge", limits(8, 30, 30, 2000)),
            // Unverified upstream
            ("10xlarge", limits(8, 30, 30, 10000)),
            ("16xlarge", limits(8, 30, 30, 23000)),
        ],
    ),
    (
        "r4",
        &[
            ("large", limits(3, 10, 10, 1000)),
            ("xlarge", limits(4, 15, 15, 1000)),
            ("2large", limits(4, 15, 15, 2000)),
            ("4xlarge", limits(8, 30, 30, 4000)),
            ("8xlarge", limits(8, 30, 30, 9000)),
            ("16xlarge", limits(15, 50, 50, 15000)),
        ],
    ),
    (
        "p2",
        &[
            // Unverified upstream
            ("xlarge", limits(4, 15, 15, 2000)),
            ("8xlarge", limits(8, 30, 30, 6000)),
            ("16xlarge", limits(8, 30, 30, 20000)),
        ],
    ),
];
