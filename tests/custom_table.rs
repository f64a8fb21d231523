//! Runs with and without the `builtin-table` feature.

use instance_limits::{Error, LimitsTable, Result};

const C5_TABLE: &str = r#"{
    "c5": {
        "large": {
            "interfaces": 3,
            "ipv4_per_interface": 10,
            "ipv6_per_interface": 10,
            "network_throughput_mbps": 10000
        },
        "18xlarge": {
            "interfaces": 15,
            "ipv4_per_interface": 50,
            "ipv6_per_interface": 50,
            "network_throughput_mbps": 25000
        }
    }
}"#;

#[test]
fn test_loaded_table_answers_every_query() -> Result<()> {
    let table = LimitsTable::from_json(C5_TABLE)?;

    assert_eq!(table.max_interfaces("c5.18xlarge")?, 15);
    assert_eq!(table.max_ipv4_addresses("c5.large")?, 10);
    let bps = table.max_network_throughput_bps("c5.18xlarge")?;
    assert_eq!(bps, 25_000_000_000);
    assert_eq!(table.lookup_or_panic("c5.large").ipv6_per_interface(), 10);
    Ok(())
}

#[test]
fn test_loaded_table_error_kinds() -> Result<()> {
    let table = LimitsTable::from_json(C5_TABLE)?;

    let family = table.lookup("m4.large").unwrap_err();
    assert!(matches!(family, Error::UnknownFamily(_)));

    let subtype = table.lookup("c5.metal").unwrap_err();
    assert!(matches!(subtype, Error::UnknownSubtype { .. }));

    let malformed = table.lookup("c5large").unwrap_err();
    assert!(matches!(malformed, Error::MalformedInstanceType(_)));
    Ok(())
}
