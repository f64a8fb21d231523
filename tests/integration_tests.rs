#![cfg(feature = "builtin-table")]

mod common;

use std::thread;

use instance_limits::prelude::*;

const REPLACEMENT_TABLE: &str = r#"{
    "m4": {
        "large": {
            "interfaces": 3,
            "ipv4_per_interface": 12,
            "ipv6_per_interface": 12,
            "network_throughput_mbps": 450
        }
    }
}"#;

#[test]
fn test_documented_scenarios() -> Result<()> {
    common::init_tracing();

    let limits = lookup("m4.large")?;
    assert_eq!(limits.interfaces(), 2);
    assert_eq!(limits.ipv4_per_interface(), 10);
    assert_eq!(limits.ipv6_per_interface(), 10);
    assert_eq!(limits.network_throughput_mbps(), 100);

    assert_eq!(max_interfaces("r4.16xlarge")?, 15);
    assert_eq!(max_ipv4_addresses("p2.8xlarge")?, 30);
    assert_eq!(max_network_throughput_bps("m4.10xlarge")?, 10_000_000_000);
    Ok(())
}

#[test]
fn test_error_kinds() {
    common::init_tracing();

    let unknown_family = lookup("zz9.xlarge").unwrap_err();
    assert!(matches!(unknown_family, Error::UnknownFamily(_)));
    assert!(unknown_family.is_unknown_instance_type());

    let unknown_subtype = lookup("m4.99xlarge").unwrap_err();
    assert!(matches!(unknown_subtype, Error::UnknownSubtype { .. }));
    assert_eq!(
        unknown_subtype.to_string(),
        "Unknown subtype for family m4: 99xlarge"
    );

    let malformed = lookup("m4xlarge").unwrap_err();
    assert!(matches!(malformed, Error::MalformedInstanceType(_)));
    assert!(malformed.is_unknown_instance_type());

    let invalid = LimitsTable::from_json("{").unwrap_err();
    assert!(!invalid.is_unknown_instance_type());
}

#[test]
fn test_every_known_type_resolves_through_all_accessors() -> Result<()> {
    for name in common::known_instance_types() {
        let limits = lookup(&name)?;
        assert_eq!(max_interfaces(&name)?, limits.interfaces());
        assert_eq!(max_ipv4_addresses(&name)?, limits.ipv4_per_interface());
        assert_eq!(
            max_network_throughput_bps(&name)?,
            limits.network_throughput_bps()
        );
    }
    Ok(())
}

#[test]
fn test_concurrent_readers_agree() {
    common::init_tracing();

    let expected: Vec<(String, InstanceLimits)> = common::known_instance_types()
        .into_iter()
        .map(|name| {
            let limits = lookup(&name).unwrap();
            (name, limits)
        })
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    for (name, limits) in &expected {
                        assert_eq!(lookup(name).unwrap(), *limits);
                    }
                    assert!(lookup("zz9.xlarge").is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_replacement_table_is_independent_of_builtin() -> Result<()> {
    common::init_tracing();

    let table = LimitsTable::from_json(REPLACEMENT_TABLE)?;

    assert_eq!(table.max_interfaces("m4.large")?, 3);
    let missing = table.lookup("m4.xlarge").unwrap_err();
    assert!(matches!(missing, Error::UnknownSubtype { .. }));

    // The built-in table is untouched
    assert_eq!(max_interfaces("m4.large")?, 2);
    assert!(LimitsTable::builtin().contains("m4.xlarge"));
    Ok(())
}

#[test]
fn test_parsed_lookup_matches_string_lookup() -> Result<()> {
    let parsed = InstanceType::parse("r4.4xlarge")?;
    assert_eq!(LimitsTable::builtin().get(&parsed)?, lookup("r4.4xlarge")?);
    Ok(())
}

#[test]
#[should_panic(expected = "Unknown subtype for family m4: 99xlarge")]
fn test_lookup_or_panic_fails_fast() {
    lookup_or_panic("m4.99xlarge");
}
