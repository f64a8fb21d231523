use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per test binary. Filter with `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Every instance type in the built-in table, as `family.subtype` strings
pub fn known_instance_types() -> Vec<String> {
    let table = instance_limits::LimitsTable::builtin();
    let mut names: Vec<String> = table
        .iter()
        .map(|(instance_type, _)| instance_type.to_string())
        .collect();
    names.sort();
    names
}
