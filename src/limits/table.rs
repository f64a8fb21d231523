use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "builtin-table")]
use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::limits::constants::{BITS_PER_MEGABIT, INSTANCE_TYPE_SEPARATOR};
use crate::limits::types::{InstanceLimits, InstanceType, RawLimits};

#[cfg(feature = "builtin-table")]
static BUILTIN: Lazy<LimitsTable> = Lazy::new(|| {
    let mut table = LimitsTable::default();
    for (family, subtypes) in crate::limits::builtin::BUILTIN_LIMITS {
        for (subtype, limits) in subtypes.iter() {
            debug_assert!(
                limits.validate().is_ok(),
                "invalid built-in limits for {family}.{subtype}"
            );
            table.insert(family, subtype, *limits);
        }
    }
    debug!(
        families = table.families.len(),
        entries = table.len(),
        "built-in instance limits table initialised"
    );
    table
});

/// Two-level table of instance limits: family, then subtype.
///
/// Immutable once built. Lookups take `&self` only, so a table can be shared
/// across threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitsTable {
    families: HashMap<String, HashMap<String, InstanceLimits>>,
}

impl LimitsTable {
    /// The compiled-in table, built on first access and kept for the life of the process.
    #[cfg(feature = "builtin-table")]
    pub fn builtin() -> &'static LimitsTable {
        &BUILTIN
    }

    /// Builds a table from `(family, subtype, limits)` triples.
    ///
    /// Every record is validated, and a pair may appear only once.
    pub fn from_entries<I, F, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, S, InstanceLimits)>,
        F: AsRef<str>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (family, subtype, limits) in entries {
            table.insert_checked(family.as_ref(), subtype.as_ref(), limits)?;
        }
        Ok(table)
    }

    /// Loads a table from JSON shaped as `{family: {subtype: {..limits..}}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, RawLimits>> = serde_json::from_str(json)?;

        let mut table = Self::default();
        for (family, subtypes) in &raw {
            for (subtype, raw) in subtypes {
                let limits = InstanceLimits::from_raw(
                    raw.interfaces,
                    raw.ipv4_per_interface,
                    raw.ipv6_per_interface,
                    raw.network_throughput_mbps,
                );
                table.insert_checked(family, subtype, limits)?;
            }
        }

        info!(
            families = table.families.len(),
            entries = table.len(),
            "loaded instance limits table from JSON"
        );
        Ok(table)
    }

    /// Serializes the table to pretty-printed JSON with sorted keys.
    pub fn to_json(&self) -> Result<String> {
        let sorted: BTreeMap<&str, BTreeMap<&str, &InstanceLimits>> = self
            .families
            .iter()
            .map(|(family, subtypes)| {
                let subtypes: BTreeMap<&str, &InstanceLimits> = subtypes
                    .iter()
                    .map(|(subtype, limits)| (subtype.as_str(), limits))
                    .collect();
                (family.as_str(), subtypes)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    fn insert_checked(
        &mut self,
        family: &str,
        subtype: &str,
        limits: InstanceLimits,
    ) -> Result<()> {
        let name = format!("{}{}{}", family, INSTANCE_TYPE_SEPARATOR, subtype);
        let duplicate = self
            .families
            .get(family)
            .is_some_and(|subtypes| subtypes.contains_key(subtype));

        let rejection = if family.is_empty() {
            Some("family must not be empty".to_string())
        } else if family.contains(INSTANCE_TYPE_SEPARATOR) {
            Some(format!("family must not contain {:?}", INSTANCE_TYPE_SEPARATOR))
        } else if duplicate {
            Some("duplicate entry".to_string())
        } else {
            limits.validate().err()
        };

        if let Some(reason) = rejection {
            warn!(instance_type = %name, %reason, "rejecting instance limits entry");
            return Err(Error::invalid_limits(name, reason));
        }

        self.insert(family, subtype, limits);
        Ok(())
    }

    fn insert(&mut self, family: &str, subtype: &str, limits: InstanceLimits) {
        self.families
            .entry(family.to_string())
            .or_default()
            .insert(subtype.to_string(), limits);
    }

    /// Looks up the limits for `"<family>.<subtype>"`.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedInstanceType`] if there is no separator or the family is empty
    /// - [`Error::UnknownFamily`] if the family is not in the table
    /// - [`Error::UnknownSubtype`] if the family is known but the subtype is not
    pub fn lookup(&self, instance_type: &str) -> Result<InstanceLimits> {
        InstanceType::parse(instance_type)
            .and_then(|parsed| self.get(&parsed))
            .inspect_err(|err| {
                debug!(instance_type, error = %err, "instance limits lookup failed");
            })
    }

    /// Looks up an already parsed instance type.
    pub fn get(&self, instance_type: &InstanceType<'_>) -> Result<InstanceLimits> {
        let family = instance_type.family();
        let subtype = instance_type.subtype();

        let subtypes = self
            .families
            .get(family)
            .ok_or_else(|| Error::unknown_family(family))?;
        subtypes
            .get(subtype)
            .copied()
            .ok_or_else(|| Error::unknown_subtype(family, subtype))
    }

    /// Like [`LimitsTable::lookup`], but panics on any lookup failure.
    ///
    /// For call sites where an unknown instance type is a programming error.
    #[track_caller]
    pub fn lookup_or_panic(&self, instance_type: &str) -> InstanceLimits {
        match self.lookup(instance_type) {
            Ok(limits) => limits,
            Err(err) => panic!("{}", err),
        }
    }

    /// Maximum number of network interfaces, including the primary
    pub fn max_interfaces(&self, instance_type: &str) -> Result<u32> {
        self.lookup(instance_type).map(|limits| limits.interfaces())
    }

    /// Maximum number of IPv4 addresses per interface
    pub fn max_ipv4_addresses(&self, instance_type: &str) -> Result<u32> {
        self.lookup(instance_type)
            .map(|limits| limits.ipv4_per_interface())
    }

    pub(crate) fn max_network_throughput_mbps(&self, instance_type: &str) -> Result<u32> {
        self.lookup(instance_type)
            .map(|limits| limits.network_throughput_mbps())
    }

    /// Maximum network throughput in bits per second
    pub fn max_network_throughput_bps(&self, instance_type: &str) -> Result<u64> {
        self.max_network_throughput_mbps(instance_type)
            .map(|mbps| u64::from(mbps) * BITS_PER_MEGABIT)
    }

    pub fn contains(&self, instance_type: &str) -> bool {
        InstanceType::parse(instance_type)
            .is_ok_and(|parsed| self.get(&parsed).is_ok())
    }

    /// Known families, sorted
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.families.keys().map(String::as_str).collect();
        families.sort_unstable();
        families
    }

    /// Known subtypes of `family`, sorted, or `None` for an unknown family
    pub fn subtypes(&self, family: &str) -> Option<Vec<&str>> {
        self.families.get(family).map(|subtypes| {
            let mut names: Vec<&str> = subtypes.keys().map(String::as_str).collect();
            names.sort_unstable();
            names
        })
    }

    /// Iterates over every entry in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceType<'_>, InstanceLimits)> + '_ {
        self.families.iter().flat_map(|(family, subtypes)| {
            subtypes
                .iter()
                .map(move |(subtype, limits)| (InstanceType::new(family, subtype), *limits))
        })
    }

    /// Number of `(family, subtype)` entries
    pub fn len(&self) -> usize {
        self.families.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
