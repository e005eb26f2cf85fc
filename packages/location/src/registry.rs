//! Compile-time registry of location catalogs.
//!
//! Each entry is an `(id, toml_content)` pair embedded via `include_str!`.
//! Adding a new region requires creating a TOML file in `catalogs/` and
//! adding a corresponding entry here.

use crate::{LocationCatalog, LocationError};

/// Identifier of the catalog used when none is requested explicitly.
pub const DEFAULT_CATALOG_ID: &str = "delhi";

/// Embedded TOML catalog definitions.
const CATALOG_TOMLS: &[(&str, &str)] = &[("delhi", include_str!("../catalogs/delhi.toml"))];

/// Returns the identifiers of all embedded catalogs.
#[must_use]
pub fn catalog_ids() -> Vec<&'static str> {
    CATALOG_TOMLS.iter().map(|(id, _)| *id).collect()
}

/// Loads and validates the embedded catalog with the given identifier.
///
/// # Errors
///
/// Returns [`LocationError::Config`] if no embedded catalog has that id,
/// or any construction error from [`LocationCatalog::from_toml_str`].
pub fn load(id: &str) -> Result<LocationCatalog, LocationError> {
    let (_, toml_str) = CATALOG_TOMLS
        .iter()
        .find(|(catalog_id, _)| *catalog_id == id)
        .ok_or_else(|| LocationError::Config {
            message: format!(
                "unknown catalog '{id}' (available: {})",
                catalog_ids().join(", ")
            ),
        })?;

    LocationCatalog::from_toml_str(toml_str)
}

/// Loads the default embedded catalog.
///
/// # Errors
///
/// Returns an error if the embedded TOML is malformed. Since it is a
/// compile-time constant, this indicates a development error and is caught
/// by the tests below.
pub fn builtin() -> Result<LocationCatalog, LocationError> {
    load(DEFAULT_CATALOG_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saferoute_location_models::SafetyTier;
    use std::collections::BTreeSet;

    /// Number of locations in the default catalog. Enforced by a test.
    const EXPECTED_LOCATION_COUNT: usize = 12;

    #[test]
    fn all_catalogs_load() {
        for id in catalog_ids() {
            let catalog = load(id).unwrap_or_else(|e| panic!("Failed to load catalog '{id}': {e}"));
            assert_eq!(catalog.id(), id);
        }
    }

    #[test]
    fn builtin_has_expected_locations() {
        let catalog = builtin().unwrap();
        assert_eq!(
            catalog.len(),
            EXPECTED_LOCATION_COUNT,
            "Expected {EXPECTED_LOCATION_COUNT} locations, found {}. \
             Update EXPECTED_LOCATION_COUNT after adding/removing locations.",
            catalog.len()
        );

        let mut seen = BTreeSet::new();
        for record in catalog.list_all() {
            assert!(
                seen.insert(record.lookup_key()),
                "Duplicate location: {}",
                record.name
            );
        }
    }

    #[test]
    fn builtin_tiers_partition_catalog() {
        let catalog = builtin().unwrap();
        let total: usize = SafetyTier::all()
            .iter()
            .map(|&tier| catalog.list_by_tier(tier).len())
            .sum();
        assert_eq!(total, catalog.len());
        assert_eq!(catalog.get("Dwarka").unwrap().safety_tier, SafetyTier::High);
        assert_eq!(
            catalog.get("Vivek Vihar").unwrap().safety_tier,
            SafetyTier::Low
        );
        assert_eq!(
            catalog.get("Connaught Place").unwrap().safety_tier,
            SafetyTier::Mid
        );
    }

    #[test]
    fn all_builtin_locations_have_coordinates() {
        for record in builtin().unwrap().list_all() {
            assert!(
                record.coordinates.is_some(),
                "{} has no coordinates",
                record.name
            );
            assert!(
                !record.nearest_police_station.is_empty(),
                "{} has no police station",
                record.name
            );
        }
    }

    #[test]
    fn unknown_catalog_is_config_error() {
        assert!(matches!(load("mumbai"), Err(LocationError::Config { .. })));
    }
}
