//! Validated, read-only location catalog.
//!
//! Construction is the only place a catalog can fail on bad data: duplicate
//! names (compared case-insensitively), unknown tier literals, and
//! out-of-range metrics are all rejected up front so lookups never have to
//! re-check them.

use std::collections::BTreeMap;
use std::path::Path;

use saferoute_location_models::{CatalogDefinition, LocationRecord, SafetyTier};

use crate::LocationError;

/// An immutable mapping from location name to safety record.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    id: String,
    name: String,
    records: Vec<LocationRecord>,
    /// Lowercased name to index into `records`.
    index: BTreeMap<String, usize>,
}

impl LocationCatalog {
    /// Builds a catalog from a parsed definition.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Config`] if the definition has no
    /// locations, a duplicate name, or a record with out-of-range metrics.
    pub fn new(definition: CatalogDefinition) -> Result<Self, LocationError> {
        let CatalogDefinition { id, name, locations } = definition;

        if locations.is_empty() {
            return Err(LocationError::Config {
                message: format!("catalog '{id}' defines no locations"),
            });
        }

        let mut index = BTreeMap::new();
        for (i, record) in locations.iter().enumerate() {
            validate_record(record)?;
            if let Some(existing) = index.insert(record.lookup_key(), i) {
                return Err(LocationError::Config {
                    message: format!(
                        "duplicate location name '{}' (conflicts with '{}')",
                        record.name, locations[existing].name
                    ),
                });
            }
        }

        log::info!("Loaded catalog '{id}' with {} locations", locations.len());

        Ok(Self {
            id,
            name,
            records: locations,
            index,
        })
    }

    /// Parses and validates a catalog from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Toml`] if the document does not match the
    /// catalog schema (including unknown tier literals), or any error from
    /// [`Self::new`].
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LocationError> {
        let definition: CatalogDefinition = toml::de::from_str(toml_str)?;
        Self::new(definition)
    }

    /// Reads, parses, and validates a catalog TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Io`] if the file cannot be read, or any
    /// error from [`Self::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocationError> {
        let path = path.as_ref();
        log::debug!("Reading catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Returns the catalog identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a location by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&LocationRecord> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.records[i])
    }

    /// Looks up a location by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NotFound`] if no location has that name.
    pub fn get(&self, name: &str) -> Result<&LocationRecord, LocationError> {
        self.find(name).ok_or_else(|| LocationError::NotFound {
            name: name.to_string(),
        })
    }

    /// Returns `true` if a location with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns every record in definition order.
    #[must_use]
    pub fn list_all(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Returns the records with the given tier, in definition order.
    #[must_use]
    pub fn list_by_tier(&self, tier: SafetyTier) -> Vec<&LocationRecord> {
        self.records
            .iter()
            .filter(|record| record.safety_tier == tier)
            .collect()
    }

    /// Number of locations in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed catalog.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &LocationRecord) -> Result<(), LocationError> {
    let invalid = |message: String| LocationError::Config {
        message: format!("location '{}': {message}", record.name),
    };

    if record.name.trim().is_empty() {
        return Err(LocationError::Config {
            message: "location name is empty".to_string(),
        });
    }
    if !record.crime_density.is_finite() || record.crime_density < 0.0 {
        return Err(invalid(format!(
            "crime_density {} must be a non-negative number",
            record.crime_density
        )));
    }
    if !(0.0..=100.0).contains(&record.lighting_quality) {
        return Err(invalid(format!(
            "lighting_quality {} must be within 0-100",
            record.lighting_quality
        )));
    }
    if !(0.0..=100.0).contains(&record.surveillance_coverage) {
        return Err(invalid(format!(
            "surveillance_coverage {} must be within 0-100",
            record.surveillance_coverage
        )));
    }
    if let Some(coords) = &record.coordinates
        && !coords.is_valid()
    {
        return Err(invalid(format!(
            "coordinates ({}, {}) are out of range",
            coords.latitude, coords.longitude
        )));
    }

    Ok(())
}
