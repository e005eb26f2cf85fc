#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location safety record types and catalog definition schema.
//!
//! Defines the safety tier taxonomy shared by the whole system, the
//! per-location safety record, and the TOML schema that catalogs are
//! authored in.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse safety classification of a location.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SafetyTier {
    /// Well lit, well surveilled, few incidents
    High,
    /// Moderate safety
    Mid,
    /// Less safe area
    Low,
}

impl SafetyTier {
    /// Returns the risk level of this tier, from 0 (safest) to 2 (least safe).
    #[must_use]
    pub const fn risk_level(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Mid => 1,
            Self::Low => 2,
        }
    }

    /// Returns all variants of this enum, safest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Mid, Self::Low]
    }
}

/// How crowded a location typically is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CrowdDensity {
    Low,
    Medium,
    High,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, -90 to 90.
    pub latitude: f64,
    /// Longitude, -180 to 180.
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `true` if both components are within their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Precomputed safety attributes for a single named location.
///
/// Records are authored in catalog TOML files and never mutated after the
/// catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique location name (e.g., `"Connaught Place"`). Lookups ignore case.
    pub name: String,
    /// Safety tier the location was authored with.
    pub safety_tier: SafetyTier,
    /// Incidents per unit area. Never negative.
    pub crime_density: f64,
    /// Street lighting quality, 0 to 100.
    pub lighting_quality: f64,
    /// CCTV/patrol surveillance coverage, 0 to 100.
    pub surveillance_coverage: f64,
    /// Incidents reported in the last month.
    pub recent_incidents: u32,
    /// Name of the nearest police station.
    pub nearest_police_station: String,
    /// Location coordinates, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Typical crowd density, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd_density: Option<CrowdDensity>,
}

impl LocationRecord {
    /// Returns the location name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lowercase key used for case-insensitive lookups.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A catalog of locations, deserialized from TOML.
///
/// ```toml
/// id = "delhi"
/// name = "Delhi NCR safety zones"
///
/// [[locations]]
/// name = "Dwarka"
/// safety_tier = "high"
/// # ...
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Unique catalog identifier (e.g., `"delhi"`).
    pub id: String,
    /// Human-readable catalog name.
    pub name: String,
    /// Location records in definition order.
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    const RECORD_TOML: &str = r#"
        name = "Hauz Khas"
        safety_tier = "mid"
        crime_density = 1.3
        lighting_quality = 80
        surveillance_coverage = 72
        recent_incidents = 7
        nearest_police_station = "Hauz Khas PS"
        coordinates = { latitude = 28.5494, longitude = 77.2001 }
        crowd_density = "high"
    "#;

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!(SafetyTier::from_str("HIGH").unwrap(), SafetyTier::High);
        assert_eq!(SafetyTier::from_str("Mid").unwrap(), SafetyTier::Mid);
        assert_eq!(SafetyTier::from_str("low").unwrap(), SafetyTier::Low);
        assert!(SafetyTier::from_str("medium").is_err());
    }

    #[test]
    fn tier_risk_levels_are_ordered() {
        let levels: Vec<u8> = SafetyTier::all().iter().map(|t| t.risk_level()).collect();
        assert_eq!(levels, vec![0, 1, 2]);
    }

    #[test]
    fn parses_record_from_toml() {
        let record: LocationRecord = toml::de::from_str(RECORD_TOML).unwrap();
        assert_eq!(record.name(), "Hauz Khas");
        assert_eq!(record.safety_tier, SafetyTier::Mid);
        assert_eq!(record.recent_incidents, 7);
        assert_eq!(record.crowd_density, Some(CrowdDensity::High));
        assert!(record.coordinates.unwrap().is_valid());
        assert_eq!(record.lookup_key(), "hauz khas");
    }

    #[test]
    fn rejects_unknown_tier_literal() {
        let bad = RECORD_TOML.replace(r#"safety_tier = "mid""#, r#"safety_tier = "medium""#);
        assert!(toml::de::from_str::<LocationRecord>(&bad).is_err());
    }

    #[test]
    fn coordinates_default_to_none() {
        let toml_str = r#"
            name = "Nowhere"
            safety_tier = "low"
            crime_density = 0.0
            lighting_quality = 0
            surveillance_coverage = 0
            recent_incidents = 0
            nearest_police_station = "None"
        "#;
        let record: LocationRecord = toml::de::from_str(toml_str).unwrap();
        assert!(record.coordinates.is_none());
        assert!(record.crowd_density.is_none());
    }

    #[test]
    fn out_of_range_coordinates_are_invalid() {
        let coords = Coordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(!coords.is_valid());
    }
}
