#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Route risk categories, rule table entries, and analysis result types.
//!
//! These are the structured records returned to callers of the risk
//! classifier. All of them serialize with `serde` so that command-line or
//! web front ends can render them without knowing the classification rules.

use saferoute_location_models::{LocationRecord, SafetyTier};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Priority at or above which a route is recommended.
pub const RECOMMENDED_PRIORITY: u8 = 3;

/// Combination key used in location matrices for a location paired with
/// itself.
pub const SAME_LOCATION_KEY: &str = "same-location";

/// Risk category of a route, from 0 (most dangerous) to 5 (safest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// Priority 0: do not travel
    Critical = 0,
    /// Priority 1: not recommended
    HighRisk = 1,
    /// Priority 2: travel with caution
    Moderate = 2,
    /// Priority 3: normal risk
    Acceptable = 3,
    /// Priority 4: low risk
    Good = 4,
    /// Priority 5: very safe
    Excellent = 5,
}

impl RiskCategory {
    /// Returns the numeric priority of this category.
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Creates a category from a numeric priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 0-5.
    pub const fn from_priority(value: u8) -> Result<Self, InvalidPriorityError> {
        match value {
            0 => Ok(Self::Critical),
            1 => Ok(Self::HighRisk),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Acceptable),
            4 => Ok(Self::Good),
            5 => Ok(Self::Excellent),
            _ => Err(InvalidPriorityError { value }),
        }
    }

    /// Whether routes in this category are recommended.
    #[must_use]
    pub const fn is_recommended(self) -> bool {
        self.priority() >= RECOMMENDED_PRIORITY
    }

    /// Short human-readable description of the category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL - Do Not Recommend",
            Self::HighRisk => "HIGH RISK - Not Recommended",
            Self::Moderate => "MODERATE RISK - Be Cautious",
            Self::Acceptable => "ACCEPTABLE RISK - Recommended",
            Self::Good => "GOOD SAFETY - Highly Recommended",
            Self::Excellent => "EXCELLENT - Very Safe Route",
        }
    }

    /// Returns all variants of this enum, most dangerous first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Critical,
            Self::HighRisk,
            Self::Moderate,
            Self::Acceptable,
            Self::Good,
            Self::Excellent,
        ]
    }
}

/// Error returned when attempting to create a [`RiskCategory`] from an
/// invalid priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPriorityError {
    /// The invalid priority that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidPriorityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority {}: expected 0-5", self.value)
    }
}

impl std::error::Error for InvalidPriorityError {}

/// The ordered (source tier, destination tier) pair that indexes the rule
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierPair {
    /// Tier of the route's starting location.
    pub source: SafetyTier,
    /// Tier of the route's destination.
    pub destination: SafetyTier,
}

impl TierPair {
    /// Creates the key for a route from `source` to `destination`.
    #[must_use]
    pub const fn new(source: SafetyTier, destination: SafetyTier) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl std::fmt::Display for TierPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.source, self.destination)
    }
}

/// One entry of the tier rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Tier pair this rule applies to.
    pub combination: TierPair,
    /// Resulting category.
    pub category: RiskCategory,
    /// Numeric priority of `category`.
    pub priority: u8,
    /// Whether routes matching this rule are recommended.
    pub is_recommended: bool,
}

impl RiskRule {
    /// Creates a rule, deriving priority and recommendation from `category`.
    #[must_use]
    pub const fn new(combination: TierPair, category: RiskCategory) -> Self {
        Self {
            combination,
            category,
            priority: category.priority(),
            is_recommended: category.is_recommended(),
        }
    }
}

/// The complete tier rule table, in source-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    /// One rule per tier pair.
    pub rules: Vec<RiskRule>,
}

impl RiskMatrix {
    /// Returns the rule for a tier pair, if present.
    #[must_use]
    pub fn get(&self, source: SafetyTier, destination: SafetyTier) -> Option<&RiskRule> {
        self.rules
            .iter()
            .find(|rule| rule.combination == TierPair::new(source, destination))
    }
}

/// A safer destination reachable from the same source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Candidate location name.
    pub name: String,
    /// Candidate tier.
    pub safety_tier: SafetyTier,
    /// Category of the (source, candidate) route.
    pub category: RiskCategory,
    /// Priority of the (source, candidate) route.
    pub priority: u8,
    /// Candidate crime density, used as the first tie-breaker.
    pub crime_density: f64,
    /// Candidate surveillance coverage.
    pub surveillance_coverage: f64,
}

/// Result of classifying a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Source location name as defined in the catalog.
    pub source: String,
    /// Destination location name as defined in the catalog.
    pub destination: String,
    /// Tier pair used to index the rule table.
    pub combination: TierPair,
    /// Priority, 0 (most dangerous) to 5 (safest).
    pub priority: u8,
    /// Category for `priority`.
    pub category: RiskCategory,
    /// Human-readable alert describing the route.
    pub alert_message: String,
    /// `true` iff `priority >= 3`.
    pub is_recommended: bool,
    /// Combined tier risk, 0.0 (both ends high safety) to 100.0 (both low).
    pub combined_risk_score: f64,
    /// Snapshot of the source record.
    pub source_metrics: LocationRecord,
    /// Snapshot of the destination record.
    pub destination_metrics: LocationRecord,
    /// Safer alternatives, only present when explicitly requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Alternative>>,
}

/// Per-pair outcome of a batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// The pair was classified.
    Success {
        /// The classification result.
        result: Box<AnalysisResult>,
    },
    /// The pair could not be classified.
    Failure {
        /// Error description.
        error: String,
        /// Location names that failed to resolve, if any.
        missing: Vec<String>,
    },
}

/// A requested pair together with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Requested source name.
    pub source: String,
    /// Requested destination name.
    pub destination: String,
    /// Classification outcome.
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    /// Returns `true` if the pair was classified.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Success { .. })
    }

    /// Returns the analysis result, if the pair was classified.
    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            BatchOutcome::Success { result } => Some(result),
            BatchOutcome::Failure { .. } => None,
        }
    }
}

/// One cell of a location-by-location matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatrixCell {
    /// Source location name.
    pub source: String,
    /// Destination location name.
    pub destination: String,
    /// Tier pair key (e.g. `"high-low"`), or [`SAME_LOCATION_KEY`].
    pub risk_combination: String,
    /// Priority of the route, 0 to 5.
    pub priority: u8,
    /// `true` iff `priority >= 3`.
    pub is_recommended: bool,
}

/// Priorities for every ordered pair of catalog locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatrix {
    /// Location names in catalog order.
    pub locations: Vec<String>,
    /// Cells in source-major order, `locations.len()^2` entries.
    pub cells: Vec<LocationMatrixCell>,
}

impl LocationMatrix {
    /// Returns the cell for a source/destination pair, matched exactly.
    #[must_use]
    pub fn get(&self, source: &str, destination: &str) -> Option<&LocationMatrixCell> {
        self.cells
            .iter()
            .find(|cell| cell.source == source && cell.destination == destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_roundtrip() {
        for v in 0..=5u8 {
            let category = RiskCategory::from_priority(v).unwrap();
            assert_eq!(category.priority(), v);
        }
        assert!(RiskCategory::from_priority(6).is_err());
    }

    #[test]
    fn recommended_iff_priority_at_least_three() {
        for category in RiskCategory::all() {
            assert_eq!(
                category.is_recommended(),
                category.priority() >= 3,
                "{category:?}"
            );
        }
    }

    #[test]
    fn category_names_are_screaming_snake_case() {
        assert_eq!(RiskCategory::HighRisk.to_string(), "HIGH_RISK");
        assert_eq!(
            serde_json::to_value(RiskCategory::Excellent).unwrap(),
            serde_json::json!("EXCELLENT")
        );
    }

    #[test]
    fn tier_pair_key_format() {
        let pair = TierPair::new(SafetyTier::High, SafetyTier::Low);
        assert_eq!(pair.to_string(), "high-low");
    }

    #[test]
    fn rule_derives_priority_and_recommendation() {
        let rule = RiskRule::new(
            TierPair::new(SafetyTier::Mid, SafetyTier::Low),
            RiskCategory::HighRisk,
        );
        assert_eq!(rule.priority, 1);
        assert!(!rule.is_recommended);
    }

    #[test]
    fn batch_failure_serializes_with_status_tag() {
        let entry = BatchEntry {
            source: "X".to_string(),
            destination: "Y".to_string(),
            outcome: BatchOutcome::Failure {
                error: "Location(s) not found: X, Y".to_string(),
                missing: vec!["X".to_string(), "Y".to_string()],
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["source"], "X");
        assert_eq!(value["missing"], serde_json::json!(["X", "Y"]));
        assert!(!entry.is_success());
        assert!(entry.result().is_none());
    }
}
