//! The fixed tier rule table.
//!
//! | source\dest | HIGH           | MID            | LOW           |
//! |-------------|----------------|----------------|---------------|
//! | HIGH        | 5 `EXCELLENT`  | 3 `ACCEPTABLE` | 2 `MODERATE`  |
//! | MID         | 3 `ACCEPTABLE` | 3 `ACCEPTABLE` | 1 `HIGH_RISK` |
//! | LOW         | 2 `MODERATE`   | 1 `HIGH_RISK`  | 0 `CRITICAL`  |
//!
//! Mixed combinations are classified the same regardless of direction.

use saferoute_location_models::SafetyTier;
use saferoute_risk_models::{RiskCategory, RiskMatrix, RiskRule, TierPair};

/// Classifies a tier pair.
#[must_use]
pub const fn classify(source: SafetyTier, destination: SafetyTier) -> RiskCategory {
    use SafetyTier::{High, Low, Mid};

    match (source, destination) {
        (High, High) => RiskCategory::Excellent,
        (High | Mid, Mid) | (Mid, High) => RiskCategory::Acceptable,
        (High, Low) | (Low, High) => RiskCategory::Moderate,
        (Mid, Low) | (Low, Mid) => RiskCategory::HighRisk,
        (Low, Low) => RiskCategory::Critical,
    }
}

/// Returns the rule table entry for a tier pair.
#[must_use]
pub const fn rule(pair: TierPair) -> RiskRule {
    RiskRule::new(pair, classify(pair.source, pair.destination))
}

/// Returns the full rule table, source-major, safest tiers first.
#[must_use]
pub fn risk_matrix() -> RiskMatrix {
    let rules = SafetyTier::all()
        .iter()
        .flat_map(|&source| {
            SafetyTier::all()
                .iter()
                .map(move |&destination| rule(TierPair::new(source, destination)))
        })
        .collect();

    RiskMatrix { rules }
}

/// Combined tier risk of a pair, from 0.0 (both high safety) to 100.0
/// (both low safety).
#[must_use]
pub fn combined_risk_score(pair: TierPair) -> f64 {
    f64::from(pair.source.risk_level() + pair.destination.risk_level()) * 25.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use SafetyTier::{High, Low, Mid};

    const EXPECTED: &[(SafetyTier, SafetyTier, u8)] = &[
        (High, High, 5),
        (High, Mid, 3),
        (High, Low, 2),
        (Mid, High, 3),
        (Mid, Mid, 3),
        (Mid, Low, 1),
        (Low, High, 2),
        (Low, Mid, 1),
        (Low, Low, 0),
    ];

    #[test]
    fn table_matches_expected_priorities() {
        for &(source, destination, priority) in EXPECTED {
            let category = classify(source, destination);
            assert_eq!(
                category.priority(),
                priority,
                "{source}-{destination} classified as {category}"
            );
        }
    }

    #[test]
    fn mixed_combinations_ignore_direction() {
        for &source in SafetyTier::all() {
            for &destination in SafetyTier::all() {
                assert_eq!(
                    classify(source, destination),
                    classify(destination, source)
                );
            }
        }
        assert_eq!(classify(High, Low), RiskCategory::Moderate);
    }

    #[test]
    fn matrix_is_exhaustive_and_ordered() {
        let matrix = risk_matrix();
        assert_eq!(matrix.rules.len(), 9);
        let priorities: Vec<u8> = matrix.rules.iter().map(|r| r.priority).collect();
        let expected: Vec<u8> = EXPECTED.iter().map(|&(_, _, p)| p).collect();
        assert_eq!(priorities, expected);

        for rule in &matrix.rules {
            assert_eq!(rule.is_recommended, rule.priority >= 3);
        }
        assert_eq!(
            matrix.get(Mid, Low).unwrap().category,
            RiskCategory::HighRisk
        );
    }

    #[test]
    fn good_is_never_produced_by_the_table() {
        assert!(
            risk_matrix()
                .rules
                .iter()
                .all(|r| r.category != RiskCategory::Good)
        );
    }

    #[test]
    fn combined_score_bounds() {
        assert!(combined_risk_score(TierPair::new(High, High)).abs() < f64::EPSILON);
        assert!((combined_risk_score(TierPair::new(Low, Low)) - 100.0).abs() < f64::EPSILON);
        assert!((combined_risk_score(TierPair::new(Mid, High)) - 25.0).abs() < f64::EPSILON);
        assert!((combined_risk_score(TierPair::new(High, Low)) - 50.0).abs() < f64::EPSILON);
    }
}
