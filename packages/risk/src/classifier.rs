//! Route classification against a shared location catalog.

use std::sync::Arc;

use saferoute_location::LocationCatalog;
use saferoute_location_models::LocationRecord;
use saferoute_risk_models::{
    Alternative, AnalysisResult, BatchEntry, BatchOutcome, LocationMatrix, LocationMatrixCell,
    RiskCategory, RiskMatrix, SAME_LOCATION_KEY, TierPair,
};

use crate::{RiskError, alert, rules};

/// Number of alternatives returned when the caller does not specify a limit.
pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 5;

/// Classifies routes between catalog locations.
///
/// Holds no mutable state; cloning is cheap and clones share the same
/// catalog.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    catalog: Arc<LocationCatalog>,
}

impl RiskClassifier {
    #[must_use]
    pub const fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this classifier resolves names against.
    #[must_use]
    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Resolves both ends of a route, reporting every name that is missing.
    fn resolve_pair(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<(&LocationRecord, &LocationRecord), RiskError> {
        match (self.catalog.find(source), self.catalog.find(destination)) {
            (Some(src), Some(dst)) => Ok((src, dst)),
            (src, dst) => {
                let mut names = Vec::new();
                if src.is_none() {
                    names.push(source.to_string());
                }
                if dst.is_none() {
                    names.push(destination.to_string());
                }
                log::debug!("Unresolved location(s): {names:?}");
                Err(RiskError::NotFound { names })
            }
        }
    }

    /// Classifies the route from `source` to `destination`.
    ///
    /// Names are matched case-insensitively; the result carries the names
    /// as they are defined in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::NotFound`] naming each location that is not in
    /// the catalog.
    pub fn analyze_route(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<AnalysisResult, RiskError> {
        let (src, dst) = self.resolve_pair(source, destination)?;

        let combination = TierPair::new(src.safety_tier, dst.safety_tier);
        let category = rules::classify(combination.source, combination.destination);

        log::debug!(
            "Classified {} -> {} ({combination}) as {category}",
            src.name,
            dst.name
        );

        Ok(AnalysisResult {
            source: src.name.clone(),
            destination: dst.name.clone(),
            combination,
            priority: category.priority(),
            category,
            alert_message: alert::alert_message(category, &src.name, &dst.name),
            is_recommended: category.is_recommended(),
            combined_risk_score: rules::combined_risk_score(combination),
            source_metrics: src.clone(),
            destination_metrics: dst.clone(),
            alternatives: None,
        })
    }

    /// Classifies a route and attaches up to `limit` safer alternatives.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::analyze_route`] or
    /// [`Self::get_safe_alternatives`].
    pub fn analyze_route_with_alternatives(
        &self,
        source: &str,
        destination: &str,
        limit: usize,
    ) -> Result<AnalysisResult, RiskError> {
        let mut result = self.analyze_route(source, destination)?;
        result.alternatives = Some(self.get_safe_alternatives(source, destination, limit)?);
        Ok(result)
    }

    /// Finds destinations reachable from `source` that classify strictly
    /// better than `destination`.
    ///
    /// Candidates are ordered by priority (highest first), then by crime
    /// density (lowest first), then by name. Returns an empty vector when
    /// no location improves on the requested route.
    ///
    /// # Errors
    ///
    /// * [`RiskError::Validation`] if `limit` is zero
    /// * [`RiskError::NotFound`] if either name is not in the catalog
    pub fn get_safe_alternatives(
        &self,
        source: &str,
        destination: &str,
        limit: usize,
    ) -> Result<Vec<Alternative>, RiskError> {
        if limit == 0 {
            return Err(RiskError::Validation {
                message: "alternatives limit must be at least 1".to_string(),
            });
        }

        let (src, dst) = self.resolve_pair(source, destination)?;
        let baseline = rules::classify(src.safety_tier, dst.safety_tier);
        let excluded = [src.lookup_key(), dst.lookup_key()];

        let mut alternatives: Vec<Alternative> = self
            .catalog
            .list_all()
            .iter()
            .filter(|candidate| !excluded.contains(&candidate.lookup_key()))
            .filter_map(|candidate| {
                let category = rules::classify(src.safety_tier, candidate.safety_tier);
                (category > baseline).then(|| to_alternative(candidate, category))
            })
            .collect();

        alternatives.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.crime_density.total_cmp(&b.crime_density))
                .then_with(|| a.name.cmp(&b.name))
        });
        alternatives.truncate(limit);

        log::debug!(
            "Found {} alternative(s) to {} -> {} ({baseline})",
            alternatives.len(),
            src.name,
            dst.name
        );

        Ok(alternatives)
    }

    /// Returns every catalog location in definition order.
    #[must_use]
    pub fn get_available_locations(&self) -> &[LocationRecord] {
        self.catalog.list_all()
    }

    /// Classifies each pair independently.
    ///
    /// A pair that fails to resolve is reported as a failure entry and does
    /// not affect the others. Entries are returned in input order.
    #[must_use]
    pub fn batch_analyze<S: AsRef<str>>(&self, pairs: &[(S, S)]) -> Vec<BatchEntry> {
        let entries: Vec<BatchEntry> = pairs
            .iter()
            .map(|(source, destination)| {
                let (source, destination) = (source.as_ref(), destination.as_ref());
                let outcome = match self.analyze_route(source, destination) {
                    Ok(result) => BatchOutcome::Success {
                        result: Box::new(result),
                    },
                    Err(e) => {
                        log::warn!("Batch pair {source} -> {destination} failed: {e}");
                        BatchOutcome::Failure {
                            error: e.to_string(),
                            missing: e.missing_names(),
                        }
                    }
                };

                BatchEntry {
                    source: source.to_string(),
                    destination: destination.to_string(),
                    outcome,
                }
            })
            .collect();

        let succeeded = entries.iter().filter(|e| e.is_success()).count();
        log::info!("Batch analyzed {succeeded}/{} pair(s)", entries.len());

        entries
    }

    /// Returns the full tier rule table.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn get_risk_matrix(&self) -> RiskMatrix {
        rules::risk_matrix()
    }

    /// Returns the classification of every ordered pair of catalog
    /// locations. A location paired with itself is always priority 5.
    #[must_use]
    pub fn get_location_matrix(&self) -> LocationMatrix {
        let records = self.catalog.list_all();

        let cells = records
            .iter()
            .enumerate()
            .flat_map(move |(i, src)| {
                records.iter().enumerate().map(move |(j, dst)| {
                    let (risk_combination, category) = if i == j {
                        (SAME_LOCATION_KEY.to_string(), RiskCategory::Excellent)
                    } else {
                        let pair = TierPair::new(src.safety_tier, dst.safety_tier);
                        (pair.to_string(), rules::rule(pair).category)
                    };

                    LocationMatrixCell {
                        source: src.name.clone(),
                        destination: dst.name.clone(),
                        risk_combination,
                        priority: category.priority(),
                        is_recommended: category.is_recommended(),
                    }
                })
            })
            .collect();

        LocationMatrix {
            locations: records.iter().map(|r| r.name.clone()).collect(),
            cells,
        }
    }
}

fn to_alternative(record: &LocationRecord, category: RiskCategory) -> Alternative {
    Alternative {
        name: record.name.clone(),
        safety_tier: record.safety_tier,
        category,
        priority: category.priority(),
        crime_density: record.crime_density,
        surveillance_coverage: record.surveillance_coverage,
    }
}
