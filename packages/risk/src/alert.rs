//! Per-category alert message templates.

use saferoute_risk_models::RiskCategory;

/// Builds the alert message for a classified route.
#[must_use]
pub fn alert_message(category: RiskCategory, source: &str, destination: &str) -> String {
    match category {
        RiskCategory::Critical => format!(
            "CRITICAL ALERT: Route from {source} to {destination} has VERY HIGH risk. \
             Avoid this route."
        ),
        RiskCategory::HighRisk => format!(
            "HIGH ALERT: Route from {source} to {destination} has HIGH risk. \
             Avoid this route if possible."
        ),
        RiskCategory::Moderate => format!(
            "CAUTION: Route from {source} to {destination} has MODERATE risk. \
             Travel with caution and prefer well-lit, busy streets."
        ),
        RiskCategory::Acceptable => format!(
            "Route from {source} to {destination} has ACCEPTABLE risk. \
             Safe to travel with normal precautions."
        ),
        RiskCategory::Good => format!(
            "Route from {source} to {destination} has LOW risk. \
             Good choice, highly recommended."
        ),
        RiskCategory::Excellent => format!(
            "Route from {source} to {destination} is VERY SAFE. \
             Excellent choice, recommended."
        ),
    }
}
