#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Route risk classification.
//!
//! Combines the safety tiers of a source and destination location into a
//! priority, alert message, and recommendation using a fixed rule table,
//! and searches the catalog for safer alternative destinations.
//!
//! Every operation is a pure function of the shared, read-only
//! [`saferoute_location::LocationCatalog`] and the rule table in [`rules`].

pub mod alert;
pub mod classifier;
pub mod rules;

pub use classifier::{DEFAULT_ALTERNATIVES_LIMIT, RiskClassifier};

use saferoute_location::LocationError;
use thiserror::Error;

/// Errors that can occur during route analysis.
#[derive(Debug, Error)]
pub enum RiskError {
    /// One or more requested locations are not in the catalog.
    #[error("Location(s) not found: {}", .names.join(", "))]
    NotFound {
        /// The names that failed to resolve, in request order.
        names: Vec<String>,
    },

    /// A request argument was invalid.
    #[error("Invalid request: {message}")]
    Validation {
        /// Description of what went wrong.
        message: String,
    },

    /// Catalog operation failed.
    #[error(transparent)]
    Location(#[from] LocationError),
}

impl RiskError {
    /// Returns the location names that failed to resolve, if any.
    #[must_use]
    pub fn missing_names(&self) -> Vec<String> {
        match self {
            Self::NotFound { names } => names.clone(),
            Self::Location(LocationError::NotFound { name }) => vec![name.clone()],
            Self::Validation { .. } | Self::Location(_) => Vec::new(),
        }
    }
}
