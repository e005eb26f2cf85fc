#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Immutable catalog of location safety records.
//!
//! A [`catalog::LocationCatalog`] is built once at startup from a TOML
//! catalog definition, validated, and then shared read-only. Catalogs are
//! defined as TOML files embedded at compile time (see [`registry`]), or
//! loaded from disk to override the built-in data.

pub mod catalog;
pub mod registry;

pub use catalog::LocationCatalog;

use thiserror::Error;

/// Errors that can occur while building or querying a location catalog.
#[derive(Debug, Error)]
pub enum LocationError {
    /// No location with the given name exists in the catalog.
    #[error("Location not found: {name}")]
    NotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// The catalog definition is malformed.
    #[error("Invalid catalog: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// The catalog TOML could not be parsed.
    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The catalog file could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl LocationError {
    /// Returns `true` for errors raised while constructing a catalog, as
    /// opposed to lookups against an already-built one.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Toml(_) | Self::Io(_))
    }
}
