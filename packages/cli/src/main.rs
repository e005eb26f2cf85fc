#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for route safety classification.
//!
//! A thin caller over [`saferoute_risk::RiskClassifier`]: parses location
//! names from the command line, runs the requested analysis, and prints
//! the structured result as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use saferoute_location::{LocationCatalog, LocationError, registry};
use saferoute_location_models::SafetyTier;
use saferoute_risk::{DEFAULT_ALTERNATIVES_LIMIT, RiskClassifier};

#[derive(Parser)]
#[command(name = "saferoute", about = "Route safety risk analyzer")]
struct Cli {
    /// Catalog TOML file to load instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the route between two locations
    Analyze {
        /// Starting location (case-insensitive)
        source: String,
        /// Destination location (case-insensitive)
        destination: String,
        /// Include safer alternative destinations
        #[arg(long)]
        alternatives: bool,
        /// Maximum number of alternatives to include
        #[arg(long, default_value_t = DEFAULT_ALTERNATIVES_LIMIT)]
        limit: usize,
    },
    /// List destinations that are safer than the requested one
    Alternatives {
        /// Starting location (case-insensitive)
        source: String,
        /// Destination to improve on (case-insensitive)
        destination: String,
        /// Maximum number of alternatives
        #[arg(long, default_value_t = DEFAULT_ALTERNATIVES_LIMIT)]
        limit: usize,
    },
    /// List all known locations
    Locations {
        /// Only list locations with this tier (`high`, `mid`, or `low`)
        #[arg(long, value_parser = parse_tier)]
        tier: Option<SafetyTier>,
    },
    /// Classify several routes at once, given as `SOURCE:DESTINATION`
    Batch {
        /// Routes to classify, e.g. "IIT Delhi:Dwarka"
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
    /// Print the tier rule table
    Matrix {
        /// Print the location-by-location matrix instead
        #[arg(long)]
        locations: bool,
    },
}

/// Parses a `SOURCE:DESTINATION` argument.
fn parse_pair(arg: &str) -> Result<(String, String), String> {
    let (source, destination) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected SOURCE:DESTINATION, got '{arg}'"))?;
    let (source, destination) = (source.trim(), destination.trim());

    if source.is_empty() || destination.is_empty() {
        return Err(format!("empty location name in '{arg}'"));
    }

    Ok((source.to_string(), destination.to_string()))
}

/// Parses a tier name, ignoring case.
fn parse_tier(arg: &str) -> Result<SafetyTier, String> {
    arg.parse()
        .map_err(|_| format!("unknown tier '{arg}' (expected high, mid, or low)"))
}

fn load_catalog(path: Option<&Path>) -> Result<LocationCatalog, LocationError> {
    path.map_or_else(registry::builtin, LocationCatalog::from_path)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    log::debug!(
        "Using catalog '{}' ({} locations)",
        catalog.name(),
        catalog.len()
    );
    let classifier = RiskClassifier::new(Arc::new(catalog));

    match cli.command {
        Commands::Analyze {
            source,
            destination,
            alternatives,
            limit,
        } => {
            let result = if alternatives {
                classifier.analyze_route_with_alternatives(&source, &destination, limit)?
            } else {
                classifier.analyze_route(&source, &destination)?
            };
            print_json(&result)?;
        }
        Commands::Alternatives {
            source,
            destination,
            limit,
        } => {
            print_json(&classifier.get_safe_alternatives(&source, &destination, limit)?)?;
        }
        Commands::Locations { tier } => match tier {
            Some(tier) => print_json(&classifier.catalog().list_by_tier(tier))?,
            None => print_json(&classifier.get_available_locations())?,
        },
        Commands::Batch { pairs } => {
            print_json(&classifier.batch_analyze(&pairs))?;
        }
        Commands::Matrix { locations } => {
            if locations {
                print_json(&classifier.get_location_matrix())?;
            } else {
                print_json(&classifier.get_risk_matrix())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_pair() {
        assert_eq!(
            parse_pair("IIT Delhi:Dwarka").unwrap(),
            ("IIT Delhi".to_string(), "Dwarka".to_string())
        );
        assert_eq!(
            parse_pair(" Rohini : Hauz Khas ").unwrap(),
            ("Rohini".to_string(), "Hauz Khas".to_string())
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_pair("Dwarka").is_err());
        assert!(parse_pair(":Dwarka").is_err());
        assert!(parse_pair("Dwarka:").is_err());
    }

    #[test]
    fn parses_tier_filter() {
        let cli = Cli::try_parse_from(["saferoute", "locations", "--tier", "HIGH"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Locations {
                tier: Some(SafetyTier::High)
            }
        ));
    }

    #[test]
    fn rejects_unknown_tier_filter() {
        assert!(parse_tier("medium").is_err());
        assert!(Cli::try_parse_from(["saferoute", "locations", "--tier", "medium"]).is_err());
    }

    #[test]
    fn analyze_defaults_limit() {
        let cli = Cli::try_parse_from(["saferoute", "analyze", "Dwarka", "Vasant Kunj"]).unwrap();
        match cli.command {
            Commands::Analyze {
                alternatives,
                limit,
                ..
            } => {
                assert!(!alternatives);
                assert_eq!(limit, DEFAULT_ALTERNATIVES_LIMIT);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn builtin_catalog_is_default() {
        assert_eq!(load_catalog(None).unwrap().id(), registry::DEFAULT_CATALOG_ID);
    }
}
