//! Metadata converters for the University of Chicago Library digital collections
//!
//! Builds Europeana Data Model (EDM) descriptions as RDF graphs and prints
//! them in Turtle or another RDF syntax.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use metadata_converters::config::CollectionConfig;
//! use metadata_converters::edm::{build_collection_triples, edm_namespaces};
//! use metadata_converters::rdf::{RdfFormat, RdfSerializer, RdfStore};
//!
//! let collection = CollectionConfig::default().resolve().unwrap();
//! let graph = build_collection_triples(RdfStore::new(), &collection, Utc::now());
//! assert_eq!(graph.len(), 21);
//!
//! let turtle = RdfSerializer::serialize(&graph, RdfFormat::Turtle, &edm_namespaces()).unwrap();
//! assert!(turtle.starts_with("@prefix"));
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod edm;
pub mod error;
pub mod rdf;

pub use config::{Collection, CollectionConfig, ConfigError, ConfigResult};
pub use edm::{build_collection_triples, edm_namespaces};
pub use error::{ConverterError, ConverterResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
