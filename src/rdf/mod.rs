//! RDF support for the metadata converters
//!
//! This module provides:
//! - RDF terms and triples (wrapping oxrdf)
//! - an insertion-ordered in-memory graph
//! - namespace prefixes for compact output
//! - serialization (Turtle, N-Triples, RDF/XML, JSON-LD) and Turtle/N-Triples parsing
//!
//! # Example
//!
//! ```rust
//! use metadata_converters::rdf::{
//!     Literal, NamedNode, NamespaceManager, RdfFormat, RdfSerializer, RdfStore, Triple,
//! };
//! use metadata_converters::rdf::vocab::dc;
//!
//! let mut graph = RdfStore::new();
//! let cho = NamedNode::new("http://example.org/cho").unwrap();
//! graph.insert(Triple::new(cho, dc::TITLE, Literal::new_simple_literal("Chicago")));
//!
//! let turtle = RdfSerializer::serialize(&graph, RdfFormat::Turtle, &NamespaceManager::new()).unwrap();
//! assert!(turtle.starts_with("@prefix dc: <http://purl.org/dc/elements/1.1/> ."));
//! ```

mod namespace;
mod serialization;
mod store;
mod types;
pub mod vocab;

pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    Triple, TriplePattern,
};

pub use store::RdfStore;

pub use namespace::{Namespace, NamespaceManager, PrefixError, PrefixResult};

pub use serialization::{
    ParseError, ParseResult, RdfFormat, RdfParser, RdfSerializer, SerializeError,
    SerializeResult,
};
