//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation.

use super::vocab::{dc, dcterms, edm, erc, ore};
use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager with the prefixes used for EDM output
///
/// Prefixes keep their declaration order.
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create a namespace manager with no prefixes at all
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();

        // Add common RDF/RDFS/OWL prefixes
        mgr.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        mgr.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        mgr.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        mgr.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        mgr.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        mgr.add_prefix("dc", dc::NAMESPACE);
        mgr.add_prefix("dcterms", dcterms::NAMESPACE);

        // Cultural heritage vocabularies
        mgr.add_prefix("edm", edm::NAMESPACE);
        mgr.add_prefix("erc", erc::NAMESPACE);
        mgr.add_prefix("ore", ore::NAMESPACE);
        mgr.add_prefix("oai", "http://www.openarchives.org/OAI/2.0/");
        mgr.add_prefix("vra", "http://purl.org/vra/");

        mgr
    }

    /// Add a prefix, replacing any earlier binding of the same prefix
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        if let Some((prefix, local)) = compact_iri.split_once(':') {
            let iri = self.get_iri(prefix)?;
            Ok(format!("{}{}", iri, local))
        } else {
            Err(PrefixError::InvalidIri(compact_iri.to_string()))
        }
    }

    /// Split an IRI into `(prefix, local)` using the longest matching namespace
    ///
    /// Returns None when no namespace matches or the remainder is not a
    /// Turtle-safe local name.
    pub fn split<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| (prefix.as_str(), &iri[ns.len()..]))
            .filter(|(_, local)| is_local_name(local))
    }

    /// Compact an IRI using known prefixes
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.split(iri)
            .map(|(prefix, local)| format!("{}:{}", prefix, local))
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Conservative subset of Turtle's PN_LOCAL
fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => chars
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefixes() {
        let mgr = NamespaceManager::new();

        assert_eq!(
            mgr.get_iri("rdf").unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        );
        assert_eq!(mgr.get_iri("xsd").unwrap(), "http://www.w3.org/2001/XMLSchema#");
        assert_eq!(mgr.get_iri("edm").unwrap(), "http://www.europeana.eu/schemas/edm/");
        assert_eq!(mgr.get_iri("ore").unwrap(), "http://www.openarchives.org/ore/terms/");
        assert!(matches!(mgr.get_iri("nope"), Err(PrefixError::UnknownPrefix(_))));
    }

    #[test]
    fn test_expand() {
        let mgr = NamespaceManager::new();

        let expanded = mgr.expand("edm:aggregatedCHO").unwrap();
        assert_eq!(expanded, "http://www.europeana.eu/schemas/edm/aggregatedCHO");

        let expanded = mgr.expand("rdf:type").unwrap();
        assert_eq!(expanded, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");

        assert!(mgr.expand("no-colon").is_err());
    }

    #[test]
    fn test_compact() {
        let mgr = NamespaceManager::new();

        let compacted = mgr.compact("http://purl.org/kernel/elements/1.1/where");
        assert_eq!(compacted, Some("erc:where".to_string()));

        let compacted = mgr.compact("http://purl.org/dc/terms/hasPart");
        assert_eq!(compacted, Some("dcterms:hasPart".to_string()));

        assert_eq!(mgr.compact("http://example.org/thing"), None);
    }

    #[test]
    fn test_compact_rejects_unsafe_local_names() {
        let mgr = NamespaceManager::new();

        assert_eq!(mgr.compact("http://purl.org/dc/terms/a/b"), None);
        assert_eq!(mgr.compact("http://purl.org/dc/terms/x.y"), None);
        assert_eq!(mgr.compact("http://purl.org/dc/terms/-x"), None);
    }

    #[test]
    fn test_longest_namespace_wins() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("ex", "http://example.org/");
        mgr.add_prefix("maps", "http://example.org/maps/");

        assert_eq!(
            mgr.compact("http://example.org/maps/chisoc"),
            Some("maps:chisoc".to_string())
        );
        assert_eq!(mgr.compact("http://example.org/atlas"), Some("ex:atlas".to_string()));
    }

    #[test]
    fn test_custom_prefix() {
        let mut mgr = NamespaceManager::new();
        mgr.add_prefix("ark", "http://ark.lib.uchicago.edu/ark:/61001/");

        let expanded = mgr.expand("ark:b2k40qk4wc8h").unwrap();
        assert_eq!(expanded, "http://ark.lib.uchicago.edu/ark:/61001/b2k40qk4wc8h");
    }
}
