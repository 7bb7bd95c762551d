//! Europeana Data Model (EDM) triples for the repository collection
//!
//! The collection is described by three entities:
//!
//! - a ResourceMap (`ore:ResourceMap`) describing the aggregation,
//! - an Aggregation (`ore:Aggregation`) tying the CHO to its provider and
//!   display object,
//! - the ProvidedCHO (`edm:ProvidedCHO`) standing for the collection itself.

use crate::config::Collection;
use crate::rdf::vocab::{dc, dcterms, edm, erc, ore, rdf, xsd};
use crate::rdf::{Literal, NamespaceManager, RdfStore, Triple};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

/// Append the collection-level EDM triples to `graph` and return it
///
/// `now` is rendered once and used for both `dcterms:created` and
/// `dcterms:modified` of the ResourceMap. Existing triples in `graph` are
/// left untouched.
pub fn build_collection_triples(
    mut graph: RdfStore,
    collection: &Collection,
    now: DateTime<Utc>,
) -> RdfStore {
    let before = graph.len();
    let timestamp = Literal::new_typed_literal(
        now.to_rfc3339_opts(SecondsFormat::Micros, true),
        xsd::DATE_TIME,
    );
    let provider = Literal::new_simple_literal(collection.provider.as_str());
    let title = Literal::new_simple_literal(collection.title.as_str());
    let date = Literal::new_simple_literal(collection.date.as_str());

    let rem = &collection.resource_map;
    let agg = &collection.aggregation;
    let cho = &collection.cho;

    // Resource Map
    graph.extend([
        Triple::new(rem.clone(), rdf::TYPE, ore::RESOURCE_MAP),
        Triple::new(rem.clone(), dcterms::CREATED, timestamp.clone()),
        Triple::new(rem.clone(), dcterms::CREATOR, collection.repository.clone()),
        Triple::new(rem.clone(), dcterms::MODIFIED, timestamp),
        Triple::new(rem.clone(), ore::DESCRIBES, agg.clone()),
    ]);

    // Aggregation
    graph.extend([
        Triple::new(agg.clone(), rdf::TYPE, ore::AGGREGATION),
        Triple::new(agg.clone(), edm::AGGREGATED_CHO, cho.clone()),
        Triple::new(agg.clone(), edm::DATA_PROVIDER, provider.clone()),
        Triple::new(agg.clone(), edm::IS_SHOWN_AT, cho.clone()),
        Triple::new(agg.clone(), edm::OBJECT, collection.icon.clone()),
        Triple::new(agg.clone(), edm::PROVIDER, provider.clone()),
        Triple::new(agg.clone(), ore::IS_DESCRIBED_BY, rem.clone()),
    ]);

    // Cultural Heritage Object
    graph.extend([
        Triple::new(cho.clone(), rdf::TYPE, edm::PROVIDED_CHO),
        Triple::new(cho.clone(), dc::DATE, date.clone()),
        Triple::new(cho.clone(), dc::TITLE, title.clone()),
        Triple::new(cho.clone(), dcterms::HAS_PART, collection.part.clone()),
        Triple::new(cho.clone(), erc::WHO, provider),
        Triple::new(cho.clone(), erc::WHAT, title),
        Triple::new(cho.clone(), erc::WHEN, date.clone()),
        Triple::new(cho.clone(), erc::WHERE, cho.clone()),
        Triple::new(cho.clone(), edm::YEAR, date),
    ]);

    debug!(added = graph.len() - before, "appended collection triples");
    info!(cho = cho.as_str(), triples = graph.len(), "built collection graph");
    graph
}

/// Prefix table used when printing EDM graphs
pub fn edm_namespaces() -> NamespaceManager {
    NamespaceManager::new()
}
