//! In-memory RDF graph
//!
//! The graph is a value: builders take it by ownership, append to it and
//! hand it back. Triples keep their first-insertion order so serialization
//! is stable from one run to the next.

use super::types::{RdfObject, RdfPredicate, RdfSubject, Triple, TriplePattern};
use indexmap::IndexSet;
use std::collections::HashSet;

/// Insertion-ordered set of triples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdfStore {
    triples: IndexSet<Triple>,
}

impl RdfStore {
    /// Create a new empty RDF store
    pub fn new() -> Self {
        Self {
            triples: IndexSet::new(),
        }
    }

    /// Insert a triple into the store
    ///
    /// Returns false when the triple was already present; the existing
    /// entry keeps its position.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Check if a triple exists in the store
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Query triples matching a pattern
    pub fn query(&self, pattern: &TriplePattern) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|triple| pattern.matches(triple))
            .collect()
    }

    /// Get triples with a specific subject
    pub fn get_triples_with_subject(&self, subject: &RdfSubject) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|triple| &triple.subject == subject)
            .collect()
    }

    /// Get triples with a specific predicate
    pub fn get_triples_with_predicate(&self, predicate: &RdfPredicate) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|triple| &triple.predicate == predicate)
            .collect()
    }

    /// Get triples with a specific object
    pub fn get_triples_with_object(&self, object: &RdfObject) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|triple| &triple.object == object)
            .collect()
    }

    /// Objects of every `(subject, predicate, ?)` triple
    pub fn objects_for(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Vec<&RdfObject> {
        self.triples
            .iter()
            .filter(|t| &t.subject == subject && &t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Get an iterator over all triples, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Distinct subjects, in order of first appearance
    pub fn subjects(&self) -> Vec<&RdfSubject> {
        self.triples
            .iter()
            .map(|t| &t.subject)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Order-independent view, for comparing graphs as sets
    pub fn to_set(&self) -> HashSet<Triple> {
        self.triples.iter().cloned().collect()
    }
}

impl Extend<Triple> for RdfStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for RdfStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RdfStore {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::types::{Literal, NamedNode};
    use crate::rdf::vocab::dc;

    fn create_test_triple() -> Triple {
        Triple::new(
            NamedNode::new("http://example.org/cho").unwrap(),
            dc::TITLE,
            Literal::new_simple_literal("Social Scientists Map Chicago"),
        )
    }

    #[test]
    fn test_insert_and_query() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();

        assert!(store.insert(triple.clone()));
        assert_eq!(store.len(), 1);
        assert!(store.contains(&triple));
    }

    #[test]
    fn test_duplicate_insert_is_a_no_op() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();

        assert!(store.insert(triple.clone()));
        assert!(!store.insert(triple));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_query_by_subject() {
        let mut store = RdfStore::new();
        let subject = NamedNode::new("http://example.org/cho").unwrap();

        store.insert(Triple::new(
            subject.clone(),
            dc::TITLE,
            Literal::new_simple_literal("Chicago"),
        ));
        store.insert(Triple::new(
            subject.clone(),
            dc::DATE,
            Literal::new_simple_literal("1925"),
        ));
        store.insert(Triple::new(
            NamedNode::new("http://example.org/other").unwrap(),
            dc::DATE,
            Literal::new_simple_literal("1925"),
        ));

        assert_eq!(store.get_triples_with_subject(&subject.clone().into()).len(), 2);
        assert_eq!(store.get_triples_with_predicate(&dc::DATE.into()).len(), 2);
        assert_eq!(
            store
                .get_triples_with_object(&Literal::new_simple_literal("1925").into())
                .len(),
            2
        );
        assert_eq!(store.objects_for(&subject.into(), &dc::TITLE.into()).len(), 1);
    }

    #[test]
    fn test_triple_pattern_query() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();
        store.insert(triple.clone());

        let results = store.query(&TriplePattern::default());
        assert_eq!(results.len(), 1);

        let pattern = TriplePattern::new(Some(triple.subject.clone()), None, None);
        assert_eq!(store.query(&pattern).len(), 1);

        let wrong_subject = NamedNode::new("http://example.org/bob").unwrap();
        let pattern = TriplePattern::new(Some(wrong_subject.into()), None, None);
        assert!(store.query(&pattern).is_empty());
    }

    #[test]
    fn test_subjects_keep_first_seen_order() {
        let b = NamedNode::new("http://example.org/b").unwrap();
        let a = NamedNode::new("http://example.org/a").unwrap();

        let store: RdfStore = vec![
            Triple::new(b.clone(), dc::TITLE, Literal::new_simple_literal("B")),
            Triple::new(a.clone(), dc::TITLE, Literal::new_simple_literal("A")),
            Triple::new(b.clone(), dc::DATE, Literal::new_simple_literal("1")),
        ]
        .into_iter()
        .collect();

        let subjects = store.subjects();
        assert_eq!(subjects, vec![&RdfSubject::from(b), &RdfSubject::from(a)]);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let t1 = create_test_triple();
        let t2 = Triple::new(
            NamedNode::new("http://example.org/cho").unwrap(),
            dc::DATE,
            Literal::new_simple_literal("2020"),
        );

        let forward: RdfStore = vec![t1.clone(), t2.clone()].into_iter().collect();
        let backward: RdfStore = vec![t2, t1].into_iter().collect();

        assert_eq!(forward.to_set(), backward.to_set());
    }
}
