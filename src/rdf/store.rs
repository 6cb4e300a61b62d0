//! In-memory triple store
//!
//! The mapping engine only needs point lookups by subject and predicate, so the
//! store keeps a single SPO index next to the insertion-ordered triple set.

use super::types::{RdfObject, RdfPredicate, RdfSubject, Triple};
use indexmap::IndexSet;
use std::collections::HashMap;

/// The statement-level contract the mapping engine consumes from a triple store.
pub trait Graph {
    /// First object stored for `(subject, predicate)`, if any.
    fn query(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Option<RdfObject>;

    /// Every object stored for `(subject, predicate)`.
    fn query_many(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Vec<RdfObject>;

    /// Add statements. Statements already present are ignored.
    fn add<I>(&mut self, statements: I)
    where
        I: IntoIterator<Item = Triple>;
}

/// RDF triple store with an SPO index
#[derive(Debug, Clone, Default)]
pub struct RdfStore {
    /// All triples in insertion order
    triples: IndexSet<Triple>,

    /// SPO index: Subject -> Predicate -> Objects (insertion order)
    spo_index: HashMap<RdfSubject, HashMap<RdfPredicate, Vec<RdfObject>>>,
}

impl RdfStore {
    /// Create a new empty RDF store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple, returning false when it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }

        self.spo_index
            .entry(triple.subject.clone())
            .or_default()
            .entry(triple.predicate.clone())
            .or_default()
            .push(triple.object.clone());
        self.triples.insert(triple);
        true
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

    /// Iterate over all triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

impl Graph for RdfStore {
    fn query(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Option<RdfObject> {
        self.spo_index
            .get(subject)
            .and_then(|preds| preds.get(predicate))
            .and_then(|objs| objs.first())
            .cloned()
    }

    fn query_many(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Vec<RdfObject> {
        self.spo_index
            .get(subject)
            .and_then(|preds| preds.get(predicate))
            .cloned()
            .unwrap_or_default()
    }

    fn add<I>(&mut self, statements: I)
    where
        I: IntoIterator<Item = Triple>,
    {
        for triple in statements {
            self.insert(triple);
        }
    }
}

impl Extend<Triple> for RdfStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl FromIterator<Triple> for RdfStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Self::new();
        store.add(iter);
        store
    }
}
