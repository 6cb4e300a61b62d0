//! RDF support for recording metadata
//!
//! This module provides the statement model the mapping engine works with:
//! - RDF terms and triples (wrappers around oxrdf)
//! - The `Graph` contract and an in-memory store implementing it
//! - Namespace prefixes and vocabulary constants
//! - Turtle reading and writing
//!
//! # Example
//!
//! ```rust
//! use biosignalml::rdf::{Graph, Literal, NamedNode, RdfPredicate, RdfStore, Triple};
//!
//! let mut store = RdfStore::new();
//! let subject = NamedNode::new("urn:rec:1").unwrap();
//! let predicate = RdfPredicate::new("http://purl.org/dc/terms/format").unwrap();
//!
//! store.add([Triple::new(
//!     subject.clone().into(),
//!     predicate.clone(),
//!     Literal::new_simple_literal("EDF").into(),
//! )]);
//!
//! assert!(store.query(&subject.into(), &predicate).is_some());
//! ```

mod namespace;
mod store;
mod turtle;
mod types;
pub mod vocab;

pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    Triple,
};

pub use store::{Graph, RdfStore};

pub use namespace::{NamespaceManager, PrefixError, PrefixResult};

pub use turtle::{load_turtle, parse_turtle, write_turtle, TurtleError, TurtleResult};
