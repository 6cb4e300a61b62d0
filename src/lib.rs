//! BioSignalML metadata mapping
//!
//! Bidirectional translation between biosignal recording metadata (recordings,
//! signals, events, timeline positions and their free-form metadata) and RDF
//! statements, driven by a declarative table of attribute rules.
//!
//! # Architecture
//!
//! Components, leaves first:
//!
//! - [`codec`]: timestamp, duration and numeric literal text codecs
//! - [`mapping::rule`]: attribute rules and the forward rule index
//! - [`model`]: domain objects, categories and category resolution
//! - [`mapping::engine`]: statement generation, interpretation and graph lookups
//! - [`mapping::profile`]: per-format rule overrides loaded from YAML or JSON
//! - [`rdf`]: statement model, in-memory graph and Turtle I/O
//! - [`units`]: unit abbreviation → unit ontology term
//!
//! ## Example Usage
//!
//! ```rust
//! use biosignalml::{Category, Mapping, RdfStore, Recording, Signal, Value};
//!
//! let mapping = Mapping::bsml();
//!
//! let recording = Recording::new("http://example.org/rec/1");
//! let mut signal = Signal::in_recording("http://example.org/rec/1/signal/0", &recording);
//! signal.rate = Some(256.0);
//!
//! let mut graph = RdfStore::new();
//! mapping.add_to_graph(&signal, &mut graph).unwrap();
//!
//! let rate = mapping.value_from_graph(&signal, "rate", &graph);
//! assert_eq!(rate, Some(Value::Float(256.0)));
//!
//! for statement in graph.iter() {
//!     let result = mapping.interpret(statement, Some(&Category::SIGNAL));
//!     assert!(result.attribute.is_some());
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod mapping;
pub mod model;
pub mod rdf;
pub mod units;

// Re-export main types for convenience
pub use codec::ParseError;

pub use mapping::{
    AttributeRule, ConversionError, Interpretation, Mapping, MappingError, MappingResult,
    ProfileConfig, ProfileError, ProfileResult, RuleIndex,
};

pub use model::{
    resolve, Category, CategorySet, Event, Instant, Interval, Metadata, Recording, Resource,
    Signal, Value,
};

pub use rdf::{
    BlankNode, Graph, Literal, NamedNode, NamespaceManager, RdfObject, RdfPredicate, RdfStore,
    RdfSubject, Triple,
};

pub use units::unit_term;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
