//! RDF namespace and prefix management
//!
//! Compact IRIs (`bsml:rate`) are used in mapping profiles and log output.

use super::types::NamedNode;
use super::vocab;
use std::collections::HashMap;
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

/// Namespace manager preloaded with the vocabularies used by recording metadata
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: HashMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with the standard prefixes
    pub fn new() -> Self {
        let mut mgr = Self {
            prefixes: HashMap::new(),
        };

        mgr.add_prefix("rdf", vocab::RDF_NS);
        mgr.add_prefix("rdfs", vocab::RDFS_NS);
        mgr.add_prefix("xsd", vocab::XSD_NS);
        mgr.add_prefix("owl", vocab::OWL_NS);
        mgr.add_prefix("dcterms", vocab::DCTERMS_NS);
        mgr.add_prefix("evt", vocab::EVT_NS);
        mgr.add_prefix("tl", vocab::TL_NS);
        mgr.add_prefix("bsml", vocab::BSML_NS);
        mgr.add_prefix("uome", vocab::UOME_NS);

        mgr
    }

    /// Add a prefix
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
        match compact_iri.split_once(':') {
            Some((prefix, local)) => Ok(format!("{}{}", self.get_iri(prefix)?, local)),
            None => Err(PrefixError::InvalidIri(compact_iri.to_string())),
        }
    }

    /// Resolve either a compact IRI or an absolute one to a validated named node.
    ///
    /// A name whose prefix is not registered is only accepted as an absolute IRI
    /// when it is hierarchical (`scheme://...`) or a URN.
    pub fn resolve(&self, name: &str) -> PrefixResult<NamedNode> {
        let iri = match self.expand(name) {
            Ok(iri) => iri,
            Err(PrefixError::UnknownPrefix(prefix)) => {
                let absolute = name.contains("://") || name.starts_with("urn:");
                if !absolute {
                    return Err(PrefixError::UnknownPrefix(prefix));
                }
                name.to_string()
            }
            Err(e) => return Err(e),
        };
        NamedNode::new(&iri).map_err(|e| PrefixError::InvalidIri(e.to_string()))
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{}:{}", prefix, &iri[ns.len()..]))
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}
