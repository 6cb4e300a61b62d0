//! Format mapping profiles
//!
//! A profile is a YAML or JSON document of extra rules for one file format,
//! merged over the base rules when an engine is built:
//!
//! ```yaml
//! name: edf
//! prefixes:
//!   edf: http://www.biosignalml.org/ontologies/2011/02/edf#
//! rules:
//!   - attribute: patient
//!     property: edf:patient
//!     category: bsml:Recording
//!   - attribute: duration
//!     property: dcterms:extent
//!     category: bsml:Recording
//!     datatype: xsd:duration
//!     converter: duration
//! ```

use super::convert::{
    duration_from_serial, duration_to_serial, reference_from_serial, reference_to_serial,
    timestamp_from_serial, timestamp_to_serial,
};
use super::rule::AttributeRule;
use crate::model::Category;
use crate::rdf::{NamespaceManager, PrefixError, RdfPredicate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Profile loading errors
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule names an IRI that cannot be resolved
    #[error("Rule '{attribute}': {source}")]
    Prefix {
        attribute: String,
        #[source]
        source: PrefixError,
    },

    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Named converter pair for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    Timestamp,
    Duration,
    Reference,
}

/// One rule as written in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub attribute: String,
    /// Compact or absolute IRI
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<ConverterKind>,
}

/// Profile document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub name: String,
    /// Extra prefixes usable in this profile's rules
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl ProfileConfig {
    pub fn from_yaml_str(input: &str) -> ProfileResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a profile, choosing the parser by file extension
    pub fn from_path(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ProfileError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Resolve the profile's rules against `namespaces` plus the profile's own prefixes
    pub fn into_rules(self, namespaces: &NamespaceManager) -> ProfileResult<Vec<AttributeRule>> {
        let mut namespaces = namespaces.clone();
        for (prefix, iri) in self.prefixes {
            namespaces.add_prefix(prefix, iri);
        }

        self.rules
            .into_iter()
            .map(|config| config.into_rule(&namespaces))
            .collect()
    }
}

impl RuleConfig {
    fn into_rule(self, namespaces: &NamespaceManager) -> ProfileResult<AttributeRule> {
        let resolve = |name: &str| {
            namespaces.resolve(name).map_err(|source| ProfileError::Prefix {
                attribute: self.attribute.clone(),
                source,
            })
        };

        let property = RdfPredicate::from(resolve(&self.property)?);
        let category = match &self.category {
            Some(name) => Some(Category::new(resolve(name)?.as_str())),
            None => None,
        };
        let datatype = match &self.datatype {
            Some(name) => Some(resolve(name)?),
            None => None,
        };

        let mut rule = AttributeRule::new(self.attribute.clone(), property);
        rule.category = category;
        rule.datatype = datatype;
        Ok(match self.converter {
            Some(ConverterKind::Timestamp) => {
                rule.with_converters(timestamp_to_serial, timestamp_from_serial)
            }
            Some(ConverterKind::Duration) => {
                rule.with_converters(duration_to_serial, duration_from_serial)
            }
            Some(ConverterKind::Reference) => {
                rule.with_converters(reference_to_serial, reference_from_serial)
            }
            None => rule,
        })
    }
}
