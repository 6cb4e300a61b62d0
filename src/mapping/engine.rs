//! Mapping engine
//!
//! Translates between resources and statements using a merged rule index.
//!
//! # Resource → statements
//!
//! For each rule applicable to the resource's categories, a non-empty typed
//! attribute and a non-empty metadata entry of the same name each give one
//! statement. Values become nodes as follows:
//!
//! 1. a ready-made RDF node is used as is
//! 2. a resource reference with a valid IRI becomes a named node
//! 3. otherwise the rule's `to_serial` converter runs (on failure the value is
//!    kept unconverted and the failure recorded)
//! 4. the text is a named node if it carries a known URI scheme, else a
//!    literal with the rule's datatype
//!
//! # Statements → values
//!
//! The predicate is looked up for the target category, then without category.
//! Unmapped predicates are still reported, with no attribute name.

use super::rule::{AttributeRule, ConversionError, FromSerial, RuleIndex, RuleKey};
use crate::codec;
use crate::model::{resolve, Category, CategorySet, Metadata, Resource, Value};
use crate::rdf::{
    BlankNode, Graph, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple,
};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// URI schemes that turn rendered text into a resource node
const URI_SCHEMES: [&str; 4] = ["http:", "https:", "file:", "urn:"];

/// Mapping errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The resource has no usable subject identifier
    #[error("Resource has no subject identifier")]
    MissingSubject,

    /// The subject identifier is not an IRI
    #[error("Invalid subject IRI: {0}")]
    InvalidSubject(String),
}

pub type MappingResult<T> = Result<T, MappingError>;

/// A conversion that fell back to the unconverted value
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionFallback {
    pub attribute: String,
    pub error: ConversionError,
}

/// Node built for a value, with the converter failure if there was one
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutcome {
    pub node: RdfObject,
    pub fallback: Option<ConversionError>,
}

/// Result of interpreting one statement
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Subject IRI or blank node identifier
    pub subject: String,
    /// `None` when the predicate is not mapped
    pub attribute: Option<String>,
    pub value: Value,
}

/// Bidirectional attribute ↔ statement mapping for one format profile
#[derive(Debug, Clone)]
pub struct Mapping {
    rules: RuleIndex,
    /// `(property, category)` → position in `rules`
    reverse: HashMap<RuleKey, usize>,
}

impl Mapping {
    /// Mapping over the base rules only
    pub fn new(base: &RuleIndex) -> Self {
        Self::with_overrides(base, std::iter::empty::<Vec<AttributeRule>>())
    }

    /// Mapping over the base rules with override lists merged in order, last-wins
    pub fn with_overrides<I, L>(base: &RuleIndex, overrides: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = AttributeRule>,
    {
        let mut rules = base.clone();
        for list in overrides {
            rules.merge(list);
        }

        let reverse = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleKey::new(rule.property.as_str(), rule.category.as_ref()), i))
            .collect();

        Self { rules, reverse }
    }

    /// Mapping over the standard BioSignalML rules
    pub fn bsml() -> Self {
        Self::new(&RuleIndex::bsml())
    }

    pub fn rules(&self) -> &RuleIndex {
        &self.rules
    }

    /// Rule for an attribute: the first category-specific match, else the generic one
    pub fn rule_for(&self, attribute: &str, categories: &CategorySet) -> Option<&AttributeRule> {
        categories
            .iter()
            .find_map(|c| self.rules.get(attribute, Some(c)))
            .or_else(|| self.rules.get(attribute, None))
    }

    /// Rule for a property as seen from `category`, falling back to the generic one
    pub fn rule_for_property(
        &self,
        property: &RdfPredicate,
        category: Option<&Category>,
    ) -> Option<&AttributeRule> {
        self.reverse
            .get(&RuleKey::new(property.as_str(), category))
            .or_else(|| self.reverse.get(&RuleKey::new(property.as_str(), None)))
            .and_then(|&i| self.rules.get_index(i))
    }

    /// Lazily generate the statements describing a resource.
    ///
    /// Each call starts afresh; nothing is cached between calls.
    pub fn statements<'a, R>(&'a self, resource: &'a R) -> MappingResult<StatementStream<'a, R>>
    where
        R: Resource + ?Sized,
    {
        let subject = subject_of(resource)?;
        Ok(StatementStream {
            subject,
            resource,
            categories: resolve(resource),
            rules: self.rules.values(),
            pending: None,
            fallbacks: Vec::new(),
        })
    }

    /// Build the object node for a value under a rule
    pub fn make_node(value: &Value, rule: &AttributeRule) -> NodeOutcome {
        match value {
            Value::Node(node) => return NodeOutcome { node: node.clone(), fallback: None },
            Value::Blank(id) => {
                if let Ok(blank) = BlankNode::from_id(id) {
                    return NodeOutcome { node: blank.into(), fallback: None };
                }
            }
            Value::Resource(iri) => match NamedNode::new(iri) {
                Ok(named) => return NodeOutcome { node: named.into(), fallback: None },
                Err(e) => debug!("'{}' for {} is not an IRI: {}", iri, rule.attribute, e),
            },
            _ => {}
        }

        let mut fallback = None;
        let converted = match rule.to_serial {
            Some(convert) => match convert(value) {
                Ok(v) => v,
                Err(e) => {
                    warn!("Exception mapping literal for '{}': {}", rule.attribute, e);
                    fallback = Some(e);
                    value.clone()
                }
            },
            None => value.clone(),
        };

        let text = converted.to_text();
        let node = match resource_iri(&text) {
            Some(named) => named.into(),
            None => match &rule.datatype {
                Some(dtype) => Literal::new_typed_literal(text, dtype.clone()).into(),
                None => Literal::new_simple_literal(text).into(),
            },
        };
        NodeOutcome { node, fallback }
    }

    /// Translate a statement into `(subject, attribute, value)` for a category.
    ///
    /// Never fails: unmapped predicates give `attribute: None` and the raw value.
    pub fn interpret(&self, statement: &Triple, category: Option<&Category>) -> Interpretation {
        let rule = self.rule_for_property(&statement.predicate, category);
        if rule.is_none() {
            debug!("No attribute mapped for {}", statement.predicate);
        }

        let value = match rule {
            Some(r) => extract(&statement.object, r.datatype.as_ref(), r.from_serial),
            None => extract(&statement.object, None, None),
        };
        Interpretation {
            subject: statement.subject.id().to_string(),
            attribute: rule.map(|r| r.attribute.clone()),
            value,
        }
    }

    /// Look up one attribute of a resource in a graph
    pub fn value_from_graph<R, G>(&self, resource: &R, attribute: &str, graph: &G) -> Option<Value>
    where
        R: Resource + ?Sized,
        G: Graph,
    {
        let subject: RdfSubject = subject_of(resource).ok()?.into();
        let rule = self.rule_for(attribute, &resolve(resource))?;
        graph
            .query(&subject, &rule.property)
            .map(|node| extract(&node, rule.datatype.as_ref(), rule.from_serial))
    }

    /// Generate a resource's statements into a graph, returning how many were produced
    pub fn add_to_graph<R, G>(&self, resource: &R, graph: &mut G) -> MappingResult<usize>
    where
        R: Resource + ?Sized,
        G: Graph,
    {
        let statements: Vec<Triple> = self.statements(resource)?.collect();
        let count = statements.len();
        graph.add(statements);
        Ok(count)
    }

    /// Assign every mapped value stored about a resource back onto it.
    ///
    /// Values without a matching typed field go into the metadata dictionary.
    /// Returns the number of values applied.
    pub fn update_from_graph<R, G>(&self, resource: &mut R, graph: &G) -> MappingResult<usize>
    where
        R: Resource + ?Sized,
        G: Graph,
    {
        let subject: RdfSubject = subject_of(&*resource)?.into();
        let categories = resolve(&*resource);
        let mut applied = 0;

        for rule in self.rules.iter() {
            if !categories.admits(rule.category.as_ref()) {
                continue;
            }
            for node in graph.query_many(&subject, &rule.property) {
                let value = extract(&node, rule.datatype.as_ref(), rule.from_serial);
                if value.is_null() {
                    continue;
                }
                if !resource.set_attribute(&rule.attribute, value.clone()) {
                    resource.metadata_mut().insert(rule.attribute.clone(), value);
                }
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Interpret statements into a metadata dictionary, skipping unmapped predicates
    pub fn collect_metadata<'t, I>(&self, statements: I, category: Option<&Category>) -> Metadata
    where
        I: IntoIterator<Item = &'t Triple>,
    {
        statements
            .into_iter()
            .map(|s| self.interpret(s, category))
            .filter_map(|i| i.attribute.map(|attribute| (attribute, i.value)))
            .collect()
    }
}

/// Lazy statement sequence for one resource
#[derive(Debug)]
pub struct StatementStream<'a, R: ?Sized> {
    subject: NamedNode,
    resource: &'a R,
    categories: CategorySet,
    rules: indexmap::map::Values<'a, RuleKey, AttributeRule>,
    /// Metadata statement waiting behind a typed attribute statement
    pending: Option<Triple>,
    fallbacks: Vec<ConversionFallback>,
}

impl<'a, R: Resource + ?Sized> StatementStream<'a, R> {
    pub fn subject(&self) -> &NamedNode {
        &self.subject
    }

    /// Conversions that fell back to unconverted values so far
    pub fn fallbacks(&self) -> &[ConversionFallback] {
        &self.fallbacks
    }

    fn statement(&mut self, rule: &AttributeRule, value: &Value) -> Triple {
        let outcome = Mapping::make_node(value, rule);
        if let Some(error) = outcome.fallback {
            self.fallbacks.push(ConversionFallback {
                attribute: rule.attribute.clone(),
                error,
            });
        }
        Triple::new(
            self.subject.clone().into(),
            rule.property.clone(),
            outcome.node,
        )
    }
}

impl<'a, R: Resource + ?Sized> Iterator for StatementStream<'a, R> {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        if let Some(triple) = self.pending.take() {
            return Some(triple);
        }

        while let Some(rule) = self.rules.next() {
            if !self.categories.admits(rule.category.as_ref()) {
                continue;
            }

            let direct = self
                .resource
                .attribute(&rule.attribute)
                .filter(|v| !v.is_empty())
                .map(|v| self.statement(rule, &v));
            let resource = self.resource;
            let from_metadata = resource
                .metadata()
                .get(&rule.attribute)
                .filter(|v| !v.is_empty())
                .map(|v| self.statement(rule, v));

            match (direct, from_metadata) {
                (Some(d), m) => {
                    self.pending = m;
                    return Some(d);
                }
                (None, Some(m)) => return Some(m),
                (None, None) => {}
            }
        }
        None
    }
}

fn subject_of<R: Resource + ?Sized>(resource: &R) -> MappingResult<NamedNode> {
    match resource.uri() {
        None | Some("") => Err(MappingError::MissingSubject),
        Some(uri) => NamedNode::new(uri).map_err(|_| MappingError::InvalidSubject(uri.to_string())),
    }
}

fn resource_iri(text: &str) -> Option<NamedNode> {
    if !URI_SCHEMES.iter().any(|scheme| text.starts_with(scheme)) {
        return None;
    }
    NamedNode::new(text).ok()
}

/// Value carried by an object node, coerced by datatype then `from_serial`
fn extract(node: &RdfObject, datatype: Option<&NamedNode>, from_serial: Option<FromSerial>) -> Value {
    let value = match node {
        RdfObject::NamedNode(n) => Value::Resource(n.as_str().to_string()),
        RdfObject::BlankNode(b) => Value::Blank(b.as_str().to_string()),
        RdfObject::Literal(l) => match datatype {
            Some(dtype) => codec::coerce_literal(l.value(), dtype.as_str()),
            None => Value::String(l.value().to_string()),
        },
    };
    match from_serial {
        Some(convert) => convert(value),
        None => value,
    }
}
