//! Attribute rules and the forward rule index
//!
//! A rule binds an attribute name, optionally scoped to a category, to the
//! property used in statements, plus the literal datatype and converters used
//! on the way in and out.

use crate::model::{Category, Value};
use crate::rdf::{NamedNode, RdfPredicate};
use indexmap::IndexMap;
use thiserror::Error;

/// A `to_serial` converter rejected a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Value has a type the converter does not handle
    #[error("{converter} converter cannot handle {found} values")]
    UnexpectedType {
        converter: &'static str,
        found: &'static str,
    },

    /// Text value is malformed for the converter
    #[error("{converter} converter cannot parse '{text}': {reason}")]
    InvalidText {
        converter: &'static str,
        text: String,
        reason: String,
    },
}

/// Native value → serializable value, applied before node construction
pub type ToSerial = fn(&Value) -> Result<Value, ConversionError>;

/// Deserialized value → final attribute value
pub type FromSerial = fn(Value) -> Value;

/// Mapping between one attribute and one property
#[derive(Debug, Clone)]
pub struct AttributeRule {
    pub attribute: String,
    pub property: RdfPredicate,
    /// `None` applies to every category
    pub category: Option<Category>,
    /// Datatype given to plain literals
    pub datatype: Option<NamedNode>,
    pub to_serial: Option<ToSerial>,
    pub from_serial: Option<FromSerial>,
}

impl AttributeRule {
    /// Create a category-agnostic rule with no datatype or converters
    pub fn new(attribute: impl Into<String>, property: RdfPredicate) -> Self {
        Self {
            attribute: attribute.into(),
            property,
            category: None,
            datatype: None,
            to_serial: None,
            from_serial: None,
        }
    }

    pub fn scoped(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn typed(mut self, datatype: NamedNode) -> Self {
        self.datatype = Some(datatype);
        self
    }

    pub fn with_to_serial(mut self, converter: ToSerial) -> Self {
        self.to_serial = Some(converter);
        self
    }

    pub fn with_from_serial(mut self, converter: FromSerial) -> Self {
        self.from_serial = Some(converter);
        self
    }

    pub fn with_converters(self, to: ToSerial, from: FromSerial) -> Self {
        self.with_to_serial(to).with_from_serial(from)
    }

    /// Key in the forward index
    pub fn key(&self) -> RuleKey {
        RuleKey::new(&self.attribute, self.category.as_ref())
    }
}

/// `(name, category)` with an absent category stored as the empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey(String, String);

impl RuleKey {
    pub fn new(name: &str, category: Option<&Category>) -> Self {
        Self(
            name.to_string(),
            category.map(|c| c.as_str().to_string()).unwrap_or_default(),
        )
    }
}

/// Forward index: `(attribute, category)` → rule, in declaration order
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    rules: IndexMap<RuleKey, AttributeRule>,
}

impl RuleIndex {
    /// Build an index from a rule list. Later rules with the same key win.
    pub fn load<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = AttributeRule>,
    {
        let mut index = Self::default();
        index.merge(rules);
        index
    }

    /// Overlay further rules, last-wins per key
    pub fn merge<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = AttributeRule>,
    {
        for rule in rules {
            self.rules.insert(rule.key(), rule);
        }
    }

    pub fn get(&self, attribute: &str, category: Option<&Category>) -> Option<&AttributeRule> {
        self.rules.get(&RuleKey::new(attribute, category))
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&AttributeRule> {
        self.rules.get_index(index).map(|(_, rule)| rule)
    }

    pub(crate) fn values(&self) -> indexmap::map::Values<'_, RuleKey, AttributeRule> {
        self.rules.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab::{bsml, dcterms, rdfs};

    fn predicate(iri: &str) -> RdfPredicate {
        RdfPredicate::new(iri).unwrap()
    }

    #[test]
    fn test_load_last_wins() {
        let index = RuleIndex::load(vec![
            AttributeRule::new("label", predicate(rdfs::LABEL)),
            AttributeRule::new("label", predicate(dcterms::DESCRIPTION)),
        ]);

        assert_eq!(index.len(), 1);
        let rule = index.get("label", None).unwrap();
        assert_eq!(rule.property.as_str(), dcterms::DESCRIPTION);
    }

    #[test]
    fn test_category_is_part_of_key() {
        let index = RuleIndex::load(vec![
            AttributeRule::new("duration", predicate(dcterms::EXTENT)).scoped(Category::RECORDING),
            AttributeRule::new("duration", predicate(bsml::RATE)),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("duration", Some(&Category::RECORDING)).unwrap().property.as_str(),
            dcterms::EXTENT
        );
        assert_eq!(index.get("duration", None).unwrap().property.as_str(), bsml::RATE);
        assert!(index.get("duration", Some(&Category::SIGNAL)).is_none());
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let mut index = RuleIndex::load(vec![
            AttributeRule::new("label", predicate(rdfs::LABEL)),
            AttributeRule::new("comment", predicate(rdfs::COMMENT)),
        ]);
        index.merge(vec![AttributeRule::new("label", predicate(dcterms::DESCRIPTION))]);

        let order: Vec<&str> = index.iter().map(|r| r.attribute.as_str()).collect();
        assert_eq!(order, vec!["label", "comment"]);
        assert_eq!(index.get("label", None).unwrap().property.as_str(), dcterms::DESCRIPTION);
    }
}
