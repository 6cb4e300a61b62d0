//! Category tags and their resolution
//!
//! Every domain object carries an explicit declared category plus the
//! categories of the capabilities it implements. Mapping rules scoped to a
//! category apply only to objects whose resolved set contains it.

use super::Resource;
use crate::rdf::vocab::{bsml, evt, tl};
use std::borrow::Cow;
use std::fmt;

/// Category identifier (an ontology class IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(Cow<'static, str>);

impl Category {
    pub const RECORDING: Category = Category(Cow::Borrowed(bsml::RECORDING));
    pub const SIGNAL: Category = Category(Cow::Borrowed(bsml::SIGNAL));
    pub const EVENT: Category = Category(Cow::Borrowed(evt::EVENT));
    pub const INSTANT: Category = Category(Cow::Borrowed(tl::INSTANT));
    pub const INTERVAL: Category = Category(Cow::Borrowed(tl::INTERVAL));
    pub const RELATIVE_INSTANT: Category = Category(Cow::Borrowed(tl::RELATIVE_INSTANT));
    pub const RELATIVE_INTERVAL: Category = Category(Cow::Borrowed(tl::RELATIVE_INTERVAL));

    /// Create a category from any class IRI
    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Category {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

/// Ordered, duplicate-free set of categories, most specific first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category unless already present
    pub fn insert(&mut self, category: Category) -> bool {
        if self.0.contains(&category) {
            return false;
        }
        self.0.push(category);
        true
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.0.contains(category)
    }

    /// Whether a rule scoped to `category` applies; `None` always does.
    pub fn admits(&self, category: Option<&Category>) -> bool {
        category.map_or(true, |c| self.contains(c))
    }

    /// The declared category, if any
    pub fn primary(&self) -> Option<&Category> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Resolve the categories a resource belongs to: its declared category followed
/// by those of its capabilities, most specific first.
pub fn resolve<R: Resource + ?Sized>(resource: &R) -> CategorySet {
    resource
        .category()
        .into_iter()
        .chain(resource.capabilities().iter().cloned())
        .collect()
}
