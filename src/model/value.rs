//! Attribute values carried by domain objects and metadata dictionaries

use crate::codec;
use crate::rdf::RdfObject;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// Native value of an attribute or metadata entry
///
/// Durations are plain seconds held as `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    /// Reference to another resource by IRI
    Resource(String),
    /// Local identifier of a blank node
    Blank(String),
    /// A ready-made RDF node, emitted as is
    Node(RdfObject),
}

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null and empty text count as empty. Zero and `false` do not.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get datetime value if this is a datetime
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// IRI of a resource reference; plain text is accepted as an IRI too
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Value::Resource(iri) | Value::String(iri) => Some(iri),
            Value::Node(RdfObject::NamedNode(n)) => Some(n.as_str()),
            _ => None,
        }
    }

    /// Lexical form used when the value becomes a literal
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            // xsd:double spellings of the special values
            Value::Float(f) if f.is_nan() => "NaN".to_string(),
            Value::Float(f) if *f == f64::INFINITY => "INF".to_string(),
            Value::Float(f) if *f == f64::NEG_INFINITY => "-INF".to_string(),
            // Debug keeps the decimal point on whole numbers ("256.0").
            Value::Float(f) => format!("{:?}", f),
            Value::Boolean(b) => b.to_string(),
            Value::DateTime(dt) => codec::timestamp_to_text(dt),
            Value::Resource(iri) => iri.clone(),
            Value::Blank(id) => id.clone(),
            Value::Node(node) => match node {
                RdfObject::NamedNode(n) => n.as_str().to_string(),
                RdfObject::BlankNode(b) => b.as_str().to_string(),
                RdfObject::Literal(l) => l.value().to_string(),
            },
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Boolean",
            Value::DateTime(_) => "DateTime",
            Value::Resource(_) => "Resource",
            Value::Blank(_) => "Blank",
            Value::Node(_) => "Node",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Resource(iri) => write!(f, "<{}>", iri),
            Value::Blank(id) => write!(f, "_:{}", id),
            Value::Node(node) => write!(f, "{}", node),
            other => write!(f, "{}", other.to_text()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<RdfObject> for Value {
    fn from(node: RdfObject) -> Self {
        Value::Node(node)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Free-form metadata attached to a resource
pub type Metadata = HashMap<String, Value>;
