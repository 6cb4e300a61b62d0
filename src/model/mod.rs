//! Domain model for biosignal recording metadata
//!
//! Recordings, signals, events and timeline positions. Each type exposes its
//! fields to the mapping engine by attribute name through [`Resource`].

mod category;
mod recording;
mod timing;
mod value;

pub use category::{resolve, Category, CategorySet};
pub use recording::{Recording, Signal};
pub use timing::{Event, Instant, Interval};
pub use value::{Metadata, Value};

use crate::codec;
use chrono::NaiveDateTime;

/// What the mapping engine needs from a domain object
pub trait Resource {
    /// Subject identifier (IRI)
    fn uri(&self) -> Option<&str>;

    /// Declared category
    fn category(&self) -> Option<Category>;

    /// Categories of implemented capabilities, most specific first
    fn capabilities(&self) -> &[Category] {
        &[]
    }

    /// Value of a typed field by attribute name; `None` if there is no such field
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Assign a typed field by attribute name.
    ///
    /// Returns false when there is no such field or the value does not fit it.
    fn set_attribute(&mut self, _name: &str, _value: Value) -> bool {
        false
    }

    fn metadata(&self) -> &Metadata;

    fn metadata_mut(&mut self) -> &mut Metadata;
}

/// Attributes shared by every resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Common {
    pub uri: Option<String>,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub description: Option<String>,
    pub date_submitted: Option<NaiveDateTime>,
    /// Timeline the resource is positioned on
    pub timeline: Option<String>,
    pub capabilities: Vec<Category>,
    pub metadata: Metadata,
}

impl Common {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub(crate) fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<Value> {
        let value: Value = match name {
            "label" => self.label.clone().into(),
            "comment" => self.comment.clone().into(),
            "description" => self.description.clone().into(),
            "dateSubmitted" => self.date_submitted.into(),
            "timeline" => self.timeline.clone().map(Value::Resource).into(),
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "label" => assign(&mut self.label, text(value)),
            "comment" => assign(&mut self.comment, text(value)),
            "description" => assign(&mut self.description, text(value)),
            "dateSubmitted" => assign(&mut self.date_submitted, timestamp(value)),
            "timeline" => assign(&mut self.timeline, iri(value)),
            _ => false,
        }
    }
}

fn assign<T>(field: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *field = Some(v);
            true
        }
        None => false,
    }
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_text()),
    }
}

fn iri(value: Value) -> Option<String> {
    value.as_iri().map(str::to_string)
}

fn float(value: Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_float(),
    }
}

fn integer(value: Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(i),
        Value::String(s) => s.trim().parse().ok(),
        Value::Float(f) if f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}

fn timestamp(value: Value) -> Option<NaiveDateTime> {
    match value {
        Value::DateTime(dt) => Some(dt),
        Value::String(s) => codec::text_to_timestamp(&s).ok(),
        _ => None,
    }
}

/// Durations arrive either as seconds or as ISO 8601 text.
fn seconds(value: Value) -> Option<f64> {
    match value {
        Value::String(s) => codec::try_text_to_duration_seconds(&s)
            .ok()
            .or_else(|| s.trim().parse().ok()),
        other => other.as_float(),
    }
}
