//! Recordings and the signals they contain

use super::{assign, float, integer, iri, seconds, text, timestamp};
use super::{Category, Common, Metadata, Resource, Value};
use chrono::NaiveDateTime;

/// A signal recording, as produced by a format-specific reader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub common: Common,
    pub format: Option<String>,
    pub source: Option<String>,
    pub investigation: Option<String>,
    pub starttime: Option<NaiveDateTime>,
    /// Seconds
    pub duration: Option<f64>,
}

impl Recording {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            common: Common::new(uri),
            ..Self::default()
        }
    }

    /// Tag the recording with an extra capability category
    pub fn with_capability(mut self, category: Category) -> Self {
        self.common.capabilities.push(category);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.common.metadata.insert(key.into(), value.into());
        self
    }
}

impl Resource for Recording {
    fn uri(&self) -> Option<&str> {
        self.common.uri()
    }

    fn category(&self) -> Option<Category> {
        Some(Category::RECORDING)
    }

    fn capabilities(&self) -> &[Category] {
        &self.common.capabilities
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        let value: Value = match name {
            "format" => self.format.clone().into(),
            "source" => self.source.clone().map(Value::Resource).into(),
            "investigation" => self.investigation.clone().into(),
            "starttime" => self.starttime.into(),
            "duration" => self.duration.into(),
            _ => return self.common.attribute(name),
        };
        Some(value)
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "format" => assign(&mut self.format, text(value)),
            "source" => assign(&mut self.source, iri(value)),
            "investigation" => assign(&mut self.investigation, text(value)),
            "starttime" => assign(&mut self.starttime, timestamp(value)),
            "duration" => assign(&mut self.duration, seconds(value)),
            _ => self.common.set_attribute(name, value),
        }
    }

    fn metadata(&self) -> &Metadata {
        &self.common.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.common.metadata
    }
}

/// One channel of a recording
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    pub common: Common,
    /// IRI of the owning recording
    pub recording: Option<String>,
    /// Unit-ontology term IRI
    pub units: Option<String>,
    pub filter: Option<String>,
    /// Samples per second
    pub rate: Option<f64>,
    pub min_frequency: Option<f64>,
    pub max_frequency: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub index: Option<i64>,
}

impl Signal {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            common: Common::new(uri),
            ..Self::default()
        }
    }

    /// Create a signal belonging to `recording`
    pub fn in_recording(uri: impl Into<String>, recording: &Recording) -> Self {
        Self {
            recording: recording.common.uri.clone(),
            ..Self::new(uri)
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.common.metadata.insert(key.into(), value.into());
        self
    }
}

impl Resource for Signal {
    fn uri(&self) -> Option<&str> {
        self.common.uri()
    }

    fn category(&self) -> Option<Category> {
        Some(Category::SIGNAL)
    }

    fn capabilities(&self) -> &[Category] {
        &self.common.capabilities
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        let value: Value = match name {
            "recording" => self.recording.clone().map(Value::Resource).into(),
            "units" => self.units.clone().map(Value::Resource).into(),
            "filter" => self.filter.clone().into(),
            "rate" => self.rate.into(),
            "minFrequency" => self.min_frequency.into(),
            "maxFrequency" => self.max_frequency.into(),
            "minValue" => self.min_value.into(),
            "maxValue" => self.max_value.into(),
            "index" => self.index.into(),
            _ => return self.common.attribute(name),
        };
        Some(value)
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "recording" => assign(&mut self.recording, iri(value)),
            "units" => assign(&mut self.units, iri(value)),
            "filter" => assign(&mut self.filter, text(value)),
            "rate" => assign(&mut self.rate, float(value)),
            "minFrequency" => assign(&mut self.min_frequency, float(value)),
            "maxFrequency" => assign(&mut self.max_frequency, float(value)),
            "minValue" => assign(&mut self.min_value, float(value)),
            "maxValue" => assign(&mut self.max_value, float(value)),
            "index" => assign(&mut self.index, integer(value)),
            _ => self.common.set_attribute(name, value),
        }
    }

    fn metadata(&self) -> &Metadata {
        &self.common.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.common.metadata
    }
}
