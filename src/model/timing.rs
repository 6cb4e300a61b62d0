//! Events and positions on a recording's timeline

use super::{assign, float, iri, seconds};
use super::{Category, Common, Metadata, Resource, Value};

/// An annotated event, located at an instant or interval
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub common: Common,
    /// IRI of the instant or interval the event occurs at
    pub time: Option<String>,
    pub factor: Option<f64>,
}

impl Event {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            common: Common::new(uri),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.common.metadata.insert(key.into(), value.into());
        self
    }
}

impl Resource for Event {
    fn uri(&self) -> Option<&str> {
        self.common.uri()
    }

    fn category(&self) -> Option<Category> {
        Some(Category::EVENT)
    }

    fn capabilities(&self) -> &[Category] {
        &self.common.capabilities
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "time" => Some(self.time.clone().map(Value::Resource).into()),
            "factor" => Some(self.factor.into()),
            _ => self.common.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "time" => assign(&mut self.time, iri(value)),
            "factor" => assign(&mut self.factor, float(value)),
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

/// An instant at an offset from the start of a timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Instant {
    pub common: Common,
    /// Seconds from the timeline's origin
    pub at: Option<f64>,
}

impl Instant {
    pub fn new(uri: impl Into<String>) -> Self {
        let mut common = Common::new(uri);
        common.capabilities.push(Category::INSTANT);
        Self { common, at: None }
    }

    pub fn on_timeline(mut self, timeline: impl Into<String>, at: f64) -> Self {
        self.common.timeline = Some(timeline.into());
        self.at = Some(at);
        self
    }
}

impl Resource for Instant {
    fn uri(&self) -> Option<&str> {
        self.common.uri()
    }

    fn category(&self) -> Option<Category> {
        Some(Category::RELATIVE_INSTANT)
    }

    fn capabilities(&self) -> &[Category] {
        &self.common.capabilities
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "at" => Some(self.at.into()),
            _ => self.common.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "at" => assign(&mut self.at, seconds(value)),
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

/// An interval on a timeline, given by start offset and length in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub common: Common,
    pub start: Option<f64>,
    pub duration: Option<f64>,
}

impl Interval {
    pub fn new(uri: impl Into<String>) -> Self {
        let mut common = Common::new(uri);
        common.capabilities.push(Category::INTERVAL);
        Self {
            common,
            start: None,
            duration: None,
        }
    }

    pub fn on_timeline(mut self, timeline: impl Into<String>, start: f64, duration: f64) -> Self {
        self.common.timeline = Some(timeline.into());
        self.start = Some(start);
        self.duration = Some(duration);
        self
    }
}

impl Resource for Interval {
    fn uri(&self) -> Option<&str> {
        self.common.uri()
    }

    fn category(&self) -> Option<Category> {
        Some(Category::RELATIVE_INTERVAL)
    }

    fn capabilities(&self) -> &[Category] {
        &self.common.capabilities
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "start" => Some(self.start.into()),
            "duration" => Some(self.duration.into()),
            _ => self.common.attribute(name),
        }
    }

    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        match name {
            "start" => assign(&mut self.start, seconds(value)),
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
