//! The base BioSignalML rule set

use super::convert::{
    duration_from_serial, duration_to_serial, reference_from_serial, reference_to_serial,
    timestamp_from_serial, timestamp_to_serial,
};
use super::rule::{AttributeRule, RuleIndex};
use crate::model::Category;
use crate::rdf::vocab::{bsml, dcterms, evt, rdfs, tl, xsd};
use crate::rdf::{NamedNode, RdfPredicate};

fn rule(attribute: &str, property: &'static str) -> AttributeRule {
    AttributeRule::new(attribute, RdfPredicate::from(NamedNode::new_unchecked(property)))
}

fn datatype(iri: &'static str) -> NamedNode {
    NamedNode::new_unchecked(iri)
}

fn timestamp(rule: AttributeRule) -> AttributeRule {
    rule.typed(datatype(xsd::DATE_TIME))
        .with_converters(timestamp_to_serial, timestamp_from_serial)
}

fn duration(rule: AttributeRule) -> AttributeRule {
    rule.typed(datatype(xsd::DURATION))
        .with_converters(duration_to_serial, duration_from_serial)
}

fn double(rule: AttributeRule) -> AttributeRule {
    rule.typed(datatype(xsd::DOUBLE))
}

/// Rules for generic, recording, timing, event and signal attributes
pub fn bsml_rules() -> Vec<AttributeRule> {
    vec![
        // Generic metadata
        rule("label", rdfs::LABEL),
        rule("comment", rdfs::COMMENT),
        rule("description", dcterms::DESCRIPTION),
        timestamp(rule("dateSubmitted", dcterms::DATE_SUBMITTED)),
        // Recordings
        rule("format", dcterms::FORMAT).scoped(Category::RECORDING),
        rule("source", dcterms::SOURCE).scoped(Category::RECORDING),
        rule("investigation", dcterms::SUBJECT).scoped(Category::RECORDING),
        timestamp(rule("starttime", dcterms::CREATED).scoped(Category::RECORDING)),
        duration(rule("duration", dcterms::EXTENT).scoped(Category::RECORDING)),
        // Timing
        rule("timeline", tl::TIMELINE).with_converters(reference_to_serial, reference_from_serial),
        duration(rule("at", tl::AT_DURATION).scoped(Category::RELATIVE_INSTANT)),
        duration(rule("start", tl::BEGINS_AT_DURATION).scoped(Category::RELATIVE_INTERVAL)),
        duration(rule("duration", tl::DURATION_XSD).scoped(Category::RELATIVE_INTERVAL)),
        // Events
        rule("time", tl::TIME).scoped(Category::EVENT),
        rule("factor", evt::FACTOR).scoped(Category::EVENT),
        // Signals
        rule("recording", bsml::RECORDING_PROP)
            .scoped(Category::SIGNAL)
            .with_to_serial(reference_to_serial),
        rule("units", bsml::UNITS)
            .scoped(Category::SIGNAL)
            .with_to_serial(reference_to_serial),
        rule("filter", bsml::PRE_FILTER).scoped(Category::SIGNAL),
        double(rule("rate", bsml::RATE).scoped(Category::SIGNAL)),
        double(rule("minFrequency", bsml::MIN_FREQUENCY).scoped(Category::SIGNAL)),
        double(rule("maxFrequency", bsml::MAX_FREQUENCY).scoped(Category::SIGNAL)),
        double(rule("minValue", bsml::MIN_VALUE).scoped(Category::SIGNAL)),
        double(rule("maxValue", bsml::MAX_VALUE).scoped(Category::SIGNAL)),
        rule("index", bsml::INDEX)
            .scoped(Category::SIGNAL)
            .typed(datatype(xsd::INTEGER)),
    ]
}

impl RuleIndex {
    /// Index of the base rule set
    pub fn bsml() -> Self {
        Self::load(bsml_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rules_are_unique() {
        let rules = bsml_rules();
        let index = RuleIndex::bsml();
        assert_eq!(index.len(), rules.len());
    }

    #[test]
    fn test_duration_depends_on_category() {
        let index = RuleIndex::bsml();

        let recording = index.get("duration", Some(&Category::RECORDING)).unwrap();
        let interval = index.get("duration", Some(&Category::RELATIVE_INTERVAL)).unwrap();
        assert_eq!(recording.property.as_str(), dcterms::EXTENT);
        assert_eq!(interval.property.as_str(), tl::DURATION_XSD);
        assert!(index.get("duration", None).is_none());
    }

    #[test]
    fn test_signal_rules_typed() {
        let index = RuleIndex::bsml();

        let rate = index.get("rate", Some(&Category::SIGNAL)).unwrap();
        assert_eq!(rate.datatype.as_ref().map(|d| d.as_str()), Some(xsd::DOUBLE));

        let units = index.get("units", Some(&Category::SIGNAL)).unwrap();
        assert!(units.to_serial.is_some());
        assert!(units.from_serial.is_none());
    }
}
