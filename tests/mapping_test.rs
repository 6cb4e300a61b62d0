use biosignalml::mapping::{AttributeRule, Mapping, ProfileConfig};
use biosignalml::model::{Category, Event, Instant, Interval, Metadata, Recording, Resource, Signal, Value};
use biosignalml::rdf::vocab::{bsml, dcterms, rdfs, tl};
use biosignalml::rdf::{
    load_turtle, write_turtle, Graph, Literal, NamedNode, RdfPredicate, RdfStore, Triple,
};
use biosignalml::{NamespaceManager, RuleIndex};
use chrono::NaiveDate;
use std::collections::HashMap;

/// A resource with no declared category
struct Note {
    uri: String,
    metadata: Metadata,
}

impl Resource for Note {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn category(&self) -> Option<Category> {
        None
    }

    fn attribute(&self, _name: &str) -> Option<Value> {
        None
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

fn interpret_all(mapping: &Mapping, statements: &[Triple], category: &Category) -> HashMap<String, Value> {
    statements
        .iter()
        .map(|s| mapping.interpret(s, Some(category)))
        .filter_map(|i| i.attribute.map(|a| (a, i.value)))
        .collect()
}

#[test]
fn test_category_agnostic_rules_always_apply() {
    let mapping = Mapping::bsml();

    let mut metadata = Metadata::new();
    metadata.insert("label".to_string(), Value::from("scratch"));
    metadata.insert("format".to_string(), Value::from("EDF"));
    metadata.insert("rate".to_string(), Value::Float(100.0));
    let note = Note {
        uri: "urn:note:1".to_string(),
        metadata,
    };

    let statements: Vec<Triple> = mapping.statements(&note).unwrap().collect();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].predicate.as_str(), rdfs::LABEL);

    let event = Event::new("urn:evt:1").with_metadata("comment", "arousal");
    let statements: Vec<Triple> = mapping.statements(&event).unwrap().collect();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].predicate.as_str(), rdfs::COMMENT);
}

#[test]
fn test_recording_round_trip() {
    let mapping = Mapping::bsml();
    let start = NaiveDate::from_ymd_opt(2011, 4, 5)
        .unwrap()
        .and_hms_micro_opt(22, 30, 0, 250_000)
        .unwrap();

    let mut rec = Recording::new("http://example.org/rec/1");
    rec.starttime = Some(start);
    rec.duration = Some(1800.125);
    rec.source = Some("file:///data/sleep01.edf".to_string());

    let statements: Vec<Triple> = mapping.statements(&rec).unwrap().collect();
    assert_eq!(statements.len(), 3);

    let values = interpret_all(&mapping, &statements, &Category::RECORDING);
    assert_eq!(values["starttime"], Value::DateTime(start));
    assert_eq!(values["duration"], Value::Float(1800.125));
    assert_eq!(
        values["source"],
        Value::Resource("file:///data/sleep01.edf".to_string())
    );
}

#[test]
fn test_timing_round_trip() {
    let mapping = Mapping::bsml();

    let instant = Instant::new("urn:inst:1").on_timeline("urn:tl:1", 12.5);
    let statements: Vec<Triple> = mapping.statements(&instant).unwrap().collect();
    let values = interpret_all(&mapping, &statements, &Category::RELATIVE_INSTANT);
    assert_eq!(values["at"], Value::Float(12.5));
    assert_eq!(values["timeline"], Value::Resource("urn:tl:1".to_string()));

    let interval = Interval::new("urn:int:1").on_timeline("urn:tl:1", 0.0, 30.0);
    let statements: Vec<Triple> = mapping.statements(&interval).unwrap().collect();
    assert!(statements.iter().any(|t| t.predicate.as_str() == tl::DURATION_XSD));
    let values = interpret_all(&mapping, &statements, &Category::RELATIVE_INTERVAL);
    assert_eq!(values["start"], Value::Float(0.0));
    assert_eq!(values["duration"], Value::Float(30.0));
}

#[test]
fn test_turtle_round_trip_into_signal() {
    let mapping = Mapping::bsml();
    let rec = Recording::new("http://example.org/rec/1");
    let mut signal = Signal::in_recording("http://example.org/rec/1/signal/0", &rec)
        .with_metadata("description", "Lead II");
    signal.rate = Some(256.0);
    signal.min_value = Some(-3.2);
    signal.index = Some(1);
    signal.units = biosignalml::unit_term("mV");

    let mut graph = RdfStore::new();
    assert_eq!(mapping.add_to_graph(&signal, &mut graph).unwrap(), 6);

    let turtle = write_turtle(graph.iter()).unwrap();
    let reloaded = load_turtle(&turtle).unwrap();
    assert_eq!(reloaded.len(), graph.len());

    let mut copy = Signal::new("http://example.org/rec/1/signal/0");
    assert_eq!(mapping.update_from_graph(&mut copy, &reloaded).unwrap(), 6);
    assert_eq!(copy.rate, Some(256.0));
    assert_eq!(copy.min_value, Some(-3.2));
    assert_eq!(copy.index, Some(1));
    assert_eq!(copy.recording.as_deref(), Some("http://example.org/rec/1"));
    assert_eq!(
        copy.units.as_deref(),
        Some("http://www.sbpax.org/uome/list.owl#Millivolt")
    );
    assert_eq!(copy.common.description.as_deref(), Some("Lead II"));
}

#[test]
fn test_point_lookup() {
    let mapping = Mapping::bsml();
    let mut rec = Recording::new("urn:rec:1");
    rec.duration = Some(60.0);

    let mut graph = RdfStore::new();
    mapping.add_to_graph(&rec, &mut graph).unwrap();

    assert_eq!(
        mapping.value_from_graph(&rec, "duration", &graph),
        Some(Value::Float(60.0))
    );
    assert_eq!(mapping.value_from_graph(&rec, "format", &graph), None);
    assert_eq!(mapping.value_from_graph(&rec, "rate", &graph), None);
}

#[test]
fn test_point_lookup_uses_generic_rule() {
    let mapping = Mapping::bsml();
    let mut signal = Signal::new("urn:sig:1");
    signal.common.label = Some("Lead II".to_string());

    let mut graph = RdfStore::new();
    mapping.add_to_graph(&signal, &mut graph).unwrap();

    assert_eq!(
        mapping.value_from_graph(&signal, "label", &graph),
        Some(Value::from("Lead II"))
    );
}

#[test]
fn test_point_lookup_prefers_category_rule() {
    let channel_label = RdfPredicate::new("http://example.org/channelLabel").unwrap();
    let mapping = Mapping::with_overrides(
        &RuleIndex::bsml(),
        [vec![AttributeRule::new("label", channel_label.clone()).scoped(Category::SIGNAL)]],
    );

    let label = RdfPredicate::new(rdfs::LABEL).unwrap();
    let mut graph = RdfStore::new();
    for uri in ["urn:sig:1", "urn:rec:1"] {
        let subject = NamedNode::new(uri).unwrap();
        graph.add([
            Triple::new(
                subject.clone().into(),
                label.clone(),
                Literal::new_simple_literal("generic").into(),
            ),
            Triple::new(
                subject.into(),
                channel_label.clone(),
                Literal::new_simple_literal("channel").into(),
            ),
        ]);
    }

    let signal = Signal::new("urn:sig:1");
    let recording = Recording::new("urn:rec:1");
    assert_eq!(
        mapping.value_from_graph(&signal, "label", &graph),
        Some(Value::from("channel"))
    );
    assert_eq!(
        mapping.value_from_graph(&recording, "label", &graph),
        Some(Value::from("generic"))
    );
}

#[test]
fn test_profile_overrides_base_rule() {
    let profile = ProfileConfig::from_yaml_str(
        r#"
name: custom
rules:
  - attribute: format
    property: dcterms:type
    category: bsml:Recording
"#,
    )
    .unwrap();
    let overrides = profile.into_rules(&NamespaceManager::new()).unwrap();
    let mapping = Mapping::with_overrides(&RuleIndex::bsml(), [overrides]);
    assert_eq!(mapping.rules().len(), RuleIndex::bsml().len());

    let mut rec = Recording::new("urn:rec:1");
    rec.format = Some("EDF".to_string());
    let statements: Vec<Triple> = mapping.statements(&rec).unwrap().collect();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].predicate.as_str(), "http://purl.org/dc/terms/type");

    let result = mapping.interpret(&statements[0], Some(&Category::RECORDING));
    assert_eq!(result.attribute.as_deref(), Some("format"));

    // The replaced property is no longer mapped
    let old = Triple::new(
        NamedNode::new("urn:rec:1").unwrap().into(),
        RdfPredicate::new(dcterms::FORMAT).unwrap(),
        statements[0].object.clone(),
    );
    assert_eq!(mapping.interpret(&old, Some(&Category::RECORDING)).attribute, None);
}

#[test]
fn test_collect_metadata_skips_unmapped() {
    let mapping = Mapping::bsml();
    let graph = load_turtle(
        r#"
@prefix bsml: <http://www.biosignalml.org/ontologies/2011/04/biosignalml#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<urn:sig:1> bsml:rate "512"^^xsd:double ;
    rdfs:label "EMG" ;
    <http://example.org/gain> "4" .
"#,
    )
    .unwrap();

    let metadata = mapping.collect_metadata(graph.iter(), Some(&Category::SIGNAL));
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata["rate"], Value::Float(512.0));
    assert_eq!(metadata["label"], Value::from("EMG"));
}

#[test]
fn test_custom_rule_on_graph() {
    let gain = RdfPredicate::new("http://example.org/gain").unwrap();
    let mapping = Mapping::with_overrides(
        &RuleIndex::bsml(),
        [vec![AttributeRule::new("gain", gain.clone()).scoped(Category::SIGNAL)]],
    );

    let signal = Signal::new("urn:sig:1").with_metadata("gain", 4i64);
    let mut graph = RdfStore::new();
    mapping.add_to_graph(&signal, &mut graph).unwrap();

    let subject = NamedNode::new("urn:sig:1").unwrap().into();
    let object = graph.query(&subject, &gain).unwrap();
    assert_eq!(object.as_literal().unwrap().value(), "4");
    assert!(graph
        .query(&subject, &RdfPredicate::new(bsml::RATE).unwrap())
        .is_none());
}
