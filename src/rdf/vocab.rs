//! Vocabulary terms used by recording metadata

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const EVT_NS: &str = "http://purl.org/NET/c4dm/event.owl#";
pub const TL_NS: &str = "http://purl.org/NET/c4dm/timeline.owl#";
pub const BSML_NS: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#";
/// Units of measurement ontology
pub const UOME_NS: &str = "http://www.sbpax.org/uome/list.owl#";

pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

pub mod dcterms {
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const DATE_SUBMITTED: &str = "http://purl.org/dc/terms/dateSubmitted";
    pub const FORMAT: &str = "http://purl.org/dc/terms/format";
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";
    pub const SUBJECT: &str = "http://purl.org/dc/terms/subject";
    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    pub const EXTENT: &str = "http://purl.org/dc/terms/extent";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";
}

pub mod tl {
    pub const TIMELINE: &str = "http://purl.org/NET/c4dm/timeline.owl#timeline";
    pub const AT_DURATION: &str = "http://purl.org/NET/c4dm/timeline.owl#atDuration";
    pub const BEGINS_AT_DURATION: &str = "http://purl.org/NET/c4dm/timeline.owl#beginsAtDuration";
    pub const DURATION_XSD: &str = "http://purl.org/NET/c4dm/timeline.owl#durationXSD";
    pub const TIME: &str = "http://purl.org/NET/c4dm/timeline.owl#time";

    pub const INSTANT: &str = "http://purl.org/NET/c4dm/timeline.owl#Instant";
    pub const INTERVAL: &str = "http://purl.org/NET/c4dm/timeline.owl#Interval";
    pub const RELATIVE_INSTANT: &str = "http://purl.org/NET/c4dm/timeline.owl#RelativeInstant";
    pub const RELATIVE_INTERVAL: &str = "http://purl.org/NET/c4dm/timeline.owl#RelativeInterval";
}

pub mod evt {
    pub const EVENT: &str = "http://purl.org/NET/c4dm/event.owl#Event";
    pub const FACTOR: &str = "http://purl.org/NET/c4dm/event.owl#factor";
}

pub mod bsml {
    pub const RECORDING: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#Recording";
    pub const SIGNAL: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#Signal";

    pub const RECORDING_PROP: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#recording";
    pub const UNITS: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#units";
    pub const PRE_FILTER: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#preFilter";
    pub const RATE: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#rate";
    pub const MIN_FREQUENCY: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#minFrequency";
    pub const MAX_FREQUENCY: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#maxFrequency";
    pub const MIN_VALUE: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#minValue";
    pub const MAX_VALUE: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#maxValue";
    pub const INDEX: &str = "http://www.biosignalml.org/ontologies/2011/04/biosignalml#index";
}
