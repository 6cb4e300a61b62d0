//! Turtle reading and writing for metadata graphs

use super::store::{Graph, RdfStore};
use super::types::{BlankNode, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple};
use super::vocab;
use rio_api::formatter::TriplesFormatter;
use rio_api::model;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleFormatter, TurtleParser};
use std::io::{BufReader, Cursor};
use thiserror::Error;

/// Turtle errors
#[derive(Error, Debug)]
pub enum TurtleError {
    /// Syntax or term error while parsing
    #[error("Parse error: {0}")]
    Parse(String),

    /// Formatting failure
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type TurtleResult<T> = Result<T, TurtleError>;

/// Parse a Turtle document into triples
pub fn parse_turtle(input: &str) -> TurtleResult<Vec<Triple>> {
    let mut reader = BufReader::new(Cursor::new(input));
    let mut parser = TurtleParser::new(&mut reader, None);
    let mut triples = Vec::new();

    let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
        let triple = convert_triple(t)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        triples.push(triple);
        Ok(())
    });

    res.map_err(|e| TurtleError::Parse(e.to_string()))?;
    Ok(triples)
}

/// Parse a Turtle document straight into a store
pub fn load_turtle(input: &str) -> TurtleResult<RdfStore> {
    let mut store = RdfStore::new();
    store.add(parse_turtle(input)?);
    Ok(store)
}

/// Serialize triples as Turtle
pub fn write_turtle<'a, I>(triples: I) -> TurtleResult<String>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut output = Vec::new();
    let mut formatter = TurtleFormatter::new(&mut output);

    for triple in triples {
        let subject = match &triple.subject {
            RdfSubject::NamedNode(n) => model::Subject::NamedNode(model::NamedNode { iri: n.as_str() }),
            RdfSubject::BlankNode(b) => model::Subject::BlankNode(model::BlankNode { id: b.as_str() }),
        };
        let predicate = model::NamedNode {
            iri: triple.predicate.as_str(),
        };

        // Keeps the datatype IRI alive for the borrowed rio literal.
        let datatype;
        let object = match &triple.object {
            RdfObject::NamedNode(n) => model::Term::NamedNode(model::NamedNode { iri: n.as_str() }),
            RdfObject::BlankNode(b) => model::Term::BlankNode(model::BlankNode { id: b.as_str() }),
            RdfObject::Literal(l) => {
                let literal = if let Some(language) = l.language() {
                    model::Literal::LanguageTaggedString {
                        value: l.value(),
                        language,
                    }
                } else {
                    datatype = l.datatype();
                    if datatype.as_str() == vocab::xsd::STRING {
                        model::Literal::Simple { value: l.value() }
                    } else {
                        model::Literal::Typed {
                            value: l.value(),
                            datatype: model::NamedNode {
                                iri: datatype.as_str(),
                            },
                        }
                    }
                };
                model::Term::Literal(literal)
            }
        };

        formatter
            .format(&model::Triple {
                subject,
                predicate,
                object,
            })
            .map_err(|e| TurtleError::Serialize(e.to_string()))?;
    }

    formatter
        .finish()
        .map_err(|e| TurtleError::Serialize(e.to_string()))?;

    String::from_utf8(output).map_err(|e| TurtleError::Serialize(e.to_string()))
}

fn convert_triple(t: model::Triple<'_>) -> TurtleResult<Triple> {
    let subject = match t.subject {
        model::Subject::NamedNode(n) => RdfSubject::NamedNode(named(n.iri)?),
        model::Subject::BlankNode(b) => RdfSubject::BlankNode(blank(b.id)?),
        _ => return Err(TurtleError::Parse("Unsupported subject type".to_string())),
    };
    let predicate = RdfPredicate::from(named(t.predicate.iri)?);
    let object = match t.object {
        model::Term::NamedNode(n) => RdfObject::NamedNode(named(n.iri)?),
        model::Term::BlankNode(b) => RdfObject::BlankNode(blank(b.id)?),
        model::Term::Literal(model::Literal::Simple { value }) => {
            RdfObject::Literal(Literal::new_simple_literal(value))
        }
        model::Term::Literal(model::Literal::LanguageTaggedString { value, language }) => {
            RdfObject::Literal(
                Literal::new_language_tagged_literal(value, language)
                    .map_err(|e| TurtleError::Parse(e.to_string()))?,
            )
        }
        model::Term::Literal(model::Literal::Typed { value, datatype }) => {
            RdfObject::Literal(Literal::new_typed_literal(value, named(datatype.iri)?))
        }
        _ => return Err(TurtleError::Parse("Unsupported object type".to_string())),
    };
    Ok(Triple::new(subject, predicate, object))
}

fn named(iri: &str) -> TurtleResult<NamedNode> {
    NamedNode::new(iri).map_err(|e| TurtleError::Parse(e.to_string()))
}

fn blank(id: &str) -> TurtleResult<BlankNode> {
    BlankNode::from_id(id).map_err(|e| TurtleError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_and_resource_objects() {
        let input = r#"
            <urn:sig:1> <http://www.biosignalml.org/ontologies/2011/04/biosignalml#rate>
                "256.0"^^<http://www.w3.org/2001/XMLSchema#double> .
            <urn:sig:1> <http://www.biosignalml.org/ontologies/2011/04/biosignalml#recording> <urn:rec:1> .
            <urn:sig:1> <http://www.w3.org/2000/01/rdf-schema#label> "Lead II"@en .
        "#;
        let triples = parse_turtle(input).unwrap();
        assert_eq!(triples.len(), 3);

        let rate = triples[0].object.as_literal().unwrap();
        assert_eq!(rate.value(), "256.0");
        assert_eq!(rate.datatype().as_str(), vocab::xsd::DOUBLE);
        assert!(triples[1].object.is_named_node());
        assert_eq!(triples[2].object.as_literal().unwrap().language(), Some("en"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_turtle("<urn:a> <urn:b> ."),
            Err(TurtleError::Parse(_))
        ));
    }

    #[test]
    fn test_write_then_load() {
        let input = r#"<urn:rec:1> <http://purl.org/dc/terms/format> "EDF" ."#;
        let store = load_turtle(input).unwrap();
        let output = write_turtle(store.iter()).unwrap();
        assert!(output.contains("<urn:rec:1>"));
        assert!(output.contains("\"EDF\""));

        let reloaded = load_turtle(&output).unwrap();
        assert_eq!(reloaded.len(), 1);
    }
}
