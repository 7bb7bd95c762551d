//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL), read and write
//! - N-Triples (NT), read and write
//! - RDF/XML, write only
//! - JSON-LD (expanded form), write only

mod jsonld;
mod ntriples;
mod rdfxml;
mod turtle;

use super::types::{
    BlankNode, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple,
};
use super::{NamespaceManager, RdfStore};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    #[default]
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf)
    RdfXml,
    /// JSON-LD format (.jsonld)
    JsonLd,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
            RdfFormat::RdfXml => "rdfxml",
            RdfFormat::JsonLd => "jsonld",
        };
        f.write_str(name)
    }
}

impl FromStr for RdfFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            "rdfxml" | "rdf/xml" | "xml" | "rdf" => Ok(RdfFormat::RdfXml),
            "jsonld" | "json-ld" => Ok(RdfFormat::JsonLd),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error reported by the Turtle / N-Triples reader
    #[error("Parse error: {0}")]
    Syntax(#[from] rio_turtle::TurtleError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),

    /// Format name not recognised
    #[error("Unknown RDF format: {0}")]
    UnknownFormat(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// RDF parser
pub struct RdfParser;

impl RdfParser {
    /// Parse RDF data from a string
    pub fn parse(input: &str, format: RdfFormat) -> ParseResult<RdfStore> {
        Self::parse_with_base(input, format, None)
    }

    /// Parse RDF data, resolving relative IRIs against `base_iri`
    pub fn parse_with_base(
        input: &str,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> ParseResult<RdfStore> {
        let graph = match format {
            RdfFormat::Turtle => turtle::parse(input, base_iri)?,
            RdfFormat::NTriples => ntriples::parse(input)?,
            RdfFormat::RdfXml | RdfFormat::JsonLd => {
                return Err(ParseError::UnsupportedFormat(format))
            }
        };
        debug!(%format, triples = graph.len(), "parsed RDF");
        Ok(graph)
    }
}

/// RDF serializer
pub struct RdfSerializer;

impl RdfSerializer {
    /// Serialize a graph to a string
    pub fn serialize(
        graph: &RdfStore,
        format: RdfFormat,
        namespaces: &NamespaceManager,
    ) -> SerializeResult<String> {
        let mut output = Vec::new();
        Self::write(graph, &mut output, format, namespaces)?;
        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }

    /// Serialize a graph into a writer
    ///
    /// `namespaces` is only consulted by the Turtle writer.
    pub fn write<W: Write>(
        graph: &RdfStore,
        writer: W,
        format: RdfFormat,
        namespaces: &NamespaceManager,
    ) -> SerializeResult<()> {
        debug!(%format, triples = graph.len(), "serializing RDF");
        match format {
            RdfFormat::Turtle => turtle::write(graph, writer, namespaces),
            RdfFormat::NTriples => ntriples::write(graph, writer),
            RdfFormat::RdfXml => rdfxml::write(graph, writer),
            RdfFormat::JsonLd => jsonld::write(graph, writer),
        }
    }
}

/// Borrow a triple as a rio model triple
fn to_rio(triple: &Triple) -> rio_api::model::Triple<'_> {
    use rio_api::model;

    let subject = match &triple.subject {
        RdfSubject::NamedNode(n) => model::Subject::NamedNode(model::NamedNode { iri: n.as_str() }),
        RdfSubject::BlankNode(b) => model::Subject::BlankNode(model::BlankNode { id: b.as_str() }),
    };

    let object = match &triple.object {
        RdfObject::NamedNode(n) => model::Term::NamedNode(model::NamedNode { iri: n.as_str() }),
        RdfObject::BlankNode(b) => model::Term::BlankNode(model::BlankNode { id: b.as_str() }),
        RdfObject::Literal(l) => model::Term::Literal(to_rio_literal(l)),
    };

    model::Triple {
        subject,
        predicate: model::NamedNode {
            iri: triple.predicate.as_str(),
        },
        object,
    }
}

fn to_rio_literal(literal: &Literal) -> rio_api::model::Literal<'_> {
    use rio_api::model;

    if let Some(language) = literal.language() {
        model::Literal::LanguageTaggedString {
            value: literal.value(),
            language,
        }
    } else if literal.is_plain() {
        model::Literal::Simple {
            value: literal.value(),
        }
    } else {
        model::Literal::Typed {
            value: literal.value(),
            datatype: model::NamedNode {
                iri: literal.datatype_iri(),
            },
        }
    }
}

/// Copy a rio model triple into an owned triple
fn from_rio(triple: rio_api::model::Triple<'_>) -> ParseResult<Triple> {
    use rio_api::model;

    let subject: RdfSubject = match triple.subject {
        model::Subject::NamedNode(n) => named_node(n.iri)?.into(),
        model::Subject::BlankNode(b) => blank_node(b.id)?.into(),
        _ => return Err(ParseError::Parse("Unsupported subject type".to_string())),
    };

    let predicate: RdfPredicate = named_node(triple.predicate.iri)?.into();

    let object: RdfObject = match triple.object {
        model::Term::NamedNode(n) => named_node(n.iri)?.into(),
        model::Term::BlankNode(b) => blank_node(b.id)?.into(),
        model::Term::Literal(model::Literal::Simple { value }) => {
            Literal::new_simple_literal(value).into()
        }
        model::Term::Literal(model::Literal::LanguageTaggedString { value, language }) => {
            Literal::new_language_tagged_literal(value, language)
                .map_err(|e| ParseError::Parse(e.to_string()))?
                .into()
        }
        model::Term::Literal(model::Literal::Typed { value, datatype }) => {
            Literal::new_typed_literal(value, named_node(datatype.iri)?).into()
        }
        _ => return Err(ParseError::Parse("Unsupported object type".to_string())),
    };

    Ok(Triple::new(subject, predicate, object))
}

fn named_node(iri: &str) -> ParseResult<NamedNode> {
    NamedNode::new(iri).map_err(|e| ParseError::Parse(e.to_string()))
}

fn blank_node(id: &str) -> ParseResult<BlankNode> {
    BlankNode::from_id(id).map_err(|e| ParseError::Parse(e.to_string()))
}
