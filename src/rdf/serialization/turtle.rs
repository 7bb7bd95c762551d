//! Turtle format implementation
//!
//! Reading goes through rio_turtle. Writing is done here because the rio
//! formatter has no prefix support: output starts with one `@prefix` line
//! per namespace actually used, followed by one block per subject.
//!
//! ```turtle
//! @prefix dc: <http://purl.org/dc/elements/1.1/> .
//!
//! <http://example.org/cho> dc:date "2020" ;
//!     dc:title "Chicago" .
//! ```

use super::{from_rio, ParseResult, SerializeResult};
use crate::rdf::types::{Literal, RdfObject, RdfPredicate, RdfSubject};
use crate::rdf::vocab::rdf;
use crate::rdf::{NamespaceManager, RdfStore};
use indexmap::IndexMap;
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use std::collections::BTreeMap;
use std::io::{BufReader, Cursor, Write};

/// Parse a Turtle document
pub(super) fn parse(input: &str, base_iri: Option<&str>) -> ParseResult<RdfStore> {
    let base = base_iri
        .map(|iri| oxiri::Iri::parse(iri.to_string()))
        .transpose()
        .map_err(|e| super::ParseError::Parse(format!("invalid base IRI: {e}")))?;

    let mut reader = BufReader::new(Cursor::new(input));
    let mut parser = TurtleParser::new(&mut reader, base);

    let mut graph = RdfStore::new();
    let res: ParseResult<()> = parser.parse_all(&mut |t| {
        graph.insert(from_rio(t)?);
        Ok(())
    });
    res?;

    Ok(graph)
}

/// Write a graph as Turtle
pub(super) fn write<W: Write>(
    graph: &RdfStore,
    mut writer: W,
    namespaces: &NamespaceManager,
) -> SerializeResult<()> {
    let mut used = BTreeMap::new();
    let mut blocks = Vec::new();

    for (subject, predicates) in group_by_subject(graph) {
        let mut block = subject_term(subject, namespaces, &mut used);

        for (i, (predicate, objects)) in predicates.iter().enumerate() {
            block.push_str(if i == 0 { " " } else { " ;\n    " });
            block.push_str(&predicate_term(predicate, namespaces, &mut used));

            for (j, object) in objects.iter().enumerate() {
                block.push_str(if j == 0 { " " } else { " ,\n        " });
                block.push_str(&object_term(object, namespaces, &mut used));
            }
        }

        block.push_str(" .\n");
        blocks.push(block);
    }

    for (prefix, iri) in &used {
        writeln!(writer, "@prefix {}: <{}> .", prefix, iri)?;
    }
    if !used.is_empty() && !blocks.is_empty() {
        writeln!(writer)?;
    }

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writer.write_all(block.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

type PredicateObjects<'a> = IndexMap<&'a RdfPredicate, Vec<&'a RdfObject>>;

fn group_by_subject(graph: &RdfStore) -> IndexMap<&RdfSubject, PredicateObjects<'_>> {
    let mut by_subject: IndexMap<&RdfSubject, PredicateObjects<'_>> = IndexMap::new();
    for triple in graph {
        by_subject
            .entry(&triple.subject)
            .or_default()
            .entry(&triple.predicate)
            .or_default()
            .push(&triple.object);
    }
    by_subject
}

/// Prefix name → namespace IRI, for the prefixes the body refers to
type UsedPrefixes = BTreeMap<String, String>;

fn iri_term(iri: &str, namespaces: &NamespaceManager, used: &mut UsedPrefixes) -> String {
    match namespaces.split(iri) {
        Some((prefix, local)) => {
            if let Ok(ns) = namespaces.get_iri(prefix) {
                used.entry(prefix.to_string()).or_insert_with(|| ns.to_string());
            }
            format!("{}:{}", prefix, local)
        }
        None => format!("<{}>", iri),
    }
}

fn subject_term(
    subject: &RdfSubject,
    namespaces: &NamespaceManager,
    used: &mut UsedPrefixes,
) -> String {
    match subject {
        RdfSubject::NamedNode(n) => iri_term(n.as_str(), namespaces, used),
        RdfSubject::BlankNode(b) => b.to_string(),
    }
}

fn predicate_term(
    predicate: &RdfPredicate,
    namespaces: &NamespaceManager,
    used: &mut UsedPrefixes,
) -> String {
    if predicate.as_str() == rdf::TYPE.as_str() {
        "a".to_string()
    } else {
        iri_term(predicate.as_str(), namespaces, used)
    }
}

fn object_term(object: &RdfObject, namespaces: &NamespaceManager, used: &mut UsedPrefixes) -> String {
    match object {
        RdfObject::NamedNode(n) => iri_term(n.as_str(), namespaces, used),
        RdfObject::BlankNode(b) => b.to_string(),
        RdfObject::Literal(l) => literal_term(l, namespaces, used),
    }
}

fn literal_term(literal: &Literal, namespaces: &NamespaceManager, used: &mut UsedPrefixes) -> String {
    let quoted = format!("\"{}\"", escape(literal.value()));
    if let Some(language) = literal.language() {
        format!("{}@{}", quoted, language)
    } else if literal.is_plain() {
        quoted
    } else {
        format!(
            "{}^^{}",
            quoted,
            iri_term(literal.datatype_iri(), namespaces, used)
        )
    }
}

/// Escape for STRING_LITERAL_QUOTE
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
