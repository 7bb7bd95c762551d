//! JSON-LD format implementation (Basic)

use super::{SerializeError, SerializeResult};
use crate::rdf::types::{RdfObject, RdfSubject};
use crate::rdf::RdfStore;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::io::Write;

/// Write a graph as expanded JSON-LD
///
/// One node object per subject, in first-seen order. No context is
/// emitted, so every key is a full IRI.
pub(super) fn write<W: Write>(graph: &RdfStore, mut writer: W) -> SerializeResult<()> {
    let mut map: IndexMap<String, IndexMap<&str, Vec<Value>>> = IndexMap::new();

    for triple in graph {
        let s_key = match &triple.subject {
            RdfSubject::NamedNode(n) => n.as_str().to_string(),
            RdfSubject::BlankNode(b) => b.to_string(),
        };

        let o_val = match &triple.object {
            RdfObject::NamedNode(n) => json!({ "@id": n.as_str() }),
            RdfObject::BlankNode(b) => json!({ "@id": b.to_string() }),
            RdfObject::Literal(l) => {
                if let Some(lang) = l.language() {
                    json!({ "@value": l.value(), "@language": lang })
                } else if l.is_plain() {
                    json!({ "@value": l.value() })
                } else {
                    json!({ "@value": l.value(), "@type": l.datatype_iri() })
                }
            }
        };

        map.entry(s_key)
            .or_default()
            .entry(triple.predicate.as_str())
            .or_default()
            .push(o_val);
    }

    let output: Vec<Value> = map
        .into_iter()
        .map(|(subject, props)| {
            let mut node = Map::new();
            node.insert("@id".to_string(), Value::String(subject));
            for (pred, objs) in props {
                node.insert(pred.to_string(), Value::Array(objs));
            }
            Value::Object(node)
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &output)
        .map_err(|e| SerializeError::Serialize(e.to_string()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::types::{Literal, NamedNode, Triple};
    use crate::rdf::vocab::{dcterms, xsd};

    #[test]
    fn test_jsonld_serialization() {
        let rem = NamedNode::new("http://example.org/rem").unwrap();
        let graph: RdfStore = vec![
            Triple::new(
                rem.clone(),
                dcterms::CREATED,
                Literal::new_typed_literal("2020-01-01T00:00:00Z", xsd::DATE_TIME),
            ),
            Triple::new(rem, dcterms::CREATOR, NamedNode::new("http://example.org/").unwrap()),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        write(&graph, &mut out).unwrap();
        let doc: Value = serde_json::from_slice(&out).unwrap();

        let nodes = doc.as_array().unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0]["@id"], "http://example.org/rem");
        assert_eq!(
            nodes[0]["http://purl.org/dc/terms/created"][0]["@type"],
            "http://www.w3.org/2001/XMLSchema#dateTime"
        );
        assert_eq!(
            nodes[0]["http://purl.org/dc/terms/creator"][0]["@id"],
            "http://example.org/"
        );
    }
}
