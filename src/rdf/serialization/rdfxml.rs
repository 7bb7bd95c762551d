//! RDF/XML format implementation (write only)

use super::{to_rio, SerializeError, SerializeResult};
use crate::rdf::RdfStore;
use rio_api::formatter::TriplesFormatter;
use rio_xml::RdfXmlFormatter;
use std::io::Write;

/// Write a graph as RDF/XML
pub(super) fn write<W: Write>(graph: &RdfStore, mut writer: W) -> SerializeResult<()> {
    let mut formatter = RdfXmlFormatter::with_indentation(&mut writer, 2)?;
    for triple in graph {
        formatter
            .format(&to_rio(triple))
            .map_err(|e| SerializeError::Serialize(e.to_string()))?;
    }
    formatter.finish()?;
    writer.flush()?;
    Ok(())
}
