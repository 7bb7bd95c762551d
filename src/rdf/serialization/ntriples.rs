//! N-Triples format implementation

use super::{from_rio, to_rio, ParseResult, SerializeError, SerializeResult};
use crate::rdf::RdfStore;
use rio_api::formatter::TriplesFormatter;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};
use std::io::{BufReader, Cursor, Write};

/// Parse an N-Triples document
pub(super) fn parse(input: &str) -> ParseResult<RdfStore> {
    let mut reader = BufReader::new(Cursor::new(input));
    let mut parser = NTriplesParser::new(&mut reader);

    let mut graph = RdfStore::new();
    let res: ParseResult<()> = parser.parse_all(&mut |t| {
        graph.insert(from_rio(t)?);
        Ok(())
    });
    res?;

    Ok(graph)
}

/// Write a graph as N-Triples, one statement per line
pub(super) fn write<W: Write>(graph: &RdfStore, mut writer: W) -> SerializeResult<()> {
    {
        let mut formatter = NTriplesFormatter::new(&mut writer);
        for triple in graph {
            formatter
                .format(&to_rio(triple))
                .map_err(|e| SerializeError::Serialize(e.to_string()))?;
        }
    }
    writer.flush()?;
    Ok(())
}
