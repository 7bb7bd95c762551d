//! marc2edm: print EDM triples for the digital repository collection
//!
//! ```text
//! marc2edm --socscimaps-project-triples > collection.ttl
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use metadata_converters::rdf::{RdfFormat, RdfSerializer, RdfStore};
use metadata_converters::{
    build_collection_triples, edm_namespaces, CollectionConfig, ConverterError,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "marc2edm", version, about = "Emit Europeana Data Model triples")]
struct Cli {
    /// Print the collection-level EDM triples
    #[arg(long = "socscimaps-project-triples", visible_alias = "collection-triples")]
    project_triples: bool,

    /// Output syntax (turtle, ntriples, rdfxml, jsonld)
    #[arg(long, default_value_t = RdfFormat::Turtle)]
    format: RdfFormat,

    /// YAML file overriding the collection defaults
    #[arg(long, env = "MARC2EDM_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the RDF document.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.project_triples {
        return Err(ConverterError::NotImplemented(
            "only --socscimaps-project-triples is supported",
        )
        .into());
    }

    let config = match &cli.config {
        Some(path) => CollectionConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CollectionConfig::default(),
    };
    let collection = config.resolve().context("resolving collection IRIs")?;
    debug!(?collection, "collection settings");

    let graph = build_collection_triples(RdfStore::new(), &collection, Utc::now());

    let stdout = BufWriter::new(io::stdout().lock());
    RdfSerializer::write(&graph, stdout, cli.format, &edm_namespaces())
        .context("writing graph to stdout")?;
    Ok(())
}
