//! Vocabulary terms used by the EDM mapping

use oxrdf::NamedNodeRef;

macro_rules! iri {
    ($iri:expr) => {
        NamedNodeRef::new_unchecked($iri)
    };
}

type N = NamedNodeRef<'static>;

pub use oxrdf::vocab::{rdf, xsd};

/// Dublin Core elements 1.1
pub mod dc {
    use super::{NamedNodeRef, N};

    pub const NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

    pub const DATE: N = iri!("http://purl.org/dc/elements/1.1/date");
    pub const TITLE: N = iri!("http://purl.org/dc/elements/1.1/title");
}

/// DCMI metadata terms
pub mod dcterms {
    use super::{NamedNodeRef, N};

    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    pub const CREATED: N = iri!("http://purl.org/dc/terms/created");
    pub const CREATOR: N = iri!("http://purl.org/dc/terms/creator");
    pub const HAS_PART: N = iri!("http://purl.org/dc/terms/hasPart");
    pub const MODIFIED: N = iri!("http://purl.org/dc/terms/modified");
}

/// Europeana Data Model
pub mod edm {
    use super::{NamedNodeRef, N};

    pub const NAMESPACE: &str = "http://www.europeana.eu/schemas/edm/";

    pub const PROVIDED_CHO: N = iri!("http://www.europeana.eu/schemas/edm/ProvidedCHO");

    pub const AGGREGATED_CHO: N = iri!("http://www.europeana.eu/schemas/edm/aggregatedCHO");
    pub const DATA_PROVIDER: N = iri!("http://www.europeana.eu/schemas/edm/dataProvider");
    pub const IS_SHOWN_AT: N = iri!("http://www.europeana.eu/schemas/edm/isShownAt");
    pub const OBJECT: N = iri!("http://www.europeana.eu/schemas/edm/object");
    pub const PROVIDER: N = iri!("http://www.europeana.eu/schemas/edm/provider");
    pub const YEAR: N = iri!("http://www.europeana.eu/schemas/edm/year");
}

/// Electronic Resource Citation kernel elements
pub mod erc {
    use super::{NamedNodeRef, N};

    pub const NAMESPACE: &str = "http://purl.org/kernel/elements/1.1/";

    pub const WHO: N = iri!("http://purl.org/kernel/elements/1.1/who");
    pub const WHAT: N = iri!("http://purl.org/kernel/elements/1.1/what");
    pub const WHEN: N = iri!("http://purl.org/kernel/elements/1.1/when");
    pub const WHERE: N = iri!("http://purl.org/kernel/elements/1.1/where");
}

/// OAI Object Reuse and Exchange
pub mod ore {
    use super::{NamedNodeRef, N};

    pub const NAMESPACE: &str = "http://www.openarchives.org/ore/terms/";

    pub const AGGREGATION: N = iri!("http://www.openarchives.org/ore/terms/Aggregation");
    pub const RESOURCE_MAP: N = iri!("http://www.openarchives.org/ore/terms/ResourceMap");

    pub const DESCRIBES: N = iri!("http://www.openarchives.org/ore/terms/describes");
    pub const IS_DESCRIBED_BY: N = iri!("http://www.openarchives.org/ore/terms/isDescribedBy");
}
