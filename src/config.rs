//! Collection configuration
//!
//! Every value has a built-in default describing the University of Chicago
//! Library Digital Repository. A YAML file may override any subset:
//!
//! ```yaml
//! repository_iri: https://repository.example.edu/
//! title: Example Digital Repository
//! ```

use crate::rdf::NamedNode;
use oxiri::Iri;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configured IRI does not parse or resolve
    #[error("Invalid IRI for {field}: {reason}")]
    InvalidIri { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Raw, user-facing collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionConfig {
    /// Repository root; the ResourceMap creator and the base for the
    /// relative IRIs below
    pub repository_iri: String,
    /// Provider and data provider name
    pub provider: String,
    /// Title of the collection CHO
    pub title: String,
    /// Date (and EDM year) of the collection CHO
    pub date: String,
    /// Display object for the aggregation
    pub icon_iri: String,
    /// Child CHO, relative to `repository_iri`
    pub part_path: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            repository_iri: "https://repository.lib.uchicago.edu/".to_string(),
            provider: "University of Chicago Library".to_string(),
            title: "The University of Chicago Library Digital Repository".to_string(),
            date: "2020".to_string(),
            icon_iri: "https://www.lib.uchicago.edu/static/base/images/color-logo.png".to_string(),
            part_path: "digital_collections/cho".to_string(),
        }
    }
}

impl CollectionConfig {
    /// Load overrides from a YAML file; missing keys keep their defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        info!(path = %path.display(), "loaded collection config");
        Ok(config)
    }

    /// Parse overrides from YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Validate the IRIs and derive the entity IRIs of the collection
    ///
    /// ResourceMap, Aggregation and CHO are `rem`, `aggregation` and `cho`
    /// under the repository root.
    pub fn resolve(&self) -> ConfigResult<Collection> {
        let root = Iri::parse(self.repository_iri.clone()).map_err(|e| ConfigError::InvalidIri {
            field: "repository_iri",
            reason: e.to_string(),
        })?;

        let join = |field: &'static str, reference: &str| -> ConfigResult<NamedNode> {
            let iri = root.resolve(reference).map_err(|e| ConfigError::InvalidIri {
                field,
                reason: e.to_string(),
            })?;
            NamedNode::new(iri.as_str()).map_err(|e| ConfigError::InvalidIri {
                field,
                reason: e.to_string(),
            })
        };

        let collection = Collection {
            repository: join("repository_iri", "")?,
            resource_map: join("repository_iri", "rem")?,
            aggregation: join("repository_iri", "aggregation")?,
            cho: join("repository_iri", "cho")?,
            part: join("part_path", &self.part_path)?,
            icon: join("icon_iri", &self.icon_iri)?,
            provider: self.provider.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
        };
        debug!(cho = collection.cho.as_str(), "resolved collection IRIs");
        Ok(collection)
    }
}

/// Validated collection description, ready for triple building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Repository root
    pub repository: NamedNode,
    /// ResourceMap describing the aggregation
    pub resource_map: NamedNode,
    /// Aggregation of the CHO
    pub aggregation: NamedNode,
    /// The collection itself
    pub cho: NamedNode,
    /// Sub-collection CHO linked through `dcterms:hasPart`
    pub part: NamedNode,
    /// Display object
    pub icon: NamedNode,
    pub provider: String,
    pub title: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_resolves() {
        let collection = CollectionConfig::default().resolve().unwrap();

        assert_eq!(collection.repository.as_str(), "https://repository.lib.uchicago.edu/");
        assert_eq!(collection.resource_map.as_str(), "https://repository.lib.uchicago.edu/rem");
        assert_eq!(
            collection.aggregation.as_str(),
            "https://repository.lib.uchicago.edu/aggregation"
        );
        assert_eq!(collection.cho.as_str(), "https://repository.lib.uchicago.edu/cho");
        assert_eq!(
            collection.part.as_str(),
            "https://repository.lib.uchicago.edu/digital_collections/cho"
        );
        assert_eq!(collection.provider, "University of Chicago Library");
        assert_eq!(collection.date, "2020");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CollectionConfig::from_yaml_str(
            "repository_iri: http://example.org/repo/\ndate: \"1999\"\n",
        )
        .unwrap();

        assert_eq!(config.date, "1999");
        assert_eq!(config.provider, CollectionConfig::default().provider);

        let collection = config.resolve().unwrap();
        assert_eq!(collection.cho.as_str(), "http://example.org/repo/cho");
        assert_eq!(collection.part.as_str(), "http://example.org/repo/digital_collections/cho");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = CollectionConfig::from_yaml_str("colour: blue\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_relative_repository_iri_is_rejected() {
        let config = CollectionConfig {
            repository_iri: "repository/".to_string(),
            ..CollectionConfig::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidIri {
                field: "repository_iri",
                ..
            }
        ));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: Social Scientists Map Chicago").unwrap();

        let config = CollectionConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.title, "Social Scientists Map Chicago");
    }

    #[test]
    fn test_missing_file() {
        let err = CollectionConfig::from_yaml_file("/nonexistent/marc2edm.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
