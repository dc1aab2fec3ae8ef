//! Declarative loader configuration.
//!
//! Describes a project layout in JSON or YAML and feeds it into a
//! [`ResolverBuilder`]:
//!
//! ```yaml
//! extension: php
//! namespaces:
//!   Boilerplate: vendors/boilerplate/src
//! prefixes:
//!   Cache_: [libs/cache, libs/legacy]
//! namespace_fallbacks: [src]
//! prefix_fallbacks: []
//! ```
//!
//! Every directory value may be a single string or a list. Relative
//! directories are anchored at a base directory, which is the config file's
//! parent when loaded through [`builder_from_path`].

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::registry::{Directories, RegistrationError};
use crate::resolve::ResolverBuilder;

/// Errors raised while reading or applying a loader configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The described tables violate a registration contract.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// One directory or an ordered list of them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DirSpec {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl Default for DirSpec {
    fn default() -> Self {
        DirSpec::Many(Vec::new())
    }
}

impl From<DirSpec> for Directories {
    fn from(spec: DirSpec) -> Self {
        match spec {
            DirSpec::One(dir) => dir.into(),
            DirSpec::Many(dirs) => dirs.into(),
        }
    }
}

/// Registration tables as written in a config file.
///
/// Map order in the file is registration order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub extension: Option<String>,
    pub namespaces: IndexMap<String, DirSpec>,
    pub prefixes: IndexMap<String, DirSpec>,
    pub namespace_fallbacks: DirSpec,
    pub prefix_fallbacks: DirSpec,
}

impl LoaderConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Register every table into `builder`, anchoring relative directories
    /// at `base_dir`.
    pub fn apply(&self, builder: &mut ResolverBuilder, base_dir: &Path) -> Result<(), ConfigError> {
        let anchored = |spec: &DirSpec| Directories::from(spec.clone()).anchored_at(base_dir);

        if let Some(ext) = &self.extension {
            builder.extension(ext)?;
        }

        builder.register_namespaces(
            self.namespaces
                .iter()
                .map(|(namespace, spec)| (namespace, anchored(spec))),
        )?;
        builder.register_prefixes(
            self.prefixes
                .iter()
                .map(|(prefix, spec)| (prefix, anchored(spec))),
        )?;
        builder.register_namespace_fallbacks(anchored(&self.namespace_fallbacks));
        builder.register_prefix_fallbacks(anchored(&self.prefix_fallbacks));

        tracing::debug!(
            "Applied loader config from {}: {} namespace(s), {} prefix(es)",
            base_dir.display(),
            self.namespaces.len(),
            self.prefixes.len()
        );
        Ok(())
    }
}

/// Build a [`ResolverBuilder`] from a config file, anchored at its directory.
///
/// Returns the builder rather than a finished resolver so callers can still
/// swap the filesystem or add registrations.
pub fn builder_from_path(path: impl AsRef<Path>) -> Result<ResolverBuilder, ConfigError> {
    let path = path.as_ref();
    let config = LoaderConfig::from_path(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = ResolverBuilder::new();
    config.apply(&mut builder, base_dir)?;
    Ok(builder)
}
