use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::Serialize;

use crate::document_set::{load_document_set, DocumentSet};
use crate::raw::{RawApolloConfig, RawSchemaDependency};
use crate::schema::{load_schema_config, SchemaDependency};

/// The name given to the schema synthesized when a project declares none.
pub const DEFAULT_SCHEMA_NAME: &str = "default";

/// A fully loaded project configuration.
///
/// `schemas` always holds at least one entry and keeps declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApolloConfig {
    pub project_folder: Utf8PathBuf,
    pub project_name: Option<String>,
    pub schemas: IndexMap<String, SchemaDependency>,
    pub documents: Vec<DocumentSet>,
    pub engine_key: Option<String>,
}

impl ApolloConfig {
    /// The first schema dependency in declaration order.
    pub fn first_schema(&self) -> Option<(&String, &SchemaDependency)> {
        self.schemas.first()
    }

    /// The only schema dependency, if exactly one is declared.
    pub fn single_schema_name(&self) -> Option<&str> {
        if self.schemas.len() == 1 {
            self.schemas.keys().next().map(|k| k.as_str())
        } else {
            None
        }
    }

    /// The key used to talk to the engine: the project key, else the only schema's key.
    pub fn effective_engine_key(&self) -> Option<&str> {
        self.engine_key.as_deref().or_else(|| {
            self.single_schema_name()
                .and_then(|name| self.schemas.get(name))
                .and_then(|schema| schema.engine_key.as_deref())
        })
    }
}

/// Builds an [`ApolloConfig`] from an already validated raw config found in `config_dir`.
pub fn load_config(raw: RawApolloConfig, config_dir: &Utf8Path, default_endpoint: bool) -> ApolloConfig {
    let mut schemas: IndexMap<String, SchemaDependency> = raw
        .schemas
        .unwrap_or_default()
        .into_iter()
        .map(|(name, schema)| (name, load_schema_config(schema, default_endpoint)))
        .collect();

    if schemas.is_empty() {
        schemas.insert(
            DEFAULT_SCHEMA_NAME.to_string(),
            load_schema_config(RawSchemaDependency::default(), default_endpoint),
        );
    }

    let documents = raw
        .documents
        .map(|d| d.into_vec())
        .unwrap_or_default()
        .into_iter()
        .map(load_document_set)
        .collect();

    ApolloConfig {
        project_folder: config_dir.to_path_buf(),
        project_name: config_dir.file_name().map(String::from),
        schemas,
        documents,
        engine_key: raw.engine_key.filter(|key| !key.is_empty()),
    }
}
