use std::error::Error;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use futures::future::try_join_all;

use apollo_std::Fs;

use crate::config::ApolloConfig;
use crate::document_set::DocumentSet;
use crate::endpoint::EndpointConfig;
use crate::error::ConfigError;
use crate::glob::{expand_pattern, is_excluded, normalize_path};
use crate::schema::SchemaDependency;

/// Produces a usable schema from a [`SchemaDependency`].
#[async_trait]
pub trait SchemaLoader: Sync {
    type Schema: Send;

    async fn load(
        &self,
        name: &str,
        dependency: &SchemaDependency,
        project_folder: &Utf8Path,
    ) -> Result<Self::Schema, Box<dyn Error + Send + Sync>>;
}

/// A document set with its files listed and its schema information attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDocumentSet<S> {
    pub schema: Option<S>,
    pub endpoint: Option<EndpointConfig>,
    pub engine_key: Option<String>,
    pub document_paths: Vec<Utf8PathBuf>,
}

/// Resolves every document set in `config`, concurrently, preserving their order.
///
/// Schemas are only loaded when `need_schema` is set.
pub async fn resolve_document_sets<L>(
    config: &ApolloConfig,
    need_schema: bool,
    loader: &L,
) -> Result<Vec<ResolvedDocumentSet<L::Schema>>, ConfigError>
where
    L: SchemaLoader,
{
    let project_folder = normalize_path(&Fs::absolutize(&config.project_folder)?);
    let project_folder = project_folder.as_path();

    let resolutions = config
        .documents
        .iter()
        .map(|set| resolve_document_set(config, set, project_folder, need_schema, loader));
    try_join_all(resolutions).await
}

async fn resolve_document_set<L>(
    config: &ApolloConfig,
    set: &DocumentSet,
    project_folder: &Utf8Path,
    need_schema: bool,
    loader: &L,
) -> Result<ResolvedDocumentSet<L::Schema>, ConfigError>
where
    L: SchemaLoader,
{
    let dependency = match set.schema.as_deref() {
        Some(name) => {
            let dependency = config.schemas.get_key_value(name);
            if dependency.is_none() {
                tracing::warn!("document set refers to unknown schema '{}'", name);
            }
            dependency
        }
        None => None,
    };

    let schema = match dependency {
        Some((name, dependency)) if need_schema => Some(
            loader
                .load(name, dependency, project_folder)
                .await
                .map_err(|source| ConfigError::SchemaLoad {
                    name: name.clone(),
                    source,
                })?,
        ),
        _ => None,
    };

    let schema_path = dependency
        .and_then(|(_, d)| d.schema.as_deref())
        .map(|path| normalize_path(&project_folder.join(path)));

    let mut document_paths = Vec::new();
    for include in &set.includes {
        for path in expand_pattern(project_folder, include)? {
            if schema_path.as_ref() == Some(&path) {
                continue;
            }
            if is_excluded(project_folder, &path, &set.excludes)? {
                continue;
            }
            document_paths.push(path);
        }
    }
    tracing::debug!(
        schema = ?set.schema,
        files = document_paths.len(),
        "resolved document set"
    );

    Ok(ResolvedDocumentSet {
        schema,
        endpoint: dependency.and_then(|(_, d)| d.endpoint.clone()),
        engine_key: dependency.and_then(|(_, d)| d.engine_key.clone()),
        document_paths,
    })
}
