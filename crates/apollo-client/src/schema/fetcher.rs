use std::error::Error;

use apollo_config::{SchemaDependency, SchemaLoader};
use apollo_std::Fs;
use async_trait::async_trait;
use camino::Utf8Path;

use super::client_schema::ClientSchema;
use super::introspection::IntrospectionResult;
use crate::engine::EngineClient;
use crate::operations::{fetch_schema, introspect};
use crate::ApolloClientError;

/// Loads schemas from files, running servers or the engine registry.
#[derive(Debug, Clone)]
pub struct SchemaFetcher {
    engine_url: String,
    client_version: String,
}

impl SchemaFetcher {
    pub fn new(engine_url: &str, client_version: &str) -> SchemaFetcher {
        SchemaFetcher {
            engine_url: engine_url.to_string(),
            client_version: client_version.to_string(),
        }
    }

    /// Loads the introspection result for `dependency`.
    ///
    /// A schema file wins over an endpoint, which wins over an engine key.
    pub async fn introspection(
        &self,
        name: &str,
        dependency: &SchemaDependency,
        project_folder: &Utf8Path,
    ) -> Result<IntrospectionResult, ApolloClientError> {
        if let Some(schema) = &dependency.schema {
            return read_schema_file(&project_folder.join(schema));
        }

        if let Some(url) = dependency.endpoint.as_ref().and_then(|e| e.url.as_deref()) {
            let headers = dependency
                .endpoint
                .as_ref()
                .and_then(|e| e.headers.clone())
                .unwrap_or_default();
            return introspect::run(url, &headers).await;
        }

        if let Some(key) = &dependency.engine_key {
            let client = EngineClient::new(&self.engine_url, key, &self.client_version)?;
            return fetch_schema::run(&client, fetch_schema::CURRENT_TAG).await;
        }

        Err(ApolloClientError::NoSchemaSource {
            name: name.to_string(),
        })
    }
}

fn read_schema_file(path: &Utf8Path) -> Result<IntrospectionResult, ApolloClientError> {
    if path.extension() != Some("json") {
        return Err(ApolloClientError::UnsupportedSchemaFormat {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(%path, "reading schema file");
    let contents = Fs::read_file(path)?;
    IntrospectionResult::from_json(serde_json::from_str(&contents)?)
}

#[async_trait]
impl SchemaLoader for SchemaFetcher {
    type Schema = ClientSchema;

    async fn load(
        &self,
        name: &str,
        dependency: &SchemaDependency,
        project_folder: &Utf8Path,
    ) -> Result<ClientSchema, Box<dyn Error + Send + Sync>> {
        let introspection = self.introspection(name, dependency, project_folder).await?;
        Ok(ClientSchema::from_introspection(&introspection)?)
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use camino::Utf8PathBuf;
    use serde_json::json;

    use super::*;

    fn fetcher() -> SchemaFetcher {
        SchemaFetcher::new("http://localhost:1/api/graphql", "0.0.0")
    }

    #[tokio::test]
    async fn it_reads_schema_files_relative_to_the_project() {
        let dir = TempDir::new().unwrap();
        dir.child("schemas/schema.json")
            .write_str(
                &json!({ "data": { "__schema": { "queryType": { "name": "Query" }, "types": [] } } })
                    .to_string(),
            )
            .unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let result = fetcher()
            .introspection(
                "default",
                &SchemaDependency {
                    schema: Some("schemas/schema.json".to_string()),
                    ..Default::default()
                },
                &root,
            )
            .await
            .unwrap();

        assert_eq!(result.as_json()["queryType"]["name"], "Query");
    }

    #[tokio::test]
    async fn it_rejects_non_json_schema_files() {
        let err = fetcher()
            .introspection(
                "default",
                &SchemaDependency {
                    schema: Some("schema.graphql".to_string()),
                    ..Default::default()
                },
                Utf8Path::new("/work"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApolloClientError::UnsupportedSchemaFormat { .. }));
    }

    #[tokio::test]
    async fn it_needs_some_source() {
        let err = fetcher()
            .introspection("api", &SchemaDependency::default(), Utf8Path::new("/work"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No schema source is configured for 'api'");
    }
}
