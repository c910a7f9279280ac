use indexmap::IndexMap;

use crate::config::{ApolloConfig, DEFAULT_SCHEMA_NAME};
use crate::document_set::DocumentSet;
use crate::endpoint::EndpointConfig;
use crate::schema::SchemaDependency;

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub schema: Option<String>,
    pub endpoint: Option<String>,
    /// `(key, value)` pairs in the order they were passed
    pub headers: Vec<(String, String)>,
    /// newline separated include globs
    pub queries: Option<String>,
    pub key: Option<String>,
}

impl ApolloConfig {
    /// Applies command line overrides, returning the merged configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> ApolloConfig {
        if overrides.schema.is_some() || overrides.endpoint.is_some() {
            let endpoint = overrides.endpoint.as_ref().map(|url| {
                let headers: IndexMap<String, String> = overrides.headers.iter().cloned().collect();
                EndpointConfig {
                    url: Some(url.clone()),
                    subscriptions: None,
                    headers: (!headers.is_empty()).then_some(headers),
                }
                .with_derived_subscriptions()
            });
            tracing::debug!("replacing configured schemas with command line schema");
            self.schemas = IndexMap::from([(
                DEFAULT_SCHEMA_NAME.to_string(),
                SchemaDependency {
                    schema: overrides.schema.clone(),
                    endpoint,
                    engine_key: None,
                },
            )]);
        }

        if let Some(queries) = overrides.queries.as_deref().filter(|q| !q.is_empty()) {
            let includes = queries.split('\n').map(String::from).collect();
            self.documents = vec![DocumentSet {
                schema: Some(DEFAULT_SCHEMA_NAME.to_string()),
                includes,
                excludes: Vec::new(),
            }];
        }

        if let Some(key) = &overrides.key {
            self.engine_key = Some(key.clone());
            if self.schemas.len() == 1 {
                if let Some((_, schema)) = self.schemas.first_mut() {
                    schema.engine_key = Some(key.clone());
                }
            }
        }

        if self.documents.is_empty() {
            if let Some(name) = self.single_schema_name().map(String::from) {
                self.documents = vec![DocumentSet::all_graphql_files(name)];
            }
        }

        self
    }
}
