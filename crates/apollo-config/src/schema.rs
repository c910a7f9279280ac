use serde::{Deserialize, Serialize};

use crate::endpoint::{normalize_endpoint, EndpointConfig};
use crate::raw::RawSchemaDependency;

/// One named source of schema truth: a schema file, an endpoint, an engine key, or a mix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDependency {
    /// path to a JSON introspection result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointConfig>,

    /// key used to fetch the schema from the engine registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_key: Option<String>,
}

/// Builds a [`SchemaDependency`] from its raw form.
///
/// An engine-backed schema never gets the localhost endpoint. An empty engine
/// key counts as missing.
pub fn load_schema_config(raw: RawSchemaDependency, default_endpoint: bool) -> SchemaDependency {
    let engine_key = raw.engine_key.filter(|key| !key.is_empty());
    let should_default_url = engine_key.is_none() && default_endpoint;
    SchemaDependency {
        schema: raw.schema,
        endpoint: normalize_endpoint(raw.endpoint, should_default_url),
        engine_key,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::endpoint::DEFAULT_ENDPOINT_URL;
    use crate::raw::RawEndpoint;

    #[rstest]
    #[case::defaulted(None, true, Some(DEFAULT_ENDPOINT_URL))]
    #[case::not_asked(None, false, None)]
    #[case::engine_backed(Some("service:graph:token"), true, None)]
    #[case::empty_engine_key(Some(""), true, Some(DEFAULT_ENDPOINT_URL))]
    fn it_only_defaults_the_endpoint_without_an_engine_key(
        #[case] engine_key: Option<&str>,
        #[case] default_endpoint: bool,
        #[case] expected_url: Option<&str>,
    ) {
        let dependency = load_schema_config(
            RawSchemaDependency {
                engine_key: engine_key.map(String::from),
                ..Default::default()
            },
            default_endpoint,
        );
        assert_eq!(
            dependency.endpoint.and_then(|e| e.url).as_deref(),
            expected_url
        );
        assert_eq!(
            dependency.engine_key.as_deref(),
            engine_key.filter(|key| !key.is_empty())
        );
    }

    #[test]
    fn it_copies_schema_and_key_verbatim() {
        let dependency = load_schema_config(
            RawSchemaDependency {
                schema: Some("./schema.json".to_string()),
                endpoint: Some(RawEndpoint::Url("https://example.com/graphql".to_string())),
                engine_key: Some("service:graph:token".to_string()),
            },
            true,
        );
        assert_eq!(dependency.schema.as_deref(), Some("./schema.json"));
        assert_eq!(
            dependency.endpoint,
            Some(EndpointConfig {
                url: Some("https://example.com/graphql".to_string()),
                subscriptions: Some("wss://example.com/graphql".to_string()),
                headers: None,
            })
        );
    }
}
