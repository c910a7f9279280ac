use graphql_client::GraphQLQuery;

use crate::client::GraphQLClient;
use crate::headers;
use crate::ApolloClientError;

/// The engine's GraphQL API.
pub const DEFAULT_ENGINE_URL: &str = "https://engine-graphql.apollographql.com/api/graphql";

/// Extracts the graph id from an engine API key of the form `service:<graph id>:<token>`.
pub fn graph_id_from_key(key: &str) -> Result<&str, ApolloClientError> {
    match key.split(':').nth(1) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApolloClientError::MalformedKey),
    }
}

/// A [GraphQLClient] for the engine, authenticated with an API key.
#[derive(Debug, Clone)]
pub struct EngineClient {
    client: GraphQLClient,
    api_key: String,
    client_version: String,
}

impl EngineClient {
    pub fn new(url: &str, api_key: &str, client_version: &str) -> Result<EngineClient, ApolloClientError> {
        Ok(EngineClient {
            client: GraphQLClient::new(url)?,
            api_key: api_key.to_string(),
            client_version: client_version.to_string(),
        })
    }

    /// The graph this client's key belongs to.
    pub fn graph_id(&self) -> Result<&str, ApolloClientError> {
        graph_id_from_key(&self.api_key)
    }

    pub async fn post<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ApolloClientError> {
        let headers = headers::build_engine_headers(&self.api_key, &self.client_version)?;
        self.client.post::<Q>(variables, headers).await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("service:my-graph:abc123", "my-graph")]
    #[case("service:my-graph:abc:extra", "my-graph")]
    #[case("user:someone", "someone")]
    fn it_reads_the_graph_id(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(graph_id_from_key(key).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("no-separators")]
    #[case("service::token")]
    fn it_rejects_malformed_keys(#[case] key: &str) {
        assert!(matches!(
            graph_id_from_key(key),
            Err(ApolloClientError::MalformedKey)
        ));
    }
}
