use graphql_client::GraphQLQuery;
use indexmap::IndexMap;

use crate::client::GraphQLClient;
use crate::headers;
use crate::schema::IntrospectionResult;
use crate::ApolloClientError;

/// The standard introspection query, sent to any GraphQL endpoint.
///
/// Snake case of this name is the generated module's name, `introspection_query`.
#[derive(GraphQLQuery)]
#[graphql(
    query_path = "src/operations/introspect_query.graphql",
    schema_path = "src/operations/introspect_schema.graphql",
    response_derives = "PartialEq, Eq, Debug, Serialize, Deserialize",
    deprecated = "warn"
)]
pub struct IntrospectionQuery;

/// Introspects the server at `url`, sending `headers` along.
pub async fn run(url: &str, headers: &IndexMap<String, String>) -> Result<IntrospectionResult, ApolloClientError> {
    let client = GraphQLClient::new(url)?;
    let headers = headers::build(headers)?;
    tracing::debug!(%url, "introspecting endpoint");
    let data = client
        .post::<IntrospectionQuery>(introspection_query::Variables {}, headers)
        .await?;
    let schema = data.schema.ok_or_else(|| ApolloClientError::InvalidIntrospection {
        msg: format!("{url} did not return a `__schema`"),
    })?;
    IntrospectionResult::from_json(serde_json::to_value(schema)?)
}
