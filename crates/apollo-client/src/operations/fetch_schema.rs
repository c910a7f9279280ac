use graphql_client::GraphQLQuery;

use crate::engine::EngineClient;
use crate::schema::IntrospectionResult;
use crate::ApolloClientError;

/// The schema tag fetched when none is given.
pub const CURRENT_TAG: &str = "current";

/// Fetches a published schema's introspection result from the engine.
#[derive(GraphQLQuery)]
#[graphql(
    query_path = "src/operations/fetch_schema_query.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "PartialEq, Eq, Debug, Serialize, Deserialize",
    deprecated = "warn"
)]
pub struct FetchSchemaQuery;

/// Fetches the schema published under `tag` for the client's graph.
pub async fn run(client: &EngineClient, tag: &str) -> Result<IntrospectionResult, ApolloClientError> {
    let graph_id = client.graph_id()?.to_string();
    tracing::debug!(%graph_id, %tag, "fetching schema from the engine");
    let data = client
        .post::<FetchSchemaQuery>(fetch_schema_query::Variables {
            id: graph_id.clone(),
            tag: tag.to_string(),
        })
        .await?;

    let schema = data
        .service
        .and_then(|service| service.schema)
        .ok_or(ApolloClientError::NoService { graph_id })?;
    IntrospectionResult::from_json(serde_json::to_value(schema.introspection)?)
}
