use graphql_client::GraphQLQuery;

use crate::engine::EngineClient;
use crate::shared::{Change, ChangeType, CheckOperationsResponse, GitContext};
use crate::ApolloClientError;

/// Asks the engine whether operations are compatible with a published schema.
#[derive(GraphQLQuery)]
#[graphql(
    query_path = "src/operations/check_operations_query.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "PartialEq, Eq, Debug, Serialize, Deserialize",
    deprecated = "warn"
)]
pub struct CheckOperationsQuery;

use check_operations_query::{GitContextInput, OperationDocumentInput};

type QueryChangeType = check_operations_query::ChangeType;

impl From<GitContext> for GitContextInput {
    fn from(git_context: GitContext) -> GitContextInput {
        GitContextInput {
            branch: git_context.branch,
            commit: git_context.commit,
            committer: git_context.author,
            remote_url: git_context.remote_url,
        }
    }
}

impl From<QueryChangeType> for ChangeType {
    fn from(change_type: QueryChangeType) -> ChangeType {
        match change_type {
            QueryChangeType::FAILURE => ChangeType::Failure,
            QueryChangeType::WARNING => ChangeType::Warning,
            QueryChangeType::NOTICE => ChangeType::Notice,
            QueryChangeType::Other(other) => ChangeType::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOperationsInput {
    pub tag: String,
    pub git_context: GitContext,
    /// printed operation documents
    pub operations: Vec<String>,
}

/// Checks `input.operations` against the schema published under `input.tag`.
pub async fn run(
    input: CheckOperationsInput,
    client: &EngineClient,
) -> Result<CheckOperationsResponse, ApolloClientError> {
    let graph_id = client.graph_id()?.to_string();
    tracing::debug!(%graph_id, operations = input.operations.len(), "checking operations");
    let variables = check_operations_query::Variables {
        id: graph_id.clone(),
        tag: input.tag,
        git_context: Some(input.git_context.into()),
        operations: input
            .operations
            .into_iter()
            .map(|document| OperationDocumentInput { document })
            .collect(),
    };

    let data = client.post::<CheckOperationsQuery>(variables).await?;
    let schema = data
        .service
        .and_then(|service| service.schema)
        .ok_or(ApolloClientError::NoService { graph_id })?;
    let changes = schema
        .check_operations
        .into_iter()
        .map(|change| Change {
            change_type: change.type_.into(),
            code: change.code,
            description: change.description,
        })
        .collect();
    Ok(CheckOperationsResponse::new(changes))
}
