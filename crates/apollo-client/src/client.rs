use graphql_client::GraphQLQuery;
use reqwest::header::HeaderMap;

use crate::ApolloClientError;

/// Represents a generic GraphQL client for making http requests.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    url: String,
}

impl GraphQLClient {
    /// Construct a new [GraphQLClient] that posts every request to `url`.
    pub fn new(url: &str) -> Result<GraphQLClient, ApolloClientError> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|source| ApolloClientError::SendRequest {
                url: url.to_string(),
                source,
            })?;
        Ok(GraphQLClient {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Client method for making a GraphQL request.
    ///
    /// Returns the response's `data`, or the joined GraphQL errors.
    pub async fn post<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        headers: HeaderMap,
    ) -> Result<Q::ResponseData, ApolloClientError> {
        let body = Q::build_query(variables);
        tracing::trace!(
            url = %self.url,
            request_body = %serde_json::to_string(&body)?,
            "sending GraphQL request"
        );

        let response = self
            .client
            .post(&self.url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApolloClientError::SendRequest {
                url: self.url.clone(),
                source,
            })?;

        GraphQLClient::handle_response::<Q>(response).await
    }

    /// Parses a GraphQL response body.
    ///
    /// Errors if the body is not JSON, if it carries any GraphQL errors, or if
    /// it has no `data`.
    pub async fn handle_response<Q: GraphQLQuery>(
        response: reqwest::Response,
    ) -> Result<Q::ResponseData, ApolloClientError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApolloClientError::HandleResponse { msg: e.to_string() })?;
        tracing::trace!(%status, response_body = %text);

        let response_body: graphql_client::Response<Q::ResponseData> = serde_json::from_str(&text)
            .map_err(|_| ApolloClientError::HandleResponse {
                msg: if status.is_success() {
                    String::from("failed to parse response JSON")
                } else {
                    format!("server responded with status {status}")
                },
            })?;

        match response_body.errors {
            Some(errs) if !errs.is_empty() => Err(ApolloClientError::GraphQl {
                msg: errs
                    .into_iter()
                    .map(|err| err.message)
                    .collect::<Vec<String>>()
                    .join("\n"),
            }),
            _ => response_body.data.ok_or_else(|| ApolloClientError::HandleResponse {
                msg: String::from("response had no data"),
            }),
        }
    }
}
