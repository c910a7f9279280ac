use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::ApolloClientError;

const JSON_CONTENT_TYPE: &str = "application/json";
const CLIENT_NAME: &str = "apollo-cli";

/// Function for building a [HeaderMap] for requests to any GraphQL endpoint.
///
/// Takes the endpoint's configured headers, in order.
pub fn build(header_map: &IndexMap<String, String>) -> Result<HeaderMap, ApolloClientError> {
    let mut headers = HeaderMap::new();

    let content_type = HeaderValue::from_str(JSON_CONTENT_TYPE)?;
    headers.append("Content-Type", content_type);

    for (key, value) in header_map {
        let header_key = HeaderName::from_bytes(key.as_bytes())?;
        let header_value = HeaderValue::from_str(value)?;
        headers.append(header_key, header_value);
    }

    Ok(headers)
}

/// Function for building a [HeaderMap] for requests to the engine.
///
/// The api key is marked sensitive so it never shows up in debug output.
pub fn build_engine_headers(api_key: &str, client_version: &str) -> Result<HeaderMap, ApolloClientError> {
    let mut headers = HeaderMap::new();

    let content_type = HeaderValue::from_str(JSON_CONTENT_TYPE)?;
    headers.insert("Content-Type", content_type);

    // client awareness headers
    headers.insert("apollographql-client-name", HeaderValue::from_str(CLIENT_NAME)?);
    tracing::debug!(?client_version);
    headers.insert(
        "apollographql-client-version",
        HeaderValue::from_str(client_version)?,
    );

    let mut api_key = HeaderValue::from_str(api_key)?;
    api_key.set_sensitive(true);
    headers.insert("x-api-key", api_key);

    Ok(headers)
}
