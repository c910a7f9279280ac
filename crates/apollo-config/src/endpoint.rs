use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::raw::RawEndpoint;

/// The endpoint used when a schema declares neither a file, an endpoint, nor an engine key.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:4000/graphql";

/// Where and how to reach a running GraphQL server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// main HTTP endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// websocket endpoint used for subscriptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<String>,

    /// headers to send along with every request to `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, String>>,
}

impl EndpointConfig {
    /// An endpoint with only a URL set. Subscriptions are derived from it.
    pub fn from_url(url: impl Into<String>) -> Self {
        EndpointConfig {
            url: Some(url.into()),
            ..Default::default()
        }
        .with_derived_subscriptions()
    }

    /// Fills in `subscriptions` from `url` when only the latter is present.
    ///
    /// An empty `subscriptions` string counts as missing.
    pub fn with_derived_subscriptions(mut self) -> Self {
        self.subscriptions = self
            .subscriptions
            .take()
            .filter(|subscriptions| !subscriptions.is_empty())
            .or_else(|| self.url.as_deref().map(subscriptions_url));
        self
    }
}

/// Swaps the first occurrence of `http` in `url` for `ws`.
///
/// This is a plain text substitution, not a scheme rewrite: a URL such as
/// `ftp://example.com/http` becomes `ftp://example.com/ws`.
pub fn subscriptions_url(url: &str) -> String {
    url.replacen("http", "ws", 1)
}

/// Turns a raw endpoint value (a bare URL or a full object) into an [`EndpointConfig`].
///
/// A missing value becomes [`DEFAULT_ENDPOINT_URL`] when `should_default_url` is set.
pub fn normalize_endpoint(
    raw: Option<RawEndpoint>,
    should_default_url: bool,
) -> Option<EndpointConfig> {
    let endpoint = match raw {
        Some(RawEndpoint::Url(url)) => EndpointConfig {
            url: Some(url),
            ..Default::default()
        },
        Some(RawEndpoint::Config(config)) => config,
        None if should_default_url => EndpointConfig {
            url: Some(DEFAULT_ENDPOINT_URL.to_string()),
            ..Default::default()
        },
        None => return None,
    };
    Some(endpoint.with_derived_subscriptions())
}
