use apollo_std::ApolloStdError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// ApolloClientError represents all possible failures that can occur while talking to a GraphQL server
/// or turning what it returns into a schema.
#[derive(Error, Debug)]
pub enum ApolloClientError {
    /// The server answered with GraphQL errors; their messages are joined with newlines.
    #[error("{msg}")]
    GraphQl {
        /// The joined error messages.
        msg: String,
    },

    /// Tried to build a header map with an invalid header name.
    #[error("invalid header name")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// Tried to build a header map with an invalid header value.
    #[error("invalid header value")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// Encountered an error sending the request.
    #[error("encountered an error while sending a request to {url}")]
    SendRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Encountered an error handling the received response.
    #[error("encountered an error handling the response: {msg}")]
    HandleResponse {
        /// The error message.
        msg: String,
    },

    /// The engine has no graph for the id taken from the API key.
    #[error("No schema found for {graph_id}")]
    NoService { graph_id: String },

    /// An engine request was attempted without an API key.
    #[error("No engine API key was found")]
    MissingEngineKey,

    /// The API key is not of the form `service:<graph id>:<token>`.
    #[error("The engine API key is malformed")]
    MalformedKey,

    /// A schema dependency names no file, no endpoint and no key.
    #[error("No schema source is configured for '{name}'")]
    NoSchemaSource { name: String },

    /// A schema file with an extension other than `.json`.
    #[error("Unsupported schema file format: '{path}'")]
    UnsupportedSchemaFormat { path: Utf8PathBuf },

    /// The introspection result could not be read.
    #[error("The introspection result is invalid: {msg}")]
    InvalidIntrospection { msg: String },

    /// The SDL built from an introspection result failed validation.
    #[error("The schema is invalid:\n{msg}")]
    InvalidSchema { msg: String },

    /// Filesystem errors.
    #[error(transparent)]
    ApolloStdError(#[from] ApolloStdError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
