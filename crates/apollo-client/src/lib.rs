//! HTTP client for the apollo CLI: introspection, engine schema fetches and
//! operation checks.

mod client;
mod error;

/// Engine API keys and the authenticated engine client.
pub mod engine;

/// Module related to building header maps for requests.
pub mod headers;

/// GraphQL operations sent by the CLI.
pub mod operations;

/// Loading introspection results and building client schemas from them.
pub mod schema;

/// Types shared by several operations.
pub mod shared;

pub use client::GraphQLClient;
pub use error::ApolloClientError;
