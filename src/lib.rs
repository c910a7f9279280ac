pub mod cli;
pub mod command;
mod documents;
mod error;
mod options;
pub mod utils;

pub use error::{ApolloError, ApolloErrorCode, ApolloErrorSuggestion, ApolloResult};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
