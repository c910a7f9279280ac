//! Apollo project configuration: loading config files, merging command line
//! overrides and resolving document sets into concrete files and schemas.

mod config;
mod document_set;
mod endpoint;
mod error;
mod flags;
mod glob;
mod literal;
mod loader;
mod raw;
mod resolve;
mod schema;

pub use config::{load_config, ApolloConfig, DEFAULT_SCHEMA_NAME};
pub use document_set::{load_document_set, DocumentSet, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
pub use endpoint::{normalize_endpoint, subscriptions_url, EndpointConfig, DEFAULT_ENDPOINT_URL};
pub use error::{ConfigError, ConfigValidationError, ConfigValidationErrors};
pub use flags::ConfigOverrides;
pub use glob::{expand_pattern, is_excluded, normalize_path};
pub use loader::{find_and_load_config, load_config_from_file, CONFIG_FILE_NAMES};
pub use raw::{OneOrMany, RawApolloConfig, RawDocumentSet, RawEndpoint, RawSchemaDependency};
pub use resolve::{resolve_document_sets, ResolvedDocumentSet, SchemaLoader};
pub use schema::{load_schema_config, SchemaDependency};
