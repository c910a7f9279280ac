use serde::{Deserialize, Serialize};

use crate::raw::RawDocumentSet;

/// The include pattern used when a document set does not name any.
pub const DEFAULT_INCLUDE: &str = "**/*.graphql";

/// The exclude pattern used when a document set does not name any.
pub const DEFAULT_EXCLUDE: &str = "node_modules";

/// A group of operation files picked by glob patterns, optionally bound to a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    /// name of a [`SchemaDependency`](crate::SchemaDependency) in the same config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl DocumentSet {
    /// A set bound to `schema` that picks up every `.graphql` file and excludes nothing.
    pub fn all_graphql_files(schema: impl Into<String>) -> Self {
        DocumentSet {
            schema: Some(schema.into()),
            includes: vec![DEFAULT_INCLUDE.to_string()],
            excludes: Vec::new(),
        }
    }
}

pub fn load_document_set(raw: RawDocumentSet) -> DocumentSet {
    DocumentSet {
        schema: raw.schema,
        includes: raw
            .includes
            .map(|i| i.into_vec())
            .unwrap_or_else(|| vec![DEFAULT_INCLUDE.to_string()]),
        excludes: raw
            .excludes
            .map(|e| e.into_vec())
            .unwrap_or_else(|| vec![DEFAULT_EXCLUDE.to_string()]),
    }
}
