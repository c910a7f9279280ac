use std::fmt::{self, Display};
use std::io;

use apollo_std::ApolloStdError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// ConfigError is the type of error that occurs while loading or resolving project configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// UnsupportedFormat occurs when a config file has an extension we cannot read.
    #[error("Unsupported config file format: '{0}'")]
    UnsupportedFormat(Utf8PathBuf),

    /// MalformedConfig occurs when a config file cannot be parsed at all.
    #[error("Could not parse the config file at '{path}': {message}")]
    MalformedConfig {
        /// The config file.
        path: Utf8PathBuf,
        /// What went wrong.
        message: String,
    },

    /// InvalidConfig occurs when a config file parses but its contents are not a valid config.
    #[error("The config file at '{path}' is invalid:\n{errors}")]
    InvalidConfig {
        /// The config file.
        path: Utf8PathBuf,
        /// Every problem found.
        errors: ConfigValidationErrors,
    },

    /// InvalidGlob occurs when an include or exclude pattern cannot be compiled.
    #[error("'{pattern}' is not a valid glob pattern: {message}")]
    InvalidGlob {
        /// The pattern as written.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },

    /// SchemaLoad occurs when a document set's schema could not be loaded.
    #[error("Could not load the schema '{name}'")]
    SchemaLoad {
        /// The name of the schema dependency.
        name: String,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// PathNotUtf8 occurs when a file path is not valid UTF-8.
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),

    /// JSON occurs when a JSON document cannot be read.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// io::Error occurs when any given std::io::Error arises.
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// ApolloStdError comes from filesystem helpers.
    #[error(transparent)]
    ApolloStdError(#[from] ApolloStdError),
}

/// One problem found while validating a raw configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A value has the wrong type, e.g. a number where a list of globs is expected.
    #[error("{message}")]
    Shape {
        /// The deserializer's description of the mismatch.
        message: String,
    },

    /// A schema was declared under an empty name.
    #[error("schema names must not be empty")]
    EmptySchemaName,

    /// A document set contains an empty glob pattern.
    #[error("documents[{index}].{field} contains an empty pattern")]
    EmptyPattern {
        /// Position of the document set.
        index: usize,
        /// `includes` or `excludes`.
        field: &'static str,
    },

    /// A document set contains a glob pattern that does not compile.
    #[error("documents[{index}].{field} contains an invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Position of the document set.
        index: usize,
        /// `includes` or `excludes`.
        field: &'static str,
        /// The pattern as written.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },
}

/// Every validation problem found in one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationErrors(Vec<ConfigValidationError>);

impl ConfigValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ConfigValidationError>> for ConfigValidationErrors {
    fn from(errors: Vec<ConfigValidationError>) -> Self {
        ConfigValidationErrors(errors)
    }
}

impl Display for ConfigValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .0
            .iter()
            .map(|e| format!("  - {e}"))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{lines}")
    }
}
