mod metadata;

pub use metadata::{Code as ApolloErrorCode, Metadata as ApolloErrorMetadata, Suggestion as ApolloErrorSuggestion};

pub type ApolloResult<T> = std::result::Result<T, ApolloError>;

use std::borrow::BorrowMut;
use std::fmt::{self, Display};
use std::io;

use apollo_std::Style;
use calm_io::stderr;
use serde_json::{json, Value};

/// A specialized `Error` type for apollo that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct ApolloError {
    error: anyhow::Error,
    metadata: ApolloErrorMetadata,
}

impl ApolloError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = ApolloErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn set_suggestion(&mut self, suggestion: ApolloErrorSuggestion) {
        self.metadata.suggestion = Some(suggestion);
    }

    pub fn suggestion(&self) -> Option<ApolloErrorSuggestion> {
        self.metadata.suggestion.clone()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<ApolloErrorCode> {
        self.metadata.code
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }

    pub fn get_json(&self) -> Value {
        json!({
            "error": {
                "message": self.message(),
                "code": self.code().map(|code| code.to_string()),
            }
        })
    }
}

impl Display for ApolloError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for ApolloError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use apollo_client::ApolloClientError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn it_renders_code_and_suggestion() {
        let error = ApolloError::new(ApolloClientError::MissingEngineKey);
        let rendered = error.to_string();

        assert!(rendered.contains("error[E007]:"), "{rendered}");
        assert!(rendered.contains("No engine API key was found"), "{rendered}");
        assert!(rendered.contains("--key"), "{rendered}");
    }

    #[test]
    fn it_serializes_to_json() {
        let error = ApolloError::new(ApolloClientError::MalformedKey);
        assert_eq!(
            error.get_json(),
            json!({ "error": { "message": "The engine API key is malformed", "code": "E008" } })
        );
    }

    #[test]
    fn errors_without_codes_serialize_null() {
        let error = ApolloError::new(anyhow::anyhow!("plain"));
        assert_eq!(error.get_json()["error"]["code"], Value::Null);
        assert!(error.to_string().starts_with(&Style::ErrorPrefix.paint("error:")));
    }
}
