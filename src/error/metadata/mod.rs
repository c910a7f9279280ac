mod code;
mod suggestion;

pub use code::Code;
pub use suggestion::Suggestion;

use apollo_client::ApolloClientError;
use apollo_config::ConfigError;
use apollo_std::ApolloStdError;

use crate::documents::DocumentError;

/// Metadata contains extra information about specific errors.
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`.
#[derive(Default, Debug)]
pub struct Metadata {
    pub suggestion: Option<Suggestion>,
    pub code: Option<Code>,
}

impl Metadata {
    fn new(suggestion: Option<Suggestion>, code: Option<Code>) -> Self {
        Metadata { suggestion, code }
    }
}

/// `Metadata` structs can be created from an `anyhow::Error`.
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable.
impl From<&mut anyhow::Error> for Metadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(client_error) = error.downcast_ref::<ApolloClientError>() {
            return Metadata::from(client_error);
        }

        if let Some(config_error) = error.downcast_ref::<ConfigError>() {
            return Metadata::from(config_error);
        }

        if let Some(document_error) = error.downcast_ref::<DocumentError>() {
            let code = match document_error {
                DocumentError::Parse { .. } => Code::E018,
                DocumentError::ApolloStdError(_) => Code::E001,
            };
            return Metadata::new(Some(Suggestion::FixOperations), Some(code));
        }

        if error.downcast_ref::<ApolloStdError>().is_some() {
            return Metadata::new(None, Some(Code::E001));
        }

        Metadata::default()
    }
}

impl From<&ApolloClientError> for Metadata {
    fn from(error: &ApolloClientError) -> Self {
        let (suggestion, code) = match error {
            ApolloClientError::Json(_) | ApolloClientError::ApolloStdError(_) => {
                (Some(Suggestion::SubmitIssue), Some(Code::E001))
            }
            ApolloClientError::InvalidHeaderName(_) => (Some(Suggestion::CheckHeaders), Some(Code::E002)),
            ApolloClientError::InvalidHeaderValue(_) => (Some(Suggestion::CheckHeaders), Some(Code::E003)),
            ApolloClientError::SendRequest { .. } => {
                (Some(Suggestion::CheckServerConnection), Some(Code::E004))
            }
            ApolloClientError::HandleResponse { .. } => (Some(Suggestion::SubmitIssue), Some(Code::E005)),
            ApolloClientError::NoService { .. } => {
                (Some(Suggestion::CheckGraphNameAndKey), Some(Code::E006))
            }
            ApolloClientError::MissingEngineKey => (Some(Suggestion::ProvideEngineKey), Some(Code::E007)),
            ApolloClientError::MalformedKey => (Some(Suggestion::ProperKey), Some(Code::E008)),
            ApolloClientError::NoSchemaSource { .. } => {
                (Some(Suggestion::ProvideSchemaSource), Some(Code::E009))
            }
            ApolloClientError::UnsupportedSchemaFormat { .. } => {
                (Some(Suggestion::UseJsonSchema), Some(Code::E010))
            }
            ApolloClientError::InvalidIntrospection { .. } => (None, Some(Code::E011)),
            ApolloClientError::InvalidSchema { .. } => (None, Some(Code::E012)),
            ApolloClientError::GraphQl { .. } => (None, None),
        };
        Metadata::new(suggestion, code)
    }
}

impl From<&ConfigError> for Metadata {
    fn from(error: &ConfigError) -> Self {
        let (suggestion, code) = match error {
            ConfigError::UnsupportedFormat(_) => (Some(Suggestion::UseSupportedConfig), Some(Code::E013)),
            ConfigError::MalformedConfig { .. } | ConfigError::Json(_) => {
                (Some(Suggestion::FixConfig), Some(Code::E014))
            }
            ConfigError::InvalidConfig { .. } => (Some(Suggestion::FixConfig), Some(Code::E015)),
            ConfigError::InvalidGlob { .. } => (Some(Suggestion::FixConfig), Some(Code::E016)),
            ConfigError::SchemaLoad { source, .. } => {
                // the loader's own error knows more than we do
                if let Some(client_error) = source.downcast_ref::<ApolloClientError>() {
                    return Metadata::from(client_error);
                }
                (None, Some(Code::E017))
            }
            ConfigError::PathNotUtf8(_) | ConfigError::IoError(_) | ConfigError::ApolloStdError(_) => {
                (None, Some(Code::E001))
            }
        };
        Metadata::new(suggestion, code)
    }
}
