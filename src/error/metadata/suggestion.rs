use std::fmt::{self, Display};

use apollo_std::Style;

/// `Suggestion` contains possible next steps for a user to take after an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    SubmitIssue,
    CheckServerConnection,
    CheckHeaders,
    CheckGraphNameAndKey,
    ProvideEngineKey,
    ProperKey,
    ProvideSchemaSource,
    UseJsonSchema,
    UseSupportedConfig,
    FixConfig,
    FixOperations,
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::SubmitIssue => format!(
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do: {}",
                Style::Link.paint("https://github.com/apollographql/apollo-tooling/issues/new")
            ),
            Suggestion::CheckServerConnection => {
                "Make sure the endpoint is reachable and accepting GraphQL requests.".to_string()
            }
            Suggestion::CheckHeaders => format!(
                "Headers must be valid HTTP header names and values, passed as {}.",
                Style::Command.paint("--header \"KEY:VALUE\"")
            ),
            Suggestion::CheckGraphNameAndKey => {
                "Make sure the engine API key belongs to a graph that has a published schema.".to_string()
            }
            Suggestion::ProvideEngineKey => format!(
                "Pass an engine API key with {} or set {}.",
                Style::Command.paint("--key"),
                Style::Command.paint("$ENGINE_API_KEY")
            ),
            Suggestion::ProperKey => {
                "Engine API keys look like service:<graph id>:<token>. Copy one from the engine's settings page.".to_string()
            }
            Suggestion::ProvideSchemaSource => format!(
                "Point the schema at a file with {}, at a server with {}, or at the engine with {}.",
                Style::Command.paint("--schema"),
                Style::Command.paint("--endpoint"),
                Style::Command.paint("--key")
            ),
            Suggestion::UseJsonSchema => {
                "Schema files must hold a JSON introspection result and end in .json.".to_string()
            }
            Suggestion::UseSupportedConfig => format!(
                "Use {}, {}, {} or the {} field of {}.",
                Style::Path.paint("apollo.config.js"),
                Style::Path.paint("apollo.config.json"),
                Style::Path.paint("apollo.config.yaml"),
                Style::Path.paint("apollo"),
                Style::Path.paint("package.json")
            ),
            Suggestion::FixConfig => "Fix the problems listed above in your config file and try again.".to_string(),
            Suggestion::FixOperations => {
                "Fix the syntax errors in the listed files, or narrow the set of files with --queries.".to_string()
            }
        };
        write!(formatter, "{}", &suggestion)
    }
}
