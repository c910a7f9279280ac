use std::io;

use apollo_client::shared::CheckOperationsResponse;
use apollo_std::Style;
use calm_io::stdoutln;
use camino::Utf8PathBuf;
use serde_json::{json, Value};

/// ApolloOutput defines all of the different types of data that are printed
/// to `stdout`. Every command returns `ApolloResult<ApolloOutput>`, and how
/// each variant is printed lives here rather than in the commands.
#[derive(Clone, PartialEq, Debug)]
pub enum ApolloOutput {
    SchemaDownloaded { path: Utf8PathBuf },
    CheckOperations(CheckOperationsResponse),
}

impl ApolloOutput {
    /// The human readable form, if there is anything to show.
    pub fn get_stdout(&self) -> Option<String> {
        match self {
            // the step log already says where the schema went
            ApolloOutput::SchemaDownloaded { .. } => None,
            ApolloOutput::CheckOperations(response) => {
                if response.changes().is_empty() {
                    Some(format!(
                        "\n{}\n",
                        Style::Success.paint("No operations have issues with the current schema")
                    ))
                } else {
                    Some(format!("\n{}\n", response.get_table()))
                }
            }
        }
    }

    pub fn get_json(&self) -> Value {
        match self {
            ApolloOutput::SchemaDownloaded { path } => json!({ "path": path }),
            ApolloOutput::CheckOperations(response) => response.get_json(),
        }
    }

    pub fn print(&self, json: bool) -> io::Result<()> {
        if json {
            let output = serde_json::to_string_pretty(&self.get_json())?;
            stdoutln!("{}", output)?;
        } else if let Some(stdout) = self.get_stdout() {
            stdoutln!("{}", stdout)?;
        }
        Ok(())
    }

    /// The process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApolloOutput::CheckOperations(response) if response.has_failures() => 1,
            _ => 0,
        }
    }
}
