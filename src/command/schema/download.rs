use apollo_client::schema::SchemaFetcher;
use apollo_client::ApolloClientError;
use apollo_config::DEFAULT_SCHEMA_NAME;
use apollo_std::{infoln, successln, Fs, Style};
use camino::Utf8PathBuf;
use clap::Parser;

use crate::command::ApolloOutput;
use crate::options::ProjectOpts;
use crate::{ApolloResult, PKG_VERSION};

#[derive(Debug, Parser)]
pub struct Download {
    #[clap(flatten)]
    project: ProjectOpts,

    /// Path to write the introspection result to
    #[arg(value_name = "OUTPUT", default_value = "schema.json")]
    output: Utf8PathBuf,
}

impl Download {
    pub async fn run(&self) -> ApolloResult<ApolloOutput> {
        infoln!("Loading Apollo project");
        let config = self.project.load_config(true)?;

        let (name, dependency) = match config.first_schema() {
            Some(first) => first,
            None => {
                return Err(ApolloClientError::NoSchemaSource {
                    name: DEFAULT_SCHEMA_NAME.to_string(),
                }
                .into())
            }
        };

        infoln!("Loading schema '{}'", name);
        let fetcher = SchemaFetcher::new(&self.project.engine, PKG_VERSION);
        let introspection = fetcher
            .introspection(name, dependency, &config.project_folder)
            .await?;

        infoln!("Saving schema to {}", Style::Path.paint(self.output.as_str()));
        let contents = serde_json::to_string_pretty(introspection.as_json())?;
        Fs::write_file(&self.output, contents)?;
        successln!("Wrote schema to {}", Style::Path.paint(self.output.as_str()));

        Ok(ApolloOutput::SchemaDownloaded {
            path: self.output.clone(),
        })
    }
}
