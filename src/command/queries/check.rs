use apollo_client::engine::EngineClient;
use apollo_client::operations::check_operations::{self, CheckOperationsInput};
use apollo_client::operations::fetch_schema::CURRENT_TAG;
use apollo_client::schema::SchemaFetcher;
use apollo_client::shared::GitContext;
use apollo_client::ApolloClientError;
use apollo_config::resolve_document_sets;
use apollo_std::infoln;
use camino::Utf8PathBuf;
use clap::Parser;
use indexmap::IndexSet;

use crate::command::ApolloOutput;
use crate::documents::{load_operations, DEFAULT_TAG_NAME};
use crate::options::ProjectOpts;
use crate::{ApolloResult, PKG_VERSION};

#[derive(Debug, Parser)]
pub struct Check {
    #[clap(flatten)]
    project: ProjectOpts,

    /// Name of the template literal tag used to identify template literals
    /// containing GraphQL queries in Javascript/Typescript code
    #[arg(long = "tagName", default_value = DEFAULT_TAG_NAME)]
    tag_name: String,
}

impl Check {
    pub async fn run(&self, git_context: GitContext) -> ApolloResult<ApolloOutput> {
        infoln!("Loading Apollo project");
        let config = self.project.load_config(true)?;
        let key = config
            .effective_engine_key()
            .ok_or(ApolloClientError::MissingEngineKey)?
            .to_string();

        infoln!("Scanning for GraphQL queries");
        let fetcher = SchemaFetcher::new(&self.project.engine, PKG_VERSION);
        let document_sets = resolve_document_sets(&config, false, &fetcher).await?;
        let paths = unique_paths(document_sets.into_iter().flat_map(|set| set.document_paths));
        tracing::debug!(?paths, "scanning files for operations");

        let operations = load_operations(&paths, &self.tag_name)?;
        infoln!("Scanning for GraphQL queries ({} found)", operations.len());

        infoln!("Checking query compatibility with schema");
        let client = EngineClient::new(&self.project.engine, &key, PKG_VERSION)?;
        let response = check_operations::run(
            CheckOperationsInput {
                tag: CURRENT_TAG.to_string(),
                git_context,
                operations,
            },
            &client,
        )
        .await?;

        Ok(ApolloOutput::CheckOperations(response))
    }
}

/// The same file reached through several document sets is only checked once,
/// at its first position.
fn unique_paths(paths: impl IntoIterator<Item = Utf8PathBuf>) -> Vec<Utf8PathBuf> {
    paths.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn it_keeps_the_first_occurrence_of_each_path() {
        let paths = ["/p/b.graphql", "/p/a.graphql", "/p/b.graphql", "/p/c.ts"]
            .into_iter()
            .map(Utf8PathBuf::from);

        assert_eq!(
            unique_paths(paths),
            vec![
                Utf8PathBuf::from("/p/b.graphql"),
                Utf8PathBuf::from("/p/a.graphql"),
                Utf8PathBuf::from("/p/c.ts"),
            ]
        );
    }
}
