use apollo_client::shared::GitContext;
use clap::Parser;
use timber::LogLevel;

use crate::command::{self, ApolloOutput};
use crate::options::OutputOpts;
use crate::utils::env::{ApolloEnv, ApolloEnvKey};
use crate::ApolloResult;

#[derive(Debug, Parser)]
#[command(
    name = "apollo",
    version,
    about = "
apollo checks the GraphQL operations in your project against your schema.

The most common commands are:

    - apollo schema download: Download a schema from a GraphQL endpoint or the Apollo engine
    - apollo queries check: Check your operations for compatibility with the published schema

Both read apollo.config.js, apollo.config.json, apollo.config.yaml or the
apollo field of package.json from the current directory, or --config.
"
)]
pub struct Apollo {
    #[command(subcommand)]
    pub command: Command,

    /// Specify apollo's log level
    #[arg(long = "log", short = 'l', global = true)]
    pub log_level: Option<LogLevel>,

    #[clap(flatten)]
    pub output_opts: OutputOpts,

    #[arg(skip)]
    pub env_store: ApolloEnv,
}

impl Apollo {
    pub(crate) fn get_git_context(&self) -> ApolloResult<GitContext> {
        // constructing GitContext with a set of overrides from env vars
        let overrides = GitContext {
            branch: self.env_store.get(ApolloEnvKey::VcsBranch)?,
            author: self.env_store.get(ApolloEnvKey::VcsCommitter)?,
            commit: self.env_store.get(ApolloEnvKey::VcsCommit)?,
            remote_url: self.env_store.get(ApolloEnvKey::VcsRemoteUrl)?,
        };
        let git_context = GitContext::new_with_override(overrides);
        tracing::debug!(?git_context);
        Ok(git_context)
    }

    pub fn json(&self) -> bool {
        self.output_opts.json
    }

    pub async fn run(&self) -> ApolloResult<ApolloOutput> {
        match &self.command {
            Command::Schema(command) => command.run().await,
            Command::Queries(command) => command.run(self.get_git_context()?).await,
        }
    }
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Schema commands
    Schema(command::Schema),

    /// Operation commands
    Queries(command::Queries),
}
