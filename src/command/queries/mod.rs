mod check;

use apollo_client::shared::GitContext;
use clap::Parser;

use crate::command::ApolloOutput;
use crate::ApolloResult;

#[derive(Debug, Parser)]
pub struct Queries {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Checks your GraphQL operations for compatibility with the server.
    /// Checks against the published schema in the Apollo engine.
    Check(check::Check),
}

impl Queries {
    pub async fn run(&self, git_context: GitContext) -> ApolloResult<ApolloOutput> {
        match &self.command {
            Command::Check(command) => command.run(git_context).await,
        }
    }
}
