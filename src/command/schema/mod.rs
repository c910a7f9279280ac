mod download;

use clap::Parser;

use crate::command::ApolloOutput;
use crate::ApolloResult;

#[derive(Debug, Parser)]
pub struct Schema {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Download a schema from Apollo or a GraphQL endpoint in JSON format
    Download(download::Download),
}

impl Schema {
    pub async fn run(&self) -> ApolloResult<ApolloOutput> {
        match &self.command {
            Command::Download(command) => command.run().await,
        }
    }
}
