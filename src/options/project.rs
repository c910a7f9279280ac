use apollo_client::engine::DEFAULT_ENGINE_URL;
use apollo_config::{find_and_load_config, load_config_from_file, ApolloConfig, ConfigOverrides};
use apollo_std::Fs;
use camino::Utf8PathBuf;
use clap::Parser;

use crate::utils::parsers::parse_header;
use crate::ApolloResult;

/// Where a command finds its project and how the command line changes it.
#[derive(Debug, Clone, Parser)]
pub struct ProjectOpts {
    /// Path to your Apollo config file
    #[arg(long = "config")]
    pub config: Option<Utf8PathBuf>,

    /// Path to your schema, replacing every schema in the config file
    #[arg(long = "schema")]
    pub schema: Option<String>,

    /// The URL of a GraphQL server, replacing every schema in the config file
    #[arg(long = "endpoint")]
    pub endpoint: Option<String>,

    /// Headers to send to the endpoint, as "KEY:VALUE" (may be repeated)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// The API key of your graph in the Apollo engine
    #[arg(long = "key", env = "ENGINE_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Paths to your GraphQL queries, can include search tokens like **.
    /// Separate several patterns with newlines.
    #[arg(long = "queries")]
    pub queries: Option<String>,

    /// The engine API to talk to
    #[arg(long = "engine", hide = true, default_value = DEFAULT_ENGINE_URL)]
    pub engine: String,
}

impl ProjectOpts {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            schema: self.schema.clone(),
            endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            queries: self.queries.clone(),
            key: self.key.clone(),
        }
    }

    /// Loads the project configuration and applies the command line on top of it.
    ///
    /// An explicit `--config` is read as given, otherwise the current directory is
    /// searched for one of the known config files.
    pub fn load_config(&self, default_endpoint: bool) -> ApolloResult<ApolloConfig> {
        let config = match &self.config {
            Some(file) => load_config_from_file(file, default_endpoint)?,
            None => find_and_load_config(&Fs::current_dir()?, default_endpoint)?,
        };
        let config = config.with_overrides(&self.overrides());
        tracing::debug!(?config, "loaded project config");
        Ok(config)
    }
}
