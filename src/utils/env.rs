use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// ApolloEnv lets tests mock environment variables, so they can run in
/// parallel without the developer's own environment leaking in.
#[derive(Debug, Clone)]
pub struct ApolloEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for ApolloEnv {
    fn default() -> ApolloEnv {
        ApolloEnv::new()
    }
}

impl ApolloEnv {
    /// creates a new environment variable store
    pub fn new() -> ApolloEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        ApolloEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: ApolloEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => mock_store.get(&key_str).cloned(),
            None => match env::var(&key_str) {
                Ok(data) => Some(data),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("The value of the environment variable \"{key_str}\" is not valid Unicode."),
                    ));
                }
            },
        };

        match &result {
            Some(value) => tracing::debug!("read environment variable ${} = {}", &key_str, value),
            None => tracing::trace!("could not find ${}", &key_str),
        }

        Ok(result)
    }

    /// sets a value in the mock store; real environment variables are never written
    pub fn insert(&mut self, key: ApolloEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.to_string());
        }
    }
}

/// Every `APOLLO_` prefixed environment variable the CLI reads.
///
/// `ApolloEnvKey::VcsBranch.to_string()` is `APOLLO_VCS_BRANCH`.
#[derive(Debug, Copy, Clone)]
pub enum ApolloEnvKey {
    VcsBranch,
    VcsCommit,
    VcsCommitter,
    VcsRemoteUrl,
}

impl fmt::Display for ApolloEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{self:?}").to_shouty_snake_case();
        write!(fmt, "APOLLO_{dbg}")
    }
}
