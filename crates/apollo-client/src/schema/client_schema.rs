use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;

use super::introspection::IntrospectionResult;
use crate::ApolloClientError;

/// A validated schema built from an introspection result, ready for client-side use.
#[derive(Debug, Clone)]
pub struct ClientSchema {
    sdl: String,
    schema: Valid<Schema>,
}

impl ClientSchema {
    pub fn from_introspection(introspection: &IntrospectionResult) -> Result<ClientSchema, ApolloClientError> {
        let sdl = introspection.typed()?.encode()?;
        Self::from_sdl(sdl)
    }

    pub fn from_sdl(sdl: String) -> Result<ClientSchema, ApolloClientError> {
        let schema = Schema::parse_and_validate(&sdl, "schema.graphql").map_err(|with_errors| {
            ApolloClientError::InvalidSchema {
                msg: with_errors.errors.to_string(),
            }
        })?;
        Ok(ClientSchema { sdl, schema })
    }

    pub fn sdl(&self) -> &str {
        &self.sdl
    }

    pub fn schema(&self) -> &Valid<Schema> {
        &self.schema
    }
}
