//! The shape of configuration as users write it.
//!
//! Raw values accept the loose forms the config file allows (a single string
//! where a list is expected, a bare URL where an endpoint object is expected).
//! [`RawApolloConfig::parse`] turns an arbitrary JSON value into these types
//! and validates them, reporting every problem it finds at once.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::endpoint::EndpointConfig;
use crate::error::{ConfigValidationError, ConfigValidationErrors};

/// Either a single value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// `[a, b]`
    Many(Vec<T>),
    /// `a`
    One(T),
}

impl<T> OneOrMany<T> {
    /// Flattens into a list, wrapping a single value.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(values) => values,
            OneOrMany::One(value) => vec![value],
        }
    }
}

/// An endpoint written either as a bare URL or as an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawEndpoint {
    /// `"http://localhost:4000/graphql"`
    Url(String),
    /// `{ "url": ..., "subscriptions": ..., "headers": {...} }`
    Config(EndpointConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSchemaDependency {
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub endpoint: Option<RawEndpoint>,
    #[serde(default)]
    pub engine_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocumentSet {
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub includes: Option<OneOrMany<String>>,
    #[serde(default)]
    pub excludes: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApolloConfig {
    #[serde(default)]
    pub schemas: Option<IndexMap<String, RawSchemaDependency>>,
    #[serde(default)]
    pub documents: Option<OneOrMany<RawDocumentSet>>,
    #[serde(default)]
    pub engine_key: Option<String>,
}

impl RawApolloConfig {
    /// Parses and validates an untyped configuration object.
    ///
    /// `null` is treated like an empty object.
    pub fn parse(value: serde_json::Value) -> Result<Self, ConfigValidationErrors> {
        let value = if value.is_null() {
            serde_json::Value::Object(Default::default())
        } else {
            value
        };
        let raw: RawApolloConfig = serde_json::from_value(value).map_err(|e| {
            ConfigValidationErrors::from(vec![ConfigValidationError::Shape {
                message: e.to_string(),
            }])
        })?;
        raw.validate()?;
        Ok(raw)
    }

    fn validate(&self) -> Result<(), ConfigValidationErrors> {
        let mut errors = Vec::new();

        if let Some(schemas) = &self.schemas {
            for name in schemas.keys() {
                if name.trim().is_empty() {
                    errors.push(ConfigValidationError::EmptySchemaName);
                }
            }
        }

        if let Some(documents) = &self.documents {
            let documents = match documents {
                OneOrMany::Many(sets) => sets.iter().collect::<Vec<_>>(),
                OneOrMany::One(set) => vec![set],
            };
            for (index, set) in documents.into_iter().enumerate() {
                let includes = set.includes.iter().flat_map(patterns);
                let excludes = set.excludes.iter().flat_map(patterns);
                for (field, pattern) in includes
                    .map(|p| ("includes", p))
                    .chain(excludes.map(|p| ("excludes", p)))
                {
                    if let Some(error) = check_pattern(index, field, pattern) {
                        errors.push(error);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}

fn patterns(value: &OneOrMany<String>) -> Vec<&String> {
    match value {
        OneOrMany::Many(values) => values.iter().collect(),
        OneOrMany::One(value) => vec![value],
    }
}

fn check_pattern(index: usize, field: &'static str, pattern: &str) -> Option<ConfigValidationError> {
    if pattern.trim().is_empty() {
        return Some(ConfigValidationError::EmptyPattern { index, field });
    }
    glob::Pattern::new(pattern)
        .err()
        .map(|e| ConfigValidationError::InvalidPattern {
            index,
            field,
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_accepts_single_values_and_lists() {
        let raw = RawApolloConfig::parse(json!({
            "schemas": {
                "local": { "endpoint": "http://localhost:4000/graphql" },
                "remote": { "endpoint": { "url": "https://example.com/graphql" } }
            },
            "documents": { "includes": "src/**/*.graphql", "excludes": ["a", "b"] }
        }))
        .unwrap();

        let schemas = raw.schemas.unwrap();
        assert_eq!(
            schemas["local"].endpoint,
            Some(RawEndpoint::Url("http://localhost:4000/graphql".to_string()))
        );
        assert!(matches!(
            schemas["remote"].endpoint,
            Some(RawEndpoint::Config(_))
        ));

        let documents = raw.documents.unwrap().into_vec();
        assert_eq!(documents.len(), 1);
        assert_eq!(
            documents[0].includes,
            Some(OneOrMany::One("src/**/*.graphql".to_string()))
        );
        assert_eq!(
            documents[0].excludes,
            Some(OneOrMany::Many(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn it_treats_null_as_empty() {
        assert_eq!(
            RawApolloConfig::parse(serde_json::Value::Null).unwrap(),
            RawApolloConfig::default()
        );
    }

    #[test]
    fn it_preserves_schema_declaration_order() {
        let raw = RawApolloConfig::parse(json!({
            "schemas": { "zeta": {}, "alpha": {}, "mid": {} }
        }))
        .unwrap();
        let names: Vec<_> = raw.schemas.unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn it_rejects_wrong_shapes() {
        let errors = RawApolloConfig::parse(json!({ "documents": [{ "includes": 42 }] }))
            .unwrap_err();
        assert_that(&errors.len()).is_equal_to(1);
        assert!(matches!(
            errors.iter().next(),
            Some(ConfigValidationError::Shape { .. })
        ));
    }

    #[test]
    fn it_collects_every_pattern_problem() {
        let errors = RawApolloConfig::parse(json!({
            "schemas": { "": {} },
            "documents": [
                { "includes": ["", "ok/*.graphql"] },
                { "excludes": "[unclosed" }
            ]
        }))
        .unwrap_err();

        let errors: Vec<_> = errors.iter().collect();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], &ConfigValidationError::EmptySchemaName);
        assert_eq!(
            errors[1],
            &ConfigValidationError::EmptyPattern {
                index: 0,
                field: "includes"
            }
        );
        assert!(matches!(
            errors[2],
            ConfigValidationError::InvalidPattern { index: 1, field: "excludes", .. }
        ));
    }
}
