use std::sync::LazyLock;

use apollo_std::Fs;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;

use crate::config::{load_config, ApolloConfig};
use crate::error::ConfigError;
use crate::literal;
use crate::raw::RawApolloConfig;

/// Files looked for, in order, when no config path is given.
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    "apollo.config.js",
    "apollo.config.json",
    "apollo.config.yaml",
    "apollo.config.yml",
    "package.json",
];

/// The `package.json` field holding apollo configuration.
const PACKAGE_MANIFEST_KEY: &str = "apollo";

static MODULE_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:module\.exports\s*=|export\s+default)\s*").expect("module export pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Module,
    PackageManifest,
    Json,
    Yaml,
}

impl ConfigFormat {
    fn of(file: &Utf8Path) -> Option<Self> {
        if file.file_name() == Some("package.json") {
            return Some(ConfigFormat::PackageManifest);
        }
        match file.extension() {
            Some("js") | Some("cjs") | Some("mjs") => Some(ConfigFormat::Module),
            Some("json") => Some(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Loads configuration from an explicit file.
///
/// The file is read from disk on every call, so edits are always picked up.
/// The project folder is the file's directory.
pub fn load_config_from_file(file: &Utf8Path, default_endpoint: bool) -> Result<ApolloConfig, ConfigError> {
    let format = ConfigFormat::of(file).ok_or_else(|| ConfigError::UnsupportedFormat(file.to_path_buf()))?;
    let file = Fs::absolutize(file)?;
    let config_dir = file
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from("/"));
    tracing::debug!(?format, %file, "loading apollo config");

    let contents = Fs::read_file(&file)?;
    let value = match format {
        ConfigFormat::Module => parse_module(&file, &contents)?,
        ConfigFormat::PackageManifest => {
            let manifest: serde_json::Value =
                serde_json::from_str(&contents).map_err(|e| malformed(&file, e))?;
            manifest
                .get(PACKAGE_MANIFEST_KEY)
                .cloned()
                .unwrap_or(serde_json::Value::Null)
        }
        ConfigFormat::Json => serde_json::from_str(&contents).map_err(|e| malformed(&file, e))?,
        ConfigFormat::Yaml => serde_yaml::from_str(&contents).map_err(|e| malformed(&file, e))?,
    };

    let raw = RawApolloConfig::parse(value).map_err(|errors| ConfigError::InvalidConfig {
        path: file.clone(),
        errors,
    })?;
    Ok(load_config(raw, &config_dir, default_endpoint))
}

/// Looks for a config file in `dir`, falling back to an empty config rooted at `dir`.
pub fn find_and_load_config(dir: &Utf8Path, default_endpoint: bool) -> Result<ApolloConfig, ConfigError> {
    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if Fs::is_file(&candidate) {
            tracing::debug!(%candidate, "found apollo config");
            return load_config_from_file(&candidate, default_endpoint);
        }
    }
    tracing::debug!(%dir, "no apollo config found, using defaults");
    Ok(load_config(RawApolloConfig::default(), dir, default_endpoint))
}

/// Reads the object literal exported by a static JS config module.
///
/// Only `module.exports = { ... }` and `export default { ... }` are understood;
/// the literal may use unquoted keys, single quotes, comments and trailing commas.
fn parse_module(file: &Utf8Path, contents: &str) -> Result<serde_json::Value, ConfigError> {
    let without_comments = literal::strip_comments(contents);

    let export = MODULE_EXPORT.find(&without_comments).ok_or_else(|| ConfigError::MalformedConfig {
        path: file.to_path_buf(),
        message: "expected `module.exports = { ... }` or `export default { ... }`".to_string(),
    })?;
    let object = without_comments[export.end()..].trim().trim_end_matches(';').trim_end();
    if !object.starts_with('{') || !object.ends_with('}') {
        return Err(ConfigError::MalformedConfig {
            path: file.to_path_buf(),
            message: "the exported value must be a plain object literal".to_string(),
        });
    }
    let json = literal::to_json(object).map_err(|message| malformed(file, message))?;

    serde_json::from_str(&json).map_err(|e| malformed(file, e))
}

fn malformed(file: &Utf8Path, error: impl std::fmt::Display) -> ConfigError {
    ConfigError::MalformedConfig {
        path: file.to_path_buf(),
        message: error.to_string(),
    }
}
