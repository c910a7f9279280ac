use anyhow::{anyhow, Result};

/// Parses a `--header` value of the form `KEY:VALUE`.
///
/// Only the first colon separates the key, so values such as URLs keep theirs.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let (key, value) = header
        .split_once(':')
        .ok_or_else(|| anyhow!("Headers must be in the form KEY:VALUE, found '{header}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("The header '{header}' has an empty name"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
