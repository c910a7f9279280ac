//! Reading GraphQL operations out of the files a project's document sets resolve to.

mod template;

use std::fmt::{self, Display};

use apollo_compiler::ast::Document;
use apollo_std::{warnln, ApolloStdError, Fs, Style};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use template::scan_tagged_templates;

/// The tag recognised on JS/TS template literals unless `--tagName` says otherwise.
pub const DEFAULT_TAG_NAME: &str = "gql";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not parse the operations in {} file(s):\n{failures}", .failures.len())]
    Parse { failures: ParseFailures },

    #[error(transparent)]
    ApolloStdError(#[from] ApolloStdError),
}

/// A file whose operations did not parse, with the parser's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub path: Utf8PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailures(Vec<ParseFailure>);

impl ParseFailures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseFailure> {
        self.0.iter()
    }
}

impl Display for ParseFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .0
            .iter()
            .map(|failure| format!("  - {}: {}", failure.path, failure.message))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{lines}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    GraphQl,
    Script,
}

impl SourceKind {
    fn of(path: &Utf8Path) -> Option<SourceKind> {
        match path.extension()? {
            "graphql" | "gql" => Some(SourceKind::GraphQl),
            "js" | "jsx" | "ts" | "tsx" => Some(SourceKind::Script),
            _ => None,
        }
    }
}

/// Loads every operation document found in `paths`, printed in normalised form.
///
/// Files are read in order. Any file that fails to read or parse is collected, and
/// if there is at least one such file nothing is returned.
pub fn load_operations(paths: &[Utf8PathBuf], tag_name: &str) -> Result<Vec<String>, DocumentError> {
    let mut operations = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        let Some(kind) = SourceKind::of(path) else {
            tracing::debug!(%path, "not a GraphQL or JS/TS file, skipping");
            continue;
        };
        let contents = match Fs::read_file(path) {
            Ok(contents) => contents,
            Err(e) => {
                failures.push(ParseFailure {
                    path: path.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let sources = match kind {
            SourceKind::GraphQl => vec![contents],
            SourceKind::Script => {
                let scan = scan_tagged_templates(&contents, tag_name);
                for line in scan.interpolated {
                    warnln!(
                        "Skipping the `{}` template on line {} of {} because it uses ${{}} substitutions",
                        tag_name,
                        line,
                        Style::Path.paint(path.as_str())
                    );
                }
                scan.templates.into_iter().map(|t| t.content).collect()
            }
        };

        for source in sources {
            match Document::parse(source, path) {
                Ok(document) => operations.push(document.to_string()),
                Err(with_errors) => failures.push(ParseFailure {
                    path: path.clone(),
                    message: with_errors.errors.to_string(),
                }),
            }
        }
    }

    if failures.is_empty() {
        tracing::debug!(count = operations.len(), "loaded operations");
        Ok(operations)
    } else {
        Err(DocumentError::Parse {
            failures: ParseFailures(failures),
        })
    }
}
