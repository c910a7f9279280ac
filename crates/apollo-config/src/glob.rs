use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::ConfigError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expands `pattern` relative to `root` into the files it matches.
///
/// Directories are never returned. Results are sorted and lexically normalized.
/// Wildcards never match a leading `.`, but a literal one does.
pub fn expand_pattern(root: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, ConfigError> {
    let pattern = trim_current_dir(pattern);
    let (base, full_pattern) = if Utf8Path::new(pattern).is_absolute() {
        (Utf8PathBuf::from("/"), pattern.to_string())
    } else {
        (
            root.to_path_buf(),
            format!("{}/{}", Pattern::escape(root.as_str()).trim_end_matches('/'), pattern),
        )
    };
    let compiled = Pattern::new(&full_pattern).map_err(|e| ConfigError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let literal = segments
        .iter()
        .take(segments.len().saturating_sub(1))
        .take_while(|segment| !has_wildcard(segment))
        .count();
    let mut walk_root = base;
    for segment in &segments[..literal] {
        walk_root.push(segment);
    }
    if !walk_root.is_dir() {
        tracing::trace!(%walk_root, pattern, "glob base does not exist");
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(&walk_root).follow_links(true);
    if !segments[literal..].contains(&"**") {
        walker = walker.max_depth(segments.len() - literal);
    }

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file()
                    || !compiled.matches_path_with(entry.path(), MATCH_OPTIONS)
                {
                    continue;
                }
                let path = Utf8PathBuf::try_from(entry.into_path())?;
                files.push(normalize_path(&path));
            }
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                tracing::warn!("skipping unreadable path {}: {}", path, e);
            }
        }
    }
    files.sort();
    files.dedup();
    tracing::trace!(%root, pattern, matches = files.len(), "expanded glob");
    Ok(files)
}

fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

/// Whether `path` is excluded by any of `excludes`, matched relative to `root`.
///
/// A pattern also excludes everything below a directory it matches.
pub fn is_excluded(root: &Utf8Path, path: &Utf8Path, excludes: &[String]) -> Result<bool, ConfigError> {
    if excludes.is_empty() {
        return Ok(false);
    }
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => path,
    };

    for exclude in excludes {
        let exclude = trim_current_dir(exclude);
        let pattern = Pattern::new(exclude).map_err(|e| ConfigError::InvalidGlob {
            pattern: exclude.to_string(),
            message: e.msg.to_string(),
        })?;
        let hit = relative
            .ancestors()
            .filter(|candidate| !candidate.as_str().is_empty())
            .any(|candidate| pattern.matches_with(candidate.as_str(), MATCH_OPTIONS));
        if hit {
            tracing::trace!(%path, exclude, "excluded");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolves `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn trim_current_dir(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    struct Tree {
        _dir: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn tree() -> Tree {
        let dir = TempDir::new().unwrap();
        for file in [
            "ops/a.graphql",
            "ops/b.graphql",
            "ops/nested/c.graphql",
            "ops/.hidden.graphql",
            ".config/e.graphql",
            "node_modules/pkg/d.graphql",
            "src/app.ts",
        ] {
            dir.child(file).write_str("query Q { a }").unwrap();
        }
        dir.child("ops/dir.graphql").create_dir_all().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().canonicalize().unwrap()).unwrap();
        Tree { _dir: dir, root }
    }

    fn relative(root: &Utf8Path, files: Vec<Utf8PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string())
            .collect()
    }

    #[rstest]
    #[case::single_star("ops/*.graphql", &["ops/a.graphql", "ops/b.graphql"])]
    #[case::leading_dot_segment("./ops/*.graphql", &["ops/a.graphql", "ops/b.graphql"])]
    #[case::double_star(
        "ops/**/*.graphql",
        &["ops/a.graphql", "ops/b.graphql", "ops/nested/c.graphql"]
    )]
    #[case::literal_dot("ops/.*.graphql", &["ops/.hidden.graphql"])]
    #[case::literal_dotfile("ops/.hidden.graphql", &["ops/.hidden.graphql"])]
    #[case::dot_directory(".config/**/*.graphql", &[".config/e.graphql"])]
    #[case::literal_file("src/app.ts", &["src/app.ts"])]
    #[case::no_match("ops/*.gql", &[])]
    #[case::missing_base("missing/*.graphql", &[])]
    fn it_expands_patterns(tree: Tree, #[case] pattern: &str, #[case] expected: &[&str]) {
        let files = expand_pattern(&tree.root, pattern).unwrap();
        assert_eq!(relative(&tree.root, files), expected);
    }

    #[rstest]
    fn double_star_reaches_every_depth(tree: Tree) {
        let files = relative(&tree.root, expand_pattern(&tree.root, "**/*.graphql").unwrap());
        assert!(files.contains(&"node_modules/pkg/d.graphql".to_string()));
        assert!(files.contains(&"ops/a.graphql".to_string()));
        assert!(!files.iter().any(|f| f.ends_with("dir.graphql")));
        assert!(!files.iter().any(|f| f.contains("/.") || f.starts_with('.')));
    }

    #[rstest]
    #[case::directory_name("node_modules/pkg/d.graphql", "node_modules", true)]
    #[case::star("ops/a.graphql", "ops/a.*", true)]
    #[case::star_does_not_cross_dirs("ops/nested/c.graphql", "ops/*.graphql", false)]
    #[case::double_star("ops/nested/c.graphql", "**/nested/*", true)]
    #[case::unrelated("ops/a.graphql", "src", false)]
    fn it_matches_excludes_against_ancestors(
        #[case] file: &str,
        #[case] exclude: &str,
        #[case] expected: bool,
    ) {
        let root = Utf8Path::new("/work");
        let path = root.join(file);
        assert_eq!(
            is_excluded(root, &path, &[exclude.to_string()]).unwrap(),
            expected
        );
    }

    #[test]
    fn it_rejects_invalid_excludes() {
        let result = is_excluded(
            Utf8Path::new("/work"),
            Utf8Path::new("/work/a.graphql"),
            &["[".to_string()],
        );
        assert!(matches!(result, Err(ConfigError::InvalidGlob { .. })));
    }

    #[rstest]
    #[case("/work/./ops/../schema.json", "/work/schema.json")]
    #[case("/work/ops/a.graphql", "/work/ops/a.graphql")]
    #[case("ops/../../x", "../x")]
    fn it_normalizes_lexically(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_path(Utf8Path::new(input)), Utf8PathBuf::from(expected));
    }
}
