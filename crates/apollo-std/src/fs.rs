use std::fs;

use anyhow::{anyhow, Context};
use camino::{Utf8Path, Utf8PathBuf};

use crate::ApolloStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk, erroring on directories and empty files
    pub fn read_file<P>(path: P) -> Result<String, ApolloStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| anyhow!("could not find '{}'", path).context(e))?;
        if !metadata.is_file() {
            return Err(ApolloStdError::NotAFile {
                path: path.to_string(),
            });
        }
        tracing::info!("reading {} from disk", &path);
        let contents =
            fs::read_to_string(path).with_context(|| format!("could not read {}", &path))?;
        if contents.trim().is_empty() {
            Err(ApolloStdError::EmptyFile {
                empty_file: path.to_string(),
            })
        } else {
            Ok(contents)
        }
    }

    /// writes a file to disk, creating any missing parent directories first
    pub fn write_file<P, C>(path: P, contents: C) -> Result<(), ApolloStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(anyhow!("cannot write to a path without a final element {path}").into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                Self::create_dir_all(parent)?;
            }
        }
        tracing::info!("writing {} to disk", &path);
        fs::write(path, contents).with_context(|| format!("could not write {}", &path))?;
        Ok(())
    }

    /// creates a directory and all of its parents
    pub fn create_dir_all<P>(path: P) -> Result<(), ApolloStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::info!("creating {} directory", &path);
        fs::create_dir_all(path)
            .with_context(|| format!("could not create {} directory", &path))?;
        Ok(())
    }

    /// returns true when `path` points at an existing regular file
    pub fn is_file<P>(path: P) -> bool
    where
        P: AsRef<Utf8Path>,
    {
        fs::metadata(path.as_ref())
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// the current working directory as a UTF-8 path
    pub fn current_dir() -> Result<Utf8PathBuf, ApolloStdError> {
        let cwd = std::env::current_dir().context("could not read the current directory")?;
        Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| anyhow!("current directory '{}' is not valid UTF-8", p.display()).into())
    }

    /// joins a relative path onto the current directory, leaving absolute paths untouched
    pub fn absolutize<P>(path: P) -> Result<Utf8PathBuf, ApolloStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(Self::current_dir()?.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("schema.json")]
    #[case("nested/dir/schema.json")]
    fn it_writes_files_and_creates_parents(#[case] relative: &str) {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let target = root.join(relative);

        let res = Fs::write_file(&target, "{}");

        assert_that(&res).is_ok();
        assert_that(&Fs::read_file(&target).unwrap()).is_equal_to("{}".to_string());
    }

    #[test]
    fn it_refuses_to_read_directories() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let res = Fs::read_file(&root);

        assert!(matches!(res, Err(ApolloStdError::NotAFile { .. })));
    }

    #[test]
    fn it_refuses_to_read_empty_files() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let empty = root.join("empty.json");
        fs::write(&empty, "  \n").unwrap();

        let res = Fs::read_file(&empty);

        assert!(matches!(res, Err(ApolloStdError::EmptyFile { .. })));
    }

    #[test]
    fn it_reports_missing_files() {
        let res = Fs::read_file("definitely/not/here.json");
        assert_that(&res).is_err();
        assert!(!Fs::is_file("definitely/not/here.json"));
    }

    #[test]
    fn it_leaves_absolute_paths_alone() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        assert_eq!(Fs::absolutize(&root).unwrap(), root);
    }
}
