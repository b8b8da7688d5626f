//! Markdown file discovery.
//!
//! This module separates the discovery phase (finding files) from the
//! normalization phase ([`collect`](crate::collect)). A [`MarkdownSource`]
//! only lists candidate files; it never reads their contents.

use std::fs;
use std::path::{Path, PathBuf};

/// Error raised during markdown discovery.
///
/// Discovery errors are propagated, not recovered: a failing scan aborts
/// the documentation build.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Source base directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Directory could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Directory that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Source of markdown files for the collector.
///
/// Keeps the collector decoupled from any specific traversal mechanism.
/// Implementations return base-relative, `/`-separated path strings for
/// every `.md` file under the given subdirectory, in no particular order.
pub trait MarkdownSource {
    /// List every `.md` file under `subdirectory`, relative to the source root.
    ///
    /// A missing or empty subdirectory yields an empty list; a missing
    /// source root is an error.
    fn list_markdown_files(&self, subdirectory: &str) -> Result<Vec<String>, SourceError>;
}

/// Filesystem-backed markdown source.
///
/// Walks the directory tree under a base path with plain `read_dir`
/// recursion. Hidden files and directories (leading `.`) are skipped.
pub struct FsSource {
    base_path: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `base_path`.
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// The base directory this source is rooted at.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Walk `dir_path` recursively, appending relative paths of `.md` files.
    ///
    /// `rel_prefix` is the `/`-joined path of `dir_path` relative to the
    /// base directory.
    fn walk(dir_path: &Path, rel_prefix: &str, files: &mut Vec<String>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir_path).map_err(|source| SourceError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                path: dir_path.to_path_buf(),
                source,
            })?;

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let rel_path = if rel_prefix.is_empty() {
                name.clone()
            } else {
                format!("{rel_prefix}/{name}")
            };

            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                Self::walk(&entry.path(), &rel_path, files)?;
            } else if Path::new(&name).extension().is_some_and(|e| e == "md") {
                files.push(rel_path);
            }
        }

        Ok(())
    }
}

impl MarkdownSource for FsSource {
    fn list_markdown_files(&self, subdirectory: &str) -> Result<Vec<String>, SourceError> {
        if !self.base_path.is_dir() {
            return Err(SourceError::NotFound(self.base_path.clone()));
        }

        let scan_root = self.base_path.join(subdirectory);
        if !scan_root.is_dir() {
            // Missing subdirectory matches nothing, same as an empty glob
            tracing::debug!(subdirectory, "subdirectory does not exist, no matches");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        Self::walk(&scan_root, subdirectory, &mut files)?;
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_list_finds_md_files() {
        let temp_dir = create_test_dir();
        let client = temp_dir.path().join("client");
        fs::create_dir(&client).unwrap();
        fs::write(client.join("auth.md"), "# Auth").unwrap();
        fs::write(client.join("README.md"), "# Client").unwrap();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let mut files = source.list_markdown_files("client").unwrap();
        files.sort();

        assert_eq!(files, vec!["client/README.md", "client/auth.md"]);
    }

    #[test]
    fn test_list_recurses_into_subdirectories() {
        let temp_dir = create_test_dir();
        let nested = temp_dir.path().join("tasks/aws/batch");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("jobs.md"), "# Jobs").unwrap();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let files = source.list_markdown_files("tasks").unwrap();

        assert_eq!(files, vec!["tasks/aws/batch/jobs.md"]);
    }

    #[test]
    fn test_list_ignores_non_markdown() {
        let temp_dir = create_test_dir();
        let core = temp_dir.path().join("core");
        fs::create_dir(&core).unwrap();
        fs::write(core.join("flow.md"), "# Flow").unwrap();
        fs::write(core.join("diagram.png"), [0u8; 4]).unwrap();
        fs::write(core.join("notes.txt"), "notes").unwrap();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let files = source.list_markdown_files("core").unwrap();

        assert_eq!(files, vec!["core/flow.md"]);
    }

    #[test]
    fn test_list_skips_hidden_files_and_dirs() {
        let temp_dir = create_test_dir();
        let core = temp_dir.path().join("core");
        fs::create_dir_all(core.join(".cache")).unwrap();
        fs::write(core.join(".cache/stale.md"), "# Stale").unwrap();
        fs::write(core.join(".draft.md"), "# Draft").unwrap();
        fs::write(core.join("flow.md"), "# Flow").unwrap();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let files = source.list_markdown_files("core").unwrap();

        assert_eq!(files, vec!["core/flow.md"]);
    }

    #[test]
    fn test_list_missing_subdirectory_is_empty() {
        let temp_dir = create_test_dir();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let files = source.list_markdown_files("nonexistent").unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_list_empty_subdirectory_is_empty() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("agent")).unwrap();

        let source = FsSource::new(temp_dir.path().to_path_buf());
        let files = source.list_markdown_files("agent").unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_list_missing_base_is_error() {
        let source = FsSource::new(PathBuf::from("/nonexistent/docs"));
        let result = source.list_markdown_files("client");

        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_source_error_display_includes_path() {
        let err = SourceError::NotFound(PathBuf::from("/docs/api"));

        assert_eq!(err.to_string(), "Source directory not found: /docs/api");
    }
}
