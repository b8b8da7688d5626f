//! Path collector.
//!
//! Turns discovered markdown file paths into sorted navigation
//! identifiers. This is the whole transform the sidebar is built from:
//! strip `.md`, strip a trailing `README` segment, sort.

use crate::source::{MarkdownSource, SourceError};

/// Collect sorted navigation identifiers for a subdirectory.
///
/// Lists every `.md` file under `subdirectory`, normalizes each path with
/// [`normalize_path`] and returns the identifiers in ascending code-point
/// order. An empty match set yields an empty `Vec`.
///
/// # Errors
///
/// Returns [`SourceError`] if the source root does not exist or a
/// directory cannot be read.
pub fn collect<S>(source: &S, subdirectory: &str) -> Result<Vec<String>, SourceError>
where
    S: MarkdownSource + ?Sized,
{
    let mut identifiers: Vec<String> = source
        .list_markdown_files(subdirectory)?
        .iter()
        .map(|path| normalize_path(path))
        .collect();

    // Code-point order: uppercase sorts before lowercase, no locale rules
    identifiers.sort();

    tracing::debug!(
        subdirectory,
        count = identifiers.len(),
        "collected navigation identifiers"
    );
    Ok(identifiers)
}

/// Normalize a base-relative markdown path into a navigation identifier.
///
/// Strips the trailing `.md` extension, then a trailing `README` segment.
/// `README` is only stripped at a path-segment boundary: a bare `README`
/// becomes the empty string (the root index), `client/README` becomes
/// `client`, but `NOTREADME` is left alone.
///
/// # Examples
///
/// ```
/// use navgen_core::normalize_path;
///
/// assert_eq!(normalize_path("client/auth.md"), "client/auth");
/// assert_eq!(normalize_path("client/README.md"), "client");
/// assert_eq!(normalize_path("README.md"), "");
/// assert_eq!(normalize_path("core/NOTREADME.md"), "core/NOTREADME");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let without_ext = path.strip_suffix(".md").unwrap_or(path);

    if without_ext == "README" {
        return String::new();
    }
    if let Some(parent) = without_ext.strip_suffix("/README") {
        return parent.to_owned();
    }
    without_ext.to_owned()
}
