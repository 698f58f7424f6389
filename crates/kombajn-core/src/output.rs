//! Output path handling and workbook saving.
//!
//! Filenames are sanitized before touching the filesystem and the final
//! path is checked to stay inside the chosen output directory, so a name
//! like `../../etc/x` cannot escape it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::debug;

/// Characters not allowed in output filenames on any supported platform.
const DISALLOWED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Error)]
pub enum OutputError {
    /// Filename empty, or nothing left of it after sanitization
    #[error("invalid output filename: {0:?}")]
    InvalidFilename(String),

    /// Resolved path escaped the output directory
    #[error("output path {path} escapes directory {dir}")]
    Traversal { path: PathBuf, dir: PathBuf },

    /// Output directory could not be created or resolved
    #[error("cannot use output directory: {0}")]
    Io(#[from] std::io::Error),

    /// File is locked or the directory is not writable
    #[error("no write access to {path} (close the file in another program?)")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure while serializing the workbook
    #[error("failed to write workbook: {0}")]
    Save(#[from] XlsxError),
}

/// Reduces an arbitrary name to a safe filename.
///
/// Path components are dropped, disallowed characters become `_`, and
/// leading/trailing dots and spaces are trimmed. A name with no usable
/// characters left is rejected rather than silently renamed.
pub fn sanitize_filename(name: &str) -> Result<String, OutputError> {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let replaced: String = base
        .chars()
        .map(|c| if DISALLOWED.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_matches(|c| c == '.' || c == ' ');

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '_') {
        return Err(OutputError::InvalidFilename(name.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Resolves the final output path inside `directory` (default: cwd),
/// appending `.xlsx` when missing.
pub fn resolve_output_path(
    filename: &str,
    directory: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let mut name = sanitize_filename(filename)?;
    if !name.to_lowercase().ends_with(".xlsx") {
        name.push_str(".xlsx");
    }

    let dir = directory.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let dir = dir.canonicalize()?;

    let path = dir.join(&name);
    if !path.starts_with(&dir) {
        return Err(OutputError::Traversal { path, dir });
    }

    Ok(path)
}

/// Saves the workbook under a sanitized filename, returning the path
/// actually written.
pub fn save_workbook(
    workbook: &mut Workbook,
    filename: &str,
    directory: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let path = resolve_output_path(filename, directory)?;
    debug!(path = %path.display(), "saving workbook");

    match workbook.save(&path) {
        Ok(()) => Ok(path),
        Err(XlsxError::IoError(e)) if e.kind() == ErrorKind::PermissionDenied => {
            Err(OutputError::Permission { path, source: e })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_disallowed_characters() {
        assert_eq!(sanitize_filename("my:log?.xlsx").unwrap(), "my_log_.xlsx");
    }

    #[test]
    fn drops_path_components() {
        assert_eq!(sanitize_filename("subdir/plan.xlsx").unwrap(), "plan.xlsx");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename("  .plan. ").unwrap(), "plan");
    }

    #[test]
    fn rejects_names_with_nothing_left() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("...").is_err());
        assert!(sanitize_filename("???").is_err());
        assert!(sanitize_filename("..").is_err());
    }

    #[test]
    fn appends_extension_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_output_path("dziennik", Some(dir.path())).unwrap();
        assert!(path.to_string_lossy().ends_with("dziennik.xlsx"));

        let path = resolve_output_path("dziennik.XLSX", Some(dir.path())).unwrap();
        assert!(path.to_string_lossy().ends_with("dziennik.XLSX"));
    }

    #[test]
    fn traversal_attempts_stay_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_output_path("../../escape", Some(dir.path())).unwrap();
        assert!(path.starts_with(dir.path().canonicalize().unwrap()));
        assert!(path.ends_with("escape.xlsx"));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = resolve_output_path("plan", Some(&nested)).unwrap();
        assert!(nested.exists());
        assert!(path.starts_with(nested.canonicalize().unwrap()));
    }
}
