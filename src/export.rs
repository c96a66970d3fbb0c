//! Append-only export of collected import names.
//!
//! The artifact is a plain UTF-8 text file, one module name per line, no
//! header or footer. Repeated exports against the same destination append;
//! earlier runs are never truncated.

use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure at the export I/O boundary. Extraction itself never fails; a
/// failed export leaves the in-memory results untouched.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open import list {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to write import list {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// Append every module name in `modules` to the file at `destination`,
/// one per line. The file is created if absent. The set's lexical order
/// keeps the artifact reproducible for identical inputs.
pub fn append_import_list(
    modules: &BTreeSet<String>,
    destination: &Path,
) -> Result<(), ExportError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(destination)
        .map_err(|source| ExportError::Open {
            path: destination.to_path_buf(),
            source,
        })?;

    let mut block = String::new();
    for module in modules {
        block.push_str(module);
        block.push('\n');
    }

    file.write_all(block.as_bytes())
        .map_err(|source| ExportError::Write {
            path: destination.to_path_buf(),
            source,
        })?;

    debug!(
        "Appended {} import name(s) to {}",
        modules.len(),
        destination.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_export_creates_file_and_writes_sorted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("import_list.txt");

        append_import_list(&set(&["UIKit", "Foundation"]), &destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        assert_eq!(content, "Foundation\nUIKit\n");
    }

    #[test]
    fn test_export_appends_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("import_list.txt");

        append_import_list(&set(&["Foo"]), &destination).unwrap();
        append_import_list(&set(&["Bar"]), &destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        assert_eq!(content, "Foo\nBar\n");
    }

    #[test]
    fn test_export_of_empty_set_still_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("import_list.txt");

        append_import_list(&BTreeSet::new(), &destination).unwrap();

        assert!(destination.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "");
    }

    #[test]
    fn test_export_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing_dir").join("import_list.txt");

        let result = append_import_list(&set(&["Foo"]), &destination);
        assert!(matches!(result, Err(ExportError::Open { .. })));
    }
}
