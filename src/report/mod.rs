//! Report rendering and output.
//!
//! Two files are written next to the chosen output prefix:
//!
//! | File | Content |
//! |------|---------|
//! | `<prefix>.mtnucratio` | Five-line plain text report |
//! | `<prefix>.mtnucratiomtnuc.json` | JSON with `metadata` and `metrics` sections |
//!
//! The file names follow the historical tool so that downstream aggregators
//! (e.g. `MultiQC`) pick them up unchanged.

pub mod json;
pub mod text;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

/// Fixed tool identifier recorded in the JSON metadata
pub const TOOL_NAME: &str = "mtnuccalculator";

/// Suffix appended to the output prefix for the text report
pub const TEXT_SUFFIX: &str = ".mtnucratio";

/// Suffix appended to the output prefix for the JSON report
pub const JSON_SUFFIX: &str = ".mtnucratiomtnuc.json";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to persist report: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Report path exists and is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
}

/// Where the two report files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

impl ReportPaths {
    #[must_use]
    pub fn from_prefix(prefix: &Path) -> Self {
        let with_suffix = |suffix: &str| {
            let mut s = prefix.as_os_str().to_os_string();
            s.push(suffix);
            PathBuf::from(s)
        };

        Self {
            text: with_suffix(TEXT_SUFFIX),
            json: with_suffix(JSON_SUFFIX),
        }
    }
}

/// Sample name shown in the JSON metadata: the base name of the input file
#[must_use]
pub fn sample_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Write both reports, making them visible only once both are complete.
///
/// # Errors
///
/// Returns `ReportError` if a temporary file cannot be created or written, or
/// if either file cannot be moved into place.
pub fn write_reports(paths: &ReportPaths, text: &str, json: &str) -> Result<(), ReportError> {
    ensure_replaceable(&paths.text)?;
    ensure_replaceable(&paths.json)?;

    let text_file = stage(&paths.text, text)?;
    let json_file = stage(&paths.json, json)?;

    text_file.persist(&paths.text)?;
    if let Err(e) = json_file.persist(&paths.json) {
        // Never leave the text report without its JSON counterpart
        if let Err(remove_err) = std::fs::remove_file(&paths.text) {
            warn!(
                path = %paths.text.display(),
                error = %remove_err,
                "Failed to remove text report after JSON report failed"
            );
        }
        return Err(e.into());
    }

    info!(
        text = %paths.text.display(),
        json = %paths.json.display(),
        "Wrote reports"
    );
    Ok(())
}

/// A rename can only replace a regular file (or nothing)
fn ensure_replaceable(target: &Path) -> Result<(), ReportError> {
    match std::fs::symlink_metadata(target) {
        Ok(meta) if !meta.is_file() => Err(ReportError::NotAFile(target.to_path_buf())),
        _ => Ok(()),
    }
}

fn stage(target: &Path, content: &str) -> Result<NamedTempFile, ReportError> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_paths() {
        let paths = ReportPaths::from_prefix(Path::new("/data/sample.bam"));
        assert_eq!(paths.text, PathBuf::from("/data/sample.bam.mtnucratio"));
        assert_eq!(
            paths.json,
            PathBuf::from("/data/sample.bam.mtnucratiomtnuc.json")
        );
    }

    #[test]
    fn test_sample_name() {
        assert_eq!(sample_name(Path::new("/data/run1/sample.bam")), "sample.bam");
        assert_eq!(sample_name(Path::new("sample.sam")), "sample.sam");
    }

    #[test]
    fn test_write_reports() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportPaths::from_prefix(&dir.path().join("sample.bam"));

        write_reports(&paths, "text\n", "{}").unwrap();

        assert_eq!(std::fs::read_to_string(&paths.text).unwrap(), "text\n");
        assert_eq!(std::fs::read_to_string(&paths.json).unwrap(), "{}");
        // Only the two reports remain, no stray temporaries
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_reports_json_target_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportPaths::from_prefix(&dir.path().join("sample.bam"));
        std::fs::create_dir(&paths.json).unwrap();
        std::fs::write(paths.json.join("occupant"), "x").unwrap();

        let result = write_reports(&paths, "text\n", "{}");

        assert!(matches!(result, Err(ReportError::NotAFile(_))));
        assert!(!paths.text.exists());
        assert!(paths.json.is_dir());
        // Only the blocking directory remains, no stray temporaries
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_reports_replaces_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportPaths::from_prefix(&dir.path().join("sample.bam"));

        write_reports(&paths, "old\n", "{\"old\": 1}").unwrap();
        write_reports(&paths, "new\n", "{}").unwrap();

        assert_eq!(std::fs::read_to_string(&paths.text).unwrap(), "new\n");
        assert_eq!(std::fs::read_to_string(&paths.json).unwrap(), "{}");
    }

    #[test]
    fn test_write_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ReportPaths::from_prefix(&dir.path().join("missing").join("sample.bam"));

        assert!(write_reports(&paths, "text\n", "{}").is_err());
        assert!(!paths.text.exists());
        assert!(!paths.json.exists());
    }
}
