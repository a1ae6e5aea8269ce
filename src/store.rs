//! Résumé file persistence.
//!
//! Résumés live on disk as the canonical JSON produced by
//! [`Resume::to_json`]; rendered documents are plain HTML files. All writes
//! go through a temp-file-and-rename so an interrupted save never leaves a
//! half-written file behind.

use crate::{
    error::{Error, Result},
    resume::Resume,
};
use serde_json::Value;
use std::{fs, io::Write, path::Path};
use tracing::debug;

/// Loads a résumé from a JSON file.
///
/// Unknown keys in the file are dropped and missing keys keep their defaults,
/// matching the merge contract.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, or a serialization error
/// if it is not valid JSON.
pub fn load_resume(path: impl AsRef<Path>) -> Result<Resume> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(Resume::from_value(&value))
}

/// Saves a résumé as canonical JSON.
///
/// # Errors
///
/// Returns a serialization error if the résumé cannot be serialized, or an
/// IO error if the write fails.
pub fn save_resume(resume: &Resume, path: impl AsRef<Path>) -> Result<()> {
    write_atomic(path.as_ref(), &resume.to_json()?)
}

/// Saves a rendered HTML document.
///
/// # Errors
///
/// Returns an IO error if the write fails.
pub fn save_html(html: &str, path: impl AsRef<Path>) -> Result<()> {
    write_atomic(path.as_ref(), html)
}

/// Writes a file atomically: temp file, sync, rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut temp_file = fs::File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use serde_json::json;

    #[test]
    fn test_save_load_round_trip() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("resume.json");

        let mut resume = Resume::new();
        resume.name = "Ada Lovelace".to_string();
        resume.skills = json!(["Mathematics"]);

        save_resume(&resume, file.path()).unwrap();
        let loaded = load_resume(file.path()).unwrap();

        assert_eq!(loaded, resume);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("resume.json");
        file.write_str("{\"name\": \"old\"}").unwrap();

        let mut resume = Resume::new();
        resume.name = "new".to_string();
        save_resume(&resume, file.path()).unwrap();

        assert_eq!(load_resume(file.path()).unwrap().name, "new");
        assert!(!temp.child("resume.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = load_resume(temp.child("missing.json").path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_serialization_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("broken.json");
        file.write_str("not json").unwrap();

        let err = load_resume(file.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_save_html() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("resume.html");

        save_html("<!DOCTYPE html><html></html>", file.path()).unwrap();
        let written = fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("<!DOCTYPE html>"));
    }
}
