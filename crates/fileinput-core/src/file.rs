//! In-memory file references.
//!
//! The controller never reads file contents. A [`SelectedFile`] carries the
//! three facts validation needs: a name, a declared MIME type and a length.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback type for files whose extension is unknown.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A file reference handed to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name without directories.
    pub name: String,

    /// Declared MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Length in bytes.
    pub size: u64,
}

impl SelectedFile {
    /// Create a file reference from known values.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Build a file reference from a path on disk.
    ///
    /// The type is guessed from the extension.
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(FileError::NotAFile(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        tracing::debug!(path = %path.display(), mime = %mime_type, size = metadata.len(), "Read file metadata");

        Ok(Self {
            name,
            mime_type,
            size: metadata.len(),
        })
    }

    /// Size formatted with 1024-based units.
    #[allow(clippy::cast_precision_loss)]
    pub fn human_size(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size {
            s if s < KB => format!("{s} B"),
            s if s < MB => format!("{:.1} KB", s as f64 / KB as f64),
            s => format!("{:.1} MB", s as f64 / MB as f64),
        }
    }
}

/// Errors that can occur when reading a file reference from disk.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// I/O error reading metadata.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The path exists but is not a regular file.
    #[error("Not a file: {0}")]
    NotAFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_guesses_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [0u8; 2048]).unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "photo.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size, 2048);
    }

    #[test]
    fn test_from_path_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.zzzunknown");
        std::fs::write(&path, b"abc").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.mime_type, OCTET_STREAM);
    }

    #[test]
    fn test_from_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, FileError::NotAFile(_)));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(SelectedFile::new("a", "text/plain", 512).human_size(), "512 B");
        assert_eq!(SelectedFile::new("a", "text/plain", 1536).human_size(), "1.5 KB");
        assert_eq!(
            SelectedFile::new("a", "text/plain", 5 * 1024 * 1024).human_size(),
            "5.0 MB"
        );
    }
}
