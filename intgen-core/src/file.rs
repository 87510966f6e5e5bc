use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Check that `path` exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Box::new(Error::MissingDirectory {
            path: path.to_path_buf(),
        }));
    }
    if !path.is_dir() {
        return Err(Box::new(Error::NotADirectory {
            path: path.to_path_buf(),
        }));
    }
    Ok(())
}

/// Write `content` to a sibling temporary file and rename it over `path`,
/// so readers never observe a partially written file.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Atomically replace the file on disk with this content.
    pub fn write(&self) -> std::io::Result<()> {
        write_atomic(&self.path, &self.content)
    }

    /// Read whatever is currently on disk at this path.
    ///
    /// Returns `None` when no file exists yet.
    pub fn read_existing(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Box::new(Error::Read {
                path: self.path.clone(),
                source: e,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Int.hylo");

        GeneratedFile::new(&path, "public type Int {\n}\n")
            .write()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "public type Int {\n}\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Int.hylo");

        fs::write(&path, "stale").unwrap();
        GeneratedFile::new(&path, "fresh").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let temp = TempDir::new().unwrap();
        GeneratedFile::new(temp.path().join("UInt.hylo"), "x")
            .write()
            .unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["UInt.hylo"]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let file = GeneratedFile::new(temp.path().join("gone").join("Int.hylo"), "x");

        assert!(file.write().is_err());
        assert!(!file.exists());
    }

    #[test]
    fn test_read_existing() {
        let temp = TempDir::new().unwrap();
        let file = GeneratedFile::new(temp.path().join("Int8.hylo"), "content");

        assert_eq!(file.read_existing().unwrap(), None);
        file.write().unwrap();
        assert_eq!(file.read_existing().unwrap().as_deref(), Some("content"));
    }

    #[test]
    fn test_ensure_directory() {
        let temp = TempDir::new().unwrap();
        let regular = temp.path().join("regular.txt");
        fs::write(&regular, "").unwrap();

        assert!(ensure_directory(temp.path()).is_ok());

        let err = ensure_directory(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(*err, Error::MissingDirectory { .. }));

        let err = ensure_directory(&regular).unwrap_err();
        assert!(matches!(*err, Error::NotADirectory { .. }));
    }
}
