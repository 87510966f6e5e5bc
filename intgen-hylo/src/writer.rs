//! Persisting a generation as one file per kind.

use std::path::{Path, PathBuf};

use intgen_core::{Error, Result, ensure_directory};

use crate::{
    catalog::IntKind,
    store::{Generation, file_name},
};

/// Writes generated sources into a directory validated once, up front.
#[derive(Debug, Clone)]
pub struct Writer {
    dir: PathBuf,
}

/// Outcome of [`Writer::persist`].
///
/// Files are independent: a failure on one kind neither stops the others
/// nor removes files already written.
#[derive(Debug, Default)]
pub struct PersistReport {
    pub written: Vec<(IntKind, PathBuf)>,
    pub failures: Vec<Box<Error>>,
}

impl PersistReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The written paths, or the first failure.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.written.into_iter().map(|(_, path)| path).collect()),
        }
    }
}

impl Writer {
    /// Fails with `MissingDirectory` or `NotADirectory` before anything is
    /// generated or written.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_directory(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination of `kind` inside the directory.
    pub fn path_for(&self, kind: IntKind) -> PathBuf {
        self.dir.join(file_name(kind))
    }

    /// Drain `generation` and write each entry atomically.
    pub fn persist(&self, generation: &mut Generation) -> PersistReport {
        let mut report = PersistReport::default();

        for artifact in generation.drain() {
            let kind = artifact.kind;
            let file = artifact.into_file(&self.dir);
            match file.write() {
                Ok(()) => {
                    tracing::debug!(kind = kind.name(), path = %file.path().display(), "wrote");
                    report.written.push((kind, file.path().to_path_buf()));
                }
                Err(source) => {
                    tracing::warn!(kind = kind.name(), error = %source, "write failed");
                    report.failures.push(Box::new(Error::Write {
                        kind: kind.name().to_string(),
                        path: file.path().to_path_buf(),
                        source,
                    }));
                }
            }
        }

        tracing::info!(
            dir = %self.dir.display(),
            written = report.written.len(),
            failed = report.failures.len(),
            "persisted"
        );
        report
    }
}
