//! Comparing a generation against the files already on disk.

use std::path::{Path, PathBuf};

use intgen_core::{GeneratedFile, Result, ensure_directory};

use crate::{
    catalog::IntKind,
    store::{Generation, file_name},
};

/// State of one kind's file relative to freshly generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    UpToDate,
    Stale,
    Missing,
    /// The file exists but could not be read.
    Unreadable,
}

impl Drift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drift::UpToDate => "up-to-date",
            Drift::Stale => "stale",
            Drift::Missing => "missing",
            Drift::Unreadable => "unreadable",
        }
    }
}

impl std::fmt::Display for Drift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEntry {
    pub kind: IntKind,
    pub path: PathBuf,
    pub drift: Drift,
}

/// Per-kind drift, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    pub entries: Vec<DriftEntry>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.drift == Drift::UpToDate)
    }

    /// Entries that would change on the next `generate`.
    pub fn outdated(&self) -> impl Iterator<Item = &DriftEntry> {
        self.entries.iter().filter(|e| e.drift != Drift::UpToDate)
    }

    pub fn count(&self, drift: Drift) -> usize {
        self.entries.iter().filter(|e| e.drift == drift).count()
    }
}

/// Compare every entry of `generation` with its file under `dir`.
///
/// Only directory validation fails the whole check; a file that cannot be
/// read is reported as [`Drift::Unreadable`] and the remaining kinds are
/// still compared. The store is left untouched.
pub fn check(dir: &Path, generation: &Generation) -> Result<DriftReport> {
    ensure_directory(dir)?;

    let mut report = DriftReport::default();
    for (kind, source) in generation.iter() {
        let file = GeneratedFile::new(dir.join(file_name(kind)), source);
        let drift = match file.read_existing() {
            Ok(None) => Drift::Missing,
            Ok(Some(existing)) if existing == file.content() => Drift::UpToDate,
            Ok(Some(_)) => Drift::Stale,
            Err(err) => {
                tracing::warn!(kind = kind.name(), error = %err, "unreadable");
                Drift::Unreadable
            }
        };
        tracing::debug!(kind = kind.name(), %drift, "checked");
        report.entries.push(DriftEntry {
            kind,
            path: file.path().to_path_buf(),
            drift,
        });
    }
    Ok(report)
}
