//! Check operation - drift between generated text and files on disk.

use std::path::Path;

use intgen_core::{Result, Selection};
use intgen_hylo::Generation;

use crate::reports::{CheckEntry, CheckReport};

/// Execute the check operation. Never writes.
pub fn check(dir: &Path, selection: Selection) -> Result<CheckReport> {
    let generation = Generation::build(selection);
    let drift = intgen_hylo::check(dir, &generation)?;

    Ok(CheckReport {
        dir: dir.to_path_buf(),
        entries: drift
            .entries
            .into_iter()
            .map(|e| CheckEntry {
                kind: e.kind.name().to_string(),
                drift: e.drift,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use intgen_hylo::{Drift, IntKind, compose};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reports_each_selected_kind() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Int.hylo"), compose(IntKind::Int)).unwrap();

        let report = check(temp.path(), Selection::Signed).unwrap();

        let states: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.kind.as_str(), e.drift))
            .collect();
        assert_eq!(
            states,
            vec![
                ("Int", Drift::UpToDate),
                ("Int8", Drift::Missing),
                ("Int32", Drift::Missing),
            ]
        );
        assert!(!report.is_clean());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }
}
