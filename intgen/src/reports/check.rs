//! Check command report data structures.

use std::path::PathBuf;

use intgen_hylo::Drift;

use super::output::{Output, Report};

/// Report data from a drift check.
#[derive(Debug)]
pub struct CheckReport {
    /// Directory that was compared.
    pub dir: PathBuf,
    /// One entry per selected kind, in catalog order.
    pub entries: Vec<CheckEntry>,
}

#[derive(Debug)]
pub struct CheckEntry {
    pub kind: String,
    pub drift: Drift,
}

impl CheckReport {
    /// Whether every file matches what would be generated.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.drift == Drift::UpToDate)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&self.dir.display().to_string());
        for entry in &self.entries {
            let line = format!("{}.hylo ({})", entry.kind, entry.drift);
            match entry.drift {
                Drift::UpToDate => out.list_item(&line),
                Drift::Stale | Drift::Missing | Drift::Unreadable => out.failed_item(&line),
            }
        }
        out.newline();

        let outdated = self
            .entries
            .iter()
            .filter(|e| e.drift != Drift::UpToDate)
            .count();
        if outdated == 0 {
            out.preformatted("✓ all files are up to date");
        } else {
            out.warning(&format!(
                "{} file{} out of date, run `intgen generate`",
                outdated,
                if outdated == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_outdated() {
        let report = CheckReport {
            dir: PathBuf::from("Integers"),
            entries: vec![
                CheckEntry {
                    kind: "UInt".to_string(),
                    drift: Drift::UpToDate,
                },
                CheckEntry {
                    kind: "UInt8".to_string(),
                    drift: Drift::Stale,
                },
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_clean());
        insta::assert_snapshot!(out.text, @r"
        Integers:
          - UInt.hylo (up-to-date)
          ✗ UInt8.hylo (stale)

        warning: 1 file out of date, run `intgen generate`
        ");
    }

    #[test]
    fn test_render_unreadable() {
        let report = CheckReport {
            dir: PathBuf::from("Integers"),
            entries: vec![
                CheckEntry {
                    kind: "Int".to_string(),
                    drift: Drift::Unreadable,
                },
                CheckEntry {
                    kind: "Int8".to_string(),
                    drift: Drift::Missing,
                },
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_clean());
        insta::assert_snapshot!(out.text, @r"
        Integers:
          ✗ Int.hylo (unreadable)
          ✗ Int8.hylo (missing)

        warning: 2 files out of date, run `intgen generate`
        ");
    }

    #[test]
    fn test_render_clean() {
        let report = CheckReport {
            dir: PathBuf::from("Integers"),
            entries: vec![CheckEntry {
                kind: "Int".to_string(),
                drift: Drift::UpToDate,
            }],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_clean());
        assert!(out.text.ends_with("✓ all files are up to date\n"));
    }
}
