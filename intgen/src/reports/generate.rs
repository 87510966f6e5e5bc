//! Generate command report data structures.

use std::path::PathBuf;

use intgen_core::Selection;

use super::output::{Output, Report};

/// Report data from generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Which kinds were built.
    pub selection: Selection,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files replaced on disk.
    pub written: Vec<PathBuf>,
    /// One diagnostic per kind that could not be written.
    pub failures: Vec<miette::Report>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether every selected file was written or previewed.
    pub fn is_success(&self) -> bool {
        match &self.result {
            GenerationResult::Written(written) => written.failures.is_empty(),
            GenerationResult::Preview(_) => true,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Selection", self.selection.as_str());
        out.key_value("Output", &written.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Written ({})", written.written.len()));
        for path in &written.written {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            out.added_item(&name);
        }

        if !written.failures.is_empty() {
            out.newline();
            out.section(&format!("Failed ({})", written.failures.len()));
            for failure in &written.failures {
                out.diagnostic(failure);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use intgen_core::Error;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written_with_failure() {
        let report = GenerateReport {
            selection: Selection::Signed,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec![PathBuf::from("out/Int.hylo"), PathBuf::from("out/Int32.hylo")],
                failures: vec![miette::Report::new(Error::Write {
                    kind: "Int8".to_string(),
                    path: PathBuf::from("out/Int8.hylo"),
                    source: std::io::Error::other("denied"),
                })],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        insta::assert_snapshot!(out.text, @r"
        Selection: signed
        Output: out

        Written (2):
          + Int.hylo
          + Int32.hylo

        Failed (1):
          ✗ failed to write Int8 to 'out/Int8.hylo' [intgen::write]
            caused by: denied
        ");
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            selection: Selection::All,
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "UInt8.hylo".to_string(),
                    content: "public type UInt8 {\n}\n".to_string(),
                }],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_success());
        insta::assert_snapshot!(out.text, @r"
        ── UInt8.hylo ──
        public type UInt8 {
        }
        ── Summary ──
        1 files would be generated
        ");
    }
}
