//! Generate operation - build the store and write it out.

use std::path::Path;

use intgen_core::{Result, Selection};
use intgen_hylo::{Generation, Writer, file_name};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving `<Kind>.hylo` files.
    pub output_dir: &'a Path,
    /// Which kinds to build.
    pub selection: Selection,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The output directory is validated before anything is composed; a bad
/// directory is returned as an error. Per-file write failures are collected
/// in the report instead.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        let generation = Generation::build(opts.selection);
        let files = generation
            .iter()
            .map(|(kind, source)| PreviewFile {
                path: opts.output_dir.join(file_name(kind)).display().to_string(),
                content: source.to_string(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let writer = Writer::new(opts.output_dir)?;
        let mut generation = Generation::build(opts.selection);
        let persisted = writer.persist(&mut generation);

        GenerationResult::Written(WrittenResult {
            output_dir: writer.dir().to_path_buf(),
            written: persisted.written.into_iter().map(|(_, path)| path).collect(),
            failures: persisted
                .failures
                .into_iter()
                .map(|e| miette::Report::new(*e))
                .collect(),
        })
    };

    Ok(GenerateReport {
        selection: opts.selection,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{
        fs, io,
        sync::{Arc, Mutex},
    };

    use intgen_core::Error;
    use tempfile::TempDir;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Everything `f` logs at the default `info` level.
    fn info_log(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_writes_selected_kinds() {
        let temp = TempDir::new().unwrap();
        let report = generate(GenerateOptions {
            output_dir: temp.path(),
            selection: Selection::Unsigned,
            dry_run: false,
        })
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written.len(), 2);
        assert!(written.failures.is_empty());
        assert!(temp.path().join("UInt.hylo").is_file());
        assert!(!temp.path().join("Int.hylo").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = generate(GenerateOptions {
            output_dir: temp.path(),
            selection: Selection::All,
            dry_run: true,
        })
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(preview.files.len(), 5);
        assert!(preview.files[0].path.ends_with("Int.hylo"));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_only_persisting_logs_at_info() {
        let temp = TempDir::new().unwrap();
        let options = |dry_run| GenerateOptions {
            output_dir: temp.path(),
            selection: Selection::All,
            dry_run,
        };

        let preview = info_log(|| {
            generate(options(true)).unwrap();
        });
        assert_eq!(preview, "");

        let written = info_log(|| {
            generate(options(false)).unwrap();
        });
        assert!(written.contains("persisted"), "{written}");
        assert!(!written.contains("generated"), "{written}");
    }

    #[test]
    fn test_missing_directory_fails_up_front() {
        let temp = TempDir::new().unwrap();
        let err = generate(GenerateOptions {
            output_dir: &temp.path().join("missing"),
            selection: Selection::All,
            dry_run: false,
        })
        .unwrap_err();
        assert!(matches!(*err, Error::MissingDirectory { .. }));
    }

    #[test]
    fn test_failures_keep_diagnostics() {
        let temp = TempDir::new().unwrap();
        let blocked = temp.path().join("Int8.hylo");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("x"), "").unwrap();

        let report = generate(GenerateOptions {
            output_dir: temp.path(),
            selection: Selection::Signed,
            dry_run: false,
        })
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written.len(), 2);
        assert_eq!(written.failures.len(), 1);
        let failure = &written.failures[0];
        assert!(failure.to_string().starts_with("failed to write Int8 to"));
        assert_eq!(
            failure.code().map(|c| c.to_string()).as_deref(),
            Some("intgen::write")
        );
        assert!(failure.chain().count() >= 2);
    }
}
