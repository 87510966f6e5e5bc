use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for intgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("output directory '{}' does not exist", .path.display())]
    #[diagnostic(
        code(intgen::missing_directory),
        help("create the directory first or point --output at an existing one")
    )]
    MissingDirectory { path: PathBuf },

    #[error("'{}' is not a directory", .path.display())]
    #[diagnostic(
        code(intgen::not_a_directory),
        help("the output path must name a directory that receives one file per integer kind")
    )]
    NotADirectory { path: PathBuf },

    #[error("failed to write {kind} to '{}'", .path.display())]
    #[diagnostic(code(intgen::write))]
    Write {
        kind: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(intgen::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(intgen::config_parse))]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown integer kind '{name}'")]
    #[diagnostic(code(intgen::unknown_kind), help("valid kinds are: {valid}"))]
    UnknownKind { name: String, valid: String },

    #[error("no output directory configured")]
    #[diagnostic(
        code(intgen::no_output),
        help("pass --output, set `output` under [generate] in intgen.toml, or set HYLO_PATH")
    )]
    NoOutputDirectory,
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Whether this error was raised while validating an output directory,
    /// before any generation or writing took place.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::MissingDirectory { .. } | Error::NotADirectory { .. }
        )
    }
}
