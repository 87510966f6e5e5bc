//! `intgen.toml` configuration.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, Selection};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "intgen.toml";

/// Location of the integer sources inside a Hylo checkout.
pub const HYLO_INTEGERS_DIR: &str = "StandardLibrary/Sources/Core/Numbers/Integers";

/// Root of `intgen.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Which kinds to build when no selection flag is given.
    pub selection: Option<Selection>,
    /// Directory receiving the generated files.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Read {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Open the configuration at `path`, treating a missing file as empty.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    /// Resolve the selection: an explicit choice wins over the file.
    pub fn selection(&self, explicit: Option<Selection>) -> Selection {
        explicit
            .or(self.generate.selection)
            .unwrap_or_default()
    }

    /// Resolve the output directory.
    ///
    /// Precedence is the explicit path, then `[generate].output`, then the
    /// integer sources under `hylo_path` (the value of `HYLO_PATH`).
    pub fn output_dir(
        &self,
        explicit: Option<&Path>,
        hylo_path: Option<OsString>,
    ) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.generate.output {
            return Ok(dir.clone());
        }
        match hylo_path {
            Some(root) if !root.is_empty() => Ok(PathBuf::from(root).join(HYLO_INTEGERS_DIR)),
            _ => Err(Box::new(Error::NoOutputDirectory)),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}
