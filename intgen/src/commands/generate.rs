use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArgs, SelectionArgs, UnwrapOrExit, output_dir};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (defaults to the config, then $HYLO_PATH)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load().unwrap_or_exit();
        let selection = config.selection(self.selection.explicit());

        let dir = match output_dir(&config, self.output.as_deref()) {
            Ok(dir) => dir,
            // A preview has nothing to write; label it relative to here.
            Err(_) if self.dry_run => PathBuf::new(),
            Err(e) => Err::<PathBuf, _>(e).unwrap_or_exit(),
        };

        tracing::debug!(%selection, dir = %dir.display(), "resolved");

        let report = ops::generate(GenerateOptions {
            output_dir: &dir,
            selection,
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
