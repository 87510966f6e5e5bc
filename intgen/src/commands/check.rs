use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArgs, SelectionArgs, UnwrapOrExit, output_dir};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory to compare (defaults to the config, then $HYLO_PATH)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load().unwrap_or_exit();
        let selection = config.selection(self.selection.explicit());
        let dir = output_dir(&config, self.output.as_deref()).unwrap_or_exit();

        tracing::debug!(%selection, dir = %dir.display(), "resolved");

        let report = ops::check(&dir, selection).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        if !report.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }
}
