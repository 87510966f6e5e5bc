use clap::Args;
use eyre::Result;
use intgen_hylo::select;

use super::{ConfigArgs, SelectionArgs, UnwrapOrExit};
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load().unwrap_or_exit();
        let selection = config.selection(self.selection.explicit());

        let report = ListReport {
            selection,
            kinds: select(selection),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
