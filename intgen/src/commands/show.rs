use clap::Args;
use eyre::Result;
use intgen_hylo::{IntKind, compose};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ShowCommand {
    /// Integer type to print (Int, Int8, Int32, UInt or UInt8)
    pub kind: String,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let kind = IntKind::parse(&self.kind).unwrap_or_exit();
        print!("{}", compose(kind));
        Ok(())
    }
}
