mod check;
mod completions;
mod generate;
mod list;
mod show;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use intgen_core::{CONFIG_FILE, Config, Selection};
use list::ListCommand;
use show::ShowCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for intgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "intgen")]
#[command(version)]
#[command(about = "Generate the integer types of the Hylo standard library")]
pub(crate) struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the selected integer types into a directory
    Generate(GenerateCommand),

    /// Print the generated source of one integer type
    Show(ShowCommand),

    /// List the integer types that would be generated
    List(ListCommand),

    /// Compare generated sources with the files already on disk
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// `--signed` / `--unsigned`, shared by every command that selects kinds.
#[derive(Args, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Only the signed types (Int, Int8, Int32)
    #[arg(long, conflicts_with = "unsigned")]
    pub signed: bool,

    /// Only the unsigned types (UInt, UInt8)
    #[arg(long)]
    pub unsigned: bool,
}

impl SelectionArgs {
    /// The selection requested on the command line, if any.
    pub fn explicit(&self) -> Option<Selection> {
        match (self.signed, self.unsigned) {
            (true, _) => Some(Selection::Signed),
            (_, true) => Some(Selection::Unsigned),
            _ => None,
        }
    }
}

/// `--config`, shared by commands that read `intgen.toml`.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to intgen.toml (defaults to ./intgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// An explicit path must exist; the default one is optional.
    pub fn load(&self) -> intgen_core::Result<Config> {
        match &self.config {
            Some(path) => Config::open(path),
            None => Config::open_or_default(Path::new(CONFIG_FILE)),
        }
    }
}

/// Resolve the output directory from the flag, the config and `HYLO_PATH`.
pub(crate) fn output_dir(config: &Config, explicit: Option<&Path>) -> intgen_core::Result<PathBuf> {
    config.output_dir(explicit, std::env::var_os("HYLO_PATH"))
}
