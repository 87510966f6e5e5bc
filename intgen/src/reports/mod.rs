//! What each command prints.
//!
//! Operations return plain report values; rendering them through an
//! [`output::Output`] is the only place that decides on formatting.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckEntry, CheckReport};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
