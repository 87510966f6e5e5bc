//! Command logic, independent of argument parsing and terminal output.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;
