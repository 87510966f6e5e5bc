//! Text building blocks.
//!
//! - [`CodeBuilder`] accumulates indented lines
//! - [`CodeFragment`] and [`Renderable`] let syntax nodes describe their layout
//! - [`Indent`] sets the width of one nesting level

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
