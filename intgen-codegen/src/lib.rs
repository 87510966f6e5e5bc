//! Text building blocks for the Hylo integer generator.
//!
//! This crate is language-agnostic: it knows about lines, blank lines,
//! indentation and doc comments, but nothing about integers or Hylo.
//! Syntax nodes in `intgen-hylo` implement [`Renderable`] and are written
//! out through a [`CodeBuilder`].

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
