//! Generator for the integer types of the Hylo standard library.
//!
//! The [`catalog`] describes each supported kind and the [`fragments`] turn
//! a kind into blocks of Hylo source. [`compose`] assembles one kind's file,
//! a [`Generation`] holds one build's output and the [`Writer`] persists it.

mod composer;
mod drift;
mod store;
mod writer;

pub mod ast;
pub mod catalog;
pub mod fragments;

pub use catalog::{Family, IntKind, Representation, admits, select};
pub use composer::compose;
pub use drift::{Drift, DriftEntry, DriftReport, check};
pub use intgen_core::Selection;
pub use store::{Artifact, EXTENSION, Generation, file_name, generate};
pub use writer::{PersistReport, Writer};
