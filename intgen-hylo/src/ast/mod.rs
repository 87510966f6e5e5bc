//! Hylo syntax builders for declarations, functions and conformances.
//!
//! These provide a high-level API for constructing Hylo syntax,
//! which can then be rendered via CodeBuilder.

mod conformance;
mod fun;

pub use conformance::{Conformance, Member};
pub use fun::{Fun, Param};
