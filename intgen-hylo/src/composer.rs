//! Assembles the fragments of one kind into a complete source file.

use crate::{catalog::IntKind, fragments::FRAGMENTS};

/// Generate the complete Hylo source of `kind`.
///
/// Applicable fragments are concatenated in [`FRAGMENTS`] order, separated
/// by exactly one blank line. Fragments that do not apply to `kind`
/// contribute nothing. The result depends on `kind` alone.
pub fn compose(kind: IntKind) -> String {
    let text = FRAGMENTS
        .iter()
        .filter_map(|fragment| (fragment.build)(kind))
        .collect::<Vec<_>>()
        .join("\n");
    tracing::debug!(kind = kind.name(), bytes = text.len(), "composed");
    text
}
