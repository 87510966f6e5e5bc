//! The per-build mapping from kind to generated source.

use std::path::Path;

use indexmap::IndexMap;
use intgen_core::{GeneratedFile, Selection};

use crate::{
    catalog::{self, IntKind},
    composer::compose,
};

/// Extension of generated Hylo source files.
pub const EXTENSION: &str = "hylo";

/// One generated source file, detached from its store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: IntKind,
    pub source: String,
}

impl Artifact {
    /// `<Kind>.hylo`
    pub fn file_name(&self) -> String {
        file_name(self.kind)
    }

    /// The file this artifact is persisted to under `dir`.
    pub fn into_file(self, dir: &Path) -> GeneratedFile {
        GeneratedFile::new(dir.join(self.file_name()), self.source)
    }
}

/// Name of the file holding `kind`: `<Kind>.hylo`.
pub fn file_name(kind: IntKind) -> String {
    format!("{}.{}", kind.name(), EXTENSION)
}

/// Generated sources of one build, keyed by kind.
///
/// A store is filled once, from a single selection, and holds exactly the
/// kinds that selection admits. Persisting drains it, so a store that has
/// been written out reads as empty rather than returning stale text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Generation {
    entries: IndexMap<IntKind, String>,
}

impl Generation {
    /// Compose every kind admitted by `selection` into a fresh store.
    pub fn build(selection: Selection) -> Self {
        let entries: IndexMap<_, _> = catalog::select(selection)
            .into_iter()
            .map(|kind| (kind, compose(kind)))
            .collect();
        tracing::debug!(%selection, kinds = entries.len(), "generated");
        Self { entries }
    }

    pub fn get(&self, kind: IntKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    /// Look up generated text by Hylo type name.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        IntKind::from_name(name).and_then(|kind| self.get(kind))
    }

    pub fn contains(&self, kind: IntKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kinds present, in the order they were generated.
    pub fn kinds(&self) -> impl Iterator<Item = IntKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntKind, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Move every entry out, leaving the store empty.
    pub fn drain(&mut self) -> Vec<Artifact> {
        self.entries
            .drain(..)
            .map(|(kind, source)| Artifact { kind, source })
            .collect()
    }
}

/// Build the store for `selection`.
pub fn generate(selection: Selection) -> Generation {
    Generation::build(selection)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn names(generation: &Generation) -> HashSet<&'static str> {
        generation.kinds().map(|k| k.name()).collect()
    }

    #[test]
    fn test_selection_key_sets_partition() {
        let all = names(&generate(Selection::All));
        let signed = names(&generate(Selection::Signed));
        let unsigned = names(&generate(Selection::Unsigned));

        assert_eq!(signed, HashSet::from(["Int", "Int8", "Int32"]));
        assert_eq!(unsigned, HashSet::from(["UInt", "UInt8"]));
        assert!(signed.is_disjoint(&unsigned));
        assert_eq!(&signed | &unsigned, all);
    }

    #[test]
    fn test_key_set_matches_selection() {
        for selection in Selection::ALL {
            let generation = generate(selection);
            let kinds: Vec<_> = generation.kinds().collect();
            assert_eq!(kinds, catalog::select(selection), "{selection}");
        }
    }

    #[test]
    fn test_entries_match_compose() {
        let generation = generate(Selection::All);
        for kind in IntKind::ALL {
            assert_eq!(generation.get(kind), Some(compose(kind).as_str()));
            assert_eq!(generation.get_by_name(kind.name()), generation.get(kind));
        }
        assert_eq!(generation.get_by_name("Int64"), None);
    }

    #[test]
    fn test_builds_are_independent() {
        let signed = generate(Selection::Signed);
        let unsigned = generate(Selection::Unsigned);

        assert!(!signed.contains(IntKind::UInt));
        assert!(!unsigned.contains(IntKind::Int));
    }

    #[test]
    fn test_drain_empties_store() {
        let mut generation = generate(Selection::Unsigned);
        let artifacts = generation.drain();

        assert_eq!(artifacts.len(), 2);
        assert!(generation.is_empty());
        assert_eq!(generation.get(IntKind::UInt), None);
        assert!(generation.drain().is_empty());
    }

    #[test]
    fn test_artifact_file_name() {
        let artifact = Artifact {
            kind: IntKind::UInt8,
            source: String::new(),
        };
        assert_eq!(artifact.file_name(), "UInt8.hylo");

        let file = artifact.into_file(Path::new("out"));
        assert_eq!(file.path(), Path::new("out/UInt8.hylo"));
    }
}
