//! Conformances every kind carries: copy, equality and hashing.

use super::{comparison, separated};
use crate::{
    ast::{Conformance, Fun, Param},
    catalog::{HashStrategy, IntKind},
};

/// Trivial conformances, `Copyable` and `Equatable`.
pub fn copy_equality(kind: IntKind) -> Option<String> {
    let name = kind.name();
    let trivial = ["ExpressibleByIntegerLiteral", "Deinitializable", "Movable"]
        .into_iter()
        .map(|concept| Conformance::new(name, concept));

    let copyable = Conformance::new(name, "Copyable").fun(
        Fun::method("copy")
            .returns("Self")
            .body_line(format!("{name}(value: value)")),
    );

    let equatable = Conformance::new(name, "Equatable").funs([
        comparison(kind, "==", "eq"),
        comparison(kind, "!=", "ne"),
    ]);

    Some(separated(0, trivial.chain([copyable, equatable])))
}

pub fn regular(kind: IntKind) -> Option<String> {
    if !kind.is_full_integer() {
        return None;
    }
    Some(Conformance::new(kind.name(), "Regular").build())
}

pub fn hashable(kind: IntKind) -> Option<String> {
    let hash = Fun::method("hash")
        .param(Param::labeled("into", "hasher", "inout Hasher"))
        .body(hash_body(kind.hash_strategy()));
    Some(Conformance::new(kind.name(), "Hashable").fun(hash).build())
}

fn hash_body(strategy: HashStrategy) -> String {
    match strategy {
        HashStrategy::RawBytes => {
            "&hasher.unsafe_combine(bytes: pointer_to_bytes[of: self])".to_string()
        }
        HashStrategy::ReinterpretedByte => {
            "&hasher.combine(byte: Int8(bit_pattern: self))".to_string()
        }
        HashStrategy::DirectByte => "&hasher.combine(byte: self)".to_string(),
        HashStrategy::ByteDecomposition { bytes } => {
            let mut lines = vec!["let p = Pointer<Int8>(type_punning: pointer[to: self])".to_string()];
            for offset in 0..bytes {
                let byte = if offset == 0 {
                    "p.unsafe[]".to_string()
                } else {
                    format!("p.advance(by: {offset}).unsafe[]")
                };
                lines.push(format!("&hasher.combine(byte: {byte})"));
            }
            lines.join("\n")
        }
    }
}
