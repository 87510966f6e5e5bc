//! Initializers declared inside the type body.

use super::member;
use crate::{
    ast::{Fun, Param},
    catalog::IntKind,
};

/// `init(bit_pattern:)` from the sign-flipped counterpart of the same width.
pub fn bit_pattern(kind: IntKind) -> Option<String> {
    let counterpart = kind.counterpart()?;
    Some(member(
        Fun::init()
            .doc("Creates an instance with the same memory representation as `other`.")
            .param(Param::labeled("bit_pattern", "other", counterpart.name()))
            .body_line("&self.value = other.value"),
    ))
}

/// Zero-value `init()` for kinds that have no bit-pattern initializer.
pub fn zero(kind: IntKind) -> Option<String> {
    if kind.counterpart().is_some() {
        return None;
    }
    Some(member(
        Fun::init()
            .doc("Creates an instance with value zero.")
            .body_line(format!(
                "&self.value = Builtin.zeroinitializer_{}()",
                kind.builtin()
            )),
    ))
}

/// `init(bit_pattern:)` from a memory address, for word-sized kinds.
pub fn address(kind: IntKind) -> Option<String> {
    if !kind.is_word_sized() {
        return None;
    }
    Some(member(
        Fun::init()
            .doc("Creates an instance with the same memory representation as `address`.")
            .param(Param::labeled("bit_pattern", "address", "MemoryAddress"))
            .body_line("&self.value = Builtin.ptrtoint_word(address.base)"),
    ))
}

/// `init(truncating:)` keeping the low-order bits of an `Int`, for the
/// signed kinds narrower than a word.
pub fn narrowing(kind: IntKind) -> Option<String> {
    if !kind.is_signed() || kind.is_word_sized() {
        return None;
    }
    Some(member(
        Fun::init()
            .doc("Creates an instance from the low-order bits of `source`.")
            .param(Param::labeled("truncating", "source", IntKind::Int.name()))
            .body_line(format!(
                "&self.value = Builtin.trunc_word_{}(source.value)",
                kind.builtin()
            )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_pattern_uses_counterpart() {
        let text = bit_pattern(IntKind::UInt8).unwrap();
        assert_eq!(
            text,
            concat!(
                "  /// Creates an instance with the same memory representation as `other`.\n",
                "  public init(bit_pattern other: Int8) {\n",
                "    &self.value = other.value\n",
                "  }\n",
            )
        );
        assert!(bit_pattern(IntKind::Int).unwrap().contains("other: UInt)"));
    }

    #[test]
    fn test_int32_gets_zero_instead_of_bit_pattern() {
        assert!(bit_pattern(IntKind::Int32).is_none());
        let text = zero(IntKind::Int32).unwrap();
        assert!(text.contains("&self.value = Builtin.zeroinitializer_i32()"));

        for kind in [IntKind::Int, IntKind::Int8, IntKind::UInt, IntKind::UInt8] {
            assert!(zero(kind).is_none(), "{kind}");
        }
    }

    #[test]
    fn test_address_only_for_word_sized() {
        let kinds: Vec<_> = IntKind::ALL
            .into_iter()
            .filter(|&k| address(k).is_some())
            .collect();
        assert_eq!(kinds, vec![IntKind::Int, IntKind::UInt]);
    }

    #[test]
    fn test_narrowing_for_int8_and_int32() {
        let kinds: Vec<_> = IntKind::ALL
            .into_iter()
            .filter(|&k| narrowing(k).is_some())
            .collect();
        assert_eq!(kinds, vec![IntKind::Int8, IntKind::Int32]);

        let text = narrowing(IntKind::Int32).unwrap();
        assert!(text.contains("public init(truncating source: Int) {"));
        assert!(text.contains("Builtin.trunc_word_i32(source.value)"));
    }
}
