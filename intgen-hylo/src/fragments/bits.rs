//! `BinaryInteger` and `FixedWidthInteger`: shifts, masks, division,
//! bit counting, overflow-reporting arithmetic and bounds.

use super::{int_from_count, operator_pair, separated, widen_to_word};
use crate::{
    ast::{Conformance, Fun, Param},
    catalog::{IntKind, SignumStrategy},
};

const OVERFLOW_RESULT: &str = "{partial_value: Self, overflow: Bool}";

pub fn binary_and_fixed_width(kind: IntKind) -> Option<String> {
    let signum = kind.signum_strategy()?;
    Some(separated(
        0,
        [binary_integer(kind, signum), fixed_width_integer(kind)],
    ))
}

fn binary_integer(kind: IntKind, signum: SignumStrategy) -> Conformance {
    let name = kind.name();
    let r = kind.builtin();
    let s = kind.family().builtin_prefix();
    let shift_right = if kind.is_signed() { "ashr" } else { "lshr" };

    Conformance::new(name, "BinaryInteger")
        .fun(Fun::init().body_line(format!("&self.value = Builtin.zeroinitializer_{r}()")))
        .fun(truncating_or_extending(kind))
        .fun(
            Fun::method("instance_bit_width")
                .returns("Int")
                .body_line("Self.bit_width()"),
        )
        .fun(
            Fun::method("signum")
                .returns("Int")
                .body(signum_body(signum)),
        )
        .fun(
            Fun::method("trailing_zeros")
                .returns("Int")
                .body_line(int_from_count(kind, "cttz")),
        )
        .fun(
            Fun::method("quotient_and_remainder")
                .param(Param::labeled("dividing_by", "other", "Self"))
                .returns("{quotient: Self, remainder: Self}")
                .body_line("(quotient: self / other, remainder: self % other)"),
        )
        .fun(
            Fun::method("words")
                .returns("CollectionOfOne<UInt>")
                .body_line(format!("CollectionOfOne({})", word_of(kind))),
        )
        .funs(operator_pair(kind, "/", &format!("{s}div"), "other"))
        .funs(operator_pair(kind, "%", &format!("{s}rem"), "other"))
        .funs(operator_pair(kind, "&", "and", "other"))
        .funs(operator_pair(kind, "|", "or", "other"))
        .funs(operator_pair(kind, "^", "xor", "other"))
        .funs(operator_pair(kind, "<<", "shl", "n"))
        .funs(operator_pair(kind, ">>", shift_right, "n"))
        .fun(
            Fun::static_method("is_signed")
                .returns("Bool")
                .body_line(kind.is_signed().to_string()),
        )
}

/// Keeps the first word of `source`, truncated to 8 bits for 8-bit kinds.
fn truncating_or_extending(kind: IntKind) -> Fun {
    let first = "w[w.start_position()].value";
    let stored = if kind.is_8_bit() {
        format!("Builtin.trunc_word_{}({first})", kind.builtin())
    } else {
        first.to_string()
    };
    Fun::init()
        .generic("T: BinaryInteger")
        .param(Param::labeled("truncating_or_extending", "source", "T"))
        .body_line("let w = source.words()")
        .body_line(format!("&self.value = {stored}"))
}

fn signum_body(strategy: SignumStrategy) -> String {
    let widen = |condition: &str| format!("Int(value: Builtin.zext_i1_word(({condition}).value))");
    match strategy {
        SignumStrategy::ShiftSign => format!(
            "let positive = {}\nreturn positive | (self >> (Self.bit_width() - 1))",
            widen("self > 0")
        ),
        SignumStrategy::Difference => format!(
            "let positive = {}\nlet negative = {}\nreturn positive - negative",
            widen("self > 0"),
            widen("self < 0")
        ),
        SignumStrategy::CompareZeroValue => widen("self > UInt()"),
        SignumStrategy::CompareZeroLiteral => widen("self > 0"),
    }
}

/// The value as a single `UInt` word, sign- or zero-extended as needed.
fn word_of(kind: IntKind) -> String {
    match kind {
        IntKind::UInt => "self.copy()".to_string(),
        IntKind::Int => "UInt(bit_pattern: self)".to_string(),
        _ => format!("UInt(value: {})", widen_to_word(kind, "value")),
    }
}

fn fixed_width_integer(kind: IntKind) -> Conformance {
    let name = kind.name();
    let s = kind.family().builtin_prefix();
    let bit_width = if kind.is_8_bit() {
        "8"
    } else {
        "MemoryLayout<Self>.size() * 8"
    };

    Conformance::new(name, "FixedWidthInteger")
        .fun(
            Fun::method("matches")
                .param(Param::unlabeled("mask", "Self"))
                .returns("Bool")
                .body_line("(self & mask) == mask"),
        )
        .fun(reporting_overflow(kind, "adding", &format!("{s}add")))
        .fun(reporting_overflow(kind, "subtracting", &format!("{s}sub")))
        .fun(reporting_overflow(kind, "multiplied", &format!("{s}mul")))
        .fun(checked_division("divided_reporting_overflow", "by", "/"))
        .fun(checked_division(
            "remainder_reporting_overflow",
            "dividing_by",
            "%",
        ))
        .fun(
            Fun::method("nonzero_bit_count")
                .returns("Int")
                .body_line(int_from_count(kind, "ctpop")),
        )
        .fun(
            Fun::method("leading_zeros")
                .returns("Int")
                .body_line(int_from_count(kind, "ctlz")),
        )
        .fun(
            Fun::static_method("bit_width")
                .returns("Int")
                .body_line(bit_width),
        )
        .fun(
            Fun::static_method("max")
                .returns("Self")
                .body_line(format!("~{name}()")),
        )
        .fun(
            Fun::static_method("min")
                .returns("Self")
                .body_line(format!("{name}()")),
        )
}

/// `<verb>_reporting_overflow` backed by `Builtin.<op>_with_overflow`.
fn reporting_overflow(kind: IntKind, verb: &str, op: &str) -> Fun {
    Fun::method(format!("{verb}_reporting_overflow"))
        .param(Param::unlabeled("other", "Self"))
        .returns(OVERFLOW_RESULT)
        .body_line(format!(
            "let r = Builtin.{op}_with_overflow_{}(value, other.value)",
            kind.builtin()
        ))
        .body_line(format!(
            "return (partial_value: {}(value: r.0), overflow: Bool(value: r.1))",
            kind.name()
        ))
}

/// Division-like operation reporting overflow when `other` is zero.
fn checked_division(name: &str, label: &str, op: &str) -> Fun {
    Fun::method(name)
        .param(Param::labeled(label, "other", "Self"))
        .returns(OVERFLOW_RESULT)
        .body_line("if other == 0 {")
        .body_line("  return (partial_value: self.copy(), overflow: true)")
        .body_line("}")
        .body_line(format!(
            "return (partial_value: self {op} other, overflow: false)"
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_for_int32() {
        assert!(binary_and_fixed_width(IntKind::Int32).is_none());
    }

    #[test]
    fn test_truncating_or_extending() {
        let word = truncating_or_extending(IntKind::Int).build();
        assert!(word.contains("  &self.value = w[w.start_position()].value\n"));

        let byte = truncating_or_extending(IntKind::UInt8).build();
        assert!(byte.contains("  &self.value = Builtin.trunc_word_i8(w[w.start_position()].value)\n"));
    }

    #[test]
    fn test_signum_per_kind() {
        insta::assert_snapshot!(signum_body(SignumStrategy::ShiftSign), @r"
        let positive = Int(value: Builtin.zext_i1_word((self > 0).value))
        return positive | (self >> (Self.bit_width() - 1))
        ");
        insta::assert_snapshot!(signum_body(SignumStrategy::Difference), @r"
        let positive = Int(value: Builtin.zext_i1_word((self > 0).value))
        let negative = Int(value: Builtin.zext_i1_word((self < 0).value))
        return positive - negative
        ");
        assert_eq!(
            signum_body(SignumStrategy::CompareZeroValue),
            "Int(value: Builtin.zext_i1_word((self > UInt()).value))"
        );
        assert_eq!(
            signum_body(SignumStrategy::CompareZeroLiteral),
            "Int(value: Builtin.zext_i1_word((self > 0).value))"
        );
    }

    #[test]
    fn test_sign_aware_builtins() {
        let signed = binary_and_fixed_width(IntKind::Int8).unwrap();
        for builtin in ["sdiv_i8", "srem_i8", "ashr_i8", "sadd_with_overflow_i8"] {
            assert!(signed.contains(builtin), "{builtin}");
        }
        let unsigned = binary_and_fixed_width(IntKind::UInt).unwrap();
        for builtin in ["udiv_word", "urem_word", "lshr_word", "umul_with_overflow_word"] {
            assert!(unsigned.contains(builtin), "{builtin}");
        }
    }

    #[test]
    fn test_words() {
        assert_eq!(word_of(IntKind::Int), "UInt(bit_pattern: self)");
        assert_eq!(word_of(IntKind::UInt), "self.copy()");
        assert_eq!(
            word_of(IntKind::Int8),
            "UInt(value: Builtin.sext_i8_word(value))"
        );
        assert_eq!(
            word_of(IntKind::UInt8),
            "UInt(value: Builtin.zext_i8_word(value))"
        );
    }

    #[test]
    fn test_bounds() {
        let text = binary_and_fixed_width(IntKind::UInt8).unwrap();
        assert!(text.contains("  public static fun max() -> Self {\n    ~UInt8()\n  }\n"));
        assert!(text.contains("  public static fun min() -> Self {\n    UInt8()\n  }\n"));
        assert!(text.contains("  public static fun bit_width() -> Int {\n    8\n  }\n"));
    }

    #[test]
    fn test_counts_widen_bytes() {
        let text = binary_and_fixed_width(IntKind::Int8).unwrap();
        assert!(text.contains("Int(value: Builtin.zext_i8_word(Builtin.ctpop_i8(value)))"));
        let text = binary_and_fixed_width(IntKind::Int).unwrap();
        assert!(text.contains("Int(value: Builtin.ctlz_word(value))"));
    }

    #[test]
    fn test_checked_division() {
        let f = checked_division("divided_reporting_overflow", "by", "/").build();
        insta::assert_snapshot!(f, @r"
        public fun divided_reporting_overflow(by other: Self) -> {partial_value: Self, overflow: Bool} {
          if other == 0 {
            return (partial_value: self.copy(), overflow: true)
          }
          return (partial_value: self / other, overflow: false)
        }
        ");
    }
}
