//! Ordering, additive, multiplicative and signed-numeric conformances.

use super::{comparison, operator_pair, separated};
use crate::{
    ast::{Conformance, Fun},
    catalog::IntKind,
};

/// `Comparable`, `AdditiveArithmetic` and `Numeric`.
pub fn ordering_and_arithmetic(kind: IntKind) -> Option<String> {
    if !kind.is_full_integer() {
        return None;
    }
    let name = kind.name();
    let s = kind.family().builtin_prefix();

    let comparable = Conformance::new(name, "Comparable").funs([
        comparison(kind, "<", &format!("{s}lt")),
        comparison(kind, "<=", &format!("{s}le")),
        comparison(kind, ">", &format!("{s}gt")),
        comparison(kind, ">=", &format!("{s}ge")),
    ]);

    let additive = Conformance::new(name, "AdditiveArithmetic")
        .funs(operator_pair(kind, "+", "add", "other"))
        .funs(operator_pair(kind, "-", "sub", "other"))
        .fun(
            Fun::static_method("zero")
                .returns("Self")
                .body_line(format!("{name}()")),
        );

    Some(separated(0, [comparable, additive, numeric(kind)]))
}

/// Signed kinds measure their magnitude in the unsigned counterpart.
fn numeric(kind: IntKind) -> Conformance {
    let name = kind.name();
    let (magnitude, body) = match kind.counterpart() {
        Some(unsigned) if kind.is_signed() => (
            unsigned.name(),
            format!("{}(bit_pattern: self.abs())", unsigned.name()),
        ),
        _ => (name, "self.copy()".to_string()),
    };

    Conformance::new(name, "Numeric")
        .typealias("Magnitude", magnitude)
        .fun(Fun::method("magnitude").returns(magnitude).body_line(body))
        .funs(operator_pair(kind, "*", "mul", "other"))
}

/// `SignedNumeric`, for signed kinds only.
pub fn signed_numeric(kind: IntKind) -> Option<String> {
    if !kind.is_signed() {
        return None;
    }
    let conformance = Conformance::new(kind.name(), "SignedNumeric")
        .fun(
            Fun::method("prefix-")
                .returns("Self")
                .body_line(format!("{}() - self", kind.name())),
        )
        .fun(Fun::method("negate").inout().body_line("&self = -self"));
    Some(conformance.build())
}
