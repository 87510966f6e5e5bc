//! Unary helpers and operators declared inside the type body.

use super::member;
use crate::{
    ast::{Fun, Param},
    catalog::IntKind,
};

pub fn abs(kind: IntKind) -> Option<String> {
    if !kind.is_signed() {
        return None;
    }
    Some(member(
        Fun::method("abs")
            .doc("Returns the absolute value of `self`.")
            .returns(kind.name())
            .body_line("if self < 0 { -self } else { +self }"),
    ))
}

/// `round(up_to_nearest_multiple_of:)`, offered by `Int` only.
pub fn round_up(kind: IntKind) -> Option<String> {
    if kind != IntKind::Int {
        return None;
    }
    Some(member(
        Fun::method("round")
            .doc("Returns `self` rounded up to the nearest multiple of `n`.")
            .doc("")
            .doc("- Requires: `self` is not negative and `n` is greater than zero.")
            .param(Param::labeled("up_to_nearest_multiple_of", "n", "Int"))
            .returns("Int")
            .body_line("(self + n - 1) / n * n"),
    ))
}

pub fn unary_plus(kind: IntKind) -> Option<String> {
    if !kind.is_signed() {
        return None;
    }
    Some(member(
        Fun::method("prefix+")
            .doc("Returns `self`.")
            .returns("Self")
            .body_line("self.copy()"),
    ))
}

/// `prefix~`, xor-ing with the all-ones pattern obtained by sign-extending
/// a `true` bit.
pub fn complement(kind: IntKind) -> Option<String> {
    if !kind.is_full_integer() {
        return None;
    }
    let r = kind.builtin();
    Some(member(
        Fun::method("prefix~")
            .doc("Returns the bitwise inverse of `self`.")
            .returns("Self")
            .body_line(format!(
                "{}(value: Builtin.xor_{r}(value, Builtin.sext_i1_{r}(true.value)))",
                kind.name()
            )),
    ))
}

pub fn wrapping_multiply(kind: IntKind) -> Option<String> {
    if kind != IntKind::Int {
        return None;
    }
    Some(member(
        Fun::method("infix&*")
            .doc("Returns the product of `self` and `other`, wrapping around on overflow.")
            .param(Param::unlabeled("other", "Self"))
            .returns("Self")
            .body_line("Int(value: Builtin.mul_word(value, other.value))"),
    ))
}
