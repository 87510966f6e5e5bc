//! The fragment library.
//!
//! Each fragment is a pure function of an [`IntKind`] returning the text of
//! one block, or `None` when the block does not apply to that kind. Members
//! of the type declaration are rendered one indentation level deep; the
//! conformances that follow it are rendered at top level.
//!
//! [`FRAGMENTS`] lists every fragment in output order; the composer walks it.

pub mod arithmetic;
pub mod bits;
pub mod capabilities;
pub mod declaration;
pub mod foreign;
pub mod initializers;
pub mod operators;

use intgen_codegen::{CodeBuilder, Renderable};

use crate::{
    ast::{Fun, Param},
    catalog::IntKind,
};

/// Signature shared by every fragment builder.
pub type FragmentFn = fn(IntKind) -> Option<String>;

/// A fragment builder and the name it is reported under.
#[derive(Clone, Copy)]
pub struct Fragment {
    pub name: &'static str,
    pub build: FragmentFn,
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Fragment").field(&self.name).finish()
    }
}

const fn fragment(name: &'static str, build: FragmentFn) -> Fragment {
    Fragment { name, build }
}

/// All fragments, in the order they appear in a generated file.
pub const FRAGMENTS: [Fragment; 18] = [
    fragment("declaration", declaration::open),
    fragment("bit_pattern_init", initializers::bit_pattern),
    fragment("zero_init", initializers::zero),
    fragment("address_init", initializers::address),
    fragment("narrowing_init", initializers::narrowing),
    fragment("abs", operators::abs),
    fragment("round_up", operators::round_up),
    fragment("unary_plus", operators::unary_plus),
    fragment("complement", operators::complement),
    fragment("wrapping_multiply", operators::wrapping_multiply),
    fragment("declaration_close", declaration::close),
    fragment("copy_equality", capabilities::copy_equality),
    fragment("regular", capabilities::regular),
    fragment("hashable", capabilities::hashable),
    fragment("arithmetic", arithmetic::ordering_and_arithmetic),
    fragment("signed_numeric", arithmetic::signed_numeric),
    fragment("bit_manipulation", bits::binary_and_fixed_width),
    fragment("foreign_convertible", foreign::foreign_convertible),
];

/// Names of the fragments that contribute text for `kind`, in output order.
pub fn applicable(kind: IntKind) -> Vec<&'static str> {
    FRAGMENTS
        .iter()
        .filter(|f| (f.build)(kind).is_some())
        .map(|f| f.name)
        .collect()
}

/// Render `nodes` at `level`, separated by blank lines.
pub(crate) fn separated<R: Renderable>(level: usize, nodes: impl IntoIterator<Item = R>) -> String {
    let mut builder = CodeBuilder::hylo();
    for _ in 0..level {
        builder.push_indent();
    }
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            builder.push_blank();
        }
        builder.emit(&node);
    }
    builder.build()
}

/// Render a single member of the type declaration.
pub(crate) fn member(node: impl Renderable) -> String {
    separated(1, [node])
}

/// `Builtin.zext`/`sext` widening an `i8` value to a word; identity on words.
pub(crate) fn widen_to_word(kind: IntKind, value: &str) -> String {
    if kind.is_8_bit() {
        let ext = if kind.is_signed() { "sext" } else { "zext" };
        format!("Builtin.{ext}_i8_word({value})")
    } else {
        value.to_string()
    }
}

/// An `Int` built from a native count (`cttz`, `ctpop`, ...). Counts of
/// 8-bit values are zero-extended to a word first.
pub(crate) fn int_from_count(kind: IntKind, builtin: &str) -> String {
    let count = format!("Builtin.{}_{}(value)", builtin, kind.builtin());
    if kind.is_8_bit() {
        format!("Int(value: Builtin.zext_i8_word({count}))")
    } else {
        format!("Int(value: {count})")
    }
}

/// `infix<op>` comparing the native values with `Builtin.icmp_<predicate>`.
pub(crate) fn comparison(kind: IntKind, op: &str, predicate: &str) -> Fun {
    Fun::method(format!("infix{op}"))
        .param(Param::unlabeled("other", "Self"))
        .returns("Bool")
        .body_line(format!(
            "Bool(value: Builtin.icmp_{predicate}_{}(value, other.value))",
            kind.builtin()
        ))
}

/// `infix<op>` and its in-place `infix<op>=` form, both applying the
/// native `builtin` to `value` and `<operand>.value`.
pub(crate) fn operator_pair(kind: IntKind, op: &str, builtin: &str, operand: &str) -> [Fun; 2] {
    let call = format!(
        "Builtin.{builtin}_{}(value, {operand}.value)",
        kind.builtin()
    );
    [
        Fun::method(format!("infix{op}"))
            .param(Param::unlabeled(operand, "Self"))
            .returns("Self")
            .body_line(format!("{}(value: {call})", kind.name())),
        Fun::method(format!("infix{op}="))
            .param(Param::unlabeled(operand, "Self"))
            .inout()
            .body_line(format!("&self.value = {call}")),
    ]
}
