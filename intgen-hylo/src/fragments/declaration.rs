//! Opening and closing of the `public type` declaration.

use intgen_codegen::CodeBuilder;

use crate::catalog::IntKind;

/// Doc comment, type header and storage field. Left open for the members
/// that follow.
pub fn open(kind: IntKind) -> Option<String> {
    let article = if kind.is_signed() { "A" } else { "An" };
    let code = CodeBuilder::hylo()
        .doc(&format!("{article} {} integer value.", kind.family()))
        .line(&format!("public type {} {{", kind.name()))
        .blank()
        .indent()
        .line(&format!("var value: Builtin.{}", kind.builtin()))
        .blank()
        .line("memberwise init")
        .build();
    Some(code)
}

pub fn close(_kind: IntKind) -> Option<String> {
    Some("}\n".to_string())
}
