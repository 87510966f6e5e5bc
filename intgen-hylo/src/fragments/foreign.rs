use crate::{
    ast::{Conformance, Fun, Param},
    catalog::IntKind,
};

/// `ForeignConvertible`, bridging `Int` to its native word for foreign calls.
pub fn foreign_convertible(kind: IntKind) -> Option<String> {
    if kind != IntKind::Int {
        return None;
    }
    let native = format!("Builtin.{}", kind.builtin());
    let conformance = Conformance::new(kind.name(), "ForeignConvertible")
        .typealias("ForeignRepresentation", native.as_str())
        .fun(
            Fun::init()
                .param(Param::new("foreign_value", format!("sink {native}")))
                .body_line("&self.value = foreign_value"),
        )
        .fun(
            Fun::method("foreign_value")
                .returns(native.as_str())
                .body_line("value"),
        );
    Some(conformance.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_bridges_word() {
        insta::assert_snapshot!(foreign_convertible(IntKind::Int).unwrap(), @r"
        public conformance Int: ForeignConvertible {

          public typealias ForeignRepresentation = Builtin.word

          public init(foreign_value: sink Builtin.word) {
            &self.value = foreign_value
          }

          public fun foreign_value() -> Builtin.word {
            value
          }

        }
        ");
    }

    #[test]
    fn test_other_kinds_have_no_bridge() {
        for kind in [IntKind::Int8, IntKind::Int32, IntKind::UInt, IntKind::UInt8] {
            assert!(foreign_convertible(kind).is_none(), "{kind}");
        }
    }
}
