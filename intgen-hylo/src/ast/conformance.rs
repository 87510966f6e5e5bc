//! Hylo conformance declaration builder.

use intgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Fun;

/// A member of a conformance body.
#[derive(Debug, Clone)]
pub enum Member {
    Fun(Fun),
    /// `public typealias Name = Type`
    Typealias { name: String, ty: String },
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Member::Fun(f) => f.to_fragments(),
            Member::Typealias { name, ty } => {
                vec![CodeFragment::line(format!("public typealias {name} = {ty}"))]
            }
        }
    }
}

/// Builder for `public conformance T: P { ... }`.
///
/// Members are separated, and surrounded, by blank lines. A conformance
/// without members renders on a single line with `{}`.
#[derive(Debug, Clone)]
pub struct Conformance {
    type_name: String,
    concept: String,
    members: Vec<Member>,
}

impl Conformance {
    pub fn new(type_name: impl Into<String>, concept: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            concept: concept.into(),
            members: Vec::new(),
        }
    }

    pub fn fun(mut self, fun: Fun) -> Self {
        self.members.push(Member::Fun(fun));
        self
    }

    /// Add several functions in order.
    pub fn funs(mut self, funs: impl IntoIterator<Item = Fun>) -> Self {
        self.members.extend(funs.into_iter().map(Member::Fun));
        self
    }

    pub fn typealias(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.members.push(Member::Typealias {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Build the conformance as a string.
    pub fn build(&self) -> String {
        CodeBuilder::hylo().node(self).build()
    }

    fn format_header(&self) -> String {
        format!("public conformance {}: {}", self.type_name, self.concept)
    }
}

impl Renderable for Conformance {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", self.format_header()))];
        }

        let mut body = vec![CodeFragment::Blank];
        for member in &self.members {
            body.extend(member.to_fragments());
            body.push(CodeFragment::Blank);
        }
        vec![CodeFragment::braced(format!("{} {{", self.format_header()), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_conformance() {
        let c = Conformance::new("Int", "Regular").build();
        assert_eq!(c, "public conformance Int: Regular {}\n");
    }

    #[test]
    fn test_members_padded_with_blank_lines() {
        let c = Conformance::new("UInt8", "Numeric")
            .typealias("Magnitude", "UInt8")
            .fun(
                Fun::method("magnitude")
                    .returns("UInt8")
                    .body_line("self.copy()"),
            )
            .build();

        insta::assert_snapshot!(c, @r"
        public conformance UInt8: Numeric {

          public typealias Magnitude = UInt8

          public fun magnitude() -> UInt8 {
            self.copy()
          }

        }
        ");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let c = Conformance::new("Int", "Copyable")
            .fun(Fun::method("copy").returns("Self").body_line("Int(value: value)"))
            .build();
        assert!(c.lines().all(|l| l == l.trim_end()));
    }
}
