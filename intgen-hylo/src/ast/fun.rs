//! Hylo function and initializer builder.

use intgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Hylo function.
#[derive(Debug, Clone)]
pub struct Param {
    label: Option<String>,
    name: String,
    ty: String,
}

impl Param {
    /// A parameter whose argument label is its name (`foreign_value: T`).
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A parameter with an explicit argument label (`bit_pattern other: T`).
    pub fn labeled(label: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A parameter without an argument label (`_ other: T`).
    pub fn unlabeled(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::labeled("_", name, ty)
    }

    fn render(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}: {}", label, self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunKind {
    Method,
    Static,
    Init,
}

/// Builder for Hylo functions, operators and initializers.
#[derive(Debug, Clone)]
pub struct Fun {
    kind: FunKind,
    name: String,
    doc: Vec<String>,
    generic: Option<String>,
    params: Vec<Param>,
    is_inout: bool,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fun {
    fn with_kind(kind: FunKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            doc: Vec::new(),
            generic: None,
            params: Vec::new(),
            is_inout: false,
            return_type: None,
            body: Vec::new(),
        }
    }

    /// A `public fun`. Operator names (`infix+`, `prefix~`) are spaced from
    /// their parameter list.
    pub fn method(name: impl Into<String>) -> Self {
        Self::with_kind(FunKind::Method, name)
    }

    /// A `public static fun`.
    pub fn static_method(name: impl Into<String>) -> Self {
        Self::with_kind(FunKind::Static, name)
    }

    /// A `public init`.
    pub fn init() -> Self {
        Self::with_kind(FunKind::Init, "init")
    }

    /// Add a doc comment line. An empty string yields a bare `///`.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Declare a single generic parameter, e.g. `T: BinaryInteger`.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generic = Some(param.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Mark the receiver as `inout`.
    pub fn inout(mut self) -> Self {
        self.is_inout = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    fn is_operator(&self) -> bool {
        ["infix", "prefix", "postfix"]
            .iter()
            .any(|notation| self.name.starts_with(notation))
    }

    fn format_header(&self) -> String {
        let introducer = match self.kind {
            FunKind::Method => format!("public fun {}", self.name),
            FunKind::Static => format!("public static fun {}", self.name),
            FunKind::Init => "public init".to_string(),
        };
        let spacing = if self.is_operator() { " " } else { "" };
        let generic = self
            .generic
            .as_ref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        let mut header = format!("{introducer}{spacing}{generic}({params})");
        if let Some(ret) = &self.return_type {
            header.push_str(" -> ");
            header.push_str(ret);
        }
        if self.is_inout {
            header.push_str(" inout");
        }
        header.push_str(" {");
        header
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::hylo().node(self).build()
    }
}

impl Renderable for Fun {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self.doc.iter().map(CodeFragment::doc).collect();
        fragments.push(CodeFragment::braced(
            self.format_header(),
            self.body.iter().map(CodeFragment::line).collect(),
        ));
        fragments
    }
}
