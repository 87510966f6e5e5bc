//! Line-oriented text builder that tracks nesting.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of source at a current nesting level.
///
/// Chaining methods take and return `Self`; the `push_*` forms work through
/// `&mut self` for builders filled in a loop.
///
/// ```
/// use intgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::hylo()
///     .line("public type Int {")
///     .indent()
///     .line("var value: Builtin.word")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public type Int {\n  var value: Builtin.word\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
        }
    }

    /// A builder indenting by [`Indent::HYLO`].
    pub fn hylo() -> Self {
        Self::new(Indent::HYLO)
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// An empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// One level out; stays at zero when already there.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// A `///` doc line. Empty text yields a bare `///`.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("///")
        } else {
            self.push_line(&format!("/// {text}"))
        }
    }

    /// Render every fragment of `node` at the current level.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply(f);
                }
                self.push_dedent().push_line(&close);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.push_doc(text);
        self
    }

    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::hylo()
    }
}
