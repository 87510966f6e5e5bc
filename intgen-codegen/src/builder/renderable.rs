//! Syntax nodes describe themselves as [`CodeFragment`]s; only
//! [`CodeBuilder`](super::CodeBuilder) turns fragments into text.

/// A piece of generated source, positioned relative to the current level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// A `///` doc line.
    Doc(String),
    /// `header`, then `body` one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: "}".to_string(),
        }
    }
}

/// A node that can be rendered by a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
