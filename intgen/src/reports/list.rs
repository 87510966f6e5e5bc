//! List command report data structures.

use intgen_core::Selection;
use intgen_hylo::IntKind;

use super::output::{Output, Report};

/// The kinds a selection admits.
#[derive(Debug)]
pub struct ListReport {
    pub selection: Selection,
    pub kinds: Vec<IntKind>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Integer types ({})", self.selection));
        for kind in &self.kinds {
            out.list_item(&format!(
                "{:<6} {:<8} Builtin.{}",
                kind.name(),
                kind.family().as_str(),
                kind.builtin()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use intgen_hylo::select;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_all() {
        let report = ListReport {
            selection: Selection::All,
            kinds: select(Selection::All),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text, @r"
        Integer types (all):
          - Int    signed   Builtin.word
          - Int8   signed   Builtin.i8
          - Int32  signed   Builtin.i32
          - UInt   unsigned Builtin.word
          - UInt8  unsigned Builtin.i8
        ");
    }
}
