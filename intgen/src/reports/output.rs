//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a failed item.
    fn failed_item(&mut self, text: &str);

    /// Render a warning message.
    /// Full diagnostic for an error, with its code, help and causes.
    fn diagnostic(&mut self, report: &miette::Report);

    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn failed_item(&mut self, text: &str) {
        eprintln!("  ✗ {}", text);
    }

    fn diagnostic(&mut self, report: &miette::Report) {
        eprintln!("{:?}", report);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub text: String,
}

#[cfg(test)]
impl BufferOutput {
    fn push(&mut self, line: String) {
        self.text.push_str(&line);
        self.text.push('\n');
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.push(format!("  + {}", text));
    }

    fn failed_item(&mut self, text: &str) {
        self.push(format!("  ✗ {}", text));
    }

    fn diagnostic(&mut self, report: &miette::Report) {
        let code = report.code().map(|c| format!(" [{}]", c)).unwrap_or_default();
        self.push(format!("  ✗ {}{}", report, code));
        for cause in report.chain().skip(1) {
            self.push(format!("    caused by: {}", cause));
        }
    }

    fn warning(&mut self, msg: &str) {
        self.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.push(text.trim_end_matches('\n').to_string());
    }

    fn newline(&mut self) {
        self.push(String::new());
    }
}
