//! Indentation unit of generated source.

/// Number of spaces per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// The Hylo standard library indents by two spaces.
    pub const HYLO: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Append the whitespace for `level` nesting levels to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        buffer.extend(std::iter::repeat_n(' ', self.width * level));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::HYLO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_levels() {
        let mut buffer = String::new();
        Indent::HYLO.write(&mut buffer, 3);
        assert_eq!(buffer, "      ");

        let mut buffer = String::from("x");
        Indent::spaces(4).write(&mut buffer, 0);
        assert_eq!(buffer, "x");
    }

    #[test]
    fn test_default_is_hylo() {
        assert_eq!(Indent::default(), Indent::HYLO);
        assert_eq!(Indent::HYLO.width(), 2);
    }
}
