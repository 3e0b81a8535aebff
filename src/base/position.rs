/// Position tracking for diagnostics
///
/// Converts byte offsets produced by the lexer into line/column pairs so
/// syntax errors can be reported the way editors and compilers print them.
use text_size::TextSize;

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of every line
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i as u32 + 1),
        );
        Self { line_starts }
    }

    /// Number of lines (a trailing newline opens an empty final line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 0-indexed line/column position.
    ///
    /// Columns are counted in bytes.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = u32::from(offset);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line, (offset - self.line_starts[line]) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_line() {
        let index = LineIndex::new("#include <a>\n");
        assert_eq!(index.position(TextSize::new(0)), Position::new(0, 0));
        assert_eq!(index.position(TextSize::new(9)), Position::new(0, 9));
    }

    #[test]
    fn test_position_after_newlines() {
        let index = LineIndex::new("a\nbc\n\nd");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(TextSize::new(2)), Position::new(1, 0));
        assert_eq!(index.position(TextSize::new(3)), Position::new(1, 1));
        assert_eq!(index.position(TextSize::new(5)), Position::new(2, 0));
        assert_eq!(index.position(TextSize::new(6)), Position::new(3, 0));
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 0) > Position::new(0, 10));
    }
}
