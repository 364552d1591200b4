//! The records produced by the lexer.
use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    EndOfInput,
    Invalid,
    Comma,
    Operation,
    Semicolon,
    Label,
    Comment,
    Byte,
    Word,
    Literal,
    StringLiteral,
    Directive,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::EndOfInput,
        Category::Invalid,
        Category::Comma,
        Category::Operation,
        Category::Semicolon,
        Category::Label,
        Category::Comment,
        Category::Byte,
        Category::Word,
        Category::Literal,
        Category::StringLiteral,
        Category::Directive,
    ];

    /// The fixed name used when rendering a classification.
    pub fn name(&self) -> &'static str {
        match self {
            Category::EndOfInput => "EOF",
            Category::Invalid => "ILLEGAL",
            Category::Comma => ",",
            Category::Operation => "OP",
            Category::Semicolon => ";",
            Category::Label => "LABEL",
            Category::Comment => "COMMENT",
            Category::Byte => "BYTE",
            Category::Word => "WORD",
            Category::Literal => "LITERAL",
            Category::StringLiteral => "STRING",
            Category::Directive => "DIRECTIVE",
        }
    }

    /// Categories that no line rule produces yet. They belong to the operand tokeniser.
    pub fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Category::Operation | Category::Label | Category::Directive
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single non-blank source line and what it was classified as
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ClassifiedLine {
    line_number: usize,
    category: Category,
    text: String,
}

impl ClassifiedLine {
    pub fn new(line_number: usize, category: Category, text: impl Into<String>) -> Self {
        Self {
            line_number,
            category,
            text: text.into(),
        }
    }

    /// 1-based, counts blank and comment-only lines as well.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ClassifiedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.line_number, self.category, self.text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ClassificationResult {
    lines: Vec<ClassifiedLine>,
    lines_consumed: usize,
}

impl ClassificationResult {
    pub(crate) fn new(lines: Vec<ClassifiedLine>, lines_consumed: usize) -> Self {
        Self {
            lines,
            lines_consumed,
        }
    }

    pub fn lines(&self) -> &[ClassifiedLine] {
        &self.lines
    }
    /// Every line read from the source, including the ones that produced no record
    pub fn lines_consumed(&self) -> usize {
        self.lines_consumed
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedLine> {
        self.lines.iter()
    }

    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &ClassifiedLine> {
        self.lines.iter().filter(move |l| l.category == category)
    }
}

/// Example:
/// lines lexed: 5
/// 1 LABEL start:
/// 2 DIRECTIVE .org $8000
impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lines lexed: {}", self.lines_consumed)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ClassificationResult {
    type Item = ClassifiedLine;
    type IntoIter = std::vec::IntoIter<ClassifiedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassificationResult {
    type Item = &'a ClassifiedLine;
    type IntoIter = std::slice::Iter<'a, ClassifiedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
