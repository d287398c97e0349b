//! Line tokens: one per significant source line.

use serde::Serialize;
use std::fmt;

/// Kind of a line token.
///
/// The construct kinds each open a block in the source. `Indent` is a
/// significant line that opens nothing but still takes part in nesting.
/// `EndOfInput` only ever appears as [`LineToken::EOF`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Function,
    Class,
    If,
    Elif,
    Else,
    For,
    While,
    Try,
    Except,
    Finally,
    With,
    Indent,
    #[serde(rename = "eof")]
    EndOfInput,
}

impl Symbol {
    /// Display name, used as the first word of outline labels.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Function => "function",
            Symbol::Class => "class",
            Symbol::If => "if",
            Symbol::Elif => "elif",
            Symbol::Else => "else",
            Symbol::For => "for",
            Symbol::While => "while",
            Symbol::Try => "try",
            Symbol::Except => "except",
            Symbol::Finally => "finally",
            Symbol::With => "with",
            Symbol::Indent => "INDENT",
            Symbol::EndOfInput => "EOF",
        }
    }

    /// Returns `true` for kinds that open an outline node.
    pub fn is_construct(self) -> bool {
        !matches!(self, Symbol::Indent | Symbol::EndOfInput)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified significant line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineToken {
    pub symbol: Symbol,
    /// Zero-based line number, `-1` for [`LineToken::EOF`].
    pub line: isize,
    /// Computed indent level, `-1` for [`LineToken::EOF`].
    pub indent: isize,
    /// Captured name or header expression, when the rule defines one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl LineToken {
    /// The end-of-input sentinel.
    pub const EOF: LineToken = LineToken {
        symbol: Symbol::EndOfInput,
        line: -1,
        indent: -1,
        attribute: None,
    };

    pub fn new(symbol: Symbol, line: usize, indent: usize) -> Self {
        Self {
            symbol,
            line: line as isize,
            indent: indent as isize,
            attribute: None,
        }
    }

    pub fn with_attribute(
        symbol: Symbol,
        line: usize,
        indent: usize,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::new(symbol, line, indent)
        }
    }

    pub fn is_eof(&self) -> bool {
        self.symbol == Symbol::EndOfInput
    }

    /// The zero-based line number, or `None` for the sentinel.
    pub fn line_number(&self) -> Option<usize> {
        usize::try_from(self.line).ok()
    }

    /// Outline label: `"<symbol>"` or `"<symbol> <attribute>"`.
    pub fn label(&self) -> String {
        match &self.attribute {
            Some(attr) => format!("{} {}", self.symbol, attr),
            None => self.symbol.to_string(),
        }
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return f.write_str("EOF");
        }
        write!(f, "{}, line: {}, indent: {}", self.symbol, self.line + 1, self.indent)?;
        if let Some(attr) = &self.attribute {
            write!(f, ", attr: {}", attr)?;
        }
        Ok(())
    }
}
