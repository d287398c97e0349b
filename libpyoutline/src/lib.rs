//! Outline parser for indentation-structured (Python-like) source text.
//!
//! The outline is an ordered forest of the constructs that open blocks
//! (`def`, `class`, `if`/`elif`/`else`, `for`, `while`,
//! `try`/`except`/`finally`, `with`), nested by indentation.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Lexer**: Splits source text into lines and classifies every
//!    significant line into a token carrying its indent level. The lexer
//!    can be rewound token by token.
//!
//! 2. **Block Parser**: Recursively nests construct tokens by comparing
//!    indent levels, then prunes the tree into its presentation form.

mod error;
mod lexer;
mod node;
mod parser;
pub mod render;
mod tab;
mod token;

pub use error::{Error, Result};
pub use lexer::{tokenize, Lexer};
pub use node::{OutlineNode, Presentation, ROOT_LABEL};
pub use parser::{parse_outline, Parser};
pub use tab::{TabFormat, DEFAULT_TAB_SIZE};
pub use token::{LineToken, Symbol};

/// Parse a document with the default tab format.
///
/// # Example
///
/// ```
/// use libpyoutline::parse;
///
/// let outline = parse("def main():\n    pass\n").unwrap();
/// assert_eq!(outline[0].label, "function main");
/// ```
pub fn parse(input: &str) -> Result<Vec<OutlineNode>> {
    parse_outline(input, TabFormat::default())
}
