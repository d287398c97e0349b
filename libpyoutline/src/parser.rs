//! Phase 2: Block Parser
//!
//! The parser drives the lexer and nests construct tokens by indentation:
//! - Each recursive call owns one indent level
//! - A token indented less than the current level ends the block; it is
//!   pushed back onto the lexer so the caller sees it again
//! - `Indent` tokens take part in that comparison but produce no node
//!
//! Nesting comes purely from indentation deltas, never from matching
//! keywords, so a dedent closes every open block down to its own level.

use crate::error::Result;
use crate::lexer::Lexer;
use crate::node::OutlineNode;
use crate::tab::TabFormat;
use crate::token::{LineToken, Symbol};
use tracing::{debug, trace};

/// Outline parser.
///
/// Text and tab format given to [`Parser::parse`] replace the ones given at
/// construction and are kept for later calls.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    text: Option<String>,
    format: Option<TabFormat>,
    root: Option<OutlineNode>,
}

impl Parser {
    pub fn new(text: Option<&str>, format: Option<TabFormat>) -> Self {
        Self {
            text: text.map(String::from),
            format,
            root: None,
        }
    }

    /// Parse the text into a pruned forest of top-level constructs.
    pub fn parse(
        &mut self,
        text: Option<&str>,
        format: Option<TabFormat>,
    ) -> Result<Vec<OutlineNode>> {
        if let Some(text) = text {
            self.text = Some(text.to_string());
        }
        if format.is_some() {
            self.format = format;
        }

        let mut lexer = Lexer::new(self.text.as_deref(), self.format);
        let mut root = OutlineNode::root();
        root.adopt_all(parse_block(&mut lexer, 0)?);

        let root = root.prune();
        let forest = root.children().map(<[_]>::to_vec).unwrap_or_default();
        debug!(top_level = forest.len(), "parsed outline");
        self.root = Some(root);
        Ok(forest)
    }

    /// The pruned root of the last successful parse.
    pub fn root(&self) -> Option<&OutlineNode> {
        self.root.as_ref()
    }

    /// Constructs enclosing a zero-based line, outermost first.
    ///
    /// At each level the last child starting at or before `line` is taken.
    /// Empty before any parse, or when `line` precedes the first construct.
    pub fn context(&self, line: usize) -> Vec<&OutlineNode> {
        let mut path = Vec::new();
        let Some(mut node) = self.root.as_ref() else {
            return path;
        };

        while let Some(child) = node
            .children()
            .unwrap_or_default()
            .iter()
            .take_while(|child| child.line().is_some_and(|l| l <= line))
            .last()
        {
            path.push(child);
            if !child.has_children() {
                break;
            }
            node = child;
        }
        path
    }
}

/// Convenience wrapper: parse `text` with `format` in one call.
pub fn parse_outline(text: &str, format: TabFormat) -> Result<Vec<OutlineNode>> {
    Parser::new(Some(text), Some(format)).parse(None, None)
}

/// Parse sibling constructs at indent level `expected` and their bodies.
fn parse_block(lexer: &mut Lexer, expected: isize) -> Result<Vec<OutlineNode>> {
    let mut siblings = Vec::new();

    loop {
        let token = take(lexer);
        if token.is_eof() {
            break;
        }

        if token.indent < expected {
            // Dedent: hand the token back for the enclosing level.
            lexer.retract(1)?;
            trace!(line = token.line, expected, "block end");
            break;
        }

        if !token.symbol.is_construct() {
            continue;
        }

        let mut node = OutlineNode::from_token(token);
        node.adopt_all(parse_block(lexer, expected + 1)?);
        siblings.push(node);
    }

    Ok(siblings)
}

/// Return the current token and advance past it.
fn take(lexer: &mut Lexer) -> LineToken {
    let token = lexer.curr_token().clone();
    lexer.next();
    token
}
