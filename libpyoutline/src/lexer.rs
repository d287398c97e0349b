//! Phase 1: Line Lexer
//!
//! The lexer splits source text into lines and classifies each significant
//! line into a [`LineToken`]:
//! - Blank, whitespace-only and comment-only lines are skipped
//! - Construct headers (`def`, `class`, `if`, ...) are matched against an
//!   ordered rule table; the first match wins
//! - Anything else becomes an `Indent` token
//!
//! The lexer keeps a cursor and the current token. It scans forward with
//! [`Lexer::next`] and rewinds with [`Lexer::retract`], which is the exact
//! inverse of `next`.

use crate::error::{Error, Result};
use crate::tab::TabFormat;
use crate::token::{LineToken, Symbol};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Construct recognition rules, in priority order.
const RULE_PATTERNS: &[(Symbol, &str)] = &[
    (Symbol::Function, r"^\s*def\s+(?P<attr>[a-zA-Z_][a-zA-Z0-9_]*)\("),
    (Symbol::Class, r"^\s*class\s+(?P<attr>[a-zA-Z_][a-zA-Z0-9_]*)"),
    (Symbol::If, r"^\s*if\s+(?P<attr>[^:]+):"),
    (Symbol::Elif, r"^\s*elif\s+(?P<attr>[^:]+):\s*$"),
    (Symbol::Else, r"^\s*else\s*:"),
    (Symbol::For, r"^\s*for\s+(?P<attr>[^:]+):\s*$"),
    (Symbol::While, r"^\s*while\s+(?P<attr>[^:]+):\s*$"),
    (Symbol::Try, r"^\s*try\s*:"),
    (Symbol::Except, r"^\s*except(\s*(?P<attr>[^:]+))?:\s*$"),
    (Symbol::Finally, r"^\s*finally\s*:\s*$"),
    (Symbol::With, r"^\s*with\s+(?P<attr>[^:]+):\s*$"),
];

static RULES: Lazy<Vec<(Symbol, Regex)>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|&(symbol, pattern)| (symbol, Regex::new(pattern).unwrap()))
        .collect()
});

/// Stateful line scanner.
#[derive(Debug, Clone)]
pub struct Lexer {
    lines: Vec<String>,
    /// Index of the next unread line.
    pos: usize,
    current: LineToken,
    format: TabFormat,
}

impl Lexer {
    /// Create a lexer over `text` and prime the first token.
    ///
    /// A missing `format` means the default (4 spaces, soft tabs).
    pub fn new(text: Option<&str>, format: Option<TabFormat>) -> Self {
        let mut lexer = Self {
            lines: Vec::new(),
            pos: 0,
            current: LineToken::EOF,
            format: format.unwrap_or_default().normalized(),
        };
        lexer.restart(text);
        lexer
    }

    /// Reset the cursor and rescan from the start of `text`.
    pub fn restart(&mut self, text: Option<&str>) {
        self.pos = 0;
        self.current = LineToken::EOF;
        self.lines = text.map(split_lines).unwrap_or_default();
        debug!(lines = self.lines.len(), "lexer restart");
        self.next();
    }

    pub fn curr_token(&self) -> &LineToken {
        &self.current
    }

    /// Advance to the next significant line and return its token.
    ///
    /// Past the end this keeps returning [`LineToken::EOF`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> LineToken {
        while self.pos < self.lines.len() {
            let line_num = self.pos;
            self.pos += 1;

            let line = &self.lines[line_num];
            if !is_significant(line) {
                continue;
            }

            let token = classify(line, line_num, &self.format);
            trace!(%token, "next");
            self.current = token;
            return self.current.clone();
        }

        self.current = LineToken::EOF;
        LineToken::EOF
    }

    /// Rewind by `n` significant tokens.
    ///
    /// Afterwards the current token is the one that was current `n` calls
    /// to [`Lexer::next`] ago. On error the lexer is left unchanged.
    pub fn retract(&mut self, n: usize) -> Result<LineToken> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "retract count must be positive".to_string(),
            ));
        }

        // Line of the current token; EOF sits past the last line.
        let mut cursor = self.current.line_number().unwrap_or(self.lines.len());
        let mut remaining = n;
        while remaining > 0 {
            if cursor == 0 {
                return Err(Error::OutOfRange {
                    requested: n,
                    available: n - remaining,
                });
            }
            cursor -= 1;
            if is_significant(&self.lines[cursor]) {
                remaining -= 1;
            }
        }

        debug!(n, line = cursor, "retract");
        self.pos = cursor;
        Ok(self.next())
    }
}

/// Lex `text` to a token list, excluding the EOF sentinel.
pub fn tokenize(text: &str, format: TabFormat) -> Vec<LineToken> {
    let mut lexer = Lexer::new(Some(text), Some(format));
    let mut tokens = Vec::new();
    while !lexer.curr_token().is_eof() {
        tokens.push(lexer.curr_token().clone());
        lexer.next();
    }
    tokens
}

/// Split on CRLF if present, then LF, then CR.
fn split_lines(text: &str) -> Vec<String> {
    for separator in ["\r\n", "\n"] {
        let lines: Vec<&str> = text.split(separator).collect();
        if lines.len() > 1 {
            return lines.into_iter().map(String::from).collect();
        }
    }
    text.split('\r').map(String::from).collect()
}

/// A line is significant unless it is blank or only a comment.
fn is_significant(line: &str) -> bool {
    let rest = line.trim_start();
    !rest.is_empty() && !rest.starts_with('#')
}

fn classify(line: &str, line_num: usize, format: &TabFormat) -> LineToken {
    let indent = format.indent_of(line);

    for (symbol, regex) in RULES.iter() {
        if let Some(caps) = regex.captures(line) {
            // A capture of only whitespace (e.g. `except :`) is no attribute.
            let attr = caps
                .name("attr")
                .map(|m| m.as_str().trim_end())
                .filter(|a| !a.is_empty());
            return match attr {
                Some(attr) => LineToken::with_attribute(*symbol, line_num, indent, attr),
                None => LineToken::new(*symbol, line_num, indent),
            };
        }
    }

    LineToken::new(Symbol::Indent, line_num, indent)
}
