//! Outline tree nodes.
//!
//! The parser builds a tree of [`OutlineNode`]s and then derives the
//! presentation tree with [`OutlineNode::prune`]. Nodes own their children;
//! there is no parent pointer. A construct node is identified by the line
//! of its token, so paths are recomputed by descending from the root.

use crate::token::LineToken;
use serde::Serialize;

/// Label of the synthetic root.
pub const ROOT_LABEL: &str = "root";

/// Display state of a node in a rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Nothing to expand.
    #[default]
    Leaf,
    /// Has children, shown collapsed.
    Collapsed,
}

/// A node of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub label: String,
    /// `None` only for the synthetic root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<LineToken>,
    pub state: Presentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<OutlineNode>>,
}

impl OutlineNode {
    pub fn new(label: impl Into<String>, state: Presentation, token: Option<LineToken>) -> Self {
        Self {
            label: label.into(),
            token,
            state,
            children: None,
        }
    }

    /// The synthetic root that holds the top-level forest.
    pub fn root() -> Self {
        Self::new(ROOT_LABEL, Presentation::Leaf, None)
    }

    /// A construct node labelled after its token.
    pub fn from_token(token: LineToken) -> Self {
        Self::new(token.label(), Presentation::Collapsed, Some(token))
    }

    /// Builder form of [`OutlineNode::adopt_all`].
    #[cfg(test)]
    pub(crate) fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.adopt_all(children);
        self
    }

    /// `None` means the node was never expanded.
    pub fn children(&self) -> Option<&[OutlineNode]> {
        self.children.as_deref()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Append one child.
    pub fn adopt(&mut self, child: OutlineNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Append children in order. An empty list leaves the node untouched.
    pub fn adopt_all(&mut self, children: Vec<OutlineNode>) {
        if children.is_empty() {
            return;
        }
        match &mut self.children {
            Some(existing) => existing.extend(children),
            None => self.children = Some(children),
        }
    }

    /// Copy of this tree with every node's state derived from its children.
    pub fn prune(&self) -> OutlineNode {
        if self.has_children() {
            OutlineNode {
                label: self.label.clone(),
                token: self.token.clone(),
                state: Presentation::Collapsed,
                children: self
                    .children
                    .as_ref()
                    .map(|children| children.iter().map(OutlineNode::prune).collect()),
            }
        } else {
            OutlineNode::new(self.label.clone(), Presentation::Leaf, self.token.clone())
        }
    }

    /// Zero-based line of this node's token.
    pub fn line(&self) -> Option<usize> {
        self.token.as_ref().and_then(LineToken::line_number)
    }

    /// Label, plus the one-based line number when there is one.
    pub fn tooltip(&self) -> String {
        match self.line() {
            Some(line) => format!("{}: {}", self.label, line + 1),
            None => self.label.clone(),
        }
    }

    /// Path from this node down to the descendant whose token is on `line`.
    ///
    /// The path ends with the target. It starts with `self` unless `self`
    /// has no token (the synthetic root).
    pub fn path_to(&self, line: usize) -> Option<Vec<&OutlineNode>> {
        let mut path = Vec::new();
        if self.collect_path(line, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn collect_path<'a>(&'a self, line: usize, path: &mut Vec<&'a OutlineNode>) -> bool {
        let is_root = self.token.is_none();
        if !is_root {
            path.push(self);
            if self.line() == Some(line) {
                return true;
            }
        }

        let children = self.children().unwrap_or_default();
        // Children are ordered by line: only the last one starting at or
        // before `line` can contain it.
        let candidate = children
            .iter()
            .take_while(|child| child.line().is_some_and(|l| l <= line))
            .last();
        if let Some(child) = candidate {
            if child.collect_path(line, path) {
                return true;
            }
        }

        if !is_root {
            path.pop();
        }
        false
    }
}
