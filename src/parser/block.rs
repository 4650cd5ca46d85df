use std::fmt::{self, Write};

use serde::Serialize;

/// Kind of a recognized spec block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Describe,
    Context,
    It,
    Its,
    SharedExamples,
}

impl BlockKind {
    /// Map a block keyword to its kind.
    ///
    /// Focused (`f*`) and skipped (`x*`) variants map to the same kind as the
    /// plain keyword; `specify` and `example` are examples like `it`.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "describe" | "fdescribe" | "xdescribe" => Some(Self::Describe),
            "context" | "fcontext" | "xcontext" => Some(Self::Context),
            "it" | "fit" | "xit" | "specify" | "example" => Some(Self::It),
            "its" => Some(Self::Its),
            "shared_examples" | "shared_examples_for" | "shared_context" => {
                Some(Self::SharedExamples)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Describe => "describe",
            Self::Context => "context",
            Self::It => "it",
            Self::Its => "its",
            Self::SharedExamples => "shared_examples",
        }
    }

    /// True for `it`/`its`, the blocks that hold expectations.
    #[must_use]
    pub const fn is_example(self) -> bool {
        matches!(self, Self::It | Self::Its)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How a block label was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `"#summary"` or `'when empty'`
    Quoted,
    /// `:summary`
    Symbol,
    /// `Article`, `Admin::User`
    Constant,
    /// `summary` (a bare method or local name)
    Identifier,
    /// No label, e.g. `it { should be_valid }`
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Label {
    pub text: String,
    pub style: LabelStyle,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            text: String::new(),
            style: LabelStyle::None,
        }
    }

    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self.style, LabelStyle::Constant)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            LabelStyle::Quoted => write!(f, "\"{}\"", self.text),
            LabelStyle::Symbol => write!(f, ":{}", self.text),
            LabelStyle::Constant | LabelStyle::Identifier => f.write_str(&self.text),
            LabelStyle::None => Ok(()),
        }
    }
}

/// A node of the recovered block forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub label: Label,
    /// Nesting depth among spec blocks; roots are 0.
    pub depth: usize,
    /// Line of the block keyword.
    pub line: usize,
    /// Line of the closing delimiter, or the last line for unclosed blocks.
    pub end_line: usize,
    /// Assertion-like statements directly in this block's body.
    pub assertion_count: usize,
    pub children: Vec<Self>,
}

/// Short quoted form of a block header for messages, e.g. `` `it "saves"` ``.
#[must_use]
pub fn title(kind: BlockKind, label: &Label) -> String {
    if label.style == LabelStyle::None {
        format!("`{kind}`")
    } else {
        format!("`{kind} {label}`")
    }
}

impl Block {
    #[must_use]
    pub fn title(&self) -> String {
        title(self.kind, &self.label)
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal starting at this block.
    #[must_use]
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator over a block forest.
pub struct PreOrder<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        self.stack.extend(block.children.iter().rev());
        Some(block)
    }
}

/// A problem the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub line: usize,
    pub message: String,
}

/// Result of parsing one spec file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSpec {
    pub roots: Vec<Block>,
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Number of lines in the source; an empty file counts as one line.
    pub line_count: usize,
}

impl ParsedSpec {
    /// Every block of the forest in pre-order.
    #[must_use]
    pub fn blocks(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Render the forest as an indented outline, one block per line.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for block in self.blocks() {
            let indent = "  ".repeat(block.depth);
            if block.label.style == LabelStyle::None {
                let _ = writeln!(out, "{indent}{}", block.kind);
            } else {
                let _ = writeln!(out, "{indent}{} {}", block.kind, block.label);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
