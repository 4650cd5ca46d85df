//! Best-effort structural parser for RSpec files.
//!
//! The parser never evaluates Ruby. It tokenizes the source, tracks `do`/`end`
//! and brace pairs on a stack, and records the spec blocks (`describe`,
//! `context`, `it`, `its`, `shared_examples`) it recognizes along the way.
//! Unbalanced input degrades into diagnostics instead of failing.

mod block;
mod builder;
mod lexer;

pub use block::{Block, BlockKind, Label, LabelStyle, ParseDiagnostic, ParsedSpec, PreOrder};
pub use lexer::{Lexer, Token, TokenKind, tokenize};

use std::collections::HashSet;

use builder::{Closer, ForestBuilder};

/// Identifiers that mark a statement as an expectation.
pub const DEFAULT_ASSERTION_KEYWORDS: &[&str] = &["should", "should_not", "expect", "is_expected"];

/// Ruby keywords that always open an `end`-terminated frame.
const END_OPENERS: &[&str] = &["def", "class", "module", "begin", "case"];

/// Keywords that open a frame only at statement start (otherwise they are modifiers).
const STATEMENT_OPENERS: &[&str] = &["if", "unless", "while", "until", "for"];

/// Loop headers whose optional `do` belongs to the loop itself.
const LOOP_HEADERS: &[&str] = &["while", "until", "for"];

#[derive(Debug, Clone)]
pub struct SpecParser {
    assertion_keywords: HashSet<String>,
}

impl Default for SpecParser {
    fn default() -> Self {
        Self::new(DEFAULT_ASSERTION_KEYWORDS.iter().copied())
    }
}

impl SpecParser {
    #[must_use]
    pub fn new<I, S>(assertion_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assertion_keywords: assertion_keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse spec source into a block forest plus diagnostics.
    #[must_use]
    pub fn parse(&self, source: &str) -> ParsedSpec {
        let tokens = tokenize(source);
        let line_count = source.lines().count().max(1);
        ParseRun {
            tokens: &tokens,
            keywords: &self.assertion_keywords,
            builder: ForestBuilder::new(line_count),
            pos: 0,
            at_statement_start: true,
            statement_asserted: false,
            loop_header_open: false,
        }
        .run()
    }
}

/// A recognized block header: keyword, label and the opening delimiter.
struct Header {
    kind: BlockKind,
    label: Label,
    line: usize,
    closer: Closer,
    /// Index of the first token after the opening delimiter.
    next: usize,
}

struct ParseRun<'a> {
    tokens: &'a [Token],
    keywords: &'a HashSet<String>,
    builder: ForestBuilder,
    pos: usize,
    at_statement_start: bool,
    statement_asserted: bool,
    loop_header_open: bool,
}

impl ParseRun<'_> {
    fn run(mut self) -> ParsedSpec {
        while self.pos < self.tokens.len() {
            self.step();
        }
        self.builder.finish()
    }

    fn step(&mut self) {
        let tokens = self.tokens;
        let token = &tokens[self.pos];

        if token.kind == TokenKind::Separator {
            self.at_statement_start = true;
            self.statement_asserted = false;
            self.loop_header_open = false;
            self.pos += 1;
            return;
        }

        if self.at_statement_start
            && let Some(header) = self.block_header()
        {
            self.builder
                .open_block(header.kind, header.label, header.line, header.closer);
            self.pos = header.next;
            self.statement_asserted = false;
            return;
        }

        let starts_statement = self.at_statement_start;
        self.at_statement_start = false;

        match &token.kind {
            TokenKind::Punct('{') => {
                self.builder.open_anonymous("{", token.line, Closer::Brace);
                self.at_statement_start = true;
            }
            TokenKind::Punct('}') => self.builder.close(Closer::Brace, token.line),
            TokenKind::Ident(word) if self.keywords.contains(word) => self.assertion(),
            TokenKind::Ident(word) if !self.follows_dot() => {
                self.keyword(word, starts_statement, token.line);
            }
            _ => {}
        }
        self.pos += 1;
    }

    fn keyword(&mut self, word: &str, starts_statement: bool, line: usize) {
        match word {
            "do" => {
                if self.loop_header_open {
                    self.loop_header_open = false;
                } else {
                    self.builder.open_anonymous("do", line, Closer::End);
                }
                self.at_statement_start = true;
            }
            "end" => self.builder.close(Closer::End, line),
            "def" if self.is_endless_def() => {}
            w if END_OPENERS.contains(&w) => self.builder.open_anonymous(w, line, Closer::End),
            w if STATEMENT_OPENERS.contains(&w) => {
                if starts_statement || self.follows_assignment() {
                    self.builder.open_anonymous(w, line, Closer::End);
                    self.loop_header_open = LOOP_HEADERS.contains(&w);
                }
            }
            _ => {}
        }
    }

    /// Counts toward the innermost spec block at most once per statement.
    fn assertion(&mut self) {
        if !self.statement_asserted {
            self.builder.record_assertion();
            self.statement_asserted = true;
        }
    }

    /// `def name = expr` / `def name(args) = expr` has no `end`.
    ///
    /// Setters (`def name=(v)`) and operator methods (`==`, `<=>`, `!=`)
    /// keep their `=` glued to another punctuation token and still open a frame.
    fn is_endless_def(&self) -> bool {
        let rest = &self.tokens[self.pos + 1..];
        let mut depth = 0usize;
        for (idx, token) in rest.iter().enumerate() {
            match token.kind {
                TokenKind::Separator if depth == 0 => return false,
                TokenKind::Punct('(' | '[') => depth += 1,
                TokenKind::Punct(')' | ']') => depth = depth.saturating_sub(1),
                TokenKind::Punct('=') if depth == 0 => {
                    let prev = idx.checked_sub(1).map(|p| &rest[p]);
                    let next = rest.get(idx + 1);
                    let glued_before = prev.is_some_and(|t| {
                        matches!(t.kind, TokenKind::Punct('=' | '<' | '>' | '!' | '[' | ']'))
                    });
                    let glued_after = next.is_some_and(|t| {
                        matches!(t.kind, TokenKind::Punct('(' | '=' | '>' | '~'))
                    });
                    if !glued_before && !glued_after {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|p| &self.tokens[p])
    }

    fn follows_dot(&self) -> bool {
        self.previous().is_some_and(|t| t.is_punct('.'))
    }

    fn follows_assignment(&self) -> bool {
        self.previous().is_some_and(|t| t.is_punct('=') || t.is_punct('('))
    }

    /// Recognize a block header starting at the current token.
    fn block_header(&self) -> Option<Header> {
        let tokens = self.tokens;
        let mut i = self.pos;

        if matches!(&tokens[i].kind, TokenKind::Constant(c) if c == "RSpec")
            && tokens.get(i + 1).is_some_and(|t| t.is_punct('.'))
        {
            i += 2;
        }

        let keyword = tokens.get(i)?;
        let TokenKind::Ident(word) = &keyword.kind else {
            return None;
        };
        let kind = BlockKind::from_keyword(word)?;
        let (label, closer, consumed) = scan_header_args(&tokens[i + 1..])?;

        Some(Header {
            kind,
            label,
            line: keyword.line,
            closer,
            next: i + 1 + consumed,
        })
    }
}

/// Scan the arguments after a block keyword up to its opening delimiter.
///
/// Returns the label (first argument), the delimiter kind, and how many
/// tokens were consumed including the delimiter. Returns `None` when the
/// statement ends without opening a block.
fn scan_header_args(tokens: &[Token]) -> Option<(Label, Closer, usize)> {
    let mut depth = 0usize;
    let mut label = Label::none();
    let mut captured = false;

    for (idx, token) in tokens.iter().enumerate() {
        let prev = idx.checked_sub(1).map(|p| &tokens[p]);
        match &token.kind {
            TokenKind::Separator if depth == 0 && !prev.is_some_and(|p| p.is_punct(',')) => {
                return None;
            }
            TokenKind::Punct('{') if depth == 0 && !opens_hash(prev) => {
                return Some((label, Closer::Brace, idx + 1));
            }
            TokenKind::Ident(w) if depth == 0 && w == "do" => {
                return Some((label, Closer::End, idx + 1));
            }
            TokenKind::Ident(w) if depth == 0 && w == "end" => return None,
            TokenKind::Punct('(' | '[' | '{') => {
                depth += 1;
                if idx == 0 {
                    continue;
                }
            }
            TokenKind::Punct(')' | ']' | '}') => {
                depth = depth.checked_sub(1)?;
            }
            _ => {}
        }

        if !captured && token.kind != TokenKind::Separator {
            captured = true;
            label = label_from(token);
        }
    }

    None
}

/// A `{` after these tokens starts a hash argument, not a block.
fn opens_hash(prev: Option<&Token>) -> bool {
    prev.is_some_and(|t| {
        t.is_punct(',') || t.is_punct('>') || t.is_punct('(') || matches!(t.kind, TokenKind::Label(_))
    })
}

fn label_from(token: &Token) -> Label {
    match &token.kind {
        TokenKind::Str(s) => Label::new(s.clone(), LabelStyle::Quoted),
        TokenKind::Symbol(s) => Label::new(s.clone(), LabelStyle::Symbol),
        TokenKind::Constant(c) => Label::new(c.clone(), LabelStyle::Constant),
        TokenKind::Ident(w) => Label::new(w.clone(), LabelStyle::Identifier),
        _ => Label::none(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
