use super::block::{Block, BlockKind, Label, ParseDiagnostic, ParsedSpec, title};

/// Delimiter that terminates an open frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closer {
    /// Closed by `end` (`do`, `def`, `class`, `if`, ...).
    End,
    /// Closed by `}`.
    Brace,
}

impl Closer {
    const fn token(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Brace => "}",
        }
    }
}

struct OpenBlock {
    kind: BlockKind,
    label: Label,
    depth: usize,
    line: usize,
    assertion_count: usize,
    children: Vec<Block>,
}

impl OpenBlock {
    fn describe(&self) -> String {
        title(self.kind, &self.label)
    }

    fn into_block(self, end_line: usize) -> Block {
        Block {
            kind: self.kind,
            label: self.label,
            depth: self.depth,
            line: self.line,
            end_line,
            assertion_count: self.assertion_count,
            children: self.children,
        }
    }
}

struct Frame {
    closer: Closer,
    line: usize,
    opener: String,
    block: Option<OpenBlock>,
}

/// Stack machine that turns open/close events into a block forest.
///
/// Anonymous frames (`def`, `if`, hash braces, plain `do` blocks) only keep
/// delimiters paired; spec frames become [`Block`]s attached to the nearest
/// enclosing spec frame.
pub struct ForestBuilder {
    stack: Vec<Frame>,
    roots: Vec<Block>,
    diagnostics: Vec<ParseDiagnostic>,
    line_count: usize,
}

impl ForestBuilder {
    #[must_use]
    pub const fn new(line_count: usize) -> Self {
        Self {
            stack: Vec::new(),
            roots: Vec::new(),
            diagnostics: Vec::new(),
            line_count,
        }
    }

    pub fn open_block(&mut self, kind: BlockKind, label: Label, line: usize, closer: Closer) {
        let depth = self.stack.iter().filter(|f| f.block.is_some()).count();
        self.stack.push(Frame {
            closer,
            line,
            opener: kind.keyword().to_string(),
            block: Some(OpenBlock {
                kind,
                label,
                depth,
                line,
                assertion_count: 0,
                children: Vec::new(),
            }),
        });
    }

    pub fn open_anonymous(&mut self, opener: &str, line: usize, closer: Closer) {
        self.stack.push(Frame {
            closer,
            line,
            opener: opener.to_string(),
            block: None,
        });
    }

    /// Close the innermost frame terminated by `closer`.
    ///
    /// Frames above it were left open by the source; each gets a diagnostic.
    /// A closer with no matching frame is reported and ignored.
    pub fn close(&mut self, closer: Closer, line: usize) {
        let Some(pos) = self.stack.iter().rposition(|f| f.closer == closer) else {
            self.diagnostics.push(ParseDiagnostic {
                line,
                message: format!("unmatched `{}` with no open block", closer.token()),
            });
            return;
        };

        while self.stack.len() > pos + 1 {
            if let Some(frame) = self.stack.pop() {
                self.report_unclosed(&frame);
                self.complete(frame, line);
            }
        }
        if let Some(frame) = self.stack.pop() {
            self.complete(frame, line);
        }
    }

    /// Count one assertion-like statement toward the innermost spec block.
    pub fn record_assertion(&mut self) {
        if let Some(block) = self.stack.iter_mut().rev().find_map(|f| f.block.as_mut()) {
            block.assertion_count += 1;
        }
    }

    #[must_use]
    pub fn finish(mut self) -> ParsedSpec {
        let last_line = self.line_count;
        while let Some(frame) = self.stack.pop() {
            self.report_unclosed(&frame);
            self.complete(frame, last_line);
        }
        // Unclosed frames are reported innermost first; present them in line order.
        self.diagnostics.sort_by_key(|d| d.line);

        ParsedSpec {
            roots: self.roots,
            diagnostics: self.diagnostics,
            line_count: self.line_count,
        }
    }

    fn report_unclosed(&mut self, frame: &Frame) {
        let what = frame
            .block
            .as_ref()
            .map_or_else(|| format!("`{}`", frame.opener), OpenBlock::describe);
        self.diagnostics.push(ParseDiagnostic {
            line: frame.line,
            message: format!(
                "{what} block opened on line {} is never closed (expected `{}`)",
                frame.line,
                frame.closer.token()
            ),
        });
    }

    fn complete(&mut self, frame: Frame, end_line: usize) {
        let Some(open) = frame.block else {
            return;
        };
        let block = open.into_block(end_line);
        match self.stack.iter_mut().rev().find_map(|f| f.block.as_mut()) {
            Some(parent) => parent.children.push(block),
            None => self.roots.push(block),
        }
    }
}
