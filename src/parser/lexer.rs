/// Kind of a lexical token in Ruby spec source.
///
/// Only the distinctions the block parser needs are kept: literal contents of
/// strings and symbols, identifiers, constants, statement separators and the
/// punctuation that opens or closes groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Lowercase identifier or keyword, including a trailing `?` or `!`.
    Ident(String),
    /// Constant path such as `Article` or `Admin::User`.
    Constant(String),
    /// Contents of a quoted string literal.
    Str(String),
    /// Symbol name without the leading colon.
    Symbol(String),
    /// Hash key written as `key:`.
    Label(String),
    Punct(char),
    /// Newline or `;`.
    Separator,
    /// Numbers, instance/global variables and anything else the parser ignores.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line of the first character of the token.
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn is_ident(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(w) if w == word)
    }

    #[must_use]
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct(ch)
    }
}

/// Best-effort tokenizer for Ruby source.
///
/// Comments (`#` and `=begin`/`=end`) produce no tokens. Heredocs, `%`
/// literals and regex literals are not recognized and lex as ordinary
/// punctuation and identifiers.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek(0) {
            self.step(ch);
        }
        self.tokens
    }

    fn step(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.push(TokenKind::Separator, self.line);
                self.pos += 1;
                self.line += 1;
            }
            ';' => {
                self.push(TokenKind::Separator, self.line);
                self.pos += 1;
            }
            '\\' if self.peek(1) == Some('\n') => {
                // Line continuation
                self.pos += 2;
                self.line += 1;
            }
            '=' if self.at_line_start() && self.starts_with("=begin") => self.skip_block_comment(),
            '#' => self.skip_line_comment(),
            '"' | '\'' => self.lex_string(ch),
            ':' => self.lex_colon(),
            '@' | '$' => {
                self.pos += 1;
                self.take_word();
                self.push(TokenKind::Other, self.line);
            }
            c if c.is_ascii_digit() => {
                self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
                self.push(TokenKind::Other, self.line);
            }
            c if is_word_start(c) => self.lex_word(),
            c if c.is_whitespace() => self.pos += 1,
            c => {
                self.push(TokenKind::Punct(c), self.line);
                self.pos += 1;
            }
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn push(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token { kind, line });
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || self.chars.get(self.pos - 1) == Some(&'\n')
    }

    fn starts_with(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek(i) == Some(c))
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn take_word(&mut self) -> String {
        self.take_while(|c| c.is_alphanumeric() || c == '_')
    }

    fn skip_line_comment(&mut self) {
        while self.peek(0).is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        loop {
            self.skip_line_comment();
            if self.peek(0).is_none() {
                return;
            }
            // Consume the newline, then test the next line for the terminator.
            self.pos += 1;
            self.line += 1;
            if self.starts_with("=end") {
                self.skip_line_comment();
                return;
            }
        }
    }

    fn lex_string(&mut self, quote: char) {
        let line = self.line;
        let content = self.read_quoted(quote);
        self.push(TokenKind::Str(content), line);
    }

    /// Read a quoted literal starting at the opening quote and return its contents.
    ///
    /// Interpolations (`#{...}`) inside double quotes are kept verbatim; braces
    /// are balanced so a `}` inside the interpolation does not end it early.
    fn read_quoted(&mut self, quote: char) -> String {
        self.pos += 1;
        let mut content = String::new();
        let mut interpolation_depth = 0usize;

        while let Some(c) = self.peek(0) {
            match c {
                '\\' => {
                    content.push(c);
                    if let Some(next) = self.peek(1) {
                        content.push(next);
                        if next == '\n' {
                            self.line += 1;
                        }
                    }
                    self.pos += 2;
                    continue;
                }
                '\n' => self.line += 1,
                '#' if quote == '"' && self.peek(1) == Some('{') => {
                    interpolation_depth += 1;
                    content.push_str("#{");
                    self.pos += 2;
                    continue;
                }
                '{' if interpolation_depth > 0 => interpolation_depth += 1,
                '}' if interpolation_depth > 0 => interpolation_depth -= 1,
                c if c == quote && interpolation_depth == 0 => {
                    self.pos += 1;
                    return content;
                }
                _ => {}
            }
            content.push(c);
            self.pos += 1;
        }

        content
    }

    fn lex_colon(&mut self) {
        let line = self.line;
        match self.peek(1) {
            Some(':') => {
                self.push(TokenKind::Punct(':'), line);
                self.push(TokenKind::Punct(':'), line);
                self.pos += 2;
            }
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                let name = self.read_quoted(q);
                self.push(TokenKind::Symbol(name), line);
            }
            Some(c) if is_word_start(c) => {
                self.pos += 1;
                let mut name = self.take_word();
                if let Some(suffix @ ('?' | '!' | '=')) = self.peek(0)
                    && self.peek(1) != Some('=')
                {
                    name.push(suffix);
                    self.pos += 1;
                }
                self.push(TokenKind::Symbol(name), line);
            }
            _ => {
                self.push(TokenKind::Punct(':'), line);
                self.pos += 1;
            }
        }
    }

    fn lex_word(&mut self) {
        let line = self.line;
        let mut word = self.take_word();

        if word.starts_with(|c: char| c.is_uppercase()) {
            // Join `Admin::User` into a single constant path.
            while self.peek(0) == Some(':')
                && self.peek(1) == Some(':')
                && self.peek(2).is_some_and(char::is_uppercase)
            {
                self.pos += 2;
                word.push_str("::");
                word.push_str(&self.take_word());
            }
            self.push(TokenKind::Constant(word), line);
            return;
        }

        if let Some(suffix @ ('?' | '!')) = self.peek(0)
            && self.peek(1) != Some('=')
        {
            word.push(suffix);
            self.pos += 1;
        }

        if self.peek(0) == Some(':') && self.peek(1) != Some(':') {
            self.pos += 1;
            self.push(TokenKind::Label(word), line);
            return;
        }

        self.push(TokenKind::Ident(word), line);
    }
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Tokenize `source` in one call.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
