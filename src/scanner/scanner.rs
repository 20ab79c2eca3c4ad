use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{ClassificationTables, Token, TokenKind};

/// Single-pass lexical scanner.
///
/// Owns its classification tables and the per-call scan state. Each call to
/// [`Scanner::scan`] resets that state, so one instance can scan any number
/// of inputs independently.
#[derive(Debug, Clone)]
pub struct Scanner {
    tables: ClassificationTables,
    tokens: Vec<Token>,
    lexeme: String,
    line: u32,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner::with_tables(ClassificationTables::default())
    }

    pub fn with_tables(tables: ClassificationTables) -> Scanner {
        Scanner {
            tables,
            tokens: vec![],
            lexeme: String::new(),
            line: 1,
        }
    }

    /// Scans `source` left to right and returns the classified tokens, or
    /// the first invalid lexeme as an error. Never panics on any input.
    pub fn scan(&mut self, source: &str) -> Result<Vec<Token>, Error> {
        self.tokens.clear();
        self.lexeme.clear();
        self.line = 1;

        for c in source.chars() {
            // The counter moves before the delimiter logic runs, so a token
            // flushed by this newline carries the new line number.
            if c == '\n' {
                self.line += 1;
            }

            if self.tables.is_delimiter(c) {
                self.flush()?;

                if self.tables.is_punctuator(c) {
                    self.push(MK_TOKEN!(TokenKind::Punctuator, c.to_string(), self.line));
                } else if self.tables.is_operator(c) {
                    self.push(MK_TOKEN!(TokenKind::Operator, c.to_string(), self.line));
                }
            } else {
                self.lexeme.push(c);
            }
        }

        self.flush()?;

        Ok(std::mem::take(&mut self.tokens))
    }

    // Classifies and emits the buffered lexeme, if any. An unclassifiable
    // lexeme halts the scan.
    fn flush(&mut self) -> Result<(), Error> {
        if self.lexeme.is_empty() {
            return Ok(());
        }

        let lexeme = std::mem::take(&mut self.lexeme);

        match self.tables.classify(&lexeme) {
            Some(kind) => {
                self.push(MK_TOKEN!(kind, lexeme, self.line));
                Ok(())
            }
            None => Err(Error::new(ErrorImpl::InvalidToken { lexeme }, self.line)),
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    Scanner::new().scan(source)
}
