use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref CONSTANT_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?$").unwrap();

    pub static ref DEFAULT_TABLES: ClassificationTables = ClassificationTables::new(
        &["if", "else", "while", "for", "int", "float"],
        &[";", ",", "(", ")", "{", "}"],
        &["+", "-", "*", "/", "=", "==", "<", ">", "<=", ">="],
    );
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Constant,
    Punctuator,
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nline: {}}}",
            self.kind, self.value, self.line
        )
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{} ({}) at line {}", self.kind, self.value, self.line);
    }
}

/// The fixed sets of recognized keyword, punctuator, and operator strings.
///
/// Immutable once built. The scanner owns an instance, so different keyword
/// sets can coexist without shared mutable state.
#[derive(Debug, Clone)]
pub struct ClassificationTables {
    keywords: HashSet<String>,
    punctuators: HashSet<String>,
    operators: HashSet<String>,
}

impl ClassificationTables {
    pub fn new(keywords: &[&str], punctuators: &[&str], operators: &[&str]) -> Self {
        ClassificationTables {
            keywords: keywords.iter().map(|entry| entry.to_string()).collect(),
            punctuators: punctuators.iter().map(|entry| entry.to_string()).collect(),
            operators: operators.iter().map(|entry| entry.to_string()).collect(),
        }
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    pub fn is_punctuator(&self, c: char) -> bool {
        self.punctuators.contains(c.to_string().as_str())
    }

    // Two-character operator entries never match a one-character lookup;
    // splitting stays per character.
    pub fn is_operator(&self, c: char) -> bool {
        self.operators.contains(c.to_string().as_str())
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        c == ' ' || c == '\n' || self.is_punctuator(c) || self.is_operator(c)
    }

    /// Resolves a buffered lexeme to its token kind, or `None` when the
    /// lexeme fits no category. Keywords satisfy the identifier grammar, so
    /// the keyword lookup must run first.
    pub fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        if self.is_keyword(lexeme) {
            Some(TokenKind::Keyword)
        } else if IDENTIFIER_PATTERN.is_match(lexeme) {
            Some(TokenKind::Identifier)
        } else if CONSTANT_PATTERN.is_match(lexeme) {
            Some(TokenKind::Constant)
        } else {
            None
        }
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        DEFAULT_TABLES.clone()
    }
}
