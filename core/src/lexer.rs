//! Tokenizer for sequence literals.

use crate::error::{Result, SeqError};
use crate::language::is_bare_name_char;

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`, opening a list-kind sequence
    LParen,
    /// `#name(`, opening a sequence of kind `name`
    KindOpen(String),
    RParen,
    Symbol(String),
    Index(usize),
}

// ============================================================================
// Lexer
// ============================================================================

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> char {
        if self.position < self.input.len() {
            self.input[self.position]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }

            // Comments run from a semicolon to end of line
            if self.current_char() == ';' {
                while !self.is_eof() && self.current_char() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while !self.is_eof() && is_bare_name_char(self.current_char()) {
            word.push(self.current_char());
            self.advance();
        }
        word
    }

    /// Read a `|...|` name; a backslash makes the next character literal.
    fn read_quoted(&mut self) -> Result<String> {
        let start = self.position;
        // consume opening '|'
        self.advance();
        let mut name = String::new();
        loop {
            if self.is_eof() {
                return Err(SeqError::parse(format!(
                    "unterminated quoted name starting at offset {start}"
                )));
            }
            match self.current_char() {
                '|' => {
                    self.advance();
                    return Ok(name);
                }
                '\\' => {
                    self.advance();
                    if self.is_eof() {
                        return Err(SeqError::parse(format!(
                            "unterminated quoted name starting at offset {start}"
                        )));
                    }
                    name.push(self.current_char());
                    self.advance();
                }
                c => {
                    name.push(c);
                    self.advance();
                }
            }
        }
    }

    fn read_name(&mut self) -> Result<String> {
        if self.current_char() == '|' {
            self.read_quoted()
        } else {
            Ok(self.read_word())
        }
    }

    fn read_kind_open(&mut self) -> Result<Token> {
        // consume '#'
        self.advance();
        let quoted = self.current_char() == '|';
        let name = self.read_name()?;
        if name.is_empty() && !quoted {
            return Err(SeqError::parse(format!(
                "expected kind name after '#' at offset {}",
                self.position
            )));
        }
        if self.current_char() != '(' {
            return Err(SeqError::parse(format!(
                "expected '(' after kind '#{name}', found '{}'",
                self.current_char()
            )));
        }
        self.advance();
        Ok(Token::KindOpen(name))
    }

    fn read_atom(&mut self) -> Result<Token> {
        if self.current_char() == '|' {
            return self.read_quoted().map(Token::Symbol);
        }
        let start = self.position;
        let word = self.read_word();
        if word.is_empty() {
            return Err(SeqError::parse(format!(
                "unexpected character '{}' at offset {start}",
                self.current_char()
            )));
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return word
                .parse::<usize>()
                .map(Token::Index)
                .map_err(|e| SeqError::parse(format!("invalid index '{word}': {e}")));
        }
        Ok(Token::Symbol(word))
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(None);
        }

        let token = match self.current_char() {
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            '#' => self.read_kind_open()?,
            _ => self.read_atom()?,
        };
        Ok(Some(token))
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
