//! Reader for sequence literals, the inverse of `Display`.

use crate::error::{Result, SeqError};
use crate::language::{Kind, Seq, Value};
use crate::lexer::{Lexer, Token};

// ============================================================================
// Parser
// ============================================================================

/// Deepest sequence nesting a literal may have.
pub const MAX_NESTING: usize = 512;

struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position += 1;
        token
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.next() {
            Some(Token::LParen) => self.parse_elements(Kind::list()),
            Some(Token::KindOpen(name)) => self.parse_elements(Kind::new(&name)),
            Some(Token::Symbol(name)) => Ok(Value::symbol(&name)),
            Some(Token::Index(n)) => Ok(Value::Index(n)),
            Some(Token::RParen) => Err(SeqError::parse("unexpected ')'")),
            None => Err(SeqError::parse("unexpected end of input")),
        }
    }

    fn parse_elements(&mut self, kind: Kind) -> Result<Value> {
        if self.depth >= MAX_NESTING {
            return Err(SeqError::parse(format!(
                "sequences nested deeper than {MAX_NESTING} levels"
            )));
        }
        self.depth += 1;
        let value = self.parse_element_list(kind);
        self.depth -= 1;
        value
    }

    fn parse_element_list(&mut self, kind: Kind) -> Result<Value> {
        let mut elements = Vec::new();
        loop {
            match self.tokens.get(self.position) {
                Some(Token::RParen) => {
                    self.position += 1;
                    return Ok(Value::Seq(Seq::new(kind, elements)));
                }
                Some(_) => elements.push(self.parse_value()?),
                None => return Err(SeqError::parse(format!("unclosed sequence of kind {kind}"))),
            }
        }
    }
}

/// Read exactly one value.
///
/// `(a b)` is a list, `#row(a b)` a sequence of kind `row`, digits are
/// indices and every other word is a symbol.
pub fn parse(input: &str) -> Result<Value> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser {
        tokens,
        position: 0,
        depth: 0,
    };
    let value = parser.parse_value()?;
    if parser.position < parser.tokens.len() {
        return Err(SeqError::parse(format!("trailing input after {value}")));
    }
    Ok(value)
}

/// Read exactly one value, which must be a sequence.
pub fn parse_seq(input: &str) -> Result<Seq> {
    match parse(input)? {
        Value::Seq(seq) => Ok(seq),
        other => Err(SeqError::shape("parse_seq", "a sequence", other)),
    }
}
