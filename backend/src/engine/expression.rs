//! Tokenizer and recursive-descent evaluator for unit expressions.
//!
//! Grammar:
//!
//! ```text
//! expression := sum [ "to" sum ]
//! sum        := product { ("+" | "-") product }
//! product    := unary { ("*" | "/" | <juxtaposition>) unary }
//! unary      := "-" unary | "+" unary | power
//! power      := atom [ ("^" | "**") unary ]
//! atom       := number | identifier | "(" sum ")"
//! ```
//!
//! Juxtaposition is multiplication, so `5 meters` is `5 * meters` and
//! `100 km/h` is `(100 * km) / h`.

use logos::{Lexer, Logos};

use super::quantity::{CompoundUnit, Quantity};
use super::registry::UnitRegistry;
use super::{EngineError, EngineResult};

/// Deepest nesting of parentheses, signs and powers the evaluator accepts.
const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),

    #[regex(r"[\p{L}_°][\p{L}0-9_°²³]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    #[token("·")]
    #[token("×")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    #[token("**")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    Eof,
}

/// Parse a numeric literal, absorbing an exponent suffix.
///
/// An `e` only starts an exponent when digits follow, so `5eV` lexes as `5`
/// followed by `eV`. Malformed literals such as `1.2.3` are rejected.
fn parse_number(lex: &mut Lexer<TokenKind>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if matches!(rest.first(), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(rest.get(1), Some(b'+' | b'-')));
        let digits = rest[1 + sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 {
            lex.bump(1 + sign + digits);
        }
    }
    lex.slice().parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the source.
    pub position: usize,
}

/// Split `source` into tokens, ending with [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> EngineResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                position: span.start,
            }),
            Err(_) => {
                let text = lexer.slice();
                let message = if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    format!("invalid number '{}'", text)
                } else {
                    let c = text.chars().next().unwrap_or_default();
                    format!("unexpected character '{}'", c)
                };
                return Err(EngineError::Syntax {
                    message,
                    position: span.start,
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        position: source.len(),
    });
    Ok(tokens)
}

/// Evaluates a token stream against a registry.
pub struct Evaluator<'r> {
    registry: &'r UnitRegistry,
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r UnitRegistry, source: &str) -> EngineResult<Self> {
        Ok(Self {
            registry,
            tokens: tokenize(source)?,
            cursor: 0,
            depth: 0,
        })
    }

    /// Evaluate a full expression, honouring a trailing `to <unit>` clause.
    pub fn evaluate(mut self) -> EngineResult<Quantity> {
        if self.peek() == &TokenKind::Eof {
            return Err(self.error("empty expression"));
        }
        let quantity = self.sum()?;
        let result = if self.at_keyword("to") {
            self.cursor += 1;
            let target = self.sum()?;
            let target = as_unit(target, "conversion target")?;
            quantity.convert_to(&target)?
        } else {
            quantity
        };
        self.expect_end()?;
        Ok(result)
    }

    /// Evaluate a bare unit expression such as `m/s2` or `kg*m^2`.
    pub fn evaluate_unit(mut self) -> EngineResult<CompoundUnit> {
        if self.peek() == &TokenKind::Eof {
            return Err(self.error("empty unit"));
        }
        let quantity = self.sum()?;
        self.expect_end()?;
        as_unit(quantity, "unit")
    }

    fn sum(&mut self) -> EngineResult<Quantity> {
        let mut lhs = self.product()?;
        loop {
            match self.peek() {
                TokenKind::Plus => {
                    self.cursor += 1;
                    let rhs = self.product()?;
                    lhs = lhs.add(rhs)?;
                }
                TokenKind::Minus => {
                    self.cursor += 1;
                    let rhs = self.product()?;
                    lhs = lhs.subtract(rhs)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn product(&mut self) -> EngineResult<Quantity> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                TokenKind::Star => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    lhs = lhs.multiply(rhs)?;
                }
                TokenKind::Slash => {
                    self.cursor += 1;
                    let rhs = self.unary()?;
                    lhs = lhs.divide(rhs)?;
                }
                TokenKind::Number(_) | TokenKind::LParen => {
                    let rhs = self.unary()?;
                    lhs = lhs.multiply(rhs)?;
                }
                TokenKind::Ident(_) if !self.at_keyword("to") => {
                    let rhs = self.unary()?;
                    lhs = lhs.multiply(rhs)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> EngineResult<Quantity> {
        match self.peek() {
            TokenKind::Minus => {
                self.cursor += 1;
                Ok(self.nested(Self::unary)?.negate())
            }
            TokenKind::Plus => {
                self.cursor += 1;
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> EngineResult<Quantity> {
        let base = self.atom()?;
        if self.peek() != &TokenKind::Caret {
            return Ok(base);
        }
        self.cursor += 1;
        let position = self.position();
        let exponent = self.nested(Self::unary)?;
        if !exponent.is_number() {
            return Err(EngineError::Syntax {
                message: format!("exponent must be a plain number, got '{}'", exponent),
                position,
            });
        }
        base.pow(exponent.value)
    }

    fn atom(&mut self) -> EngineResult<Quantity> {
        let token = self.tokens[self.cursor].clone();
        match token.kind {
            TokenKind::Number(value) => {
                self.cursor += 1;
                Ok(Quantity::number(value))
            }
            TokenKind::Ident(name) => {
                self.cursor += 1;
                let unit = self.registry.resolve_name(&name)?;
                Ok(Quantity::new(1.0, unit))
            }
            TokenKind::LParen => {
                self.cursor += 1;
                let inner = self.nested(Self::sum)?;
                if self.peek() != &TokenKind::RParen {
                    return Err(self.error("expected ')'"));
                }
                self.cursor += 1;
                Ok(inner)
            }
            TokenKind::Eof => Err(self.error("unexpected end of input")),
            _ => Err(self.error("unexpected token")),
        }
    }

    fn nested<T>(&mut self, parse: fn(&mut Self) -> EngineResult<T>) -> EngineResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression nested too deeply"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> &TokenKind {
        &self.tokens[self.cursor].kind
    }

    fn position(&self) -> usize {
        self.tokens[self.cursor].position
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), TokenKind::Ident(name) if name == keyword)
    }

    fn expect_end(&self) -> EngineResult<()> {
        if self.peek() == &TokenKind::Eof {
            Ok(())
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }

    fn error(&self, message: &str) -> EngineError {
        EngineError::Syntax {
            message: message.to_string(),
            position: self.position(),
        }
    }
}

/// Accept a quantity as a unit only if its magnitude is exactly one.
fn as_unit(quantity: Quantity, role: &str) -> EngineResult<CompoundUnit> {
    if quantity.value != 1.0 {
        return Err(EngineError::NotAUnit(format!(
            "{} '{}' has a numeric factor",
            role, quantity
        )));
    }
    Ok(quantity.unit)
}
