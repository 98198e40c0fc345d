use crate::interpreter::operator::{BinaryOperator, Function};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Literal(f64),
    Operator(BinaryOperator),
    Function(Function),
    LeftParentheses,
    RightParentheses,
    /// A word that does not name a known function.
    Identifier(String),
    /// A run of digits and points that is not a finite decimal number.
    MalformedNumber(String),
    /// Any other character.
    Unexpected(char),
}

/// A token together with the text it was read from.
#[derive(Clone, PartialEq, Debug)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    /// Byte offset of the first character of `text` in the source.
    pub offset: usize,
}

impl Token {
    pub(crate) fn from_number(text: &str) -> Token {
        let points = text.chars().filter(|c| *c == '.').count();
        let digits = text.chars().filter(char::is_ascii_digit).count();
        if points > 1 || digits == 0 {
            return Token::MalformedNumber(text.to_string());
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Token::Literal(value),
            _ => Token::MalformedNumber(text.to_string()),
        }
    }

    pub(crate) fn from_word(text: &str) -> Token {
        match Function::from_keyword(text) {
            Some(function) => Token::Function(function),
            None => Token::Identifier(text.to_string()),
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Token {
        match symbol {
            '(' => Token::LeftParentheses,
            ')' => Token::RightParentheses,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => Token::Unexpected(symbol),
            },
        }
    }
}

impl Lexeme {
    pub fn new(token: Token, text: impl Into<String>, offset: usize) -> Lexeme {
        Lexeme {
            token,
            text: text.into(),
            offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::MalformedNumber(literal) => write!(f, "{}", literal),
            Token::Unexpected(character) => write!(f, "{}", character),
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
