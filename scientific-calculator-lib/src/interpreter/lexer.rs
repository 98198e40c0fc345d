use crate::interpreter::token::{Lexeme, Token};
use itertools::Itertools;
use log::debug;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits the expression into tokens, skipping whitespace.
///
/// Never fails: anything that is not a valid token is kept as an
/// [`Token::Identifier`], [`Token::MalformedNumber`] or [`Token::Unexpected`]
/// so that later stages can report it with its position.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::lexer::tokenize;
/// use scientific_calculator::interpreter::token::Token;
///
/// let lexemes = tokenize("sqrt(81)");
/// assert_eq!(lexemes[2].token, Token::Literal(81.0));
/// assert_eq!(lexemes[2].offset, 5);
/// ```
pub fn tokenize(expression: &str) -> Vec<Lexeme> {
    let mut chars = expression.char_indices().peekable();
    let mut lexemes = Vec::new();

    while let Some(&(start, character)) = chars.peek() {
        if character.is_whitespace() {
            chars.next();
            continue;
        }

        let lexeme = if character.is_alphabetic() {
            let text = take_run(expression, &mut chars, |c| c.is_alphanumeric() || c == '_');
            Lexeme::new(Token::from_word(text), text, start)
        } else if character.is_ascii_digit() || character == '.' {
            let text = take_run(expression, &mut chars, |c| c.is_ascii_digit() || c == '.');
            Lexeme::new(Token::from_number(text), text, start)
        } else {
            chars.next();
            Lexeme::new(Token::from_symbol(character), character, start)
        };
        lexemes.push(lexeme);
    }

    debug!("Tokenized '{}' into {:?}", expression, lexemes);
    lexemes
}

/// Consumes the longest run of characters matching `accept` and returns it as a slice.
fn take_run<'a>(
    expression: &'a str,
    chars: &mut Peekable<CharIndices<'a>>,
    accept: impl Fn(char) -> bool,
) -> &'a str {
    let start = match chars.peek() {
        Some(&(offset, _)) => offset,
        None => return "",
    };
    chars.peeking_take_while(|&(_, c)| accept(c)).for_each(drop);
    let end = chars
        .peek()
        .map(|&(offset, _)| offset)
        .unwrap_or(expression.len());
    &expression[start..end]
}
