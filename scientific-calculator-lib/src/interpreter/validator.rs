use crate::interpreter::error::SyntaxError;
use log::trace;

static SYMBOLS: [char; 9] = ['+', '-', '*', '/', '^', '(', ')', '.', ' '];

/// Checks that the expression only contains legal characters and that its
/// parentheses are balanced.
///
/// # Arguments
///
/// * `expression`: The raw infix expression.
///
/// returns: The first problem found, scanning left to right.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::validator::validate;
/// use scientific_calculator::interpreter::error::SyntaxError;
///
/// assert!(validate("sqrt(2 * (3 + 4))").is_ok());
/// assert_eq!(
///     validate("(1 + 2"),
///     Err(SyntaxError::UnmatchedOpeningParenthesis { offset: 0 })
/// );
/// ```
pub fn validate(expression: &str) -> Result<(), SyntaxError> {
    let mut open_parentheses: Vec<usize> = Vec::new();

    for (offset, character) in expression.char_indices() {
        if !is_legal(character) {
            return Err(SyntaxError::InvalidCharacter { character, offset });
        }
        match character {
            '(' => open_parentheses.push(offset),
            ')' => {
                open_parentheses
                    .pop()
                    .ok_or(SyntaxError::UnmatchedClosingParenthesis { offset })?;
            }
            _ => {}
        }
    }

    // Report the innermost parenthesis that was left open.
    match open_parentheses.pop() {
        Some(offset) => Err(SyntaxError::UnmatchedOpeningParenthesis { offset }),
        None => {
            trace!("'{}' is valid", expression);
            Ok(())
        }
    }
}

fn is_legal(character: char) -> bool {
    character.is_ascii_digit() || character.is_alphabetic() || SYMBOLS.contains(&character)
}
