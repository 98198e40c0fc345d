mod infix_converter;

use crate::interpreter::error::SyntaxError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Lexeme;
use log::debug;

/// Parses the given infix lexemes into the equivalent postfix sequence,
/// which can be evaluated without regard to precedence or parentheses.
///
/// # Arguments
///
/// * `infix_lexemes`: The lexemes to parse, in infix order.
///
/// returns: The same lexemes without parentheses, in postfix order.
///
/// # Examples
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use scientific_calculator::interpreter::lexer::tokenize;
/// use scientific_calculator::interpreter::parser::parse;
/// use scientific_calculator::interpreter::tokens_to_string;
///
/// let postfix = parse(tokenize("3 + 5 * 2"))?;
/// assert_eq!(tokens_to_string(&postfix), "3 5 2 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_lexemes: Vec<Lexeme>) -> Result<Vec<Lexeme>, SyntaxError> {
    let postfix_lexemes = infix_to_postfix(infix_lexemes)?;
    debug!("Converted to postfix {:?}", postfix_lexemes);
    Ok(postfix_lexemes)
}
