use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{Lexeme, Token};
use log::trace;

/// Reorders infix lexemes into postfix order using the shunting-yard algorithm.
///
/// Missing operands are not detected here; they surface when the postfix
/// sequence is evaluated.
pub(crate) fn infix_to_postfix(infix: Vec<Lexeme>) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut operators: Vec<Lexeme> = Vec::new();
    let mut output: Vec<Lexeme> = Vec::with_capacity(infix.len());

    for lexeme in infix {
        match lexeme.token {
            Token::Literal(_) => output.push(lexeme),
            Token::Function(_) | Token::LeftParentheses => operators.push(lexeme),
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output, lexeme.offset)?
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, &operator);
                operators.push(lexeme);
            }
            Token::Identifier(name) => {
                return Err(SyntaxError::UnknownIdentifier {
                    name,
                    offset: lexeme.offset,
                })
            }
            Token::MalformedNumber(literal) => {
                return Err(SyntaxError::MalformedNumber {
                    literal,
                    offset: lexeme.offset,
                })
            }
            Token::Unexpected(character) => {
                return Err(SyntaxError::InvalidCharacter {
                    character,
                    offset: lexeme.offset,
                })
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Lexeme>,
    output: &mut Vec<Lexeme>,
) -> Result<(), SyntaxError> {
    while let Some(operator) = operators.pop() {
        if operator.token == Token::LeftParentheses {
            return Err(SyntaxError::UnmatchedOpeningParenthesis {
                offset: operator.offset,
            });
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Lexeme>,
    output: &mut Vec<Lexeme>,
    offset: usize,
) -> Result<(), SyntaxError> {
    loop {
        let top_of_operator_stack = operators
            .pop()
            .ok_or(SyntaxError::UnmatchedClosingParenthesis { offset })?;
        if top_of_operator_stack.token == Token::LeftParentheses {
            // Discard the open parenthesis.
            break;
        }
        output.push(top_of_operator_stack);
    }

    // A function directly before the parenthesis owns the group as its argument.
    if let Some(Token::Function(function)) = operators.last().map(|lexeme| &lexeme.token) {
        trace!("Closing argument of '{}'", function);
        if let Some(function_lexeme) = operators.pop() {
            output.push(function_lexeme);
        }
    }
    Ok(())
}

/// Moves every stacked operator that must be applied before `operator` to the output.
fn parse_operator_token(
    operators: &mut Vec<Lexeme>,
    output: &mut Vec<Lexeme>,
    operator: &BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.last() {
        // Parentheses and pending functions stop the search.
        let other_operator = match top_of_operator_stack.token {
            Token::Operator(other_operator) => other_operator,
            _ => break,
        };
        if !other_operator.precedence_ge(operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }
}
