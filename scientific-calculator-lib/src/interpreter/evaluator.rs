use crate::interpreter::error::EvalError;
use crate::interpreter::operator::Function;
use crate::interpreter::token::{Lexeme, Token};
use log::{debug, trace};

/// Evaluates lexemes given in postfix order.
///
/// # Arguments
///
/// * `postfix_lexemes`: The sequence to evaluate, e.g. the output of
///   [`parse`](crate::interpreter::parser::parse).
///
/// returns: The single value left once every lexeme has been applied.
///
/// # Examples
///
/// ```
/// # fn main() -> anyhow::Result<()> {
/// use scientific_calculator::interpreter::evaluator::evaluate_tokens;
/// use scientific_calculator::interpreter::lexer::tokenize;
///
/// let result = evaluate_tokens(tokenize("3 5 2 * +"))?;
/// assert_eq!(result, 13.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_tokens(postfix_lexemes: Vec<Lexeme>) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for lexeme in postfix_lexemes {
        match lexeme.token {
            Token::Literal(value) => operands.push(value),
            Token::Function(function) => {
                let operand = pop_operands::<1>(&mut operands, &lexeme)?;
                operands.push(function.evaluate(operand[0])?);
            }
            Token::Identifier(ref name) => match Function::from_postfix_name(name) {
                Some(function) => {
                    let operand = pop_operands::<1>(&mut operands, &lexeme)?;
                    operands.push(function.evaluate(operand[0])?);
                }
                None => return Err(unexpected(&lexeme)),
            },
            Token::Operator(operator) => {
                let [left_operand, right_operand] = pop_operands::<2>(&mut operands, &lexeme)?;
                operands.push(operator.evaluate(left_operand, right_operand)?);
            }
            Token::LeftParentheses
            | Token::RightParentheses
            | Token::MalformedNumber(_)
            | Token::Unexpected(_) => return Err(unexpected(&lexeme)),
        }
        trace!("Applied '{}', operands are now {:?}", lexeme, operands);
    }

    match operands.as_slice() {
        [result] => {
            debug!("Evaluated to {}", result);
            Ok(*result)
        }
        _ => Err(EvalError::MalformedResult {
            remaining: operands.len(),
        }),
    }
}

/// Pops the `N` topmost operands, returned in the order they were pushed.
fn pop_operands<const N: usize>(
    operands: &mut Vec<f64>,
    lexeme: &Lexeme,
) -> Result<[f64; N], EvalError> {
    let available = operands.len();
    let underflow = || EvalError::StackUnderflow {
        token: lexeme.text.clone(),
        required: N,
        available,
    };

    let mut popped = [0.0; N];
    for slot in popped.iter_mut().rev() {
        *slot = operands.pop().ok_or_else(underflow)?;
    }
    Ok(popped)
}

fn unexpected(lexeme: &Lexeme) -> EvalError {
    EvalError::UnexpectedToken {
        token: lexeme.text.clone(),
    }
}
