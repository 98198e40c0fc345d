use thiserror::Error;

/// The input is not a well-formed expression.
///
/// Offsets are byte offsets into the expression that was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid character '{character}' at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("unmatched closing parenthesis at offset {offset}")]
    UnmatchedClosingParenthesis { offset: usize },

    #[error("unmatched opening parenthesis at offset {offset}")]
    UnmatchedOpeningParenthesis { offset: usize },

    #[error("malformed number literal '{literal}' at offset {offset}")]
    MalformedNumber { literal: String, offset: usize },

    #[error("unrecognized identifier '{name}' at offset {offset}")]
    UnknownIdentifier { name: String, offset: usize },
}

/// An operation was applied to operands it is not defined for.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("division by zero ({dividend} / 0)")]
    DivisionByZero { dividend: f64 },

    #[error("factorial of negative number {operand}")]
    NegativeFactorial { operand: f64 },

    #[error("{operand} is outside the domain of '{operation}'")]
    Domain { operation: String, operand: f64 },

    #[error("result of '{operation}' is too large to represent")]
    Overflow { operation: String },
}

/// Evaluating a postfix sequence failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("'{token}' needs {required} operand(s) but only {available} available")]
    StackUnderflow {
        token: String,
        required: usize,
        available: usize,
    },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("expression left {remaining} value(s) on the stack instead of one")]
    MalformedResult { remaining: usize },

    #[error("unexpected token '{token}' in postfix expression")]
    UnexpectedToken { token: String },
}

/// The first failure of any stage of [`calculate`](crate::interpreter::calculate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
