//! Evaluates scientific calculator expressions such as `10 + (3 * 4) ^ 2 - sqrt(81)`.
//!
//! An expression is validated, split into tokens, reordered into postfix
//! notation with the shunting-yard algorithm and finally evaluated on an
//! operand stack. Trigonometric functions work in degrees.

pub mod interpreter;

pub use interpreter::error::{ArithmeticError, CalcError, EvalError, SyntaxError};
pub use interpreter::{calculate, evaluate, to_postfix, validate};
