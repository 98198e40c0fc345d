pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;
pub mod validator;

use crate::interpreter::error::{CalcError, EvalError, SyntaxError};
use crate::interpreter::token::Lexeme;
use itertools::Itertools;
use log::debug;

pub use validator::validate;

/// Converts an infix expression to postfix notation.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The lexemes of the expression in postfix order, separated by single spaces.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::to_postfix;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = to_postfix("3 + 5 * 2")?;
/// assert_eq!(postfix, "3 5 2 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<String, SyntaxError> {
    validate(expression)?;
    let postfix_lexemes = parser::parse(lexer::tokenize(expression))?;
    Ok(tokens_to_string(&postfix_lexemes))
}

/// Evaluates an expression written in postfix notation.
///
/// # Arguments
///
/// * `postfix`: Whitespace-separated numbers, operators and function names.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let result = evaluate("3 5 2 * +")?;
/// assert_eq!(result, 13.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(postfix: &str) -> Result<f64, EvalError> {
    evaluator::evaluate_tokens(lexer::tokenize(postfix))
}

/// Validates, converts and evaluates an infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or the first error encountered.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let result = calculate("factorial(5) / (2 * 2)")?;
/// assert_eq!(result, 30.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    validate(expression)?;
    let postfix_lexemes = parser::parse(lexer::tokenize(expression))?;
    let result = evaluator::evaluate_tokens(postfix_lexemes)?;
    debug!("'{}' = {}", expression, result);
    Ok(result)
}

/// Joins the source text of the given lexemes with single spaces.
///
/// # Examples
///
/// ```
/// use scientific_calculator::interpreter::lexer::tokenize;
/// use scientific_calculator::interpreter::tokens_to_string;
///
/// let lexemes = tokenize("sqrt(2.50)+1");
/// assert_eq!(tokens_to_string(&lexemes), "sqrt ( 2.50 ) + 1");
/// ```
pub fn tokens_to_string(lexemes: &[Lexeme]) -> String {
    lexemes.iter().map(|lexeme| lexeme.text.as_str()).join(" ")
}


#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::ArithmeticError;
    use crate::interpreter::test_utils::assert_close;
    use parameterized_macro::parameterized;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Deterministic linear congruential generator for reproducible expressions.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn below(&mut self, bound: u64) -> u64 {
            self.next() % bound
        }
    }

    /// Builds a random `+ - * /` expression and its value computed directly.
    ///
    /// Returns `None` when a division by zero was generated.
    fn random_expression(random: &mut Lcg, depth: u32) -> Option<(String, f64)> {
        if depth == 0 || random.below(4) == 0 {
            let value = random.below(20) as f64 + random.below(4) as f64 * 0.25;
            return Some((value.to_string(), value));
        }

        let (left_text, left_value) = random_expression(random, depth - 1)?;
        let (right_text, right_value) = random_expression(random, depth - 1)?;
        let (symbol, value) = match random.below(4) {
            0 => ('+', left_value + right_value),
            1 => ('-', left_value - right_value),
            2 => ('*', left_value * right_value),
            _ if right_value == 0.0 => return None,
            _ => ('/', left_value / right_value),
        };
        Some((format!("({} {} {})", left_text, symbol, right_text), value))
    }

    #[test]
    fn generated_arithmetic_matches_direct_evaluation() {
        init_logger();
        let mut random = Lcg(42);
        let mut checked = 0;

        while checked < 2000 {
            let (expression, expected) = match random_expression(&mut random, 5) {
                Some(generated) => generated,
                None => continue,
            };
            let actual = calculate(&expression)
                .unwrap_or_else(|error| panic!("'{}' failed: {}", expression, error));

            assert_close(actual, expected);
            checked += 1;
        }
    }

    #[test]
    fn generated_arithmetic_without_redundant_parentheses_respects_precedence() {
        let mut random = Lcg(7);

        for _ in 0..500 {
            let operands: Vec<f64> = (0..4).map(|_| random.below(9) as f64 + 1.0).collect();
            let symbols: Vec<char> = (0..3)
                .map(|_| ['+', '-', '*', '/'][random.below(4) as usize])
                .collect();

            let expression = format!(
                "{} {} {} {} {} {} {}",
                operands[0], symbols[0], operands[1], symbols[1], operands[2], symbols[2], operands[3]
            );
            let expected = evaluate_with_precedence(&operands, &symbols);

            assert_close(calculate(&expression).unwrap(), expected);
        }
    }

    /// Folds products and quotients into terms first, then sums the terms left to right.
    fn evaluate_with_precedence(operands: &[f64], symbols: &[char]) -> f64 {
        let mut terms = vec![operands[0]];
        let mut signs = vec![1.0];
        for (symbol, operand) in symbols.iter().zip(&operands[1..]) {
            match symbol {
                '*' => *terms.last_mut().unwrap() *= operand,
                '/' => *terms.last_mut().unwrap() /= operand,
                '+' => {
                    terms.push(*operand);
                    signs.push(1.0);
                }
                _ => {
                    terms.push(*operand);
                    signs.push(-1.0);
                }
            }
        }
        terms.iter().zip(&signs).map(|(term, sign)| term * sign).sum()
    }

    #[test]
    fn simple_expression_converts_to_postfix() {
        init_logger();
        assert_eq!(to_postfix("3 + 5 * 2").unwrap(), "3 5 2 * +");
    }

    #[test]
    fn simple_postfix_evaluates() {
        init_logger();
        assert_eq!(evaluate("3 5 2 * +").unwrap(), 13.0);
    }

    #[test]
    fn complex_expression_postfix_evaluates_to_result() {
        init_logger();
        let postfix = to_postfix("10 + (3 * 4) ^ 2 - sqrt(81)").unwrap();

        assert_eq!(postfix, "10 3 4 * 2 ^ + 81 sqrt -");
        assert_eq!(evaluate(&postfix).unwrap(), 145.0);
    }

    #[parameterized(
    expression = {
    "3 + 5 * 2",
    "(3 + 5) * 2",
    "100 / 10 / 5",
    "7 - 2 - 1",
    "2 * (3 + 4) * 5",
    "((1 + 2) * (3 + 4)) / 7",
    "1.5 * 4 - .5",
    "2 ^ 10",
    "exp(0) + log10(100)",
    "factorial(5) / (2 * 2)",
    "round(2.5) + floor(1.7) + ceil(1.2)",
    },
    expected = {
    13.0,
    16.0,
    2.0,
    4.0,
    70.0,
    3.0,
    5.5,
    1024.0,
    3.0,
    30.0,
    5.0,
    }
    )]
    fn expression_calculates_to_expected(expression: &str, expected: f64) {
        init_logger();
        assert_close(calculate(expression).unwrap(), expected)
    }

    #[test]
    fn trigonometry_uses_degrees() {
        init_logger();
        assert_close(calculate("sin(30) + cos(60)").unwrap(), 1.0);
    }

    #[test]
    fn inverse_trigonometry_round_trips() {
        init_logger();
        let postfix = to_postfix("asin(sin(30))").unwrap();
        assert_close(evaluate(&postfix).unwrap(), 30.0);
    }

    #[parameterized(operator = { "+", "-", "*", "/", "^" })]
    fn operators_group_left_to_right(operator: &str) {
        let (a, b, c) = (2, 3, 4);
        let flat = calculate(&format!("{a} {operator} {b} {operator} {c}")).unwrap();
        let left = calculate(&format!("({a} {operator} {b}) {operator} {c}")).unwrap();
        let right = calculate(&format!("{a} {operator} ({b} {operator} {c})")).unwrap();

        assert_eq!(flat, left);
        if operator != "+" && operator != "*" {
            assert_ne!(flat, right);
        }
    }

    #[test]
    fn calculation_is_repeatable() {
        let expression = "exp(1) + log10(100) * sqrt(2)";
        let first = calculate(expression).unwrap();

        for _ in 0..10 {
            assert_eq!(calculate(expression).unwrap(), first);
        }
    }

    #[test]
    fn unbalanced_parentheses_are_syntax_errors() {
        assert_eq!(
            calculate("(1 + 2"),
            Err(CalcError::Syntax(
                SyntaxError::UnmatchedOpeningParenthesis { offset: 0 }
            ))
        );
        assert_eq!(
            calculate("1 + 2)"),
            Err(CalcError::Syntax(
                SyntaxError::UnmatchedClosingParenthesis { offset: 5 }
            ))
        );
    }

    #[test]
    fn validation_runs_before_conversion() {
        assert_eq!(
            to_postfix("1 + 2 $"),
            Err(SyntaxError::InvalidCharacter {
                character: '$',
                offset: 6
            })
        );
    }

    #[test]
    fn unknown_function_is_a_syntax_error() {
        assert_eq!(
            calculate("foo(2)"),
            Err(CalcError::Syntax(SyntaxError::UnknownIdentifier {
                name: "foo".to_string(),
                offset: 0
            }))
        );
    }

    #[test]
    fn division_by_zero_is_an_evaluation_error() {
        let error = calculate("1 / (2 - 2)").unwrap_err();

        assert_eq!(
            error,
            CalcError::Eval(EvalError::Arithmetic(
                ArithmeticError::DivisionByZero { dividend: 1.0 }
            ))
        );
        assert_eq!(
            error.to_string(),
            "evaluation error: division by zero (1 / 0)"
        );
    }

    #[test]
    fn missing_operand_is_reported_at_evaluation() {
        assert!(matches!(
            calculate("3 *"),
            Err(CalcError::Eval(EvalError::StackUnderflow { .. }))
        ));
    }

    #[test]
    fn empty_expression_has_no_result() {
        assert_eq!(
            calculate(""),
            Err(CalcError::Eval(EvalError::MalformedResult { remaining: 0 }))
        );
    }

    #[test]
    fn negative_factorial_is_an_evaluation_error() {
        assert!(matches!(
            calculate("factorial(0 - 3)"),
            Err(CalcError::Eval(EvalError::Arithmetic(
                ArithmeticError::NegativeFactorial { .. }
            )))
        ));
    }
}
