use crate::interpreter::error::ArithmeticError;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// A named function taking a single argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Log10,
    Sqrt,
    Exp,
    Factorial,
    Round,
    Floor,
    Ceil,
    Exp2,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    /// Whether `self`, sitting on the operator stack, is applied before `incoming`.
    ///
    /// Equal precedence pops, so every operator groups left to right, `^` included:
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    pub(crate) fn precedence_ge(&self, incoming: &Self) -> bool {
        self.precedence().ge(&incoming.precedence())
    }

    /// Applies the operator to `a` (left operand) and `b` (right operand).
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { dividend: a });
                }
                a / b
            }
            BinaryOperator::Exponentiate => {
                if a == 0.0 && b < 0.0 {
                    return Err(ArithmeticError::DivisionByZero { dividend: 1.0 });
                }
                a.powf(b)
            }
        };
        check_finite(&self.to_string(), a, result)
    }
}

impl Function {
    /// Looks up one of the function names accepted in infix expressions.
    pub fn from_keyword(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "asin" => Some(Function::Asin),
            "acos" => Some(Function::Acos),
            "atan" => Some(Function::Atan),
            "log" => Some(Function::Log),
            "log10" => Some(Function::Log10),
            "sqrt" => Some(Function::Sqrt),
            "exp" => Some(Function::Exp),
            "factorial" => Some(Function::Factorial),
            "round" => Some(Function::Round),
            "floor" => Some(Function::Floor),
            "ceil" => Some(Function::Ceil),
            _ => None,
        }
    }

    /// Looks up a function name found in a postfix sequence, which additionally allows `exp2`.
    pub fn from_postfix_name(name: &str) -> Option<Function> {
        match name {
            "exp2" => Some(Function::Exp2),
            name => Function::from_keyword(name),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Log10 => "log10",
            Function::Sqrt => "sqrt",
            Function::Exp => "exp",
            Function::Factorial => "factorial",
            Function::Round => "round",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Exp2 => "exp2",
        }
    }

    /// Applies the function to `x`.
    ///
    /// Forward trigonometric functions take degrees and inverse ones return degrees.
    pub fn evaluate(&self, x: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Function::Sin => x.to_radians().sin(),
            Function::Cos => x.to_radians().cos(),
            Function::Tan => x.to_radians().tan(),
            Function::Asin => self.require(x, (-1.0..=1.0).contains(&x))?.asin().to_degrees(),
            Function::Acos => self.require(x, (-1.0..=1.0).contains(&x))?.acos().to_degrees(),
            Function::Atan => x.atan().to_degrees(),
            Function::Log => self.require(x, x > 0.0)?.ln(),
            Function::Log10 => self.require(x, x > 0.0)?.log10(),
            Function::Sqrt => self.require(x, x >= 0.0)?.sqrt(),
            Function::Exp => x.exp(),
            Function::Exp2 => x.exp2(),
            Function::Factorial => factorial(x)?,
            Function::Round => x.round_ties_even(),
            Function::Floor => x.floor(),
            Function::Ceil => x.ceil(),
        };
        check_finite(self.name(), x, result)
    }

    fn require(&self, x: f64, in_domain: bool) -> Result<f64, ArithmeticError> {
        if in_domain {
            Ok(x)
        } else {
            Err(ArithmeticError::Domain {
                operation: self.name().to_string(),
                operand: x,
            })
        }
    }
}

fn factorial(x: f64) -> Result<f64, ArithmeticError> {
    let n = x.trunc();
    if n < 0.0 {
        return Err(ArithmeticError::NegativeFactorial { operand: x });
    }
    // Past 170! the product is no longer representable; check_finite reports it.
    let mut product: f64 = 1.0;
    let mut factor = 2.0;
    while factor <= n && product.is_finite() {
        product *= factor;
        factor += 1.0;
    }
    Ok(product)
}

fn check_finite(operation: &str, operand: f64, result: f64) -> Result<f64, ArithmeticError> {
    if result.is_nan() {
        Err(ArithmeticError::Domain {
            operation: operation.to_string(),
            operand,
        })
    } else if result.is_infinite() {
        Err(ArithmeticError::Overflow {
            operation: operation.to_string(),
        })
    } else {
        Ok(result)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
