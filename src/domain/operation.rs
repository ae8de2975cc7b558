use crate::domain::number::Number;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One arithmetic request with its operands.
///
/// `Display` renders the symbolic description used in history entries and
/// result lines, e.g. `2.0 × 3.0`, `√16.0` or `50.0% of 200.0`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { a: f64, b: f64 },
    Subtract { a: f64, b: f64 },
    Multiply { a: f64, b: f64 },
    Divide { a: f64, b: f64 },
    Power { base: f64, exponent: f64 },
    SquareRoot { value: f64 },
    Percentage { value: f64, percent: f64 },
}

impl Operation {
    /// Computes the result.
    ///
    /// Only division by zero and the square root of a negative number are
    /// rejected. `Power` and `Percentage` accept any input and may produce
    /// `inf` or `NaN`.
    pub fn evaluate(&self) -> Result<f64> {
        match *self {
            Operation::Add { a, b } => Ok(a + b),
            Operation::Subtract { a, b } => Ok(a - b),
            Operation::Multiply { a, b } => Ok(a * b),
            Operation::Divide { b, .. } if b == 0.0 => Err(CalcError::DivisionByZero),
            Operation::Divide { a, b } => Ok(a / b),
            Operation::Power { base, exponent } => Ok(base.powf(exponent)),
            Operation::SquareRoot { value } if value < 0.0 => Err(CalcError::NegativeSquareRoot),
            Operation::SquareRoot { value } => Ok(value.sqrt()),
            Operation::Percentage { value, percent } => Ok((value * percent) / 100.0),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "+",
            Operation::Subtract { .. } => "-",
            Operation::Multiply { .. } => "×",
            Operation::Divide { .. } => "÷",
            Operation::Power { .. } => "^",
            Operation::SquareRoot { .. } => "√",
            Operation::Percentage { .. } => "% of",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();
        match *self {
            Operation::Add { a, b }
            | Operation::Subtract { a, b }
            | Operation::Multiply { a, b }
            | Operation::Divide { a, b } => write!(f, "{} {} {}", Number(a), symbol, Number(b)),
            Operation::Power { base, exponent } => {
                write!(f, "{} {} {}", Number(base), symbol, Number(exponent))
            }
            Operation::SquareRoot { value } => write!(f, "{}{}", symbol, Number(value)),
            Operation::Percentage { value, percent } => {
                write!(f, "{}{} {}", Number(percent), symbol, Number(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_descriptions() {
        assert_eq!(Operation::Add { a: 2.0, b: 3.0 }.to_string(), "2.0 + 3.0");
        assert_eq!(Operation::Subtract { a: 2.0, b: 3.5 }.to_string(), "2.0 - 3.5");
        assert_eq!(Operation::Multiply { a: 2.0, b: 3.0 }.to_string(), "2.0 × 3.0");
        assert_eq!(Operation::Divide { a: 9.0, b: 3.0 }.to_string(), "9.0 ÷ 3.0");
        assert_eq!(
            Operation::Power { base: 2.0, exponent: 8.0 }.to_string(),
            "2.0 ^ 8.0"
        );
    }

    #[test]
    fn test_unary_and_percentage_descriptions() {
        assert_eq!(Operation::SquareRoot { value: 16.0 }.to_string(), "√16.0");
        assert_eq!(
            Operation::Percentage { value: 200.0, percent: 50.0 }.to_string(),
            "50.0% of 200.0"
        );
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let result = Operation::Divide { a: 1.0, b: 0.0 }.evaluate();
        assert!(matches!(result, Err(CalcError::DivisionByZero)));

        let result = Operation::Divide { a: 1.0, b: -0.0 }.evaluate();
        assert!(matches!(result, Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_negative_square_root_is_rejected() {
        let result = Operation::SquareRoot { value: -4.0 }.evaluate();
        assert!(matches!(result, Err(CalcError::NegativeSquareRoot)));
        assert_eq!(Operation::SquareRoot { value: 16.0 }.evaluate().unwrap(), 4.0);
    }

    #[test]
    fn test_power_has_no_domain_restriction() {
        let result = Operation::Power { base: 0.0, exponent: -1.0 }.evaluate().unwrap();
        assert_eq!(result, f64::INFINITY);

        let result = Operation::Power { base: -8.0, exponent: 0.5 }.evaluate().unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_percentage() {
        let result = Operation::Percentage { value: 200.0, percent: 50.0 }.evaluate();
        assert_eq!(result.unwrap(), 100.0);
    }

    #[test]
    fn test_operation_serialization_is_tagged() {
        let json = serde_json::to_value(Operation::SquareRoot { value: 9.0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "op": "square_root", "value": 9.0 }));
    }
}
