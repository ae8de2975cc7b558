use crate::domain::number::Number;
use crate::error::{CalcError, Result};

/// Parses a numeric operand typed by the user.
///
/// When `last_result` is provided, `L` (either case) stands for it.
pub fn parse_operand(input: &str, last_result: Option<f64>) -> Result<f64> {
    let trimmed = input.trim();
    if let Some(last) = last_result
        && trimmed.eq_ignore_ascii_case("l")
    {
        return Ok(last);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(trimmed.to_string()))
}

/// Builds the prompt for an operand, mentioning the `L` shortcut if offered.
pub fn operand_prompt(label: &str, last_result: Option<f64>) -> String {
    match last_result {
        Some(last) => format!("{label} (or 'L' for last result {}): ", Number(last)),
        None => format!("{label}: "),
    }
}
