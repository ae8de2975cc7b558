use crate::domain::calculation::Calculation;
use crate::domain::operation::Operation;
use crate::domain::ports::HistoryStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryHistory;
use std::io::{self, Write};
use tracing::{debug, info};

/// Number of history entries shown by `show_history` unless configured.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

const RULE: &str = "========================================";

/// The stateful calculator.
///
/// `Calculator` holds the memory slot, the result of the last successful
/// operation and the log of completed calculations. Operations that fail
/// leave all three untouched.
pub struct Calculator {
    memory: f64,
    history: HistoryStoreBox,
    last_result: f64,
    display_limit: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with an empty in-memory history.
    pub fn new() -> Self {
        Self::with_history(Box::new(InMemoryHistory::new()))
    }

    /// Creates a calculator on top of the given history store.
    ///
    /// # Arguments
    ///
    /// * `history` - The store completed calculations are appended to.
    pub fn with_history(history: HistoryStoreBox) -> Self {
        Self {
            memory: 0.0,
            history,
            last_result: 0.0,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    /// Sets how many recent entries `show_history` prints.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn add(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Add { a, b })
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Subtract { a, b })
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Multiply { a, b })
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Divide { a, b })
    }

    pub fn power(&mut self, base: f64, exponent: f64) -> Result<f64> {
        self.apply(Operation::Power { base, exponent })
    }

    pub fn square_root(&mut self, value: f64) -> Result<f64> {
        self.apply(Operation::SquareRoot { value })
    }

    pub fn percentage(&mut self, value: f64, percent: f64) -> Result<f64> {
        self.apply(Operation::Percentage { value, percent })
    }

    /// Evaluates an operation and, on success, records it.
    ///
    /// A successful result is appended to history and becomes the last
    /// result. Domain errors are returned as-is with no state change.
    pub fn apply(&mut self, operation: Operation) -> Result<f64> {
        match operation.evaluate() {
            Ok(result) => {
                let calculation = Calculation::new(operation, result);
                debug!(entry = %calculation, "calculation recorded");
                self.history.append(calculation);
                self.last_result = result;
                Ok(result)
            }
            Err(e) => {
                info!(%operation, error = %e, "operation rejected");
                Err(e)
            }
        }
    }

    pub fn store_memory(&mut self, value: f64) {
        debug!(value, "memory stored");
        self.memory = value;
    }

    pub fn recall_memory(&self) -> f64 {
        self.memory
    }

    pub fn clear_memory(&mut self) {
        self.memory = 0.0;
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The entries `show_history` would print, oldest first.
    pub fn recent_history(&self) -> Vec<Calculation> {
        self.history.recent(self.display_limit)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Writes the most recent calculations, numbered from 1.
    pub fn show_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.has_history() {
            writeln!(out, "\nNo calculations yet!")?;
            return Ok(());
        }

        writeln!(out, "\n{RULE}")?;
        writeln!(out, "CALCULATION HISTORY")?;
        writeln!(out, "{RULE}")?;
        for (i, calculation) in self.recent_history().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, calculation)?;
        }
        writeln!(out, "{RULE}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::number::Number;
    use crate::error::CalcError;

    fn history_output(calc: &Calculator) -> String {
        let mut out = Vec::new();
        calc.show_history(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_basic_operations_update_state() {
        let mut calc = Calculator::new();

        assert_eq!(calc.add(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(calc.subtract(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(calc.multiply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(calc.last_result(), 6.0);
        assert_eq!(calc.history_len(), 3);
    }

    #[test]
    fn test_divide() {
        let mut calc = Calculator::new();

        assert_eq!(calc.divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(calc.history_len(), 1);
        assert_eq!(calc.last_result(), 5.0);
        assert_eq!(calc.recent_history()[0].to_string(), "10.0 ÷ 2.0 = 5.0");
    }

    #[test]
    fn test_divide_by_zero_leaves_state_untouched() {
        let mut calc = Calculator::new();
        calc.add(1.0, 1.0).unwrap();

        let result = calc.divide(7.0, 0.0);

        assert!(matches!(result, Err(CalcError::DivisionByZero)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Error: Cannot divide by zero!"
        );
        assert_eq!(calc.last_result(), 2.0);
        assert_eq!(calc.history_len(), 1);
    }

    #[test]
    fn test_square_root() {
        let mut calc = Calculator::new();

        let result = calc.square_root(-4.0);
        assert!(matches!(result, Err(CalcError::NegativeSquareRoot)));
        assert!(!calc.has_history());
        assert_eq!(calc.last_result(), 0.0);

        assert_eq!(calc.square_root(16.0).unwrap(), 4.0);
        assert_eq!(calc.recent_history()[0].to_string(), "√16.0 = 4.0");
    }

    #[test]
    fn test_power_and_percentage() {
        let mut calc = Calculator::new();

        assert_eq!(calc.power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(calc.percentage(200.0, 50.0).unwrap(), 100.0);
        assert_eq!(calc.power(0.0, -1.0).unwrap(), f64::INFINITY);
        assert_eq!(calc.history_len(), 3);
        assert_eq!(calc.last_result(), f64::INFINITY);
    }

    #[test]
    fn test_memory_round_trip() {
        let mut calc = Calculator::new();
        assert_eq!(calc.recall_memory(), 0.0);

        calc.store_memory(7.0);
        assert_eq!(calc.recall_memory(), 7.0);

        calc.clear_memory();
        assert_eq!(calc.recall_memory(), 0.0);
    }

    #[test]
    fn test_memory_does_not_touch_history() {
        let mut calc = Calculator::new();
        calc.store_memory(3.5);

        assert!(!calc.has_history());
        assert_eq!(calc.last_result(), 0.0);
    }

    #[test]
    fn test_clear_history_keeps_last_result() {
        let mut calc = Calculator::new();
        calc.multiply(4.0, 4.0).unwrap();
        calc.clear_history();

        assert_eq!(calc.history_len(), 0);
        assert_eq!(calc.last_result(), 16.0);
    }

    #[test]
    fn test_show_history_empty() {
        let calc = Calculator::new();
        assert_eq!(history_output(&calc), "\nNo calculations yet!\n");
    }

    #[test]
    fn test_show_history_shows_last_ten() {
        let mut calc = Calculator::new();
        for i in 1..=12 {
            calc.add(i as f64, 0.0).unwrap();
        }

        let output = history_output(&calc);
        let entries: Vec<&str> = output
            .lines()
            .filter(|line| line.contains(" = "))
            .collect();

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], "1. 3.0 + 0.0 = 3.0");
        assert_eq!(entries[9], "10. 12.0 + 0.0 = 12.0");
        assert!(output.contains("CALCULATION HISTORY"));
        assert_eq!(calc.history_len(), 12);
    }

    #[test]
    fn test_custom_display_limit() {
        let mut calc = Calculator::new().with_display_limit(3);
        for i in 1..=5 {
            calc.add(i as f64, 1.0).unwrap();
        }

        let recent = calc.recent_history();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].result, Number(4.0));
    }
}
