use super::input::{operand_prompt, parse_operand};
use super::menu::{MenuChoice, render_menu};
use crate::application::engine::Calculator;
use crate::domain::number::Number;
use crate::domain::operation::Operation;
use crate::error::{CalcError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Runtime options for the interactive session.
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Wait for Enter after every action before showing the menu again.
    pub pause: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { pause: true }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over a `Calculator`.
///
/// Reads lines from `input` and writes everything the user sees to `output`.
/// The session ends on menu choice `0` or when `input` is exhausted.
pub struct Shell<R: BufRead, W: Write> {
    calculator: Calculator,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(calculator: Calculator, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            calculator,
            input,
            output,
            config,
        }
    }

    /// Runs the menu loop and hands back the calculator when the user leaves.
    pub fn run(mut self) -> Result<Calculator> {
        writeln!(self.output, "\n🔢 Welcome to Smart Calculator!")?;
        writeln!(
            self.output,
            "This calculator has memory and keeps your calculation history."
        )?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CalcError::InputClosed) => {
                    debug!("input closed, leaving session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        Ok(self.calculator)
    }

    fn step(&mut self) -> Result<Flow> {
        render_menu(&mut self.output)?;
        let line = self.read_line("\nSelect operation (0-13): ")?;

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                writeln!(self.output, "\n👋 Thank you for using Smart Calculator!")?;
                return Ok(Flow::Exit);
            }
            Ok(choice) => self.dispatch(choice)?,
            Err(e) => {
                debug!(error = %e, "menu selection rejected");
                writeln!(self.output, "\n⚠ Invalid choice! Please select 0-13.")?;
            }
        }

        if self.config.pause {
            self.read_line("\nPress Enter to continue...")?;
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => {
                let (a, b) = self.read_pair()?;
                self.calculate(Operation::Add { a, b })
            }
            MenuChoice::Subtract => {
                let (a, b) = self.read_pair()?;
                self.calculate(Operation::Subtract { a, b })
            }
            MenuChoice::Multiply => {
                let (a, b) = self.read_pair()?;
                self.calculate(Operation::Multiply { a, b })
            }
            MenuChoice::Divide => {
                let (a, b) = self.read_pair()?;
                self.calculate(Operation::Divide { a, b })
            }
            MenuChoice::Power => {
                let base = self.read_number("Base", true)?;
                let exponent = self.read_number("Exponent", false)?;
                self.calculate(Operation::Power { base, exponent })
            }
            MenuChoice::SquareRoot => {
                let value = self.read_number("Number", true)?;
                self.calculate(Operation::SquareRoot { value })
            }
            MenuChoice::Percentage => {
                let value = self.read_number("Number", true)?;
                let percent = self.read_number("Percentage", false)?;
                self.calculate(Operation::Percentage { value, percent })
            }
            MenuChoice::StoreMemory => {
                let value = self.read_number("Value to store", true)?;
                self.calculator.store_memory(value);
                writeln!(self.output, "✓ Stored {} in memory", Number(value))?;
                Ok(())
            }
            MenuChoice::RecallMemory => {
                let memory = self.calculator.recall_memory();
                writeln!(self.output, "\n💾 Memory: {}", Number(memory))?;
                Ok(())
            }
            MenuChoice::ClearMemory => {
                self.calculator.clear_memory();
                writeln!(self.output, "✓ Memory cleared")?;
                Ok(())
            }
            MenuChoice::ShowHistory => {
                self.calculator.show_history(&mut self.output)?;
                Ok(())
            }
            MenuChoice::ClearHistory => {
                self.calculator.clear_history();
                writeln!(self.output, "✓ History cleared")?;
                Ok(())
            }
            MenuChoice::UseLastResult => {
                if self.calculator.has_history() {
                    let last = self.calculator.last_result();
                    writeln!(self.output, "\n📋 Last result: {}", Number(last))?;
                } else {
                    writeln!(self.output, "\n⚠ No previous calculations!")?;
                }
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn calculate(&mut self, operation: Operation) -> Result<()> {
        match self.calculator.apply(operation) {
            Ok(result) => {
                writeln!(self.output, "\n✓ Result: {} = {}", operation, Number(result))?;
            }
            Err(e) => writeln!(self.output, "\n{e}")?,
        }
        Ok(())
    }

    fn read_pair(&mut self) -> Result<(f64, f64)> {
        let a = self.read_number("First number", true)?;
        let b = self.read_number("Second number", true)?;
        Ok((a, b))
    }

    /// Prompts until the input parses as a number.
    ///
    /// `allow_last` offers the `L` shortcut once there is at least one
    /// recorded calculation.
    fn read_number(&mut self, label: &str, allow_last: bool) -> Result<f64> {
        let last_result =
            (allow_last && self.calculator.has_history()).then(|| self.calculator.last_result());
        let prompt = operand_prompt(label, last_result);

        loop {
            let line = self.read_line(&prompt)?;
            match parse_operand(&line, last_result) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "operand rejected");
                    writeln!(self.output, "⚠ Invalid input! Please enter a valid number.")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CalcError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
