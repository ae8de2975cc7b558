use crate::error::CalcError;
use std::io::{self, Write};
use std::str::FromStr;

const RULE: &str = "========================================";

/// An entry of the main menu, selected by its number.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Exit,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Percentage,
    StoreMemory,
    RecallMemory,
    ClearMemory,
    ShowHistory,
    ClearHistory,
    UseLastResult,
}

impl MenuChoice {
    /// Menu entries in display order; `Exit` is listed last.
    pub const ALL: [MenuChoice; 14] = [
        MenuChoice::Add,
        MenuChoice::Subtract,
        MenuChoice::Multiply,
        MenuChoice::Divide,
        MenuChoice::Power,
        MenuChoice::SquareRoot,
        MenuChoice::Percentage,
        MenuChoice::StoreMemory,
        MenuChoice::RecallMemory,
        MenuChoice::ClearMemory,
        MenuChoice::ShowHistory,
        MenuChoice::ClearHistory,
        MenuChoice::UseLastResult,
        MenuChoice::Exit,
    ];

    pub fn id(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Add => 1,
            MenuChoice::Subtract => 2,
            MenuChoice::Multiply => 3,
            MenuChoice::Divide => 4,
            MenuChoice::Power => 5,
            MenuChoice::SquareRoot => 6,
            MenuChoice::Percentage => 7,
            MenuChoice::StoreMemory => 8,
            MenuChoice::RecallMemory => 9,
            MenuChoice::ClearMemory => 10,
            MenuChoice::ShowHistory => 11,
            MenuChoice::ClearHistory => 12,
            MenuChoice::UseLastResult => 13,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::Add => "Add (+)",
            MenuChoice::Subtract => "Subtract (-)",
            MenuChoice::Multiply => "Multiply (×)",
            MenuChoice::Divide => "Divide (÷)",
            MenuChoice::Power => "Power (^)",
            MenuChoice::SquareRoot => "Square Root (√)",
            MenuChoice::Percentage => "Percentage (%)",
            MenuChoice::StoreMemory => "Store in Memory (M+)",
            MenuChoice::RecallMemory => "Recall Memory (MR)",
            MenuChoice::ClearMemory => "Clear Memory (MC)",
            MenuChoice::ShowHistory => "Show History",
            MenuChoice::ClearHistory => "Clear History",
            MenuChoice::UseLastResult => "Use Last Result",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.id().to_string() == trimmed)
            .ok_or_else(|| CalcError::InvalidChoice(trimmed.to_string()))
    }
}

/// Writes the framed menu.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "     SMART CALCULATOR")?;
    writeln!(out, "{RULE}")?;
    for choice in MenuChoice::ALL {
        let number = format!("{}.", choice.id());
        writeln!(out, "{number:<4}{}", choice.label())?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}
