use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Error: Cannot divide by zero!")]
    DivisionByZero,
    #[error("Error: Cannot calculate square root of negative number!")]
    NegativeSquareRoot,
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),
    #[error("Input closed")]
    InputClosed,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
