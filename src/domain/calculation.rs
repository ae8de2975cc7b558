use crate::domain::number::Number;
use crate::domain::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed operation and its result, as kept in the history log.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Calculation {
    pub operation: Operation,
    pub result: Number,
}

impl Calculation {
    pub fn new(operation: Operation, result: f64) -> Self {
        Self {
            operation,
            result: Number(result),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.operation, self.result)
    }
}
