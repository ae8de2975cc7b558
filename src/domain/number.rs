use serde::{Deserialize, Serialize};
use std::fmt;

/// A calculator operand or result as shown to the user.
///
/// Integral values keep their decimal point (`5.0`, not `5`), so every value
/// printed by the calculator reads as a floating-point number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug output of f64 is the shortest round-trip form and keeps ".0".
        write!(f, "{:?}", self.0)
    }
}
