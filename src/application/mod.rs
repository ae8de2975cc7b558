//! Application layer containing the calculator state and its operations.
//!
//! This module defines the `Calculator` engine which owns the memory slot,
//! the last result and the calculation history. Every arithmetic request is
//! routed through `Calculator::apply` so history and last result stay in step.

pub mod engine;
