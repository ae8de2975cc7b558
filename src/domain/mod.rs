//! Domain layer: operations, their results and the storage port for history.

pub mod calculation;
pub mod number;
pub mod operation;
pub mod ports;
