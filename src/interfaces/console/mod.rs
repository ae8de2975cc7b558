//! Text-menu front end: menu rendering, operand input and the session loop.

pub mod input;
pub mod menu;
pub mod shell;

pub use shell::{Shell, ShellConfig};
