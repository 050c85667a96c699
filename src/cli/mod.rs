//! Command-line interface definitions.
//!
//! - `Cli`: argument definitions via clap
//! - `Display`: formatted terminal output with colors and status
//! - `MenuSession`: the interactive menu loop

mod commands;
mod display;
mod interactive;

pub use commands::{Cli, DEFAULT_TASK_FILE};
pub use display::Display;
pub use interactive::{MenuChoice, MenuSession};
