//! Command parsing.

mod command;

pub use command::{Command, EasterEgg, parse_command};
