//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, the interval prompt, and the
//! conversion command itself.

mod args;
mod commands;
mod enums;
mod prompt;

pub use args::Args;
pub use commands::run;
