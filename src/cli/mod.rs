//! Command-line interface definitions and helpers.
//!
//! This module contains the argument parsing, enums, and command handlers
//! for both `hexpix` and `hexpix-view`.

mod args;
mod commands;
mod enums;

pub use args::{parse_dimension, parse_refresh_rate, Args, Command, ConvertArgs, ViewArgs};
pub use commands::{run_convert, run_view, viewer_options};
pub use enums::Mode;
