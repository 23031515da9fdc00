//! Terminal management - raw mode, status bar and the crossterm display.

mod display;
mod raw_mode;
mod status_bar;

pub use display::TerminalDisplay;
pub use status_bar::StatusBar;
