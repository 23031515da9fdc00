//! Terminal-backed `Display` for the viewer.
//!
//! Enters raw mode and the alternate screen on creation and restores both
//! on `release()` (or on drop, or from the panic hook).

use crossterm::{event, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

use super::raw_mode;
use super::StatusBar;
use crate::input::{handle_event, KeyAction};
use crate::pixels::PixelBuffer;
use crate::renderer::{compose_frame, compose_status_line};
use crate::viewer::Display;

pub struct TerminalDisplay {
    stdout: Stdout,
    released: bool,
}

impl TerminalDisplay {
    /// Take over the terminal.
    ///
    /// # Errors
    /// Fails when stdin/stdout are not a terminal.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        raw_mode::take_over(&mut stdout)?;
        Ok(Self {
            stdout,
            released: false,
        })
    }
}

impl Display for TerminalDisplay {
    fn show(&mut self, image: Option<&PixelBuffer>, status: &StatusBar) -> io::Result<()> {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        // Last row is the status bar
        let image_rows = rows.saturating_sub(1);

        let mut output = compose_frame(image, cols, image_rows);
        output.push_str(&compose_status_line(&status.format(), cols, rows));

        self.stdout.write_all(output.as_bytes())?;
        self.stdout.flush()
    }

    fn next_action(&mut self, timeout: Option<Duration>) -> io::Result<KeyAction> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(KeyAction::None);
            }
        }
        Ok(handle_event(event::read()?))
    }

    fn release(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        raw_mode::restore(&mut self.stdout)
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
