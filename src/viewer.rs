//! Poll-and-render loop for watching a hex file.
//!
//! A `ViewerSession` owns the display and the last seen modification time.
//! Lifecycle is `open() -> poll()* -> close()`; every `poll()` performs one
//! state transition:
//!
//! ```text
//! WaitingForChange --(file checked, maybe redrawn)--> Rendering
//! Rendering --(exit key)--> Exited
//! Rendering --(manual)--> WaitingForInput --(space)--> WaitingForChange
//! Rendering --(auto)--> Sleeping --(period over)--> WaitingForChange
//! any --(exit key / missing file)--> Exited
//! ```
//!
//! The display is released exactly once, on the way into `Exited` or when
//! the session is closed or dropped.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use crate::error::HexError;
use crate::hexfile::{self, DimensionOverride};
use crate::input::KeyAction;
use crate::pixels::{ChannelMode, PixelBuffer};
use crate::terminal::StatusBar;

/// Interval of the quick key check after each render.
const KEY_CHECK: Duration = Duration::from_millis(1);

/// Something that can show a frame and deliver key presses.
pub trait Display {
    /// Draw `image` (or a blank screen) with the status bar.
    fn show(&mut self, image: Option<&PixelBuffer>, status: &StatusBar) -> std::io::Result<()>;

    /// Wait up to `timeout` for input; `None` blocks until an event arrives.
    fn next_action(&mut self, timeout: Option<Duration>) -> std::io::Result<KeyAction>;

    /// Release the display. Called once.
    fn release(&mut self) -> std::io::Result<()>;
}

/// How the viewer decides to look at the file again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefreshMode {
    /// Wait for the space key.
    Manual,
    /// Re-check `rate_hz` times per second.
    Auto { rate_hz: f64 },
}

impl RefreshMode {
    fn period(self) -> Option<Duration> {
        match self {
            RefreshMode::Manual => None,
            RefreshMode::Auto { rate_hz } => Some(Duration::from_secs_f64(1.0 / rate_hz)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerOptions {
    pub mode: ChannelMode,
    /// Explicit dimensions, kept for the whole run.
    pub overrides: DimensionOverride,
    pub refresh: RefreshMode,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            mode: ChannelMode::Bgr,
            overrides: DimensionOverride::default(),
            refresh: RefreshMode::Manual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    WaitingForChange,
    Rendering,
    WaitingForInput,
    Sleeping,
    Exited,
}

pub struct ViewerSession<D: Display> {
    path: PathBuf,
    options: ViewerOptions,
    display: Option<D>,
    state: ViewerState,
    last_modified: Option<SystemTime>,
    current: Option<PixelBuffer>,
    status: StatusBar,
    renders: usize,
}

impl<D: Display> ViewerSession<D> {
    /// Start a session on `path`. Nothing is read until the first `poll()`.
    pub fn open(path: impl Into<PathBuf>, options: ViewerOptions, display: D) -> Self {
        let path = path.into();
        let title = format!("Hex Viewer: {}", file_label(&path));
        let hint = match options.refresh {
            RefreshMode::Manual => "space: refresh, ESC/q: quit",
            RefreshMode::Auto { .. } => "ESC/q: quit",
        };
        Self {
            path,
            options,
            display: Some(display),
            state: ViewerState::WaitingForChange,
            last_modified: None,
            current: None,
            status: StatusBar::new(title, hint),
            renders: 0,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Most recently decoded image.
    pub fn current_image(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Number of successful file decodes shown so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Borrow the display, `None` once released.
    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    /// Advance one transition and return the new state.
    ///
    /// On a missing file (or any error other than a bad size header) the
    /// display is released, the state becomes `Exited` and the error is
    /// returned.
    pub fn poll(&mut self) -> Result<ViewerState, HexError> {
        let result = match self.state {
            ViewerState::WaitingForChange => self.check_file(),
            ViewerState::Rendering => self.after_render(),
            ViewerState::WaitingForInput => self.wait_for_input(),
            ViewerState::Sleeping => self.sleep(),
            ViewerState::Exited => Ok(ViewerState::Exited),
        };

        match result {
            Ok(next) => {
                if next == ViewerState::Exited {
                    self.close();
                }
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                self.close();
                self.state = ViewerState::Exited;
                Err(e)
            }
        }
    }

    /// Poll until the session exits.
    pub fn run(mut self) -> Result<(), HexError> {
        while self.poll()? != ViewerState::Exited {}
        Ok(())
    }

    /// Release the display. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(mut display) = self.display.take() {
            if let Err(e) = display.release() {
                log::warn!("Failed to restore terminal: {}", e);
            }
        }
        self.state = ViewerState::Exited;
    }

    fn check_file(&mut self) -> Result<ViewerState, HexError> {
        let modified = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|e| HexError::from_io(&self.path, e))?;

        if self.last_modified != Some(modified) {
            self.last_modified = Some(modified);
            self.reload()?;
            self.redraw()?;
        }
        Ok(ViewerState::Rendering)
    }

    fn reload(&mut self) -> Result<(), HexError> {
        let text = fs::read_to_string(&self.path).map_err(|e| HexError::from_io(&self.path, e))?;

        match hexfile::decode_str(&text, self.options.mode, self.options.overrides) {
            Ok(decoded) => {
                let (w, h) = (decoded.image.width(), decoded.image.height());
                let mut message = format!("Updated {}, size: {}x{}", file_label(&self.path), w, h);
                if decoded.guessed {
                    message.push_str(" (guessed)");
                }
                if decoded.skipped > 0 {
                    message.push_str(&format!(", {} invalid lines skipped", decoded.skipped));
                }
                log::info!("{}", message);
                self.status.set_message(message);
                self.current = Some(decoded.image);
                self.renders += 1;
                Ok(())
            }
            Err(e @ HexError::HeaderParse { .. }) => {
                log::warn!("Skipping render of {}: {}", self.path.display(), e);
                self.status.set_message(format!("Error: {}", e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn redraw(&mut self) -> Result<(), HexError> {
        if let Some(display) = self.display.as_mut() {
            display.show(self.current.as_ref(), &self.status)?;
        }
        Ok(())
    }

    fn next_action(&mut self, timeout: Option<Duration>) -> Result<KeyAction, HexError> {
        match self.display.as_mut() {
            Some(display) => Ok(display.next_action(timeout)?),
            None => Ok(KeyAction::Exit),
        }
    }

    fn after_render(&mut self) -> Result<ViewerState, HexError> {
        match self.next_action(Some(KEY_CHECK))? {
            KeyAction::Exit => return Ok(ViewerState::Exited),
            KeyAction::Redraw => self.redraw()?,
            KeyAction::Refresh | KeyAction::None => {}
        }
        Ok(match self.options.refresh {
            RefreshMode::Manual => ViewerState::WaitingForInput,
            RefreshMode::Auto { .. } => ViewerState::Sleeping,
        })
    }

    fn wait_for_input(&mut self) -> Result<ViewerState, HexError> {
        Ok(match self.next_action(None)? {
            KeyAction::Exit => ViewerState::Exited,
            KeyAction::Refresh => ViewerState::WaitingForChange,
            KeyAction::Redraw => {
                self.redraw()?;
                ViewerState::WaitingForInput
            }
            KeyAction::None => ViewerState::WaitingForInput,
        })
    }

    fn sleep(&mut self) -> Result<ViewerState, HexError> {
        let period = self.options.refresh.period().unwrap_or(Duration::ZERO);
        let deadline = Instant::now() + period;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(ViewerState::WaitingForChange);
            }
            match self.next_action(Some(remaining))? {
                KeyAction::Exit => return Ok(ViewerState::Exited),
                KeyAction::Redraw => self.redraw()?,
                KeyAction::Refresh | KeyAction::None => {}
            }
        }
    }
}

impl<D: Display> Drop for ViewerSession<D> {
    fn drop(&mut self) {
        self.close();
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_period() {
        assert_eq!(RefreshMode::Manual.period(), None);
        assert_eq!(
            RefreshMode::Auto { rate_hz: 4.0 }.period(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label(Path::new("/tmp/a/frame.hex")), "frame.hex");
    }
}
