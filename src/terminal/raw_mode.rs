//! Taking over the terminal for the viewer and giving it back.
//!
//! A single process-wide flag records whether the terminal is taken over,
//! so `restore` is idempotent and a panic puts the screen back even when no
//! display value gets dropped.

use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static TAKEN_OVER: AtomicBool = AtomicBool::new(false);

/// Enable raw mode, switch to the alternate screen and hide the cursor.
///
/// # Errors
/// Fails when stdin/stdout are not a terminal. Raw mode is undone again if
/// the screen switch fails.
pub(crate) fn take_over<W: Write>(out: &mut W) -> io::Result<()> {
    install_panic_hook();

    terminal::enable_raw_mode()?;
    TAKEN_OVER.store(true, Ordering::SeqCst);

    if let Err(e) = execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    ) {
        let _ = restore(out);
        return Err(e);
    }
    Ok(())
}

/// Undo `take_over`. Does nothing if the terminal isn't taken over.
pub(crate) fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    if !TAKEN_OVER.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    let screen = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    terminal::disable_raw_mode()?;
    screen
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();

    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore(&mut io::stdout());
            previous(info);
        }));
    });
}
