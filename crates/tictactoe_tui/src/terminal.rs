//! Putting the terminal into game mode and getting it back out.
//!
//! Restoring never stops at the first failure: a terminal left in raw mode
//! or on the alternate screen is unusable, so every step is attempted and
//! the first error is reported.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{instrument, warn};

/// The terminal the game draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// One fallible restore step.
pub type Step<'a> = &'a mut dyn FnMut() -> io::Result<()>;

/// Runs every step in order, even after one fails.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn run_all<'a>(steps: impl IntoIterator<Item = Step<'a>>) -> io::Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(err) = step() {
            warn!(error = %err, "Terminal restore step failed");
            first.get_or_insert(err);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Enables raw mode, enters the alternate screen, and captures the mouse.
///
/// If anything after raw mode fails, the terminal is put back before the
/// error is returned.
///
/// # Errors
///
/// Returns the first setup error.
#[instrument]
pub fn setup() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

    entered.inspect_err(|_| {
        if let Err(err) = leave() {
            warn!(error = %err, "Could not undo partial terminal setup");
        }
    })
}

/// Undoes [`setup`] and shows the cursor again.
///
/// # Errors
///
/// Returns the first error; the remaining steps still run.
#[instrument(skip_all)]
pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    let mut leave_steps = leave;
    let mut cursor = || terminal.show_cursor();
    run_all([&mut leave_steps as Step<'_>, &mut cursor])
}

fn leave() -> io::Result<()> {
    let mut raw = disable_raw_mode;
    let mut screen = || {
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)
    };
    let mut mouse = || {
        let mut stdout = io::stdout();
        execute!(stdout, DisableMouseCapture)
    };
    run_all([&mut raw as Step<'_>, &mut screen, &mut mouse])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_run_all_continues_after_failure() {
        let ran = RefCell::new(Vec::new());
        let mut raw = || -> io::Result<()> {
            ran.borrow_mut().push("raw");
            Err(io::Error::other("raw mode stuck"))
        };
        let mut screen = || -> io::Result<()> {
            ran.borrow_mut().push("screen");
            Ok(())
        };
        let mut cursor = || -> io::Result<()> {
            ran.borrow_mut().push("cursor");
            Err(io::Error::other("cursor hidden"))
        };

        let err = run_all([&mut raw as Step<'_>, &mut screen, &mut cursor]).unwrap_err();

        assert_eq!(*ran.borrow(), vec!["raw", "screen", "cursor"]);
        assert_eq!(err.to_string(), "raw mode stuck");
    }

    #[test]
    fn test_run_all_ok_when_every_step_succeeds() {
        let mut count = 0;
        let mut step = || -> io::Result<()> {
            count += 1;
            Ok(())
        };
        assert!(run_all([&mut step as Step<'_>]).is_ok());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_run_all_empty() {
        assert!(run_all(Vec::<Step<'_>>::new()).is_ok());
    }
}
