//! Terminal acquisition
//!
//! Raw mode and the alternate screen are held by a guard. Dropping it, or
//! panicking anywhere while it is alive, puts the terminal back.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Owns the terminal for as long as the table is displayed
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        let terminal = enter_screen().inspect_err(|_| restore())?;
        tracing::debug!("terminal acquired");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Current size as (columns, lines)
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        tracing::debug!("terminal restored");
    }
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best effort; nothing useful can be done if the terminal refuses
fn restore() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore();
            original(info);
        }));
    });
}
