use std::io::{self, stdout, Stdout, Write};

use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::warn;

use crate::error::Result;
use crate::render::{compose_frame, Render};
use crate::state::GameState;

/// Owns the terminal while the game runs.
///
/// Raw mode and the alternate screen are switched on by `setup` and switched
/// back off when this is dropped, including on early returns and panics.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn setup() -> Result<Self> {
        // Build the guard first so a failure halfway through still gets undone.
        let mut term = TermManager { stdout: stdout() };

        execute!(term.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(term.stdout, cursor::Hide)?;

        Ok(term)
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }
}

impl Render for TermManager {
    fn render(&mut self, state: &GameState) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (row, line) in compose_frame(state).iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore terminal");
        }
    }
}
