//! Crossterm backend — all terminal I/O lives here.
//!
//! Commands are queued on the writer and only flushed in `present`, so one
//! tick costs a single write to the terminal.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::constants::{BULLET_CHAR, ENEMY_CHAR, HIT_CHAR, PLAYER_CHAR};
use crate::display::Display;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_HIT: Color = Color::Red;
const C_BULLET: Color = Color::Cyan;
const C_HUD: Color = Color::Yellow;

fn glyph_color(glyph: char) -> Color {
    match glyph {
        PLAYER_CHAR => C_PLAYER,
        ENEMY_CHAR => C_ENEMY,
        HIT_CHAR => C_HIT,
        BULLET_CHAR => C_BULLET,
        _ => Color::Reset,
    }
}

/// Owns the terminal session.  Once [`enter`](TerminalDisplay::enter) has
/// been called, dropping the display restores the terminal, so a panic
/// unwinding out of the game loop never leaves it in raw mode.
pub struct TerminalDisplay<W: Write> {
    out: W,
    /// Set from the first step of `enter` until `restore` runs.
    active: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        TerminalDisplay { out, active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw mode, alternate screen, hidden cursor.  Undone by [`restore`] or
    /// on drop, including after a partial failure here.
    ///
    /// [`restore`]: TerminalDisplay::restore
    pub fn enter(&mut self) -> std::io::Result<()> {
        self.active = true;
        terminal::enable_raw_mode()?;
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.out.execute(cursor::Hide)?;
        self.out.execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Undo [`enter`](TerminalDisplay::enter).  Every step is attempted even
    /// if an earlier one fails; the first error is returned.  A no-op when
    /// the session is not active.
    pub fn restore(&mut self) -> std::io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let reset = self.out.execute(style::ResetColor).map(|_| ());
        let shown = self.out.execute(cursor::Show).map(|_| ());
        let left = self.out.execute(terminal::LeaveAlternateScreen).map(|_| ());
        let raw = terminal::disable_raw_mode();
        reset.and(shown).and(left).and(raw)
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn set_dimensions(&mut self, width: u16, height: u16) -> std::io::Result<()> {
        self.out.queue(terminal::SetSize(width, height))?;
        Ok(())
    }

    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        self.out.queue(style::SetForegroundColor(glyph_color(glyph)))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}
