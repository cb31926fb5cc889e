//! Keyboard capability: non-blocking polling of decoded key presses.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Key;

/// Input capability consumed by the game loop.
pub trait Input {
    /// Next pending key press, or `None` when nothing is waiting.  Never
    /// blocks.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
}

/// Pull every pending key press.  Nothing carries over to the next tick.
pub fn drain<I: Input + ?Sized>(input: &mut I) -> io::Result<Vec<Key>> {
    let mut keys = Vec::new();
    while let Some(key) = input.poll_key()? {
        keys.push(key);
    }
    Ok(keys)
}

/// Decode a crossterm key event.  Releases are ignored (`None`); anything
/// unbound maps to `Key::Other`.
pub fn key_from_event(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') => Key::Fire,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
        _ => Key::Other,
    };
    Some(key)
}

/// Reads the terminal's event queue with a zero-timeout poll, so the loop
/// stays single-threaded.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl Input for TerminalInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = key_from_event(&key_event) {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}
