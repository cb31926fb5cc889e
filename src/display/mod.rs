//! Rendering layer.
//!
//! The simulation never talks to a terminal directly: it emits
//! `RenderCommand`s, and this module forwards them to whatever implements
//! [`Display`].  `terminal` is the crossterm backend used by the binary;
//! `memory` is a headless grid used for tests and replays.

pub mod memory;
pub mod terminal;

use std::io;

use crate::entities::RenderCommand;

pub use memory::MemoryDisplay;
pub use terminal::TerminalDisplay;

/// Row the HUD text is printed on, starting at column 0.
pub const HUD_ROW: u16 = 0;

/// Output capability consumed by the game loop.
pub trait Display {
    fn set_dimensions(&mut self, width: u16, height: u16) -> io::Result<()>;

    /// Draw a single character into grid cell `(x, y)`.
    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> io::Result<()>;

    /// Print a line of text starting at `(x, y)`.
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> io::Result<()>;

    /// Push everything drawn this tick to the screen.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Map a simulation cell onto the display grid.
///
/// A cell outside `[0, width) × [0, height)` means an invariant was broken
/// upstream: debug builds panic, release builds clamp to the nearest edge.
pub fn clamp_to_grid(x: i32, y: i32, width: u16, height: u16) -> (u16, u16) {
    let in_bounds = (0..width as i32).contains(&x) && (0..height as i32).contains(&y);
    debug_assert!(
        in_bounds,
        "render outside the {width}x{height} grid at ({x}, {y})"
    );
    if !in_bounds {
        tracing::error!(x, y, width, height, "render command outside the grid; clamping");
    }

    let cx = x.clamp(0, width.saturating_sub(1) as i32) as u16;
    let cy = y.clamp(0, height.saturating_sub(1) as i32) as u16;
    (cx, cy)
}

/// Forward one tick's draw calls to `display`, in emission order.
pub fn apply<D: Display + ?Sized>(
    display: &mut D,
    width: u16,
    height: u16,
    commands: &[RenderCommand],
) -> io::Result<()> {
    for cmd in commands {
        let (x, y) = clamp_to_grid(cmd.x, cmd.y, width, height);
        display.draw_glyph(x, y, cmd.glyph.as_char())?;
    }
    Ok(())
}

/// The per-tick status line.
pub fn hud_line(score: u32, exp: u32, level: u32, elapsed: f64) -> String {
    format!("Score: {score} | Xp: {exp} | Lvl: {level} | Time: {elapsed:.2}")
}
