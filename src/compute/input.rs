//! Input mapper: turns drained key presses into player intent.

use crate::entities::{Bullet, GameStatus, Key, WorldState};

/// Apply a single key press.
///
/// Horizontal velocity is reset before the key is matched, so any
/// non-movement key pressed after a movement key cancels that tick's motion.
pub fn apply_key(state: &WorldState, key: Key) -> WorldState {
    let mut next = state.clone();
    next.player.x_velocity = 0;

    match key {
        Key::Left => next.player.x_velocity = -1,
        Key::Right => next.player.x_velocity = 1,
        Key::Fire => {
            let bullet = Bullet {
                x: next.player.x,
                y: next.player.y - 1,
            };
            tracing::debug!(x = bullet.x, y = bullet.y, "bullet fired");
            next.bullets.push(bullet);
        }
        Key::Quit => {
            tracing::info!(score = next.score, "quit requested");
            next.status = GameStatus::GameOver;
        }
        Key::Other => {}
    }

    next
}

/// Apply every key drained this tick, in arrival order.
pub fn handle_input(state: &WorldState, keys: &[Key]) -> WorldState {
    keys.iter()
        .fold(state.clone(), |acc, &key| apply_key(&acc, key))
}
