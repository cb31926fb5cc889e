//! Per-tick movement for the player, the enemy formation and bullets.
//!
//! Each function pushes an erase at the old cell and a draw at the new cell
//! into `frame` (just the erase when an entity leaves the grid).

use crate::constants::{ENEMY_DESCENT, ENEMY_MOVE_FREQUENCY};
use crate::entities::{Glyph, RenderCommand, WorldState};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Horizontal wrap-around in both directions.  Always lands in `[0, width)`.
pub fn wrap_x(x: i32, velocity: i32, width: u16) -> i32 {
    let width = width as i32;
    (x + velocity + width).rem_euclid(width)
}

/// One tick of friction: step the velocity one unit toward zero.
pub fn decay_velocity(velocity: i32) -> i32 {
    velocity - velocity.signum()
}

/// Rows an enemy drops on an edge reversal.
pub fn descent_step() -> i32 {
    ENEMY_DESCENT.round() as i32
}

/// Cadence gate for enemy movement, checked after the counter is bumped.
///
/// The comparison reduces to `counter >= -1`, so with a counter that starts
/// at zero and only grows, enemies move on every tick rather than every
/// `ENEMY_MOVE_FREQUENCY`th.
pub fn enemies_move_this_tick(counter: i64) -> bool {
    counter + ENEMY_MOVE_FREQUENCY >= ENEMY_MOVE_FREQUENCY - 1
}

// ── Player ───────────────────────────────────────────────────────────────────

pub fn move_player(state: &WorldState, frame: &mut Vec<RenderCommand>) -> WorldState {
    let mut next = state.clone();
    let player = &mut next.player;

    frame.push(RenderCommand::erase(player.x, player.y));
    player.x = wrap_x(player.x, player.x_velocity, state.width);
    frame.push(RenderCommand::draw(player.x, player.y, Glyph::Player));

    player.x_velocity = decay_velocity(player.x_velocity);
    next
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Bump the cadence counter and, if the gate passes, step every enemy along
/// its own direction.  An enemy touching either edge reverses and drops; the
/// others are unaffected, so reversals drift apart over time.
///
/// Dead enemies still move until the next collision pass clears them.
pub fn move_enemies(state: &WorldState, frame: &mut Vec<RenderCommand>) -> WorldState {
    let mut next = state.clone();
    next.enemy_move_counter += 1;

    if !enemies_move_this_tick(next.enemy_move_counter) {
        return next;
    }

    let right_edge = state.width as i32 - 1;
    for enemy in &mut next.enemies {
        frame.push(RenderCommand::erase(enemy.x, enemy.y));

        enemy.x += enemy.direction;
        if enemy.x <= 0 || enemy.x >= right_edge {
            enemy.direction = -enemy.direction;
            enemy.y += descent_step();
        }

        frame.push(RenderCommand::draw(enemy.x, enemy.y, Glyph::Enemy));
    }

    next
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// Move every bullet up one row.  Bullets that leave the top are dropped.
/// Walks the list back to front so removal never skips an element.
pub fn move_bullets(state: &WorldState, frame: &mut Vec<RenderCommand>) -> WorldState {
    let mut next = state.clone();

    for i in (0..next.bullets.len()).rev() {
        let bullet = &mut next.bullets[i];
        frame.push(RenderCommand::erase(bullet.x, bullet.y));
        bullet.y -= 1;

        if bullet.y < 0 {
            next.bullets.remove(i);
        } else {
            frame.push(RenderCommand::draw(bullet.x, bullet.y, Glyph::Bullet));
        }
    }

    next
}
