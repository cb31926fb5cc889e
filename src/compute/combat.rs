//! Collision and combat: bullet/enemy hits, damage, deaths and rewards.

use rand::Rng;

use crate::constants::{DAMAGE_BONUS, DAMAGE_PER_LEVEL, KILL_EXP, KILL_SCORE};
use crate::entities::{Glyph, RenderCommand, WorldState};

/// Damage one bullet deals: `5 × level + 10 − defense`.
pub fn damage(level: u32, defense: i32) -> i32 {
    DAMAGE_PER_LEVEL * level as i32 + DAMAGE_BONUS - defense
}

/// First pass: erase every enemy flagged dead on an earlier tick, grant the
/// player `KILL_EXP` experience for each, and drop them.
pub fn clear_dead_enemies(
    state: &WorldState,
    rng: &mut impl Rng,
    frame: &mut Vec<RenderCommand>,
) -> WorldState {
    let mut next = state.clone();

    next.enemies.retain(|enemy| {
        if !enemy.dead {
            return true;
        }
        frame.push(RenderCommand::erase(enemy.x, enemy.y));
        let exp = rng.gen_range(KILL_EXP);
        next.player.exp += exp;
        tracing::debug!(x = enemy.x, y = enemy.y, exp, "dead enemy cleared");
        false
    });

    next
}

/// Second pass: each living enemy takes at most one hit per tick, from the
/// most recently fired bullet sitting exactly on its cell.  That bullet is
/// consumed.  The killing blow flags the enemy dead and pays `KILL_SCORE`.
pub fn resolve_hits(
    state: &WorldState,
    rng: &mut impl Rng,
    frame: &mut Vec<RenderCommand>,
) -> WorldState {
    let mut next = state.clone();
    let level = next.player.level();

    for enemy in next.enemies.iter_mut().rev() {
        if enemy.dead {
            continue;
        }

        let Some(hit) = next
            .bullets
            .iter()
            .rposition(|b| b.x == enemy.x && b.y == enemy.y)
        else {
            continue;
        };

        enemy.health -= damage(level, enemy.defense);
        frame.push(RenderCommand::draw(enemy.x, enemy.y, Glyph::Hit));
        next.bullets.remove(hit);
        tracing::debug!(x = enemy.x, y = enemy.y, health = enemy.health, "enemy hit");

        if enemy.health <= 0 {
            enemy.dead = true;
            let bonus = rng.gen_range(KILL_SCORE);
            next.score += bonus;
            tracing::info!(bonus, score = next.score, "enemy destroyed");
        }
    }

    next
}

/// Run both passes: clean up last tick's kills, then detect new hits.
pub fn resolve_collisions(
    state: &WorldState,
    rng: &mut impl Rng,
    frame: &mut Vec<RenderCommand>,
) -> WorldState {
    let cleared = clear_dead_enemies(state, rng, frame);
    resolve_hits(&cleared, rng, frame)
}
