//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `WorldState` and returns a brand-new `WorldState`.  Side effects are
//! limited to the injected RNG and the render-command sink, so the whole
//! simulation runs without a display backend.

pub mod combat;
pub mod input;
pub mod movement;

use rand::Rng;

use crate::constants::{
    FORMATION_COLUMNS, FORMATION_COLUMN_OFFSET, FORMATION_COLUMN_SPACING, FORMATION_FIRST_ROW,
    FORMATION_ROW_LIMIT, FORMATION_ROW_STEP,
};
use crate::entities::{Enemy, GameStatus, Glyph, Key, Player, RenderCommand, WorldState};

pub use combat::resolve_collisions;
pub use input::handle_input;
pub use movement::{move_bullets, move_enemies, move_player};

/// State after one tick, plus the draw calls that transition produced.
#[derive(Clone, Debug)]
pub struct TickResult {
    pub state: WorldState,
    pub commands: Vec<RenderCommand>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// The fixed starting formation: rows at y = 1, 4, 7 with five enemies each,
/// every row shifted right by `floor(y / 2)`.
pub fn formation() -> Vec<Enemy> {
    let mut enemies = Vec::new();
    let mut y = FORMATION_FIRST_ROW;
    while y < FORMATION_ROW_LIMIT {
        for i in 0..FORMATION_COLUMNS {
            enemies.push(Enemy::new(
                i * FORMATION_COLUMN_SPACING + y / 2 + FORMATION_COLUMN_OFFSET,
                y,
            ));
        }
        y += FORMATION_ROW_STEP;
    }
    enemies
}

/// Build the initial world for the given grid dimensions.
pub fn init_state(width: u16, height: u16) -> WorldState {
    WorldState {
        player: Player::new((width / 2) as i32, height as i32 - 1),
        enemies: formation(),
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        enemy_move_counter: 0,
        width,
        height,
    }
}

/// Draw calls needed before the first tick: only the player is shown,
/// enemies appear once they first move.
pub fn initial_frame(state: &WorldState) -> Vec<RenderCommand> {
    vec![RenderCommand::draw(
        state.player.x,
        state.player.y,
        Glyph::Player,
    )]
}

// ── Per-tick update (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick: apply the drained key presses, move
/// player, enemies and bullets, then resolve collisions.
///
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(state: &WorldState, keys: &[Key], rng: &mut impl Rng) -> TickResult {
    let mut commands = Vec::new();

    let state = handle_input(state, keys);
    let state = move_player(&state, &mut commands);
    let state = move_enemies(&state, &mut commands);
    let state = move_bullets(&state, &mut commands);
    let state = resolve_collisions(&state, rng, &mut commands);

    tracing::trace!(
        enemies = state.enemies.len(),
        bullets = state.bullets.len(),
        score = state.score,
        "tick"
    );

    TickResult { state, commands }
}
