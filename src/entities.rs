//! All game entity types — plain data, no game logic beyond derived values.

use crate::constants::{
    BULLET_CHAR, EMPTY_CHAR, ENEMY_CHAR, ENEMY_DEFENSE, ENEMY_HEALTH, EXP_PER_LEVEL, HIT_CHAR,
    PLAYER_CHAR, PLAYER_STARTING_EXP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// A decoded key press, as seen by the input mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Explicit request to end the game.
    Quit,
    Other,
}

// ── Rendering output ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Player,
    Enemy,
    Bullet,
    /// Transient marker drawn where a bullet struck an enemy.
    Hit,
    Empty,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Player => PLAYER_CHAR,
            Glyph::Enemy => ENEMY_CHAR,
            Glyph::Bullet => BULLET_CHAR,
            Glyph::Hit => HIT_CHAR,
            Glyph::Empty => EMPTY_CHAR,
        }
    }
}

/// One draw call emitted by the simulation.  Erasing a cell is drawing
/// `Glyph::Empty` into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCommand {
    pub x: i32,
    pub y: i32,
    pub glyph: Glyph,
}

impl RenderCommand {
    pub fn draw(x: i32, y: i32, glyph: Glyph) -> Self {
        RenderCommand { x, y, glyph }
    }

    pub fn erase(x: i32, y: i32) -> Self {
        RenderCommand::draw(x, y, Glyph::Empty)
    }
}

// ── Level ────────────────────────────────────────────────────────────────────

/// `ceil(exp / 5)`.
pub fn level_for(exp: u32) -> u32 {
    exp.div_ceil(EXP_PER_LEVEL)
}

// ── Player, enemies & projectiles ────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Signed horizontal velocity; decays toward zero after every move.
    pub x_velocity: i32,
    pub exp: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Player {
            x,
            y,
            x_velocity: 0,
            exp: PLAYER_STARTING_EXP,
        }
    }

    /// Recomputed from experience on every call.
    pub fn level(&self) -> u32 {
        level_for(self.exp)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// May drop below zero on the killing hit.
    pub health: i32,
    pub defense: i32,
    /// +1 (rightward) or −1 (leftward).
    pub direction: i32,
    /// Set on the tick health reaches zero; the enemy is removed on the next
    /// collision pass.
    pub dead: bool,
}

impl Enemy {
    pub fn new(x: i32, y: i32) -> Self {
        Enemy {
            x,
            y,
            health: ENEMY_HEALTH,
            defense: ENEMY_DEFENSE,
            direction: 1,
            dead: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    /// Goes negative for one step before the bullet is dropped.
    pub y: i32,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The whole simulated world.  Cloneable so the pure update functions in
/// `compute` can hand back a new copy without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub player: Player,
    /// Spawn order is preserved.
    pub enemies: Vec<Enemy>,
    /// Fire order is preserved.
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub status: GameStatus,
    /// Cadence counter gating enemy movement; incremented once per tick.
    pub enemy_move_counter: i64,
    pub width: u16,
    pub height: u16,
}
