//! Fixed gameplay constants.  These are the authoritative defaults; only the
//! grid size and tick interval can be overridden through `GameConfig`.

use std::ops::Range;

// ── Grid & timing ────────────────────────────────────────────────────────────

pub const GRID_WIDTH: u16 = 40;
pub const GRID_HEIGHT: u16 = 20;

/// Smallest grid the enemy formation and player row fit in.
pub const MIN_GRID_WIDTH: u16 = 40;
pub const MIN_GRID_HEIGHT: u16 = 12;

/// Wall-clock pause between ticks.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Simulated time added per tick, independent of sleep drift.
pub const TIME_STEP: f64 = 0.1;

/// Config file read from the working directory by the binary.
pub const CONFIG_FILE: &str = "grid_invaders.toml";

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_STARTING_EXP: u32 = 1;
pub const EXP_PER_LEVEL: u32 = 5;

/// Damage per player level, before the flat bonus.
pub const DAMAGE_PER_LEVEL: i32 = 5;
/// Flat damage bonus (5 base × 2).
pub const DAMAGE_BONUS: i32 = 10;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_HEALTH: i32 = 30;
pub const ENEMY_DEFENSE: i32 = 5;

/// Enemies are meant to move every `ENEMY_MOVE_FREQUENCY` ticks, but the
/// gate in `movement::enemies_move_this_tick` passes on every tick.
pub const ENEMY_MOVE_FREQUENCY: i64 = 10;

/// Rows dropped on each edge reversal, rounded per reversal.
pub const ENEMY_DESCENT: f32 = 0.55;

// Formation: rows at y = 1, 4, 7; five enemies per row.
pub const FORMATION_FIRST_ROW: i32 = 1;
pub const FORMATION_ROW_STEP: i32 = 3;
pub const FORMATION_ROW_LIMIT: i32 = 10;
pub const FORMATION_COLUMNS: i32 = 5;
pub const FORMATION_COLUMN_SPACING: i32 = 8;
pub const FORMATION_COLUMN_OFFSET: i32 = 2;

// ── Rewards ──────────────────────────────────────────────────────────────────

/// Score bonus for landing the killing blow.
pub const KILL_SCORE: Range<u32> = 100..150;
/// Experience granted when a dead enemy is cleared away.
pub const KILL_EXP: Range<u32> = 2..5;

// ── Glyphs ───────────────────────────────────────────────────────────────────

pub const PLAYER_CHAR: char = 'A';
pub const ENEMY_CHAR: char = 'M';
pub const BULLET_CHAR: char = '|';
pub const HIT_CHAR: char = 'm';
pub const EMPTY_CHAR: char = ' ';
