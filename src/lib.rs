//! Word Rain - a falling-words typing trainer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, matching, scoring, power-ups)
//! - `words`: Embedded dictionaries and the upcoming-word queue
//! - `config`: Immutable per-session settings
//!
//! The crate is headless: it owns all game state and emits [`sim::GameEvent`]s
//! for an external renderer and audio layer to consume.

pub mod config;
pub mod sim;
pub mod words;

pub use config::{Difficulty, Mode, SessionConfig, Theme};
pub use sim::{GameEvent, GameState, GameStats, KeyInput};

/// Game configuration constants
pub mod consts {
    /// Play field extent in percent units (both axes)
    pub const FIELD_SIZE: f32 = 100.0;
    /// Words materialize above the visible field
    pub const SPAWN_Y: f32 = -15.0;
    /// Words past this y-position have crashed
    pub const DANGER_LINE_Y: f32 = 93.0;
    /// Crash explosion / feedback anchor rows
    pub const CRASH_FX_Y: f32 = 95.0;
    pub const CRASH_TEXT_Y: f32 = 90.0;

    /// Region that visually covers the input display
    pub const OBSCURE_Y_MIN: f32 = 75.0;
    pub const OBSCURE_Y_MAX: f32 = 94.0;
    pub const OBSCURE_X_MIN: f32 = 30.0;
    pub const OBSCURE_X_MAX: f32 = 70.0;

    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Timed power-up durations (seconds)
    pub const SHIELD_SECS: f32 = 10.0;
    pub const MULTIPLIER_SECS: f32 = 10.0;
    pub const FREEZE_SECS: f32 = 5.0;
    /// Bomb blast radius in percent units
    pub const BOMB_RADIUS: f32 = 25.0;
    /// Chance of a heart word on a heart-eligible level
    pub const HEART_CHANCE: f32 = 0.2;

    /// Global speed multiplier grows by this factor every interval
    pub const SPEED_RAMP_INTERVAL_SECS: f32 = 30.0;
    pub const SPEED_RAMP_FACTOR: f32 = 1.1;
    /// Flat per-entity bonus once the multiplier has ramped at least once
    pub const RAMP_SPEED_BONUS: f32 = 1.05;

    /// Spawn interval shrinks by this many ms per level
    pub const LEVEL_SPAWN_STEP_MS: f32 = 100.0;
    /// Fall speed grows by this much per level
    pub const LEVEL_SPEED_STEP: f32 = 0.4;

    /// Holding backspace this long clears the whole buffer
    pub const BACKSPACE_HOLD_SECS: f32 = 0.5;

    /// Word queue watermarks
    pub const QUEUE_LOW_WATER: usize = 5;
    pub const QUEUE_REFILL_COUNT: usize = 50;
    pub const QUEUE_INITIAL_COUNT: usize = 100;

    /// Visual effect integration rates
    pub const PARTICLE_FADE_RATE: f32 = 2.0;
    pub const FLOAT_RISE_RATE: f32 = 10.0;
    pub const FLOAT_FADE_RATE: f32 = 0.8;
    pub const EXPLOSION_PARTICLES: usize = 15;

    /// Number of word palette entries a renderer is expected to provide
    pub const WORD_COLOR_COUNT: u32 = 6;
}
