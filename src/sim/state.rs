//! Game state and core simulation types
//!
//! All mutable session state lives on [`GameState`]; `tick` and `handle_key`
//! are its only mutators. Iteration order over entities is insertion order
//! and every random draw flows through the owned seeded RNG, so identical
//! seeds and input scripts replay identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::consts::*;
use crate::sim::events::GameEvent;
use crate::sim::score;
use crate::words::{self, WordQueue};

/// Power-up word variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    Heart,
    Shield,
    Bomb,
    Multiplier,
    Freeze,
}

// Effect palette indices for the renderer. Word entities use 0..WORD_COLOR_COUNT.
pub const FX_ACCENT: u32 = 100; // score popups
pub const FX_DANGER: u32 = 101; // misses, hearts
pub const FX_SHIELD: u32 = 102; // cyan
pub const FX_BOMB: u32 = 103; // orange
pub const FX_MULTIPLIER: u32 = 104; // fuchsia
pub const FX_FREEZE: u32 = 105; // ice blue

/// A falling word
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntity {
    pub id: u32,
    /// Immutable after spawn; stored lowercase like the input buffer
    pub text: String,
    /// Position in percent units; y grows downward, danger line at y > 93
    pub pos: Vec2,
    /// Fall speed at spawn time, percent units per second
    pub speed: f32,
    /// Word palette index
    pub color: u32,
    pub special: Option<SpecialKind>,
}

/// Explosion debris
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at birth, pruned at 0
    pub life: f32,
    pub color: u32,
}

/// Rising score/status feedback
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub id: u32,
    pub pos: Vec2,
    pub text: String,
    pub life: f32,
    pub color: u32,
}

/// Remaining seconds of each timed power-up. The timers are independent and
/// concurrent, not mutually exclusive states.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActiveEffects {
    pub shield: f32,
    pub multiplier: f32,
    pub freeze: f32,
}

impl ActiveEffects {
    /// Count all timers down, clamped at zero
    pub fn decay(&mut self, dt: f32) {
        self.shield = (self.shield - dt).max(0.0);
        self.multiplier = (self.multiplier - dt).max(0.0);
        self.freeze = (self.freeze - dt).max(0.0);
    }

    pub fn shielded(&self) -> bool {
        self.shield > 0.0
    }

    pub fn doubled(&self) -> bool {
        self.multiplier > 0.0
    }

    pub fn frozen(&self) -> bool {
        self.freeze > 0.0
    }
}

/// Final (or in-progress) session statistics handed to the embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    /// Reserved; keystroke timing lives outside the core
    pub wpm: u32,
    pub streak: u32,
}

/// Session phase. `GameOver` is the single terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SessionConfig,
    pub phase: GamePhase,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,

    /// Upcoming word texts
    pub queue: WordQueue,
    /// Active falling words (insertion order)
    pub words: Vec<WordEntity>,
    pub particles: Vec<Particle>,
    pub floating_texts: Vec<FloatingText>,

    pub effects: ActiveEffects,
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    pub streak: u32,
    /// Cumulative score needed for the next level
    pub next_level_threshold: f64,
    /// Highest level that has already produced a heart word
    pub last_heart_level: u32,

    /// Milliseconds accumulated toward the next spawn
    pub spawn_timer_ms: f32,
    /// Elapsed game seconds
    pub game_time: f32,
    pub last_speed_up: f32,
    pub speed_multiplier: f32,

    /// The player's in-progress keystrokes, lowercase
    pub input_buffer: String,
    /// Accuracy-mode error flag (buffer matches nothing)
    pub input_error: bool,
    /// Seconds until a held backspace clears the buffer
    pub backspace_hold: Option<f32>,

    /// Whether any word currently covers the input display zone
    pub is_obscuring: bool,

    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session and pre-fetch the initial word buffer
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut queue = WordQueue::new();
        queue.extend(words::fetch_words(
            config.difficulty,
            config.mode,
            config.theme,
            QUEUE_INITIAL_COUNT,
            &mut rng,
        ));

        Self {
            config,
            phase: GamePhase::Playing,
            seed,
            rng,
            queue,
            words: Vec::new(),
            particles: Vec::new(),
            floating_texts: Vec::new(),
            effects: ActiveEffects::default(),
            score: 0,
            level: 1,
            lives: START_LIVES,
            streak: 0,
            next_level_threshold: score::initial_level_threshold(&config),
            last_heart_level: 0,
            spawn_timer_ms: 0.0,
            game_time: 0.0,
            last_speed_up: 0.0,
            speed_multiplier: 1.0,
            input_buffer: String::new(),
            input_error: false,
            backspace_hold: None,
            is_obscuring: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the buffered events to the embedding, emptying the buffer
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            level: self.level,
            lives: self.lives,
            wpm: 0,
            streak: self.streak,
        }
    }

    /// Scatter explosion particles around a point
    pub fn spawn_explosion(&mut self, pos: Vec2, color: u32, scale: f32) {
        let count = (EXPLOSION_PARTICLES as f32 * scale) as usize;
        for _ in 0..count {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * 50.0 * scale,
                (self.rng.random::<f32>() - 0.5) * 50.0 * scale,
            );
            let id = self.next_entity_id();
            self.particles.push(Particle {
                id,
                pos,
                vel,
                life: 1.0,
                color,
            });
        }
    }

    pub fn spawn_floating_text(&mut self, pos: Vec2, text: impl Into<String>, color: u32) {
        let id = self.next_entity_id();
        self.floating_texts.push(FloatingText {
            id,
            pos,
            text: text.into(),
            life: 1.0,
            color,
        });
    }

    /// Reset the buffer and everything hanging off it, including the
    /// long-press timer (a clear from any cause cancels it)
    pub fn clear_input_buffer(&mut self) {
        self.input_buffer.clear();
        self.input_error = false;
        self.backspace_hold = None;
    }
}
