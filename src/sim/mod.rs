//! Deterministic falling-words simulation
//!
//! The simulation is headless and owns no clock, renderer, or audio device.
//! An embedding drives it with [`tick`] once per frame and [`handle_key`] per
//! keystroke, then drains [`GameEvent`]s to draw and play cues. All
//! randomness comes from the session's seeded RNG, so a seed plus an input
//! script fully determines a run.

pub mod events;
pub mod input;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use events::{GameEvent, RemoveReason, SoundCue};
pub use input::{handle_key, is_typable, KeyInput};
pub use score::score_for_word;
pub use spawn::{assign_special, fall_speed, spawn_interval_ms};
pub use state::{
    ActiveEffects, FloatingText, GamePhase, GameState, GameStats, Particle, SpecialKind,
    WordEntity,
};
pub use tick::tick;
