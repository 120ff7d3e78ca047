//! Events emitted by the simulation for the exterior renderer and audio layer
//!
//! The core never draws or plays anything itself; it pushes these into the
//! session's event buffer and the embedding drains them once per frame.

use glam::Vec2;

use super::state::{GameStats, SpecialKind};

/// Why a word left the active collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveReason {
    /// Typed out exactly
    Matched,
    /// Crossed the danger line
    Crashed,
    /// Caught in a bomb blast
    Bombed,
}

/// Audio cue names. The core only signals which cue, never synthesizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Error,
    ExplosionSmall,
    ExplosionLarge,
    PowerUp(SpecialKind),
    LevelUp,
    GameOver,
}

/// Discrete state-change notifications
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EntitySpawned {
        id: u32,
        special: Option<SpecialKind>,
    },
    EntityRemoved {
        id: u32,
        reason: RemoveReason,
    },
    ScoreAwarded {
        amount: u64,
        pos: Vec2,
    },
    EffectActivated(SpecialKind),
    /// Global speed multiplier just ramped
    SpeedRamp {
        multiplier: f32,
    },
    LevelUp {
        level: u32,
    },
    /// A word entered or left the zone covering the input display
    ObscuringChanged(bool),
    /// Terminal: no further ticks or input are processed
    GameOver(GameStats),
    Sound(SoundCue),
}
