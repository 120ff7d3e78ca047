//! Per-session configuration
//!
//! Chosen once on the start screen and immutable for the whole round. The
//! balance tables that hang off these enums drive spawn pacing, fall speed,
//! and scoring.

use serde::{Deserialize, Serialize};

/// Difficulty tiers, mildest to harshest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Recruit,
    Corporal,
    #[default]
    Sergeant,
    Lieutenant,
    General,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Recruit => "recruit",
            Difficulty::Corporal => "corporal",
            Difficulty::Sergeant => "sergeant",
            Difficulty::Lieutenant => "lieutenant",
            Difficulty::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "recruit" => Some(Difficulty::Recruit),
            "corporal" => Some(Difficulty::Corporal),
            "sergeant" => Some(Difficulty::Sergeant),
            "lieutenant" => Some(Difficulty::Lieutenant),
            "general" => Some(Difficulty::General),
            _ => None,
        }
    }

    /// Base spawn interval in ms, before mode and level adjustments
    pub fn spawn_base_ms(&self) -> f32 {
        match self {
            Difficulty::Recruit => 4000.0,
            Difficulty::Corporal => 3000.0,
            Difficulty::Sergeant => 2500.0,
            Difficulty::Lieutenant => 2000.0,
            Difficulty::General => 1500.0,
        }
    }

    /// Base fall speed in percent units per second
    pub fn fall_base_speed(&self) -> f32 {
        match self {
            Difficulty::Recruit => 1.5,
            Difficulty::Corporal => 2.2,
            Difficulty::Sergeant => 3.0,
            Difficulty::Lieutenant => 4.8,
            Difficulty::General => 7.2,
        }
    }

    /// Score multiplier, also the difficulty term of level-threshold growth
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Recruit => 0.5,
            Difficulty::Corporal => 0.8,
            Difficulty::Sergeant => 1.0,
            Difficulty::Lieutenant => 2.0,
            Difficulty::General => 5.0,
        }
    }

    /// Multiplier for the session's starting level threshold.
    ///
    /// Deliberately a different table than [`Self::score_multiplier`]: the
    /// two lowest tiers start at the base threshold.
    pub fn threshold_base_multiplier(&self) -> f64 {
        match self {
            Difficulty::Sergeant => 1.5,
            Difficulty::Lieutenant => 2.0,
            Difficulty::General => 5.0,
            _ => 1.0,
        }
    }
}

/// What kind of text falls: single words, two-word phrases, or full sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Words,
    Pairs,
    Sentences,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Words => "words",
            Mode::Pairs => "pairs",
            Mode::Sentences => "sentences",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "words" => Some(Mode::Words),
            "pairs" => Some(Mode::Pairs),
            "sentences" => Some(Mode::Sentences),
            _ => None,
        }
    }

    /// Longer texts spawn further apart
    pub fn spawn_factor(&self) -> f32 {
        match self {
            Mode::Words => 1.0,
            Mode::Pairs => 1.8,
            Mode::Sentences => 3.5,
        }
    }

    /// Spawn interval never drops below this, regardless of level
    pub fn min_spawn_ms(&self) -> f32 {
        match self {
            Mode::Sentences => 2500.0,
            _ => 800.0,
        }
    }

    /// Longer texts fall slower
    pub fn speed_factor(&self) -> f32 {
        match self {
            Mode::Words => 1.0,
            Mode::Pairs => 0.8,
            Mode::Sentences => 0.5,
        }
    }

    /// Score multiplier
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Mode::Words => 1.0,
            Mode::Pairs => 2.0,
            Mode::Sentences => 5.0,
        }
    }

    /// Mode term of both the initial level threshold and its growth
    pub fn threshold_factor(&self) -> f64 {
        match self {
            Mode::Words => 1.0,
            Mode::Pairs => 2.0,
            Mode::Sentences => 5.0,
        }
    }

    /// Horizontal margin so long texts stay on screen
    pub fn spawn_padding(&self) -> f32 {
        match self {
            Mode::Sentences => 20.0,
            _ => 10.0,
        }
    }
}

/// Word dictionary theme. Cosmetic outside of dictionary selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Space,
    Animals,
    Percy,
    Potter,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Space => "space",
            Theme::Animals => "animals",
            Theme::Percy => "percy",
            Theme::Potter => "potter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "space" => Some(Theme::Space),
            "animals" => Some(Theme::Animals),
            "percy" => Some(Theme::Percy),
            "potter" => Some(Theme::Potter),
            _ => None,
        }
    }
}

/// Everything the session needs to know up front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub theme: Theme,
    /// When set, wrong keystrokes stick in the buffer and must be backspaced
    pub accuracy_mode: bool,
}
