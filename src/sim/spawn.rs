//! Word spawning: pacing, placement, and special assignment

use glam::Vec2;
use rand::Rng;

use crate::config::{Difficulty, Mode};
use crate::consts::*;
use crate::sim::events::GameEvent;
use crate::sim::state::{GameState, SpecialKind, WordEntity};
use crate::words;

/// Milliseconds between spawns at the given level.
///
/// Shrinks 100 ms per level but never below the mode floor; the global ramp
/// divides through afterward so the floor itself compresses over time.
pub fn spawn_interval_ms(difficulty: Difficulty, mode: Mode, level: u32, speed_multiplier: f32) -> f32 {
    let base = difficulty.spawn_base_ms() * mode.spawn_factor() - level as f32 * LEVEL_SPAWN_STEP_MS;
    base.max(mode.min_spawn_ms()) / speed_multiplier
}

/// Fall speed for a word spawned at the given level, percent units per second
pub fn fall_speed(difficulty: Difficulty, mode: Mode, level: u32, speed_multiplier: f32) -> f32 {
    (difficulty.fall_base_speed() + level as f32 * LEVEL_SPEED_STEP)
        * mode.speed_factor()
        * speed_multiplier
}

/// Decide whether a freshly spawned word carries a power-up.
///
/// Hearts take priority and appear at most once per level, gated by a 20%
/// roll. Otherwise `band_roll` (0..100) walks the rarity bands. Both rolls
/// are pre-drawn by the caller so the decision stays a pure function.
pub fn assign_special(
    level: u32,
    last_heart_level: u32,
    heart_roll: f32,
    band_roll: f32,
) -> Option<SpecialKind> {
    if level > last_heart_level && heart_roll < HEART_CHANCE {
        return Some(SpecialKind::Heart);
    }
    if band_roll < 1.0 {
        Some(SpecialKind::Shield)
    } else if band_roll < 3.0 {
        Some(SpecialKind::Freeze)
    } else if band_roll < 6.0 {
        Some(SpecialKind::Multiplier)
    } else if band_roll < 11.0 {
        Some(SpecialKind::Bomb)
    } else {
        None
    }
}

/// Pull the next word off the queue and drop it into the field.
///
/// Refills the queue from the dictionary first when it has drained low. An
/// empty source (exhausted dictionary) makes this a no-op.
pub fn try_spawn(state: &mut GameState) {
    if state.queue.needs_refill() {
        let config = state.config;
        let refill = words::fetch_words(
            config.difficulty,
            config.mode,
            config.theme,
            QUEUE_REFILL_COUNT,
            &mut state.rng,
        );
        state.queue.extend(refill);
    }

    let Some(text) = state.queue.take() else {
        log::warn!("word source exhausted, skipping spawn");
        return;
    };

    let padding = state.config.mode.spawn_padding();
    let x = padding + state.rng.random::<f32>() * (FIELD_SIZE - 2.0 * padding);
    let color = state.rng.random_range(0..WORD_COLOR_COUNT);

    // Both rolls are always drawn so the RNG stream does not depend on the
    // heart gate's outcome.
    let heart_roll = state.rng.random::<f32>();
    let band_roll = state.rng.random::<f32>() * 100.0;
    let special = assign_special(state.level, state.last_heart_level, heart_roll, band_roll);
    if special == Some(SpecialKind::Heart) {
        state.last_heart_level = state.level;
    }

    let speed = fall_speed(
        state.config.difficulty,
        state.config.mode,
        state.level,
        state.speed_multiplier,
    );

    let id = state.next_entity_id();
    state.words.push(WordEntity {
        id,
        text,
        pos: Vec2::new(x, SPAWN_Y),
        speed,
        color,
        special,
    });
    state.push_event(GameEvent::EntitySpawned { id, special });
}
