//! Keystroke handling, word matching, and power-up activation

use glam::Vec2;

use crate::consts::*;
use crate::sim::events::{GameEvent, RemoveReason, SoundCue};
use crate::sim::score;
use crate::sim::state::{
    GamePhase, GameState, SpecialKind, FX_ACCENT, FX_BOMB, FX_DANGER, FX_FREEZE, FX_MULTIPLIER,
    FX_SHIELD,
};

/// One keyboard action, as delivered by the embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable key; filtered through [`is_typable`]
    Char(char),
    /// Backspace press; `repeat` marks OS key-repeat, which must not re-arm
    /// the long-press timer
    Backspace { repeat: bool },
    /// Backspace released before the long press fired
    BackspaceRelease,
}

/// Characters the buffer accepts: space, ASCII letters, and Polish letters.
/// Everything else is ignored before any matching policy applies.
pub fn is_typable(c: char) -> bool {
    c == ' ' || c.is_ascii_alphabetic() || "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ".contains(c)
}

/// Whether any active word starts with `prefix`. The empty prefix matches
/// everything, including an empty field.
fn has_prefix_match(state: &GameState, prefix: &str) -> bool {
    prefix.is_empty() || state.words.iter().any(|w| w.text.starts_with(prefix))
}

/// Apply one key action to the session. No-op after game over.
pub fn handle_key(state: &mut GameState, key: KeyInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    match key {
        KeyInput::Backspace { repeat } => {
            if !state.input_buffer.is_empty() {
                state.input_buffer.pop();
                let buffer = state.input_buffer.clone();
                state.input_error = !has_prefix_match(state, &buffer);
                state.push_event(GameEvent::Sound(SoundCue::Error));
            }
            if !repeat && state.backspace_hold.is_none() {
                state.backspace_hold = Some(BACKSPACE_HOLD_SECS);
            }
        }
        KeyInput::BackspaceRelease => {
            state.backspace_hold = None;
        }
        KeyInput::Char(c) => {
            if !is_typable(c) {
                return;
            }
            let c = c.to_lowercase().next().unwrap_or(c);
            let mut next = state.input_buffer.clone();
            next.push(c);
            let matches = has_prefix_match(state, &next);

            if state.config.accuracy_mode {
                // Wrong keys stick and must be backspaced out
                state.input_buffer = next.clone();
                if matches {
                    state.input_error = false;
                    state.push_event(GameEvent::Sound(SoundCue::Click));
                    resolve_exact_match(state, &next);
                } else {
                    state.input_error = true;
                    state.streak = 0;
                    state.push_event(GameEvent::Sound(SoundCue::Error));
                }
            } else {
                // Wrong keys bounce off the buffer
                if matches {
                    state.input_buffer = next.clone();
                    state.input_error = false;
                    state.push_event(GameEvent::Sound(SoundCue::Click));
                    resolve_exact_match(state, &next);
                } else {
                    state.streak = 0;
                    state.push_event(GameEvent::Sound(SoundCue::Error));
                }
            }
        }
    }
}

/// Clear the first word whose text equals the buffer, if any.
///
/// Scoring, effects, feedback, and level-up all happen here, in this order,
/// so a single keystroke's consequences land in one event batch.
fn resolve_exact_match(state: &mut GameState, input: &str) {
    let Some(index) = state.words.iter().position(|w| w.text == input) else {
        return;
    };
    let word = state.words.remove(index);
    state.clear_input_buffer();

    let points = score::score_for_word(
        &word.text,
        word.pos.y,
        &state.config,
        state.speed_multiplier,
        state.effects.doubled(),
    );
    state.score += points;
    state.push_event(GameEvent::ScoreAwarded {
        amount: points,
        pos: word.pos,
    });

    state.spawn_explosion(word.pos, word.color, 1.0);
    state.push_event(GameEvent::EntityRemoved {
        id: word.id,
        reason: RemoveReason::Matched,
    });

    if let Some(kind) = word.special {
        state.push_event(GameEvent::Sound(SoundCue::PowerUp(kind)));
        state.push_event(GameEvent::EffectActivated(kind));
        apply_special(state, kind, word.pos);
    } else {
        state.spawn_floating_text(word.pos, format!("+{points}p"), FX_ACCENT);
        state.push_event(GameEvent::Sound(SoundCue::ExplosionSmall));
    }

    if state.score as f64 >= state.next_level_threshold {
        state.level += 1;
        state.next_level_threshold += score::threshold_growth(&state.config, state.level);
        state.push_event(GameEvent::LevelUp { level: state.level });
        state.push_event(GameEvent::Sound(SoundCue::LevelUp));
        log::info!("level up: level={} next_threshold={}", state.level, state.next_level_threshold);
    }

    state.streak += 1;
}

/// Trigger a matched power-up's effect at the word's last position
fn apply_special(state: &mut GameState, kind: SpecialKind, pos: Vec2) {
    match kind {
        SpecialKind::Heart => {
            if state.lives < MAX_LIVES {
                state.lives += 1;
                state.spawn_floating_text(pos, "+1 ❤️", FX_DANGER);
            } else {
                state.spawn_floating_text(pos, "MAX ❤️", FX_DANGER);
            }
        }
        SpecialKind::Bomb => {
            state.spawn_floating_text(pos, "BOOM!", FX_BOMB);
            state.spawn_explosion(pos, FX_BOMB, 2.0);
            detonate_bomb(state, pos);
            state.push_event(GameEvent::Sound(SoundCue::ExplosionLarge));
        }
        SpecialKind::Shield => {
            state.effects.shield = SHIELD_SECS;
            state.spawn_floating_text(pos, "SHIELD!", FX_SHIELD);
        }
        SpecialKind::Multiplier => {
            state.effects.multiplier = MULTIPLIER_SECS;
            state.spawn_floating_text(pos, "x2 SCORE!", FX_MULTIPLIER);
        }
        SpecialKind::Freeze => {
            state.effects.freeze = FREEZE_SECS;
            state.spawn_floating_text(pos, "FREEZE!", FX_FREEZE);
        }
    }
}

/// Destroy every word within the blast radius, paying its own score.
///
/// Caught specials never chain: only their points are awarded.
fn detonate_bomb(state: &mut GameState, origin: Vec2) {
    let (caught, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.words)
        .into_iter()
        .partition(|w| w.pos.distance(origin) <= BOMB_RADIUS);
    state.words = kept;

    for word in caught {
        state.spawn_explosion(word.pos, FX_BOMB, 0.7);
        let points = score::score_for_word(
            &word.text,
            word.pos.y,
            &state.config,
            state.speed_multiplier,
            state.effects.doubled(),
        );
        state.score += points;
        state.push_event(GameEvent::ScoreAwarded {
            amount: points,
            pos: word.pos,
        });
        state.spawn_floating_text(word.pos, format!("+{points}"), FX_BOMB);
        state.push_event(GameEvent::EntityRemoved {
            id: word.id,
            reason: RemoveReason::Bombed,
        });
    }
}
