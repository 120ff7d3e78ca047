//! Frame update
//!
//! One `tick` advances the whole simulation by `dt` seconds. The phase order
//! is fixed: ramp, effect timers, long-press timer, spawning, word movement,
//! miss handling, then cosmetic entities. Input is applied between ticks by
//! [`super::input::handle_key`].

use glam::Vec2;

use crate::consts::*;
use crate::sim::events::{GameEvent, RemoveReason, SoundCue};
use crate::sim::spawn;
use crate::sim::state::{GamePhase, GameState, FX_DANGER, FX_SHIELD};

/// Advance the session by `dt` seconds of wall-clock time
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Global speed ramp
    state.game_time += dt;
    if state.game_time - state.last_speed_up > SPEED_RAMP_INTERVAL_SECS {
        state.last_speed_up = state.game_time;
        state.speed_multiplier *= SPEED_RAMP_FACTOR;
        state.push_event(GameEvent::SpeedRamp {
            multiplier: state.speed_multiplier,
        });
        state.push_event(GameEvent::Sound(SoundCue::LevelUp));
        log::info!(
            "speed ramp: t={:.1}s multiplier={:.2}",
            state.game_time,
            state.speed_multiplier
        );
    }

    state.effects.decay(dt);

    // Held backspace wipes the buffer when the timer runs out
    if let Some(remaining) = state.backspace_hold {
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            state.clear_input_buffer();
            state.streak = 0;
            state.push_event(GameEvent::Sound(SoundCue::Error));
        } else {
            state.backspace_hold = Some(remaining);
        }
    }

    // Spawning
    state.spawn_timer_ms += dt * 1000.0;
    let interval = spawn::spawn_interval_ms(
        state.config.difficulty,
        state.config.mode,
        state.level,
        state.speed_multiplier,
    );
    if state.spawn_timer_ms > interval {
        spawn::try_spawn(state);
        state.spawn_timer_ms = 0.0;
    }

    // Word movement. Freeze pins everything in place; once the ramp has
    // fired at least once, every word gets a small flat bonus on top of its
    // spawn-time speed.
    let frozen = state.effects.frozen();
    let bonus = if state.speed_multiplier > 1.0 {
        RAMP_SPEED_BONUS
    } else {
        1.0
    };
    let mut any_obscuring = false;
    for word in &mut state.words {
        if !frozen {
            word.pos.y += word.speed * bonus * dt;
        }
        if word.pos.y > OBSCURE_Y_MIN
            && word.pos.y < OBSCURE_Y_MAX
            && word.pos.x > OBSCURE_X_MIN
            && word.pos.x < OBSCURE_X_MAX
        {
            any_obscuring = true;
        }
    }
    if any_obscuring != state.is_obscuring {
        state.is_obscuring = any_obscuring;
        state.push_event(GameEvent::ObscuringChanged(any_obscuring));
    }

    handle_misses(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    // Cosmetic entities
    for p in &mut state.particles {
        p.pos += p.vel * dt;
        p.life -= dt * PARTICLE_FADE_RATE;
    }
    state.particles.retain(|p| p.life > 0.0);

    for t in &mut state.floating_texts {
        t.pos.y -= FLOAT_RISE_RATE * dt;
        t.life -= dt * FLOAT_FADE_RATE;
    }
    state.floating_texts.retain(|t| t.life > 0.0);
}

/// Remove every word past the danger line and settle the consequences.
///
/// All words that crossed in the same frame are charged as a batch: one life
/// each unless the shield is up, a single streak reset, and at most one
/// game-over transition.
fn handle_misses(state: &mut GameState) {
    let (crashed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.words)
        .into_iter()
        .partition(|w| w.pos.y > DANGER_LINE_Y);
    state.words = kept;
    if crashed.is_empty() {
        return;
    }

    let shielded = state.effects.shielded();
    for word in &crashed {
        state.spawn_explosion(Vec2::new(word.pos.x, CRASH_FX_Y), FX_DANGER, 1.0);
        if shielded {
            state.spawn_floating_text(Vec2::new(word.pos.x, CRASH_TEXT_Y), "BLOCKED", FX_SHIELD);
            state.push_event(GameEvent::Sound(SoundCue::Error));
        } else {
            state.spawn_floating_text(Vec2::new(word.pos.x, CRASH_TEXT_Y), "0p", FX_DANGER);
            state.push_event(GameEvent::Sound(SoundCue::ExplosionSmall));
        }
        state.push_event(GameEvent::EntityRemoved {
            id: word.id,
            reason: RemoveReason::Crashed,
        });
    }

    // If the word being typed just crashed and nothing else matches the
    // buffer, the stale prefix is dropped
    if !state.input_buffer.is_empty() {
        let survives = state
            .words
            .iter()
            .any(|w| w.text.starts_with(&state.input_buffer));
        if !survives {
            state.clear_input_buffer();
        }
    }

    if !shielded {
        state.lives = state.lives.saturating_sub(crashed.len() as u8);
        state.streak = 0;
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::Sound(SoundCue::GameOver));
            let stats = state.stats();
            state.push_event(GameEvent::GameOver(stats));
            log::info!(
                "game over: score={} level={} time={:.1}s",
                stats.score,
                stats.level,
                state.game_time
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::sim::input::{handle_key, KeyInput};
    use crate::sim::state::{SpecialKind, WordEntity};

    fn place(state: &mut GameState, text: &str, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.words.push(WordEntity {
            id,
            text: text.into(),
            pos: Vec2::new(x, y),
            speed: 3.0,
            color: 0,
            special: None,
        });
        id
    }

    #[test]
    fn test_words_fall_by_speed_times_dt() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 50.0, 10.0);
        tick(&mut state, 0.5);
        assert!((state.words[0].pos.y - 11.5).abs() < 1e-5);
    }

    #[test]
    fn test_freeze_halts_words_but_not_its_own_timer() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 50.0, 10.0);
        state.effects.freeze = 3.0;
        tick(&mut state, 0.5);
        assert_eq!(state.words[0].pos.y, 10.0);
        assert!((state.effects.freeze - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_crash_costs_one_life_per_word() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 20.0, 93.5);
        place(&mut state, "pies", 80.0, 94.0);
        tick(&mut state, 0.016);
        assert_eq!(state.lives, START_LIVES - 2);
        assert!(state.words.is_empty());
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn test_shield_absorbs_crashes() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        state.effects.shield = 5.0;
        state.streak = 4;
        place(&mut state, "kot", 20.0, 93.5);
        tick(&mut state, 0.016);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.streak, 4);
        assert!(state.words.is_empty());
        assert!(state
            .floating_texts
            .iter()
            .any(|t| t.text == "BLOCKED"));
    }

    #[test]
    fn test_crash_drops_stale_input_prefix() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 20.0, 50.0);
        handle_key(&mut state, KeyInput::Char('k'));
        state.words[0].pos.y = 94.0;
        tick(&mut state, 0.016);
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn test_crash_keeps_prefix_matching_a_survivor() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 20.0, 50.0);
        place(&mut state, "kura", 80.0, 94.0);
        handle_key(&mut state, KeyInput::Char('k'));
        tick(&mut state, 0.016);
        assert_eq!(state.input_buffer, "k");
    }

    #[test]
    fn test_game_over_on_last_life() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        state.lives = 1;
        place(&mut state, "kot", 20.0, 94.0);
        tick(&mut state, 0.016);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver(stats) if stats.lives == 0)));
        // Terminal: further ticks change nothing
        let snapshot_time = state.game_time;
        tick(&mut state, 1.0);
        assert_eq!(state.game_time, snapshot_time);
    }

    #[test]
    fn test_speed_ramp_fires_on_interval() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        for _ in 0..40 {
            tick(&mut state, 1.0);
        }
        assert!(state.speed_multiplier > 1.0);
        assert!((state.speed_multiplier - SPEED_RAMP_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn test_spawning_follows_the_interval() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        // Sergeant/words level 1 spawns every 2.4 s
        tick(&mut state, 2.0);
        assert!(state.words.is_empty());
        tick(&mut state, 0.5);
        assert_eq!(state.words.len(), 1);
        assert_eq!(state.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_backspace_long_press_clears_buffer() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 20.0, 10.0);
        handle_key(&mut state, KeyInput::Char('k'));
        handle_key(&mut state, KeyInput::Char('o'));
        handle_key(&mut state, KeyInput::Backspace { repeat: false });
        assert_eq!(state.input_buffer, "k");
        state.streak = 3;
        tick(&mut state, 0.3);
        assert_eq!(state.input_buffer, "k");
        tick(&mut state, 0.3);
        assert!(state.input_buffer.is_empty());
        assert_eq!(state.streak, 0);
        assert_eq!(state.backspace_hold, None);
    }

    #[test]
    fn test_release_cancels_long_press() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 20.0, 10.0);
        handle_key(&mut state, KeyInput::Char('k'));
        handle_key(&mut state, KeyInput::Backspace { repeat: false });
        handle_key(&mut state, KeyInput::BackspaceRelease);
        tick(&mut state, 1.0);
        assert!(state.input_buffer.is_empty());
        // Release happened, so no forced clear fired and no error cue beyond
        // the pop itself; buffer emptied by the pop, not the timer
        assert_eq!(state.backspace_hold, None);
    }

    #[test]
    fn test_obscuring_flips_both_ways() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        place(&mut state, "kot", 50.0, 74.0);
        tick(&mut state, 1.0);
        assert!(state.is_obscuring);
        assert!(state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::ObscuringChanged(true))));
        // Freeze it past the zone edge manually and let the flag flip back
        state.words[0].pos.y = 95.0;
        state.effects.shield = 5.0;
        tick(&mut state, 0.016);
        assert!(!state.is_obscuring);
        assert!(state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::ObscuringChanged(false))));
    }

    #[test]
    fn test_particles_and_texts_decay_and_prune() {
        let mut state = GameState::new(SessionConfig::default(), 1);
        state.spawn_explosion(Vec2::new(50.0, 50.0), 0, 1.0);
        state.spawn_floating_text(Vec2::new(50.0, 50.0), "+6p", 0);
        assert_eq!(state.particles.len(), EXPLOSION_PARTICLES);
        tick(&mut state, 0.25);
        assert!(state.particles.iter().all(|p| (p.life - 0.5).abs() < 1e-5));
        assert!((state.floating_texts[0].life - 0.8).abs() < 1e-5);
        tick(&mut state, 0.3);
        assert!(state.particles.is_empty());
        assert!(!state.floating_texts.is_empty());
    }

    #[test]
    fn test_identical_seeds_replay_identically() {
        let script = |state: &mut GameState| {
            for frame in 0..600 {
                tick(state, 1.0 / 60.0);
                if frame % 37 == 0 {
                    handle_key(state, KeyInput::Char('a'));
                }
            }
        };
        let mut a = GameState::new(SessionConfig::default(), 0xDEAD);
        let mut b = GameState::new(SessionConfig::default(), 0xDEAD);
        script(&mut a);
        script(&mut b);
        a.drain_events();
        b.drain_events();
        assert_eq!(a.words, b.words);
        assert_eq!(a.score, b.score);
        assert_eq!(a.game_time, b.game_time);
        assert_eq!(a.lives, b.lives);
    }

    #[test]
    fn test_matched_specials_never_fire_when_bombed_words_crash() {
        // A bomb word crossing the line is just a miss
        let mut state = GameState::new(SessionConfig::default(), 1);
        let id = state.next_entity_id();
        state.words.push(WordEntity {
            id,
            text: "bum".into(),
            pos: Vec2::new(50.0, 94.0),
            speed: 3.0,
            color: 0,
            special: Some(SpecialKind::Bomb),
        });
        place(&mut state, "kot", 50.0, 50.0);
        tick(&mut state, 0.016);
        assert_eq!(state.lives, START_LIVES - 1);
        // The nearby word survives; no blast happened
        assert_eq!(state.words.len(), 1);
    }
}
