//! Word Rain headless demo
//!
//! Runs a full session with a simple autoplay bot that types the lowest
//! matching word, logging events as they happen. Useful for exercising the
//! simulation end to end and for comparing runs by seed.

use std::cmp::Ordering;

use word_rain::sim::{handle_key, tick, GameEvent, GamePhase, GameState, KeyInput};
use word_rain::SessionConfig;

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let config = SessionConfig::default();
    log::info!("starting session: seed={seed} config={config:?}");

    let mut state = GameState::new(config, seed);
    for frame in 0..MAX_FRAMES {
        tick(&mut state, DT);

        // The bot aims at the word closest to the danger line that still
        // matches the current buffer, one keystroke every few frames.
        if frame % 5 == 0 {
            if let Some(c) = next_bot_key(&state) {
                handle_key(&mut state, KeyInput::Char(c));
            }
        }

        for event in state.drain_events() {
            match event {
                GameEvent::ScoreAwarded { amount, .. } => {
                    log::debug!("scored {amount}");
                }
                GameEvent::EffectActivated(kind) => {
                    log::info!("power-up: {kind:?}");
                }
                GameEvent::LevelUp { level } => {
                    log::info!("reached level {level}");
                }
                GameEvent::GameOver(stats) => {
                    log::info!("final stats: {stats:?}");
                }
                _ => {}
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let stats = state.stats();
    println!(
        "seed {seed}: score {} level {} lives {} streak {}",
        stats.score, stats.level, stats.lives, stats.streak
    );
}

/// Next keystroke toward finishing the lowest word the buffer still matches
fn next_bot_key(state: &GameState) -> Option<char> {
    let buffer = &state.input_buffer;
    let target = state
        .words
        .iter()
        .filter(|w| w.text.starts_with(buffer.as_str()))
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal))?;
    target.text.chars().nth(buffer.chars().count())
}
