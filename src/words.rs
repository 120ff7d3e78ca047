//! Word source and upcoming-word queue
//!
//! Dictionaries are embedded in the binary at compile time from
//! `data/words.json` and selected by theme and mode. `fetch_words` is the
//! only way word content enters the simulation; everything it returns is
//! shuffled through the session RNG, so sessions replay deterministically
//! from a seed.

use std::collections::VecDeque;
use std::sync::OnceLock;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::config::{Difficulty, Mode, Theme};
use crate::consts::QUEUE_LOW_WATER;

#[derive(Deserialize, Debug, Default)]
struct ThemeDict {
    words: Vec<String>,
    pairs: Vec<String>,
    sentences: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
struct Dictionaries {
    space: ThemeDict,
    animals: ThemeDict,
    percy: ThemeDict,
    potter: ThemeDict,
}

/// Parse the embedded dictionary file once. A parse failure degrades to an
/// empty source, which the spawn path treats as a silent no-op.
fn dictionaries() -> &'static Dictionaries {
    static DICTS: OnceLock<Dictionaries> = OnceLock::new();
    DICTS.get_or_init(|| match serde_json::from_str(include_str!("../data/words.json")) {
        Ok(dicts) => dicts,
        Err(e) => {
            log::error!("embedded dictionary is invalid: {e}");
            Dictionaries::default()
        }
    })
}

/// Fetch up to `count` shuffled entries for the given theme and mode.
///
/// Pure given the RNG: no I/O, no global mutation. Difficulty is part of the
/// word-source contract but the built-in dictionaries do not grade content
/// by it.
pub fn fetch_words(
    _difficulty: Difficulty,
    mode: Mode,
    theme: Theme,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let dicts = dictionaries();
    let themed = match theme {
        Theme::Space => &dicts.space,
        Theme::Animals => &dicts.animals,
        Theme::Percy => &dicts.percy,
        Theme::Potter => &dicts.potter,
    };
    let source = match mode {
        Mode::Words => &themed.words,
        Mode::Pairs => &themed.pairs,
        Mode::Sentences => &themed.sentences,
    };

    let mut pool = source.clone();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// FIFO buffer of upcoming word texts
#[derive(Debug, Clone, Default)]
pub struct WordQueue {
    buf: VecDeque<String>,
}

impl WordQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True once the buffer has drained below the refill watermark
    pub fn needs_refill(&self) -> bool {
        self.buf.len() < QUEUE_LOW_WATER
    }

    pub fn extend(&mut self, words: Vec<String>) {
        self.buf.extend(words);
    }

    /// Pop the next word, or `None` when the source has run dry
    pub fn take(&mut self) -> Option<String> {
        self.buf.pop_front()
    }
}
