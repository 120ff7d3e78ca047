//! Scoring and level-threshold math
//!
//! All pure functions of the session config and the moment of the match.
//! Intermediate math is f64 and collapses to an integer award at the end.

use crate::config::SessionConfig;

/// Letters worth double the base value
const POLISH_DIACRITICS: &str = "ąćęłńóśźż";

/// Per-character value: diacritics pay double, spaces pay nothing
fn letter_value(c: char) -> u64 {
    if c == ' ' {
        0
    } else if POLISH_DIACRITICS.contains(c) {
        2
    } else {
        1
    }
}

/// Height multiplier. Catching a word early pays up to triple.
fn zone_multiplier(y: f32) -> f64 {
    if y < 35.0 {
        3.0
    } else if y < 70.0 {
        2.0
    } else {
        1.0
    }
}

/// Points awarded for clearing `text` while its top edge sits at `y`.
///
/// `speed_multiplier` is the session-wide ramp value and
/// `multiplier_active` the x2 power-up flag. Never returns zero.
pub fn score_for_word(
    text: &str,
    y: f32,
    config: &SessionConfig,
    speed_multiplier: f32,
    multiplier_active: bool,
) -> u64 {
    let base: u64 = text.chars().map(letter_value).sum();
    let accuracy = if config.accuracy_mode { 2.0 } else { 1.0 };
    let ramp = (speed_multiplier as f64 * 0.5).ceil().max(1.0);
    let power = if multiplier_active { 2.0 } else { 1.0 };

    let total = base as f64
        * zone_multiplier(y)
        * config.difficulty.score_multiplier()
        * config.mode.score_multiplier()
        * accuracy
        * ramp
        * power;
    (total.round() as u64).max(1)
}

/// Score required to leave level 1
pub fn initial_level_threshold(config: &SessionConfig) -> f64 {
    let accuracy = if config.accuracy_mode { 2.0 } else { 1.0 };
    500.0
        * config.difficulty.threshold_base_multiplier()
        * config.mode.threshold_factor()
        * accuracy
}

/// How much further the threshold moves after reaching `level`
pub fn threshold_growth(config: &SessionConfig, level: u32) -> f64 {
    1000.0 * config.difficulty.score_multiplier() * config.mode.threshold_factor()
        + level as f64 * 500.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, Mode, SessionConfig, Theme};

    fn cfg(difficulty: Difficulty, mode: Mode, accuracy: bool) -> SessionConfig {
        SessionConfig {
            difficulty,
            mode,
            theme: Theme::Space,
            accuracy_mode: accuracy,
        }
    }

    #[test]
    fn test_basic_word_mid_zone() {
        // 3 plain letters, middle zone doubles
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        assert_eq!(score_for_word("kot", 50.0, &c, 1.0, false), 6);
    }

    #[test]
    fn test_diacritics_pay_double() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        // "żółw": ż=2 ó=2 ł=2 w=1 -> 7, low zone
        assert_eq!(score_for_word("żółw", 80.0, &c, 1.0, false), 7);
    }

    #[test]
    fn test_spaces_are_free() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        assert_eq!(
            score_for_word("a b", 80.0, &c, 1.0, false),
            score_for_word("ab", 80.0, &c, 1.0, false)
        );
    }

    #[test]
    fn test_zone_monotonicity() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        let high = score_for_word("gwiazda", 10.0, &c, 1.0, false);
        let mid = score_for_word("gwiazda", 50.0, &c, 1.0, false);
        let low = score_for_word("gwiazda", 85.0, &c, 1.0, false);
        assert!(high > mid);
        assert!(mid > low);
    }

    #[test]
    fn test_multiplier_doubles() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        let plain = score_for_word("rakieta", 50.0, &c, 1.0, false);
        let doubled = score_for_word("rakieta", 50.0, &c, 1.0, true);
        assert_eq!(doubled, plain * 2);
    }

    #[test]
    fn test_speed_ramp_scales_award() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        let slow = score_for_word("rakieta", 50.0, &c, 1.0, false);
        let fast = score_for_word("rakieta", 50.0, &c, 4.0, false);
        assert_eq!(fast, slow * 2);
    }

    #[test]
    fn test_never_zero() {
        // Recruit halves the score; a single letter must still pay
        let c = cfg(Difficulty::Recruit, Mode::Words, false);
        assert!(score_for_word("a", 90.0, &c, 1.0, false) >= 1);
    }

    #[test]
    fn test_initial_threshold_tables() {
        assert_eq!(
            initial_level_threshold(&cfg(Difficulty::Recruit, Mode::Words, false)),
            500.0
        );
        assert_eq!(
            initial_level_threshold(&cfg(Difficulty::Sergeant, Mode::Words, false)),
            750.0
        );
        assert_eq!(
            initial_level_threshold(&cfg(Difficulty::General, Mode::Sentences, true)),
            25_000.0
        );
    }

    #[test]
    fn test_threshold_growth_scales_with_level() {
        let c = cfg(Difficulty::Sergeant, Mode::Words, false);
        assert_eq!(threshold_growth(&c, 1), 1500.0);
        assert_eq!(threshold_growth(&c, 2), 2000.0);
        let hard = cfg(Difficulty::General, Mode::Sentences, false);
        assert_eq!(threshold_growth(&hard, 1), 25_500.0);
    }
}
